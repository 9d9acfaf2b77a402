// ABOUTME: Default upstream burnout estimator deriving daily risk from mood and energy
// ABOUTME: Produces the time-ordered 0-1 series consumed by the burnout trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use taskpulse_core::constants::{burnout, mood_scale};
use taskpulse_core::models::MoodRecord;

/// Burnout risk for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBurnoutRisk {
    /// Calendar date (UTC)
    pub date: NaiveDate,
    /// Average risk of that day's observations (0-1)
    pub risk: f64,
    /// Observations behind the value
    pub observations: usize,
}

/// Estimates burnout risk when the caller supplies none
///
/// A single observation scores `(2*MAX - mood - energy) / (2*MAX - 2*MIN)`,
/// so mood 10 and energy 10 give 0 and mood 1 and energy 1 give 1.
pub struct BurnoutEstimator;

impl BurnoutEstimator {
    /// Risk of a single mood observation
    #[must_use]
    pub fn observation_risk(record: &MoodRecord) -> f64 {
        let ceiling = 2.0 * f64::from(mood_scale::MAX);
        let span = 2.0 * f64::from(mood_scale::MAX - mood_scale::MIN);
        let raw = (ceiling - f64::from(record.mood_score) - f64::from(record.energy_level)) / span;
        raw.clamp(burnout::MIN_RISK, burnout::MAX_RISK)
    }

    /// Daily average risk in chronological order
    #[must_use]
    pub fn daily_risk(moods: &[MoodRecord]) -> Vec<DailyBurnoutRisk> {
        let mut by_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
        for record in moods {
            let entry = by_day.entry(record.date()).or_insert((0.0, 0));
            entry.0 += Self::observation_risk(record);
            entry.1 += 1;
        }

        by_day
            .into_iter()
            .map(|(date, (total, observations))| DailyBurnoutRisk {
                date,
                risk: total / observations as f64,
                observations,
            })
            .collect()
    }

    /// Daily risk values only
    #[must_use]
    pub fn risk_series(moods: &[MoodRecord]) -> Vec<f64> {
        Self::daily_risk(moods).into_iter().map(|d| d.risk).collect()
    }
}
