// ABOUTME: Anomaly detection configuration: sensitivity and per-monitor baselines and thresholds
// ABOUTME: Sensitivity scales every threshold through the multiplier 1.5 - sensitivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::is_positive;

/// Anomaly detection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// Sensitivity in 0-1, higher means lower thresholds and more alerts
    pub sensitivity: f64,
    /// Base fraction of completions in an unusual bucket that is anomalous
    pub unusual_hours_fraction: f64,
    /// Standard deviations below the baseline mean that count as a drop
    pub drop_std_devs: f64,
    /// Trailing entries used as the productivity baseline
    pub drop_baseline_days: usize,
    /// Minimum baseline entries before a day can be judged
    pub drop_min_baseline: usize,
    /// Most recent entries checked for drops and spikes
    pub recent_window_days: usize,
    /// Drops within the window that raise an alert
    pub min_drops_for_alert: usize,
    /// Consecutive drops that raise an alert
    pub consecutive_drops_for_alert: usize,
    /// Floor for the baseline standard deviation of daily scores
    pub min_score_std_dev: f64,
    /// Days in each mood comparison window
    pub mood_window_days: i64,
    /// Mood change (points) at or beyond which mood is declining or improving
    pub mood_change_threshold: f64,
    /// Mood score at or below which a day is concerning
    pub concerning_mood_score: u8,
    /// Energy level at or below which a day is concerning
    pub concerning_energy_level: u8,
    /// Concerning days that raise mood severity to high
    pub concerning_days_for_high: usize,
    /// Mood records required before mood is judged
    pub min_mood_records: usize,
    /// Standard deviations above the baseline that count as a workload spike
    pub spike_std_devs: f64,
    /// Trailing active days used as the workload baseline
    pub spike_baseline_days: usize,
    /// Minimum baseline days before a day can be judged
    pub spike_min_baseline: usize,
    /// Spikes within the window that raise an alert
    pub min_spikes_for_alert: usize,
    /// Floor for the baseline standard deviation of daily task counts
    pub min_count_std_dev: f64,
    /// Session length (hours) flagged as extended
    pub extended_session_hours: f64,
    /// Session length (hours) flagged as critical
    pub critical_session_hours: f64,
    /// Skip idle Saturdays and Sundays when judging productivity drops
    pub idle_weekends_are_rest: bool,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.7,
            unusual_hours_fraction: 0.30,
            drop_std_devs: 1.5,
            drop_baseline_days: 14,
            drop_min_baseline: 7,
            recent_window_days: 7,
            min_drops_for_alert: 2,
            consecutive_drops_for_alert: 3,
            min_score_std_dev: 1.0,
            mood_window_days: 7,
            mood_change_threshold: 1.5,
            concerning_mood_score: 4,
            concerning_energy_level: 3,
            concerning_days_for_high: 4,
            min_mood_records: 5,
            spike_std_devs: 2.0,
            spike_baseline_days: 14,
            spike_min_baseline: 5,
            min_spikes_for_alert: 2,
            min_count_std_dev: 0.5,
            extended_session_hours: 4.0,
            critical_session_hours: 6.0,
            idle_weekends_are_rest: true,
        }
    }
}

impl AnomalyConfig {
    /// Threshold multiplier derived from sensitivity
    ///
    /// 0.5 leaves base thresholds unchanged; higher sensitivity shrinks them.
    #[must_use]
    pub fn threshold_multiplier(&self) -> f64 {
        1.5 - self.sensitivity
    }

    /// Validate sensitivity and monitor thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when sensitivity is outside 0-1 or a threshold is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sensitivity.is_finite() || !(0.0..=1.0).contains(&self.sensitivity) {
            return Err(ConfigError::ValueOutOfRange(
                "sensitivity must be between 0 and 1",
            ));
        }

        if !(0.0..=1.0).contains(&self.unusual_hours_fraction) {
            return Err(ConfigError::ValueOutOfRange(
                "unusual_hours_fraction must be between 0 and 1",
            ));
        }

        if !is_positive(self.drop_std_devs) || !is_positive(self.spike_std_devs) {
            return Err(ConfigError::ValueOutOfRange(
                "standard deviation thresholds must be > 0",
            ));
        }

        if self.drop_min_baseline < 2
            || self.spike_min_baseline < 2
            || self.drop_baseline_days < self.drop_min_baseline
            || self.spike_baseline_days < self.spike_min_baseline
        {
            return Err(ConfigError::InvalidRange(
                "baselines need at least 2 entries and baseline windows must cover the minimum",
            ));
        }

        if self.recent_window_days == 0 || self.mood_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange("windows must be > 0 days"));
        }

        if !is_positive(self.mood_change_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "mood_change_threshold must be > 0",
            ));
        }

        if !is_positive(self.min_score_std_dev) || !is_positive(self.min_count_std_dev) {
            return Err(ConfigError::ValueOutOfRange(
                "standard deviation floors must be > 0",
            ));
        }

        if !is_positive(self.extended_session_hours)
            || !is_positive(self.critical_session_hours)
            || self.critical_session_hours < self.extended_session_hours
        {
            return Err(ConfigError::InvalidRange(
                "critical_session_hours must be >= extended_session_hours > 0",
            ));
        }

        Ok(())
    }
}
