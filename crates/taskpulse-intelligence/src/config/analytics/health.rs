// ABOUTME: Composite health score configuration: component weights, status bands and neutral risk
// ABOUTME: Neutral burnout risk stands in when no burnout data exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::{is_non_negative, weights_sum_to_one};

/// Anomaly monitors run by the detector
const MONITOR_COUNT: usize = 5;

/// Composite health score configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Weight of today's productivity score
    pub productivity_weight: f64,
    /// Weight of the overall completion rate
    pub completion_weight: f64,
    /// Weight of the inverted burnout risk
    pub burnout_weight: f64,
    /// Weight of the mapped anomaly status
    pub anomaly_weight: f64,
    /// Burnout risk assumed when none can be estimated
    pub neutral_burnout_risk: f64,
    /// Score at or above which health is excellent
    pub excellent_threshold: f64,
    /// Score at or above which health is good
    pub good_threshold: f64,
    /// Score at or above which health is concerning rather than critical
    pub concerning_threshold: f64,
    /// Ranked insights shown in the executive summary
    pub top_insights: usize,
    /// Status values mapped into the score: healthy, warning, critical
    pub anomaly_status_scores: [f64; 3],
    /// Current burnout risk counted as a risk factor
    pub high_current_risk: f64,
    /// Assessment points: high current risk, rising trend, unusual hours, mood, long sessions
    pub risk_points: [u32; 5],
    /// Assessment points at or above which risk is critical, high, moderate
    pub risk_level_points: [u32; 3],
    /// Mood records read by the quick mood check
    pub quick_mood_records: usize,
    /// Change in mood score that the quick check reports as a trend
    pub quick_mood_delta: f64,
    /// Recommendations returned by quick insights
    pub quick_recommendations: usize,
    /// Pending tasks above which quick insights suggests triage
    pub pending_backlog: usize,
    /// Monitors with enough data for medium anomaly confidence
    pub medium_confidence_monitors: usize,
    /// Monitors with enough data for high anomaly confidence
    pub high_confidence_monitors: usize,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            productivity_weight: 0.3,
            completion_weight: 0.2,
            burnout_weight: 0.3,
            anomaly_weight: 0.2,
            neutral_burnout_risk: 0.3,
            excellent_threshold: 80.0,
            good_threshold: 60.0,
            concerning_threshold: 40.0,
            top_insights: 5,
            anomaly_status_scores: [100.0, 60.0, 20.0],
            high_current_risk: 0.6,
            risk_points: [25, 20, 15, 25, 15],
            risk_level_points: [60, 40, 20],
            quick_mood_records: 5,
            quick_mood_delta: 1.0,
            quick_recommendations: 3,
            pending_backlog: 15,
            medium_confidence_monitors: 3,
            high_confidence_monitors: 5,
        }
    }
}

impl HealthConfig {
    /// Validate weights, neutral risk and status bands
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when weights don't sum to 1.0 or bands are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !weights_sum_to_one(&[
            self.productivity_weight,
            self.completion_weight,
            self.burnout_weight,
            self.anomaly_weight,
        ]) {
            return Err(ConfigError::InvalidWeights(
                "health score weights must be non-negative and sum to 1.0",
            ));
        }

        if !self.neutral_burnout_risk.is_finite() || !(0.0..=1.0).contains(&self.neutral_burnout_risk)
        {
            return Err(ConfigError::ValueOutOfRange(
                "neutral_burnout_risk must be between 0 and 1",
            ));
        }

        if !(0.0 <= self.concerning_threshold
            && self.concerning_threshold <= self.good_threshold
            && self.good_threshold <= self.excellent_threshold
            && self.excellent_threshold <= 100.0)
        {
            return Err(ConfigError::InvalidRange(
                "health bands must be ordered concerning <= good <= excellent within 0-100",
            ));
        }

        if self
            .anomaly_status_scores
            .iter()
            .any(|v| !(0.0..=100.0).contains(v))
        {
            return Err(ConfigError::ValueOutOfRange(
                "anomaly_status_scores must lie within 0-100",
            ));
        }

        let [critical, high, moderate] = self.risk_level_points;
        if !(moderate <= high && high <= critical) {
            return Err(ConfigError::InvalidRange(
                "risk_level_points must be ordered critical >= high >= moderate",
            ));
        }

        if !self.high_current_risk.is_finite() || !(0.0..=1.0).contains(&self.high_current_risk) {
            return Err(ConfigError::ValueOutOfRange(
                "high_current_risk must be between 0 and 1",
            ));
        }

        if !is_non_negative(self.quick_mood_delta) {
            return Err(ConfigError::ValueOutOfRange(
                "quick_mood_delta must be >= 0",
            ));
        }

        if self.medium_confidence_monitors > self.high_confidence_monitors
            || self.high_confidence_monitors > MONITOR_COUNT
        {
            return Err(ConfigError::InvalidRange(
                "confidence monitor counts must be ordered medium <= high <= 5",
            ));
        }

        if self.quick_mood_records < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "quick_mood_records must be >= 2",
            ));
        }

        Ok(())
    }
}
