// ABOUTME: Predictive insights configuration: completion algorithm, forecast and burnout thresholds
// ABOUTME: Includes the greedy schedule capacity and slot defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::{is_non_negative, is_positive};
use crate::algorithms::CompletionAlgorithm;

/// Predictive insights configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Completion probability estimator, fixed when the engine is built
    pub algorithm: CompletionAlgorithm,
    /// History sample at which completion confidence becomes medium
    pub medium_confidence_history: usize,
    /// History sample at which completion confidence becomes high
    pub high_confidence_history: usize,
    /// Weekly scores required before a forecast is attempted
    pub min_forecast_weeks: usize,
    /// Complete weeks of history fed to the forecast
    pub history_weeks: usize,
    /// Forecast score at or above which the outlook is excellent
    pub excellent_outlook: f64,
    /// Forecast score at or above which the outlook is good
    pub good_outlook: f64,
    /// Forecast score at or above which the outlook is moderate
    pub moderate_outlook: f64,
    /// Weekly slope (score points) beyond which the forecast trend is not stable
    pub forecast_trend_slope: f64,
    /// Data points needed for a high-confidence forecast
    pub forecast_high_points: usize,
    /// Data points needed for a medium-confidence forecast
    pub forecast_medium_points: usize,
    /// R-squared needed for a high-confidence forecast
    pub high_r_squared: f64,
    /// R-squared needed for a medium-confidence forecast
    pub medium_r_squared: f64,
    /// Most recent burnout values considered by the trend
    pub burnout_window: usize,
    /// Burnout values required before a trend is attempted
    pub min_burnout_points: usize,
    /// Days past the last point at which burnout is extrapolated
    pub burnout_horizon_days: f64,
    /// Fitted change over the horizon beyond which burnout is trending
    pub burnout_trend_threshold: f64,
    /// Predicted risk at or above which the warning is critical
    pub critical_burnout: f64,
    /// Predicted risk at or above which the warning is high
    pub high_burnout: f64,
    /// Predicted risk at or above which a warning is raised
    pub warning_burnout: f64,
    /// Peak hours used for scheduling when none are recognised
    pub default_peak_hours: Vec<u32>,
    /// Minutes of work each peak hour can hold
    pub peak_hour_capacity_minutes: u32,
    /// Hour used for tasks that don't go into peak hours
    pub afternoon_slot_hour: u32,
    /// Maximum number of schedule suggestions
    pub max_schedule_suggestions: usize,
    /// Pending tasks that receive a completion prediction in reports
    pub top_pending_predictions: usize,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            algorithm: CompletionAlgorithm::default(),
            medium_confidence_history: 10,
            high_confidence_history: 30,
            min_forecast_weeks: 3,
            history_weeks: 8,
            excellent_outlook: 75.0,
            good_outlook: 60.0,
            moderate_outlook: 45.0,
            forecast_trend_slope: 1.0,
            forecast_high_points: 8,
            forecast_medium_points: 5,
            high_r_squared: 0.7,
            medium_r_squared: 0.4,
            burnout_window: 7,
            min_burnout_points: 5,
            burnout_horizon_days: 7.0,
            burnout_trend_threshold: 0.1,
            critical_burnout: 0.70,
            high_burnout: 0.50,
            warning_burnout: 0.40,
            default_peak_hours: vec![9, 10, 11],
            peak_hour_capacity_minutes: 60,
            afternoon_slot_hour: 14,
            max_schedule_suggestions: 10,
            top_pending_predictions: 5,
        }
    }
}

impl PredictionConfig {
    /// Validate prediction thresholds and the completion algorithm
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a threshold is out of range, tiers are out of
    /// order, or the completion algorithm is not monotone in priority
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.algorithm.validate()?;

        if self.high_confidence_history < self.medium_confidence_history {
            return Err(ConfigError::InvalidRange(
                "high_confidence_history must be >= medium_confidence_history",
            ));
        }

        if self.min_forecast_weeks < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_forecast_weeks must be >= 2 for a regression",
            ));
        }

        if !(self.moderate_outlook <= self.good_outlook
            && self.good_outlook <= self.excellent_outlook
            && (0.0..=100.0).contains(&self.moderate_outlook)
            && (0.0..=100.0).contains(&self.excellent_outlook))
        {
            return Err(ConfigError::InvalidRange(
                "outlook thresholds must be ordered moderate <= good <= excellent within 0-100",
            ));
        }

        if !is_non_negative(self.forecast_trend_slope)
            || !is_non_negative(self.burnout_trend_threshold)
        {
            return Err(ConfigError::ValueOutOfRange(
                "trend thresholds must be >= 0",
            ));
        }

        if !(0.0..=1.0).contains(&self.medium_r_squared)
            || !(0.0..=1.0).contains(&self.high_r_squared)
            || self.high_r_squared < self.medium_r_squared
        {
            return Err(ConfigError::InvalidRange(
                "r-squared thresholds must lie in 0-1 with high >= medium",
            ));
        }

        if self.min_burnout_points < 2 || self.burnout_window < self.min_burnout_points {
            return Err(ConfigError::InvalidRange(
                "burnout_window must be >= min_burnout_points >= 2",
            ));
        }

        if !is_positive(self.burnout_horizon_days) {
            return Err(ConfigError::ValueOutOfRange(
                "burnout_horizon_days must be > 0",
            ));
        }

        if !(0.0 <= self.warning_burnout
            && self.warning_burnout <= self.high_burnout
            && self.high_burnout <= self.critical_burnout
            && self.critical_burnout <= 1.0)
        {
            return Err(ConfigError::InvalidRange(
                "burnout tiers must be ordered warning <= high <= critical within 0-1",
            ));
        }

        if self.default_peak_hours.is_empty() || self.default_peak_hours.iter().any(|h| *h > 23)
        {
            return Err(ConfigError::ValueOutOfRange(
                "default_peak_hours must be non-empty hours of day",
            ));
        }

        if self.afternoon_slot_hour > 23 || self.peak_hour_capacity_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "afternoon_slot_hour must be an hour of day and peak capacity > 0",
            ));
        }

        Ok(())
    }
}
