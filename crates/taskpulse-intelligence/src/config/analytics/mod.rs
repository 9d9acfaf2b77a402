// ABOUTME: Configuration-driven heuristics for the analytics engine replacing magic numbers
// ABOUTME: Provides type-safe, environment-configurable parameters for every component
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

//! Analytics configuration.
//!
//! Every weight and threshold used by the engine is a default here and can be
//! overridden through JSON (all sections are `#[serde(default)]`) or the
//! `TASKPULSE_*` environment variables. Configuration is fixed when the
//! dashboard is constructed and is never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

mod anomaly;
mod error;
mod health;
mod metrics;
mod patterns;
mod prediction;

pub use anomaly::AnomalyConfig;
pub use error::ConfigError;
pub use health::HealthConfig;
pub use metrics::MetricsConfig;
pub use patterns::PatternConfig;
pub use prediction::PredictionConfig;

/// Allowed deviation of a weight sum from 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Main analytics configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Productivity metrics weights and task-shape thresholds
    pub metrics: MetricsConfig,
    /// Pattern recognition thresholds
    pub patterns: PatternConfig,
    /// Prediction thresholds and the completion algorithm
    pub prediction: PredictionConfig,
    /// Anomaly sensitivity and monitor thresholds
    pub anomaly: AnomalyConfig,
    /// Composite health score weights
    pub health: HealthConfig,
}

impl AnalyticsConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an override can't be parsed or the result is invalid
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = env_override("TASKPULSE_ANOMALY_SENSITIVITY")? {
            config.anomaly.sensitivity = value;
        }

        if let Some(value) = env_override("TASKPULSE_VOLUME_BASELINE")? {
            config.metrics.volume_baseline = value;
        }

        if let Some(value) = env_override("TASKPULSE_HIGH_PRIORITY_THRESHOLD")? {
            config.metrics.high_priority_threshold = value;
        }

        if let Some(value) = env_override("TASKPULSE_MIN_FORECAST_WEEKS")? {
            config.prediction.min_forecast_weeks = value;
        }

        if let Some(value) = env_override("TASKPULSE_NEUTRAL_BURNOUT_RISK")? {
            config.health.neutral_burnout_risk = value;
        }

        config.validate()?;
        debug!(
            sensitivity = config.anomaly.sensitivity,
            volume_baseline = config.metrics.volume_baseline,
            algorithm = config.prediction.algorithm.name(),
            "Loaded analytics configuration"
        );
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.metrics.validate()?;
        self.patterns.validate()?;
        self.prediction.validate()?;
        self.anomaly.validate()?;
        self.health.validate()?;
        Ok(())
    }

    /// Copy of this configuration with a different anomaly sensitivity
    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.anomaly.sensitivity = sensitivity;
        self
    }
}

/// Parse an optional environment override
fn env_override<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    env::var(name).map_or(Ok(None), |raw| {
        raw.trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("{name}={raw}")))
    })
}

/// Whether weights are non-negative, finite and sum to 1.0 within tolerance
/// Finite and strictly positive; rejects NaN
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Finite and zero or greater; rejects NaN
fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn weights_sum_to_one(weights: &[f64]) -> bool {
    weights.iter().all(|w| w.is_finite() && *w >= 0.0)
        && (weights.iter().sum::<f64>() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
}
