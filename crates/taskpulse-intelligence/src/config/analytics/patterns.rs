// ABOUTME: Pattern recognition configuration: peak-hour count and sample-size confidence bands
// ABOUTME: Confidence is attached to every pattern, results are never withheld
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Pattern recognition configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Number of hours reported as peak hours
    pub peak_hour_count: usize,
    /// Below this many tasks a pattern has low confidence
    pub low_confidence_tasks: usize,
    /// Below this many distinct days a pattern has low confidence
    pub low_confidence_days: usize,
    /// At or above this many tasks (and days) a pattern has high confidence
    pub high_confidence_tasks: usize,
    /// At or above this many distinct days (and tasks) a pattern has high confidence
    pub high_confidence_days: usize,
    /// Average energy at or above which a mood counts as high energy
    pub high_energy_threshold: f64,
    /// Number of labels reported as best moods
    pub best_mood_count: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            peak_hour_count: 3,
            low_confidence_tasks: 10,
            low_confidence_days: 5,
            high_confidence_tasks: 30,
            high_confidence_days: 14,
            high_energy_threshold: 7.0,
            best_mood_count: 3,
        }
    }
}

impl PatternConfig {
    /// Validate pattern thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when counts are zero or confidence bands are inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.peak_hour_count == 0 || self.peak_hour_count > 24 {
            return Err(ConfigError::ValueOutOfRange(
                "peak_hour_count must be between 1 and 24",
            ));
        }

        if self.high_confidence_tasks < self.low_confidence_tasks
            || self.high_confidence_days < self.low_confidence_days
        {
            return Err(ConfigError::InvalidRange(
                "high confidence sample sizes must be >= low confidence sample sizes",
            ));
        }

        if !(1.0..=10.0).contains(&self.high_energy_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "high_energy_threshold must be between 1 and 10",
            ));
        }

        Ok(())
    }
}
