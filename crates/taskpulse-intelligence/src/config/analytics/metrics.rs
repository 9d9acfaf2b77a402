// ABOUTME: Productivity metrics configuration: score weights, baselines and task-shape thresholds
// ABOUTME: Shared by the metrics calculator, pattern engine and session tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::{is_positive, weights_sum_to_one};

/// Productivity metrics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Weight of the completion-rate factor in the daily score
    pub completion_weight: f64,
    /// Weight of the volume factor in the daily score
    pub volume_weight: f64,
    /// Weight of the average-priority factor in the daily score
    pub priority_weight: f64,
    /// Weight of the estimated-vs-actual time factor in the daily score
    pub time_weight: f64,
    /// Completed tasks per day that saturate the volume factor
    pub volume_baseline: u32,
    /// Priority at or above which a task counts as high priority
    pub high_priority_threshold: u8,
    /// Tasks longer than this (minutes) can count as deep work
    pub deep_work_min_minutes: u32,
    /// Tasks shorter than this (minutes) count as quick wins
    pub quick_task_max_minutes: u32,
    /// Maximum gap (minutes) between tasks in the same work session
    pub session_gap_minutes: u32,
    /// Focus score weight for deep-work hours
    pub focus_deep_work_weight: f64,
    /// Focus score weight for the inverse interruption count
    pub focus_interruption_weight: f64,
    /// Focus score weight for uninterrupted sessions
    pub focus_session_weight: f64,
    /// Deep-work hours that saturate the focus factor
    pub target_deep_work_hours: f64,
    /// Interruptions at which the interruption factor reaches zero
    pub max_interruptions: f64,
    /// Uninterrupted sessions that saturate the session factor
    pub target_uninterrupted_sessions: f64,
    /// Minimum length (minutes) of an uninterrupted single-task session
    pub min_uninterrupted_minutes: u32,
    /// Actual/estimated ratio below which a task was over-estimated
    pub over_estimate_ratio: f64,
    /// Actual/estimated ratio above which a task was under-estimated
    pub under_estimate_ratio: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            completion_weight: 0.4,
            volume_weight: 0.3,
            priority_weight: 0.2,
            time_weight: 0.1,
            volume_baseline: 10,
            high_priority_threshold: 7,
            deep_work_min_minutes: 60,
            quick_task_max_minutes: 30,
            session_gap_minutes: 15,
            focus_deep_work_weight: 0.5,
            focus_interruption_weight: 0.3,
            focus_session_weight: 0.2,
            target_deep_work_hours: 5.0,
            max_interruptions: 15.0,
            target_uninterrupted_sessions: 5.0,
            min_uninterrupted_minutes: 30,
            over_estimate_ratio: 0.8,
            under_estimate_ratio: 1.2,
        }
    }
}

impl MetricsConfig {
    /// Validate weights and thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when weights don't sum to 1.0 or a threshold is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !weights_sum_to_one(&[
            self.completion_weight,
            self.volume_weight,
            self.priority_weight,
            self.time_weight,
        ]) {
            return Err(ConfigError::InvalidWeights(
                "productivity score weights must be non-negative and sum to 1.0",
            ));
        }

        if !weights_sum_to_one(&[
            self.focus_deep_work_weight,
            self.focus_interruption_weight,
            self.focus_session_weight,
        ]) {
            return Err(ConfigError::InvalidWeights(
                "focus score weights must be non-negative and sum to 1.0",
            ));
        }

        if self.volume_baseline == 0 {
            return Err(ConfigError::ValueOutOfRange("volume_baseline must be > 0"));
        }

        if !(1..=10).contains(&self.high_priority_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "high_priority_threshold must be between 1 and 10",
            ));
        }

        if self.quick_task_max_minutes == 0
            || self.quick_task_max_minutes > self.deep_work_min_minutes
        {
            return Err(ConfigError::InvalidRange(
                "quick_task_max_minutes must be > 0 and <= deep_work_min_minutes",
            ));
        }

        if !is_positive(self.target_deep_work_hours)
            || !is_positive(self.max_interruptions)
            || !is_positive(self.target_uninterrupted_sessions)
        {
            return Err(ConfigError::ValueOutOfRange("focus targets must be > 0"));
        }

        if !is_positive(self.over_estimate_ratio)
            || !is_positive(self.under_estimate_ratio)
            || self.under_estimate_ratio <= self.over_estimate_ratio
        {
            return Err(ConfigError::InvalidRange(
                "under_estimate_ratio must exceed over_estimate_ratio > 0",
            ));
        }

        Ok(())
    }
}
