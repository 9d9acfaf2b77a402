// ABOUTME: Confidence levels, sample-size tracking and the tagged Prediction result
// ABOUTME: Predictions are either available with confidence or explicitly insufficient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use taskpulse_core::models::Task;

/// Confidence levels for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Sparse data, treat as indicative only
    Low,
    /// Reasonable sample
    Medium,
    /// Large, well-spread sample
    High,
}

impl ConfidenceLevel {
    /// Confidence from a sample count against medium and high bands
    #[must_use]
    pub const fn from_sample(count: usize, medium: usize, high: usize) -> Self {
        if count >= high {
            Self::High
        } else if count >= medium {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

/// How much data backs a conclusion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSize {
    /// Tasks considered
    pub tasks: usize,
    /// Distinct calendar days those tasks were created on
    pub distinct_days: usize,
}

impl SampleSize {
    /// Sample size of a task slice
    #[must_use]
    pub fn of_tasks(tasks: &[Task]) -> Self {
        let days: BTreeSet<_> = tasks.iter().map(Task::created_date).collect();
        Self {
            tasks: tasks.len(),
            distinct_days: days.len(),
        }
    }
}

/// Result of a forecast or extrapolation
///
/// Never a degenerate numeric guess: with too little data the result says so.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Prediction<T> {
    /// Enough data to predict
    Available {
        /// The prediction
        value: T,
        /// How far to trust it
        confidence: ConfidenceLevel,
    },
    /// Not enough data to predict
    Insufficient {
        /// Why no prediction was made
        reason: String,
    },
}

impl<T> Prediction<T> {
    /// Available prediction
    pub const fn available(value: T, confidence: ConfidenceLevel) -> Self {
        Self::Available { value, confidence }
    }

    /// Insufficient-data marker
    pub fn insufficient(reason: impl Into<String>) -> Self {
        Self::Insufficient {
            reason: reason.into(),
        }
    }

    /// Whether a value is available
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// The value, if available
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Available { value, .. } => Some(value),
            Self::Insufficient { .. } => None,
        }
    }

    /// Confidence, `Low` when insufficient
    #[must_use]
    pub const fn confidence(&self) -> ConfidenceLevel {
        match self {
            Self::Available { confidence, .. } => *confidence,
            Self::Insufficient { .. } => ConfidenceLevel::Low,
        }
    }
}
