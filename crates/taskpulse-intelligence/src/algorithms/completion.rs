// ABOUTME: Task completion probability estimators selected once from configuration
// ABOUTME: Implements the additive heuristic and a pre-fitted logistic model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::ConfigError;
use taskpulse_core::errors::AppError;

/// Priority at or above which the heuristic adds its high-priority bonus
const HIGH_PRIORITY: u8 = 8;

/// Priority at or above which the heuristic adds its medium-priority bonus
const MEDIUM_PRIORITY: u8 = 6;

/// Priority at or below which the heuristic applies its low-priority penalty
const LOW_PRIORITY: u8 = 3;

/// Estimates below this (minutes) count as short
const SHORT_TASK_MINUTES: u32 = 30;

/// Estimates above this (minutes) count as long
const LONG_TASK_MINUTES: u32 = 180;

/// Open-task count above which the backlog is heavy
const HEAVY_BACKLOG: usize = 10;

/// Open-task count below which the backlog is light
const LIGHT_BACKLOG: usize = 3;

/// Heuristic adjustments unpacked from the enum variant
#[derive(Debug, Clone, Copy)]
struct HeuristicWeights {
    default_prior: f64,
    min_history: usize,
    high_priority_bonus: f64,
    medium_priority_bonus: f64,
    low_priority_penalty: f64,
    short_task_bonus: f64,
    long_task_penalty: f64,
    peak_hour_bonus: f64,
    heavy_backlog_penalty: f64,
    light_backlog_bonus: f64,
}

/// Inputs to a completion estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionFeatures {
    /// Candidate task priority (1-10)
    pub priority: u8,
    /// Candidate task estimate in minutes
    pub estimated_minutes: u32,
    /// Whether the intended hour is one of the recognised peak hours
    pub in_peak_hours: bool,
    /// Open (pending) tasks right now
    pub open_tasks: usize,
    /// Historical completion rate (0-1)
    pub historical_rate: f64,
    /// Number of tasks backing the historical rate
    pub history_sample: usize,
}

/// One contribution to a completion estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionFactor {
    /// What contributed
    pub name: String,
    /// Signed contribution (probability points for the heuristic, log-odds for logistic)
    pub impact: f64,
}

impl CompletionFactor {
    fn new(name: &str, impact: f64) -> Self {
        Self {
            name: name.to_owned(),
            impact,
        }
    }
}

/// Probability with the factors that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionEstimate {
    /// Probability of completion in 0-1
    pub probability: f64,
    /// Contributing factors, base rate first
    pub factors: Vec<CompletionFactor>,
}

/// Completion probability estimator
///
/// Chosen once when the engine is constructed; there is no runtime fallback
/// between variants.
///
/// - `Heuristic`: additive adjustments on top of a historical prior
/// - `Logistic`: pre-fitted logistic model supplied through configuration
///
/// Both variants are monotone non-decreasing in priority: the heuristic's
/// priority adjustments are ordered and the logistic model rejects a negative
/// priority coefficient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CompletionAlgorithm {
    /// Additive heuristic
    ///
    /// Formula: `p = clamp(prior + priority + duration + peak_hour + backlog, 0, 1)`
    ///
    /// The prior is the user's historical completion rate when enough history
    /// exists, else a fixed default.
    Heuristic {
        /// Prior used when history is too small (default 0.7)
        default_prior: f64,
        /// History sample needed to use the historical rate as prior (default 10)
        min_history: usize,
        /// Bonus for priority >= 8 (default 0.15)
        high_priority_bonus: f64,
        /// Bonus for priority >= 6 (default 0.10)
        medium_priority_bonus: f64,
        /// Penalty for priority <= 3 (default 0.10)
        low_priority_penalty: f64,
        /// Bonus for estimates under 30 minutes (default 0.10)
        short_task_bonus: f64,
        /// Penalty for estimates over 180 minutes (default 0.15)
        long_task_penalty: f64,
        /// Bonus when the intended hour is a peak hour (default 0.10)
        peak_hour_bonus: f64,
        /// Penalty when more than 10 tasks are open (default 0.15)
        heavy_backlog_penalty: f64,
        /// Bonus when fewer than 3 tasks are open (default 0.10)
        light_backlog_bonus: f64,
    },

    /// Pre-fitted logistic model
    ///
    /// Formula: `p = 1 / (1 + e^-(b0 + b1*priority + b2*hours + b3*peak + b4*open + b5*rate))`
    ///
    /// Coefficients come from an offline fit; this engine never trains.
    Logistic {
        /// Intercept b0
        intercept: f64,
        /// Priority coefficient b1, must be >= 0
        priority: f64,
        /// Estimated hours coefficient b2
        estimated_hours: f64,
        /// Peak-hour indicator coefficient b3
        peak_hour: f64,
        /// Open-task count coefficient b4
        open_tasks: f64,
        /// Historical completion rate coefficient b5
        historical_rate: f64,
    },
}

impl Default for CompletionAlgorithm {
    fn default() -> Self {
        Self::Heuristic {
            default_prior: 0.7,
            min_history: 10,
            high_priority_bonus: 0.15,
            medium_priority_bonus: 0.10,
            low_priority_penalty: 0.10,
            short_task_bonus: 0.10,
            long_task_penalty: 0.15,
            peak_hour_bonus: 0.10,
            heavy_backlog_penalty: 0.15,
            light_backlog_bonus: 0.10,
        }
    }
}

impl CompletionAlgorithm {
    /// Default logistic coefficients
    #[must_use]
    pub const fn default_logistic() -> Self {
        Self::Logistic {
            intercept: -1.5,
            priority: 0.25,
            estimated_hours: -0.3,
            peak_hour: 0.4,
            open_tasks: -0.05,
            historical_rate: 2.0,
        }
    }

    /// Estimate the completion probability for the given features
    #[must_use]
    pub fn estimate(&self, features: &CompletionFeatures) -> CompletionEstimate {
        match self {
            Self::Heuristic {
                default_prior,
                min_history,
                high_priority_bonus,
                medium_priority_bonus,
                low_priority_penalty,
                short_task_bonus,
                long_task_penalty,
                peak_hour_bonus,
                heavy_backlog_penalty,
                light_backlog_bonus,
            } => Self::estimate_heuristic(
                HeuristicWeights {
                    default_prior: *default_prior,
                    min_history: *min_history,
                    high_priority_bonus: *high_priority_bonus,
                    medium_priority_bonus: *medium_priority_bonus,
                    low_priority_penalty: *low_priority_penalty,
                    short_task_bonus: *short_task_bonus,
                    long_task_penalty: *long_task_penalty,
                    peak_hour_bonus: *peak_hour_bonus,
                    heavy_backlog_penalty: *heavy_backlog_penalty,
                    light_backlog_bonus: *light_backlog_bonus,
                },
                features,
            ),
            Self::Logistic {
                intercept,
                priority,
                estimated_hours,
                peak_hour,
                open_tasks,
                historical_rate,
            } => {
                let hours = f64::from(features.estimated_minutes) / 60.0;
                let factors = vec![
                    CompletionFactor::new("intercept", *intercept),
                    CompletionFactor::new("priority", priority * f64::from(features.priority)),
                    CompletionFactor::new("estimated_hours", estimated_hours * hours),
                    CompletionFactor::new(
                        "peak_hour",
                        if features.in_peak_hours { *peak_hour } else { 0.0 },
                    ),
                    CompletionFactor::new("open_tasks", open_tasks * features.open_tasks as f64),
                    CompletionFactor::new(
                        "historical_rate",
                        historical_rate * features.historical_rate,
                    ),
                ];
                let log_odds: f64 = factors.iter().map(|f| f.impact).sum();
                let probability = 1.0 / (1.0 + (-log_odds).exp());
                CompletionEstimate {
                    probability: if probability.is_finite() {
                        probability.clamp(0.0, 1.0)
                    } else {
                        0.0
                    },
                    factors,
                }
            }
        }
    }

    fn estimate_heuristic(
        weights: HeuristicWeights,
        features: &CompletionFeatures,
    ) -> CompletionEstimate {
        let HeuristicWeights {
            default_prior,
            min_history,
            high_priority_bonus,
            medium_priority_bonus,
            low_priority_penalty,
            short_task_bonus,
            long_task_penalty,
            peak_hour_bonus,
            heavy_backlog_penalty,
            light_backlog_bonus,
        } = weights;

        let prior = if features.history_sample >= min_history {
            features.historical_rate.clamp(0.0, 1.0)
        } else {
            default_prior
        };

        let mut factors = vec![CompletionFactor::new("base_rate", prior)];

        let priority_impact = if features.priority >= HIGH_PRIORITY {
            high_priority_bonus
        } else if features.priority >= MEDIUM_PRIORITY {
            medium_priority_bonus
        } else if features.priority <= LOW_PRIORITY {
            -low_priority_penalty
        } else {
            0.0
        };
        if priority_impact != 0.0 {
            factors.push(CompletionFactor::new("priority", priority_impact));
        }

        if features.estimated_minutes < SHORT_TASK_MINUTES {
            factors.push(CompletionFactor::new("short_task", short_task_bonus));
        } else if features.estimated_minutes > LONG_TASK_MINUTES {
            factors.push(CompletionFactor::new("long_task", -long_task_penalty));
        }

        if features.in_peak_hours {
            factors.push(CompletionFactor::new("peak_hour", peak_hour_bonus));
        }

        if features.open_tasks > HEAVY_BACKLOG {
            factors.push(CompletionFactor::new("heavy_backlog", -heavy_backlog_penalty));
        } else if features.open_tasks < LIGHT_BACKLOG {
            factors.push(CompletionFactor::new("light_backlog", light_backlog_bonus));
        }

        let probability = factors.iter().map(|f| f.impact).sum::<f64>().clamp(0.0, 1.0);
        CompletionEstimate {
            probability,
            factors,
        }
    }

    /// Check that the estimator is well formed and monotone in priority
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for non-finite parameters, a prior outside 0-1,
    /// negative heuristic adjustments, bonuses that would make a higher priority
    /// score lower, or a negative logistic priority coefficient
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Heuristic {
                default_prior,
                high_priority_bonus,
                medium_priority_bonus,
                low_priority_penalty,
                short_task_bonus,
                long_task_penalty,
                peak_hour_bonus,
                heavy_backlog_penalty,
                light_backlog_bonus,
                ..
            } => {
                if !(0.0..=1.0).contains(default_prior) {
                    return Err(ConfigError::ValueOutOfRange(
                        "heuristic default_prior must be between 0 and 1",
                    ));
                }
                let adjustments = [
                    high_priority_bonus,
                    medium_priority_bonus,
                    low_priority_penalty,
                    short_task_bonus,
                    long_task_penalty,
                    peak_hour_bonus,
                    heavy_backlog_penalty,
                    light_backlog_bonus,
                ];
                if adjustments.iter().any(|a| !a.is_finite() || **a < 0.0) {
                    return Err(ConfigError::ValueOutOfRange(
                        "heuristic adjustments must be finite and >= 0",
                    ));
                }
                if high_priority_bonus < medium_priority_bonus {
                    return Err(ConfigError::InvalidRange(
                        "high_priority_bonus must be >= medium_priority_bonus",
                    ));
                }
                Ok(())
            }
            Self::Logistic {
                intercept,
                priority,
                estimated_hours,
                peak_hour,
                open_tasks,
                historical_rate,
            } => {
                let coefficients = [
                    intercept,
                    priority,
                    estimated_hours,
                    peak_hour,
                    open_tasks,
                    historical_rate,
                ];
                if coefficients.iter().any(|c| !c.is_finite()) {
                    return Err(ConfigError::ValueOutOfRange(
                        "logistic coefficients must be finite",
                    ));
                }
                if *priority < 0.0 {
                    return Err(ConfigError::ValueOutOfRange(
                        "logistic priority coefficient must be >= 0",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Get algorithm name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Heuristic { .. } => "heuristic",
            Self::Logistic { .. } => "logistic",
        }
    }

    /// Get algorithm description
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Heuristic {
                default_prior,
                min_history,
                ..
            } => format!(
                "Heuristic (prior={default_prior:.2} below {min_history} tasks of history)"
            ),
            Self::Logistic {
                intercept,
                priority,
                ..
            } => format!("Logistic (intercept={intercept:.2}, priority={priority:.2})"),
        }
    }
}

impl FromStr for CompletionAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" | "statistical" => Ok(Self::default()),
            "logistic" | "model" | "learned" => Ok(Self::default_logistic()),
            other => Err(AppError::invalid_input(format!(
                "Unknown completion algorithm: {other}. Valid options: heuristic, logistic"
            ))),
        }
    }
}
