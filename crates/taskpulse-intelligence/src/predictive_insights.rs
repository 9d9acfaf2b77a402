// ABOUTME: Predictive insights: completion probability, weekly forecast, burnout trend and schedule
// ABOUTME: Extrapolations check their sample size first and return Insufficient rather than guess
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

//! # Predictive Insights
//!
//! Short-horizon forecasts built on least-squares fits over small samples.
//! Nothing here is statistically rigorous: forecasts are decision support and
//! carry a confidence level derived from sample size and goodness of fit.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::algorithms::{CompletionAlgorithm, CompletionFactor, CompletionFeatures};
use crate::config::{AnalyticsConfig, PredictionConfig};
use crate::confidence::{ConfidenceLevel, Prediction};
use crate::statistical_analysis::{SignificanceLevel, StatisticalAnalyzer};
use taskpulse_core::constants::{burnout, score};
use taskpulse_core::models::Task;

/// Direction of a fitted trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Rising beyond the trend threshold
    Increasing,
    /// Falling beyond the trend threshold
    Decreasing,
    /// Within the threshold
    Stable,
}

impl Trend {
    fn from_change(change: f64, threshold: f64) -> Self {
        if change > threshold {
            Self::Increasing
        } else if change < -threshold {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        };
        f.write_str(name)
    }
}

/// Outlook category of a weekly forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outlook {
    /// Forecast at or above the excellent threshold
    Excellent,
    /// Forecast at or above the good threshold
    Good,
    /// Forecast at or above the moderate threshold
    Moderate,
    /// Anything lower
    Concerning,
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Concerning => "concerning",
        };
        f.write_str(name)
    }
}

/// Burnout warning tier attached to a predicted risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BurnoutWarning {
    /// Below every tier
    None,
    /// At or above the warning tier
    Warning,
    /// At or above the high tier
    High,
    /// At or above the critical tier
    Critical,
}

impl fmt::Display for BurnoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Warning => "warning",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(name)
    }
}

/// What the user's history says about completing tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionContext {
    /// Recognised peak hours
    pub peak_hours: Vec<u32>,
    /// Pending tasks right now
    pub open_tasks: usize,
    /// completed / total over the history
    pub historical_rate: f64,
    /// Tasks in the history
    pub history_sample: usize,
}

impl CompletionContext {
    /// Context derived from a task history
    #[must_use]
    pub fn from_history(tasks: &[Task], peak_hours: &[u32]) -> Self {
        let completed = tasks.iter().filter(|t| t.is_completed()).count();
        Self {
            peak_hours: peak_hours.to_vec(),
            open_tasks: tasks.iter().filter(|t| t.is_pending()).count(),
            historical_rate: StatisticalAnalyzer::safe_ratio(
                completed as f64,
                tasks.len() as f64,
                0.0,
            ),
            history_sample: tasks.len(),
        }
    }
}

/// Completion probability of one candidate task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionPrediction {
    /// Candidate task
    pub task_id: String,
    /// Probability of completion in 0-1
    pub probability: f64,
    /// Confidence from the history sample size
    pub confidence: ConfidenceLevel,
    /// Advice for the user
    pub recommendation: String,
    /// Factors behind the probability
    pub factors: Vec<CompletionFactor>,
    /// Estimator that produced the probability
    pub algorithm: String,
}

/// Next-week productivity forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyForecast {
    /// Extrapolated score for next week (0-100)
    pub forecast_score: f64,
    /// Category of the forecast
    pub outlook: Outlook,
    /// Direction of the fitted line
    pub trend: Trend,
    /// Points per week
    pub slope: f64,
    /// Goodness of fit
    pub r_squared: f64,
    /// Weekly scores behind the fit
    pub data_points: usize,
    /// Approximate p-value of the slope
    pub p_value: Option<f64>,
    /// Significance band of the p-value
    pub significance: SignificanceLevel,
}

/// Projected burnout trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnoutTrend {
    /// Latest value in the series
    pub current_risk: f64,
    /// Fitted value at the horizon past the latest point (0-1)
    pub predicted_risk_7_days: f64,
    /// Direction of the fitted change over the horizon
    pub trend: Trend,
    /// Fitted change per day
    pub slope_per_day: f64,
    /// Tier of the predicted risk
    pub warning: BurnoutWarning,
    /// Advice for the tier
    pub recommendation: String,
    /// Values behind the fit
    pub data_points: usize,
}

/// Kind of slot a task was placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    /// One of the recognised peak hours
    PeakHour,
    /// Default afternoon slot
    Afternoon,
    /// Filler between larger tasks
    Anytime,
}

/// Suggested slot for a pending task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSuggestion {
    /// Pending task
    pub task_id: String,
    /// Task title
    pub title: String,
    /// Task priority
    pub priority: u8,
    /// Task estimate in minutes
    pub estimated_minutes: u32,
    /// Hour of day, `None` for anytime
    pub suggested_hour: Option<u32>,
    /// Kind of slot
    pub slot: SlotKind,
    /// Why the task landed there
    pub reason: String,
}

/// All predictions for a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictiveReport {
    /// Completion predictions for the leading pending tasks
    pub task_predictions: Vec<CompletionPrediction>,
    /// Next-week forecast
    pub weekly_forecast: Prediction<WeeklyForecast>,
    /// Burnout trajectory
    pub burnout_trend: Prediction<BurnoutTrend>,
    /// Suggested slots
    pub schedule: Vec<ScheduleSuggestion>,
    /// Summary advice
    pub insights: Vec<String>,
    /// Estimator used for completion predictions
    pub algorithm: String,
}

/// Predictive insights generator
#[derive(Debug, Clone)]
pub struct PredictiveInsights {
    config: PredictionConfig,
    high_priority_threshold: u8,
    quick_task_max_minutes: u32,
}

impl Default for PredictiveInsights {
    fn default() -> Self {
        Self::new(&AnalyticsConfig::default())
    }
}

impl PredictiveInsights {
    /// Creates a generator; the completion algorithm is fixed here
    #[must_use]
    pub fn new(config: &AnalyticsConfig) -> Self {
        debug!(
            algorithm = %config.prediction.algorithm.description(),
            "Completion estimator selected"
        );
        Self {
            config: config.prediction.clone(),
            high_priority_threshold: config.metrics.high_priority_threshold,
            quick_task_max_minutes: config.metrics.quick_task_max_minutes,
        }
    }

    /// Completion estimator in use
    #[must_use]
    pub const fn algorithm(&self) -> &CompletionAlgorithm {
        &self.config.algorithm
    }

    /// Probability that `task` gets completed if worked at `intended_hour`
    #[must_use]
    pub fn completion_probability(
        &self,
        task: &Task,
        intended_hour: Option<u32>,
        context: &CompletionContext,
    ) -> CompletionPrediction {
        let features = CompletionFeatures {
            priority: task.priority(),
            estimated_minutes: task.estimated_minutes(),
            in_peak_hours: intended_hour.is_some_and(|h| context.peak_hours.contains(&h)),
            open_tasks: context.open_tasks,
            historical_rate: context.historical_rate,
            history_sample: context.history_sample,
        };
        let estimate = self.config.algorithm.estimate(&features);
        let probability = estimate.probability.clamp(0.0, 1.0);

        let recommendation = if probability >= 0.8 {
            "Great! This task is highly likely to be completed today."
        } else if probability >= 0.6 {
            "Good chance of completion. Stay focused!"
        } else {
            "This might be challenging. Consider breaking it into smaller tasks."
        };

        CompletionPrediction {
            task_id: task.id().to_owned(),
            probability,
            confidence: ConfidenceLevel::from_sample(
                context.history_sample,
                self.config.medium_confidence_history,
                self.config.high_confidence_history,
            ),
            recommendation: recommendation.to_owned(),
            factors: estimate.factors,
            algorithm: self.config.algorithm.name().to_owned(),
        }
    }

    /// Forecast next week's score from prior weekly scores
    #[must_use]
    pub fn forecast_weekly(&self, scores: &[f64]) -> Prediction<WeeklyForecast> {
        let c = &self.config;
        if scores.len() < c.min_forecast_weeks {
            return Prediction::insufficient(format!(
                "Need at least {} weekly scores to forecast, got {}",
                c.min_forecast_weeks,
                scores.len()
            ));
        }

        let fit = match StatisticalAnalyzer::linear_regression(scores) {
            Ok(fit) => fit,
            Err(e) => {
                warn!(error = %e, "Weekly forecast regression failed");
                return Prediction::insufficient(e.message);
            }
        };

        let forecast_score = fit.predict(scores.len() as f64).clamp(score::MIN, score::MAX);
        let outlook = if forecast_score >= c.excellent_outlook {
            Outlook::Excellent
        } else if forecast_score >= c.good_outlook {
            Outlook::Good
        } else if forecast_score >= c.moderate_outlook {
            Outlook::Moderate
        } else {
            Outlook::Concerning
        };

        let confidence = if scores.len() >= c.forecast_high_points && fit.r_squared >= c.high_r_squared
        {
            ConfidenceLevel::High
        } else if scores.len() >= c.forecast_medium_points && fit.r_squared >= c.medium_r_squared {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        };

        let forecast = WeeklyForecast {
            forecast_score,
            outlook,
            trend: Trend::from_change(fit.slope, c.forecast_trend_slope),
            slope: fit.slope,
            r_squared: fit.r_squared,
            data_points: scores.len(),
            p_value: fit.p_value,
            significance: SignificanceLevel::from_p_value(fit.p_value),
        };
        debug!(
            forecast = forecast.forecast_score,
            outlook = %forecast.outlook,
            slope = forecast.slope,
            confidence = %confidence,
            "Forecast next week"
        );
        Prediction::available(forecast, confidence)
    }

    /// Extrapolate the burnout series over the configured horizon
    #[must_use]
    pub fn burnout_trend(&self, history: &[f64]) -> Prediction<BurnoutTrend> {
        let c = &self.config;
        let window = &history[history.len().saturating_sub(c.burnout_window)..];
        if window.len() < c.min_burnout_points {
            return Prediction::insufficient(format!(
                "Need at least {} burnout observations, got {}",
                c.min_burnout_points,
                window.len()
            ));
        }

        let fit = match StatisticalAnalyzer::linear_regression(window) {
            Ok(fit) => fit,
            Err(e) => {
                warn!(error = %e, "Burnout trend regression failed");
                return Prediction::insufficient(e.message);
            }
        };

        let last_index = (window.len() - 1) as f64;
        let predicted = fit
            .predict(last_index + c.burnout_horizon_days)
            .clamp(burnout::MIN_RISK, burnout::MAX_RISK);
        let warning = self.warning_for(predicted);

        let confidence = if window.len() >= c.burnout_window && fit.r_squared >= c.high_r_squared {
            ConfidenceLevel::High
        } else if window.len() >= c.burnout_window || fit.r_squared >= c.medium_r_squared {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        };

        let current_risk = window.last().copied().unwrap_or_default();
        Prediction::available(
            BurnoutTrend {
                current_risk,
                predicted_risk_7_days: predicted,
                trend: Trend::from_change(
                    fit.slope * c.burnout_horizon_days,
                    c.burnout_trend_threshold,
                ),
                slope_per_day: fit.slope,
                warning,
                recommendation: burnout_recommendation(warning).to_owned(),
                data_points: window.len(),
            },
            confidence,
        )
    }

    /// Warning tier of a burnout risk value
    #[must_use]
    pub fn warning_for(&self, risk: f64) -> BurnoutWarning {
        if risk >= self.config.critical_burnout {
            BurnoutWarning::Critical
        } else if risk >= self.config.high_burnout {
            BurnoutWarning::High
        } else if risk >= self.config.warning_burnout {
            BurnoutWarning::Warning
        } else {
            BurnoutWarning::None
        }
    }

    /// Greedy slot suggestions for pending tasks
    ///
    /// Tasks are taken by priority (highest first, shorter first among equals)
    /// and capped before placement. Each peak hour holds a fixed number of
    /// minutes; high-priority tasks claim peak capacity first, quick tasks fill
    /// what remains, everything else goes to the afternoon slot.
    #[must_use]
    pub fn optimal_schedule(&self, pending: &[Task], peak_hours: &[u32]) -> Vec<ScheduleSuggestion> {
        let c = &self.config;
        let mut hours: Vec<u32> = if peak_hours.is_empty() {
            c.default_peak_hours.clone()
        } else {
            peak_hours.to_vec()
        };
        hours.sort_unstable();
        hours.dedup();
        let mut capacity: Vec<(u32, u32)> = hours
            .into_iter()
            .map(|h| (h, c.peak_hour_capacity_minutes))
            .collect();

        let mut candidates: Vec<&Task> = pending.iter().filter(|t| t.is_pending()).collect();
        candidates.sort_by(|a, b| {
            b.priority()
                .cmp(&a.priority())
                .then(a.estimated_minutes().cmp(&b.estimated_minutes()))
        });
        candidates.truncate(c.max_schedule_suggestions);

        let mut suggestions: Vec<ScheduleSuggestion> = candidates
            .into_iter()
            .map(|task| {
                let estimate = task.estimated_minutes();
                let (suggested_hour, slot, reason) = if task.priority()
                    >= self.high_priority_threshold
                {
                    let needed = estimate.min(c.peak_hour_capacity_minutes);
                    match claim(&mut capacity, needed, estimate) {
                        Some(hour) => (
                            Some(hour),
                            SlotKind::PeakHour,
                            "High priority - schedule during peak productivity",
                        ),
                        None => (
                            Some(c.afternoon_slot_hour),
                            SlotKind::Afternoon,
                            "High priority but peak hours are full - afternoon slot",
                        ),
                    }
                } else if estimate < self.quick_task_max_minutes {
                    match claim(&mut capacity, estimate, estimate) {
                        Some(hour) => (
                            Some(hour),
                            SlotKind::PeakHour,
                            "Short task - fits the remaining peak-hour gap",
                        ),
                        None => (
                            None,
                            SlotKind::Anytime,
                            "Short task - use as filler between larger tasks",
                        ),
                    }
                } else {
                    (
                        Some(c.afternoon_slot_hour),
                        SlotKind::Afternoon,
                        "Standard priority - afternoon slot works well",
                    )
                };

                ScheduleSuggestion {
                    task_id: task.id().to_owned(),
                    title: task.title().to_owned(),
                    priority: task.priority(),
                    estimated_minutes: estimate,
                    suggested_hour,
                    slot,
                    reason: reason.to_owned(),
                }
            })
            .collect();

        suggestions.sort_by(|a, b| {
            a.suggested_hour
                .unwrap_or(u32::MAX)
                .cmp(&b.suggested_hour.unwrap_or(u32::MAX))
                .then(b.priority.cmp(&a.priority))
        });
        suggestions
    }

    /// Predictions, forecast, burnout trend and schedule for a snapshot
    #[must_use]
    pub fn insights_report(
        &self,
        tasks: &[Task],
        peak_hours: &[u32],
        weekly_scores: &[f64],
        burnout_history: &[f64],
    ) -> PredictiveReport {
        let schedule = self.optimal_schedule(tasks, peak_hours);
        let context = CompletionContext::from_history(tasks, peak_hours);

        let mut pending: Vec<&Task> = tasks.iter().filter(|t| t.is_pending()).collect();
        pending.sort_by(|a, b| {
            b.priority()
                .cmp(&a.priority())
                .then(a.created_at().cmp(&b.created_at()))
        });
        let task_predictions: Vec<CompletionPrediction> = pending
            .into_iter()
            .take(self.config.top_pending_predictions)
            .map(|task| {
                let hour = schedule
                    .iter()
                    .find(|s| s.task_id == task.id())
                    .and_then(|s| s.suggested_hour);
                self.completion_probability(task, hour, &context)
            })
            .collect();

        let weekly_forecast = self.forecast_weekly(weekly_scores);
        let burnout_trend = self.burnout_trend(burnout_history);
        let insights = summary_insights(&task_predictions, &weekly_forecast, &burnout_trend);

        debug!(
            predictions = task_predictions.len(),
            forecast_available = weekly_forecast.is_available(),
            burnout_available = burnout_trend.is_available(),
            scheduled = schedule.len(),
            "Generated predictive insights"
        );

        PredictiveReport {
            task_predictions,
            weekly_forecast,
            burnout_trend,
            schedule,
            insights,
            algorithm: self.config.algorithm.name().to_owned(),
        }
    }
}

/// First peak hour with at least `needed` minutes left; consumes up to `wanted`
fn claim(capacity: &mut [(u32, u32)], needed: u32, wanted: u32) -> Option<u32> {
    let slot = capacity.iter_mut().find(|(_, left)| *left >= needed && *left > 0)?;
    slot.1 -= wanted.min(slot.1);
    Some(slot.0)
}

const fn burnout_recommendation(warning: BurnoutWarning) -> &'static str {
    match warning {
        BurnoutWarning::Critical => {
            "Take immediate action: reduce workload, schedule time off, delegate tasks."
        }
        BurnoutWarning::High => {
            "Be proactive: increase break frequency, avoid overtime, prioritize self-care."
        }
        BurnoutWarning::Warning => {
            "Monitor closely: maintain current pace, don't add extra commitments."
        }
        BurnoutWarning::None => "Continue current practices: you're managing burnout risk well.",
    }
}

fn summary_insights(
    predictions: &[CompletionPrediction],
    forecast: &Prediction<WeeklyForecast>,
    burnout: &Prediction<BurnoutTrend>,
) -> Vec<String> {
    let mut insights = Vec::new();

    let likely = predictions.iter().filter(|p| p.probability >= 0.7).count();
    if likely > 0 {
        insights.push(format!("{likely} tasks have high completion probability today!"));
    }
    let unlikely = predictions.iter().filter(|p| p.probability < 0.5).count();
    if unlikely > 0 {
        insights.push(format!(
            "{unlikely} tasks may be challenging - consider breaking them down."
        ));
    }

    match forecast.value().map(|f| f.outlook) {
        Some(Outlook::Excellent) => {
            insights.push("Next week looks great! You're on an upward trend.".to_owned());
        }
        Some(Outlook::Concerning) => {
            insights.push("Next week may be challenging. Plan accordingly.".to_owned());
        }
        _ => {}
    }

    if let Some(trend) = burnout.value().filter(|t| t.warning != BurnoutWarning::None) {
        insights.push(format!(
            "Burnout risk is {} ({:.0}% predicted in 7 days). {}",
            trend.warning,
            trend.predicted_risk_7_days * 100.0,
            trend.recommendation
        ));
    }

    insights
}
