// ABOUTME: Analytics dashboard aggregating metrics, patterns, predictions and anomalies
// ABOUTME: Folds component outputs into a composite health score and four response views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

//! # Analytics Dashboard
//!
//! The dashboard owns one instance of every component, built once from a
//! validated [`AnalyticsConfig`]. Views never fail: a component without
//! enough data contributes a neutral value and a low confidence marker.
//!
//! ## Health score
//!
//! ```text
//! health = 0.3 * today_score
//!        + 0.2 * completion_rate * 100
//!        + 0.3 * (100 - burnout_risk * 100)
//!        + 0.2 * {healthy: 100, warning: 60, critical: 20}
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, instrument};

use crate::anomaly_detection::{
    AnomalyDetector, AnomalyReport, MonitorReport, MoodEvidence, OverallStatus, SessionEvidence,
    UnusualHoursEvidence,
};
use crate::burnout::BurnoutEstimator;
use crate::config::AnalyticsConfig;
use crate::confidence::{ConfidenceLevel, Prediction};
use crate::pattern_recognition::{
    weekday_name, PatternRecognizer, PatternReport, TimeOfDay, WeeklyPattern,
};
use crate::predictive_insights::{
    BurnoutTrend, BurnoutWarning, Outlook, PredictiveInsights, PredictiveReport, Trend,
    WeeklyForecast,
};
use crate::productivity_metrics::{
    week_start, ProductivityMetricsCalculator, ProductivityReport, WeeklyMetrics,
};
use crate::statistical_analysis::StatisticalAnalyzer;
use taskpulse_core::constants::score;
use taskpulse_core::errors::AppResult;
use taskpulse_core::models::{AnalyticsSnapshot, MoodRecord};

/// Status band of the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// At or above the excellent band
    Excellent,
    /// At or above the good band
    Good,
    /// At or above the concerning band
    Concerning,
    /// Below every band
    Critical,
}

impl HealthStatus {
    /// Short message for the status
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Everything is going great!",
            Self::Good => "Doing well with some areas to watch.",
            Self::Concerning => "Some issues need attention.",
            Self::Critical => "Multiple concerns require immediate action.",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Concerning => "concerning",
            Self::Critical => "critical",
        };
        f.write_str(name)
    }
}

/// Inputs of the health score, each on 0-100
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthComponents {
    /// Today's productivity score
    pub productivity: f64,
    /// Overall completion rate as a percentage
    pub completion: f64,
    /// Inverted burnout risk
    pub burnout: f64,
    /// Mapped anomaly status
    pub anomaly: f64,
}

/// Composite health score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    /// Weighted score (0-100)
    pub score: f64,
    /// Band of the score
    pub status: HealthStatus,
    /// Message for the band
    pub message: String,
    /// Inputs behind the score
    pub components: HealthComponents,
    /// Whether the burnout input fell back to the neutral value
    pub burnout_estimated: bool,
}

/// Headline numbers of the executive summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    /// Today's productivity score
    pub today_productivity: f64,
    /// Overall completion rate as a percentage
    pub completion_rate: f64,
    /// Best segment of the day
    pub best_time_of_day: TimeOfDay,
    /// Next-week outlook, when forecastable
    pub weekly_outlook: Option<Outlook>,
    /// Burnout risk as a percentage
    pub burnout_risk: f64,
    /// Monitors that fired
    pub anomalies_detected: usize,
}

/// How far to trust each part of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentConfidence {
    /// Productivity report
    pub productivity: ConfidenceLevel,
    /// Pattern report
    pub patterns: ConfidenceLevel,
    /// Weekly forecast
    pub forecast: ConfidenceLevel,
    /// Burnout trend
    pub burnout: ConfidenceLevel,
    /// Anomaly monitors
    pub anomalies: ConfidenceLevel,
}

/// Executive summary at the top of the full dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    /// Composite health score
    pub health: HealthScore,
    /// Headline numbers
    pub key_metrics: KeyMetrics,
    /// Ranked insights, predictions first
    pub top_insights: Vec<String>,
    /// Anomaly recommendations, most severe first
    pub priority_actions: Vec<String>,
    /// Per-component confidence
    pub confidence: ComponentConfidence,
}

/// Full dashboard view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullDashboard {
    /// Reference instant
    pub as_of: DateTime<Utc>,
    /// Executive summary
    pub executive_summary: ExecutiveSummary,
    /// Productivity report
    pub productivity: ProductivityReport,
    /// Pattern report
    pub patterns: PatternReport,
    /// Predictive report
    pub predictions: PredictiveReport,
    /// Anomaly report
    pub anomalies: AnomalyReport,
}

/// Direction of the last few mood records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickMoodTrend {
    /// Latest records well below the earliest ones
    Declining,
    /// Latest records well above the earliest ones
    Improving,
    /// Within the delta
    Stable,
    /// Fewer than two records
    Unknown,
}

/// Quick insights view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickInsights {
    /// Reference instant
    pub as_of: DateTime<Utc>,
    /// All tasks
    pub total_tasks: usize,
    /// Completed tasks
    pub completed_tasks: usize,
    /// Pending tasks
    pub pending_tasks: usize,
    /// Overall completion rate (0-1)
    pub completion_rate: f64,
    /// Today's productivity score
    pub today_productivity_score: f64,
    /// Best segment of the day
    pub best_time_of_day: TimeOfDay,
    /// Direction of the last few mood records
    pub mood_trend: QuickMoodTrend,
    /// Short advice
    pub recommendations: Vec<String>,
    /// How far to trust the numbers
    pub confidence: ConfidenceLevel,
}

/// Weekly summary view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Monday of the current week
    pub week_start: NaiveDate,
    /// Sunday of the current week
    pub week_end: NaiveDate,
    /// Metrics of the current week
    pub metrics: WeeklyMetrics,
    /// completed / total for tasks created this week
    pub completion_rate: f64,
    /// Weekday rhythm over the whole history
    pub pattern: WeeklyPattern,
    /// Forecast for next week
    pub next_week_forecast: Prediction<WeeklyForecast>,
    /// What went well
    pub achievements: Vec<String>,
    /// What to work on
    pub areas_for_improvement: Vec<String>,
}

/// Burnout level of the assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BurnoutRiskLevel {
    /// Below the moderate points
    Low,
    /// At or above the moderate points
    Moderate,
    /// At or above the high points
    High,
    /// At or above the critical points
    Critical,
}

impl BurnoutRiskLevel {
    /// Message for the level
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL: High burnout risk. Take immediate action!",
            Self::High => "HIGH: Elevated burnout risk. Make changes soon.",
            Self::Moderate => "MODERATE: Some burnout indicators. Monitor closely.",
            Self::Low => "LOW: Burnout risk is manageable.",
        }
    }
}

/// Burnout assessment view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnoutAssessment {
    /// Reference instant
    pub as_of: DateTime<Utc>,
    /// Level derived from risk points
    pub risk_level: BurnoutRiskLevel,
    /// Sum of contributing factor points
    pub risk_score: u32,
    /// Message for the level
    pub risk_message: String,
    /// Contributing factors
    pub risk_factors: Vec<String>,
    /// Latest burnout risk (0-1)
    pub current_risk: f64,
    /// Whether current risk fell back to the neutral value
    pub current_risk_estimated: bool,
    /// Predicted risk in 7 days, when forecastable
    pub predicted_risk_7_days: Option<f64>,
    /// Direction of the burnout trend, when forecastable
    pub trend: Option<Trend>,
    /// Full burnout trend result
    pub burnout_trend: Prediction<BurnoutTrend>,
    /// Unusual work hours monitor
    pub unusual_hours: MonitorReport<UnusualHoursEvidence>,
    /// Mood deterioration monitor
    pub mood: MonitorReport<MoodEvidence>,
    /// Extended session monitor
    pub extended_sessions: MonitorReport<SessionEvidence>,
    /// Ranked advice
    pub recommendations: Vec<String>,
}

/// Burnout series and where it came from
struct BurnoutSeries {
    values: Vec<f64>,
    current: f64,
    estimated: bool,
}

/// Analytics dashboard aggregating every component
#[derive(Debug, Clone)]
pub struct AnalyticsDashboard {
    config: AnalyticsConfig,
    metrics: ProductivityMetricsCalculator,
    patterns: PatternRecognizer,
    predictions: PredictiveInsights,
    anomalies: AnomalyDetector,
}

impl AnalyticsDashboard {
    /// Creates a dashboard from a configuration
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` when the configuration fails validation
    pub fn new(config: AnalyticsConfig) -> AppResult<Self> {
        config.validate()?;
        info!(
            algorithm = config.prediction.algorithm.name(),
            sensitivity = config.anomaly.sensitivity,
            "Analytics dashboard initialized"
        );
        Ok(Self {
            metrics: ProductivityMetricsCalculator::new(&config),
            patterns: PatternRecognizer::new(&config),
            predictions: PredictiveInsights::new(&config),
            anomalies: AnomalyDetector::new(&config),
            config,
        })
    }

    /// Configuration in effect
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Every report plus the executive summary
    #[instrument(skip_all, fields(tasks = snapshot.tasks().len(), moods = snapshot.moods().len()))]
    #[must_use]
    pub fn full_dashboard(&self, snapshot: &AnalyticsSnapshot) -> FullDashboard {
        let tasks = snapshot.tasks();
        let as_of = snapshot.as_of();

        let productivity = self.metrics.comprehensive_report(tasks, as_of);
        let patterns = self.patterns.pattern_report(tasks, snapshot.moods());
        let weekly_scores = self.metrics.weekly_score_history(
            tasks,
            snapshot.today(),
            self.config.prediction.history_weeks,
        );
        let burnout = self.burnout_series(snapshot);
        let predictions = self.predictions.insights_report(
            tasks,
            &patterns.productive_hours.peak_hours,
            &weekly_scores,
            &burnout.values,
        );
        let anomalies = self
            .anomalies
            .anomaly_report(tasks, snapshot.moods(), as_of);

        let health = self.health_score(
            productivity.today.productivity_score,
            productivity.summary.completion_rate,
            &burnout,
            anomalies.overall_status,
        );

        let mut top_insights: Vec<String> = predictions
            .insights
            .iter()
            .chain(&patterns.insights)
            .cloned()
            .collect();
        top_insights.truncate(self.config.health.top_insights);

        let monitors_sufficient = [
            anomalies.unusual_hours.data_sufficient,
            anomalies.productivity_drops.data_sufficient,
            anomalies.mood_deterioration.data_sufficient,
            anomalies.workload_spikes.data_sufficient,
            anomalies.extended_sessions.data_sufficient,
        ]
        .into_iter()
        .filter(|s| *s)
        .count();

        let executive_summary = ExecutiveSummary {
            key_metrics: KeyMetrics {
                today_productivity: productivity.today.productivity_score,
                completion_rate: productivity.summary.completion_rate * score::MAX,
                best_time_of_day: patterns.productive_hours.best_time_of_day,
                weekly_outlook: predictions.weekly_forecast.value().map(|f| f.outlook),
                burnout_risk: burnout.current * score::MAX,
                anomalies_detected: anomalies.anomaly_count,
            },
            top_insights,
            priority_actions: anomalies.priority_recommendations.clone(),
            confidence: ComponentConfidence {
                productivity: productivity.confidence,
                patterns: patterns.confidence,
                forecast: predictions.weekly_forecast.confidence(),
                burnout: predictions.burnout_trend.confidence(),
                anomalies: ConfidenceLevel::from_sample(
                    monitors_sufficient,
                    self.config.health.medium_confidence_monitors,
                    self.config.health.high_confidence_monitors,
                ),
            },
            health,
        };

        info!(
            health_score = executive_summary.health.score,
            status = %executive_summary.health.status,
            anomalies = anomalies.anomaly_count,
            "Full dashboard generated"
        );

        FullDashboard {
            as_of,
            executive_summary,
            productivity,
            patterns,
            predictions,
            anomalies,
        }
    }

    /// Lightweight summary; skips the prediction and anomaly pipelines
    #[instrument(skip_all, fields(tasks = snapshot.tasks().len()))]
    #[must_use]
    pub fn quick_insights(&self, snapshot: &AnalyticsSnapshot) -> QuickInsights {
        let tasks = snapshot.tasks();
        let h = &self.config.health;

        let completed_tasks = tasks.iter().filter(|t| t.is_completed()).count();
        let pending_tasks = tasks.iter().filter(|t| t.is_pending()).count();
        let completion_rate =
            StatisticalAnalyzer::safe_ratio(completed_tasks as f64, tasks.len() as f64, 0.0);
        let today = self.metrics.daily_metrics(tasks, snapshot.today());
        let hours = self.patterns.productive_hours(tasks);
        let mood_trend = self.quick_mood_trend(snapshot);

        let mut recommendations = Vec::new();
        if completion_rate < 0.5 {
            recommendations
                .push("Low completion rate. Focus on fewer, high-priority tasks.".to_owned());
        }
        if hours.best_time_of_day != TimeOfDay::Unknown {
            recommendations.push(format!(
                "Schedule important work during your {} peak.",
                hours.best_time_of_day
            ));
        }
        if mood_trend == QuickMoodTrend::Declining {
            recommendations.push("Mood trending down. Consider taking a break.".to_owned());
        }
        if pending_tasks > h.pending_backlog {
            recommendations.push("High pending task count. Review and prioritize.".to_owned());
        }
        recommendations.truncate(h.quick_recommendations);

        info!(
            completion_rate,
            today_score = today.productivity_score,
            "Quick insights generated"
        );

        QuickInsights {
            as_of: snapshot.as_of(),
            total_tasks: tasks.len(),
            completed_tasks,
            pending_tasks,
            completion_rate,
            today_productivity_score: today.productivity_score,
            best_time_of_day: hours.best_time_of_day,
            mood_trend,
            recommendations,
            confidence: hours.confidence,
        }
    }

    /// Current week, weekday rhythm and next-week forecast
    #[instrument(skip_all, fields(tasks = snapshot.tasks().len()))]
    #[must_use]
    pub fn weekly_summary(&self, snapshot: &AnalyticsSnapshot) -> WeeklySummary {
        let tasks = snapshot.tasks();
        let metrics = self.metrics.weekly_metrics(tasks, week_start(snapshot.today()));
        let pattern = self.patterns.weekly_pattern(tasks);
        let weekly_scores = self.metrics.weekly_score_history(
            tasks,
            snapshot.today(),
            self.config.prediction.history_weeks,
        );
        let next_week_forecast = self.predictions.forecast_weekly(&weekly_scores);
        let completion_rate = StatisticalAnalyzer::safe_ratio(
            metrics.completed_tasks as f64,
            metrics.total_tasks as f64,
            0.0,
        );

        let mut achievements = Vec::new();
        if metrics.average_productivity_score >= self.config.prediction.excellent_outlook {
            achievements.push(format!(
                "Excellent week! Productivity score: {:.0}/100",
                metrics.average_productivity_score
            ));
        }
        if metrics.total_tasks > 0 && completion_rate >= 0.8 {
            achievements.push(format!(
                "High completion rate: {:.0}%",
                completion_rate * 100.0
            ));
        }
        if let Some(day) = metrics.most_productive_day {
            achievements.push(format!("Most productive day this week: {day}"));
        }
        if let Some(day) = pattern.best_day {
            achievements.push(format!("Best day overall: {}", weekday_name(day)));
        }

        let mut areas_for_improvement = Vec::new();
        if metrics.total_tasks > 0 && completion_rate < 0.6 {
            areas_for_improvement
                .push("Completion rate below 60%. Focus on finishing started tasks.".to_owned());
        }
        if pattern.works_on_weekends {
            areas_for_improvement
                .push("Working on weekends. Try to protect rest time.".to_owned());
        }
        if let Some(Outlook::Concerning) = next_week_forecast.value().map(|f| f.outlook) {
            areas_for_improvement
                .push("Next week's forecast is concerning. Plan a lighter load.".to_owned());
        }

        info!(
            week_start = %metrics.week_start,
            completed = metrics.completed_tasks,
            forecast_available = next_week_forecast.is_available(),
            "Weekly summary generated"
        );

        WeeklySummary {
            week_start: metrics.week_start,
            week_end: metrics.week_end,
            completion_rate,
            metrics,
            pattern,
            next_week_forecast,
            achievements,
            areas_for_improvement,
        }
    }

    /// Burnout risk, its trajectory and the behaviours feeding it
    #[instrument(skip_all, fields(moods = snapshot.moods().len()))]
    #[must_use]
    pub fn burnout_assessment(&self, snapshot: &AnalyticsSnapshot) -> BurnoutAssessment {
        let h = &self.config.health;
        let tasks = snapshot.tasks();
        let burnout = self.burnout_series(snapshot);
        let burnout_trend = self.predictions.burnout_trend(&burnout.values);
        let unusual_hours = self.anomalies.unusual_work_hours(tasks);
        let mood = self.anomalies.mood_deterioration(snapshot.moods());
        let extended_sessions = self.anomalies.extended_sessions(tasks);

        let trend = burnout_trend.value().map(|t| t.trend);
        let [current_points, trend_points, hours_points, mood_points, session_points] =
            h.risk_points;
        let factors = [
            (
                burnout.current >= h.high_current_risk,
                current_points,
                "High baseline burnout risk",
            ),
            (
                trend == Some(Trend::Increasing),
                trend_points,
                "Burnout risk trending upward",
            ),
            (unusual_hours.is_anomaly, hours_points, "Unusual work hours detected"),
            (mood.is_anomaly, mood_points, "Mood deterioration detected"),
            (
                extended_sessions.is_anomaly,
                session_points,
                "Extended work sessions without breaks",
            ),
        ];
        let risk_score: u32 = factors
            .iter()
            .filter(|(present, _, _)| *present)
            .map(|(_, points, _)| points)
            .sum();
        let risk_factors: Vec<String> = factors
            .iter()
            .filter(|(present, _, _)| *present)
            .map(|(_, _, text)| (*text).to_owned())
            .collect();

        let [critical, high, moderate] = h.risk_level_points;
        let risk_level = if risk_score >= critical {
            BurnoutRiskLevel::Critical
        } else if risk_score >= high {
            BurnoutRiskLevel::High
        } else if risk_score >= moderate {
            BurnoutRiskLevel::Moderate
        } else {
            BurnoutRiskLevel::Low
        };

        let mut recommendations = Vec::new();
        if risk_level >= BurnoutRiskLevel::High {
            recommendations
                .push("Take time off if possible - burnout prevention is critical".to_owned());
        }
        if unusual_hours.evidence.late_night_count > 5 {
            recommendations.push("Stop working late nights - set strict end times".to_owned());
        }
        if !extended_sessions.evidence.extended.is_empty() {
            recommendations.push("Take regular breaks every 60-90 minutes".to_owned());
        }
        if mood.is_anomaly {
            recommendations.push("Prioritize self-care and mental health activities".to_owned());
        }
        if let Some(t) = burnout_trend.value() {
            if t.warning > BurnoutWarning::None {
                recommendations.push(t.recommendation.clone());
            }
        }
        if risk_level == BurnoutRiskLevel::Low {
            recommendations.push("Continue current work-life balance practices".to_owned());
        }

        info!(
            risk_score,
            level = ?risk_level,
            current_risk = burnout.current,
            estimated = burnout.estimated,
            "Burnout assessment generated"
        );

        BurnoutAssessment {
            as_of: snapshot.as_of(),
            risk_level,
            risk_score,
            risk_message: risk_level.message().to_owned(),
            risk_factors,
            current_risk: burnout.current,
            current_risk_estimated: burnout.estimated,
            predicted_risk_7_days: burnout_trend.value().map(|t| t.predicted_risk_7_days),
            trend,
            burnout_trend,
            unusual_hours,
            mood,
            extended_sessions,
            recommendations,
        }
    }

    /// Composite health score from its four inputs
    #[must_use]
    fn health_score(
        &self,
        today_score: f64,
        completion_rate: f64,
        burnout: &BurnoutSeries,
        status: OverallStatus,
    ) -> HealthScore {
        let h = &self.config.health;
        let [healthy, warning, critical] = h.anomaly_status_scores;
        let components = HealthComponents {
            productivity: today_score.clamp(score::MIN, score::MAX),
            completion: (completion_rate * score::MAX).clamp(score::MIN, score::MAX),
            burnout: burnout.current.mul_add(-score::MAX, score::MAX).clamp(score::MIN, score::MAX),
            anomaly: match status {
                OverallStatus::Healthy => healthy,
                OverallStatus::Warning => warning,
                OverallStatus::Critical => critical,
            },
        };

        let weighted = h.anomaly_weight.mul_add(
            components.anomaly,
            h.burnout_weight.mul_add(
                components.burnout,
                h.completion_weight.mul_add(
                    components.completion,
                    h.productivity_weight * components.productivity,
                ),
            ),
        );
        let score = weighted.clamp(score::MIN, score::MAX);
        let status = if score >= h.excellent_threshold {
            HealthStatus::Excellent
        } else if score >= h.good_threshold {
            HealthStatus::Good
        } else if score >= h.concerning_threshold {
            HealthStatus::Concerning
        } else {
            HealthStatus::Critical
        };

        HealthScore {
            score,
            status,
            message: status.message().to_owned(),
            components,
            burnout_estimated: burnout.estimated,
        }
    }

    /// Caller-supplied burnout history, else the estimate from mood records
    fn burnout_series(&self, snapshot: &AnalyticsSnapshot) -> BurnoutSeries {
        let (values, supplied) = snapshot.burnout_history().map_or_else(
            || (BurnoutEstimator::risk_series(snapshot.moods()), false),
            |history| (history.to_vec(), true),
        );
        match values.last() {
            Some(current) => BurnoutSeries {
                current: *current,
                estimated: !supplied,
                values,
            },
            None => BurnoutSeries {
                current: self.config.health.neutral_burnout_risk,
                estimated: true,
                values,
            },
        }
    }

    /// First two against last two of the latest mood records
    fn quick_mood_trend(&self, snapshot: &AnalyticsSnapshot) -> QuickMoodTrend {
        let h = &self.config.health;
        let moods = snapshot.moods();
        let recent = &moods[moods.len().saturating_sub(h.quick_mood_records)..];
        if recent.len() < 2 {
            return QuickMoodTrend::Unknown;
        }

        let average = |records: &[MoodRecord]| {
            let values: Vec<f64> = records.iter().map(|r| f64::from(r.mood_score)).collect();
            StatisticalAnalyzer::mean(&values)
        };
        let first = average(&recent[..2]);
        let last = average(&recent[recent.len() - 2..]);

        if last < first - h.quick_mood_delta {
            QuickMoodTrend::Declining
        } else if last > first + h.quick_mood_delta {
            QuickMoodTrend::Improving
        } else {
            QuickMoodTrend::Stable
        }
    }
}
