// ABOUTME: Anomaly detection monitors for work hours, productivity drops, mood, workload and sessions
// ABOUTME: A single sensitivity setting scales every threshold through the threshold multiplier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

//! # Anomaly Detection
//!
//! Five independent monitors compare recent behaviour against baselines
//! learned from the user's own history. Thresholds are scaled by
//! `m = 1.5 - sensitivity`, so the default sensitivity of 0.7 tightens every
//! base threshold to 80% of its value.
//!
//! Each monitor returns a [`MonitorReport`] with typed evidence; the
//! [`AnomalyReport`] folds them into an overall status and a
//! severity-ordered list of recommendations.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::{debug, warn};

use crate::config::{AnalyticsConfig, AnomalyConfig};
use crate::productivity_metrics::{window_days, ProductivityMetricsCalculator};
use crate::sessions::work_sessions;
use crate::statistical_analysis::StatisticalAnalyzer;
use taskpulse_core::models::{MoodRecord, Task};

/// Severity of an anomaly, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Worth noting
    Low,
    /// Worth acting on
    Medium,
    /// Act soon
    High,
    /// Act now
    Critical,
}

impl Severity {
    /// Label used to prefix recommendations
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "URGENT",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(name)
    }
}

/// Aggregate status over all monitors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    /// No anomalies
    Healthy,
    /// One or two anomalies
    Warning,
    /// Three or more anomalies
    Critical,
}

impl OverallStatus {
    /// Status for a number of anomalous monitors
    #[must_use]
    pub const fn from_anomaly_count(count: usize) -> Self {
        match count {
            0 => Self::Healthy,
            1 | 2 => Self::Warning,
            _ => Self::Critical,
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
        };
        f.write_str(name)
    }
}

/// Outcome of one monitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorReport<E> {
    /// Whether the monitor fired
    pub is_anomaly: bool,
    /// Severity when fired (or when a secondary signal is notable)
    pub severity: Option<Severity>,
    /// What the monitor saw
    pub evidence: E,
    /// Human-readable alerts
    pub alerts: Vec<String>,
    /// Advice for the user
    pub recommendation: Option<String>,
    /// Whether there was enough data to judge
    pub data_sufficient: bool,
}

impl<E> MonitorReport<E> {
    fn quiet(evidence: E, data_sufficient: bool) -> Self {
        Self {
            is_anomaly: false,
            severity: None,
            evidence,
            alerts: Vec::new(),
            recommendation: None,
            data_sufficient,
        }
    }
}

/// Completion timestamps outside ordinary hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnusualHoursEvidence {
    /// Completed tasks with a completion timestamp
    pub completed_tasks: usize,
    /// Completed 22:00-02:59
    pub late_night_count: usize,
    /// Completed 03:00-05:59
    pub early_morning_count: usize,
    /// Completed on Saturday or Sunday
    pub weekend_count: usize,
    /// late_night_count / completed_tasks
    pub late_night_fraction: f64,
    /// early_morning_count / completed_tasks
    pub early_morning_fraction: f64,
    /// weekend_count / completed_tasks
    pub weekend_fraction: f64,
    /// Fraction above which a bucket is unusual
    pub threshold: f64,
}

/// A day whose score fell below its baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropDay {
    /// The day
    pub date: NaiveDate,
    /// Its productivity score
    pub score: f64,
    /// Mean of the preceding baseline
    pub baseline_mean: f64,
    /// Sample standard deviation of the baseline (before flooring)
    pub baseline_std_dev: f64,
    /// Score below which the day counts as a drop
    pub threshold: f64,
    /// Percentage below the baseline mean
    pub drop_percentage: f64,
    /// Severity by drop percentage
    pub severity: Severity,
}

/// Productivity drop evidence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductivityDropEvidence {
    /// Recent days that had a large enough baseline
    pub days_evaluated: usize,
    /// Days that dropped
    pub drops: Vec<DropDay>,
    /// Longest run of consecutive drop days
    pub consecutive_drop_days: usize,
}

/// Direction of recent mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    /// Recent average well below the prior one
    Declining,
    /// Recent average well above the prior one
    Improving,
    /// Anything in between
    Stable,
}

impl fmt::Display for MoodTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Declining => "declining",
            Self::Improving => "improving",
            Self::Stable => "stable",
        };
        f.write_str(name)
    }
}

/// Mood deterioration evidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEvidence {
    /// Mood records considered
    pub records: usize,
    /// Records in the recent window
    pub recent_records: usize,
    /// Records in the prior window
    pub prior_records: usize,
    /// Average mood in the recent window
    pub recent_mood_average: f64,
    /// Average mood in the prior window
    pub prior_mood_average: f64,
    /// recent - prior mood
    pub mood_delta: f64,
    /// Average energy in the recent window
    pub recent_energy_average: f64,
    /// Average energy in the prior window
    pub prior_energy_average: f64,
    /// recent - prior energy
    pub energy_delta: f64,
    /// Label of the mood delta
    pub trend: MoodTrend,
    /// Distinct recent days with low mood or low energy
    pub concerning_days: usize,
}

impl MoodEvidence {
    fn empty(records: usize) -> Self {
        Self {
            records,
            recent_records: 0,
            prior_records: 0,
            recent_mood_average: 0.0,
            prior_mood_average: 0.0,
            mood_delta: 0.0,
            recent_energy_average: 0.0,
            prior_energy_average: 0.0,
            energy_delta: 0.0,
            trend: MoodTrend::Stable,
            concerning_days: 0,
        }
    }
}

/// A day with far more tasks than usual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSpike {
    /// The day
    pub date: NaiveDate,
    /// Tasks created that day
    pub task_count: usize,
    /// Of those, high priority
    pub high_priority_tasks: usize,
    /// Mean count of the preceding baseline
    pub baseline_mean: f64,
    /// Count above which the day is a spike
    pub threshold: f64,
    /// Percentage above the baseline mean
    pub spike_percentage: f64,
    /// Severity by spike percentage
    pub severity: Severity,
}

/// Workload spike evidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadEvidence {
    /// Recent active days that had a large enough baseline
    pub days_evaluated: usize,
    /// Days that spiked
    pub spikes: Vec<WorkloadSpike>,
}

/// A work session long enough to flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedSession {
    /// Session start
    pub start: DateTime<Utc>,
    /// Session end
    pub end: DateTime<Utc>,
    /// Wall-clock hours
    pub hours: f64,
    /// Tasks in the session
    pub task_count: usize,
    /// Medium or critical
    pub severity: Severity,
}

/// Extended session evidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEvidence {
    /// Sessions reconstructed
    pub sessions_analyzed: usize,
    /// Sessions at or above the extended threshold
    pub extended: Vec<ExtendedSession>,
    /// Longest session in hours
    pub longest_session_hours: f64,
}

/// All monitors plus the aggregate view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    /// Unusual work hours monitor
    pub unusual_hours: MonitorReport<UnusualHoursEvidence>,
    /// Productivity drop monitor
    pub productivity_drops: MonitorReport<ProductivityDropEvidence>,
    /// Mood deterioration monitor
    pub mood_deterioration: MonitorReport<MoodEvidence>,
    /// Workload spike monitor
    pub workload_spikes: MonitorReport<WorkloadEvidence>,
    /// Extended session monitor
    pub extended_sessions: MonitorReport<SessionEvidence>,
    /// Monitors that fired
    pub anomaly_count: usize,
    /// Status derived from the count
    pub overall_status: OverallStatus,
    /// Every alert, monitor by monitor
    pub alerts: Vec<String>,
    /// Most severe first
    pub priority_recommendations: Vec<String>,
    /// Sensitivity in effect
    pub sensitivity: f64,
}

/// Anomaly detection system
#[derive(Debug, Clone, Default)]
pub struct AnomalyDetector {
    config: AnomalyConfig,
    metrics: ProductivityMetricsCalculator,
}

impl AnomalyDetector {
    /// Creates a detector from the engine configuration
    #[must_use]
    pub fn new(config: &AnalyticsConfig) -> Self {
        Self {
            config: config.anomaly.clone(),
            metrics: ProductivityMetricsCalculator::new(config),
        }
    }

    /// Sensitivity in effect
    #[must_use]
    pub const fn sensitivity(&self) -> f64 {
        self.config.sensitivity
    }

    /// Late-night, early-morning and weekend completions
    #[must_use]
    pub fn unusual_work_hours(&self, tasks: &[Task]) -> MonitorReport<UnusualHoursEvidence> {
        let stamps: Vec<DateTime<Utc>> = tasks
            .iter()
            .filter(|t| t.is_completed())
            .filter_map(Task::completed_at)
            .collect();

        let late_night_count = stamps
            .iter()
            .filter(|at| at.hour() >= 22 || at.hour() <= 2)
            .count();
        let early_morning_count = stamps
            .iter()
            .filter(|at| (3..=5).contains(&at.hour()))
            .count();
        let weekend_count = stamps
            .iter()
            .filter(|at| matches!(at.weekday(), Weekday::Sat | Weekday::Sun))
            .count();

        let total = stamps.len() as f64;
        let fraction = |count: usize| StatisticalAnalyzer::safe_ratio(count as f64, total, 0.0);
        let threshold = self.config.unusual_hours_fraction * self.config.threshold_multiplier();
        let evidence = UnusualHoursEvidence {
            completed_tasks: stamps.len(),
            late_night_count,
            early_morning_count,
            weekend_count,
            late_night_fraction: fraction(late_night_count),
            early_morning_fraction: fraction(early_morning_count),
            weekend_fraction: fraction(weekend_count),
            threshold,
        };

        if stamps.is_empty() {
            return MonitorReport::quiet(evidence, false);
        }

        let mut alerts = Vec::new();
        if evidence.late_night_fraction > threshold {
            alerts.push(format!(
                "{late_night_count} tasks completed during late night hours (10 PM - 2 AM)"
            ));
        }
        if evidence.early_morning_fraction > threshold {
            alerts.push(format!(
                "{early_morning_count} tasks completed during very early morning (3 AM - 5 AM)"
            ));
        }
        if evidence.weekend_fraction > threshold {
            alerts.push(format!(
                "{weekend_count} tasks completed during weekends - work-life balance concern"
            ));
        }

        if alerts.is_empty() {
            return MonitorReport::quiet(evidence, true);
        }

        let night_fraction = evidence
            .late_night_fraction
            .max(evidence.early_morning_fraction);
        let severity = if night_fraction >= 2.0 * threshold {
            Severity::High
        } else {
            Severity::Medium
        };
        let recommendation = if late_night_count > 5 || early_morning_count > 3 {
            "You're working very late or very early. Set clear work hour boundaries to improve sleep and recovery."
        } else if weekend_count > 10 {
            "High weekend work detected. Consider protecting weekend time for rest and personal activities."
        } else {
            "Some irregular work hours detected. Try to maintain a consistent work schedule."
        };

        MonitorReport {
            is_anomaly: true,
            severity: Some(severity),
            evidence,
            alerts,
            recommendation: Some(recommendation.to_owned()),
            data_sufficient: true,
        }
    }

    /// Days in the recent window that fell well below their trailing baseline
    ///
    /// `daily_scores` must be in chronological order. The recent window and
    /// each baseline are measured in calendar days back from the latest entry;
    /// missing dates simply contribute nothing. Two drops are consecutive when
    /// no calendar day separates them, apart from weekend rest days when
    /// `idle_weekends_are_rest` is set.
    #[must_use]
    pub fn productivity_drops(
        &self,
        daily_scores: &[(NaiveDate, f64)],
    ) -> MonitorReport<ProductivityDropEvidence> {
        let c = &self.config;
        let m = c.threshold_multiplier();
        let Some(&(last_date, _)) = daily_scores.last() else {
            return MonitorReport::quiet(ProductivityDropEvidence::default(), false);
        };
        let first_recent = last_date - Duration::days(window_days(c.recent_window_days) - 1);

        let mut days_evaluated = 0;
        let mut drops: Vec<DropDay> = Vec::new();
        let mut run = 0;
        let mut consecutive_drop_days = 0;

        for (index, &(date, day_score)) in daily_scores.iter().enumerate() {
            if date < first_recent {
                continue;
            }
            let baseline_start = date - Duration::days(window_days(c.drop_baseline_days));
            let baseline: Vec<f64> = daily_scores[..index]
                .iter()
                .filter(|(d, _)| *d >= baseline_start)
                .map(|(_, s)| *s)
                .collect();
            if baseline.len() < c.drop_min_baseline {
                run = 0;
                continue;
            }
            days_evaluated += 1;

            let baseline_mean = StatisticalAnalyzer::mean(&baseline);
            let baseline_std_dev = StatisticalAnalyzer::std_dev(&baseline);
            let sigma = baseline_std_dev.max(c.min_score_std_dev);
            let threshold = (c.drop_std_devs * sigma).mul_add(-m, baseline_mean);

            if day_score < threshold {
                let drop_percentage =
                    StatisticalAnalyzer::safe_ratio(baseline_mean - day_score, baseline_mean, 0.0)
                        * 100.0;
                let severity = if drop_percentage > 50.0 {
                    Severity::Critical
                } else if drop_percentage > 30.0 {
                    Severity::High
                } else {
                    Severity::Medium
                };
                let follows_drop = drops
                    .last()
                    .is_some_and(|previous| self.adjacent_days(previous.date, date));
                run = if follows_drop { run + 1 } else { 1 };
                consecutive_drop_days = consecutive_drop_days.max(run);
                drops.push(DropDay {
                    date,
                    score: day_score,
                    baseline_mean,
                    baseline_std_dev,
                    threshold,
                    drop_percentage,
                    severity,
                });
            } else {
                run = 0;
            }
        }

        let data_sufficient = days_evaluated > 0;
        let is_anomaly = drops.len() >= c.min_drops_for_alert
            || consecutive_drop_days >= c.consecutive_drops_for_alert;
        let evidence = ProductivityDropEvidence {
            days_evaluated,
            drops,
            consecutive_drop_days,
        };

        if !is_anomaly {
            return MonitorReport::quiet(evidence, data_sufficient);
        }

        let mut alerts = Vec::new();
        if consecutive_drop_days >= c.consecutive_drops_for_alert {
            alerts.push(format!(
                "CRITICAL: {consecutive_drop_days} consecutive days of low productivity"
            ));
        }
        let percentages: Vec<f64> = evidence.drops.iter().map(|d| d.drop_percentage).collect();
        alerts.push(format!(
            "Productivity dropped by {:.1}% on {} days",
            StatisticalAnalyzer::mean(&percentages),
            evidence.drops.len()
        ));

        let recommendation = if consecutive_drop_days >= c.consecutive_drops_for_alert {
            "Multiple consecutive low-productivity days. Consider reducing workload, taking a break, or addressing blockers."
        } else {
            "Productivity fluctuating. Review your task priorities and eliminate distractions."
        };

        MonitorReport {
            is_anomaly,
            severity: evidence.drops.iter().map(|d| d.severity).max(),
            evidence,
            alerts,
            recommendation: Some(recommendation.to_owned()),
            data_sufficient,
        }
    }

    /// Whether every calendar day strictly between `earlier` and `later` is a rest day
    fn adjacent_days(&self, earlier: NaiveDate, later: NaiveDate) -> bool {
        (1..(later - earlier).num_days())
            .all(|offset| self.is_rest_day(earlier + Duration::days(offset), 0))
    }

    /// Idle weekend days carry no productivity signal when configured as rest
    fn is_rest_day(&self, date: NaiveDate, tasks_created: usize) -> bool {
        self.config.idle_weekends_are_rest
            && tasks_created == 0
            && matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Recent mood and energy against the preceding window
    ///
    /// `moods` must be in chronological order.
    #[must_use]
    pub fn mood_deterioration(&self, moods: &[MoodRecord]) -> MonitorReport<MoodEvidence> {
        let c = &self.config;
        let Some(latest) = moods.last().map(|r| r.timestamp) else {
            return MonitorReport::quiet(MoodEvidence::empty(0), false);
        };
        if moods.len() < c.min_mood_records {
            return MonitorReport::quiet(MoodEvidence::empty(moods.len()), false);
        }

        let window = Duration::days(c.mood_window_days);
        let recent: Vec<&MoodRecord> = moods
            .iter()
            .filter(|r| r.timestamp > latest - window)
            .collect();
        let prior: Vec<&MoodRecord> = moods
            .iter()
            .filter(|r| r.timestamp > latest - window - window && r.timestamp <= latest - window)
            .collect();

        // Without an older window, compare the halves of the recent one
        let (earlier, later): (Vec<&MoodRecord>, Vec<&MoodRecord>) = if prior.is_empty() {
            let half = recent.len() / 2;
            (recent[..half].to_vec(), recent[half..].to_vec())
        } else {
            (prior, recent.clone())
        };

        let average = |records: &[&MoodRecord], pick: fn(&MoodRecord) -> u8| {
            let values: Vec<f64> = records.iter().map(|r| f64::from(pick(r))).collect();
            StatisticalAnalyzer::mean(&values)
        };
        let comparable = !earlier.is_empty() && !later.is_empty();
        let recent_mood_average = average(&later, |r: &MoodRecord| r.mood_score);
        let prior_mood_average = average(&earlier, |r: &MoodRecord| r.mood_score);
        let recent_energy_average = average(&later, |r: &MoodRecord| r.energy_level);
        let prior_energy_average = average(&earlier, |r: &MoodRecord| r.energy_level);
        let (mood_delta, energy_delta) = if comparable {
            (
                recent_mood_average - prior_mood_average,
                recent_energy_average - prior_energy_average,
            )
        } else {
            (0.0, 0.0)
        };

        let trend = if mood_delta <= -c.mood_change_threshold {
            MoodTrend::Declining
        } else if mood_delta >= c.mood_change_threshold {
            MoodTrend::Improving
        } else {
            MoodTrend::Stable
        };

        let concerning_days = recent
            .iter()
            .filter(|r| {
                r.mood_score <= c.concerning_mood_score || r.energy_level <= c.concerning_energy_level
            })
            .map(|r| r.date())
            .collect::<BTreeSet<_>>()
            .len();

        let scaled = -c.mood_change_threshold * c.threshold_multiplier();
        let mood_falling = mood_delta <= scaled;
        let energy_falling = energy_delta <= scaled;
        let is_anomaly = comparable && (mood_falling || energy_falling);
        let many_concerning = concerning_days >= c.concerning_days_for_high;

        let mut alerts = Vec::new();
        if is_anomaly && mood_falling {
            alerts.push(format!(
                "Mood has declined by {:.1} points recently",
                mood_delta.abs()
            ));
        }
        if is_anomaly && energy_falling {
            alerts.push(format!(
                "Energy levels have dropped by {:.1} points",
                energy_delta.abs()
            ));
        }
        if many_concerning {
            alerts.push(format!(
                "{concerning_days} days with low mood or energy in the last week"
            ));
        }

        let severity = match (is_anomaly, many_concerning) {
            (_, true) => Some(Severity::High),
            (true, false) => Some(Severity::Medium),
            (false, false) => None,
        };
        let recommendation = match (trend, is_anomaly, many_concerning) {
            (MoodTrend::Declining, _, true) | (_, true, true) => Some(
                "Mood and energy declining. Take time for self-care, reduce workload, and consider talking to someone.",
            ),
            (MoodTrend::Declining, _, false) | (_, true, false) => Some(
                "Mood trending down. Take breaks, engage in activities you enjoy, and monitor closely.",
            ),
            (_, false, true) => Some(
                "Several low-energy days detected. Ensure adequate rest and consider workload adjustment.",
            ),
            _ => None,
        };

        MonitorReport {
            is_anomaly,
            severity,
            evidence: MoodEvidence {
                records: moods.len(),
                recent_records: later.len(),
                prior_records: earlier.len(),
                recent_mood_average,
                prior_mood_average,
                mood_delta,
                recent_energy_average,
                prior_energy_average,
                energy_delta,
                trend,
                concerning_days,
            },
            alerts,
            recommendation: recommendation.map(str::to_owned),
            data_sufficient: true,
        }
    }

    /// Active days with far more created tasks than the trailing baseline
    #[must_use]
    pub fn workload_spikes(&self, tasks: &[Task]) -> MonitorReport<WorkloadEvidence> {
        let c = &self.config;
        let m = c.threshold_multiplier();
        let high_priority = self.metrics.high_priority_threshold();

        let mut per_day: BTreeMap<NaiveDate, (usize, usize)> = BTreeMap::new();
        for task in tasks {
            let entry = per_day.entry(task.created_date()).or_insert((0, 0));
            entry.0 += 1;
            if task.priority() >= high_priority {
                entry.1 += 1;
            }
        }
        let days: Vec<(NaiveDate, usize, usize)> = per_day
            .into_iter()
            .map(|(date, (count, high))| (date, count, high))
            .collect();

        let first_recent = days.len().saturating_sub(c.recent_window_days);
        let mut days_evaluated = 0;
        let mut spikes = Vec::new();

        for index in first_recent..days.len() {
            let baseline: Vec<f64> = days[index.saturating_sub(c.spike_baseline_days)..index]
                .iter()
                .map(|(_, count, _)| *count as f64)
                .collect();
            if baseline.len() < c.spike_min_baseline {
                continue;
            }
            days_evaluated += 1;

            let (date, task_count, high_priority_tasks) = days[index];
            let baseline_mean = StatisticalAnalyzer::mean(&baseline);
            let sigma = StatisticalAnalyzer::std_dev(&baseline).max(c.min_count_std_dev);
            let threshold = (c.spike_std_devs * sigma).mul_add(m, baseline_mean);

            if task_count as f64 > threshold {
                let spike_percentage = StatisticalAnalyzer::safe_ratio(
                    task_count as f64 - baseline_mean,
                    baseline_mean,
                    0.0,
                ) * 100.0;
                let severity = if spike_percentage > 100.0 {
                    Severity::Critical
                } else if spike_percentage > 50.0 {
                    Severity::High
                } else if spike_percentage > 25.0 {
                    Severity::Medium
                } else {
                    Severity::Low
                };
                spikes.push(WorkloadSpike {
                    date,
                    task_count,
                    high_priority_tasks,
                    baseline_mean,
                    threshold,
                    spike_percentage,
                    severity,
                });
            }
        }

        let data_sufficient = days_evaluated > 0;
        let severity = spikes.iter().map(|s| s.severity).max();
        let is_anomaly =
            spikes.len() >= c.min_spikes_for_alert || severity == Some(Severity::Critical);
        let evidence = WorkloadEvidence {
            days_evaluated,
            spikes,
        };
        if !is_anomaly {
            return MonitorReport::quiet(evidence, data_sufficient);
        }

        let mut alerts = Vec::new();
        let worst = evidence.spikes.iter().fold(None::<&WorkloadSpike>, |worst, s| {
            match worst {
                Some(w) if w.spike_percentage >= s.spike_percentage => Some(w),
                _ => Some(s),
            }
        });
        let recommendation = if evidence.spikes.len() >= 3 {
            "Multiple workload spikes detected. Delegate tasks, extend deadlines, or request support."
        } else if worst.is_some_and(|w| w.high_priority_tasks > 5) {
            "High-priority task overload. Focus on critical items and defer non-urgent work."
        } else {
            "Workload spike detected. Prioritize ruthlessly and consider pushing back non-critical tasks."
        };
        if let Some(w) = worst {
            alerts.push(format!(
                "Workload spike detected: {} tasks ({:.0}% above normal) on {}",
                w.task_count, w.spike_percentage, w.date
            ));
        }

        MonitorReport {
            is_anomaly,
            severity,
            evidence,
            alerts,
            recommendation: Some(recommendation.to_owned()),
            data_sufficient,
        }
    }

    /// Work sessions long enough to need a break
    #[must_use]
    pub fn extended_sessions(&self, tasks: &[Task]) -> MonitorReport<SessionEvidence> {
        let c = &self.config;
        let sessions = work_sessions(tasks, self.metrics.session_gap_minutes());
        let extended: Vec<ExtendedSession> = sessions
            .iter()
            .filter(|s| s.span_hours() >= c.extended_session_hours)
            .map(|s| ExtendedSession {
                start: s.start,
                end: s.end,
                hours: s.span_hours(),
                task_count: s.task_count,
                severity: if s.span_hours() >= c.critical_session_hours {
                    Severity::Critical
                } else {
                    Severity::Medium
                },
            })
            .collect();

        let evidence = SessionEvidence {
            sessions_analyzed: sessions.len(),
            longest_session_hours: sessions.iter().map(|s| s.span_hours()).fold(0.0, f64::max),
            extended,
        };
        if evidence.extended.is_empty() {
            return MonitorReport::quiet(evidence, !sessions.is_empty());
        }

        let total_hours: f64 = evidence.extended.iter().map(|s| s.hours).sum();
        MonitorReport {
            is_anomaly: true,
            severity: evidence.extended.iter().map(|s| s.severity).max(),
            alerts: vec![format!(
                "{} extended work sessions detected ({total_hours:.1} hours without breaks)",
                evidence.extended.len()
            )],
            evidence,
            recommendation: Some(
                "Take regular breaks every 60-90 minutes to maintain focus and prevent burnout."
                    .to_owned(),
            ),
            data_sufficient: true,
        }
    }

    /// Run every monitor and fold the results
    #[must_use]
    pub fn anomaly_report(
        &self,
        tasks: &[Task],
        moods: &[MoodRecord],
        as_of: DateTime<Utc>,
    ) -> AnomalyReport {
        let window = self.config.drop_baseline_days + self.config.recent_window_days;
        let series = self
            .metrics
            .daily_score_series(tasks, as_of.date_naive(), window);
        // A window without any task has nothing to judge
        let daily_scores: Vec<(NaiveDate, f64)> = if series.iter().all(|d| d.total_tasks == 0) {
            Vec::new()
        } else {
            series
                .into_iter()
                .filter(|d| !self.is_rest_day(d.date, d.total_tasks))
                .map(|d| (d.date, d.productivity_score))
                .collect()
        };

        let unusual_hours = self.unusual_work_hours(tasks);
        let productivity_drops = self.productivity_drops(&daily_scores);
        let mood_deterioration = self.mood_deterioration(moods);
        let workload_spikes = self.workload_spikes(tasks);
        let extended_sessions = self.extended_sessions(tasks);

        // Monitor order breaks ties between equal severities
        let fired = [
            (mood_deterioration.is_anomaly, mood_deterioration.severity, MOOD_ADVICE),
            (unusual_hours.is_anomaly, unusual_hours.severity, HOURS_ADVICE),
            (productivity_drops.is_anomaly, productivity_drops.severity, DROP_ADVICE),
            (workload_spikes.is_anomaly, workload_spikes.severity, SPIKE_ADVICE),
            (extended_sessions.is_anomaly, extended_sessions.severity, SESSION_ADVICE),
        ];
        let anomaly_count = fired.iter().filter(|(is_anomaly, _, _)| *is_anomaly).count();

        let mut ranked: Vec<(Severity, &str)> = fired
            .iter()
            .filter(|(is_anomaly, _, _)| *is_anomaly)
            .map(|(_, severity, text)| (severity.unwrap_or(Severity::Medium), *text))
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        let mut priority_recommendations: Vec<String> = ranked
            .into_iter()
            .map(|(severity, text)| format!("{}: {text}", severity.label()))
            .collect();
        if priority_recommendations.is_empty() {
            priority_recommendations.push(NO_ISSUES_ADVICE.to_owned());
        }

        let alerts: Vec<String> = [
            &unusual_hours.alerts,
            &productivity_drops.alerts,
            &mood_deterioration.alerts,
            &workload_spikes.alerts,
            &extended_sessions.alerts,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect();

        let overall_status = OverallStatus::from_anomaly_count(anomaly_count);
        if overall_status == OverallStatus::Healthy {
            debug!(sensitivity = self.config.sensitivity, "No anomalies detected");
        } else {
            warn!(
                anomaly_count,
                status = %overall_status,
                alerts = alerts.len(),
                "Anomalies detected"
            );
        }

        AnomalyReport {
            unusual_hours,
            productivity_drops,
            mood_deterioration,
            workload_spikes,
            extended_sessions,
            anomaly_count,
            overall_status,
            alerts,
            priority_recommendations,
            sensitivity: self.config.sensitivity,
        }
    }
}

const MOOD_ADVICE: &str = "Mood deterioration detected. Take immediate action for mental health.";
const HOURS_ADVICE: &str = "Irregular or late-night work. Establish work hour boundaries.";
const DROP_ADVICE: &str = "Sustained productivity drop. Review workload and address blockers.";
const SPIKE_ADVICE: &str = "Workload spikes detected. Delegate or defer non-critical tasks.";
const SESSION_ADVICE: &str = "Long work sessions without breaks. Schedule regular breaks.";
const NO_ISSUES_ADVICE: &str = "No urgent issues detected. Continue current practices.";
