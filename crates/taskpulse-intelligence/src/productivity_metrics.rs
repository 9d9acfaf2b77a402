// ABOUTME: Productivity metrics calculator for daily, weekly, focus and efficiency scores
// ABOUTME: Empty windows yield all-zero metrics rather than errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

//! # Productivity Metrics
//!
//! Turns task records into 0-100 scores. The daily productivity score is a
//! weighted sum of four normalised factors:
//!
//! | Factor | Default weight | Value |
//! |---|---|---|
//! | completion | 0.4 | completed / total |
//! | volume | 0.3 | min(1, completed / baseline) |
//! | priority | 0.2 | average completed priority / 10 |
//! | time | 0.1 | min(1, sum estimated / sum actual) |

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{AnalyticsConfig, MetricsConfig, PatternConfig};
use crate::confidence::{ConfidenceLevel, SampleSize};
use crate::sessions::work_sessions;
use crate::statistical_analysis::StatisticalAnalyzer;
use taskpulse_core::constants::{priority, score, time};
use taskpulse_core::models::{Task, TaskStatus};

/// Metrics for one calendar day (tasks created that day)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    /// Calendar date (UTC)
    pub date: NaiveDate,
    /// Tasks created that day
    pub total_tasks: usize,
    /// Of those, completed
    pub completed_tasks: usize,
    /// Of those, still pending
    pub pending_tasks: usize,
    /// Of those, cancelled
    pub cancelled_tasks: usize,
    /// completed / total, 0 when no tasks
    pub completion_rate: f64,
    /// Actual minutes of completed tasks
    pub total_minutes: u64,
    /// Average actual minutes per completed task
    pub average_minutes: f64,
    /// Completed tasks at or above the high-priority threshold
    pub high_priority_completed: usize,
    /// Average priority of completed tasks
    pub average_priority: f64,
    /// Weighted productivity score (0-100)
    pub productivity_score: f64,
}

impl DailyMetrics {
    /// All-zero metrics for a day without tasks
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_tasks: 0,
            completed_tasks: 0,
            pending_tasks: 0,
            cancelled_tasks: 0,
            completion_rate: 0.0,
            total_minutes: 0,
            average_minutes: 0.0,
            high_priority_completed: 0,
            average_priority: 0.0,
            productivity_score: 0.0,
        }
    }
}

/// Metrics for a seven-day week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMetrics {
    /// First day of the week
    pub week_start: NaiveDate,
    /// Last day of the week
    pub week_end: NaiveDate,
    /// One entry per day, in order
    pub daily: Vec<DailyMetrics>,
    /// Tasks created during the week
    pub total_tasks: usize,
    /// Of those, completed
    pub completed_tasks: usize,
    /// Actual minutes of completed tasks
    pub total_minutes: u64,
    /// Mean daily completion rate over all seven days
    pub average_completion_rate: f64,
    /// Mean daily productivity score over all seven days
    pub average_productivity_score: f64,
    /// Days with at least one task
    pub working_days: usize,
    /// Highest-scoring day, `None` when every day scored 0
    pub most_productive_day: Option<NaiveDate>,
}

/// Focus and deep-work metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusMetrics {
    /// Hours spent on long, high-priority tasks
    pub deep_work_hours: f64,
    /// Reconstructed work sessions
    pub session_count: usize,
    /// Task switches inside sessions
    pub interruptions: usize,
    /// Single-task sessions of sufficient length
    pub uninterrupted_sessions: usize,
    /// Longest session span in minutes
    pub longest_session_minutes: i64,
    /// Weighted focus score (0-100)
    pub focus_score: f64,
}

/// Estimate accuracy metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyMetrics {
    /// Completed tasks with both estimated and actual durations
    pub tasks_measured: usize,
    /// Mean of actual / estimated
    pub average_ratio: f64,
    /// min(100, 100 / average ratio), 0 when nothing measured
    pub efficiency_score: f64,
    /// 100 - |1 - average ratio| * 100, clamped to 0-100
    pub estimation_accuracy: f64,
    /// Tasks that finished well under their estimate
    pub over_estimated: usize,
    /// Tasks that ran well over their estimate
    pub under_estimated: usize,
}

/// Headline totals over the whole snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivitySummary {
    /// All tasks
    pub total_tasks: usize,
    /// Completed tasks
    pub completed_tasks: usize,
    /// completed / total, 0 when no tasks
    pub completion_rate: f64,
}

/// Full productivity report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityReport {
    /// Headline totals
    pub summary: ProductivitySummary,
    /// Metrics for the reference day
    pub today: DailyMetrics,
    /// Metrics for the Monday-start week containing the reference day
    pub this_week: WeeklyMetrics,
    /// Focus metrics over the snapshot
    pub focus: FocusMetrics,
    /// Efficiency metrics over the snapshot
    pub efficiency: EfficiencyMetrics,
    /// Data behind the report
    pub sample: SampleSize,
    /// How far to trust the report
    pub confidence: ConfidenceLevel,
}

/// Productivity metrics calculator
#[derive(Debug, Clone, Default)]
pub struct ProductivityMetricsCalculator {
    config: MetricsConfig,
    patterns: PatternConfig,
}

impl ProductivityMetricsCalculator {
    /// Creates a calculator from the engine configuration
    #[must_use]
    pub fn new(config: &AnalyticsConfig) -> Self {
        Self {
            config: config.metrics.clone(),
            patterns: config.patterns.clone(),
        }
    }

    /// Metrics for tasks created on `date`
    #[must_use]
    pub fn daily_metrics(&self, tasks: &[Task], date: NaiveDate) -> DailyMetrics {
        let day: Vec<&Task> = tasks.iter().filter(|t| t.created_date() == date).collect();
        if day.is_empty() {
            return DailyMetrics::empty(date);
        }

        let count = |status: TaskStatus| day.iter().filter(|t| t.status() == status).count();
        let completed: Vec<&Task> = day.iter().copied().filter(|t| t.is_completed()).collect();

        let total_minutes: u64 = completed
            .iter()
            .map(|t| u64::from(t.worked_minutes()))
            .sum();
        let completion_rate =
            StatisticalAnalyzer::safe_ratio(completed.len() as f64, day.len() as f64, 0.0);
        let average_minutes =
            StatisticalAnalyzer::safe_ratio(total_minutes as f64, completed.len() as f64, 0.0);
        let average_priority = StatisticalAnalyzer::safe_ratio(
            completed.iter().map(|t| f64::from(t.priority())).sum(),
            completed.len() as f64,
            0.0,
        );

        let productivity_score = self.productivity_score(
            completion_rate,
            completed.len(),
            average_priority,
            &completed,
        );

        DailyMetrics {
            date,
            total_tasks: day.len(),
            completed_tasks: completed.len(),
            pending_tasks: count(TaskStatus::Pending),
            cancelled_tasks: count(TaskStatus::Cancelled),
            completion_rate,
            total_minutes,
            average_minutes,
            high_priority_completed: completed
                .iter()
                .filter(|t| t.priority() >= self.config.high_priority_threshold)
                .count(),
            average_priority,
            productivity_score,
        }
    }

    /// Weighted 0-100 score from the four daily factors
    fn productivity_score(
        &self,
        completion_rate: f64,
        completed: usize,
        average_priority: f64,
        completed_tasks: &[&Task],
    ) -> f64 {
        let volume_factor = (completed as f64 / f64::from(self.config.volume_baseline)).min(1.0);
        let priority_factor = average_priority / f64::from(priority::MAX);
        let time_factor = Self::time_factor(completed_tasks);

        let weighted = self.config.time_weight.mul_add(
            time_factor,
            self.config.priority_weight.mul_add(
                priority_factor,
                self.config.completion_weight.mul_add(
                    completion_rate,
                    self.config.volume_weight * volume_factor,
                ),
            ),
        );
        (weighted * score::MAX).clamp(score::MIN, score::MAX)
    }

    /// min(1, sum estimated / sum actual) over tasks with both durations
    fn time_factor(completed: &[&Task]) -> f64 {
        let (estimated, actual) = completed
            .iter()
            .filter(|t| t.estimated_minutes() > 0 && t.actual_minutes().is_some_and(|m| m > 0))
            .fold((0.0, 0.0), |(est, act), t| {
                (
                    est + f64::from(t.estimated_minutes()),
                    act + f64::from(t.worked_minutes()),
                )
            });
        StatisticalAnalyzer::safe_ratio(estimated, actual, 0.0).min(1.0)
    }

    /// Seven daily metrics starting at `week_start`
    #[must_use]
    pub fn weekly_metrics(&self, tasks: &[Task], week_start: NaiveDate) -> WeeklyMetrics {
        let daily: Vec<DailyMetrics> = (0..time::DAYS_PER_WEEK)
            .map(|offset| self.daily_metrics(tasks, week_start + Duration::days(offset)))
            .collect();

        let days = daily.len() as f64;
        let most_productive_day = daily
            .iter()
            .filter(|d| d.productivity_score > 0.0)
            .fold(None::<&DailyMetrics>, |best, day| match best {
                Some(b) if b.productivity_score >= day.productivity_score => Some(b),
                _ => Some(day),
            })
            .map(|d| d.date);

        WeeklyMetrics {
            week_start,
            week_end: week_start + Duration::days(time::DAYS_PER_WEEK - 1),
            total_tasks: daily.iter().map(|d| d.total_tasks).sum(),
            completed_tasks: daily.iter().map(|d| d.completed_tasks).sum(),
            total_minutes: daily.iter().map(|d| d.total_minutes).sum(),
            average_completion_rate: daily.iter().map(|d| d.completion_rate).sum::<f64>() / days,
            average_productivity_score: daily.iter().map(|d| d.productivity_score).sum::<f64>()
                / days,
            working_days: daily.iter().filter(|d| d.total_tasks > 0).count(),
            most_productive_day,
            daily,
        }
    }

    /// Focus metrics over all completed tasks
    #[must_use]
    pub fn focus_metrics(&self, tasks: &[Task]) -> FocusMetrics {
        let deep_work_minutes: u64 = tasks
            .iter()
            .filter(|t| self.is_deep_work(t))
            .map(|t| u64::from(t.worked_minutes()))
            .sum();
        let deep_work_hours = deep_work_minutes as f64 / time::MINUTES_PER_HOUR;

        let sessions = work_sessions(tasks, self.config.session_gap_minutes);
        let interruptions: usize = sessions.iter().map(|s| s.interruptions()).sum();
        let uninterrupted_sessions = sessions
            .iter()
            .filter(|s| {
                s.task_count == 1
                    && s.span_minutes() >= i64::from(self.config.min_uninterrupted_minutes)
            })
            .count();
        let longest_session_minutes = sessions.iter().map(|s| s.span_minutes()).max().unwrap_or(0);

        let focus_score = if tasks.iter().any(Task::is_completed) {
            self.focus_score(deep_work_hours, interruptions, uninterrupted_sessions)
        } else {
            0.0
        };

        FocusMetrics {
            deep_work_hours,
            session_count: sessions.len(),
            interruptions,
            uninterrupted_sessions,
            longest_session_minutes,
            focus_score,
        }
    }

    fn focus_score(&self, hours: f64, interruptions: usize, sessions: usize) -> f64 {
        let c = &self.config;
        let hours_factor = (hours / c.target_deep_work_hours).min(1.0);
        let interruption_factor = (1.0 - interruptions as f64 / c.max_interruptions).max(0.0);
        let session_factor = (sessions as f64 / c.target_uninterrupted_sessions).min(1.0);

        let weighted = c.focus_session_weight.mul_add(
            session_factor,
            c.focus_deep_work_weight
                .mul_add(hours_factor, c.focus_interruption_weight * interruption_factor),
        );
        (weighted * score::MAX).clamp(score::MIN, score::MAX)
    }

    /// Whether a task is completed deep work
    #[must_use]
    pub fn is_deep_work(&self, task: &Task) -> bool {
        task.is_completed()
            && task.worked_minutes() > self.config.deep_work_min_minutes
            && task.priority() >= self.config.high_priority_threshold
    }

    /// Whether a task is a completed quick win
    #[must_use]
    pub fn is_quick_win(&self, task: &Task) -> bool {
        task.is_completed()
            && task
                .actual_minutes()
                .is_some_and(|m| m < self.config.quick_task_max_minutes)
    }

    /// Estimate accuracy over completed tasks with both durations
    #[must_use]
    pub fn efficiency_metrics(&self, tasks: &[Task]) -> EfficiencyMetrics {
        let ratios: Vec<f64> = tasks
            .iter()
            .filter(|t| t.is_completed() && t.estimated_minutes() > 0)
            .filter_map(|t| {
                t.actual_minutes()
                    .filter(|m| *m > 0)
                    .map(|m| f64::from(m) / f64::from(t.estimated_minutes()))
            })
            .collect();

        if ratios.is_empty() {
            return EfficiencyMetrics {
                tasks_measured: 0,
                average_ratio: 0.0,
                efficiency_score: 0.0,
                estimation_accuracy: 0.0,
                over_estimated: 0,
                under_estimated: 0,
            };
        }

        let average_ratio = StatisticalAnalyzer::mean(&ratios);
        EfficiencyMetrics {
            tasks_measured: ratios.len(),
            average_ratio,
            efficiency_score: StatisticalAnalyzer::safe_ratio(score::MAX, average_ratio, 0.0)
                .clamp(score::MIN, score::MAX),
            estimation_accuracy: (1.0 - average_ratio)
                .abs()
                .mul_add(-score::MAX, score::MAX)
                .clamp(score::MIN, score::MAX),
            over_estimated: ratios
                .iter()
                .filter(|r| **r < self.config.over_estimate_ratio)
                .count(),
            under_estimated: ratios
                .iter()
                .filter(|r| **r > self.config.under_estimate_ratio)
                .count(),
        }
    }

    /// Everything above for the snapshot, anchored at `as_of`
    #[must_use]
    pub fn comprehensive_report(&self, tasks: &[Task], as_of: DateTime<Utc>) -> ProductivityReport {
        let today = as_of.date_naive();
        let completed = tasks.iter().filter(|t| t.is_completed()).count();
        let sample = SampleSize::of_tasks(tasks);

        let report = ProductivityReport {
            summary: ProductivitySummary {
                total_tasks: tasks.len(),
                completed_tasks: completed,
                completion_rate: StatisticalAnalyzer::safe_ratio(
                    completed as f64,
                    tasks.len() as f64,
                    0.0,
                ),
            },
            today: self.daily_metrics(tasks, today),
            this_week: self.weekly_metrics(tasks, week_start(today)),
            focus: self.focus_metrics(tasks),
            efficiency: self.efficiency_metrics(tasks),
            confidence: self.confidence_for(sample),
            sample,
        };

        debug!(
            tasks = report.summary.total_tasks,
            completion_rate = report.summary.completion_rate,
            today_score = report.today.productivity_score,
            confidence = %report.confidence,
            "Computed productivity report"
        );
        report
    }

    /// Daily metrics for every calendar day in the `days`-day window ending at `end`
    ///
    /// Days without tasks are included as [`DailyMetrics::empty`] so that an
    /// idle stretch shows up as zero scores rather than disappearing.
    #[must_use]
    pub fn daily_score_series(&self, tasks: &[Task], end: NaiveDate, days: usize) -> Vec<DailyMetrics> {
        let span = window_days(days);
        let first = end - Duration::days(span - 1);
        let window: Vec<Task> = tasks
            .iter()
            .filter(|t| (first..=end).contains(&t.created_date()))
            .cloned()
            .collect();

        (0..span)
            .map(|offset| self.daily_metrics(&window, first + Duration::days(offset)))
            .collect()
    }

    /// Average weekly score for up to `weeks` complete weeks, then the current week
    ///
    /// Weeks before the first week containing any task are skipped. The
    /// current week is averaged over the days elapsed up to `today`.
    #[must_use]
    pub fn weekly_score_history(&self, tasks: &[Task], today: NaiveDate, weeks: usize) -> Vec<f64> {
        let Some(first_task_day) = tasks.iter().map(Task::created_date).min() else {
            return Vec::new();
        };
        let current_week = week_start(today);
        let weeks = i64::try_from(weeks).unwrap_or(i64::MAX);

        let mut history: Vec<f64> = (1..=weeks)
            .rev()
            .map(|back| current_week - Duration::days(back * time::DAYS_PER_WEEK))
            .filter(|start| *start + Duration::days(time::DAYS_PER_WEEK - 1) >= first_task_day)
            .map(|start| self.weekly_metrics(tasks, start).average_productivity_score)
            .collect();

        let elapsed: Vec<f64> = (0..=(today - current_week).num_days())
            .map(|offset| {
                self.daily_metrics(tasks, current_week + Duration::days(offset))
                    .productivity_score
            })
            .collect();
        if current_week + Duration::days(time::DAYS_PER_WEEK - 1) >= first_task_day {
            history.push(StatisticalAnalyzer::mean(&elapsed));
        }
        history
    }

    /// Confidence band for a sample
    #[must_use]
    pub fn confidence_for(&self, sample: SampleSize) -> ConfidenceLevel {
        let p = &self.patterns;
        if sample.tasks < p.low_confidence_tasks || sample.distinct_days < p.low_confidence_days {
            ConfidenceLevel::Low
        } else if sample.tasks >= p.high_confidence_tasks
            && sample.distinct_days >= p.high_confidence_days
        {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::Medium
        }
    }

    /// Configured high-priority threshold
    #[must_use]
    pub const fn high_priority_threshold(&self) -> u8 {
        self.config.high_priority_threshold
    }

    /// Configured quick-task ceiling in minutes
    #[must_use]
    pub const fn quick_task_max_minutes(&self) -> u32 {
        self.config.quick_task_max_minutes
    }

    /// Configured session gap in minutes
    #[must_use]
    pub const fn session_gap_minutes(&self) -> u32 {
        self.config.session_gap_minutes
    }
}

/// Day count of a window, clamped to 1..=`MAX_WINDOW_DAYS`
#[must_use]
pub fn window_days(days: usize) -> i64 {
    i64::try_from(days)
        .unwrap_or(time::MAX_WINDOW_DAYS)
        .clamp(1, time::MAX_WINDOW_DAYS)
}

/// Monday of the week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
