// ABOUTME: Pattern recognition engine finding peak hours, weekday rhythm and mood correlations
// ABOUTME: Every result carries its sample size and a confidence level, results are never withheld
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::ops::RangeInclusive;
use tracing::debug;

use crate::config::{AnalyticsConfig, PatternConfig};
use crate::confidence::{ConfidenceLevel, SampleSize};
use crate::mood_scale;
use crate::productivity_metrics::ProductivityMetricsCalculator;
use crate::statistical_analysis::StatisticalAnalyzer;
use taskpulse_core::constants::{priority, score};
use taskpulse_core::models::{MoodRecord, Task, TaskMode};

const MORNING_HOURS: RangeInclusive<u32> = 6..=11;
const AFTERNOON_HOURS: RangeInclusive<u32> = 12..=17;
const EVENING_HOURS: RangeInclusive<u32> = 18..=22;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Segment of the working day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    /// 06:00-11:59
    Morning,
    /// 12:00-17:59
    Afternoon,
    /// 18:00-22:59
    Evening,
    /// Nothing scored in any segment
    Unknown,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Score of a single hour-of-day bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyScore {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Completed tasks created in this hour
    pub completed: usize,
    /// Sum of priority / 10 over those tasks
    pub raw_score: f64,
    /// raw_score relative to the best hour (0-100)
    pub score: f64,
}

/// Hour-of-day productivity profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyProductivity {
    /// Hours with at least one completed task, ascending
    pub hourly: Vec<HourlyScore>,
    /// Top hours by score, ascending
    pub peak_hours: Vec<u32>,
    /// Segment with the largest score sum
    pub best_time_of_day: TimeOfDay,
    /// Score sum over morning hours
    pub morning_score: f64,
    /// Score sum over afternoon hours
    pub afternoon_score: f64,
    /// Score sum over evening hours
    pub evening_score: f64,
    /// Data behind the result
    pub sample: SampleSize,
    /// How far to trust the result
    pub confidence: ConfidenceLevel,
}

/// Completion statistics for one weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayStats {
    /// The weekday
    pub weekday: Weekday,
    /// Tasks created on this weekday
    pub total_tasks: usize,
    /// Of those, completed
    pub completed_tasks: usize,
    /// completed / total, 0 when no tasks
    pub completion_rate: f64,
}

/// Weekday rhythm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPattern {
    /// Monday to Sunday
    pub days: Vec<WeekdayStats>,
    /// Weekday with the highest completion rate
    pub best_day: Option<Weekday>,
    /// Weekday with the lowest completion rate
    pub worst_day: Option<Weekday>,
    /// Completion rate over Monday-Friday tasks
    pub weekday_completion_rate: f64,
    /// Completion rate over Saturday-Sunday tasks
    pub weekend_completion_rate: f64,
    /// Whether any task was created on a weekend
    pub works_on_weekends: bool,
    /// Data behind the result
    pub sample: SampleSize,
    /// How far to trust the result
    pub confidence: ConfidenceLevel,
}

/// Completion statistics for one mood label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodStats {
    /// Normalised mood label
    pub label: String,
    /// Tasks created in this mood
    pub total_tasks: usize,
    /// Of those, completed
    pub completed_tasks: usize,
    /// completed / total
    pub completion_rate: f64,
    /// Mean energy of mood records with this label
    pub average_energy: Option<f64>,
    /// Position of the label on the 1-10 mood scale
    pub valence: u8,
}

/// Mood to completion correlation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodCorrelation {
    /// All labels, best first
    pub ranking: Vec<MoodStats>,
    /// Leading labels of the ranking
    pub best_moods: Vec<String>,
    /// Labels whose mood records average high energy
    pub high_energy_moods: Vec<String>,
    /// Mood-specific advice
    pub insights: Vec<String>,
    /// Data behind the result
    pub sample: SampleSize,
    /// How far to trust the result
    pub confidence: ConfidenceLevel,
}

/// Shape of completed work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionPattern {
    /// Completed tasks considered
    pub completed_tasks: usize,
    /// Completed in under the quick-task ceiling
    pub quick_wins: usize,
    /// quick_wins as a percentage of completed
    pub quick_wins_percentage: f64,
    /// Long high-priority completed tasks
    pub deep_work_tasks: usize,
    /// deep_work_tasks as a percentage of completed
    pub deep_work_percentage: f64,
    /// Completed tasks per day with any completion
    pub average_completed_per_day: f64,
    /// Most frequent priority among completed tasks (ties go to the higher)
    pub most_common_priority: Option<u8>,
    /// Completed tasks per mode
    pub mode_distribution: BTreeMap<TaskMode, usize>,
    /// Data behind the result
    pub sample: SampleSize,
    /// How far to trust the result
    pub confidence: ConfidenceLevel,
}

/// Condensed behavioural profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternProfile {
    /// Peak hours, ascending
    pub peak_hours: Vec<u32>,
    /// Best segment of the day
    pub best_time_of_day: TimeOfDay,
    /// Best weekday
    pub best_day: Option<Weekday>,
    /// Worst weekday
    pub worst_day: Option<Weekday>,
    /// Best moods for productivity
    pub best_moods: Vec<String>,
    /// Quick-win count
    pub quick_wins: usize,
    /// Deep-work count
    pub deep_work_tasks: usize,
}

/// Every pattern plus a profile and advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternReport {
    /// Hour-of-day profile
    pub productive_hours: HourlyProductivity,
    /// Weekday rhythm
    pub weekly: WeeklyPattern,
    /// Mood correlation
    pub mood: MoodCorrelation,
    /// Shape of completed work
    pub completion: CompletionPattern,
    /// Condensed profile
    pub profile: PatternProfile,
    /// Actionable advice
    pub insights: Vec<String>,
    /// Data behind the report
    pub sample: SampleSize,
    /// How far to trust the report
    pub confidence: ConfidenceLevel,
}

/// Pattern recognition engine
#[derive(Debug, Clone, Default)]
pub struct PatternRecognizer {
    config: PatternConfig,
    metrics: ProductivityMetricsCalculator,
}

impl PatternRecognizer {
    /// Creates a recognizer from the engine configuration
    #[must_use]
    pub fn new(config: &AnalyticsConfig) -> Self {
        Self {
            config: config.patterns.clone(),
            metrics: ProductivityMetricsCalculator::new(config),
        }
    }

    fn sample_of(&self, tasks: &[Task]) -> (SampleSize, ConfidenceLevel) {
        let sample = SampleSize::of_tasks(tasks);
        (sample, self.metrics.confidence_for(sample))
    }

    /// Peak hours and best time of day from completed tasks
    #[must_use]
    pub fn productive_hours(&self, tasks: &[Task]) -> HourlyProductivity {
        let mut buckets: BTreeMap<u32, (usize, f64)> = BTreeMap::new();
        for task in tasks.iter().filter(|t| t.is_completed()) {
            let entry = buckets.entry(task.created_hour()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += f64::from(task.priority()) / f64::from(priority::MAX);
        }

        let max_raw = buckets.values().map(|(_, raw)| *raw).fold(0.0, f64::max);
        let hourly: Vec<HourlyScore> = buckets
            .into_iter()
            .map(|(hour, (completed, raw_score))| HourlyScore {
                hour,
                completed,
                raw_score,
                score: StatisticalAnalyzer::safe_ratio(raw_score, max_raw, 0.0) * score::MAX,
            })
            .collect();

        let mut ranked: Vec<&HourlyScore> = hourly.iter().filter(|h| h.score > 0.0).collect();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(a.hour.cmp(&b.hour))
        });
        let mut peak_hours: Vec<u32> = ranked
            .into_iter()
            .take(self.config.peak_hour_count)
            .map(|h| h.hour)
            .collect();
        peak_hours.sort_unstable();

        let segment_score = |hours: &RangeInclusive<u32>| -> f64 {
            hourly
                .iter()
                .filter(|h| hours.contains(&h.hour))
                .map(|h| h.score)
                .sum()
        };
        let morning_score = segment_score(&MORNING_HOURS);
        let afternoon_score = segment_score(&AFTERNOON_HOURS);
        let evening_score = segment_score(&EVENING_HOURS);

        let best_time_of_day = [
            (TimeOfDay::Afternoon, afternoon_score),
            (TimeOfDay::Evening, evening_score),
        ]
        .into_iter()
        .fold((TimeOfDay::Morning, morning_score), |best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        });
        let best_time_of_day = if best_time_of_day.1 > 0.0 {
            best_time_of_day.0
        } else {
            TimeOfDay::Unknown
        };

        let (sample, confidence) = self.sample_of(tasks);
        HourlyProductivity {
            hourly,
            peak_hours,
            best_time_of_day,
            morning_score,
            afternoon_score,
            evening_score,
            sample,
            confidence,
        }
    }

    /// Completion rate per weekday of creation
    #[must_use]
    pub fn weekly_pattern(&self, tasks: &[Task]) -> WeeklyPattern {
        let days: Vec<WeekdayStats> = WEEK
            .iter()
            .map(|weekday| {
                let on_day: Vec<&Task> = tasks
                    .iter()
                    .filter(|t| t.created_at().weekday() == *weekday)
                    .collect();
                let completed = on_day.iter().filter(|t| t.is_completed()).count();
                WeekdayStats {
                    weekday: *weekday,
                    total_tasks: on_day.len(),
                    completed_tasks: completed,
                    completion_rate: StatisticalAnalyzer::safe_ratio(
                        completed as f64,
                        on_day.len() as f64,
                        0.0,
                    ),
                }
            })
            .collect();

        let active = || days.iter().filter(|d| d.total_tasks > 0);
        let best_day = active()
            .fold(None::<&WeekdayStats>, |best, day| match best {
                Some(b) if b.completion_rate >= day.completion_rate => Some(b),
                _ => Some(day),
            })
            .map(|d| d.weekday);
        let worst_day = active()
            .fold(None::<&WeekdayStats>, |worst, day| match worst {
                Some(w) if w.completion_rate <= day.completion_rate => Some(w),
                _ => Some(day),
            })
            .map(|d| d.weekday);

        let rate_over = |range: &[WeekdayStats]| {
            let total: usize = range.iter().map(|d| d.total_tasks).sum();
            let completed: usize = range.iter().map(|d| d.completed_tasks).sum();
            StatisticalAnalyzer::safe_ratio(completed as f64, total as f64, 0.0)
        };
        let (weekdays, weekend) = days.split_at(5);
        let weekday_completion_rate = rate_over(weekdays);
        let weekend_completion_rate = rate_over(weekend);
        let works_on_weekends = weekend.iter().any(|d| d.total_tasks > 0);

        let (sample, confidence) = self.sample_of(tasks);
        WeeklyPattern {
            best_day,
            worst_day,
            weekday_completion_rate,
            weekend_completion_rate,
            works_on_weekends,
            days,
            sample,
            confidence,
        }
    }

    /// Completion rate per creation mood, with energy from mood history
    #[must_use]
    pub fn mood_correlation(&self, tasks: &[Task], moods: &[MoodRecord]) -> MoodCorrelation {
        let mut energy_by_label: HashMap<String, Vec<f64>> = HashMap::new();
        for record in moods {
            energy_by_label
                .entry(record.normalized_label())
                .or_default()
                .push(f64::from(record.energy_level));
        }
        let average_energy = |label: &str| {
            energy_by_label
                .get(label)
                .map(|values| StatisticalAnalyzer::mean(values))
        };

        let mut by_label: BTreeMap<String, (usize, usize)> = BTreeMap::new();
        for task in tasks {
            let Some(label) = task.mood().map(|m| m.trim().to_lowercase()) else {
                continue;
            };
            if label.is_empty() {
                continue;
            }
            let entry = by_label.entry(label).or_insert((0, 0));
            entry.0 += 1;
            if task.is_completed() {
                entry.1 += 1;
            }
        }

        let mut ranking: Vec<MoodStats> = by_label
            .into_iter()
            .map(|(label, (total, completed))| MoodStats {
                average_energy: average_energy(&label),
                valence: mood_scale::score_for_label(&label),
                completion_rate: StatisticalAnalyzer::safe_ratio(
                    completed as f64,
                    total as f64,
                    0.0,
                ),
                total_tasks: total,
                completed_tasks: completed,
                label,
            })
            .collect();
        ranking.sort_by(|a, b| {
            b.completion_rate
                .partial_cmp(&a.completion_rate)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    b.average_energy
                        .unwrap_or(f64::NEG_INFINITY)
                        .partial_cmp(&a.average_energy.unwrap_or(f64::NEG_INFINITY))
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.label.cmp(&b.label))
        });

        let best_moods: Vec<String> = ranking
            .iter()
            .filter(|m| m.completed_tasks > 0)
            .take(self.config.best_mood_count)
            .map(|m| m.label.clone())
            .collect();

        let mut energetic: Vec<(String, f64)> = energy_by_label
            .iter()
            .map(|(label, values)| (label.clone(), StatisticalAnalyzer::mean(values)))
            .filter(|(_, energy)| *energy >= self.config.high_energy_threshold)
            .collect();
        energetic.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        let high_energy_moods: Vec<String> = energetic.into_iter().map(|(label, _)| label).collect();

        let mut insights = Vec::new();
        if let Some(top) = best_moods.first() {
            insights.push(format!(
                "You're most productive when feeling '{top}'. Try to schedule important tasks during these mood states."
            ));
        }
        if !high_energy_moods.is_empty() {
            let leading: Vec<&str> = high_energy_moods.iter().take(2).map(String::as_str).collect();
            insights.push(format!(
                "Your energy is highest when {}. Perfect time for challenging tasks!",
                leading.join(", ")
            ));
        }

        let (sample, confidence) = self.sample_of(tasks);
        MoodCorrelation {
            ranking,
            best_moods,
            high_energy_moods,
            insights,
            sample,
            confidence,
        }
    }

    /// Quick wins, deep work and the shape of completed tasks
    #[must_use]
    pub fn completion_pattern(&self, tasks: &[Task]) -> CompletionPattern {
        let completed: Vec<&Task> = tasks.iter().filter(|t| t.is_completed()).collect();
        let quick_wins = completed
            .iter()
            .filter(|t| self.metrics.is_quick_win(t))
            .count();
        let deep_work_tasks = completed
            .iter()
            .filter(|t| self.metrics.is_deep_work(t))
            .count();
        let percentage = |count: usize| {
            StatisticalAnalyzer::safe_ratio(count as f64, completed.len() as f64, 0.0) * score::MAX
        };

        let active_days: BTreeSet<NaiveDate> = completed
            .iter()
            .filter_map(|t| t.completed_at().map(|at| at.date_naive()))
            .collect();

        let mut priorities: BTreeMap<u8, usize> = BTreeMap::new();
        let mut mode_distribution: BTreeMap<TaskMode, usize> = BTreeMap::new();
        for task in &completed {
            *priorities.entry(task.priority()).or_default() += 1;
            *mode_distribution.entry(task.mode()).or_default() += 1;
        }
        // Ascending iteration with >= keeps the highest priority among ties
        let most_common_priority = priorities
            .iter()
            .fold(None::<(u8, usize)>, |best, (p, n)| match best {
                Some((_, best_n)) if best_n > *n => best,
                _ => Some((*p, *n)),
            })
            .map(|(p, _)| p);

        let (sample, confidence) = self.sample_of(tasks);
        CompletionPattern {
            completed_tasks: completed.len(),
            quick_wins,
            quick_wins_percentage: percentage(quick_wins),
            deep_work_tasks,
            deep_work_percentage: percentage(deep_work_tasks),
            average_completed_per_day: StatisticalAnalyzer::safe_ratio(
                completed.len() as f64,
                active_days.len() as f64,
                0.0,
            ),
            most_common_priority,
            mode_distribution,
            sample,
            confidence,
        }
    }

    /// All patterns, the condensed profile and actionable insights
    #[must_use]
    pub fn pattern_report(&self, tasks: &[Task], moods: &[MoodRecord]) -> PatternReport {
        let productive_hours = self.productive_hours(tasks);
        let weekly = self.weekly_pattern(tasks);
        let mood = self.mood_correlation(tasks, moods);
        let completion = self.completion_pattern(tasks);

        let profile = PatternProfile {
            peak_hours: productive_hours.peak_hours.clone(),
            best_time_of_day: productive_hours.best_time_of_day,
            best_day: weekly.best_day,
            worst_day: weekly.worst_day,
            best_moods: mood.best_moods.clone(),
            quick_wins: completion.quick_wins,
            deep_work_tasks: completion.deep_work_tasks,
        };
        let insights = actionable_insights(&profile, &weekly, &completion);
        let (sample, confidence) = self.sample_of(tasks);

        debug!(
            peak_hours = ?profile.peak_hours,
            best_time_of_day = %profile.best_time_of_day,
            insights = insights.len(),
            confidence = %confidence,
            "Recognized behavioural patterns"
        );

        PatternReport {
            productive_hours,
            weekly,
            mood,
            completion,
            profile,
            insights,
            sample,
            confidence,
        }
    }
}

fn actionable_insights(
    profile: &PatternProfile,
    weekly: &WeeklyPattern,
    completion: &CompletionPattern,
) -> Vec<String> {
    let mut insights = Vec::new();

    if profile.best_time_of_day != TimeOfDay::Unknown {
        insights.push(format!(
            "Schedule your most important work in the {}. That's when you're most productive!",
            profile.best_time_of_day
        ));
    }
    if let Some(day) = profile.best_day {
        let name = weekday_name(day);
        insights.push(format!(
            "{name} is your most productive day. Plan key deliverables for {name}s."
        ));
    }
    if completion.quick_wins_percentage > 50.0 {
        insights.push(format!(
            "{:.0}% of your completed tasks are quick wins. You're great at knocking out small tasks!",
            completion.quick_wins_percentage
        ));
    }
    if completion.deep_work_tasks > 0 {
        insights.push(format!(
            "You've completed {} deep work sessions. Keep dedicating time to high-priority, focused work.",
            completion.deep_work_tasks
        ));
    }
    if weekly.works_on_weekends {
        insights.push(
            "You're working on weekends. Remember to take breaks and maintain work-life balance!"
                .to_owned(),
        );
    }

    insights
}

/// Full English name of a weekday
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
