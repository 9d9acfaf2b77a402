// ABOUTME: Integration tests for the pattern recognition engine
// ABOUTME: Covers peak hours, weekday rhythm, mood correlation and completion shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Weekday;
use common::{
    completed_task, days_ago_at, mood, mood_task, morning_worker_tasks, pending_task,
    steady_history, ts,
};
use taskpulse::intelligence::pattern_recognition::weekday_name;
use taskpulse::intelligence::{AnalyticsConfig, ConfidenceLevel, PatternRecognizer, TimeOfDay};

fn recognizer() -> PatternRecognizer {
    PatternRecognizer::new(&AnalyticsConfig::default())
}

#[test]
fn test_morning_worker_peaks_before_noon() {
    common::init_test_logging();
    let hours = recognizer().productive_hours(&morning_worker_tasks());

    assert_eq!(hours.peak_hours, vec![9, 10, 11]);
    assert_eq!(hours.best_time_of_day, TimeOfDay::Morning);
    assert!(hours.morning_score > 0.0);
    assert!(hours.afternoon_score.abs() < f64::EPSILON);
    assert!(hours.evening_score.abs() < f64::EPSILON);

    // Hour 9 has the most completions and anchors the normalisation
    let nine = hours.hourly.iter().find(|h| h.hour == 9).unwrap();
    assert_eq!(nine.completed, 4);
    assert!((nine.score - 100.0).abs() < 1e-9);
    assert!(hours
        .hourly
        .iter()
        .all(|h| (0.0..=100.0).contains(&h.score)));
}

#[test]
fn test_hours_without_completions_are_unknown() {
    let tasks = vec![
        pending_task("a", ts(2025, 3, 10, 9, 0), 8, 30),
        pending_task("b", ts(2025, 3, 10, 14, 0), 8, 30),
    ];
    let hours = recognizer().productive_hours(&tasks);

    assert!(hours.peak_hours.is_empty());
    assert_eq!(hours.best_time_of_day, TimeOfDay::Unknown);
}

#[test]
fn test_late_night_work_does_not_count_toward_segments() {
    let tasks = vec![completed_task("night", ts(2025, 3, 10, 23, 30), 20, 9)];
    let hours = recognizer().productive_hours(&tasks);

    assert_eq!(hours.peak_hours, vec![23]);
    assert_eq!(hours.best_time_of_day, TimeOfDay::Unknown);
}

#[test]
fn test_evening_segment_wins_when_busiest() {
    let tasks = vec![
        completed_task("e1", ts(2025, 3, 10, 19, 0), 20, 9),
        completed_task("e2", ts(2025, 3, 11, 20, 0), 20, 9),
        completed_task("m1", ts(2025, 3, 12, 8, 0), 20, 3),
    ];
    let hours = recognizer().productive_hours(&tasks);
    assert_eq!(hours.best_time_of_day, TimeOfDay::Evening);
}

#[test]
fn test_weekly_pattern_ranks_days_by_completion() {
    // Monday: 2 of 2, Tuesday: 1 of 2, Saturday: 0 of 1
    let tasks = vec![
        completed_task("mon-1", ts(2025, 3, 10, 9, 0), 30, 5),
        completed_task("mon-2", ts(2025, 3, 10, 11, 0), 30, 5),
        completed_task("tue-1", ts(2025, 3, 11, 9, 0), 30, 5),
        pending_task("tue-2", ts(2025, 3, 11, 11, 0), 5, 30),
        pending_task("sat-1", ts(2025, 3, 15, 10, 0), 5, 30),
    ];
    let weekly = recognizer().weekly_pattern(&tasks);

    assert_eq!(weekly.days.len(), 7);
    assert_eq!(weekly.best_day, Some(Weekday::Mon));
    assert_eq!(weekly.worst_day, Some(Weekday::Sat));
    assert!(weekly.works_on_weekends);
    assert!((weekly.weekday_completion_rate - 0.75).abs() < 1e-9);
    assert!(weekly.weekend_completion_rate.abs() < 1e-9);
}

#[test]
fn test_weekly_pattern_without_weekend_work() {
    let (tasks, _) = steady_history(14);
    let weekly = recognizer().weekly_pattern(&tasks);

    assert!(!weekly.works_on_weekends);
    assert!(weekly.weekend_completion_rate.abs() < f64::EPSILON);
    assert!((weekly.weekday_completion_rate - 0.75).abs() < 1e-9);
}

#[test]
fn test_mood_correlation_ranks_by_completion_rate() {
    let base = ts(2025, 3, 10, 9, 0);
    let tasks = vec![
        mood_task("f1", base, "Focused", true),
        mood_task("f2", base, "focused ", true),
        mood_task("s1", base, "stressed", true),
        mood_task("s2", base, "stressed", false),
        mood_task("t1", base, "tired", false),
        mood_task("none", base, "", true),
    ];
    let moods = vec![
        mood(base, "focused", 8, 8),
        mood(base, "stressed", 4, 5),
        mood(base, "tired", 3, 2),
    ];
    let correlation = recognizer().mood_correlation(&tasks, &moods);

    let labels: Vec<&str> = correlation
        .ranking
        .iter()
        .map(|m| m.label.as_str())
        .collect();
    assert_eq!(labels, vec!["focused", "stressed", "tired"]);
    assert_eq!(correlation.best_moods, vec!["focused", "stressed"]);
    assert_eq!(correlation.high_energy_moods, vec!["focused"]);

    let focused = &correlation.ranking[0];
    assert_eq!(focused.total_tasks, 2);
    assert!((focused.completion_rate - 1.0).abs() < 1e-9);
    assert_eq!(focused.average_energy, Some(8.0));
    assert!(correlation.insights[0].contains("focused"));
}

#[test]
fn test_mood_correlation_with_no_labels() {
    let tasks = vec![completed_task("a", ts(2025, 3, 10, 9, 0), 30, 5)];
    let correlation = recognizer().mood_correlation(&tasks, &[]);

    assert!(correlation.ranking.is_empty());
    assert!(correlation.best_moods.is_empty());
    assert!(correlation.insights.is_empty());
}

#[test]
fn test_completion_pattern_counts_quick_wins_and_deep_work() {
    let base = ts(2025, 3, 10, 9, 0);
    let tasks = vec![
        completed_task("q1", base, 10, 3),
        completed_task("q2", ts(2025, 3, 10, 10, 0), 25, 3),
        completed_task("deep", ts(2025, 3, 11, 9, 0), 90, 9),
        completed_task("mid", ts(2025, 3, 11, 14, 0), 45, 3),
        pending_task("open", base, 9, 60),
    ];
    let completion = recognizer().completion_pattern(&tasks);

    assert_eq!(completion.completed_tasks, 4);
    assert_eq!(completion.quick_wins, 2);
    assert!((completion.quick_wins_percentage - 50.0).abs() < 1e-9);
    assert_eq!(completion.deep_work_tasks, 1);
    assert!((completion.deep_work_percentage - 25.0).abs() < 1e-9);
    assert!((completion.average_completed_per_day - 2.0).abs() < 1e-9);
    assert_eq!(completion.most_common_priority, Some(3));
}

#[test]
fn test_sparse_data_reports_low_confidence() {
    let tasks = vec![
        completed_task("a", days_ago_at(0, 9), 30, 5),
        completed_task("b", days_ago_at(1, 9), 30, 5),
    ];
    let report = recognizer().pattern_report(&tasks, &[]);

    assert_eq!(report.confidence, ConfidenceLevel::Low);
    assert_eq!(report.productive_hours.confidence, ConfidenceLevel::Low);
    assert_eq!(report.sample.tasks, 2);
}

#[test]
fn test_pattern_report_builds_profile_and_insights() {
    let (tasks, moods) = steady_history(28);
    let report = recognizer().pattern_report(&tasks, &moods);

    assert_eq!(report.profile.peak_hours, report.productive_hours.peak_hours);
    assert_eq!(report.profile.best_time_of_day, TimeOfDay::Morning);
    assert!(!report.profile.best_moods.is_empty());
    assert!(report
        .insights
        .iter()
        .any(|i| i.contains("Morning")));
    assert_eq!(report.confidence, ConfidenceLevel::High);
}

#[test]
fn test_weekday_names() {
    assert_eq!(weekday_name(Weekday::Mon), "Monday");
    assert_eq!(weekday_name(Weekday::Sun), "Sunday");
}
