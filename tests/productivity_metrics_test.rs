// ABOUTME: Integration tests for the productivity metrics calculator
// ABOUTME: Covers daily, weekly, focus and efficiency scores, empty windows and score bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Datelike, Duration, Weekday};
use common::{
    completed_task, date, days_ago_at, estimated_task, pending_task, reference_now, ts,
};
use taskpulse::intelligence::productivity_metrics::week_start;
use taskpulse::intelligence::{
    AnalyticsConfig, ConfidenceLevel, ProductivityMetricsCalculator, SampleSize,
};
use taskpulse::models::TaskBuilder;

fn calculator() -> ProductivityMetricsCalculator {
    ProductivityMetricsCalculator::new(&AnalyticsConfig::default())
}

#[test]
fn test_empty_task_list_yields_zero_metrics() {
    let calc = calculator();
    let today = reference_now().date_naive();

    let daily = calc.daily_metrics(&[], today);
    assert_eq!(daily.total_tasks, 0);
    assert!(daily.completion_rate.abs() < f64::EPSILON);
    assert!(daily.productivity_score.abs() < f64::EPSILON);

    let weekly = calc.weekly_metrics(&[], week_start(today));
    assert_eq!(weekly.daily.len(), 7);
    assert_eq!(weekly.working_days, 0);
    assert!(weekly.most_productive_day.is_none());
    assert!(weekly.average_productivity_score.abs() < f64::EPSILON);

    let focus = calc.focus_metrics(&[]);
    assert!(focus.focus_score.abs() < f64::EPSILON);
    assert_eq!(focus.session_count, 0);

    let efficiency = calc.efficiency_metrics(&[]);
    assert_eq!(efficiency.tasks_measured, 0);
    assert!(efficiency.efficiency_score.abs() < f64::EPSILON);

    let report = calc.comprehensive_report(&[], reference_now());
    assert_eq!(report.summary.total_tasks, 0);
    assert_eq!(report.confidence, ConfidenceLevel::Low);
}

#[test]
fn test_daily_score_weights_four_factors() {
    // completion 1.0, volume 2/10, priority 10/10, time 1.0
    // 0.4 + 0.3 * 0.2 + 0.2 + 0.1 = 0.76
    let tasks = vec![
        completed_task("a", ts(2025, 3, 10, 9, 0), 60, 10),
        completed_task("b", ts(2025, 3, 10, 11, 0), 60, 10),
    ];
    let daily = calculator().daily_metrics(&tasks, date(2025, 3, 10));

    assert_eq!(daily.completed_tasks, 2);
    assert!((daily.completion_rate - 1.0).abs() < 1e-9);
    assert!((daily.productivity_score - 76.0).abs() < 1e-9);
    assert_eq!(daily.high_priority_completed, 2);
    assert_eq!(daily.total_minutes, 120);
}

#[test]
fn test_daily_metrics_count_statuses() {
    let day = ts(2025, 3, 11, 9, 0);
    let tasks = vec![
        completed_task("a", day, 30, 5),
        pending_task("b", day, 5, 30),
        TaskBuilder::new("c", "dropped", day).cancelled().build(),
        completed_task("other-day", ts(2025, 3, 12, 9, 0), 30, 5),
    ];
    let daily = calculator().daily_metrics(&tasks, date(2025, 3, 11));

    assert_eq!(daily.total_tasks, 3);
    assert_eq!(daily.completed_tasks, 1);
    assert_eq!(daily.pending_tasks, 1);
    assert_eq!(daily.cancelled_tasks, 1);
    assert!((daily.completion_rate - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_scores_stay_within_bounds() {
    let day = ts(2025, 3, 10, 6, 0);
    // Many fast, top-priority tasks push every factor to its cap
    let tasks: Vec<_> = (0..50)
        .map(|i| estimated_task(&format!("t{i}"), day + Duration::minutes(i * 10), 120, 1, 10))
        .collect();
    let calc = calculator();

    let daily = calc.daily_metrics(&tasks, date(2025, 3, 10));
    assert!((0.0..=100.0).contains(&daily.productivity_score));

    let focus = calc.focus_metrics(&tasks);
    assert!((0.0..=100.0).contains(&focus.focus_score));

    let efficiency = calc.efficiency_metrics(&tasks);
    assert!((0.0..=100.0).contains(&efficiency.efficiency_score));
    assert!((0.0..=100.0).contains(&efficiency.estimation_accuracy));
}

#[test]
fn test_weekly_metrics_pick_most_productive_day() {
    let monday = date(2025, 3, 10);
    let tasks = vec![
        completed_task("mon", ts(2025, 3, 10, 9, 0), 30, 3),
        completed_task("wed-1", ts(2025, 3, 12, 9, 0), 30, 9),
        completed_task("wed-2", ts(2025, 3, 12, 10, 0), 30, 9),
        pending_task("thu", ts(2025, 3, 13, 9, 0), 5, 30),
    ];
    let weekly = calculator().weekly_metrics(&tasks, monday);

    assert_eq!(weekly.week_start, monday);
    assert_eq!(weekly.week_end, date(2025, 3, 16));
    assert_eq!(weekly.total_tasks, 4);
    assert_eq!(weekly.completed_tasks, 3);
    assert_eq!(weekly.working_days, 3);
    assert_eq!(weekly.most_productive_day, Some(date(2025, 3, 12)));
}

#[test]
fn test_focus_metrics_count_deep_work() {
    // One 120-minute priority 8 task: 2 deep-work hours, one uninterrupted session
    // 0.5 * 2/5 + 0.3 * 1 + 0.2 * 1/5 = 0.54
    let tasks = vec![completed_task("deep", ts(2025, 3, 10, 9, 0), 120, 8)];
    let focus = calculator().focus_metrics(&tasks);

    assert!((focus.deep_work_hours - 2.0).abs() < 1e-9);
    assert_eq!(focus.session_count, 1);
    assert_eq!(focus.interruptions, 0);
    assert_eq!(focus.uninterrupted_sessions, 1);
    assert_eq!(focus.longest_session_minutes, 120);
    assert!((focus.focus_score - 54.0).abs() < 1e-9);
}

#[test]
fn test_deep_work_needs_length_and_priority() {
    let calc = calculator();
    let start = ts(2025, 3, 10, 9, 0);

    assert!(calc.is_deep_work(&completed_task("long-high", start, 90, 7)));
    assert!(!calc.is_deep_work(&completed_task("long-low", start, 90, 6)));
    assert!(!calc.is_deep_work(&completed_task("exactly-60", start, 60, 9)));
    assert!(!calc.is_deep_work(&pending_task("pending", start, 9, 120)));

    assert!(calc.is_quick_win(&completed_task("quick", start, 20, 2)));
    assert!(!calc.is_quick_win(&completed_task("thirty", start, 30, 2)));
}

#[test]
fn test_back_to_back_tasks_count_as_interruptions() {
    let start = ts(2025, 3, 10, 9, 0);
    let tasks = vec![
        completed_task("a", start, 30, 5),
        completed_task("b", start + Duration::minutes(35), 30, 5),
        completed_task("c", start + Duration::minutes(70), 30, 5),
    ];
    let focus = calculator().focus_metrics(&tasks);

    assert_eq!(focus.session_count, 1);
    assert_eq!(focus.interruptions, 2);
    assert_eq!(focus.uninterrupted_sessions, 0);
}

#[test]
fn test_efficiency_caps_overestimation() {
    let calc = calculator();
    let start = ts(2025, 3, 10, 9, 0);

    // Finished in half the estimate: ratio 0.5, raw efficiency 200 capped to 100
    let fast = calc.efficiency_metrics(&[estimated_task("fast", start, 60, 30, 5)]);
    assert!((fast.average_ratio - 0.5).abs() < 1e-9);
    assert!((fast.efficiency_score - 100.0).abs() < 1e-9);
    assert!((fast.estimation_accuracy - 50.0).abs() < 1e-9);
    assert_eq!(fast.over_estimated, 1);

    // Took twice the estimate
    let slow = calc.efficiency_metrics(&[estimated_task("slow", start, 30, 60, 5)]);
    assert!((slow.efficiency_score - 50.0).abs() < 1e-9);
    assert!(slow.estimation_accuracy.abs() < 1e-9);
    assert_eq!(slow.under_estimated, 1);
}

#[test]
fn test_efficiency_skips_unmeasurable_tasks() {
    let start = ts(2025, 3, 10, 9, 0);
    let tasks = vec![
        estimated_task("no-estimate", start, 0, 30, 5),
        estimated_task("zero-actual", start, 30, 0, 5),
        pending_task("pending", start, 5, 30),
        estimated_task("ok", start, 40, 40, 5),
    ];
    let efficiency = calculator().efficiency_metrics(&tasks);

    assert_eq!(efficiency.tasks_measured, 1);
    assert!((efficiency.efficiency_score - 100.0).abs() < 1e-9);
    assert!((efficiency.estimation_accuracy - 100.0).abs() < 1e-9);
}

#[test]
fn test_volume_baseline_is_configurable() {
    let mut config = AnalyticsConfig::default();
    config.metrics.volume_baseline = 2;
    let calc = ProductivityMetricsCalculator::new(&config);

    let tasks = vec![
        completed_task("a", ts(2025, 3, 10, 9, 0), 60, 10),
        completed_task("b", ts(2025, 3, 10, 11, 0), 60, 10),
    ];
    // Volume factor saturates at 1.0
    let daily = calc.daily_metrics(&tasks, date(2025, 3, 10));
    assert!((daily.productivity_score - 100.0).abs() < 1e-9);
}

#[test]
fn test_confidence_bands_follow_sample_size() {
    let calc = calculator();
    let sample = |tasks, distinct_days| SampleSize {
        tasks,
        distinct_days,
    };

    assert_eq!(calc.confidence_for(sample(9, 20)), ConfidenceLevel::Low);
    assert_eq!(calc.confidence_for(sample(40, 4)), ConfidenceLevel::Low);
    assert_eq!(calc.confidence_for(sample(10, 5)), ConfidenceLevel::Medium);
    assert_eq!(calc.confidence_for(sample(30, 14)), ConfidenceLevel::High);
}

#[test]
fn test_week_start_is_monday() {
    for day in 10..=16 {
        assert_eq!(week_start(date(2025, 3, day)), date(2025, 3, 10));
    }
    assert_eq!(week_start(date(2025, 3, 17)), date(2025, 3, 17));
    assert_eq!(week_start(date(2025, 1, 1)).weekday(), Weekday::Mon);
}

#[test]
fn test_weekly_history_skips_weeks_before_first_task() {
    let calc = calculator();
    let tasks = vec![
        completed_task("last-week", days_ago_at(7, 9), 45, 8),
        completed_task("today", days_ago_at(0, 9), 45, 8),
    ];
    let history = calc.weekly_score_history(&tasks, reference_now().date_naive(), 8);

    // Previous week plus the current one
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|s| (0.0..=100.0).contains(s)));
    assert!(calc
        .weekly_score_history(&[], reference_now().date_naive(), 8)
        .is_empty());
}

#[test]
fn test_daily_score_series_covers_every_calendar_day() {
    let calc = calculator();
    let tasks = vec![
        completed_task("a", days_ago_at(0, 9), 30, 5),
        completed_task("b", days_ago_at(3, 9), 30, 5),
        completed_task("too-old", days_ago_at(40, 9), 30, 5),
    ];
    let series = calc.daily_score_series(&tasks, reference_now().date_naive(), 21);

    assert_eq!(series.len(), 21);
    assert_eq!(series[0].date, date(2025, 2, 22));
    assert_eq!(series[20].date, reference_now().date_naive());
    assert!(series.windows(2).all(|w| w[1].date - w[0].date == Duration::days(1)));

    assert_eq!(series[17].total_tasks, 1);
    assert_eq!(series[20].total_tasks, 1);
    let idle: Vec<_> = series.iter().filter(|d| d.total_tasks == 0).collect();
    assert_eq!(idle.len(), 19);
    assert!(idle.iter().all(|d| d.productivity_score.abs() < f64::EPSILON));
}

#[test]
fn test_huge_durations_do_not_overflow() {
    let calc = calculator();
    let created = ts(2025, 3, 10, 9, 0);
    let minutes = 3_000_000_000;
    let tasks = vec![
        completed_task("long-a", created, minutes, 8),
        completed_task("long-b", created + Duration::hours(1), minutes, 8),
    ];

    let daily = calc.daily_metrics(&tasks, date(2025, 3, 10));
    assert_eq!(daily.total_minutes, 6_000_000_000);
    assert!((daily.average_minutes - 3_000_000_000.0).abs() < 1e-3);

    let weekly = calc.weekly_metrics(&tasks, week_start(date(2025, 3, 10)));
    assert_eq!(weekly.total_minutes, 6_000_000_000);

    let focus = calc.focus_metrics(&tasks);
    assert!((focus.deep_work_hours - 100_000_000.0).abs() < 1e-3);
    assert_eq!(focus.session_count, 1);
    assert!((0.0..=100.0).contains(&focus.focus_score));

    let report = calc.comprehensive_report(&tasks, reference_now());
    assert_eq!(report.summary.completed_tasks, 2);
}
