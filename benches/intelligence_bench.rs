// ABOUTME: Criterion benchmarks for the TaskPulse analytics engine
// ABOUTME: Measures the dashboard aggregator and each component over synthetic task histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

//! Criterion benchmarks for the analytics engine.
//!
//! Histories are generated deterministically so runs are comparable; the
//! dashboard is expected to stay well under a millisecond for a few hundred
//! tasks.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use taskpulse::intelligence::{
    AnalyticsConfig, AnalyticsDashboard, AnomalyDetector, PatternRecognizer, PredictiveInsights,
    ProductivityMetricsCalculator,
};
use taskpulse::models::{AnalyticsSnapshot, MoodRecord, Task, TaskBuilder, TaskMode};

/// Task counts exercised by every group
const DATASET_SIZES: [usize; 3] = [50, 200, 1000];

const MOOD_LABELS: [&str; 5] = ["focused", "calm", "stressed", "tired", "energized"];

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 18, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Deterministic history of `count` tasks, roughly six per day, two thirds completed
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_tasks(count: usize) -> Vec<Task> {
    let now = reference_now();
    (0..count)
        .map(|index| {
            let days_ago = (index / 6) as i64;
            let hour = 8 + ((index * 5) % 10) as i64;
            let created = now - Duration::days(days_ago) - Duration::hours(18 - hour);
            let estimate = 15 + ((index * 37) % 150) as u32;
            let mode = match index % 4 {
                0 => TaskMode::Work,
                1 => TaskMode::Study,
                2 => TaskMode::Personal,
                _ => TaskMode::Health,
            };

            let builder = TaskBuilder::new(
                format!("bench_task_{index}"),
                format!("Benchmark Task {index}"),
                created,
            )
            .priority(1 + (index % 10) as u8)
            .estimated_minutes(estimate)
            .mode(mode)
            .mood(MOOD_LABELS[index % MOOD_LABELS.len()]);

            if index % 3 == 2 {
                builder.build()
            } else {
                let actual = estimate + ((index * 13) % 40) as u32;
                builder
                    .completed_at(created + Duration::minutes(i64::from(actual)), actual)
                    .build()
            }
        })
        .collect()
}

/// One mood record per day covered by `task_count` tasks
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_moods(task_count: usize) -> Vec<MoodRecord> {
    let now = reference_now();
    (0..task_count.div_ceil(6))
        .map(|day| {
            MoodRecord::new(
                now - Duration::days(day as i64) - Duration::hours(1),
                MOOD_LABELS[day % MOOD_LABELS.len()],
                3 + (day % 7) as u8,
                2 + ((day * 3) % 8) as u8,
            )
        })
        .collect()
}

fn generate_snapshot(count: usize) -> Option<AnalyticsSnapshot> {
    let burnout: Vec<f64> = (0..14).map(|i| 0.2 + f64::from(i) * 0.02).collect();
    AnalyticsSnapshot::new(generate_tasks(count), generate_moods(count), reference_now())
        .and_then(|snapshot| snapshot.with_burnout_history(burnout))
        .ok()
}

fn datasets() -> Vec<(usize, AnalyticsSnapshot)> {
    DATASET_SIZES
        .iter()
        .filter_map(|&count| generate_snapshot(count).map(|snapshot| (count, snapshot)))
        .collect()
}

/// Benchmark the four dashboard views
fn bench_full_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_dashboard");
    let Ok(dashboard) = AnalyticsDashboard::new(AnalyticsConfig::default()) else {
        return;
    };

    for (count, snapshot) in datasets() {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("full_dashboard", count),
            &snapshot,
            |b, snapshot| b.iter(|| dashboard.full_dashboard(black_box(snapshot))),
        );
        group.bench_with_input(
            BenchmarkId::new("quick_insights", count),
            &snapshot,
            |b, snapshot| b.iter(|| dashboard.quick_insights(black_box(snapshot))),
        );
        group.bench_with_input(
            BenchmarkId::new("weekly_summary", count),
            &snapshot,
            |b, snapshot| b.iter(|| dashboard.weekly_summary(black_box(snapshot))),
        );
        group.bench_with_input(
            BenchmarkId::new("burnout_assessment", count),
            &snapshot,
            |b, snapshot| b.iter(|| dashboard.burnout_assessment(black_box(snapshot))),
        );
    }

    group.finish();
}

/// Benchmark the productivity metrics calculator
fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    let calculator = ProductivityMetricsCalculator::new(&AnalyticsConfig::default());

    for (count, snapshot) in datasets() {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("comprehensive_report", count),
            &snapshot,
            |b, snapshot| {
                b.iter(|| {
                    calculator.comprehensive_report(black_box(snapshot.tasks()), snapshot.as_of())
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("focus_metrics", count),
            &snapshot,
            |b, snapshot| b.iter(|| calculator.focus_metrics(black_box(snapshot.tasks()))),
        );
    }

    group.finish();
}

/// Benchmark pattern recognition
fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns");
    let recognizer = PatternRecognizer::new(&AnalyticsConfig::default());

    for (count, snapshot) in datasets() {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("pattern_report", count),
            &snapshot,
            |b, snapshot| {
                b.iter(|| {
                    recognizer.pattern_report(black_box(snapshot.tasks()), snapshot.moods())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the anomaly monitors
fn bench_anomalies(c: &mut Criterion) {
    let mut group = c.benchmark_group("anomalies");

    for sensitivity in [0.3, 0.7] {
        let detector =
            AnomalyDetector::new(&AnalyticsConfig::default().with_sensitivity(sensitivity));
        for (count, snapshot) in datasets() {
            group.throughput(Throughput::Elements(count as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("anomaly_report_s{sensitivity}"), count),
                &snapshot,
                |b, snapshot| {
                    b.iter(|| {
                        detector.anomaly_report(
                            black_box(snapshot.tasks()),
                            snapshot.moods(),
                            snapshot.as_of(),
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark forecasting, burnout trend and scheduling
fn bench_forecast(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast");
    let config = AnalyticsConfig::default();
    let insights = PredictiveInsights::new(&config);
    let calculator = ProductivityMetricsCalculator::new(&config);
    let peak_hours = config.prediction.default_peak_hours.clone();

    for (count, snapshot) in datasets() {
        let weekly_scores =
            calculator.weekly_score_history(snapshot.tasks(), snapshot.today(), 12);
        let burnout = snapshot.burnout_history().unwrap_or_default().to_vec();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("insights_report", count),
            &snapshot,
            |b, snapshot| {
                b.iter(|| {
                    insights.insights_report(
                        black_box(snapshot.tasks()),
                        &peak_hours,
                        &weekly_scores,
                        &burnout,
                    )
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("optimal_schedule", count),
            &snapshot,
            |b, snapshot| {
                b.iter(|| insights.optimal_schedule(black_box(snapshot.tasks()), &peak_hours));
            },
        );
    }

    group.bench_function("forecast_weekly_12_weeks", |b| {
        let scores: Vec<f64> = (0..12).map(|i| 50.0 + f64::from(i) * 1.5).collect();
        b.iter(|| insights.forecast_weekly(black_box(&scores)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_full_dashboard,
    bench_metrics,
    bench_patterns,
    bench_anomalies,
    bench_forecast,
);
criterion_main!(benches);
