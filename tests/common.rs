// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides task, mood and snapshot helpers anchored at a fixed reference instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
//! Shared test utilities for `taskpulse`
//!
//! Every fixture is anchored at [`reference_now`] so results never depend on
//! the wall clock.

use std::env;
use std::sync::Once;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use taskpulse::models::{AnalyticsSnapshot, MoodRecord, Task, TaskBuilder, TaskMode};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Friday 2025-03-14 18:00 UTC
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 18, 0, 0).unwrap()
}

/// Timestamp on a given day at hour:minute
pub fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// Calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// `days` days before the reference day, at `hour`
pub fn days_ago_at(days: i64, hour: u32) -> DateTime<Utc> {
    let day = reference_now().date_naive() - Duration::days(days);
    Utc.from_utc_datetime(&day.and_hms_opt(hour, 0, 0).unwrap())
}

/// Completed task worked for `minutes` straight from creation, estimate equal to actual
pub fn completed_task(id: &str, created: DateTime<Utc>, minutes: u32, priority: u8) -> Task {
    TaskBuilder::new(id, format!("Task {id}"), created)
        .priority(priority)
        .estimated_minutes(minutes)
        .completed_at(created + Duration::minutes(i64::from(minutes)), minutes)
        .build()
}

/// Completed task with separate estimate and actual durations
pub fn estimated_task(
    id: &str,
    created: DateTime<Utc>,
    estimated: u32,
    actual: u32,
    priority: u8,
) -> Task {
    TaskBuilder::new(id, format!("Task {id}"), created)
        .priority(priority)
        .estimated_minutes(estimated)
        .completed_at(created + Duration::minutes(i64::from(actual)), actual)
        .build()
}

/// Pending task
pub fn pending_task(id: &str, created: DateTime<Utc>, priority: u8, estimated: u32) -> Task {
    TaskBuilder::new(id, format!("Task {id}"), created)
        .priority(priority)
        .estimated_minutes(estimated)
        .build()
}

/// Completed task created with a mood label
pub fn mood_task(id: &str, created: DateTime<Utc>, label: &str, completed: bool) -> Task {
    let builder = TaskBuilder::new(id, format!("Task {id}"), created)
        .priority(5)
        .estimated_minutes(30)
        .mood(label);
    if completed {
        builder
            .completed_at(created + Duration::minutes(30), 30)
            .build()
    } else {
        builder.build()
    }
}

/// Mood record
pub fn mood(at: DateTime<Utc>, label: &str, score: u8, energy: u8) -> MoodRecord {
    MoodRecord::new(at, label, score, energy)
}

/// Ten completed tasks created 9-11am, priority 8, 45 minutes each
pub fn morning_worker_tasks() -> Vec<Task> {
    (0..10)
        .map(|i| {
            let hour = 9 + (i % 3);
            completed_task(&format!("am-{i}"), days_ago_at(i64::from(i), hour), 45, 8)
        })
        .collect()
}

/// A steady few weeks of mixed work ending on the reference day
///
/// Weekdays get four tasks (three completed), with one mood record per day.
pub fn steady_history(days: i64) -> (Vec<Task>, Vec<MoodRecord>) {
    let mut tasks = Vec::new();
    let mut moods = Vec::new();
    for back in 0..days {
        let day = days_ago_at(back, 9);
        if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        for slot in 0..4_u32 {
            let created = day + Duration::hours(i64::from(slot) * 2);
            let id = format!("d{back}-t{slot}");
            let task = if slot == 3 {
                pending_task(&id, created, 4, 45)
            } else {
                TaskBuilder::new(&id, format!("Task {id}"), created)
                    .priority(6 + slot as u8)
                    .estimated_minutes(40)
                    .mode(if slot == 0 { TaskMode::Study } else { TaskMode::Work })
                    .mood(if slot == 0 { "focused" } else { "calm" })
                    .completed_at(created + Duration::minutes(45), 45)
                    .build()
            };
            tasks.push(task);
        }
        moods.push(mood(day + Duration::hours(8), "calm", 7, 7));
    }
    (tasks, moods)
}

/// Two working weeks of steady history, then nothing from Monday to the reference Friday
pub fn stalled_history() -> (Vec<Task>, Vec<MoodRecord>) {
    let cutoff = days_ago_at(4, 0);
    let (mut tasks, mut moods) = steady_history(19);
    tasks.retain(|t| t.created_at() < cutoff);
    moods.retain(|m| m.timestamp < cutoff);
    (tasks, moods)
}

/// Validated snapshot at the reference instant
pub fn snapshot(tasks: Vec<Task>, moods: Vec<MoodRecord>) -> AnalyticsSnapshot {
    AnalyticsSnapshot::new(tasks, moods, reference_now()).unwrap()
}
