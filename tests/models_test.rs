// ABOUTME: Integration tests for task and mood records and the validated snapshot
// ABOUTME: Covers boundary validation, record ordering, burnout history and JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{completed_task, date, mood, pending_task, reference_now, ts};
use serde_json::json;
use taskpulse::errors::{ErrorCode, ErrorResponse};
use taskpulse::models::{AnalyticsSnapshot, Task, TaskBuilder, TaskMode, TaskStatus};

#[test]
fn test_builder_defaults() {
    let task = TaskBuilder::new("t-1", "Inbox zero", ts(2025, 3, 10, 9, 0)).build();

    assert_eq!(task.id(), "t-1");
    assert_eq!(task.priority(), 5);
    assert_eq!(task.estimated_minutes(), 30);
    assert_eq!(task.mode(), TaskMode::Work);
    assert_eq!(task.status(), TaskStatus::Pending);
    assert!(task.is_pending());
    assert_eq!(task.worked_minutes(), 0);
    assert!(task.work_interval().is_none());
    assert!(task.validate().is_ok());
}

#[test]
fn test_completed_task_accessors() {
    let created = ts(2025, 3, 10, 9, 15);
    let task = completed_task("done", created, 45, 8);

    assert!(task.is_completed());
    assert_eq!(task.created_date(), date(2025, 3, 10));
    assert_eq!(task.created_hour(), 9);
    assert_eq!(task.worked_minutes(), 45);
    assert_eq!(
        task.work_interval(),
        Some((created, created + Duration::minutes(45)))
    );
}

#[test]
fn test_priority_outside_scale_is_rejected() {
    for priority in [0, 11] {
        let task = TaskBuilder::new("bad", "Bad priority", ts(2025, 3, 10, 9, 0))
            .priority(priority)
            .build();
        let error = task.validate().unwrap_err();

        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.context.resource_id.as_deref(), Some("bad"));
        assert_eq!(error.context.field.as_deref(), Some("priority"));
    }
}

#[test]
fn test_completion_before_creation_is_rejected() {
    let created = ts(2025, 3, 10, 9, 0);
    let task = TaskBuilder::new("time-travel", "Done yesterday", created)
        .completed_at(created - Duration::hours(1), 30)
        .build();
    let error = task.validate().unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert_eq!(error.context.resource_id.as_deref(), Some("time-travel"));
    assert_eq!(error.context.field.as_deref(), Some("completed_at"));
}

#[test]
fn test_completion_data_must_match_status() {
    let created = ts(2025, 3, 10, 9, 0);

    let undated = TaskBuilder::new("undated", "Done sometime", created)
        .status(TaskStatus::Completed)
        .build();
    let error = undated.validate().unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.context.resource_id.as_deref(), Some("undated"));
    assert_eq!(error.context.field.as_deref(), Some("completed_at"));

    let reopened = TaskBuilder::new("reopened", "Back on the list", created)
        .completed_at(created + Duration::minutes(30), 30)
        .status(TaskStatus::Pending)
        .build();
    let error = reopened.validate().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert_eq!(error.context.field.as_deref(), Some("completed_at"));

    let timed: Task = serde_json::from_value(json!({
        "id": "timed",
        "created_at": "2025-03-10T09:00:00Z",
        "actual_minutes": 25,
        "priority": 5,
        "mode": "work",
        "status": "pending"
    }))
    .unwrap();
    let error = timed.validate().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert_eq!(error.context.field.as_deref(), Some("actual_minutes"));

    let dropped = TaskBuilder::new("dropped", "Never mind", created)
        .cancelled()
        .build();
    assert!(dropped.validate().is_ok());
}

#[test]
fn test_empty_id_is_rejected() {
    let task = TaskBuilder::new("  ", "Nameless", ts(2025, 3, 10, 9, 0)).build();
    let error = task.validate().unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.context.field.as_deref(), Some("id"));
}

#[test]
fn test_mood_scale_is_enforced() {
    let at = ts(2025, 3, 10, 12, 0);
    assert!(mood(at, "fine", 1, 10).validate().is_ok());

    let error = mood(at, "ecstatic", 11, 5).validate().unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.field.as_deref(), Some("mood_score"));
    assert_eq!(error.context.resource_id, Some(at.to_rfc3339()));

    let error = mood(at, "drained", 5, 0).validate().unwrap_err();
    assert_eq!(error.context.field.as_deref(), Some("energy_level"));
}

#[test]
fn test_mood_label_is_normalized() {
    let record = mood(ts(2025, 3, 10, 12, 0), "  Focused ", 7, 7);
    assert_eq!(record.normalized_label(), "focused");
    assert_eq!(record.date(), date(2025, 3, 10));
}

#[test]
fn test_snapshot_sorts_records() {
    let tasks = vec![
        pending_task("late", ts(2025, 3, 12, 9, 0), 5, 30),
        pending_task("early", ts(2025, 3, 10, 9, 0), 5, 30),
    ];
    let moods = vec![
        mood(ts(2025, 3, 12, 12, 0), "b", 6, 6),
        mood(ts(2025, 3, 11, 12, 0), "a", 6, 6),
    ];
    let snapshot = AnalyticsSnapshot::new(tasks, moods, reference_now()).unwrap();

    let ids: Vec<&str> = snapshot.tasks().iter().map(Task::id).collect();
    assert_eq!(ids, vec!["early", "late"]);
    assert_eq!(snapshot.moods()[0].mood_label, "a");
    assert_eq!(snapshot.today(), date(2025, 3, 14));
    assert!(!snapshot.is_empty());
    assert!(snapshot.burnout_history().is_none());
}

#[test]
fn test_snapshot_rejects_first_invalid_record() {
    let tasks = vec![
        pending_task("ok", ts(2025, 3, 10, 9, 0), 5, 30),
        pending_task("too-high", ts(2025, 3, 10, 10, 0), 12, 30),
    ];
    let error = AnalyticsSnapshot::new(tasks, Vec::new(), reference_now()).unwrap_err();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.resource_id.as_deref(), Some("too-high"));
}

#[test]
fn test_burnout_history_must_be_probabilities() {
    let empty = AnalyticsSnapshot::empty(reference_now());
    assert!(empty.is_empty());

    let snapshot = empty.clone().with_burnout_history(vec![0.0, 0.4, 1.0]).unwrap();
    assert_eq!(snapshot.burnout_history(), Some(&[0.0, 0.4, 1.0][..]));

    let error = empty
        .clone()
        .with_burnout_history(vec![0.2, 1.5])
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.field.as_deref(), Some("burnout_history"));
    assert_eq!(error.context.resource_id.as_deref(), Some("1"));

    assert!(empty.with_burnout_history(vec![f64::NAN]).is_err());
}

#[test]
fn test_task_json_shape() {
    let created = ts(2025, 3, 10, 9, 0);
    let task = TaskBuilder::new("t-9", "Plan sprint", created)
        .priority(7)
        .mode(TaskMode::Study)
        .mood("focused")
        .completed_at(created + Duration::minutes(50), 50)
        .build();
    let value = serde_json::to_value(&task).unwrap();

    assert_eq!(value["status"], "completed");
    assert_eq!(value["mode"], "study");
    assert_eq!(value["actual_minutes"], 50);

    let parsed: Task = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, task);
}

#[test]
fn test_task_json_optional_fields() {
    let task: Task = serde_json::from_value(json!({
        "id": "min",
        "created_at": "2025-03-10T09:00:00Z",
        "priority": 3,
        "mode": "personal",
        "status": "pending"
    }))
    .unwrap();

    assert_eq!(task.title(), "");
    assert_eq!(task.estimated_minutes(), 0);
    assert!(task.mood().is_none());
    assert!(task.completed_at().is_none());
    assert_eq!(task.mode(), TaskMode::Personal);
}

#[test]
fn test_error_response_carries_code_and_resource() {
    let task = TaskBuilder::new("bad", "Bad priority", ts(2025, 3, 10, 9, 0))
        .priority(0)
        .build();
    let response = ErrorResponse::from(task.validate().unwrap_err());
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(value["error"]["resource_id"], "bad");
}
