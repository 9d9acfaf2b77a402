// ABOUTME: Input data model for the analytics engine
// ABOUTME: Task and MoodRecord records plus the validated AnalyticsSnapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

mod mood;
mod snapshot;
mod task;

pub use mood::MoodRecord;
pub use snapshot::AnalyticsSnapshot;
pub use task::{Task, TaskBuilder, TaskMode, TaskStatus};
