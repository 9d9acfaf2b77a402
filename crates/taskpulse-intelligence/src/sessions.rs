// ABOUTME: Reconstructs continuous work sessions from completed-task intervals
// ABOUTME: Intervals separated by a short gap are merged into one session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use taskpulse_core::constants::time;
use taskpulse_core::models::Task;

/// A maximal chain of completed-task intervals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSession {
    /// Start of the first interval
    pub start: DateTime<Utc>,
    /// End of the last interval
    pub end: DateTime<Utc>,
    /// Tasks worked in this session
    pub task_count: usize,
    /// Sum of actual minutes of those tasks
    pub worked_minutes: u64,
}

impl WorkSession {
    /// Wall-clock span in minutes
    #[must_use]
    pub fn span_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Wall-clock span in hours
    #[must_use]
    pub fn span_hours(&self) -> f64 {
        self.span_minutes() as f64 / time::MINUTES_PER_HOUR
    }

    /// Switches between tasks inside the session
    #[must_use]
    pub const fn interruptions(&self) -> usize {
        self.task_count.saturating_sub(1)
    }
}

/// Build work sessions from completed tasks
///
/// Each completed task with a positive duration contributes the interval
/// `[completed_at - actual, completed_at]`. Intervals whose gap to the current
/// session is at most `gap_minutes` (or that overlap it) are merged. Sessions
/// are returned in chronological order.
#[must_use]
pub fn work_sessions(tasks: &[Task], gap_minutes: u32) -> Vec<WorkSession> {
    let mut intervals: Vec<(DateTime<Utc>, DateTime<Utc>, u64)> = tasks
        .iter()
        .filter_map(|task| {
            task.work_interval()
                .map(|(start, end)| (start, end, u64::from(task.worked_minutes())))
        })
        .collect();
    intervals.sort_by_key(|(start, end, _)| (*start, *end));

    let max_gap = Duration::minutes(i64::from(gap_minutes));
    let mut sessions: Vec<WorkSession> = Vec::new();

    for (start, end, minutes) in intervals {
        match sessions.last_mut() {
            Some(current) if start - current.end <= max_gap => {
                current.end = current.end.max(end);
                current.task_count += 1;
                current.worked_minutes += minutes;
            }
            _ => sessions.push(WorkSession {
                start,
                end,
                task_count: 1,
                worked_minutes: minutes,
            }),
        }
    }

    sessions
}
