// ABOUTME: Task input record with TaskBuilder, status and mode enums, and boundary validation
// ABOUTME: Tasks are immutable snapshots read from the persistence collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::priority;
use crate::errors::{AppError, AppResult};

/// Lifecycle status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not yet done
    Pending,
    /// Done
    Completed,
    /// Abandoned by the user
    Cancelled,
}

/// Category of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskMode {
    /// Professional work
    Work,
    /// Personal errands and chores
    Personal,
    /// Learning and study
    Study,
    /// Health and fitness
    Health,
    /// Anything else
    Other,
}

impl fmt::Display for TaskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Study => "study",
            Self::Health => "health",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// A single task record
///
/// Fields are private so that analytics code cannot mutate a snapshot; read
/// through the accessors and build new instances with [`TaskBuilder`].
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use taskpulse_core::models::{TaskBuilder, TaskMode};
///
/// let created = Utc::now();
/// let task = TaskBuilder::new("task-1", "Write report", created)
///     .priority(8)
///     .estimated_minutes(45)
///     .mode(TaskMode::Work)
///     .completed_at(created, 40)
///     .build();
/// assert!(task.validate().is_ok());
/// assert!(task.is_completed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: String,
    #[serde(default)]
    title: String,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    estimated_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    actual_minutes: Option<u32>,
    priority: u8,
    mode: TaskMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mood: Option<String>,
    status: TaskStatus,
}

impl Task {
    /// Unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Creation timestamp
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Completion timestamp, absent unless completed
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Estimated duration in minutes
    #[must_use]
    pub const fn estimated_minutes(&self) -> u32 {
        self.estimated_minutes
    }

    /// Actual duration in minutes, absent unless completed
    #[must_use]
    pub const fn actual_minutes(&self) -> Option<u32> {
        self.actual_minutes
    }

    /// Priority in 1-10
    #[must_use]
    pub const fn priority(&self) -> u8 {
        self.priority
    }

    /// Task category
    #[must_use]
    pub const fn mode(&self) -> TaskMode {
        self.mode
    }

    /// Mood label recorded at creation
    #[must_use]
    pub fn mood(&self) -> Option<&str> {
        self.mood.as_deref()
    }

    /// Lifecycle status
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Whether the task is completed
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Whether the task is still pending
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }

    /// Calendar date (UTC) the task was created on
    #[must_use]
    pub fn created_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Hour of day (UTC) the task was created at
    #[must_use]
    pub fn created_hour(&self) -> u32 {
        self.created_at.hour()
    }

    /// Actual minutes for completed tasks, zero otherwise
    #[must_use]
    pub fn worked_minutes(&self) -> u32 {
        if self.is_completed() {
            self.actual_minutes.unwrap_or(0)
        } else {
            0
        }
    }

    /// Interval actually worked, ending at completion
    ///
    /// Returns `None` unless the task is completed with a positive duration.
    #[must_use]
    pub fn work_interval(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let end = self.completed_at.filter(|_| self.is_completed())?;
        let minutes = self.actual_minutes.filter(|m| *m > 0)?;
        Some((end - Duration::minutes(i64::from(minutes)), end))
    }

    /// Check the data-model invariants
    ///
    /// # Errors
    ///
    /// Returns a validation `AppError` carrying the task id when the id is
    /// empty, the priority is outside 1-10, completion data disagrees with the
    /// status, or completion precedes creation.
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::missing_field("id"));
        }

        if !(priority::MIN..=priority::MAX).contains(&self.priority) {
            return Err(AppError::value_out_of_range(format!(
                "Task priority {} is outside {}-{}",
                self.priority,
                priority::MIN,
                priority::MAX
            ))
            .with_resource_id(&self.id)
            .with_field("priority"));
        }

        match self.status {
            TaskStatus::Completed if self.completed_at.is_none() => {
                return Err(AppError::missing_field("completed_at").with_resource_id(&self.id));
            }
            TaskStatus::Pending if self.completed_at.is_some() || self.actual_minutes.is_some() => {
                return Err(AppError::invalid_format(
                    "Pending task carries completion data",
                )
                .with_resource_id(&self.id)
                .with_field(if self.completed_at.is_some() {
                    "completed_at"
                } else {
                    "actual_minutes"
                }));
            }
            _ => {}
        }

        if let Some(completed_at) = self.completed_at {
            if completed_at < self.created_at {
                return Err(AppError::invalid_format(format!(
                    "Task completed at {completed_at} before it was created at {}",
                    self.created_at
                ))
                .with_resource_id(&self.id)
                .with_field("completed_at"));
            }
        }

        Ok(())
    }
}

/// Builder for [`Task`]
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    /// Creates a pending work task with priority 5 and a 30 minute estimate
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            task: Task {
                id: id.into(),
                title: title.into(),
                created_at,
                completed_at: None,
                estimated_minutes: 30,
                actual_minutes: None,
                priority: 5,
                mode: TaskMode::Work,
                mood: None,
                status: TaskStatus::Pending,
            },
        }
    }

    /// Sets the priority (validated later, not here)
    #[must_use]
    pub const fn priority(mut self, value: u8) -> Self {
        self.task.priority = value;
        self
    }

    /// Sets the estimated duration in minutes
    #[must_use]
    pub const fn estimated_minutes(mut self, value: u32) -> Self {
        self.task.estimated_minutes = value;
        self
    }

    /// Sets the task mode
    #[must_use]
    pub const fn mode(mut self, value: TaskMode) -> Self {
        self.task.mode = value;
        self
    }

    /// Sets the mood label recorded at creation
    #[must_use]
    pub fn mood(mut self, label: impl Into<String>) -> Self {
        self.task.mood = Some(label.into());
        self
    }

    /// Marks the task completed at `at` after `actual_minutes` of work
    #[must_use]
    pub const fn completed_at(mut self, at: DateTime<Utc>, actual_minutes: u32) -> Self {
        self.task.completed_at = Some(at);
        self.task.actual_minutes = Some(actual_minutes);
        self.task.status = TaskStatus::Completed;
        self
    }

    /// Marks the task cancelled
    #[must_use]
    pub const fn cancelled(mut self) -> Self {
        self.task.status = TaskStatus::Cancelled;
        self
    }

    /// Sets the status without touching timestamps
    #[must_use]
    pub const fn status(mut self, value: TaskStatus) -> Self {
        self.task.status = value;
        self
    }

    /// Builds the task
    #[must_use]
    pub fn build(self) -> Task {
        self.task
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_work_interval_requires_completion_and_duration() {
        let pending = TaskBuilder::new("a", "pending", at(9)).build();
        assert!(pending.work_interval().is_none());

        let zero = TaskBuilder::new("b", "zero", at(9))
            .completed_at(at(10), 0)
            .build();
        assert!(zero.work_interval().is_none());

        let done = TaskBuilder::new("c", "done", at(9))
            .completed_at(at(11), 90)
            .build();
        let (start, end) = done.work_interval().unwrap();
        assert_eq!(end, at(11));
        assert_eq!(end - start, Duration::minutes(90));
    }

    #[test]
    fn test_validate_rejects_completion_before_creation() {
        let task = TaskBuilder::new("late", "backwards", at(12))
            .completed_at(at(9), 30)
            .build();
        let error = task.validate().unwrap_err();
        assert_eq!(error.context.resource_id.as_deref(), Some("late"));
    }
}
