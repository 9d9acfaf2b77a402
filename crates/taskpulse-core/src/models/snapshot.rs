// ABOUTME: Validated, time-ordered snapshot of tasks and moods handed to the engine
// ABOUTME: The only constructor checks every record and rejects the first violation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use super::{MoodRecord, Task};
use crate::constants::burnout;
use crate::errors::{AppError, AppResult};

/// Immutable input boundary for every analytics call
///
/// Tasks are ordered by creation time and moods by timestamp. `as_of` is the
/// instant treated as "now" so that results are reproducible.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSnapshot {
    tasks: Vec<Task>,
    moods: Vec<MoodRecord>,
    burnout_history: Option<Vec<f64>>,
    as_of: DateTime<Utc>,
}

impl AnalyticsSnapshot {
    /// Validate and order the records
    ///
    /// # Errors
    ///
    /// Returns the first record that violates the data model; invalid input is
    /// never repaired.
    pub fn new(
        mut tasks: Vec<Task>,
        mut moods: Vec<MoodRecord>,
        as_of: DateTime<Utc>,
    ) -> AppResult<Self> {
        for task in &tasks {
            task.validate()?;
        }
        for mood in &moods {
            mood.validate()?;
        }

        tasks.sort_by_key(Task::created_at);
        moods.sort_by_key(|mood| mood.timestamp);
        debug!(
            tasks = tasks.len(),
            moods = moods.len(),
            %as_of,
            "Validated analytics snapshot"
        );

        Ok(Self {
            tasks,
            moods,
            burnout_history: None,
            as_of,
        })
    }

    /// An empty snapshot anchored at `as_of`
    #[must_use]
    pub const fn empty(as_of: DateTime<Utc>) -> Self {
        Self {
            tasks: Vec::new(),
            moods: Vec::new(),
            burnout_history: None,
            as_of,
        }
    }

    /// Attach a time-ordered burnout-risk series from an upstream estimator
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` when any value is non-finite or outside 0-1.
    pub fn with_burnout_history(mut self, history: Vec<f64>) -> AppResult<Self> {
        if let Some((index, value)) = history
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || !(burnout::MIN_RISK..=burnout::MAX_RISK).contains(*v))
        {
            return Err(AppError::value_out_of_range(format!(
                "Burnout risk {value} at position {index} is outside 0-1"
            ))
            .with_resource_id(index.to_string())
            .with_field("burnout_history"));
        }
        self.burnout_history = Some(history);
        Ok(self)
    }

    /// Tasks ordered by creation time
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Mood records ordered by timestamp
    #[must_use]
    pub fn moods(&self) -> &[MoodRecord] {
        &self.moods
    }

    /// Upstream burnout series, if supplied
    #[must_use]
    pub fn burnout_history(&self) -> Option<&[f64]> {
        self.burnout_history.as_deref()
    }

    /// Reference instant
    #[must_use]
    pub const fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    /// Reference date (UTC)
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.as_of.date_naive()
    }

    /// Whether the snapshot holds no records at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.moods.is_empty()
    }
}
