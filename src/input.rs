// ABOUTME: JSON input loading for snapshots and engine configuration files
// ABOUTME: Converts on-disk documents into a validated AnalyticsSnapshot and AnalyticsConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use taskpulse_core::errors::{AppError, AppResult};
use taskpulse_core::models::{AnalyticsSnapshot, MoodRecord, Task};
use taskpulse_intelligence::AnalyticsConfig;

/// On-disk snapshot document
///
/// ```json
/// { "as_of": "2025-03-14T18:00:00Z", "tasks": [...], "moods": [...], "burnout_history": [0.2, 0.3] }
/// ```
///
/// Only `tasks` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// Reference instant; the caller's clock is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
    /// Task records
    pub tasks: Vec<Task>,
    /// Mood records
    #[serde(default)]
    pub moods: Vec<MoodRecord>,
    /// Upstream burnout-risk series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burnout_history: Option<Vec<f64>>,
}

impl SnapshotDocument {
    /// Parse a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` when the text is not a valid document
    pub fn from_json(text: &str) -> AppResult<Self> {
        serde_json::from_str(text).map_err(|e| {
            AppError::serialization(format!("Invalid snapshot document: {e}")).with_source(e)
        })
    }

    /// Validate into a snapshot
    ///
    /// `as_of` takes precedence over the document's own reference instant,
    /// which in turn takes precedence over `fallback`.
    ///
    /// # Errors
    ///
    /// Returns the first record that violates the data model
    pub fn into_snapshot(
        self,
        as_of: Option<DateTime<Utc>>,
        fallback: DateTime<Utc>,
    ) -> AppResult<AnalyticsSnapshot> {
        let reference = as_of.or(self.as_of).unwrap_or(fallback);
        let snapshot = AnalyticsSnapshot::new(self.tasks, self.moods, reference)?;
        match self.burnout_history {
            Some(history) => snapshot.with_burnout_history(history),
            None => Ok(snapshot),
        }
    }
}

/// Read and validate a snapshot file
///
/// # Errors
///
/// Returns an error if the file can't be read, parsed or validated
pub fn load_snapshot(
    path: &Path,
    as_of: Option<DateTime<Utc>>,
    fallback: DateTime<Utc>,
) -> AppResult<AnalyticsSnapshot> {
    let text = read(path)?;
    let snapshot = SnapshotDocument::from_json(&text)
        .map_err(|e| e.with_resource_id(path.display().to_string()))?
        .into_snapshot(as_of, fallback)?;
    debug!(
        path = %path.display(),
        tasks = snapshot.tasks().len(),
        moods = snapshot.moods().len(),
        "Loaded snapshot"
    );
    Ok(snapshot)
}

/// Read and validate an engine configuration file
///
/// Missing sections and fields keep their defaults.
///
/// # Errors
///
/// Returns an error if the file can't be read or parsed, or the
/// configuration fails validation
pub fn load_config(path: &Path) -> AppResult<AnalyticsConfig> {
    let text = read(path)?;
    let config: AnalyticsConfig = serde_json::from_str(&text).map_err(|e| {
        AppError::serialization(format!("Invalid configuration file: {e}"))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })?;
    config.validate()?;
    Ok(config)
}

fn read(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })
}
