// ABOUTME: Mood observation record with score and energy on a 1-10 scale
// ABOUTME: Validated at the snapshot boundary, never repaired
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::mood_scale;
use crate::errors::{AppError, AppResult};

/// A single mood observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRecord {
    /// When the mood was recorded
    pub timestamp: DateTime<Utc>,
    /// Free-text mood label (e.g. "focused", "tired")
    pub mood_label: String,
    /// Mood score in 1-10
    pub mood_score: u8,
    /// Energy level in 1-10
    pub energy_level: u8,
}

impl MoodRecord {
    /// Creates a mood record
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        mood_label: impl Into<String>,
        mood_score: u8,
        energy_level: u8,
    ) -> Self {
        Self {
            timestamp,
            mood_label: mood_label.into(),
            mood_score,
            energy_level,
        }
    }

    /// Calendar date (UTC) of the observation
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Normalised label used for grouping: trimmed and lowercased
    #[must_use]
    pub fn normalized_label(&self) -> String {
        self.mood_label.trim().to_lowercase()
    }

    /// Check that mood score and energy level lie in 1-10
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` naming the offending field; the record's
    /// timestamp is used as its identifier.
    pub fn validate(&self) -> AppResult<()> {
        let range = mood_scale::MIN..=mood_scale::MAX;
        for (field, value) in [
            ("mood_score", self.mood_score),
            ("energy_level", self.energy_level),
        ] {
            if !range.contains(&value) {
                return Err(AppError::value_out_of_range(format!(
                    "Mood {field} {value} is outside {}-{}",
                    mood_scale::MIN,
                    mood_scale::MAX
                ))
                .with_resource_id(self.timestamp.to_rfc3339())
                .with_field(field));
            }
        }
        Ok(())
    }
}
