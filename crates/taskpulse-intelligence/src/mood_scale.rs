// ABOUTME: Maps free-text mood labels to the 1-10 mood scale
// ABOUTME: Unknown labels map to the neutral midpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use taskpulse_core::constants::mood_scale;

/// Known labels and their scores on the 1-10 scale
const LABEL_SCORES: &[(&str, u8)] = &[
    ("terrible", 1),
    ("awful", 2),
    ("bad", 3),
    ("stressed", 3),
    ("overwhelmed", 3),
    ("sad", 3),
    ("anxious", 4),
    ("tired", 4),
    ("neutral", 5),
    ("okay", 5),
    ("fine", 6),
    ("calm", 6),
    ("good", 7),
    ("focused", 7),
    ("happy", 8),
    ("great", 8),
    ("motivated", 9),
    ("excited", 9),
    ("energetic", 9),
    ("excellent", 10),
];

/// Score for a mood label, case-insensitive and trimmed
#[must_use]
pub fn score_for_label(label: &str) -> u8 {
    let normalized = label.trim().to_lowercase();
    LABEL_SCORES
        .iter()
        .find(|(known, _)| *known == normalized)
        .map_or(mood_scale::NEUTRAL, |(_, score)| *score)
}
