// ABOUTME: Shared constants for record ranges, scoring scales and calendar arithmetic
// ABOUTME: Single source of truth for bounds checked at the validation boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

/// Task priority bounds (inclusive)
pub mod priority {
    /// Lowest valid task priority
    pub const MIN: u8 = 1;
    /// Highest valid task priority
    pub const MAX: u8 = 10;
}

/// Mood and energy scale bounds (inclusive)
pub mod mood_scale {
    /// Lowest valid mood score or energy level
    pub const MIN: u8 = 1;
    /// Highest valid mood score or energy level
    pub const MAX: u8 = 10;
    /// Score used when a mood label is not recognised
    pub const NEUTRAL: u8 = 5;
}

/// Burnout risk bounds
pub mod burnout {
    /// Lowest burnout risk
    pub const MIN_RISK: f64 = 0.0;
    /// Highest burnout risk
    pub const MAX_RISK: f64 = 1.0;
}

/// Score scale shared by every 0-100 metric
pub mod score {
    /// Lowest score
    pub const MIN: f64 = 0.0;
    /// Highest score
    pub const MAX: f64 = 100.0;
}

/// Calendar arithmetic
pub mod time {
    /// Minutes in an hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    /// Days in a week
    pub const DAYS_PER_WEEK: i64 = 7;
    /// Longest day-based window a series may cover
    pub const MAX_WINDOW_DAYS: i64 = 366;
}
