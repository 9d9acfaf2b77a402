// ABOUTME: Configuration module for taskpulse-intelligence crate
// ABOUTME: Re-exports analytics configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

/// Analytics engine configuration (metrics, patterns, prediction, anomaly, health)
pub mod analytics;

pub use analytics::{
    AnalyticsConfig, AnomalyConfig, ConfigError, HealthConfig, MetricsConfig, PatternConfig,
    PredictionConfig,
};
