// ABOUTME: Productivity analytics engine turning task and mood history into scores and alerts
// ABOUTME: Metrics, patterns, predictions, anomaly monitors and the dashboard aggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

#![deny(unsafe_code)]

//! # TaskPulse Intelligence
//!
//! A stateless, synchronous analytics engine. Every component is built once
//! from an immutable [`AnalyticsConfig`] and then only reads the snapshot it
//! is handed, so instances are `Send + Sync` and can be shared freely.
//!
//! ## Components
//!
//! - **`productivity_metrics`**: daily, weekly, focus and efficiency scores
//! - **`pattern_recognition`**: peak hours, weekday rhythm, mood correlation
//! - **`predictive_insights`**: completion probability, forecast, burnout trend, schedule
//! - **`anomaly_detection`**: five independent monitors scaled by sensitivity
//! - **`dashboard`**: composite health score and the four response views
//!
//! Sparse data is never an error. Forecasts return
//! [`Prediction::Insufficient`] instead of extrapolating from too few points,
//! and every result carries a [`ConfidenceLevel`].

/// Pluggable completion probability estimators
pub mod algorithms;

/// Default burnout risk estimator from mood records
pub mod burnout;

/// Engine configuration and validation
pub mod config;

/// Confidence levels, sample sizes and tagged predictions
pub mod confidence;

/// Mood label to score mapping
pub mod mood_scale;

/// Work session reconstruction
pub mod sessions;

/// Regression and guarded summary statistics
pub mod statistical_analysis;

/// Productivity metrics calculator
pub mod productivity_metrics;

/// Pattern recognition engine
pub mod pattern_recognition;

/// Predictive insights generator
pub mod predictive_insights;

/// Anomaly detection system
pub mod anomaly_detection;

/// Analytics dashboard aggregator
pub mod dashboard;

pub use algorithms::CompletionAlgorithm;
pub use anomaly_detection::{
    AnomalyDetector, AnomalyReport, MonitorReport, OverallStatus, Severity,
};
pub use config::{AnalyticsConfig, ConfigError};
pub use confidence::{ConfidenceLevel, Prediction, SampleSize};
pub use dashboard::{
    AnalyticsDashboard, BurnoutAssessment, FullDashboard, HealthScore, HealthStatus,
    QuickInsights, WeeklySummary,
};
pub use pattern_recognition::{PatternProfile, PatternRecognizer, PatternReport, TimeOfDay};
pub use predictive_insights::{
    BurnoutTrend, BurnoutWarning, CompletionContext, CompletionPrediction, Outlook,
    PredictiveInsights, ScheduleSuggestion, Trend, WeeklyForecast,
};
pub use productivity_metrics::{
    DailyMetrics, EfficiencyMetrics, FocusMetrics, ProductivityMetricsCalculator,
    ProductivityReport, WeeklyMetrics,
};
