// ABOUTME: Main library entry point for the TaskPulse productivity analytics engine
// ABOUTME: Re-exports the core and intelligence crates and owns structured logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

#![deny(unsafe_code)]

//! # TaskPulse
//!
//! Productivity analytics over a user's task and mood history. The engine is
//! a pure function of an [`AnalyticsSnapshot`](models::AnalyticsSnapshot) and
//! an [`AnalyticsConfig`](intelligence::AnalyticsConfig): it performs no I/O,
//! keeps no state between calls, and never fails on sparse data.
//!
//! ## Architecture
//!
//! - **`taskpulse-core`**: input records, boundary validation, `AppError`
//! - **`taskpulse-intelligence`**: metrics, patterns, predictions, anomaly
//!   monitors and the dashboard aggregator
//! - **this crate**: facade re-exports, JSON input loading, logging setup and
//!   the `taskpulse-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use taskpulse::intelligence::{AnalyticsConfig, AnalyticsDashboard};
//! use taskpulse::models::AnalyticsSnapshot;
//!
//! let dashboard = AnalyticsDashboard::new(AnalyticsConfig::default())?;
//! let snapshot = AnalyticsSnapshot::empty(Utc::now());
//! let quick = dashboard.quick_insights(&snapshot);
//! assert_eq!(quick.total_tasks, 0);
//! # Ok::<(), taskpulse::errors::AppError>(())
//! ```

/// Snapshot and configuration file loading
pub mod input;

/// Structured logging configuration and subscriber initialization
pub mod logging;

/// Unified error handling (`AppError`, `ErrorCode`, `AppResult`)
pub use taskpulse_core::errors;

/// Input records and the validated snapshot
pub use taskpulse_core::models;

/// Shared scales and calendar constants
pub use taskpulse_core::constants;

/// The analytics engine
pub use taskpulse_intelligence as intelligence;
