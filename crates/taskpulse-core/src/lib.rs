// ABOUTME: Core types and validation for the TaskPulse analytics engine
// ABOUTME: Foundation crate with error handling, task and mood models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

#![deny(unsafe_code)]

//! # TaskPulse Core
//!
//! Foundation crate providing the shared record types and error handling for
//! the TaskPulse analytics engine. Everything here changes rarely, so the
//! heavier intelligence crate can compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Task and mood input records, builders and the validated snapshot
//! - **constants**: Scales and calendar constants shared by every component

/// Unified error handling system with standard error codes
pub mod errors;

/// Input records (`Task`, `MoodRecord`) and the validated `AnalyticsSnapshot`
pub mod models;

/// Shared scales, ranges and calendar constants
pub mod constants;
