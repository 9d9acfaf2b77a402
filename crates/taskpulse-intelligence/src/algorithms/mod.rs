// ABOUTME: Pluggable estimation algorithms selected through configuration
// ABOUTME: Enum dispatch keeps the choice explicit and serializable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

//! Estimation algorithms.
//!
//! Each algorithm family is an enum whose variant is picked from configuration
//! when the engine is built. Adding an estimator means adding a variant, not a
//! trait object.

/// Task completion probability estimators
pub mod completion;

pub use completion::{CompletionAlgorithm, CompletionEstimate, CompletionFactor, CompletionFeatures};
