// ABOUTME: Configuration error types for analytics configuration validation
// ABOUTME: Defines error variants for invalid ranges, weight sums and unparsable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

//! Configuration error types for analytics configuration validation.

use serde_json::json;
use taskpulse_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range bounds are inverted or thresholds out of order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights don't sum to 1.0
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let kind = match &error {
            ConfigError::InvalidRange(_) => "invalid_range",
            ConfigError::Parse(_) => "parse",
            ConfigError::InvalidWeights(_) => "invalid_weights",
            ConfigError::ValueOutOfRange(_) => "value_out_of_range",
        };
        Self::config(error.to_string())
            .with_details(json!({ "kind": kind }))
            .with_source(error)
    }
}
