// ABOUTME: JSON output helpers for the TaskPulse CLI
// ABOUTME: Writes serialized views to stdout in compact or pretty form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize `value` and write it to stdout followed by a newline
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write output")?;
    Ok(())
}
