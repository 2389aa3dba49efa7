// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI module for statsd-otlp commands.
//!
//! ## Usage
//!
//! ```bash
//! statsd-otlp-cli convert events.json   # Convert a JSON array of events
//! cat events.json | statsd-otlp-cli convert -
//! statsd-otlp-cli config show           # Show effective configuration
//! ```

pub mod config_cmd;
pub mod convert_cmd;

use thiserror::Error;

pub use convert_cmd::{convert_events, parse_events, run_convert, run_convert_with, ConvertOutcome};

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let err = CliError::InvalidInput("expected array".to_string());
        assert!(err.to_string().contains("Invalid input"));
        assert!(err.to_string().contains("expected array"));
    }
}
