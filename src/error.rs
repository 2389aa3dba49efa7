// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for statsd-otlp.

use thiserror::Error;

/// Errors raised while binding a transformer to its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Validation failed: event is missing")]
    MissingEvent,
}

/// Errors that can occur while loading configuration from a file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),

    #[error("Invalid config TOML: {0}")]
    Parse(String),
}
