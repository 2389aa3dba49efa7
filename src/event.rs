// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Statsd event model.
//!
//! Events arrive already parsed from the statsd wire format. They are read-only
//! inputs to the transformer; nothing in this crate mutates them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Low,
}

impl Priority {
    /// Canonical string form used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl AlertType {
    /// Canonical string form used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discrete statsd event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Short summary line.
    pub title: String,
    /// Free-text body. May be empty.
    #[serde(default)]
    pub text: String,
    /// Unix timestamp in seconds.
    pub date_happened: i64,
    /// `"key:value"` or bare `"key"` tags, in arrival order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Originating host.
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub alert_type: AlertType,
}

impl Event {
    /// Event time as a UTC datetime, or `None` if out of chrono's range.
    pub fn happened_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date_happened, 0)
    }
}

/// Split a tag on its first `:`.
///
/// A tag without a colon yields the whole tag as key and an empty value.
pub fn split_tag(tag: &str) -> (&str, &str) {
    tag.split_once(':').unwrap_or((tag, ""))
}
