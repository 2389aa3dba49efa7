// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Span utilities for event conversion.

use tracing::{info_span, Span};

/// Extension trait for adding context to spans.
pub trait SpanExt {
    /// Record the result of an operation into the span.
    fn record_result<T, E>(&self, result: &Result<T, E>)
    where
        E: std::fmt::Display;
}

impl SpanExt for Span {
    fn record_result<T, E>(&self, result: &Result<T, E>)
    where
        E: std::fmt::Display,
    {
        match result {
            Ok(_) => {
                self.record("status", "ok");
            }
            Err(e) => {
                self.record("status", "error");
                self.record("error.message", e.to_string().as_str());
            }
        }
    }
}

/// Factory for conversion spans.
pub struct ConversionSpan;

impl ConversionSpan {
    /// Span for converting the event at `index` of a batch.
    ///
    /// `status` and `error.message` are filled in by [`SpanExt::record_result`];
    /// `attributes` after a successful transform.
    pub fn new(index: usize) -> Span {
        info_span!(
            "event_conversion",
            index = index,
            status = tracing::field::Empty,
            error.message = tracing::field::Empty,
            attributes = tracing::field::Empty,
        )
    }
}
