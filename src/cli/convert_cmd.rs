// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! `convert` subcommand: statsd events (JSON) in, OTLP `ResourceLogs` (JSON) out.
//!
//! Input is a JSON array of events. `null` entries are rejected and skipped;
//! every other entry becomes one log record in a single scope.

use std::fs::File;
use std::io::{Read, Write};
use std::sync::Arc;

use crate::config::Config;
use crate::error::ValidationError;
use crate::event::Event;
use crate::otlp::{ResourceLogs, ScopeLogs};
use crate::telemetry::{ConversionSpan, SpanExt};
use crate::transform::Transformer;

use super::CliError;

/// Result of converting a batch of events.
#[derive(Debug)]
pub struct ConvertOutcome {
    pub resource_logs: ResourceLogs,
    /// Input positions that were rejected, with the reason.
    pub rejected: Vec<(usize, ValidationError)>,
}

/// Convert `events` into one `ResourceLogs` using the configured keys,
/// resource and scope.
pub fn convert_events(events: &[Option<Event>], config: &Config) -> ConvertOutcome {
    let mut scope_logs = ScopeLogs::new(config.scope(), Vec::with_capacity(events.len()));
    let mut rejected = Vec::new();

    for (index, event) in events.iter().enumerate() {
        let span = ConversionSpan::new(index);
        let _guard = span.enter();

        let result = Transformer::try_new(event.as_ref()).map(|mut transformer| {
            transformer.set_title_attr_key(config.attribute_keys.title.as_str());
            transformer.set_category_attr_key(config.attribute_keys.category.as_str());
            transformer.set_properties_attr_key(config.attribute_keys.properties.as_str());
            transformer.transform_to_log()
        });
        span.record_result(&result);

        match result {
            Ok(record) => {
                span.record("attributes", record.attributes.len());
                scope_logs.push(record);
            }
            Err(e) => {
                tracing::warn!(index, error = %e, "rejected event");
                rejected.push((index, e));
            }
        }
    }

    tracing::info!(
        converted = scope_logs.log_records.len(),
        rejected = rejected.len(),
        "batch converted"
    );

    ConvertOutcome {
        resource_logs: ResourceLogs::new(Arc::new(config.resource()), [Arc::new(scope_logs)]),
        rejected,
    }
}

/// Parse a JSON array of (possibly null) events.
pub fn parse_events(json: &str) -> Result<Vec<Option<Event>>, CliError> {
    serde_json::from_str(json).map_err(|e| CliError::InvalidInput(e.to_string()))
}

/// Run the conversion on a file (or stdin for `-`) and print the result to stdout.
///
/// Returns 0 when every event converted, 1 if any entry was rejected,
/// 2 on unreadable input.
pub fn run_convert(source: &str, config: &Config) -> i32 {
    let stdout = std::io::stdout();
    if source == "-" {
        return run_convert_with(std::io::stdin().lock(), stdout.lock(), config);
    }
    match File::open(source) {
        Ok(file) => run_convert_with(file, stdout.lock(), config),
        Err(e) => {
            eprintln!("Error: {}", CliError::Io(format!("{}: {}", source, e)));
            2
        }
    }
}

/// Read events from `input` and write pretty `ResourceLogs` JSON to `out`.
///
/// Same exit codes as [`run_convert`].
pub fn run_convert_with<R: Read, W: Write>(mut input: R, mut out: W, config: &Config) -> i32 {
    let mut json = String::new();
    let events = match input
        .read_to_string(&mut json)
        .map_err(|e| CliError::Io(e.to_string()))
        .and_then(|_| parse_events(&json))
    {
        Ok(events) => events,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 2;
        }
    };

    let outcome = convert_events(&events, config);
    let written = serde_json::to_writer_pretty(&mut out, &outcome.resource_logs)
        .map_err(|e| e.to_string())
        .and_then(|()| writeln!(out).map_err(|e| e.to_string()));
    if let Err(e) = written {
        eprintln!("Error: failed to write output: {}", e);
        return 2;
    }

    if outcome.rejected.is_empty() {
        0
    } else {
        1
    }
}
