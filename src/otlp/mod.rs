// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! OTLP data model.
//!
//! In-memory mirrors of the OpenTelemetry log and metrics structures, limited
//! to what this crate produces. Types serialize per the OTLP/JSON mapping.

mod common;
mod logs;
mod metrics;
mod resource;

pub use common::{find_attribute, AnyValue, InstrumentationScope, KeyValue, KeyValueList};
pub use logs::{LogRecord, ResourceLogs, ScopeLogs};
pub use metrics::{Metric, ResourceMetrics, ScopeMetrics};
pub use resource::Resource;
