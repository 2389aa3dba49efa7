// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! statsd-otlp
//!
//! Shapes statsd events into OTLP log records and groups telemetry under
//! resource/scope containers. Produces in-memory structures only: transport,
//! batching and retry belong to the exporter.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use statsd_otlp::event::{AlertType, Event};
//! use statsd_otlp::otlp::{InstrumentationScope, Resource, ResourceLogs, ScopeLogs};
//! use statsd_otlp::transform::Transformer;
//!
//! let event = Event {
//!     title: "deploy".into(),
//!     text: "rolled out v2".into(),
//!     date_happened: 1_609_459_200,
//!     tags: vec!["env:prod".into()],
//!     source: "edge-1".into(),
//!     alert_type: AlertType::Success,
//!     ..Default::default()
//! };
//!
//! let mut transformer = Transformer::new(&event);
//! transformer.set_title_attr_key("com.example.title");
//! let record = transformer.transform_to_log();
//! assert_eq!(record.attributes.len(), 6);
//!
//! let scope = ScopeLogs::new(InstrumentationScope::new("statsd-otlp", ""), vec![record]);
//! let logs = ResourceLogs::new(Arc::new(Resource::default()), [Arc::new(scope)]);
//! assert_eq!(logs.scope_logs.len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod otlp;
pub mod telemetry;
pub mod transform;

pub use error::{ConfigError, ValidationError};
pub use event::{AlertType, Event, Priority};
pub use transform::{AttributeKeys, Transformer};
