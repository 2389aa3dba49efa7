// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Log records and their resource/scope containers.

use std::sync::Arc;

use serde::Serialize;

use super::common::{find_attribute, serialize_u64_as_string, AnyValue, InstrumentationScope, KeyValue};
use super::resource::Resource;

/// One discrete event with a timestamp and attribute set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    #[serde(serialize_with = "serialize_u64_as_string")]
    pub time_unix_nano: u64,
    pub attributes: Vec<KeyValue>,
}

impl LogRecord {
    /// First attribute with `key`.
    pub fn attribute(&self, key: &str) -> Option<&AnyValue> {
        find_attribute(&self.attributes, key)
    }
}

/// Log records produced by one instrumentation scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeLogs {
    pub scope: InstrumentationScope,
    pub log_records: Vec<LogRecord>,
}

impl ScopeLogs {
    pub fn new(scope: InstrumentationScope, log_records: Vec<LogRecord>) -> Self {
        Self { scope, log_records }
    }

    pub fn push(&mut self, record: LogRecord) {
        self.log_records.push(record);
    }
}

/// Top-level logs container: one resource, zero or more scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLogs {
    pub resource: Arc<Resource>,
    pub scope_logs: Vec<Arc<ScopeLogs>>,
}

impl ResourceLogs {
    /// Group `scope_logs` under `resource`, keeping input order.
    pub fn new<I>(resource: Arc<Resource>, scope_logs: I) -> Self
    where
        I: IntoIterator<Item = Arc<ScopeLogs>>,
        I::IntoIter: ExactSizeIterator,
    {
        let scope_logs = scope_logs.into_iter();
        let mut scopes = Vec::with_capacity(scope_logs.len());
        scopes.extend(scope_logs);

        Self {
            resource,
            scope_logs: scopes,
        }
    }
}
