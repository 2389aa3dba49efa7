// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Resource identity of a telemetry producer.

use serde::Serialize;

use super::common::{find_attribute, AnyValue, KeyValue};

/// Identity of the producer (host, service, ...) of a batch of telemetry.
///
/// Containers hold resources behind an `Arc`; the attribute list is never
/// copied when a container is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub attributes: Vec<KeyValue>,
}

impl Resource {
    pub fn new(attributes: Vec<KeyValue>) -> Self {
        Self { attributes }
    }

    /// Build a resource of string attributes, keeping input order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| KeyValue::string(k, v))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&AnyValue> {
        find_attribute(&self.attributes, key)
    }
}
