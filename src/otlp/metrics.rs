// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Resource and scope containers for metrics.
//!
//! Metric payloads are opaque here: aggregation and data points belong to the
//! exporter, this layer only groups what it is handed.

use std::sync::Arc;

use serde::Serialize;

use super::common::InstrumentationScope;
use super::resource::Resource;

/// Metric descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unit: String,
}

impl Metric {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Metrics produced by one instrumentation scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScopeMetrics {
    pub scope: InstrumentationScope,
    pub metrics: Vec<Metric>,
}

impl ScopeMetrics {
    pub fn new(scope: InstrumentationScope, metrics: Vec<Metric>) -> Self {
        Self { scope, metrics }
    }
}

/// Top-level metrics container: one resource, zero or more scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMetrics {
    pub resource: Arc<Resource>,
    pub scope_metrics: Vec<Arc<ScopeMetrics>>,
}

impl ResourceMetrics {
    /// Group `scope_metrics` under `resource`, keeping input order.
    ///
    /// Never fails. No deduplication; an empty input yields an empty sequence.
    pub fn new<I>(resource: Arc<Resource>, scope_metrics: I) -> Self
    where
        I: IntoIterator<Item = Arc<ScopeMetrics>>,
        I::IntoIter: ExactSizeIterator,
    {
        let scope_metrics = scope_metrics.into_iter();
        let mut scopes = Vec::with_capacity(scope_metrics.len());
        scopes.extend(scope_metrics);

        Self {
            resource,
            scope_metrics: scopes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_scopes_yields_empty_sequence() {
        let resource = Arc::new(Resource::from_pairs([("service.name", "statsd")]));
        let rm = ResourceMetrics::new(resource.clone(), Vec::new());
        assert!(rm.scope_metrics.is_empty());
        assert!(Arc::ptr_eq(&rm.resource, &resource));
    }

    #[test]
    fn test_scope_order_is_preserved() {
        let s1 = Arc::new(ScopeMetrics::new(
            InstrumentationScope::new("first", "1"),
            vec![Metric::new("requests")],
        ));
        let s2 = Arc::new(ScopeMetrics::new(InstrumentationScope::new("second", "1"), Vec::new()));

        let rm = ResourceMetrics::new(Arc::new(Resource::default()), [s1.clone(), s2.clone()]);
        assert_eq!(rm.scope_metrics.len(), 2);
        assert!(Arc::ptr_eq(&rm.scope_metrics[0], &s1));
        assert!(Arc::ptr_eq(&rm.scope_metrics[1], &s2));
    }

    #[test]
    fn test_same_scope_twice_is_kept() {
        let s = Arc::new(ScopeMetrics::default());
        let rm = ResourceMetrics::new(Arc::new(Resource::default()), [s.clone(), s.clone()]);
        assert_eq!(rm.scope_metrics.len(), 2);
        assert_eq!(Arc::strong_count(&s), 3);
    }

    #[test]
    fn test_json_shape() {
        let rm = ResourceMetrics::new(
            Arc::new(Resource::default()),
            [Arc::new(ScopeMetrics::new(
                InstrumentationScope::new("statsd-otlp", ""),
                vec![Metric::new("events")],
            ))],
        );
        let json = serde_json::to_value(&rm).unwrap();
        assert_eq!(json["scopeMetrics"][0]["scope"]["name"], "statsd-otlp");
        assert_eq!(json["scopeMetrics"][0]["metrics"][0]["name"], "events");
    }
}
