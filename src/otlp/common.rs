// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Common OTLP value types shared by logs, metrics and resources.

use serde::{Serialize, Serializer};

/// Attribute value.
///
/// Only the two kinds the event transform produces are modeled: a scalar
/// string and one level of nested key/value list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AnyValue {
    #[serde(rename = "stringValue")]
    String(String),
    #[serde(rename = "kvlistValue")]
    KvList(KeyValueList),
}

impl AnyValue {
    /// Borrow the scalar string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::KvList(_) => None,
        }
    }

    /// Borrow the nested list, if this is one.
    pub fn as_kvlist(&self) -> Option<&KeyValueList> {
        match self {
            Self::String(_) => None,
            Self::KvList(list) => Some(list),
        }
    }
}

impl From<String> for AnyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for AnyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<KeyValueList> for AnyValue {
    fn from(value: KeyValueList) -> Self {
        Self::KvList(value)
    }
}

/// A single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValue {
    pub key: String,
    pub value: AnyValue,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<AnyValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a string-valued attribute.
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: AnyValue::String(value.into()),
        }
    }
}

/// Ordered list of attributes used as a nested value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyValueList {
    pub values: Vec<KeyValue>,
}

impl KeyValueList {
    pub fn new(values: Vec<KeyValue>) -> Self {
        Self { values }
    }

    /// First entry with the given key.
    pub fn get(&self, key: &str) -> Option<&AnyValue> {
        find_attribute(&self.values, key)
    }
}

/// Name and version of the component that produced a batch of telemetry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstrumentationScope {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl InstrumentationScope {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Look up the first attribute with `key`.
///
/// Consumers index attributes by key; position carries no meaning.
pub fn find_attribute<'a>(attributes: &'a [KeyValue], key: &str) -> Option<&'a AnyValue> {
    attributes.iter().find(|kv| kv.key == key).map(|kv| &kv.value)
}

/// OTLP/JSON encodes 64-bit integers as decimal strings.
pub(crate) fn serialize_u64_as_string<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}
