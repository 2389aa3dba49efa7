// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Event to OTLP log record transform.
//!
//! A [`Transformer`] is bound to one event and produces a [`LogRecord`] whose
//! attributes are, in order: title, one per tag, `host`, `priority`,
//! `alert_type`, and a nested properties group holding the event text.
//! The title and properties key names are configurable per transformer.

use crate::error::ValidationError;
use crate::event::{split_tag, Event};
use crate::otlp::{KeyValue, KeyValueList, LogRecord};

pub const DEFAULT_TITLE_ATTR_KEY: &str = "title";
pub const DEFAULT_CATEGORY_ATTR_KEY: &str = "category";
pub const DEFAULT_PROPERTIES_ATTR_KEY: &str = "properties";

const HOST_ATTR_KEY: &str = "host";
const PRIORITY_ATTR_KEY: &str = "priority";
const ALERT_TYPE_ATTR_KEY: &str = "alert_type";
const TEXT_ATTR_KEY: &str = "text";

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Attribute key names used by the transform.
///
/// Values are not validated; an empty key produces an attribute with an
/// empty key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeKeys {
    pub title: String,
    /// Carried for exporters; the log transform does not emit it.
    pub category: String,
    pub properties: String,
}

impl Default for AttributeKeys {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_ATTR_KEY.to_string(),
            category: DEFAULT_CATEGORY_ATTR_KEY.to_string(),
            properties: DEFAULT_PROPERTIES_ATTR_KEY.to_string(),
        }
    }
}

/// Converts one event into a log record.
#[derive(Debug, Clone)]
pub struct Transformer<'a> {
    event: &'a Event,
    keys: AttributeKeys,
}

impl<'a> Transformer<'a> {
    /// Bind to `event` with default attribute keys.
    pub fn new(event: &'a Event) -> Self {
        Self::with_keys(event, AttributeKeys::default())
    }

    pub fn with_keys(event: &'a Event, keys: AttributeKeys) -> Self {
        Self { event, keys }
    }

    /// Bind to an event that may be absent.
    ///
    /// Fails with [`ValidationError::MissingEvent`] when `event` is `None`.
    pub fn try_new(event: Option<&'a Event>) -> Result<Self, ValidationError> {
        event.map(Self::new).ok_or(ValidationError::MissingEvent)
    }

    pub fn set_title_attr_key(&mut self, key: impl Into<String>) {
        self.keys.title = key.into();
    }

    pub fn set_category_attr_key(&mut self, key: impl Into<String>) {
        self.keys.category = key.into();
    }

    pub fn set_properties_attr_key(&mut self, key: impl Into<String>) {
        self.keys.properties = key.into();
    }

    pub fn keys(&self) -> &AttributeKeys {
        &self.keys
    }

    pub fn event(&self) -> &'a Event {
        self.event
    }

    /// Produce the log record for the bound event.
    ///
    /// Pure: repeated calls return equal records. Tags are split on their
    /// first `:` and are not deduplicated.
    pub fn transform_to_log(&self) -> LogRecord {
        let event = self.event;
        let mut attributes = Vec::with_capacity(event.tags.len() + 5);

        attributes.push(KeyValue::string(self.keys.title.as_str(), event.title.as_str()));

        for tag in &event.tags {
            let (key, value) = split_tag(tag);
            attributes.push(KeyValue::string(key, value));
        }

        attributes.push(KeyValue::string(HOST_ATTR_KEY, event.source.as_str()));
        attributes.push(KeyValue::string(PRIORITY_ATTR_KEY, event.priority.as_str()));
        attributes.push(KeyValue::string(ALERT_TYPE_ATTR_KEY, event.alert_type.as_str()));

        let properties = KeyValueList::new(vec![KeyValue::string(TEXT_ATTR_KEY, event.text.as_str())]);
        attributes.push(KeyValue::new(self.keys.properties.as_str(), properties));

        tracing::debug!(
            title = %event.title,
            happened_at = %event.happened_at().map(|t| t.to_rfc3339()).unwrap_or_default(),
            tags = event.tags.len(),
            attributes = attributes.len(),
            "event transformed to log record"
        );

        LogRecord {
            time_unix_nano: unix_secs_to_nanos(event.date_happened),
            attributes,
        }
    }
}

impl<'a> TryFrom<Option<&'a Event>> for Transformer<'a> {
    type Error = ValidationError;

    fn try_from(event: Option<&'a Event>) -> Result<Self, Self::Error> {
        Self::try_new(event)
    }
}

/// Seconds to nanoseconds. Pre-epoch times clamp to 0; overflow saturates.
fn unix_secs_to_nanos(secs: i64) -> u64 {
    u64::try_from(secs).unwrap_or(0).saturating_mul(NANOS_PER_SEC)
}
