//! Event transform tests for statsd-otlp.

use statsd_otlp::event::{AlertType, Event, Priority};
use statsd_otlp::otlp::{AnyValue, KeyValue, KeyValueList, LogRecord};
use statsd_otlp::transform::{AttributeKeys, Transformer};
use statsd_otlp::ValidationError;

/// 2021-01-01T00:00:00Z
const FIXED_TS: i64 = 1_609_459_200;

fn sample_event() -> Event {
    Event {
        title: "title".to_string(),
        text: "text".to_string(),
        date_happened: FIXED_TS,
        tags: vec!["tag1:1".to_string(), "tag2:2".to_string()],
        source: "127.0.0.1".to_string(),
        priority: Priority::Normal,
        alert_type: AlertType::Error,
    }
}

fn expected_attributes(title_key: &str, properties_key: &str) -> Vec<KeyValue> {
    vec![
        KeyValue::string(title_key, "title"),
        KeyValue::string("tag1", "1"),
        KeyValue::string("tag2", "2"),
        KeyValue::string("host", "127.0.0.1"),
        KeyValue::string("priority", "normal"),
        KeyValue::string("alert_type", "error"),
        KeyValue::new(
            properties_key,
            KeyValueList::new(vec![KeyValue::string("text", "text")]),
        ),
    ]
}

/// Every expected attribute must be found by key, wherever it sits.
fn assert_attributes_by_key(record: &LogRecord, want: &[KeyValue]) {
    assert_eq!(record.attributes.len(), want.len());
    for kv in want {
        let found = record
            .attributes
            .iter()
            .find(|attr| attr.key == kv.key)
            .unwrap_or_else(|| panic!("attribute {} not found", kv.key));
        assert_eq!(found, kv);
    }
}

fn properties_text(record: &LogRecord, properties_key: &str) -> String {
    let group = record
        .attribute(properties_key)
        .and_then(AnyValue::as_kvlist)
        .expect("properties group");
    assert_eq!(group.values.len(), 1);
    group
        .get("text")
        .and_then(AnyValue::as_str)
        .expect("text entry")
        .to_string()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_missing_event_is_rejected() {
    let result = Transformer::try_new(None);
    assert!(matches!(result, Err(ValidationError::MissingEvent)));
}

#[test]
fn test_present_event_is_accepted_with_default_keys() {
    let event = sample_event();
    let transformer = Transformer::try_new(Some(&event)).unwrap();
    assert_eq!(transformer.keys(), &AttributeKeys::default());
    assert_eq!(transformer.event(), &event);
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_default_attribute_keys() {
    let event = sample_event();
    let record = Transformer::new(&event).transform_to_log();

    assert_eq!(record.time_unix_nano, 1_609_459_200_000_000_000);
    assert_attributes_by_key(&record, &expected_attributes("title", "properties"));
}

#[test]
fn test_custom_attribute_keys() {
    let event = sample_event();
    let mut transformer = Transformer::new(&event);
    transformer.set_title_attr_key("com.atlassian.title");
    transformer.set_properties_attr_key("com.atlassian.properties");
    let record = transformer.transform_to_log();

    assert_eq!(record.time_unix_nano, 1_609_459_200_000_000_000);
    assert_attributes_by_key(
        &record,
        &expected_attributes("com.atlassian.title", "com.atlassian.properties"),
    );
}

#[test]
fn test_key_override_keeps_value_and_position() {
    let event = sample_event();
    let default_record = Transformer::new(&event).transform_to_log();

    let keys = AttributeKeys {
        title: "t".to_string(),
        properties: "p".to_string(),
        ..AttributeKeys::default()
    };
    let custom_record = Transformer::with_keys(&event, keys).transform_to_log();

    assert_eq!(default_record.attributes.len(), custom_record.attributes.len());
    for (i, (a, b)) in default_record
        .attributes
        .iter()
        .zip(custom_record.attributes.iter())
        .enumerate()
    {
        assert_eq!(a.value, b.value, "value changed at {}", i);
        match i {
            0 => assert_eq!(b.key, "t"),
            6 => assert_eq!(b.key, "p"),
            _ => assert_eq!(a.key, b.key),
        }
    }
}

#[test]
fn test_attribute_count_matches_tag_count() {
    for n in [0usize, 1, 5, 32] {
        let event = Event {
            tags: (0..n).map(|i| format!("k{}:v{}", i, i)).collect(),
            ..sample_event()
        };
        let record = Transformer::new(&event).transform_to_log();
        assert_eq!(record.attributes.len(), n + 5, "tags = {}", n);
    }
}

#[test]
fn test_empty_text_is_kept() {
    let event = Event {
        text: String::new(),
        ..sample_event()
    };
    let record = Transformer::new(&event).transform_to_log();
    assert_eq!(properties_text(&record, "properties"), "");
}

#[test]
fn test_time_zero_and_large() {
    let zero = Event {
        date_happened: 0,
        ..sample_event()
    };
    assert_eq!(Transformer::new(&zero).transform_to_log().time_unix_nano, 0);

    let large = Event {
        date_happened: 4_102_444_800, // 2100-01-01
        ..sample_event()
    };
    assert_eq!(
        Transformer::new(&large).transform_to_log().time_unix_nano,
        4_102_444_800_000_000_000
    );
}

#[test]
fn test_time_outside_calendar_range() {
    let far_future = Event {
        date_happened: i64::MAX,
        ..sample_event()
    };
    assert!(far_future.happened_at().is_none());
    assert_eq!(Transformer::new(&far_future).transform_to_log().time_unix_nano, u64::MAX);

    let far_past = Event {
        date_happened: i64::MIN,
        ..sample_event()
    };
    assert!(far_past.happened_at().is_none());
    assert_eq!(Transformer::new(&far_past).transform_to_log().time_unix_nano, 0);
}

// ============================================================================
// Tags
// ============================================================================

#[test]
fn test_bare_tag_has_empty_value() {
    let event = Event {
        tags: vec!["standalone".to_string()],
        ..sample_event()
    };
    let record = Transformer::new(&event).transform_to_log();
    assert_eq!(record.attribute("standalone"), Some(&AnyValue::from("")));
}

#[test]
fn test_tag_splits_on_first_colon_only() {
    let event = Event {
        tags: vec!["a:b:c".to_string()],
        ..sample_event()
    };
    let record = Transformer::new(&event).transform_to_log();
    assert_eq!(record.attribute("a"), Some(&AnyValue::from("b:c")));
}

#[test]
fn test_colliding_tags_are_passed_through() {
    let event = Event {
        tags: vec!["env:prod".to_string(), "env:canary".to_string()],
        ..sample_event()
    };
    let record = Transformer::new(&event).transform_to_log();

    let envs: Vec<&str> = record
        .attributes
        .iter()
        .filter(|kv| kv.key == "env")
        .filter_map(|kv| kv.value.as_str())
        .collect();
    assert_eq!(envs, vec!["prod", "canary"]);
}

#[test]
fn test_tag_shadowing_builtin_key_is_not_merged() {
    let event = Event {
        tags: vec!["host:from-tag".to_string()],
        ..sample_event()
    };
    let record = Transformer::new(&event).transform_to_log();
    let hosts: Vec<&str> = record
        .attributes
        .iter()
        .filter(|kv| kv.key == "host")
        .filter_map(|kv| kv.value.as_str())
        .collect();
    assert_eq!(hosts, vec!["from-tag", "127.0.0.1"]);
}

// ============================================================================
// Enums
// ============================================================================

#[test]
fn test_priority_and_alert_type_strings() {
    let event = Event {
        priority: Priority::Low,
        alert_type: AlertType::Success,
        ..sample_event()
    };
    let record = Transformer::new(&event).transform_to_log();
    assert_eq!(record.attribute("priority"), Some(&AnyValue::from("low")));
    assert_eq!(record.attribute("alert_type"), Some(&AnyValue::from("success")));
}

#[test]
fn test_record_json_wire_shape() {
    let event = sample_event();
    let record = Transformer::new(&event).transform_to_log();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["timeUnixNano"], "1609459200000000000");
    assert_eq!(json["attributes"][0]["value"]["stringValue"], "title");
    assert_eq!(
        json["attributes"][6]["value"]["kvlistValue"]["values"][0]["value"]["stringValue"],
        "text"
    );
}
