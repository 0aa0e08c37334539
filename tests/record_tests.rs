//! Serialization-facing behavior of output records.

use testvec::record::{OutputRecord, TagSet};
use testvec::value::Value;

#[test]
fn record_serializes_as_a_plain_mapping() {
    let mut record = OutputRecord::with_description("voluntary_exit");
    record.insert("validator_index", Value::Number(3.0));

    let json = serde_json::to_value(&record).expect("record must serialize");
    let object = json.as_object().expect("record serializes transparently");
    assert!(object.contains_key("description"));
    assert!(object.contains_key("validator_index"));
}

#[test]
fn derived_serialization_round_trips() {
    let mut record = OutputRecord::with_description("rewards");
    record.insert("head", Value::List(vec![Value::Number(1.0), Value::Nil]));

    let json = serde_json::to_string(&record).unwrap();
    let back: OutputRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn fixture_json_uses_unwrapped_values() {
    let mut record = OutputRecord::with_description("slashing");
    record.insert("slot", Value::Number(8.0));
    record.insert("ok", Value::Bool(true));

    let json = record.to_json();
    assert_eq!(json["description"], serde_json::json!("slashing"));
    assert_eq!(json["slot"], serde_json::json!(8));
    assert_eq!(json["ok"], serde_json::json!(true));
}

#[test]
fn overlay_after_serialization_boundary() {
    let mut record = OutputRecord::with_description("finality");
    record.insert("epoch", Value::Number(2.0));

    let tags = TagSet::new().with("fork", "phase0").with("epoch", -1i64);
    let merged = record.overlay_tags(&tags);

    assert_eq!(merged.get("fork"), Some(&Value::from("phase0")));
    assert_eq!(merged.get("epoch"), Some(&Value::Number(2.0)));
    assert_eq!(merged.len(), 3);
}
