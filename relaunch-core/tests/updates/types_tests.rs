// SPDX-FileCopyrightText: 2026 Relaunch Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the update record wire shape

use relaunch_core::UpdateRecord;
use serde_json::json;

#[test]
fn test_unknown_fields_pass_through_unchanged() {
    let raw = json!({
        "id": "a1b2",
        "timestamp": 1_700_000_000_000i64,
        "name": "demo app",
        "manifest": { "runtimeVersion": "1.0.0" },
        "isCompatible": true
    });

    let record: UpdateRecord = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(record.id, "a1b2");
    assert_eq!(record.timestamp, 1_700_000_000_000);
    assert_eq!(record.payload.get("name"), Some(&json!("demo app")));

    let back = serde_json::to_value(&record).unwrap();
    assert_eq!(back, raw);
}

#[test]
fn test_missing_id_is_rejected() {
    let raw = json!({ "timestamp": 42 });
    assert!(serde_json::from_value::<UpdateRecord>(raw).is_err());
}

#[test]
fn test_missing_timestamp_is_rejected() {
    let raw = json!({ "id": "a1b2" });
    assert!(serde_json::from_value::<UpdateRecord>(raw).is_err());
}

#[test]
fn test_records_without_payload_compare_by_fields() {
    assert_eq!(UpdateRecord::new("a", 1), UpdateRecord::new("a", 1));
    assert_ne!(UpdateRecord::new("a", 1), UpdateRecord::new("a", 2));
    assert_ne!(UpdateRecord::new("a", 1), UpdateRecord::new("b", 1));
}
