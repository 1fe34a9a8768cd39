// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: End-to-end checks of the logging API surface over the codec.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use lantern::schema::{logging, wellknown};
use lantern::{
    decode, encode, from_json, to_json, verify, DynamicMessage, EntryBuilder, Severity, Value,
};
use serde_json::json;

#[test]
fn log_entry_round_trips_with_one_payload_member() {
    let entry = EntryBuilder::new()
        .log_name("projects/p/logs/l")
        .severity(Severity::Error)
        .text_payload("boom")
        .build();

    let bytes = encode(&entry);
    let decoded = decode(&logging::LOG_ENTRY, &bytes).expect("decode");

    assert_eq!(
        decoded.get_by_name("log_name"),
        Some(&Value::String("projects/p/logs/l".to_owned()))
    );
    assert_eq!(decoded.get_by_name("severity"), Some(&Value::Enum(500)));
    assert_eq!(
        decoded.get_by_name("text_payload"),
        Some(&Value::String("boom".to_owned()))
    );
    // Only one member of the payload oneof survives.
    assert!(decoded.get_by_name("proto_payload").is_none());
    assert!(decoded.get_by_name("json_payload").is_none());
}

#[test]
fn write_request_carries_three_entries_in_order() {
    let mut request = DynamicMessage::new(&logging::WRITE_LOG_ENTRIES_REQUEST);
    request
        .set_by_name("partial_success", Value::Bool(true))
        .unwrap();

    let mut entry_lens = 0usize;
    for index in 0..3 {
        let entry = EntryBuilder::new()
            .text_payload(&format!("entry-{index}"))
            .build();
        entry_lens += encode(&entry).len();
        request.push(4, Value::Message(entry)).unwrap();
    }

    let bytes = encode(&request);
    // Three embedded sub-messages plus their tags and length prefixes.
    assert!(bytes.len() > entry_lens);

    let decoded = decode(&logging::WRITE_LOG_ENTRIES_REQUEST, &bytes).expect("decode");
    let entries = decoded.repeated(4);
    assert_eq!(entries.len(), 3);
    for (index, entry) in entries.iter().enumerate() {
        let Value::Message(entry) = entry else {
            panic!("entries are messages");
        };
        assert_eq!(
            entry.get_by_name("text_payload"),
            Some(&Value::String(format!("entry-{index}")))
        );
    }
    assert_eq!(decoded.get_by_name("partial_success"), Some(&Value::Bool(true)));
}

#[test]
fn re_encoding_a_decoded_request_is_byte_identical() {
    let mut request = DynamicMessage::new(&logging::WRITE_LOG_ENTRIES_REQUEST);
    request
        .set_by_name("log_name", Value::String("projects/p/logs/l".to_owned()))
        .unwrap();
    request
        .push(
            4,
            Value::Message(
                EntryBuilder::new()
                    .severity(Severity::Warning)
                    .text_payload("careful")
                    .label("env", "prod")
                    .label("zone", "eu-west1")
                    .build(),
            ),
        )
        .unwrap();

    let first = encode(&request);
    let second = encode(&decode(&logging::WRITE_LOG_ENTRIES_REQUEST, &first).expect("decode"));
    assert_eq!(first, second);
}

#[test]
fn unknown_fields_from_a_newer_schema_survive() {
    let entry = EntryBuilder::new().text_payload("future-proof").build();
    let mut bytes = encode(&entry);
    // A field number the current schema does not define, as a newer server
    // revision might emit.
    proto_wire::put_tag(&mut bytes, 1999, proto_wire::WireType::LengthDelimited);
    proto_wire::put_len_prefixed(&mut bytes, b"from-the-future");

    let decoded = decode(&logging::LOG_ENTRY, &bytes).expect("decode");
    assert_eq!(decoded.unknown_fields().len(), 1);
    assert_eq!(encode(&decoded), bytes);
}

#[test]
fn log_entry_json_round_trip() {
    let object = json!({
        "logName": "projects/p/logs/l",
        "severity": "ERROR",
        "textPayload": "boom",
        "labels": {"env": "prod"},
        "timestamp": {"seconds": "1700000000", "nanos": 42},
    });
    assert_eq!(verify(&object, &logging::LOG_ENTRY), None);

    let entry = from_json(&logging::LOG_ENTRY, &object).expect("convert");
    let decoded = decode(&logging::LOG_ENTRY, &encode(&entry)).expect("decode");
    assert_eq!(to_json(&decoded), object);
}

#[test]
fn verify_rejects_a_bad_severity() {
    let object = json!({"severity": "SHOUTING"});
    let violation = verify(&object, &logging::LOG_ENTRY).expect("violation");
    assert!(violation.contains("SHOUTING"), "{violation}");
}

#[test]
fn any_payload_round_trips_through_the_payload_oneof() {
    let audit_bytes = vec![0x08, 0x2a];
    let entry = EntryBuilder::new()
        .proto_payload("type.googleapis.com/google.cloud.audit.AuditLog", audit_bytes.clone())
        .build();
    let decoded = decode(&logging::LOG_ENTRY, &encode(&entry)).expect("decode");

    let Some(Value::Message(any)) = decoded.get_by_name("proto_payload") else {
        panic!("proto_payload is present");
    };
    assert!(std::ptr::eq(any.descriptor(), &wellknown::ANY));
    assert_eq!(any.get_by_name("value"), Some(&Value::Bytes(audit_bytes)));
    assert!(decoded.get_by_name("text_payload").is_none());
}
