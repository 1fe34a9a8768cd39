// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Benchmark encode/decode throughput for representative entries.
// Author: Lukas Bower

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lantern::schema::logging;
use lantern::{decode, encode, DynamicMessage, EntryBuilder, Severity, Value};
use serde_json::json;

fn representative_request() -> DynamicMessage {
    let mut request = DynamicMessage::new(&logging::WRITE_LOG_ENTRIES_REQUEST);
    request
        .set_by_name(
            "log_name",
            Value::String("projects/bench/logs/app".to_owned()),
        )
        .unwrap();
    for index in 0..16 {
        let payload = json!({
            "message": "request handled",
            "attempt": 1.0,
            "route": "/v1/items",
        });
        let entry = EntryBuilder::new()
            .severity(Severity::Info)
            .json_payload(payload.as_object().unwrap())
            .insert_id(&format!("insert-{index}"))
            .label("env", "bench")
            .timestamp(1_700_000_000 + index, 0)
            .build();
        request.push(4, Value::Message(entry)).unwrap();
    }
    request
}

fn bench_codec(c: &mut Criterion) {
    let request = representative_request();
    let bytes = encode(&request);

    c.bench_function("encode_write_request_16_entries", |b| {
        b.iter(|| encode(black_box(&request)))
    });
    c.bench_function("decode_write_request_16_entries", |b| {
        b.iter(|| decode(&logging::WRITE_LOG_ENTRIES_REQUEST, black_box(&bytes)).unwrap())
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
