// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Fuzz-style regression tests for the dynamic message decoder.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use std::panic::{catch_unwind, AssertUnwindSafe};

use proto_codec::{
    decode, encode, Cardinality, DynamicMessage, EnumDescriptor, FieldDescriptor, FieldType,
    MapKey, MessageDescriptor, OneofDescriptor, ScalarType, Value,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

static STATE: EnumDescriptor = EnumDescriptor {
    full_name: "fuzz.State",
    values: &[(0, "STATE_UNSPECIFIED"), (1, "OPEN"), (2, "CLOSED")],
};

static ATTRS_ENTRY: MessageDescriptor = MessageDescriptor {
    full_name: "fuzz.Record.AttrsEntry",
    fields: &[
        FieldDescriptor {
            number: 1,
            name: "key",
            json_name: "key",
            ty: FieldType::Scalar(ScalarType::String),
            cardinality: Cardinality::Singular,
            oneof: None,
        },
        FieldDescriptor {
            number: 2,
            name: "value",
            json_name: "value",
            ty: FieldType::Scalar(ScalarType::String),
            cardinality: Cardinality::Singular,
            oneof: None,
        },
    ],
    oneofs: &[],
};

static INNER: MessageDescriptor = MessageDescriptor {
    full_name: "fuzz.Inner",
    fields: &[
        FieldDescriptor {
            number: 1,
            name: "id",
            json_name: "id",
            ty: FieldType::Scalar(ScalarType::Fixed64),
            cardinality: Cardinality::Singular,
            oneof: None,
        },
        FieldDescriptor {
            number: 2,
            name: "weight",
            json_name: "weight",
            ty: FieldType::Scalar(ScalarType::Double),
            cardinality: Cardinality::Singular,
            oneof: None,
        },
    ],
    oneofs: &[],
};

static RECORD: MessageDescriptor = MessageDescriptor {
    full_name: "fuzz.Record",
    fields: &[
        FieldDescriptor {
            number: 1,
            name: "name",
            json_name: "name",
            ty: FieldType::Scalar(ScalarType::String),
            cardinality: Cardinality::Singular,
            oneof: None,
        },
        FieldDescriptor {
            number: 2,
            name: "ticks",
            json_name: "ticks",
            ty: FieldType::Scalar(ScalarType::Sint64),
            cardinality: Cardinality::Repeated,
            oneof: None,
        },
        FieldDescriptor {
            number: 3,
            name: "inner",
            json_name: "inner",
            ty: FieldType::Message(&INNER),
            cardinality: Cardinality::Singular,
            oneof: None,
        },
        FieldDescriptor {
            number: 4,
            name: "attrs",
            json_name: "attrs",
            ty: FieldType::Message(&ATTRS_ENTRY),
            cardinality: Cardinality::Map,
            oneof: None,
        },
        FieldDescriptor {
            number: 5,
            name: "state",
            json_name: "state",
            ty: FieldType::Enum(&STATE),
            cardinality: Cardinality::Singular,
            oneof: None,
        },
        FieldDescriptor {
            number: 6,
            name: "text",
            json_name: "text",
            ty: FieldType::Scalar(ScalarType::String),
            cardinality: Cardinality::Singular,
            oneof: Some(0),
        },
        FieldDescriptor {
            number: 7,
            name: "raw",
            json_name: "raw",
            ty: FieldType::Scalar(ScalarType::Bytes),
            cardinality: Cardinality::Singular,
            oneof: Some(0),
        },
    ],
    oneofs: &[OneofDescriptor {
        name: "payload",
        fields: &[6, 7],
    }],
};

fn random_atom<R: Rng>(rng: &mut R, max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| {
            const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

fn random_record<R: Rng>(rng: &mut R) -> DynamicMessage {
    let mut record = DynamicMessage::new(&RECORD);
    if rng.random_bool(0.8) {
        // Implicit-presence singular fields must stay non-default so the
        // stability check is not confounded by legal zero-value omission.
        record
            .set(1, Value::String(format!("n{}", random_atom(rng, 11))))
            .unwrap();
    }
    for _ in 0..rng.random_range(0..5) {
        record.push(2, Value::Int64(rng.random())).unwrap();
    }
    if rng.random_bool(0.5) {
        let mut inner = DynamicMessage::new(&INNER);
        inner.set(1, Value::Uint64(rng.random::<u64>() | 1)).unwrap();
        inner
            .set(2, Value::Double(0.5 + rng.random::<f64>()))
            .unwrap();
        record.set(3, Value::Message(inner)).unwrap();
    }
    for _ in 0..rng.random_range(0..3) {
        record
            .map_insert(
                4,
                MapKey::String(random_atom(rng, 6)),
                Value::String(random_atom(rng, 6)),
            )
            .unwrap();
    }
    if rng.random_bool(0.5) {
        record.set(5, Value::Enum(rng.random_range(1..4))).unwrap();
    }
    match rng.random_range(0..3) {
        0 => record
            .set(6, Value::String(random_atom(rng, 8)))
            .unwrap(),
        1 => {
            let mut raw = vec![0u8; rng.random_range(0..16)];
            rng.fill_bytes(&mut raw);
            record.set(7, Value::Bytes(raw)).unwrap();
        }
        _ => {}
    }
    record
}

fn mutate<R: Rng>(rng: &mut R, frame: &mut Vec<u8>) {
    match rng.random_range(0..4) {
        0 => {
            if !frame.is_empty() {
                let index = rng.random_range(0..frame.len());
                frame[index] ^= rng.random_range(1..=0xff);
            }
        }
        1 => {
            if frame.len() > 1 {
                frame.truncate(rng.random_range(1..frame.len()));
            }
        }
        2 => {
            let tail_len = rng.random_range(1..16);
            let mut tail = vec![0u8; tail_len];
            rng.fill_bytes(&mut tail);
            frame.extend_from_slice(&tail);
        }
        _ => {
            if frame.len() > 2 {
                let index = rng.random_range(0..frame.len() - 1);
                frame.swap(index, index + 1);
            }
        }
    }
}

#[test]
fn fuzz_decode_never_panics_on_mutated_frames() {
    let iterations = std::env::var("PROTO_CODEC_FUZZ_ITERS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(512);
    let mut rng = StdRng::seed_from_u64(0xDEC0DE_u64);

    for _ in 0..iterations {
        let mut frame = encode(&random_record(&mut rng));
        mutate(&mut rng, &mut frame);
        let result = catch_unwind(AssertUnwindSafe(|| decode(&RECORD, &frame)));
        assert!(result.is_ok(), "decoder panicked on mutated frame");
    }
}

#[test]
fn fuzz_round_trip_is_stable() {
    let mut rng = StdRng::seed_from_u64(0x5EED_u64);
    for _ in 0..256 {
        let record = random_record(&mut rng);
        let first = encode(&record);
        let decoded = decode(&RECORD, &first).expect("well-formed frame decodes");
        assert_eq!(decoded, record);
        assert_eq!(encode(&decoded), first, "re-encoding must be byte-identical");
    }
}
