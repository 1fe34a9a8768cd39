// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Fuzz-style regression tests for the wire reader primitives.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use std::panic::{catch_unwind, AssertUnwindSafe};

use proto_wire::{put_varint, WireReader, WireType};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

#[test]
fn fuzz_reader_never_panics() {
    let iterations = std::env::var("PROTO_WIRE_FUZZ_ITERS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(2048);
    let mut rng = StdRng::seed_from_u64(0x1157_F1E1_D5);

    for _ in 0..iterations {
        let len = rng.random_range(0..64);
        let mut buf = vec![0u8; len];
        rng.fill_bytes(&mut buf);

        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut reader = WireReader::new(&buf);
            while let Some(tag) = reader.read_tag() {
                let Ok((_, wire)) = tag else { break };
                if reader.skip(wire).is_err() {
                    break;
                }
            }
        }));
        assert!(result.is_ok(), "reader panicked on random input");
    }
}

#[test]
fn fuzz_varint_round_trips() {
    let mut rng = StdRng::seed_from_u64(0xBA5E_128);
    for _ in 0..4096 {
        // Bias towards values near the 7-bit group boundaries.
        let shift = rng.random_range(0..64);
        let value: u64 = rng.random::<u64>() >> shift;
        let mut buf = Vec::new();
        put_varint(&mut buf, value);
        let mut reader = WireReader::new(&buf);
        assert_eq!(reader.varint(), Ok(value));
        assert!(reader.is_empty());
    }
}

#[test]
fn fuzz_skip_matches_wire_type_lengths() {
    let mut rng = StdRng::seed_from_u64(0x5C1F_u64 ^ 0x9E37);
    for _ in 0..1024 {
        let mut buf = Vec::new();
        let wire = match rng.random_range(0..4) {
            0 => {
                put_varint(&mut buf, rng.random());
                WireType::Varint
            }
            1 => {
                buf.extend_from_slice(&rng.random::<u64>().to_le_bytes());
                WireType::SixtyFourBit
            }
            2 => {
                let len = rng.random_range(0..32);
                let mut payload = vec![0u8; len];
                rng.fill_bytes(&mut payload);
                put_varint(&mut buf, len as u64);
                buf.extend_from_slice(&payload);
                WireType::LengthDelimited
            }
            _ => {
                buf.extend_from_slice(&rng.random::<u32>().to_le_bytes());
                WireType::ThirtyTwoBit
            }
        };
        let mut reader = WireReader::new(&buf);
        let raw = reader.skip(wire).expect("skip well-formed payload");
        assert_eq!(raw, &buf[..]);
        assert!(reader.is_empty());
    }
}
