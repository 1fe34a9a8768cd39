// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Decode hex-encoded logging API messages for inspection.
// Author: Lukas Bower

//! `entrydump`: decode a hex-encoded wire frame against a named message
//! schema and print the result as JSON. Useful when poking at captured
//! request/response payloads.

use std::io::Read;
use std::process;

use clap::Parser;
use lantern::schema;
use lantern::{decode, to_json};

#[derive(Parser)]
#[command(
    name = "entrydump",
    about = "Decode a hex-encoded logging API message and print it as JSON"
)]
struct Args {
    /// Fully-qualified message name to decode against.
    #[arg(long, default_value = "google.logging.v2.LogEntry")]
    message: String,

    /// Hex-encoded wire bytes; read from stdin when omitted.
    bytes: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let hex_input = match args.bytes {
        Some(bytes) => bytes,
        None => {
            let mut buffer = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("entrydump: reading stdin: {err}");
                process::exit(1);
            }
            buffer
        }
    };

    let Some(descriptor) = schema::message_by_name(&args.message) else {
        eprintln!("entrydump: unknown message `{}`", args.message);
        process::exit(1);
    };

    let bytes = match hex::decode(hex_input.trim()) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("entrydump: bad hex input: {err}");
            process::exit(1);
        }
    };

    match decode(descriptor, &bytes) {
        Ok(message) => {
            let json = to_json(&message);
            println!(
                "{}",
                serde_json::to_string_pretty(&json).expect("JSON value serialises")
            );
            let unknown = message.unknown_fields().len();
            if unknown > 0 {
                eprintln!("entrydump: {unknown} unknown field(s) preserved but not shown");
            }
        }
        Err(err) => {
            eprintln!("entrydump: decode failed: {err}");
            process::exit(1);
        }
    }
}
