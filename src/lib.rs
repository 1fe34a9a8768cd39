// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Provide the Lantern logging API client surface.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Lantern: a Cloud Logging v2 client built on a hand-written protobuf
//! codec.
//!
//! The workspace splits along the protocol layers: `proto-wire` holds the
//! varint/tag/wire-type primitives, `proto-codec` the schema-driven dynamic
//! message codec, `proto-rpc` the status envelope and unary call machinery.
//! This crate supplies what is specific to the logging API: the descriptor
//! tables for `google.logging.v2` and the packages it references, the
//! service method tables, typed clients, and entry/name construction
//! helpers. Everything below the [`proto_rpc::Transport`] seam (sockets,
//! TLS, credentials, retries) belongs to the caller.

pub mod client;
pub mod entry;
pub mod names;
pub mod schema;
pub mod services;

pub use client::{
    ClientOptions, ConfigClient, EntryPages, LoggingClient, MetricsClient, OperationsClient,
    PollPolicy,
};
pub use entry::{EntryBuilder, Severity};
pub use names::NameError;

pub use proto_codec::{
    decode, encode, from_json, to_json, verify, DecodeError, DynamicMessage, MapKey, Value,
};
pub use proto_rpc::{CallError, CallState, CancelToken, Status, StatusCode, Transport, UnaryCall};
