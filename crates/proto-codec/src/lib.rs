// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Provide the schema-driven dynamic protobuf message codec.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Schema-driven protobuf message codec.
//!
//! Messages are plain data records ([`DynamicMessage`]) described by
//! `'static` schema tables ([`MessageDescriptor`]); serialisation is a pair
//! of free functions ([`encode`]/[`decode`]) so the data model stays free of
//! behaviour. Unknown fields and unrecognised enum integers are preserved,
//! never rejected: forward compatibility with newer schema revisions is a
//! design requirement, not an accident.

mod codec;
mod descriptor;
mod json;
mod message;

pub use codec::{decode, encode, DecodeError, MAX_RECURSION_DEPTH};
pub use descriptor::{
    Cardinality, EnumDescriptor, FieldDescriptor, FieldType, MessageDescriptor, OneofDescriptor,
    ScalarType,
};
pub use json::{from_json, to_json, verify, ConvertError};
pub use message::{DynamicMessage, FieldValue, MapKey, UnknownField, Value, ValueError};
pub use proto_wire::{WireError, WireType};
