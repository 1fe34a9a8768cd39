// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define the schema descriptor tables the dynamic codec is driven by.
// Author: Lukas Bower

//! Schema descriptors: the data-driven tables describing how a message type
//! maps onto the wire. Descriptors are `'static` data, authored (or
//! generated) from the same `.proto` source of truth as the deployed
//! service, so field numbers are immutable identifiers and never invented.

use std::fmt;

use proto_wire::WireType;

/// Semantic scalar types defined by the protobuf language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    /// 32-bit signed, two's-complement varint encoding.
    Int32,
    /// 64-bit signed, two's-complement varint encoding.
    Int64,
    /// 32-bit unsigned varint.
    Uint32,
    /// 64-bit unsigned varint.
    Uint64,
    /// 32-bit signed, zigzag varint encoding.
    Sint32,
    /// 64-bit signed, zigzag varint encoding.
    Sint64,
    /// 32-bit unsigned, fixed four-byte encoding.
    Fixed32,
    /// 64-bit unsigned, fixed eight-byte encoding.
    Fixed64,
    /// 32-bit signed, fixed four-byte encoding.
    Sfixed32,
    /// 64-bit signed, fixed eight-byte encoding.
    Sfixed64,
    /// IEEE 754 single precision.
    Float,
    /// IEEE 754 double precision.
    Double,
    /// Single varint, zero or one.
    Bool,
    /// UTF-8 text, length-delimited.
    String,
    /// Raw bytes, length-delimited.
    Bytes,
}

impl ScalarType {
    /// Wire type this scalar is encoded with when unpacked.
    #[must_use]
    pub fn wire_type(self) -> WireType {
        match self {
            ScalarType::Int32
            | ScalarType::Int64
            | ScalarType::Uint32
            | ScalarType::Uint64
            | ScalarType::Sint32
            | ScalarType::Sint64
            | ScalarType::Bool => WireType::Varint,
            ScalarType::Fixed64 | ScalarType::Sfixed64 | ScalarType::Double => {
                WireType::SixtyFourBit
            }
            ScalarType::Fixed32 | ScalarType::Sfixed32 | ScalarType::Float => {
                WireType::ThirtyTwoBit
            }
            ScalarType::String | ScalarType::Bytes => WireType::LengthDelimited,
        }
    }

    /// Whether repeated occurrences may be packed into one payload.
    #[must_use]
    pub fn is_packable(self) -> bool {
        !matches!(self, ScalarType::String | ScalarType::Bytes)
    }

    /// Lowercase proto-language name, used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::Uint32 => "uint32",
            ScalarType::Uint64 => "uint64",
            ScalarType::Sint32 => "sint32",
            ScalarType::Sint64 => "sint64",
            ScalarType::Fixed32 => "fixed32",
            ScalarType::Fixed64 => "fixed64",
            ScalarType::Sfixed32 => "sfixed32",
            ScalarType::Sfixed64 => "sfixed64",
            ScalarType::Float => "float",
            ScalarType::Double => "double",
            ScalarType::Bool => "bool",
            ScalarType::String => "string",
            ScalarType::Bytes => "bytes",
        }
    }
}

/// Field payload type: a scalar, an enum table, or a nested message table.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    /// One of the scalar types.
    Scalar(ScalarType),
    /// Enum field; decode accepts any integer for forward compatibility.
    Enum(&'static EnumDescriptor),
    /// Embedded message, length-delimited on the wire.
    Message(&'static MessageDescriptor),
}

impl FieldType {
    /// Wire type one unpacked occurrence uses.
    #[must_use]
    pub fn wire_type(&self) -> WireType {
        match self {
            FieldType::Scalar(scalar) => scalar.wire_type(),
            FieldType::Enum(_) => WireType::Varint,
            FieldType::Message(_) => WireType::LengthDelimited,
        }
    }

    /// Whether repeated occurrences may be packed.
    #[must_use]
    pub fn is_packable(&self) -> bool {
        match self {
            FieldType::Scalar(scalar) => scalar.is_packable(),
            FieldType::Enum(_) => true,
            FieldType::Message(_) => false,
        }
    }
}

/// Presence and repetition semantics of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Proto3 implicit presence: zero values are omitted from the wire.
    Singular,
    /// Explicit presence (`optional` in proto3): set-to-default is encoded.
    Optional,
    /// Ordered sequence, accumulated in encounter order.
    Repeated,
    /// Key-unique mapping, carried as repeated two-field entry messages.
    Map,
}

/// One schema entry: everything the codec needs to move a field across the
/// wire. Field numbers are unique within a message and must never be reused
/// for a different semantic type.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Positive wire identifier, unique within the message.
    pub number: u32,
    /// Proto (snake_case) field name.
    pub name: &'static str,
    /// lowerCamelCase name used at the JSON boundary.
    pub json_name: &'static str,
    /// Payload type.
    pub ty: FieldType,
    /// Presence/repetition semantics.
    pub cardinality: Cardinality,
    /// Index into the message's oneof table when this field is a member.
    pub oneof: Option<usize>,
}

impl FieldDescriptor {
    /// For map fields, the synthetic entry descriptor's key and value fields.
    #[must_use]
    pub fn map_entry(&self) -> Option<(&'static FieldDescriptor, &'static FieldDescriptor)> {
        if self.cardinality != Cardinality::Map {
            return None;
        }
        match self.ty {
            FieldType::Message(entry) => Some((&entry.fields[0], &entry.fields[1])),
            _ => None,
        }
    }

    /// Whether explicit presence applies: `optional` fields, message fields,
    /// and oneof members always encode when present, even at default values.
    #[must_use]
    pub fn tracks_presence(&self) -> bool {
        self.cardinality == Cardinality::Optional
            || self.oneof.is_some()
            || matches!(self.ty, FieldType::Message(_))
    }
}

/// Group of fields of which at most one may be set at a time.
#[derive(Debug, Clone, Copy)]
pub struct OneofDescriptor {
    /// Oneof group name.
    pub name: &'static str,
    /// Field numbers of the members.
    pub fields: &'static [u32],
}

/// Ordered set of field descriptors plus the message's oneof groups.
pub struct MessageDescriptor {
    /// Fully-qualified proto name, e.g. `google.logging.v2.LogEntry`.
    pub full_name: &'static str,
    /// Fields in ascending field-number order.
    pub fields: &'static [FieldDescriptor],
    /// Oneof groups referenced by field `oneof` indices.
    pub oneofs: &'static [OneofDescriptor],
}

impl MessageDescriptor {
    /// Look up a field by number.
    #[must_use]
    pub fn field(&self, number: u32) -> Option<&'static FieldDescriptor> {
        let fields: &'static [FieldDescriptor] = self.fields;
        fields
            .binary_search_by_key(&number, |field| field.number)
            .ok()
            .map(|index| &fields[index])
    }

    /// Look up a field by proto name or JSON name.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&'static FieldDescriptor> {
        let fields: &'static [FieldDescriptor] = self.fields;
        fields
            .iter()
            .find(|field| field.name == name || field.json_name == name)
    }

    /// Name without the package prefix.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.full_name
            .rsplit_once('.')
            .map_or(self.full_name, |(_, short)| short)
    }
}

// Descriptor tables reference each other cyclically (Struct <-> Value), so
// Debug prints the name only rather than deriving a recursive walk.
impl fmt::Debug for MessageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageDescriptor({})", self.full_name)
    }
}

/// Integer constants with symbolic names.
pub struct EnumDescriptor {
    /// Fully-qualified proto name.
    pub full_name: &'static str,
    /// `(number, name)` pairs in declaration order.
    pub values: &'static [(i32, &'static str)],
}

impl fmt::Debug for EnumDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumDescriptor({})", self.full_name)
    }
}

impl EnumDescriptor {
    /// Symbolic name for a value, when the schema knows it.
    #[must_use]
    pub fn name_of(&self, number: i32) -> Option<&'static str> {
        self.values
            .iter()
            .find(|(value, _)| *value == number)
            .map(|(_, name)| *name)
    }

    /// Value for a symbolic name.
    #[must_use]
    pub fn number_of(&self, name: &str) -> Option<i32> {
        self.values
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(value, _)| *value)
    }
}
