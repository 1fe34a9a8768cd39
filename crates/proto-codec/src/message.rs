// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define the dynamic message value model the codec operates on.
// Author: Lukas Bower

//! Decoded message model: a mapping from field number to language-native
//! values, with unknown wire fields preserved verbatim so round-trip
//! re-encoding is lossless across schema versions.

use std::collections::BTreeMap;
use std::fmt;

use proto_wire::WireType;

use crate::descriptor::{
    Cardinality, FieldDescriptor, FieldType, MessageDescriptor, ScalarType,
};

/// A single language-native field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `int32`, `sint32`, `sfixed32`.
    Int32(i32),
    /// `int64`, `sint64`, `sfixed64`.
    Int64(i64),
    /// `uint32`, `fixed32`.
    Uint32(u32),
    /// `uint64`, `fixed64`.
    Uint64(u64),
    /// `float`.
    Float(f32),
    /// `double`.
    Double(f64),
    /// `bool`.
    Bool(bool),
    /// `string` (always valid UTF-8).
    String(String),
    /// `bytes`.
    Bytes(Vec<u8>),
    /// Enum value as its raw integer; unrecognised values are legal.
    Enum(i32),
    /// Embedded message.
    Message(DynamicMessage),
}

impl Value {
    /// Short kind name for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int32(_) => "int32",
            Value::Int64(_) => "int64",
            Value::Uint32(_) => "uint32",
            Value::Uint64(_) => "uint64",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Enum(_) => "enum",
            Value::Message(_) => "message",
        }
    }

    /// Whether this value is the proto3 default for its kind.
    #[must_use]
    pub fn is_default(&self) -> bool {
        match self {
            Value::Int32(v) => *v == 0,
            Value::Int64(v) => *v == 0,
            Value::Uint32(v) => *v == 0,
            Value::Uint64(v) => *v == 0,
            Value::Float(v) => *v == 0.0,
            Value::Double(v) => *v == 0.0,
            Value::Bool(v) => !v,
            Value::String(v) => v.is_empty(),
            Value::Bytes(v) => v.is_empty(),
            Value::Enum(v) => *v == 0,
            Value::Message(_) => false,
        }
    }

    fn matches(&self, ty: &FieldType) -> bool {
        match (ty, self) {
            (FieldType::Scalar(scalar), value) => match scalar {
                ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32 => {
                    matches!(value, Value::Int32(_))
                }
                ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64 => {
                    matches!(value, Value::Int64(_))
                }
                ScalarType::Uint32 | ScalarType::Fixed32 => matches!(value, Value::Uint32(_)),
                ScalarType::Uint64 | ScalarType::Fixed64 => matches!(value, Value::Uint64(_)),
                ScalarType::Float => matches!(value, Value::Float(_)),
                ScalarType::Double => matches!(value, Value::Double(_)),
                ScalarType::Bool => matches!(value, Value::Bool(_)),
                ScalarType::String => matches!(value, Value::String(_)),
                ScalarType::Bytes => matches!(value, Value::Bytes(_)),
            },
            (FieldType::Enum(_), Value::Enum(_)) => true,
            (FieldType::Message(descriptor), Value::Message(message)) => {
                std::ptr::eq(*descriptor, message.descriptor())
            }
            _ => false,
        }
    }
}

/// Map keys permitted by the protobuf language, ordered so map iteration
/// (and therefore encoding) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum MapKey {
    /// `bool` key.
    Bool(bool),
    /// `int32`, `sint32`, `sfixed32` key.
    Int32(i32),
    /// `int64`, `sint64`, `sfixed64` key.
    Int64(i64),
    /// `uint32`, `fixed32` key.
    Uint32(u32),
    /// `uint64`, `fixed64` key.
    Uint64(u64),
    /// `string` key.
    String(String),
}

impl MapKey {
    pub(crate) fn matches(&self, scalar: ScalarType) -> bool {
        match scalar {
            ScalarType::Bool => matches!(self, MapKey::Bool(_)),
            ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32 => {
                matches!(self, MapKey::Int32(_))
            }
            ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64 => {
                matches!(self, MapKey::Int64(_))
            }
            ScalarType::Uint32 | ScalarType::Fixed32 => matches!(self, MapKey::Uint32(_)),
            ScalarType::Uint64 | ScalarType::Fixed64 => matches!(self, MapKey::Uint64(_)),
            ScalarType::String => matches!(self, MapKey::String(_)),
            _ => false,
        }
    }

    pub(crate) fn to_value(&self) -> Value {
        match self {
            MapKey::Bool(v) => Value::Bool(*v),
            MapKey::Int32(v) => Value::Int32(*v),
            MapKey::Int64(v) => Value::Int64(*v),
            MapKey::Uint32(v) => Value::Uint32(*v),
            MapKey::Uint64(v) => Value::Uint64(*v),
            MapKey::String(v) => Value::String(v.clone()),
        }
    }

    pub(crate) fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(MapKey::Bool(v)),
            Value::Int32(v) => Some(MapKey::Int32(v)),
            Value::Int64(v) => Some(MapKey::Int64(v)),
            Value::Uint32(v) => Some(MapKey::Uint32(v)),
            Value::Uint64(v) => Some(MapKey::Uint64(v)),
            Value::String(v) => Some(MapKey::String(v)),
            _ => None,
        }
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Bool(v) => write!(f, "{v}"),
            MapKey::Int32(v) => write!(f, "{v}"),
            MapKey::Int64(v) => write!(f, "{v}"),
            MapKey::Uint32(v) => write!(f, "{v}"),
            MapKey::Uint64(v) => write!(f, "{v}"),
            MapKey::String(v) => f.write_str(v),
        }
    }
}

/// Stored shape of one present field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Singular or optional field.
    Single(Value),
    /// Repeated field in encounter order.
    Repeated(Vec<Value>),
    /// Map field keyed by its protobuf map key.
    Map(BTreeMap<MapKey, Value>),
}

/// A wire field whose number the current schema does not know. The payload
/// bytes are kept exactly as read so re-encoding reproduces them unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField {
    /// Field number seen on the wire.
    pub number: u32,
    /// Wire type the tag announced.
    pub wire_type: WireType,
    /// Raw payload bytes, length prefix included for delimited payloads.
    pub raw: Vec<u8>,
}

/// Errors raised when mutating a message in a way its schema forbids.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The field number does not exist in the schema.
    #[error("{message} has no field {number}")]
    NoSuchField {
        /// Message full name.
        message: &'static str,
        /// Offending field number.
        number: u32,
    },
    /// The field name does not exist in the schema.
    #[error("{message} has no field named `{name}`")]
    NoSuchName {
        /// Message full name.
        message: &'static str,
        /// Offending field name.
        name: String,
    },
    /// The supplied value kind does not match the field's declared type.
    #[error("field `{field}` expects {expected}, got {got}")]
    TypeMismatch {
        /// Field proto name.
        field: &'static str,
        /// Expected kind.
        expected: &'static str,
        /// Supplied kind.
        got: &'static str,
    },
    /// A singular accessor was used on a repeated/map field or vice versa.
    #[error("field `{field}` has {cardinality:?} cardinality")]
    CardinalityMismatch {
        /// Field proto name.
        field: &'static str,
        /// Declared cardinality.
        cardinality: Cardinality,
    },
}

/// A decoded (or under-construction) message: field number to value, plus
/// preserved unknown fields. Created fresh per decode call or explicit
/// construction; no concurrent-mutation guard is implied.
#[derive(Debug, Clone)]
pub struct DynamicMessage {
    descriptor: &'static MessageDescriptor,
    fields: BTreeMap<u32, FieldValue>,
    unknown: Vec<UnknownField>,
}

impl DynamicMessage {
    /// Create an empty message conforming to `descriptor`.
    #[must_use]
    pub fn new(descriptor: &'static MessageDescriptor) -> Self {
        Self {
            descriptor,
            fields: BTreeMap::new(),
            unknown: Vec::new(),
        }
    }

    /// Schema this message conforms to.
    #[must_use]
    pub fn descriptor(&self) -> &'static MessageDescriptor {
        self.descriptor
    }

    /// Present fields in ascending field-number order.
    pub fn fields(&self) -> impl Iterator<Item = (u32, &FieldValue)> {
        self.fields.iter().map(|(number, value)| (*number, value))
    }

    /// Unknown wire fields in encounter order.
    #[must_use]
    pub fn unknown_fields(&self) -> &[UnknownField] {
        &self.unknown
    }

    /// Whether the field is present.
    #[must_use]
    pub fn has(&self, number: u32) -> bool {
        self.fields.contains_key(&number)
    }

    /// Set a singular or optional field. Setting a oneof member clears any
    /// previously set sibling, so the last-set member is the one that
    /// survives encoding.
    pub fn set(&mut self, number: u32, value: Value) -> Result<(), ValueError> {
        let field = self.lookup(number)?;
        if !matches!(
            field.cardinality,
            Cardinality::Singular | Cardinality::Optional
        ) {
            return Err(ValueError::CardinalityMismatch {
                field: field.name,
                cardinality: field.cardinality,
            });
        }
        if !value.matches(&field.ty) {
            return Err(ValueError::TypeMismatch {
                field: field.name,
                expected: expected_kind(&field.ty),
                got: value.kind(),
            });
        }
        self.insert_single(field, value);
        Ok(())
    }

    /// Set a singular field by proto or JSON name.
    pub fn set_by_name(&mut self, name: &str, value: Value) -> Result<(), ValueError> {
        let field = self
            .descriptor
            .field_by_name(name)
            .ok_or_else(|| ValueError::NoSuchName {
                message: self.descriptor.full_name,
                name: name.to_owned(),
            })?;
        self.set(field.number, value)
    }

    /// Append to a repeated field.
    pub fn push(&mut self, number: u32, value: Value) -> Result<(), ValueError> {
        let field = self.lookup(number)?;
        if field.cardinality != Cardinality::Repeated {
            return Err(ValueError::CardinalityMismatch {
                field: field.name,
                cardinality: field.cardinality,
            });
        }
        if !value.matches(&field.ty) {
            return Err(ValueError::TypeMismatch {
                field: field.name,
                expected: expected_kind(&field.ty),
                got: value.kind(),
            });
        }
        self.push_unchecked(number, value);
        Ok(())
    }

    /// Insert one entry into a map field; an existing entry for the key is
    /// replaced (last one wins, mirroring wire merge semantics).
    pub fn map_insert(&mut self, number: u32, key: MapKey, value: Value) -> Result<(), ValueError> {
        let field = self.lookup(number)?;
        let (key_field, value_field) =
            field
                .map_entry()
                .ok_or(ValueError::CardinalityMismatch {
                    field: field.name,
                    cardinality: field.cardinality,
                })?;
        let key_scalar = match key_field.ty {
            FieldType::Scalar(scalar) => scalar,
            // Map keys are scalars by construction of the schema tables.
            _ => ScalarType::String,
        };
        if !key.matches(key_scalar) {
            return Err(ValueError::TypeMismatch {
                field: field.name,
                expected: key_scalar.name(),
                got: "incompatible map key",
            });
        }
        if !value.matches(&value_field.ty) {
            return Err(ValueError::TypeMismatch {
                field: field.name,
                expected: expected_kind(&value_field.ty),
                got: value.kind(),
            });
        }
        self.map_insert_unchecked(number, key, value);
        Ok(())
    }

    /// Singular value of a field, when present.
    #[must_use]
    pub fn get(&self, number: u32) -> Option<&Value> {
        match self.fields.get(&number) {
            Some(FieldValue::Single(value)) => Some(value),
            _ => None,
        }
    }

    /// Singular value looked up by proto or JSON name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Value> {
        self.descriptor
            .field_by_name(name)
            .and_then(|field| self.get(field.number))
    }

    /// Elements of a repeated field (empty when absent).
    #[must_use]
    pub fn repeated(&self, number: u32) -> &[Value] {
        match self.fields.get(&number) {
            Some(FieldValue::Repeated(values)) => values,
            _ => &[],
        }
    }

    /// Entries of a map field, when present.
    #[must_use]
    pub fn map(&self, number: u32) -> Option<&BTreeMap<MapKey, Value>> {
        match self.fields.get(&number) {
            Some(FieldValue::Map(entries)) => Some(entries),
            _ => None,
        }
    }

    /// Remove a field, returning its previous value.
    pub fn clear(&mut self, number: u32) -> Option<FieldValue> {
        self.fields.remove(&number)
    }

    /// Field number of the currently set member of a oneof, if any.
    #[must_use]
    pub fn oneof_case(&self, oneof_index: usize) -> Option<u32> {
        let oneof = self.descriptor.oneofs.get(oneof_index)?;
        oneof
            .fields
            .iter()
            .copied()
            .find(|number| self.fields.contains_key(number))
    }

    fn lookup(&self, number: u32) -> Result<&'static FieldDescriptor, ValueError> {
        self.descriptor
            .field(number)
            .ok_or(ValueError::NoSuchField {
                message: self.descriptor.full_name,
                number,
            })
    }

    /// Insert without type validation (decode path: wire values are already
    /// shaped by the descriptor). Still enforces oneof exclusivity.
    pub(crate) fn insert_single(&mut self, field: &'static FieldDescriptor, value: Value) {
        if let Some(index) = field.oneof {
            if let Some(oneof) = self.descriptor.oneofs.get(index) {
                for sibling in oneof.fields {
                    if *sibling != field.number {
                        self.fields.remove(sibling);
                    }
                }
            }
        }
        self.fields.insert(field.number, FieldValue::Single(value));
    }

    pub(crate) fn push_unchecked(&mut self, number: u32, value: Value) {
        match self
            .fields
            .entry(number)
            .or_insert_with(|| FieldValue::Repeated(Vec::new()))
        {
            FieldValue::Repeated(values) => values.push(value),
            other => *other = FieldValue::Repeated(vec![value]),
        }
    }

    pub(crate) fn map_insert_unchecked(&mut self, number: u32, key: MapKey, value: Value) {
        match self
            .fields
            .entry(number)
            .or_insert_with(|| FieldValue::Map(BTreeMap::new()))
        {
            FieldValue::Map(entries) => {
                entries.insert(key, value);
            }
            other => {
                let mut entries = BTreeMap::new();
                entries.insert(key, value);
                *other = FieldValue::Map(entries);
            }
        }
    }

    pub(crate) fn push_unknown(&mut self, unknown: UnknownField) {
        self.unknown.push(unknown);
    }
}

impl PartialEq for DynamicMessage {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.descriptor, other.descriptor)
            && self.fields == other.fields
            && self.unknown == other.unknown
    }
}

fn expected_kind(ty: &FieldType) -> &'static str {
    match ty {
        FieldType::Scalar(scalar) => scalar.name(),
        FieldType::Enum(desc) => desc.full_name,
        FieldType::Message(desc) => desc.full_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Cardinality, FieldDescriptor, FieldType, OneofDescriptor, ScalarType};

    static ENVELOPE: MessageDescriptor = MessageDescriptor {
        full_name: "test.Envelope",
        fields: &[
            FieldDescriptor {
                number: 1,
                name: "id",
                json_name: "id",
                ty: FieldType::Scalar(ScalarType::Uint32),
                cardinality: Cardinality::Singular,
                oneof: None,
            },
            FieldDescriptor {
                number: 2,
                name: "text",
                json_name: "text",
                ty: FieldType::Scalar(ScalarType::String),
                cardinality: Cardinality::Singular,
                oneof: Some(0),
            },
            FieldDescriptor {
                number: 3,
                name: "blob",
                json_name: "blob",
                ty: FieldType::Scalar(ScalarType::Bytes),
                cardinality: Cardinality::Singular,
                oneof: Some(0),
            },
            FieldDescriptor {
                number: 4,
                name: "tags",
                json_name: "tags",
                ty: FieldType::Scalar(ScalarType::String),
                cardinality: Cardinality::Repeated,
                oneof: None,
            },
        ],
        oneofs: &[OneofDescriptor {
            name: "payload",
            fields: &[2, 3],
        }],
    };

    #[test]
    fn set_rejects_wrong_kind() {
        let mut message = DynamicMessage::new(&ENVELOPE);
        let err = message.set(1, Value::String("nope".into())).unwrap_err();
        assert_eq!(
            err,
            ValueError::TypeMismatch {
                field: "id",
                expected: "uint32",
                got: "string",
            }
        );
    }

    #[test]
    fn set_rejects_unknown_field() {
        let mut message = DynamicMessage::new(&ENVELOPE);
        assert_eq!(
            message.set(9, Value::Uint32(1)),
            Err(ValueError::NoSuchField {
                message: "test.Envelope",
                number: 9,
            })
        );
    }

    #[test]
    fn oneof_set_clears_sibling() {
        let mut message = DynamicMessage::new(&ENVELOPE);
        message.set(2, Value::String("hello".into())).unwrap();
        message.set(3, Value::Bytes(vec![1, 2])).unwrap();
        assert!(!message.has(2));
        assert!(message.has(3));
        assert_eq!(message.oneof_case(0), Some(3));
    }

    #[test]
    fn push_accumulates_in_order() {
        let mut message = DynamicMessage::new(&ENVELOPE);
        message.push(4, Value::String("a".into())).unwrap();
        message.push(4, Value::String("b".into())).unwrap();
        assert_eq!(
            message.repeated(4),
            &[Value::String("a".into()), Value::String("b".into())]
        );
    }

    #[test]
    fn push_rejects_singular_field() {
        let mut message = DynamicMessage::new(&ENVELOPE);
        assert_eq!(
            message.push(1, Value::Uint32(1)),
            Err(ValueError::CardinalityMismatch {
                field: "id",
                cardinality: Cardinality::Singular,
            })
        );
    }
}
