// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Encode and decode dynamic messages against their schema tables.
// Author: Lukas Bower

//! The message codec: serialisation of a [`DynamicMessage`] to wire bytes
//! and parsing of wire bytes back into one. Both directions are free
//! functions over the plain data model; the codec holds no state and may be
//! driven from any number of threads on independent inputs.

use log::trace;
use proto_wire::{
    put_fixed32, put_fixed64, put_len_prefixed, put_tag, put_varint, zigzag_decode_32,
    zigzag_decode_64, zigzag_encode_32, zigzag_encode_64, WireError, WireReader, WireType,
};

use crate::descriptor::{Cardinality, FieldDescriptor, FieldType, MessageDescriptor, ScalarType};
use crate::message::{DynamicMessage, FieldValue, MapKey, UnknownField, Value};

/// Nesting bound enforced during decode so hostile input cannot exhaust the
/// stack with deeply nested embedded messages.
pub const MAX_RECURSION_DEPTH: usize = 64;

/// Decode-time structural errors. Always fatal to the single decode call;
/// the bytes are unrecoverably invalid and never retried.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Wire-level structural error (varint, truncation, tag).
    #[error(transparent)]
    Wire(#[from] WireError),
    /// A string field carried bytes that are not valid UTF-8.
    #[error("invalid utf8 in string field `{field}`")]
    InvalidUtf8 {
        /// Proto name of the offending field.
        field: &'static str,
    },
    /// Embedded messages nested beyond [`MAX_RECURSION_DEPTH`].
    #[error("message nesting exceeds depth {MAX_RECURSION_DEPTH}")]
    RecursionLimit,
}

/// Serialise a message to wire bytes.
///
/// The wire format permits any field order; fields are emitted in ascending
/// field-number order (then preserved unknown fields in encounter order) so
/// encoding is deterministic and re-encoding a decoded message reproduces
/// identical bytes. Zero-valued proto3 singular scalars are omitted;
/// presence-tracked fields (optional, message-typed, oneof members) encode
/// whenever present.
#[must_use]
pub fn encode(message: &DynamicMessage) -> Vec<u8> {
    let mut buffer = Vec::new();
    encode_into(message, &mut buffer);
    buffer
}

fn encode_into(message: &DynamicMessage, buffer: &mut Vec<u8>) {
    for (number, value) in message.fields() {
        let field = message
            .descriptor()
            .field(number)
            .expect("present field exists in schema");
        match value {
            FieldValue::Single(value) => encode_single(field, value, buffer),
            FieldValue::Repeated(values) => encode_repeated(field, values, buffer),
            FieldValue::Map(entries) => encode_map(field, entries, buffer),
        }
    }
    for unknown in message.unknown_fields() {
        put_tag(buffer, unknown.number, unknown.wire_type);
        buffer.extend_from_slice(&unknown.raw);
    }
}

fn encode_single(field: &FieldDescriptor, value: &Value, buffer: &mut Vec<u8>) {
    if !field.tracks_presence() && value.is_default() {
        return;
    }
    put_tag(buffer, field.number, field.ty.wire_type());
    encode_value(&field.ty, value, buffer);
}

fn encode_repeated(field: &FieldDescriptor, values: &[Value], buffer: &mut Vec<u8>) {
    if values.is_empty() {
        return;
    }
    if field.ty.is_packable() {
        // Proto3 default: numeric repeated fields pack into one payload.
        let mut packed = Vec::new();
        for value in values {
            encode_value(&field.ty, value, &mut packed);
        }
        put_tag(buffer, field.number, WireType::LengthDelimited);
        put_len_prefixed(buffer, &packed);
        return;
    }
    for value in values {
        put_tag(buffer, field.number, field.ty.wire_type());
        encode_value(&field.ty, value, buffer);
    }
}

fn encode_map(
    field: &FieldDescriptor,
    entries: &std::collections::BTreeMap<MapKey, Value>,
    buffer: &mut Vec<u8>,
) {
    let (key_field, value_field) = field.map_entry().expect("map field has entry descriptor");
    for (key, value) in entries {
        // Each entry is an ordinary embedded message with key = 1, value = 2.
        let mut entry = Vec::new();
        let key_value = key.to_value();
        put_tag(&mut entry, key_field.number, key_field.ty.wire_type());
        encode_value(&key_field.ty, &key_value, &mut entry);
        put_tag(&mut entry, value_field.number, value_field.ty.wire_type());
        encode_value(&value_field.ty, value, &mut entry);
        put_tag(buffer, field.number, WireType::LengthDelimited);
        put_len_prefixed(buffer, &entry);
    }
}

fn encode_value(ty: &FieldType, value: &Value, buffer: &mut Vec<u8>) {
    match (ty, value) {
        (FieldType::Scalar(scalar), value) => encode_scalar(*scalar, value, buffer),
        (FieldType::Enum(_), Value::Enum(number)) => {
            // Enums ride the int32 path: negative values sign-extend to ten
            // bytes, never zigzag.
            put_varint(buffer, *number as i64 as u64);
        }
        (FieldType::Message(_), Value::Message(message)) => {
            let mut nested = Vec::new();
            encode_into(message, &mut nested);
            put_len_prefixed(buffer, &nested);
        }
        _ => unreachable!("value kind validated against schema on insertion"),
    }
}

fn encode_scalar(scalar: ScalarType, value: &Value, buffer: &mut Vec<u8>) {
    match (scalar, value) {
        (ScalarType::Int32, Value::Int32(v)) => put_varint(buffer, *v as i64 as u64),
        (ScalarType::Int64, Value::Int64(v)) => put_varint(buffer, *v as u64),
        (ScalarType::Uint32, Value::Uint32(v)) => put_varint(buffer, u64::from(*v)),
        (ScalarType::Uint64, Value::Uint64(v)) => put_varint(buffer, *v),
        (ScalarType::Sint32, Value::Int32(v)) => {
            put_varint(buffer, u64::from(zigzag_encode_32(*v)));
        }
        (ScalarType::Sint64, Value::Int64(v)) => put_varint(buffer, zigzag_encode_64(*v)),
        (ScalarType::Fixed32, Value::Uint32(v)) => put_fixed32(buffer, *v),
        (ScalarType::Fixed64, Value::Uint64(v)) => put_fixed64(buffer, *v),
        (ScalarType::Sfixed32, Value::Int32(v)) => put_fixed32(buffer, *v as u32),
        (ScalarType::Sfixed64, Value::Int64(v)) => put_fixed64(buffer, *v as u64),
        (ScalarType::Float, Value::Float(v)) => put_fixed32(buffer, v.to_bits()),
        (ScalarType::Double, Value::Double(v)) => put_fixed64(buffer, v.to_bits()),
        (ScalarType::Bool, Value::Bool(v)) => put_varint(buffer, u64::from(*v)),
        (ScalarType::String, Value::String(v)) => put_len_prefixed(buffer, v.as_bytes()),
        (ScalarType::Bytes, Value::Bytes(v)) => put_len_prefixed(buffer, v),
        _ => unreachable!("value kind validated against schema on insertion"),
    }
}

/// Parse wire bytes into a [`DynamicMessage`] conforming to `descriptor`.
///
/// Tag/payload pairs are consumed until the buffer is exhausted. The last
/// occurrence wins for singular fields; repeated fields accumulate in
/// encounter order; both packed and unpacked repeated encodings are
/// accepted; unknown field numbers (and known fields arriving with an
/// unexpected wire type) are preserved verbatim for lossless re-encoding.
pub fn decode(
    descriptor: &'static MessageDescriptor,
    bytes: &[u8],
) -> Result<DynamicMessage, DecodeError> {
    decode_at_depth(descriptor, bytes, 0)
}

fn decode_at_depth(
    descriptor: &'static MessageDescriptor,
    bytes: &[u8],
    depth: usize,
) -> Result<DynamicMessage, DecodeError> {
    if depth > MAX_RECURSION_DEPTH {
        return Err(DecodeError::RecursionLimit);
    }
    let mut message = DynamicMessage::new(descriptor);
    let mut reader = WireReader::new(bytes);
    while let Some(tag) = reader.read_tag() {
        let (number, wire) = tag?;
        match descriptor.field(number) {
            Some(field) => decode_field(&mut message, field, wire, &mut reader, depth)?,
            None => {
                let raw = reader.skip(wire)?;
                trace!(
                    "{}: preserving unknown field {} ({} bytes)",
                    descriptor.full_name,
                    number,
                    raw.len()
                );
                message.push_unknown(UnknownField {
                    number,
                    wire_type: wire,
                    raw: raw.to_vec(),
                });
            }
        }
    }
    Ok(message)
}

fn decode_field(
    message: &mut DynamicMessage,
    field: &'static FieldDescriptor,
    wire: WireType,
    reader: &mut WireReader<'_>,
    depth: usize,
) -> Result<(), DecodeError> {
    let natural = field.ty.wire_type();
    match field.cardinality {
        Cardinality::Map => {
            if wire != WireType::LengthDelimited {
                return preserve_mismatched(message, field.number, wire, reader);
            }
            let entry_bytes = reader.len_prefixed().map_err(DecodeError::from)?;
            let (key, value) = decode_map_entry(field, entry_bytes, depth)?;
            message.map_insert_unchecked(field.number, key, value);
        }
        Cardinality::Repeated => {
            if wire == natural {
                let value = decode_value(field, reader, depth)?;
                message.push_unchecked(field.number, value);
            } else if wire == WireType::LengthDelimited && field.ty.is_packable() {
                // Packed encoding: a concatenation of bare scalar payloads.
                let payload = reader.len_prefixed().map_err(DecodeError::from)?;
                let mut packed = WireReader::new(payload);
                while !packed.is_empty() {
                    let value = decode_value(field, &mut packed, depth)?;
                    message.push_unchecked(field.number, value);
                }
            } else {
                return preserve_mismatched(message, field.number, wire, reader);
            }
        }
        Cardinality::Singular | Cardinality::Optional => {
            if wire != natural {
                return preserve_mismatched(message, field.number, wire, reader);
            }
            let value = decode_value(field, reader, depth)?;
            message.insert_single(field, value);
        }
    }
    Ok(())
}

/// A known field number carrying an unexpected wire type is treated like an
/// unknown field: the payload is preserved rather than rejected, matching
/// the forward-compatibility stance of the reference implementations.
fn preserve_mismatched(
    message: &mut DynamicMessage,
    number: u32,
    wire: WireType,
    reader: &mut WireReader<'_>,
) -> Result<(), DecodeError> {
    let raw = reader.skip(wire)?;
    message.push_unknown(UnknownField {
        number,
        wire_type: wire,
        raw: raw.to_vec(),
    });
    Ok(())
}

fn decode_value(
    field: &'static FieldDescriptor,
    reader: &mut WireReader<'_>,
    depth: usize,
) -> Result<Value, DecodeError> {
    match &field.ty {
        FieldType::Scalar(scalar) => decode_scalar(field, *scalar, reader),
        FieldType::Enum(_) => {
            let raw = reader.varint()?;
            Ok(Value::Enum(raw as i32))
        }
        FieldType::Message(descriptor) => {
            let nested = reader.len_prefixed().map_err(DecodeError::from)?;
            Ok(Value::Message(decode_at_depth(*descriptor, nested, depth + 1)?))
        }
    }
}

fn decode_scalar(
    field: &'static FieldDescriptor,
    scalar: ScalarType,
    reader: &mut WireReader<'_>,
) -> Result<Value, DecodeError> {
    Ok(match scalar {
        ScalarType::Int32 => Value::Int32(reader.varint()? as i32),
        ScalarType::Int64 => Value::Int64(reader.varint()? as i64),
        ScalarType::Uint32 => Value::Uint32(reader.varint()? as u32),
        ScalarType::Uint64 => Value::Uint64(reader.varint()?),
        ScalarType::Sint32 => Value::Int32(zigzag_decode_32(reader.varint()? as u32)),
        ScalarType::Sint64 => Value::Int64(zigzag_decode_64(reader.varint()?)),
        ScalarType::Fixed32 => Value::Uint32(reader.fixed32()?),
        ScalarType::Fixed64 => Value::Uint64(reader.fixed64()?),
        ScalarType::Sfixed32 => Value::Int32(reader.fixed32()? as i32),
        ScalarType::Sfixed64 => Value::Int64(reader.fixed64()? as i64),
        ScalarType::Float => Value::Float(f32::from_bits(reader.fixed32()?)),
        ScalarType::Double => Value::Double(f64::from_bits(reader.fixed64()?)),
        ScalarType::Bool => Value::Bool(reader.varint()? != 0),
        ScalarType::String => {
            let bytes = reader.len_prefixed()?;
            let text = std::str::from_utf8(bytes)
                .map_err(|_| DecodeError::InvalidUtf8 { field: field.name })?;
            Value::String(text.to_owned())
        }
        ScalarType::Bytes => Value::Bytes(reader.len_prefixed()?.to_vec()),
    })
}

fn decode_map_entry(
    field: &'static FieldDescriptor,
    bytes: &[u8],
    depth: usize,
) -> Result<(MapKey, Value), DecodeError> {
    let (key_field, value_field) = field.map_entry().expect("map field has entry descriptor");
    let mut key = None;
    let mut value = None;
    let mut reader = WireReader::new(bytes);
    while let Some(tag) = reader.read_tag() {
        let (number, wire) = tag?;
        if number == key_field.number && wire == key_field.ty.wire_type() {
            key = Some(decode_value(key_field, &mut reader, depth)?);
        } else if number == value_field.number && wire == value_field.ty.wire_type() {
            value = Some(decode_value(value_field, &mut reader, depth)?);
        } else {
            // Unknown entry content is dropped; the entry itself survives.
            reader.skip(wire)?;
        }
    }
    // Absent key or value means the peer omitted a default; synthesise it.
    let key = key.unwrap_or_else(|| default_value(&key_field.ty));
    let value = value.unwrap_or_else(|| default_value(&value_field.ty));
    let key = MapKey::from_value(key).expect("map key field is a scalar key type");
    Ok((key, value))
}

fn default_value(ty: &FieldType) -> Value {
    match ty {
        FieldType::Scalar(scalar) => match scalar {
            ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32 => Value::Int32(0),
            ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64 => Value::Int64(0),
            ScalarType::Uint32 | ScalarType::Fixed32 => Value::Uint32(0),
            ScalarType::Uint64 | ScalarType::Fixed64 => Value::Uint64(0),
            ScalarType::Float => Value::Float(0.0),
            ScalarType::Double => Value::Double(0.0),
            ScalarType::Bool => Value::Bool(false),
            ScalarType::String => Value::String(String::new()),
            ScalarType::Bytes => Value::Bytes(Vec::new()),
        },
        FieldType::Enum(_) => Value::Enum(0),
        FieldType::Message(descriptor) => Value::Message(DynamicMessage::new(descriptor)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{
        Cardinality, EnumDescriptor, FieldDescriptor, FieldType, MessageDescriptor,
        OneofDescriptor, ScalarType,
    };

    static MOOD: EnumDescriptor = EnumDescriptor {
        full_name: "test.Mood",
        values: &[(0, "MOOD_UNSPECIFIED"), (1, "CALM"), (500, "STORMY")],
    };

    static POINT: MessageDescriptor = MessageDescriptor {
        full_name: "test.Point",
        fields: &[
            FieldDescriptor {
                number: 1,
                name: "x",
                json_name: "x",
                ty: FieldType::Scalar(ScalarType::Sint64),
                cardinality: Cardinality::Singular,
                oneof: None,
            },
            FieldDescriptor {
                number: 2,
                name: "y",
                json_name: "y",
                ty: FieldType::Scalar(ScalarType::Sint64),
                cardinality: Cardinality::Singular,
                oneof: None,
            },
        ],
        oneofs: &[],
    };

    static LABELS_ENTRY: MessageDescriptor = MessageDescriptor {
        full_name: "test.Track.LabelsEntry",
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

    static TRACK: MessageDescriptor = MessageDescriptor {
        full_name: "test.Track",
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
                name: "samples",
                json_name: "samples",
                ty: FieldType::Scalar(ScalarType::Int64),
                cardinality: Cardinality::Repeated,
                oneof: None,
            },
            FieldDescriptor {
                number: 3,
                name: "origin",
                json_name: "origin",
                ty: FieldType::Message(&POINT),
                cardinality: Cardinality::Singular,
                oneof: None,
            },
            FieldDescriptor {
                number: 4,
                name: "labels",
                json_name: "labels",
                ty: FieldType::Message(&LABELS_ENTRY),
                cardinality: Cardinality::Map,
                oneof: None,
            },
            FieldDescriptor {
                number: 5,
                name: "mood",
                json_name: "mood",
                ty: FieldType::Enum(&MOOD),
                cardinality: Cardinality::Singular,
                oneof: None,
            },
            FieldDescriptor {
                number: 6,
                name: "note",
                json_name: "note",
                ty: FieldType::Scalar(ScalarType::String),
                cardinality: Cardinality::Singular,
                oneof: Some(0),
            },
            FieldDescriptor {
                number: 7,
                name: "attachment",
                json_name: "attachment",
                ty: FieldType::Scalar(ScalarType::Bytes),
                cardinality: Cardinality::Singular,
                oneof: Some(0),
            },
            FieldDescriptor {
                number: 8,
                name: "count",
                json_name: "count",
                ty: FieldType::Scalar(ScalarType::Int32),
                cardinality: Cardinality::Optional,
                oneof: None,
            },
        ],
        oneofs: &[OneofDescriptor {
            name: "extra",
            fields: &[6, 7],
        }],
    };

    fn sample_track() -> DynamicMessage {
        let mut track = DynamicMessage::new(&TRACK);
        track.set(1, Value::String("alpha".into())).unwrap();
        track.push(2, Value::Int64(-3)).unwrap();
        track.push(2, Value::Int64(1024)).unwrap();
        let mut origin = DynamicMessage::new(&POINT);
        origin.set(1, Value::Int64(-7)).unwrap();
        origin.set(2, Value::Int64(9)).unwrap();
        track.set(3, Value::Message(origin)).unwrap();
        track
            .map_insert(4, MapKey::String("env".into()), Value::String("prod".into()))
            .unwrap();
        track.set(5, Value::Enum(500)).unwrap();
        track.set(6, Value::String("remember".into())).unwrap();
        track
    }

    #[test]
    fn round_trip_preserves_fields() {
        let track = sample_track();
        let bytes = encode(&track);
        let decoded = decode(&TRACK, &bytes).expect("decode");
        assert_eq!(decoded, track);
    }

    #[test]
    fn re_encoding_is_byte_identical() {
        let track = sample_track();
        let first = encode(&track);
        let second = encode(&decode(&TRACK, &first).expect("decode"));
        assert_eq!(first, second);
    }

    #[test]
    fn zero_singular_scalar_is_omitted_but_optional_is_kept() {
        let mut track = DynamicMessage::new(&TRACK);
        track.set(1, Value::String(String::new())).unwrap();
        assert!(encode(&track).is_empty());

        track.set(8, Value::Int32(0)).unwrap();
        let bytes = encode(&track);
        assert!(!bytes.is_empty());
        let decoded = decode(&TRACK, &bytes).unwrap();
        assert_eq!(decoded.get(8), Some(&Value::Int32(0)));
        assert!(decoded.get(1).is_none());
    }

    #[test]
    fn singular_last_occurrence_wins() {
        let mut first = DynamicMessage::new(&TRACK);
        first.set(1, Value::String("old".into())).unwrap();
        let mut second = DynamicMessage::new(&TRACK);
        second.set(1, Value::String("new".into())).unwrap();
        let mut bytes = encode(&first);
        bytes.extend_from_slice(&encode(&second));
        let decoded = decode(&TRACK, &bytes).unwrap();
        assert_eq!(decoded.get(1), Some(&Value::String("new".into())));
    }

    #[test]
    fn unpacked_repeated_encoding_is_accepted() {
        // Write samples one tag per element instead of packed.
        let mut bytes = Vec::new();
        for value in [4_i64, 5, 6] {
            put_tag(&mut bytes, 2, WireType::Varint);
            put_varint(&mut bytes, value as u64);
        }
        let decoded = decode(&TRACK, &bytes).unwrap();
        assert_eq!(
            decoded.repeated(2),
            &[Value::Int64(4), Value::Int64(5), Value::Int64(6)]
        );
    }

    #[test]
    fn packed_and_unpacked_mix_accumulates() {
        let mut track = DynamicMessage::new(&TRACK);
        track.push(2, Value::Int64(1)).unwrap();
        let mut bytes = encode(&track);
        put_tag(&mut bytes, 2, WireType::Varint);
        put_varint(&mut bytes, 2);
        let decoded = decode(&TRACK, &bytes).unwrap();
        assert_eq!(decoded.repeated(2), &[Value::Int64(1), Value::Int64(2)]);
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let mut bytes = encode(&sample_track());
        // Append a field number the schema does not know.
        put_tag(&mut bytes, 99, WireType::LengthDelimited);
        put_len_prefixed(&mut bytes, b"future");
        put_tag(&mut bytes, 100, WireType::Varint);
        put_varint(&mut bytes, 42);

        let decoded = decode(&TRACK, &bytes).unwrap();
        assert_eq!(decoded.unknown_fields().len(), 2);
        let re_encoded = encode(&decoded);
        assert_eq!(re_encoded, bytes);
    }

    #[test]
    fn oneof_round_trip_keeps_last_set_member() {
        let mut track = DynamicMessage::new(&TRACK);
        track.set(6, Value::String("text".into())).unwrap();
        track.set(7, Value::Bytes(vec![0xde, 0xad])).unwrap();
        let decoded = decode(&TRACK, &encode(&track)).unwrap();
        assert!(decoded.get(6).is_none());
        assert_eq!(decoded.get(7), Some(&Value::Bytes(vec![0xde, 0xad])));
    }

    #[test]
    fn truncated_embedded_message_fails() {
        let track = sample_track();
        let bytes = encode(&track);
        assert_eq!(
            decode(&TRACK, &bytes[..bytes.len() - 1]),
            Err(DecodeError::Wire(WireError::TruncatedMessage))
        );
    }

    #[test]
    fn negative_int32_uses_ten_byte_encoding() {
        let mut track = DynamicMessage::new(&TRACK);
        track.set(8, Value::Int32(-1)).unwrap();
        let bytes = encode(&track);
        // tag + ten varint bytes for the sign-extended value.
        assert_eq!(bytes.len(), 1 + 10);
        let decoded = decode(&TRACK, &bytes).unwrap();
        assert_eq!(decoded.get(8), Some(&Value::Int32(-1)));
    }

    #[test]
    fn unknown_enum_integer_is_preserved() {
        let mut track = DynamicMessage::new(&TRACK);
        track.set(5, Value::Enum(777)).unwrap();
        let decoded = decode(&TRACK, &encode(&track)).unwrap();
        assert_eq!(decoded.get(5), Some(&Value::Enum(777)));
    }

    #[test]
    fn recursion_limit_is_enforced() {
        assert!(decode_nested(MAX_RECURSION_DEPTH).is_ok());
        assert_eq!(
            decode_nested(MAX_RECURSION_DEPTH + 2),
            Err(DecodeError::RecursionLimit)
        );
    }

    fn decode_nested(levels: usize) -> Result<DynamicMessage, DecodeError> {
        static NEST: MessageDescriptor = MessageDescriptor {
            full_name: "test.Nest",
            fields: &[FieldDescriptor {
                number: 1,
                name: "child",
                json_name: "child",
                ty: FieldType::Message(&NEST),
                cardinality: Cardinality::Singular,
                oneof: None,
            }],
            oneofs: &[],
        };
        let mut bytes = Vec::new();
        for _ in 0..levels {
            let inner = bytes;
            bytes = Vec::new();
            put_tag(&mut bytes, 1, WireType::LengthDelimited);
            put_len_prefixed(&mut bytes, &inner);
        }
        decode(&NEST, &bytes)
    }

    #[test]
    fn map_entries_round_trip_with_defaults() {
        let mut track = DynamicMessage::new(&TRACK);
        track
            .map_insert(4, MapKey::String(String::new()), Value::String(String::new()))
            .unwrap();
        track
            .map_insert(4, MapKey::String("k".into()), Value::String("v".into()))
            .unwrap();
        let decoded = decode(&TRACK, &encode(&track)).unwrap();
        let map = decoded.map(4).expect("map present");
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get(&MapKey::String(String::new())),
            Some(&Value::String(String::new()))
        );
    }

    #[test]
    fn map_entry_with_omitted_value_gets_default() {
        // Entry payload carrying only a key, as an encoder eliding the
        // default value would produce.
        let mut entry = Vec::new();
        put_tag(&mut entry, 1, WireType::LengthDelimited);
        put_len_prefixed(&mut entry, b"solo");
        let mut bytes = Vec::new();
        put_tag(&mut bytes, 4, WireType::LengthDelimited);
        put_len_prefixed(&mut bytes, &entry);

        let decoded = decode(&TRACK, &bytes).unwrap();
        assert_eq!(
            decoded.map(4).and_then(|m| m.get(&MapKey::String("solo".into()))),
            Some(&Value::String(String::new()))
        );
    }

    #[test]
    fn wire_type_mismatch_is_preserved_not_fatal() {
        // Field 1 is a string; deliver it as a varint.
        let mut bytes = Vec::new();
        put_tag(&mut bytes, 1, WireType::Varint);
        put_varint(&mut bytes, 7);
        let decoded = decode(&TRACK, &bytes).unwrap();
        assert!(decoded.get(1).is_none());
        assert_eq!(decoded.unknown_fields().len(), 1);
        assert_eq!(encode(&decoded), bytes);
    }
}
