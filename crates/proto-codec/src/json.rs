// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Convert dynamic messages to and from plain JSON objects.
// Author: Lukas Bower

//! The plain-object boundary: symmetric conversion between a
//! [`DynamicMessage`] and a `serde_json::Value`, plus schema verification of
//! plain objects without a full conversion.
//!
//! 64-bit integers cross this boundary as decimal strings (in-range JSON
//! numbers are also accepted on input), bytes as base64, enums as symbolic
//! names with unrecognised values kept numeric. Field keys use the
//! lowerCamelCase JSON names; snake_case proto names are accepted on input.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{Map, Number};

use crate::descriptor::{Cardinality, FieldDescriptor, FieldType, MessageDescriptor, ScalarType};
use crate::message::{DynamicMessage, FieldValue, MapKey, Value};

/// Errors raised while converting a plain object into a message.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The object carries a key the schema does not define.
    #[error("{message} has no field named `{name}`")]
    UnknownField {
        /// Message full name.
        message: &'static str,
        /// Offending key.
        name: String,
    },
    /// A value's JSON type does not fit the field's declared type.
    #[error("field `{field}`: expected {expected}")]
    Expected {
        /// Field proto name.
        field: &'static str,
        /// Description of the expected shape.
        expected: &'static str,
    },
    /// A value parsed but is out of range or otherwise malformed.
    #[error("field `{field}`: {detail}")]
    Invalid {
        /// Field proto name.
        field: &'static str,
        /// Failure detail.
        detail: String,
    },
}

/// Convert a message into a plain JSON object.
///
/// Unknown wire fields have no JSON representation and are omitted; they
/// survive only on the binary path.
#[must_use]
pub fn to_json(message: &DynamicMessage) -> serde_json::Value {
    let mut object = Map::new();
    for (number, field_value) in message.fields() {
        let field = message
            .descriptor()
            .field(number)
            .expect("present field exists in schema");
        let json = match field_value {
            FieldValue::Single(value) => value_to_json(&field.ty, value),
            FieldValue::Repeated(values) => serde_json::Value::Array(
                values
                    .iter()
                    .map(|value| value_to_json(&field.ty, value))
                    .collect(),
            ),
            FieldValue::Map(entries) => {
                let value_field = field
                    .map_entry()
                    .map(|(_, value_field)| value_field)
                    .expect("map field has entry descriptor");
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key.to_string(), value_to_json(&value_field.ty, value));
                }
                serde_json::Value::Object(map)
            }
        };
        object.insert(field.json_name.to_owned(), json);
    }
    serde_json::Value::Object(object)
}

fn value_to_json(ty: &FieldType, value: &Value) -> serde_json::Value {
    match (ty, value) {
        (FieldType::Enum(descriptor), Value::Enum(number)) => match descriptor.name_of(*number) {
            Some(name) => serde_json::Value::String(name.to_owned()),
            None => serde_json::Value::Number((*number).into()),
        },
        (_, Value::Int32(v)) => serde_json::Value::Number((*v).into()),
        (_, Value::Uint32(v)) => serde_json::Value::Number((*v).into()),
        (_, Value::Int64(v)) => serde_json::Value::String(v.to_string()),
        (_, Value::Uint64(v)) => serde_json::Value::String(v.to_string()),
        (_, Value::Float(v)) => float_to_json(f64::from(*v)),
        (_, Value::Double(v)) => float_to_json(*v),
        (_, Value::Bool(v)) => serde_json::Value::Bool(*v),
        (_, Value::String(v)) => serde_json::Value::String(v.clone()),
        (_, Value::Bytes(v)) => serde_json::Value::String(BASE64.encode(v)),
        (_, Value::Message(message)) => to_json(message),
        (_, Value::Enum(v)) => serde_json::Value::Number((*v).into()),
    }
}

fn float_to_json(value: f64) -> serde_json::Value {
    match Number::from_f64(value) {
        Some(number) => serde_json::Value::Number(number),
        None if value.is_nan() => serde_json::Value::String("NaN".to_owned()),
        None if value > 0.0 => serde_json::Value::String("Infinity".to_owned()),
        None => serde_json::Value::String("-Infinity".to_owned()),
    }
}

/// Build a message from a plain JSON object.
///
/// `null` values are treated as absent fields. Keys may use either the JSON
/// or the proto name; keys the schema does not define are rejected.
pub fn from_json(
    descriptor: &'static MessageDescriptor,
    json: &serde_json::Value,
) -> Result<DynamicMessage, ConvertError> {
    let object = match json {
        serde_json::Value::Object(object) => object,
        _ => {
            return Err(ConvertError::Invalid {
                field: "",
                detail: format!("{}: object expected", descriptor.full_name),
            })
        }
    };
    let mut message = DynamicMessage::new(descriptor);
    for (key, value) in object {
        if value.is_null() {
            continue;
        }
        let field =
            descriptor
                .field_by_name(key)
                .ok_or_else(|| ConvertError::UnknownField {
                    message: descriptor.full_name,
                    name: key.clone(),
                })?;
        match field.cardinality {
            Cardinality::Repeated => {
                let items = value
                    .as_array()
                    .ok_or(ConvertError::Expected {
                        field: field.name,
                        expected: "array",
                    })?;
                for item in items {
                    let converted = value_from_json(field, &field.ty, item)?;
                    message.push_unchecked(field.number, converted);
                }
            }
            Cardinality::Map => {
                let entries = value.as_object().ok_or(ConvertError::Expected {
                    field: field.name,
                    expected: "object",
                })?;
                let (key_field, value_field) =
                    field.map_entry().expect("map field has entry descriptor");
                for (entry_key, entry_value) in entries {
                    let parsed_key = map_key_from_str(field, key_field, entry_key)?;
                    let converted = value_from_json(field, &value_field.ty, entry_value)?;
                    message.map_insert_unchecked(field.number, parsed_key, converted);
                }
            }
            Cardinality::Singular | Cardinality::Optional => {
                let converted = value_from_json(field, &field.ty, value)?;
                message.insert_single(field, converted);
            }
        }
    }
    Ok(message)
}

fn map_key_from_str(
    field: &'static FieldDescriptor,
    key_field: &'static FieldDescriptor,
    text: &str,
) -> Result<MapKey, ConvertError> {
    let scalar = match key_field.ty {
        FieldType::Scalar(scalar) => scalar,
        _ => ScalarType::String,
    };
    let invalid = |detail: String| ConvertError::Invalid {
        field: field.name,
        detail,
    };
    Ok(match scalar {
        ScalarType::String => MapKey::String(text.to_owned()),
        ScalarType::Bool => match text {
            "true" => MapKey::Bool(true),
            "false" => MapKey::Bool(false),
            other => return Err(invalid(format!("bad bool map key `{other}`"))),
        },
        ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32 => MapKey::Int32(
            text.parse()
                .map_err(|_| invalid(format!("bad int32 map key `{text}`")))?,
        ),
        ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64 => MapKey::Int64(
            text.parse()
                .map_err(|_| invalid(format!("bad int64 map key `{text}`")))?,
        ),
        ScalarType::Uint32 | ScalarType::Fixed32 => MapKey::Uint32(
            text.parse()
                .map_err(|_| invalid(format!("bad uint32 map key `{text}`")))?,
        ),
        ScalarType::Uint64 | ScalarType::Fixed64 => MapKey::Uint64(
            text.parse()
                .map_err(|_| invalid(format!("bad uint64 map key `{text}`")))?,
        ),
        _ => return Err(invalid("unsupported map key type".to_owned())),
    })
}

fn value_from_json(
    field: &'static FieldDescriptor,
    ty: &FieldType,
    json: &serde_json::Value,
) -> Result<Value, ConvertError> {
    let expected = |expected: &'static str| ConvertError::Expected {
        field: field.name,
        expected,
    };
    let invalid = |detail: String| ConvertError::Invalid {
        field: field.name,
        detail,
    };
    Ok(match ty {
        FieldType::Message(descriptor) => Value::Message(from_json(*descriptor, json)?),
        FieldType::Enum(descriptor) => match json {
            serde_json::Value::String(name) => Value::Enum(
                descriptor
                    .number_of(name)
                    .ok_or_else(|| invalid(format!("unknown enum value `{name}`")))?,
            ),
            serde_json::Value::Number(number) => Value::Enum(
                number
                    .as_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .ok_or_else(|| invalid(format!("enum value out of range: {number}")))?,
            ),
            _ => return Err(expected("enum name or number")),
        },
        FieldType::Scalar(scalar) => match scalar {
            ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32 => {
                Value::Int32(json_int(json).and_then(|v| i32::try_from(v).ok()).ok_or_else(
                    || expected("int32"),
                )?)
            }
            ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64 => {
                Value::Int64(json_int(json).ok_or_else(|| expected("int64"))?)
            }
            ScalarType::Uint32 | ScalarType::Fixed32 => {
                Value::Uint32(json_uint(json).and_then(|v| u32::try_from(v).ok()).ok_or_else(
                    || expected("uint32"),
                )?)
            }
            ScalarType::Uint64 | ScalarType::Fixed64 => {
                Value::Uint64(json_uint(json).ok_or_else(|| expected("uint64"))?)
            }
            ScalarType::Float => Value::Float(json_float(json).ok_or_else(|| expected("float"))? as f32),
            ScalarType::Double => Value::Double(json_float(json).ok_or_else(|| expected("double"))?),
            ScalarType::Bool => Value::Bool(json.as_bool().ok_or_else(|| expected("bool"))?),
            ScalarType::String => Value::String(
                json.as_str()
                    .ok_or_else(|| expected("string"))?
                    .to_owned(),
            ),
            ScalarType::Bytes => {
                let text = json.as_str().ok_or_else(|| expected("base64 string"))?;
                Value::Bytes(
                    BASE64
                        .decode(text)
                        .map_err(|err| invalid(format!("bad base64: {err}")))?,
                )
            }
        },
    })
}

fn json_int(json: &serde_json::Value) -> Option<i64> {
    match json {
        serde_json::Value::Number(number) => number.as_i64(),
        serde_json::Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

fn json_uint(json: &serde_json::Value) -> Option<u64> {
    match json {
        serde_json::Value::Number(number) => number.as_u64(),
        serde_json::Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

fn json_float(json: &serde_json::Value) -> Option<f64> {
    match json {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => match text.as_str() {
            "NaN" => Some(f64::NAN),
            "Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            other => other.parse().ok(),
        },
        _ => None,
    }
}

/// Structurally validate a plain object against a schema without decoding.
///
/// Returns a descriptive string for the first violation found, or `None`
/// when the object is valid. Absent optional fields are never violations.
#[must_use]
pub fn verify(json: &serde_json::Value, descriptor: &MessageDescriptor) -> Option<String> {
    let object = match json {
        serde_json::Value::Object(object) => object,
        _ => return Some(format!("{}: object expected", descriptor.full_name)),
    };
    for (key, value) in object {
        if value.is_null() {
            continue;
        }
        let Some(field) = descriptor.field_by_name(key) else {
            return Some(format!(
                "{}: unknown field `{key}`",
                descriptor.full_name
            ));
        };
        let path = || format!("{}.{}", descriptor.short_name(), field.name);
        match field.cardinality {
            Cardinality::Repeated => {
                let Some(items) = value.as_array() else {
                    return Some(format!("{}: array expected", path()));
                };
                for item in items {
                    if let Some(violation) = verify_value(&field.ty, item, &path) {
                        return Some(violation);
                    }
                }
            }
            Cardinality::Map => {
                let Some(entries) = value.as_object() else {
                    return Some(format!("{}: object expected", path()));
                };
                let (key_field, value_field) =
                    field.map_entry().expect("map field has entry descriptor");
                for (entry_key, entry_value) in entries {
                    if map_key_from_str(field, key_field, entry_key).is_err() {
                        return Some(format!("{}: bad map key `{entry_key}`", path()));
                    }
                    if let Some(violation) = verify_value(&value_field.ty, entry_value, &path) {
                        return Some(violation);
                    }
                }
            }
            Cardinality::Singular | Cardinality::Optional => {
                if let Some(violation) = verify_value(&field.ty, value, &path) {
                    return Some(violation);
                }
            }
        }
    }
    // Oneof exclusivity: more than one member present is a violation even
    // though each member individually verifies.
    for oneof in descriptor.oneofs {
        let present = oneof
            .fields
            .iter()
            .filter_map(|number| descriptor.field(*number))
            .filter(|field| {
                object
                    .get(field.json_name)
                    .or_else(|| object.get(field.name))
                    .is_some_and(|value| !value.is_null())
            })
            .count();
        if present > 1 {
            return Some(format!(
                "{}: oneof `{}` has {present} members set",
                descriptor.short_name(),
                oneof.name
            ));
        }
    }
    None
}

fn verify_value(
    ty: &FieldType,
    json: &serde_json::Value,
    path: &dyn Fn() -> String,
) -> Option<String> {
    match ty {
        FieldType::Message(descriptor) => verify(json, descriptor),
        FieldType::Enum(descriptor) => match json {
            serde_json::Value::String(name) => descriptor
                .number_of(name)
                .is_none()
                .then(|| format!("{}: unknown enum value `{name}`", path())),
            serde_json::Value::Number(number) => number
                .as_i64()
                .filter(|v| i32::try_from(*v).is_ok())
                .is_none()
                .then(|| format!("{}: enum number out of range", path())),
            _ => Some(format!("{}: enum name or number expected", path())),
        },
        FieldType::Scalar(scalar) => {
            let ok = match scalar {
                ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32 => {
                    json_int(json).is_some_and(|v| i32::try_from(v).is_ok())
                }
                ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64 => {
                    json_int(json).is_some()
                }
                ScalarType::Uint32 | ScalarType::Fixed32 => {
                    json_uint(json).is_some_and(|v| u32::try_from(v).is_ok())
                }
                ScalarType::Uint64 | ScalarType::Fixed64 => json_uint(json).is_some(),
                ScalarType::Float | ScalarType::Double => json_float(json).is_some(),
                ScalarType::Bool => json.is_boolean(),
                ScalarType::String => json.is_string(),
                ScalarType::Bytes => json
                    .as_str()
                    .is_some_and(|text| BASE64.decode(text).is_ok()),
            };
            (!ok).then(|| format!("{}: {} expected", path(), scalar.name()))
        }
    }
}
