// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Build well-formed log entries and convert JSON payloads to Struct.
// Author: Lukas Bower

//! Log entry construction helpers: a builder for `LogEntry` messages and
//! the JSON <-> `google.protobuf.Struct` conversion the JSON payload rides
//! on. At most one of the three payload kinds survives; setting a second
//! one replaces the first (the `payload` oneof).

use proto_codec::{DynamicMessage, MapKey, Value};
use serde_json::Map;

use crate::schema::{logging, wellknown};

/// Log severity levels, mirroring `google.logging.type.LogSeverity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Severity {
    /// The entry has no assigned severity.
    Default = 0,
    /// Debug or trace information.
    Debug = 100,
    /// Routine information.
    Info = 200,
    /// Normal but significant events.
    Notice = 300,
    /// Events that might cause problems.
    Warning = 400,
    /// Events likely to cause problems.
    Error = 500,
    /// Severe events causing more significant problems.
    Critical = 600,
    /// A person must take action immediately.
    Alert = 700,
    /// One or more systems are unusable.
    Emergency = 800,
}

impl Severity {
    /// Wire integer of this severity.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Parse a symbolic severity name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "DEFAULT" => Severity::Default,
            "DEBUG" => Severity::Debug,
            "INFO" => Severity::Info,
            "NOTICE" => Severity::Notice,
            "WARNING" => Severity::Warning,
            "ERROR" => Severity::Error,
            "CRITICAL" => Severity::Critical,
            "ALERT" => Severity::Alert,
            "EMERGENCY" => Severity::Emergency,
            _ => return None,
        })
    }
}

/// Builder for `google.logging.v2.LogEntry` messages.
///
/// Every setter writes a field the schema declares, so the underlying
/// inserts cannot fail.
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    entry: DynamicMessage,
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryBuilder {
    /// Start an empty entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entry: DynamicMessage::new(&logging::LOG_ENTRY),
        }
    }

    fn set(mut self, name: &str, value: Value) -> Self {
        self.entry
            .set_by_name(name, value)
            .expect("builder fields exist in the LogEntry schema");
        self
    }

    /// Fully-qualified log name (`projects/p/logs/id`).
    #[must_use]
    pub fn log_name(self, name: &str) -> Self {
        self.set("log_name", Value::String(name.to_owned()))
    }

    /// Entry severity.
    #[must_use]
    pub fn severity(self, severity: Severity) -> Self {
        self.set("severity", Value::Enum(severity.as_i32()))
    }

    /// Text payload (payload oneof member).
    #[must_use]
    pub fn text_payload(self, text: &str) -> Self {
        self.set("text_payload", Value::String(text.to_owned()))
    }

    /// JSON payload (payload oneof member), converted to a
    /// `google.protobuf.Struct`.
    #[must_use]
    pub fn json_payload(self, object: &Map<String, serde_json::Value>) -> Self {
        self.set("json_payload", Value::Message(struct_from_json(object)))
    }

    /// Protobuf payload (payload oneof member) as a `google.protobuf.Any`.
    #[must_use]
    pub fn proto_payload(self, type_url: &str, bytes: Vec<u8>) -> Self {
        let mut any = DynamicMessage::new(&wellknown::ANY);
        any.set_by_name("type_url", Value::String(type_url.to_owned()))
            .expect("type_url is a string field");
        any.set_by_name("value", Value::Bytes(bytes))
            .expect("value is a bytes field");
        self.set("proto_payload", Value::Message(any))
    }

    /// Unique insert identifier for deduplication.
    #[must_use]
    pub fn insert_id(self, id: &str) -> Self {
        self.set("insert_id", Value::String(id.to_owned()))
    }

    /// Entry timestamp.
    #[must_use]
    pub fn timestamp(self, seconds: i64, nanos: i32) -> Self {
        self.set("timestamp", Value::Message(timestamp(seconds, nanos)))
    }

    /// Attach one label; repeated calls accumulate.
    #[must_use]
    pub fn label(mut self, key: &str, value: &str) -> Self {
        self.entry
            .map_insert(
                11,
                MapKey::String(key.to_owned()),
                Value::String(value.to_owned()),
            )
            .expect("labels is a string map");
        self
    }

    /// Monitored resource the entry originates from.
    #[must_use]
    pub fn resource(mut self, resource_type: &str, labels: &[(&str, &str)]) -> Self {
        let mut resource = DynamicMessage::new(&crate::schema::api::MONITORED_RESOURCE);
        resource
            .set_by_name("type", Value::String(resource_type.to_owned()))
            .expect("type is a string field");
        for (key, value) in labels {
            resource
                .map_insert(
                    2,
                    MapKey::String((*key).to_owned()),
                    Value::String((*value).to_owned()),
                )
                .expect("labels is a string map");
        }
        self.set("resource", Value::Message(resource))
    }

    /// Trace resource name for request correlation.
    #[must_use]
    pub fn trace(self, trace: &str) -> Self {
        self.set("trace", Value::String(trace.to_owned()))
    }

    /// Span identifier within the trace.
    #[must_use]
    pub fn span_id(self, span_id: &str) -> Self {
        self.set("span_id", Value::String(span_id.to_owned()))
    }

    /// Whether the trace was sampled.
    #[must_use]
    pub fn trace_sampled(self, sampled: bool) -> Self {
        self.set("trace_sampled", Value::Bool(sampled))
    }

    /// Source location that emitted the entry.
    #[must_use]
    pub fn source_location(self, file: &str, line: i64, function: &str) -> Self {
        let mut location = DynamicMessage::new(&logging::LOG_ENTRY_SOURCE_LOCATION);
        location
            .set_by_name("file", Value::String(file.to_owned()))
            .expect("file is a string field");
        location
            .set_by_name("line", Value::Int64(line))
            .expect("line is an int64 field");
        location
            .set_by_name("function", Value::String(function.to_owned()))
            .expect("function is a string field");
        self.set("source_location", Value::Message(location))
    }

    /// Finish and take the entry message.
    #[must_use]
    pub fn build(self) -> DynamicMessage {
        self.entry
    }
}

/// Build a `google.protobuf.Timestamp` message.
#[must_use]
pub fn timestamp(seconds: i64, nanos: i32) -> DynamicMessage {
    let mut message = DynamicMessage::new(&wellknown::TIMESTAMP);
    message
        .set_by_name("seconds", Value::Int64(seconds))
        .expect("seconds is an int64 field");
    message
        .set_by_name("nanos", Value::Int32(nanos))
        .expect("nanos is an int32 field");
    message
}

/// Convert a JSON object into a `google.protobuf.Struct` message.
#[must_use]
pub fn struct_from_json(object: &Map<String, serde_json::Value>) -> DynamicMessage {
    let mut message = DynamicMessage::new(&wellknown::STRUCT);
    for (key, value) in object {
        message
            .map_insert(1, MapKey::String(key.clone()), Value::Message(value_from_json(value)))
            .expect("fields is a map of Value messages");
    }
    message
}

/// Convert a JSON value into a `google.protobuf.Value` message.
#[must_use]
pub fn value_from_json(json: &serde_json::Value) -> DynamicMessage {
    let mut message = DynamicMessage::new(&wellknown::VALUE);
    match json {
        serde_json::Value::Null => {
            message
                .set_by_name("null_value", Value::Enum(0))
                .expect("null_value is an enum field");
        }
        serde_json::Value::Bool(value) => {
            message
                .set_by_name("bool_value", Value::Bool(*value))
                .expect("bool_value is a bool field");
        }
        serde_json::Value::Number(number) => {
            // Struct carries all numbers as doubles, as the original
            // client's objToStruct does.
            message
                .set_by_name(
                    "number_value",
                    Value::Double(number.as_f64().unwrap_or_default()),
                )
                .expect("number_value is a double field");
        }
        serde_json::Value::String(text) => {
            message
                .set_by_name("string_value", Value::String(text.clone()))
                .expect("string_value is a string field");
        }
        serde_json::Value::Array(items) => {
            let mut list = DynamicMessage::new(&wellknown::LIST_VALUE);
            for item in items {
                list.push(1, Value::Message(value_from_json(item)))
                    .expect("values is a repeated Value field");
            }
            message
                .set_by_name("list_value", Value::Message(list))
                .expect("list_value is a message field");
        }
        serde_json::Value::Object(object) => {
            message
                .set_by_name("struct_value", Value::Message(struct_from_json(object)))
                .expect("struct_value is a message field");
        }
    }
    message
}

/// Convert a `google.protobuf.Struct` message back into a JSON object.
#[must_use]
pub fn struct_to_json(message: &DynamicMessage) -> Map<String, serde_json::Value> {
    let mut object = Map::new();
    if let Some(fields) = message.map(1) {
        for (key, value) in fields {
            let json = match value {
                Value::Message(value_message) => value_to_json(value_message),
                _ => serde_json::Value::Null,
            };
            object.insert(key.to_string(), json);
        }
    }
    object
}

/// Convert a `google.protobuf.Value` message back into a JSON value.
#[must_use]
pub fn value_to_json(message: &DynamicMessage) -> serde_json::Value {
    // The kind oneof has at most one member set; an empty Value reads as
    // null, matching the original structToObj.
    if let Some(Value::Bool(value)) = message.get_by_name("bool_value") {
        return serde_json::Value::Bool(*value);
    }
    if let Some(Value::Double(value)) = message.get_by_name("number_value") {
        return serde_json::Number::from_f64(*value)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null);
    }
    if let Some(Value::String(text)) = message.get_by_name("string_value") {
        return serde_json::Value::String(text.clone());
    }
    if let Some(Value::Message(list)) = message.get_by_name("list_value") {
        return serde_json::Value::Array(
            list.repeated(1)
                .iter()
                .map(|item| match item {
                    Value::Message(value_message) => value_to_json(value_message),
                    _ => serde_json::Value::Null,
                })
                .collect(),
        );
    }
    if let Some(Value::Message(nested)) = message.get_by_name("struct_value") {
        return serde_json::Value::Object(struct_to_json(nested));
    }
    serde_json::Value::Null
}
