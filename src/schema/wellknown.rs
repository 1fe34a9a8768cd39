// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define schema tables for the google.protobuf well-known types.
// Author: Lukas Bower

//! `google.protobuf` well-known types referenced throughout the API.

use proto_codec::{EnumDescriptor, MessageDescriptor, OneofDescriptor, ScalarType};

use super::{enum_field, map_field, member, message_field, repeated_message, repeated_scalar, scalar};

/// `google.protobuf.Timestamp`.
pub static TIMESTAMP: MessageDescriptor = MessageDescriptor {
    full_name: "google.protobuf.Timestamp",
    fields: &[
        scalar(1, "seconds", "seconds", ScalarType::Int64),
        scalar(2, "nanos", "nanos", ScalarType::Int32),
    ],
    oneofs: &[],
};

/// `google.protobuf.Duration`.
pub static DURATION: MessageDescriptor = MessageDescriptor {
    full_name: "google.protobuf.Duration",
    fields: &[
        scalar(1, "seconds", "seconds", ScalarType::Int64),
        scalar(2, "nanos", "nanos", ScalarType::Int32),
    ],
    oneofs: &[],
};

/// `google.protobuf.Any`.
pub static ANY: MessageDescriptor = MessageDescriptor {
    full_name: "google.protobuf.Any",
    fields: &[
        scalar(1, "type_url", "typeUrl", ScalarType::String),
        scalar(2, "value", "value", ScalarType::Bytes),
    ],
    oneofs: &[],
};

/// `google.protobuf.Empty`.
pub static EMPTY: MessageDescriptor = MessageDescriptor {
    full_name: "google.protobuf.Empty",
    fields: &[],
    oneofs: &[],
};

/// `google.protobuf.FieldMask`.
pub static FIELD_MASK: MessageDescriptor = MessageDescriptor {
    full_name: "google.protobuf.FieldMask",
    fields: &[repeated_scalar(1, "paths", "paths", ScalarType::String)],
    oneofs: &[],
};

/// `google.protobuf.NullValue`.
pub static NULL_VALUE: EnumDescriptor = EnumDescriptor {
    full_name: "google.protobuf.NullValue",
    values: &[(0, "NULL_VALUE")],
};

static STRUCT_FIELDS_ENTRY: MessageDescriptor = MessageDescriptor {
    full_name: "google.protobuf.Struct.FieldsEntry",
    fields: &[
        scalar(1, "key", "key", ScalarType::String),
        message_field(2, "value", "value", &VALUE),
    ],
    oneofs: &[],
};

/// `google.protobuf.Struct`.
pub static STRUCT: MessageDescriptor = MessageDescriptor {
    full_name: "google.protobuf.Struct",
    fields: &[map_field(1, "fields", "fields", &STRUCT_FIELDS_ENTRY)],
    oneofs: &[],
};

/// `google.protobuf.Value`.
pub static VALUE: MessageDescriptor = MessageDescriptor {
    full_name: "google.protobuf.Value",
    fields: &[
        member(enum_field(1, "null_value", "nullValue", &NULL_VALUE), 0),
        member(scalar(2, "number_value", "numberValue", ScalarType::Double), 0),
        member(scalar(3, "string_value", "stringValue", ScalarType::String), 0),
        member(scalar(4, "bool_value", "boolValue", ScalarType::Bool), 0),
        member(message_field(5, "struct_value", "structValue", &STRUCT), 0),
        member(message_field(6, "list_value", "listValue", &LIST_VALUE), 0),
    ],
    oneofs: &[OneofDescriptor {
        name: "kind",
        fields: &[1, 2, 3, 4, 5, 6],
    }],
};

/// `google.protobuf.ListValue`.
pub static LIST_VALUE: MessageDescriptor = MessageDescriptor {
    full_name: "google.protobuf.ListValue",
    fields: &[repeated_message(1, "values", "values", &VALUE)],
    oneofs: &[],
};
