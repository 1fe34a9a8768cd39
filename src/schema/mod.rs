// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Provide the hand-authored schema tables for the deployed logging API.
// Author: Lukas Bower

//! Static descriptor tables for the `google.logging.v2` API surface and the
//! proto packages it references. These tables are the hand-authored
//! equivalent of generated code: pure data, byte-for-byte aligned with the
//! deployed `.proto` schema. Field numbers are never invented here.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use proto_codec::{
    Cardinality, EnumDescriptor, FieldDescriptor, FieldType, MessageDescriptor, ScalarType,
};

pub mod api;
pub mod config;
pub mod logging;
pub mod logtype;
pub mod longrunning;
pub mod metrics;
pub mod rpc;
pub mod wellknown;

/// Singular scalar field.
pub(crate) const fn scalar(
    number: u32,
    name: &'static str,
    json_name: &'static str,
    ty: ScalarType,
) -> FieldDescriptor {
    FieldDescriptor {
        number,
        name,
        json_name,
        ty: FieldType::Scalar(ty),
        cardinality: Cardinality::Singular,
        oneof: None,
    }
}

/// Repeated scalar field.
pub(crate) const fn repeated_scalar(
    number: u32,
    name: &'static str,
    json_name: &'static str,
    ty: ScalarType,
) -> FieldDescriptor {
    FieldDescriptor {
        number,
        name,
        json_name,
        ty: FieldType::Scalar(ty),
        cardinality: Cardinality::Repeated,
        oneof: None,
    }
}

/// Singular enum field.
pub(crate) const fn enum_field(
    number: u32,
    name: &'static str,
    json_name: &'static str,
    descriptor: &'static EnumDescriptor,
) -> FieldDescriptor {
    FieldDescriptor {
        number,
        name,
        json_name,
        ty: FieldType::Enum(descriptor),
        cardinality: Cardinality::Singular,
        oneof: None,
    }
}

/// Singular embedded-message field.
pub(crate) const fn message_field(
    number: u32,
    name: &'static str,
    json_name: &'static str,
    descriptor: &'static MessageDescriptor,
) -> FieldDescriptor {
    FieldDescriptor {
        number,
        name,
        json_name,
        ty: FieldType::Message(descriptor),
        cardinality: Cardinality::Singular,
        oneof: None,
    }
}

/// Repeated embedded-message field.
pub(crate) const fn repeated_message(
    number: u32,
    name: &'static str,
    json_name: &'static str,
    descriptor: &'static MessageDescriptor,
) -> FieldDescriptor {
    FieldDescriptor {
        number,
        name,
        json_name,
        ty: FieldType::Message(descriptor),
        cardinality: Cardinality::Repeated,
        oneof: None,
    }
}

/// Map field; `entry` is the synthetic two-field entry descriptor.
pub(crate) const fn map_field(
    number: u32,
    name: &'static str,
    json_name: &'static str,
    entry: &'static MessageDescriptor,
) -> FieldDescriptor {
    FieldDescriptor {
        number,
        name,
        json_name,
        ty: FieldType::Message(entry),
        cardinality: Cardinality::Map,
        oneof: None,
    }
}

/// Mark a field as a member of the oneof at `index`.
pub(crate) const fn member(field: FieldDescriptor, index: usize) -> FieldDescriptor {
    FieldDescriptor {
        number: field.number,
        name: field.name,
        json_name: field.json_name,
        ty: field.ty,
        cardinality: field.cardinality,
        oneof: Some(index),
    }
}

/// Every message descriptor in the API surface, keyed by full proto name.
pub static MESSAGES: Lazy<HashMap<&'static str, &'static MessageDescriptor>> = Lazy::new(|| {
    let all: &[&'static MessageDescriptor] = &[
        // google.protobuf
        &wellknown::TIMESTAMP,
        &wellknown::DURATION,
        &wellknown::ANY,
        &wellknown::EMPTY,
        &wellknown::FIELD_MASK,
        &wellknown::STRUCT,
        &wellknown::VALUE,
        &wellknown::LIST_VALUE,
        // google.rpc
        &rpc::STATUS,
        // google.api
        &api::MONITORED_RESOURCE,
        &api::MONITORED_RESOURCE_METADATA,
        &api::MONITORED_RESOURCE_DESCRIPTOR,
        &api::LABEL_DESCRIPTOR,
        &api::METRIC_DESCRIPTOR,
        &api::METRIC_DESCRIPTOR_METADATA,
        &api::BUCKET_OPTIONS,
        &api::LINEAR_BUCKETS,
        &api::EXPONENTIAL_BUCKETS,
        &api::EXPLICIT_BUCKETS,
        // google.logging.type
        &logtype::HTTP_REQUEST,
        // google.logging.v2 (logging.proto)
        &logging::LOG_ENTRY,
        &logging::LOG_ENTRY_OPERATION,
        &logging::LOG_ENTRY_SOURCE_LOCATION,
        &logging::LOG_SPLIT,
        &logging::DELETE_LOG_REQUEST,
        &logging::WRITE_LOG_ENTRIES_REQUEST,
        &logging::WRITE_LOG_ENTRIES_RESPONSE,
        &logging::WRITE_LOG_ENTRIES_PARTIAL_ERRORS,
        &logging::LIST_LOG_ENTRIES_REQUEST,
        &logging::LIST_LOG_ENTRIES_RESPONSE,
        &logging::LIST_MONITORED_RESOURCE_DESCRIPTORS_REQUEST,
        &logging::LIST_MONITORED_RESOURCE_DESCRIPTORS_RESPONSE,
        &logging::LIST_LOGS_REQUEST,
        &logging::LIST_LOGS_RESPONSE,
        &logging::TAIL_LOG_ENTRIES_REQUEST,
        &logging::TAIL_LOG_ENTRIES_RESPONSE,
        &logging::SUPPRESSION_INFO,
        // google.logging.v2 (logging_config.proto)
        &config::LOG_BUCKET,
        &config::LOG_VIEW,
        &config::LOG_SINK,
        &config::BIG_QUERY_OPTIONS,
        &config::LOG_EXCLUSION,
        &config::INDEX_CONFIG,
        &config::CMEK_SETTINGS,
        &config::SETTINGS,
        &config::LIST_BUCKETS_REQUEST,
        &config::LIST_BUCKETS_RESPONSE,
        &config::CREATE_BUCKET_REQUEST,
        &config::UPDATE_BUCKET_REQUEST,
        &config::GET_BUCKET_REQUEST,
        &config::DELETE_BUCKET_REQUEST,
        &config::UNDELETE_BUCKET_REQUEST,
        &config::LIST_VIEWS_REQUEST,
        &config::LIST_VIEWS_RESPONSE,
        &config::CREATE_VIEW_REQUEST,
        &config::UPDATE_VIEW_REQUEST,
        &config::GET_VIEW_REQUEST,
        &config::DELETE_VIEW_REQUEST,
        &config::LIST_SINKS_REQUEST,
        &config::LIST_SINKS_RESPONSE,
        &config::GET_SINK_REQUEST,
        &config::CREATE_SINK_REQUEST,
        &config::UPDATE_SINK_REQUEST,
        &config::DELETE_SINK_REQUEST,
        &config::LIST_EXCLUSIONS_REQUEST,
        &config::LIST_EXCLUSIONS_RESPONSE,
        &config::GET_EXCLUSION_REQUEST,
        &config::CREATE_EXCLUSION_REQUEST,
        &config::UPDATE_EXCLUSION_REQUEST,
        &config::DELETE_EXCLUSION_REQUEST,
        &config::GET_CMEK_SETTINGS_REQUEST,
        &config::UPDATE_CMEK_SETTINGS_REQUEST,
        &config::GET_SETTINGS_REQUEST,
        &config::UPDATE_SETTINGS_REQUEST,
        &config::COPY_LOG_ENTRIES_REQUEST,
        &config::COPY_LOG_ENTRIES_METADATA,
        &config::COPY_LOG_ENTRIES_RESPONSE,
        // google.logging.v2 (logging_metrics.proto)
        &metrics::LOG_METRIC,
        &metrics::LIST_LOG_METRICS_REQUEST,
        &metrics::LIST_LOG_METRICS_RESPONSE,
        &metrics::GET_LOG_METRIC_REQUEST,
        &metrics::CREATE_LOG_METRIC_REQUEST,
        &metrics::UPDATE_LOG_METRIC_REQUEST,
        &metrics::DELETE_LOG_METRIC_REQUEST,
        // google.longrunning
        &longrunning::OPERATION,
        &longrunning::GET_OPERATION_REQUEST,
        &longrunning::LIST_OPERATIONS_REQUEST,
        &longrunning::LIST_OPERATIONS_RESPONSE,
        &longrunning::CANCEL_OPERATION_REQUEST,
        &longrunning::DELETE_OPERATION_REQUEST,
        &longrunning::WAIT_OPERATION_REQUEST,
    ];
    all.iter()
        .map(|descriptor| (descriptor.full_name, *descriptor))
        .collect()
});

/// Look up a message descriptor by its fully-qualified proto name.
#[must_use]
pub fn message_by_name(name: &str) -> Option<&'static MessageDescriptor> {
    MESSAGES.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_core_messages() {
        assert!(message_by_name("google.logging.v2.LogEntry").is_some());
        assert!(message_by_name("google.protobuf.Timestamp").is_some());
        assert!(message_by_name("google.rpc.Status").is_some());
        assert!(message_by_name("google.logging.v2.NoSuchMessage").is_none());
    }

    #[test]
    fn every_field_table_is_sorted_by_number() {
        for descriptor in MESSAGES.values() {
            let mut previous = 0;
            for field in descriptor.fields {
                assert!(
                    field.number > previous,
                    "{}: field {} out of order",
                    descriptor.full_name,
                    field.number
                );
                previous = field.number;
            }
        }
    }

    #[test]
    fn oneof_members_reference_real_fields() {
        for descriptor in MESSAGES.values() {
            for oneof in descriptor.oneofs {
                for number in oneof.fields {
                    let field = descriptor
                        .field(*number)
                        .unwrap_or_else(|| panic!("{}: missing {number}", descriptor.full_name));
                    assert!(field.oneof.is_some());
                }
            }
        }
    }
}
