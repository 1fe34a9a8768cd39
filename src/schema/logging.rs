// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define schema tables for the core logging.proto message shapes.
// Author: Lukas Bower

//! `google.logging.v2` entry and logging-service message shapes.

use proto_codec::{EnumDescriptor, MessageDescriptor, OneofDescriptor, ScalarType};

use super::{
    api, enum_field, logtype, map_field, member, message_field, repeated_message, repeated_scalar,
    rpc, scalar, wellknown,
};

/// `google.logging.v2.LogEntryOperation`.
pub static LOG_ENTRY_OPERATION: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.LogEntryOperation",
    fields: &[
        scalar(1, "id", "id", ScalarType::String),
        scalar(2, "producer", "producer", ScalarType::String),
        scalar(3, "first", "first", ScalarType::Bool),
        scalar(4, "last", "last", ScalarType::Bool),
    ],
    oneofs: &[],
};

/// `google.logging.v2.LogEntrySourceLocation`.
pub static LOG_ENTRY_SOURCE_LOCATION: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.LogEntrySourceLocation",
    fields: &[
        scalar(1, "file", "file", ScalarType::String),
        scalar(2, "line", "line", ScalarType::Int64),
        scalar(3, "function", "function", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.LogSplit`.
pub static LOG_SPLIT: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.LogSplit",
    fields: &[
        scalar(1, "uid", "uid", ScalarType::String),
        scalar(2, "index", "index", ScalarType::Int32),
        scalar(3, "total_splits", "totalSplits", ScalarType::Int32),
    ],
    oneofs: &[],
};

static LOG_ENTRY_LABELS_ENTRY: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.LogEntry.LabelsEntry",
    fields: &[
        scalar(1, "key", "key", ScalarType::String),
        scalar(2, "value", "value", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.LogEntry`. The `payload` oneof carries exactly one of
/// `proto_payload` (2), `text_payload` (3), or `json_payload` (6).
pub static LOG_ENTRY: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.LogEntry",
    fields: &[
        member(
            message_field(2, "proto_payload", "protoPayload", &wellknown::ANY),
            0,
        ),
        member(scalar(3, "text_payload", "textPayload", ScalarType::String), 0),
        scalar(4, "insert_id", "insertId", ScalarType::String),
        member(
            message_field(6, "json_payload", "jsonPayload", &wellknown::STRUCT),
            0,
        ),
        message_field(7, "http_request", "httpRequest", &logtype::HTTP_REQUEST),
        message_field(8, "resource", "resource", &api::MONITORED_RESOURCE),
        message_field(9, "timestamp", "timestamp", &wellknown::TIMESTAMP),
        enum_field(10, "severity", "severity", &logtype::LOG_SEVERITY),
        map_field(11, "labels", "labels", &LOG_ENTRY_LABELS_ENTRY),
        scalar(12, "log_name", "logName", ScalarType::String),
        message_field(15, "operation", "operation", &LOG_ENTRY_OPERATION),
        scalar(22, "trace", "trace", ScalarType::String),
        message_field(
            23,
            "source_location",
            "sourceLocation",
            &LOG_ENTRY_SOURCE_LOCATION,
        ),
        message_field(
            24,
            "receive_timestamp",
            "receiveTimestamp",
            &wellknown::TIMESTAMP,
        ),
        message_field(
            25,
            "metadata",
            "metadata",
            &api::MONITORED_RESOURCE_METADATA,
        ),
        scalar(27, "span_id", "spanId", ScalarType::String),
        scalar(30, "trace_sampled", "traceSampled", ScalarType::Bool),
        message_field(35, "split", "split", &LOG_SPLIT),
    ],
    oneofs: &[OneofDescriptor {
        name: "payload",
        fields: &[2, 3, 6],
    }],
};

/// `google.logging.v2.DeleteLogRequest`.
pub static DELETE_LOG_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.DeleteLogRequest",
    fields: &[scalar(1, "log_name", "logName", ScalarType::String)],
    oneofs: &[],
};

static WRITE_LABELS_ENTRY: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.WriteLogEntriesRequest.LabelsEntry",
    fields: &[
        scalar(1, "key", "key", ScalarType::String),
        scalar(2, "value", "value", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.WriteLogEntriesRequest`.
pub static WRITE_LOG_ENTRIES_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.WriteLogEntriesRequest",
    fields: &[
        scalar(1, "log_name", "logName", ScalarType::String),
        message_field(2, "resource", "resource", &api::MONITORED_RESOURCE),
        map_field(3, "labels", "labels", &WRITE_LABELS_ENTRY),
        repeated_message(4, "entries", "entries", &LOG_ENTRY),
        scalar(5, "partial_success", "partialSuccess", ScalarType::Bool),
        scalar(6, "dry_run", "dryRun", ScalarType::Bool),
    ],
    oneofs: &[],
};

/// `google.logging.v2.WriteLogEntriesResponse`.
pub static WRITE_LOG_ENTRIES_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.WriteLogEntriesResponse",
    fields: &[],
    oneofs: &[],
};

static LOG_ENTRY_ERRORS_ENTRY: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.WriteLogEntriesPartialErrors.LogEntryErrorsEntry",
    fields: &[
        scalar(1, "key", "key", ScalarType::Int32),
        message_field(2, "value", "value", &rpc::STATUS),
    ],
    oneofs: &[],
};

/// `google.logging.v2.WriteLogEntriesPartialErrors`.
pub static WRITE_LOG_ENTRIES_PARTIAL_ERRORS: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.WriteLogEntriesPartialErrors",
    fields: &[map_field(
        1,
        "log_entry_errors",
        "logEntryErrors",
        &LOG_ENTRY_ERRORS_ENTRY,
    )],
    oneofs: &[],
};

/// `google.logging.v2.ListLogEntriesRequest`.
pub static LIST_LOG_ENTRIES_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListLogEntriesRequest",
    fields: &[
        repeated_scalar(1, "project_ids", "projectIds", ScalarType::String),
        scalar(2, "filter", "filter", ScalarType::String),
        scalar(3, "order_by", "orderBy", ScalarType::String),
        scalar(4, "page_size", "pageSize", ScalarType::Int32),
        scalar(5, "page_token", "pageToken", ScalarType::String),
        repeated_scalar(8, "resource_names", "resourceNames", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.ListLogEntriesResponse`.
pub static LIST_LOG_ENTRIES_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListLogEntriesResponse",
    fields: &[
        repeated_message(1, "entries", "entries", &LOG_ENTRY),
        scalar(2, "next_page_token", "nextPageToken", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.ListMonitoredResourceDescriptorsRequest`.
pub static LIST_MONITORED_RESOURCE_DESCRIPTORS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListMonitoredResourceDescriptorsRequest",
    fields: &[
        scalar(1, "page_size", "pageSize", ScalarType::Int32),
        scalar(2, "page_token", "pageToken", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.ListMonitoredResourceDescriptorsResponse`.
pub static LIST_MONITORED_RESOURCE_DESCRIPTORS_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListMonitoredResourceDescriptorsResponse",
    fields: &[
        repeated_message(
            1,
            "resource_descriptors",
            "resourceDescriptors",
            &api::MONITORED_RESOURCE_DESCRIPTOR,
        ),
        scalar(2, "next_page_token", "nextPageToken", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.ListLogsRequest`.
pub static LIST_LOGS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListLogsRequest",
    fields: &[
        scalar(1, "parent", "parent", ScalarType::String),
        scalar(2, "page_size", "pageSize", ScalarType::Int32),
        scalar(3, "page_token", "pageToken", ScalarType::String),
        repeated_scalar(8, "resource_names", "resourceNames", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.ListLogsResponse`.
pub static LIST_LOGS_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListLogsResponse",
    fields: &[
        scalar(2, "next_page_token", "nextPageToken", ScalarType::String),
        repeated_scalar(3, "log_names", "logNames", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.TailLogEntriesRequest`.
pub static TAIL_LOG_ENTRIES_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.TailLogEntriesRequest",
    fields: &[
        repeated_scalar(1, "resource_names", "resourceNames", ScalarType::String),
        scalar(2, "filter", "filter", ScalarType::String),
        message_field(3, "buffer_window", "bufferWindow", &wellknown::DURATION),
    ],
    oneofs: &[],
};

/// `google.logging.v2.TailLogEntriesResponse.SuppressionInfo.Reason`.
pub static SUPPRESSION_REASON: EnumDescriptor = EnumDescriptor {
    full_name: "google.logging.v2.TailLogEntriesResponse.SuppressionInfo.Reason",
    values: &[(0, "REASON_UNSPECIFIED"), (1, "RATE_LIMIT"), (2, "NOT_CONSUMED")],
};

/// `google.logging.v2.TailLogEntriesResponse.SuppressionInfo`.
pub static SUPPRESSION_INFO: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.TailLogEntriesResponse.SuppressionInfo",
    fields: &[
        enum_field(1, "reason", "reason", &SUPPRESSION_REASON),
        scalar(2, "suppressed_count", "suppressedCount", ScalarType::Int32),
    ],
    oneofs: &[],
};

/// `google.logging.v2.TailLogEntriesResponse`.
pub static TAIL_LOG_ENTRIES_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.TailLogEntriesResponse",
    fields: &[
        repeated_message(1, "entries", "entries", &LOG_ENTRY),
        repeated_message(2, "suppression_info", "suppressionInfo", &SUPPRESSION_INFO),
    ],
    oneofs: &[],
};
