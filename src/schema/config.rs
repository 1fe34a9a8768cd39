// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define schema tables for the logging_config.proto message shapes.
// Author: Lukas Bower

//! `google.logging.v2` configuration resources: buckets, views, sinks,
//! exclusions, CMEK and organisation settings, and the copy operation.

use proto_codec::{EnumDescriptor, MessageDescriptor, OneofDescriptor, ScalarType};

use super::{
    enum_field, member, message_field, repeated_message, repeated_scalar, scalar, wellknown,
};

/// `google.logging.v2.LifecycleState`.
pub static LIFECYCLE_STATE: EnumDescriptor = EnumDescriptor {
    full_name: "google.logging.v2.LifecycleState",
    values: &[
        (0, "LIFECYCLE_STATE_UNSPECIFIED"),
        (1, "ACTIVE"),
        (2, "DELETE_REQUESTED"),
        (3, "UPDATING"),
        (4, "CREATING"),
        (5, "FAILED"),
    ],
};

/// `google.logging.v2.IndexType`.
pub static INDEX_TYPE: EnumDescriptor = EnumDescriptor {
    full_name: "google.logging.v2.IndexType",
    values: &[
        (0, "INDEX_TYPE_UNSPECIFIED"),
        (1, "INDEX_TYPE_STRING"),
        (2, "INDEX_TYPE_INTEGER"),
    ],
};

/// `google.logging.v2.OperationState`.
pub static OPERATION_STATE: EnumDescriptor = EnumDescriptor {
    full_name: "google.logging.v2.OperationState",
    values: &[
        (0, "OPERATION_STATE_UNSPECIFIED"),
        (1, "OPERATION_STATE_SCHEDULED"),
        (2, "OPERATION_STATE_WAITING_FOR_PERMISSIONS"),
        (3, "OPERATION_STATE_RUNNING"),
        (4, "OPERATION_STATE_SUCCEEDED"),
        (5, "OPERATION_STATE_FAILED"),
        (6, "OPERATION_STATE_CANCELLED"),
    ],
};

/// `google.logging.v2.LogSink.VersionFormat`.
pub static VERSION_FORMAT: EnumDescriptor = EnumDescriptor {
    full_name: "google.logging.v2.LogSink.VersionFormat",
    values: &[(0, "VERSION_FORMAT_UNSPECIFIED"), (1, "V2"), (2, "V1")],
};

/// `google.logging.v2.IndexConfig`.
pub static INDEX_CONFIG: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.IndexConfig",
    fields: &[
        scalar(1, "field_path", "fieldPath", ScalarType::String),
        enum_field(2, "type", "type", &INDEX_TYPE),
        message_field(3, "create_time", "createTime", &wellknown::TIMESTAMP),
    ],
    oneofs: &[],
};

/// `google.logging.v2.CmekSettings`.
pub static CMEK_SETTINGS: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.CmekSettings",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        scalar(2, "kms_key_name", "kmsKeyName", ScalarType::String),
        scalar(3, "service_account_id", "serviceAccountId", ScalarType::String),
        scalar(
            4,
            "kms_key_version_name",
            "kmsKeyVersionName",
            ScalarType::String,
        ),
    ],
    oneofs: &[],
};

/// `google.logging.v2.Settings`.
pub static SETTINGS: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.Settings",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        scalar(2, "kms_key_name", "kmsKeyName", ScalarType::String),
        scalar(
            3,
            "kms_service_account_id",
            "kmsServiceAccountId",
            ScalarType::String,
        ),
        scalar(4, "storage_location", "storageLocation", ScalarType::String),
        scalar(
            5,
            "disable_default_sink",
            "disableDefaultSink",
            ScalarType::Bool,
        ),
    ],
    oneofs: &[],
};

/// `google.logging.v2.LogBucket`.
pub static LOG_BUCKET: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.LogBucket",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        scalar(3, "description", "description", ScalarType::String),
        message_field(4, "create_time", "createTime", &wellknown::TIMESTAMP),
        message_field(5, "update_time", "updateTime", &wellknown::TIMESTAMP),
        scalar(9, "locked", "locked", ScalarType::Bool),
        scalar(11, "retention_days", "retentionDays", ScalarType::Int32),
        enum_field(12, "lifecycle_state", "lifecycleState", &LIFECYCLE_STATE),
        scalar(14, "analytics_enabled", "analyticsEnabled", ScalarType::Bool),
        repeated_scalar(
            15,
            "restricted_fields",
            "restrictedFields",
            ScalarType::String,
        ),
        repeated_message(17, "index_configs", "indexConfigs", &INDEX_CONFIG),
        message_field(19, "cmek_settings", "cmekSettings", &CMEK_SETTINGS),
    ],
    oneofs: &[],
};

/// `google.logging.v2.LogView`.
pub static LOG_VIEW: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.LogView",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        scalar(3, "description", "description", ScalarType::String),
        message_field(4, "create_time", "createTime", &wellknown::TIMESTAMP),
        message_field(5, "update_time", "updateTime", &wellknown::TIMESTAMP),
        scalar(7, "filter", "filter", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.BigQueryOptions`.
pub static BIG_QUERY_OPTIONS: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.BigQueryOptions",
    fields: &[
        scalar(
            1,
            "use_partitioned_tables",
            "usePartitionedTables",
            ScalarType::Bool,
        ),
        scalar(
            3,
            "uses_timestamp_column_partitioning",
            "usesTimestampColumnPartitioning",
            ScalarType::Bool,
        ),
    ],
    oneofs: &[],
};

/// `google.logging.v2.LogExclusion`.
pub static LOG_EXCLUSION: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.LogExclusion",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        scalar(2, "description", "description", ScalarType::String),
        scalar(3, "filter", "filter", ScalarType::String),
        scalar(4, "disabled", "disabled", ScalarType::Bool),
        message_field(5, "create_time", "createTime", &wellknown::TIMESTAMP),
        message_field(6, "update_time", "updateTime", &wellknown::TIMESTAMP),
    ],
    oneofs: &[],
};

/// `google.logging.v2.LogSink`. The `options` oneof currently has a single
/// member, `bigquery_options` (12).
pub static LOG_SINK: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.LogSink",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        scalar(3, "destination", "destination", ScalarType::String),
        scalar(5, "filter", "filter", ScalarType::String),
        enum_field(
            6,
            "output_version_format",
            "outputVersionFormat",
            &VERSION_FORMAT,
        ),
        scalar(8, "writer_identity", "writerIdentity", ScalarType::String),
        scalar(9, "include_children", "includeChildren", ScalarType::Bool),
        member(
            message_field(12, "bigquery_options", "bigqueryOptions", &BIG_QUERY_OPTIONS),
            0,
        ),
        message_field(13, "create_time", "createTime", &wellknown::TIMESTAMP),
        message_field(14, "update_time", "updateTime", &wellknown::TIMESTAMP),
        repeated_message(16, "exclusions", "exclusions", &LOG_EXCLUSION),
        scalar(18, "description", "description", ScalarType::String),
        scalar(19, "disabled", "disabled", ScalarType::Bool),
    ],
    oneofs: &[OneofDescriptor {
        name: "options",
        fields: &[12],
    }],
};

/// `google.logging.v2.ListBucketsRequest`.
pub static LIST_BUCKETS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListBucketsRequest",
    fields: &[
        scalar(1, "parent", "parent", ScalarType::String),
        scalar(2, "page_token", "pageToken", ScalarType::String),
        scalar(3, "page_size", "pageSize", ScalarType::Int32),
    ],
    oneofs: &[],
};

/// `google.logging.v2.ListBucketsResponse`.
pub static LIST_BUCKETS_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListBucketsResponse",
    fields: &[
        repeated_message(1, "buckets", "buckets", &LOG_BUCKET),
        scalar(2, "next_page_token", "nextPageToken", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.CreateBucketRequest`.
pub static CREATE_BUCKET_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.CreateBucketRequest",
    fields: &[
        scalar(1, "parent", "parent", ScalarType::String),
        scalar(2, "bucket_id", "bucketId", ScalarType::String),
        message_field(3, "bucket", "bucket", &LOG_BUCKET),
    ],
    oneofs: &[],
};

/// `google.logging.v2.UpdateBucketRequest`.
pub static UPDATE_BUCKET_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.UpdateBucketRequest",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        message_field(2, "bucket", "bucket", &LOG_BUCKET),
        message_field(4, "update_mask", "updateMask", &wellknown::FIELD_MASK),
    ],
    oneofs: &[],
};

/// `google.logging.v2.GetBucketRequest`.
pub static GET_BUCKET_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.GetBucketRequest",
    fields: &[scalar(1, "name", "name", ScalarType::String)],
    oneofs: &[],
};

/// `google.logging.v2.DeleteBucketRequest`.
pub static DELETE_BUCKET_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.DeleteBucketRequest",
    fields: &[scalar(1, "name", "name", ScalarType::String)],
    oneofs: &[],
};

/// `google.logging.v2.UndeleteBucketRequest`.
pub static UNDELETE_BUCKET_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.UndeleteBucketRequest",
    fields: &[scalar(1, "name", "name", ScalarType::String)],
    oneofs: &[],
};

/// `google.logging.v2.ListViewsRequest`.
pub static LIST_VIEWS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListViewsRequest",
    fields: &[
        scalar(1, "parent", "parent", ScalarType::String),
        scalar(2, "page_token", "pageToken", ScalarType::String),
        scalar(3, "page_size", "pageSize", ScalarType::Int32),
    ],
    oneofs: &[],
};

/// `google.logging.v2.ListViewsResponse`.
pub static LIST_VIEWS_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListViewsResponse",
    fields: &[
        repeated_message(1, "views", "views", &LOG_VIEW),
        scalar(2, "next_page_token", "nextPageToken", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.CreateViewRequest`.
pub static CREATE_VIEW_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.CreateViewRequest",
    fields: &[
        scalar(1, "parent", "parent", ScalarType::String),
        scalar(2, "view_id", "viewId", ScalarType::String),
        message_field(3, "view", "view", &LOG_VIEW),
    ],
    oneofs: &[],
};

/// `google.logging.v2.UpdateViewRequest`.
pub static UPDATE_VIEW_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.UpdateViewRequest",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        message_field(2, "view", "view", &LOG_VIEW),
        message_field(4, "update_mask", "updateMask", &wellknown::FIELD_MASK),
    ],
    oneofs: &[],
};

/// `google.logging.v2.GetViewRequest`.
pub static GET_VIEW_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.GetViewRequest",
    fields: &[scalar(1, "name", "name", ScalarType::String)],
    oneofs: &[],
};

/// `google.logging.v2.DeleteViewRequest`.
pub static DELETE_VIEW_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.DeleteViewRequest",
    fields: &[scalar(1, "name", "name", ScalarType::String)],
    oneofs: &[],
};

/// `google.logging.v2.ListSinksRequest`.
pub static LIST_SINKS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListSinksRequest",
    fields: &[
        scalar(1, "parent", "parent", ScalarType::String),
        scalar(2, "page_token", "pageToken", ScalarType::String),
        scalar(3, "page_size", "pageSize", ScalarType::Int32),
    ],
    oneofs: &[],
};

/// `google.logging.v2.ListSinksResponse`.
pub static LIST_SINKS_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListSinksResponse",
    fields: &[
        repeated_message(1, "sinks", "sinks", &LOG_SINK),
        scalar(2, "next_page_token", "nextPageToken", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.GetSinkRequest`.
pub static GET_SINK_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.GetSinkRequest",
    fields: &[scalar(1, "sink_name", "sinkName", ScalarType::String)],
    oneofs: &[],
};

/// `google.logging.v2.CreateSinkRequest`.
pub static CREATE_SINK_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.CreateSinkRequest",
    fields: &[
        scalar(1, "parent", "parent", ScalarType::String),
        message_field(2, "sink", "sink", &LOG_SINK),
        scalar(
            3,
            "unique_writer_identity",
            "uniqueWriterIdentity",
            ScalarType::Bool,
        ),
    ],
    oneofs: &[],
};

/// `google.logging.v2.UpdateSinkRequest`.
pub static UPDATE_SINK_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.UpdateSinkRequest",
    fields: &[
        scalar(1, "sink_name", "sinkName", ScalarType::String),
        message_field(2, "sink", "sink", &LOG_SINK),
        scalar(
            3,
            "unique_writer_identity",
            "uniqueWriterIdentity",
            ScalarType::Bool,
        ),
        message_field(4, "update_mask", "updateMask", &wellknown::FIELD_MASK),
    ],
    oneofs: &[],
};

/// `google.logging.v2.DeleteSinkRequest`.
pub static DELETE_SINK_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.DeleteSinkRequest",
    fields: &[scalar(1, "sink_name", "sinkName", ScalarType::String)],
    oneofs: &[],
};

/// `google.logging.v2.ListExclusionsRequest`.
pub static LIST_EXCLUSIONS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListExclusionsRequest",
    fields: &[
        scalar(1, "parent", "parent", ScalarType::String),
        scalar(2, "page_token", "pageToken", ScalarType::String),
        scalar(3, "page_size", "pageSize", ScalarType::Int32),
    ],
    oneofs: &[],
};

/// `google.logging.v2.ListExclusionsResponse`.
pub static LIST_EXCLUSIONS_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListExclusionsResponse",
    fields: &[
        repeated_message(1, "exclusions", "exclusions", &LOG_EXCLUSION),
        scalar(2, "next_page_token", "nextPageToken", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.GetExclusionRequest`.
pub static GET_EXCLUSION_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.GetExclusionRequest",
    fields: &[scalar(1, "name", "name", ScalarType::String)],
    oneofs: &[],
};

/// `google.logging.v2.CreateExclusionRequest`.
pub static CREATE_EXCLUSION_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.CreateExclusionRequest",
    fields: &[
        scalar(1, "parent", "parent", ScalarType::String),
        message_field(2, "exclusion", "exclusion", &LOG_EXCLUSION),
    ],
    oneofs: &[],
};

/// `google.logging.v2.UpdateExclusionRequest`.
pub static UPDATE_EXCLUSION_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.UpdateExclusionRequest",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        message_field(2, "exclusion", "exclusion", &LOG_EXCLUSION),
        message_field(3, "update_mask", "updateMask", &wellknown::FIELD_MASK),
    ],
    oneofs: &[],
};

/// `google.logging.v2.DeleteExclusionRequest`.
pub static DELETE_EXCLUSION_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.DeleteExclusionRequest",
    fields: &[scalar(1, "name", "name", ScalarType::String)],
    oneofs: &[],
};

/// `google.logging.v2.GetCmekSettingsRequest`.
pub static GET_CMEK_SETTINGS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.GetCmekSettingsRequest",
    fields: &[scalar(1, "name", "name", ScalarType::String)],
    oneofs: &[],
};

/// `google.logging.v2.UpdateCmekSettingsRequest`.
pub static UPDATE_CMEK_SETTINGS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.UpdateCmekSettingsRequest",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        message_field(2, "cmek_settings", "cmekSettings", &CMEK_SETTINGS),
        message_field(3, "update_mask", "updateMask", &wellknown::FIELD_MASK),
    ],
    oneofs: &[],
};

/// `google.logging.v2.GetSettingsRequest`.
pub static GET_SETTINGS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.GetSettingsRequest",
    fields: &[scalar(1, "name", "name", ScalarType::String)],
    oneofs: &[],
};

/// `google.logging.v2.UpdateSettingsRequest`.
pub static UPDATE_SETTINGS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.UpdateSettingsRequest",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        message_field(2, "settings", "settings", &SETTINGS),
        message_field(3, "update_mask", "updateMask", &wellknown::FIELD_MASK),
    ],
    oneofs: &[],
};

/// `google.logging.v2.CopyLogEntriesRequest`.
pub static COPY_LOG_ENTRIES_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.CopyLogEntriesRequest",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        scalar(3, "filter", "filter", ScalarType::String),
        scalar(4, "destination", "destination", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.CopyLogEntriesMetadata`.
pub static COPY_LOG_ENTRIES_METADATA: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.CopyLogEntriesMetadata",
    fields: &[
        message_field(1, "start_time", "startTime", &wellknown::TIMESTAMP),
        message_field(2, "end_time", "endTime", &wellknown::TIMESTAMP),
        enum_field(3, "state", "state", &OPERATION_STATE),
        scalar(
            4,
            "cancellation_requested",
            "cancellationRequested",
            ScalarType::Bool,
        ),
        message_field(5, "request", "request", &COPY_LOG_ENTRIES_REQUEST),
        scalar(6, "progress", "progress", ScalarType::Int32),
        scalar(7, "writer_identity", "writerIdentity", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.CopyLogEntriesResponse`.
pub static COPY_LOG_ENTRIES_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.CopyLogEntriesResponse",
    fields: &[scalar(
        1,
        "log_entries_copied_count",
        "logEntriesCopiedCount",
        ScalarType::Int64,
    )],
    oneofs: &[],
};
