// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define schema tables for the google.api resource and metric types.
// Author: Lukas Bower

//! `google.api` monitored-resource and metric-descriptor types.

use proto_codec::{EnumDescriptor, MessageDescriptor, OneofDescriptor, ScalarType};

use super::{
    enum_field, map_field, member, message_field, repeated_message, repeated_scalar, scalar,
    wellknown,
};

/// `google.api.LaunchStage`.
pub static LAUNCH_STAGE: EnumDescriptor = EnumDescriptor {
    full_name: "google.api.LaunchStage",
    values: &[
        (0, "LAUNCH_STAGE_UNSPECIFIED"),
        (6, "UNIMPLEMENTED"),
        (7, "PRELAUNCH"),
        (1, "EARLY_ACCESS"),
        (2, "ALPHA"),
        (3, "BETA"),
        (4, "GA"),
        (5, "DEPRECATED"),
    ],
};

/// `google.api.LabelDescriptor.ValueType`.
pub static LABEL_VALUE_TYPE: EnumDescriptor = EnumDescriptor {
    full_name: "google.api.LabelDescriptor.ValueType",
    values: &[(0, "STRING"), (1, "BOOL"), (2, "INT64")],
};

/// `google.api.LabelDescriptor`.
pub static LABEL_DESCRIPTOR: MessageDescriptor = MessageDescriptor {
    full_name: "google.api.LabelDescriptor",
    fields: &[
        scalar(1, "key", "key", ScalarType::String),
        enum_field(2, "value_type", "valueType", &LABEL_VALUE_TYPE),
        scalar(3, "description", "description", ScalarType::String),
    ],
    oneofs: &[],
};

static MONITORED_RESOURCE_LABELS_ENTRY: MessageDescriptor = MessageDescriptor {
    full_name: "google.api.MonitoredResource.LabelsEntry",
    fields: &[
        scalar(1, "key", "key", ScalarType::String),
        scalar(2, "value", "value", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.api.MonitoredResource`.
pub static MONITORED_RESOURCE: MessageDescriptor = MessageDescriptor {
    full_name: "google.api.MonitoredResource",
    fields: &[
        scalar(1, "type", "type", ScalarType::String),
        map_field(2, "labels", "labels", &MONITORED_RESOURCE_LABELS_ENTRY),
    ],
    oneofs: &[],
};

static MONITORED_RESOURCE_METADATA_USER_LABELS_ENTRY: MessageDescriptor = MessageDescriptor {
    full_name: "google.api.MonitoredResourceMetadata.UserLabelsEntry",
    fields: &[
        scalar(1, "key", "key", ScalarType::String),
        scalar(2, "value", "value", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.api.MonitoredResourceMetadata`.
pub static MONITORED_RESOURCE_METADATA: MessageDescriptor = MessageDescriptor {
    full_name: "google.api.MonitoredResourceMetadata",
    fields: &[
        message_field(1, "system_labels", "systemLabels", &wellknown::STRUCT),
        map_field(
            2,
            "user_labels",
            "userLabels",
            &MONITORED_RESOURCE_METADATA_USER_LABELS_ENTRY,
        ),
    ],
    oneofs: &[],
};

/// `google.api.MonitoredResourceDescriptor`.
pub static MONITORED_RESOURCE_DESCRIPTOR: MessageDescriptor = MessageDescriptor {
    full_name: "google.api.MonitoredResourceDescriptor",
    fields: &[
        scalar(1, "type", "type", ScalarType::String),
        scalar(2, "display_name", "displayName", ScalarType::String),
        scalar(3, "description", "description", ScalarType::String),
        repeated_message(4, "labels", "labels", &LABEL_DESCRIPTOR),
        scalar(5, "name", "name", ScalarType::String),
        enum_field(7, "launch_stage", "launchStage", &LAUNCH_STAGE),
    ],
    oneofs: &[],
};

/// `google.api.MetricDescriptor.MetricKind`.
pub static METRIC_KIND: EnumDescriptor = EnumDescriptor {
    full_name: "google.api.MetricDescriptor.MetricKind",
    values: &[
        (0, "METRIC_KIND_UNSPECIFIED"),
        (1, "GAUGE"),
        (2, "DELTA"),
        (3, "CUMULATIVE"),
    ],
};

/// `google.api.MetricDescriptor.ValueType`.
pub static METRIC_VALUE_TYPE: EnumDescriptor = EnumDescriptor {
    full_name: "google.api.MetricDescriptor.ValueType",
    values: &[
        (0, "VALUE_TYPE_UNSPECIFIED"),
        (1, "BOOL"),
        (2, "INT64"),
        (3, "DOUBLE"),
        (4, "STRING"),
        (5, "DISTRIBUTION"),
        (6, "MONEY"),
    ],
};

/// `google.api.MetricDescriptor.MetricDescriptorMetadata`.
pub static METRIC_DESCRIPTOR_METADATA: MessageDescriptor = MessageDescriptor {
    full_name: "google.api.MetricDescriptor.MetricDescriptorMetadata",
    fields: &[
        enum_field(1, "launch_stage", "launchStage", &LAUNCH_STAGE),
        message_field(2, "sample_period", "samplePeriod", &wellknown::DURATION),
        message_field(3, "ingest_delay", "ingestDelay", &wellknown::DURATION),
    ],
    oneofs: &[],
};

/// `google.api.MetricDescriptor`.
pub static METRIC_DESCRIPTOR: MessageDescriptor = MessageDescriptor {
    full_name: "google.api.MetricDescriptor",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        repeated_message(2, "labels", "labels", &LABEL_DESCRIPTOR),
        enum_field(3, "metric_kind", "metricKind", &METRIC_KIND),
        enum_field(4, "value_type", "valueType", &METRIC_VALUE_TYPE),
        scalar(5, "unit", "unit", ScalarType::String),
        scalar(6, "description", "description", ScalarType::String),
        scalar(7, "display_name", "displayName", ScalarType::String),
        scalar(8, "type", "type", ScalarType::String),
        message_field(10, "metadata", "metadata", &METRIC_DESCRIPTOR_METADATA),
        enum_field(12, "launch_stage", "launchStage", &LAUNCH_STAGE),
        repeated_scalar(
            13,
            "monitored_resource_types",
            "monitoredResourceTypes",
            ScalarType::String,
        ),
    ],
    oneofs: &[],
};

/// `google.api.Distribution.BucketOptions.Linear`.
pub static LINEAR_BUCKETS: MessageDescriptor = MessageDescriptor {
    full_name: "google.api.Distribution.BucketOptions.Linear",
    fields: &[
        scalar(1, "num_finite_buckets", "numFiniteBuckets", ScalarType::Int32),
        scalar(2, "width", "width", ScalarType::Double),
        scalar(3, "offset", "offset", ScalarType::Double),
    ],
    oneofs: &[],
};

/// `google.api.Distribution.BucketOptions.Exponential`.
pub static EXPONENTIAL_BUCKETS: MessageDescriptor = MessageDescriptor {
    full_name: "google.api.Distribution.BucketOptions.Exponential",
    fields: &[
        scalar(1, "num_finite_buckets", "numFiniteBuckets", ScalarType::Int32),
        scalar(2, "growth_factor", "growthFactor", ScalarType::Double),
        scalar(3, "scale", "scale", ScalarType::Double),
    ],
    oneofs: &[],
};

/// `google.api.Distribution.BucketOptions.Explicit`.
pub static EXPLICIT_BUCKETS: MessageDescriptor = MessageDescriptor {
    full_name: "google.api.Distribution.BucketOptions.Explicit",
    fields: &[repeated_scalar(1, "bounds", "bounds", ScalarType::Double)],
    oneofs: &[],
};

/// `google.api.Distribution.BucketOptions`.
pub static BUCKET_OPTIONS: MessageDescriptor = MessageDescriptor {
    full_name: "google.api.Distribution.BucketOptions",
    fields: &[
        member(
            message_field(1, "linear_buckets", "linearBuckets", &LINEAR_BUCKETS),
            0,
        ),
        member(
            message_field(
                2,
                "exponential_buckets",
                "exponentialBuckets",
                &EXPONENTIAL_BUCKETS,
            ),
            0,
        ),
        member(
            message_field(3, "explicit_buckets", "explicitBuckets", &EXPLICIT_BUCKETS),
            0,
        ),
    ],
    oneofs: &[OneofDescriptor {
        name: "options",
        fields: &[1, 2, 3],
    }],
};
