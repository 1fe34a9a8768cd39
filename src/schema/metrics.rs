// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define schema tables for the logging_metrics.proto message shapes.
// Author: Lukas Bower

//! `google.logging.v2` log-based metric shapes.

use proto_codec::{EnumDescriptor, MessageDescriptor, ScalarType};

use super::{api, enum_field, map_field, message_field, repeated_message, scalar, wellknown};

/// `google.logging.v2.LogMetric.ApiVersion`.
pub static API_VERSION: EnumDescriptor = EnumDescriptor {
    full_name: "google.logging.v2.LogMetric.ApiVersion",
    values: &[(0, "V2"), (1, "V1")],
};

static LABEL_EXTRACTORS_ENTRY: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.LogMetric.LabelExtractorsEntry",
    fields: &[
        scalar(1, "key", "key", ScalarType::String),
        scalar(2, "value", "value", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.LogMetric`.
pub static LOG_METRIC: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.LogMetric",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        scalar(2, "description", "description", ScalarType::String),
        scalar(3, "filter", "filter", ScalarType::String),
        enum_field(4, "version", "version", &API_VERSION),
        message_field(
            5,
            "metric_descriptor",
            "metricDescriptor",
            &api::METRIC_DESCRIPTOR,
        ),
        scalar(6, "value_extractor", "valueExtractor", ScalarType::String),
        map_field(
            7,
            "label_extractors",
            "labelExtractors",
            &LABEL_EXTRACTORS_ENTRY,
        ),
        message_field(8, "bucket_options", "bucketOptions", &api::BUCKET_OPTIONS),
        message_field(9, "create_time", "createTime", &wellknown::TIMESTAMP),
        message_field(10, "update_time", "updateTime", &wellknown::TIMESTAMP),
        scalar(12, "disabled", "disabled", ScalarType::Bool),
    ],
    oneofs: &[],
};

/// `google.logging.v2.ListLogMetricsRequest`.
pub static LIST_LOG_METRICS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListLogMetricsRequest",
    fields: &[
        scalar(1, "parent", "parent", ScalarType::String),
        scalar(2, "page_token", "pageToken", ScalarType::String),
        scalar(3, "page_size", "pageSize", ScalarType::Int32),
    ],
    oneofs: &[],
};

/// `google.logging.v2.ListLogMetricsResponse`.
pub static LIST_LOG_METRICS_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.ListLogMetricsResponse",
    fields: &[
        repeated_message(1, "metrics", "metrics", &LOG_METRIC),
        scalar(2, "next_page_token", "nextPageToken", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.logging.v2.GetLogMetricRequest`.
pub static GET_LOG_METRIC_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.GetLogMetricRequest",
    fields: &[scalar(1, "metric_name", "metricName", ScalarType::String)],
    oneofs: &[],
};

/// `google.logging.v2.CreateLogMetricRequest`.
pub static CREATE_LOG_METRIC_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.CreateLogMetricRequest",
    fields: &[
        scalar(1, "parent", "parent", ScalarType::String),
        message_field(2, "metric", "metric", &LOG_METRIC),
    ],
    oneofs: &[],
};

/// `google.logging.v2.UpdateLogMetricRequest`.
pub static UPDATE_LOG_METRIC_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.UpdateLogMetricRequest",
    fields: &[
        scalar(1, "metric_name", "metricName", ScalarType::String),
        message_field(2, "metric", "metric", &LOG_METRIC),
    ],
    oneofs: &[],
};

/// `google.logging.v2.DeleteLogMetricRequest`.
pub static DELETE_LOG_METRIC_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.v2.DeleteLogMetricRequest",
    fields: &[scalar(1, "metric_name", "metricName", ScalarType::String)],
    oneofs: &[],
};
