// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define the method tables for the logging API service surface.
// Author: Lukas Bower

//! Service and method tables for `LoggingServiceV2`, `ConfigServiceV2`,
//! `MetricsServiceV2`, and the generic `Operations` service, preserved
//! exactly from the deployed interface definitions.

use proto_rpc::{MethodDescriptor, ServiceDescriptor};

use crate::schema::{config, logging, longrunning, metrics, wellknown};

const LOGGING_SERVICE: &str = "google.logging.v2.LoggingServiceV2";
const CONFIG_SERVICE: &str = "google.logging.v2.ConfigServiceV2";
const METRICS_SERVICE: &str = "google.logging.v2.MetricsServiceV2";
const OPERATIONS_SERVICE: &str = "google.longrunning.Operations";

const fn unary_method(
    service: &'static str,
    name: &'static str,
    request: &'static proto_codec::MessageDescriptor,
    response: &'static proto_codec::MessageDescriptor,
) -> MethodDescriptor {
    MethodDescriptor {
        service,
        name,
        request,
        response,
        server_streaming: false,
    }
}

// --- LoggingServiceV2 -----------------------------------------------------

/// `LoggingServiceV2.DeleteLog`.
pub static DELETE_LOG: MethodDescriptor = unary_method(
    LOGGING_SERVICE,
    "DeleteLog",
    &logging::DELETE_LOG_REQUEST,
    &wellknown::EMPTY,
);

/// `LoggingServiceV2.WriteLogEntries`.
pub static WRITE_LOG_ENTRIES: MethodDescriptor = unary_method(
    LOGGING_SERVICE,
    "WriteLogEntries",
    &logging::WRITE_LOG_ENTRIES_REQUEST,
    &logging::WRITE_LOG_ENTRIES_RESPONSE,
);

/// `LoggingServiceV2.ListLogEntries`.
pub static LIST_LOG_ENTRIES: MethodDescriptor = unary_method(
    LOGGING_SERVICE,
    "ListLogEntries",
    &logging::LIST_LOG_ENTRIES_REQUEST,
    &logging::LIST_LOG_ENTRIES_RESPONSE,
);

/// `LoggingServiceV2.ListMonitoredResourceDescriptors`.
pub static LIST_MONITORED_RESOURCE_DESCRIPTORS: MethodDescriptor = unary_method(
    LOGGING_SERVICE,
    "ListMonitoredResourceDescriptors",
    &logging::LIST_MONITORED_RESOURCE_DESCRIPTORS_REQUEST,
    &logging::LIST_MONITORED_RESOURCE_DESCRIPTORS_RESPONSE,
);

/// `LoggingServiceV2.ListLogs`.
pub static LIST_LOGS: MethodDescriptor = unary_method(
    LOGGING_SERVICE,
    "ListLogs",
    &logging::LIST_LOGS_REQUEST,
    &logging::LIST_LOGS_RESPONSE,
);

/// `LoggingServiceV2.TailLogEntries` (server streaming).
pub static TAIL_LOG_ENTRIES: MethodDescriptor = MethodDescriptor {
    service: LOGGING_SERVICE,
    name: "TailLogEntries",
    request: &logging::TAIL_LOG_ENTRIES_REQUEST,
    response: &logging::TAIL_LOG_ENTRIES_RESPONSE,
    server_streaming: true,
};

/// The logging data-plane service.
pub static LOGGING_SERVICE_V2: ServiceDescriptor = ServiceDescriptor {
    full_name: LOGGING_SERVICE,
    methods: &[
        &DELETE_LOG,
        &WRITE_LOG_ENTRIES,
        &LIST_LOG_ENTRIES,
        &LIST_MONITORED_RESOURCE_DESCRIPTORS,
        &LIST_LOGS,
        &TAIL_LOG_ENTRIES,
    ],
};

// --- ConfigServiceV2 ------------------------------------------------------

/// `ConfigServiceV2.ListBuckets`.
pub static LIST_BUCKETS: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "ListBuckets",
    &config::LIST_BUCKETS_REQUEST,
    &config::LIST_BUCKETS_RESPONSE,
);

/// `ConfigServiceV2.GetBucket`.
pub static GET_BUCKET: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "GetBucket",
    &config::GET_BUCKET_REQUEST,
    &config::LOG_BUCKET,
);

/// `ConfigServiceV2.CreateBucket`.
pub static CREATE_BUCKET: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "CreateBucket",
    &config::CREATE_BUCKET_REQUEST,
    &config::LOG_BUCKET,
);

/// `ConfigServiceV2.UpdateBucket`.
pub static UPDATE_BUCKET: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "UpdateBucket",
    &config::UPDATE_BUCKET_REQUEST,
    &config::LOG_BUCKET,
);

/// `ConfigServiceV2.DeleteBucket`.
pub static DELETE_BUCKET: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "DeleteBucket",
    &config::DELETE_BUCKET_REQUEST,
    &wellknown::EMPTY,
);

/// `ConfigServiceV2.UndeleteBucket`.
pub static UNDELETE_BUCKET: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "UndeleteBucket",
    &config::UNDELETE_BUCKET_REQUEST,
    &wellknown::EMPTY,
);

/// `ConfigServiceV2.ListViews`.
pub static LIST_VIEWS: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "ListViews",
    &config::LIST_VIEWS_REQUEST,
    &config::LIST_VIEWS_RESPONSE,
);

/// `ConfigServiceV2.GetView`.
pub static GET_VIEW: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "GetView",
    &config::GET_VIEW_REQUEST,
    &config::LOG_VIEW,
);

/// `ConfigServiceV2.CreateView`.
pub static CREATE_VIEW: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "CreateView",
    &config::CREATE_VIEW_REQUEST,
    &config::LOG_VIEW,
);

/// `ConfigServiceV2.UpdateView`.
pub static UPDATE_VIEW: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "UpdateView",
    &config::UPDATE_VIEW_REQUEST,
    &config::LOG_VIEW,
);

/// `ConfigServiceV2.DeleteView`.
pub static DELETE_VIEW: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "DeleteView",
    &config::DELETE_VIEW_REQUEST,
    &wellknown::EMPTY,
);

/// `ConfigServiceV2.ListSinks`.
pub static LIST_SINKS: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "ListSinks",
    &config::LIST_SINKS_REQUEST,
    &config::LIST_SINKS_RESPONSE,
);

/// `ConfigServiceV2.GetSink`.
pub static GET_SINK: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "GetSink",
    &config::GET_SINK_REQUEST,
    &config::LOG_SINK,
);

/// `ConfigServiceV2.CreateSink`.
pub static CREATE_SINK: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "CreateSink",
    &config::CREATE_SINK_REQUEST,
    &config::LOG_SINK,
);

/// `ConfigServiceV2.UpdateSink`.
pub static UPDATE_SINK: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "UpdateSink",
    &config::UPDATE_SINK_REQUEST,
    &config::LOG_SINK,
);

/// `ConfigServiceV2.DeleteSink`.
pub static DELETE_SINK: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "DeleteSink",
    &config::DELETE_SINK_REQUEST,
    &wellknown::EMPTY,
);

/// `ConfigServiceV2.ListExclusions`.
pub static LIST_EXCLUSIONS: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "ListExclusions",
    &config::LIST_EXCLUSIONS_REQUEST,
    &config::LIST_EXCLUSIONS_RESPONSE,
);

/// `ConfigServiceV2.GetExclusion`.
pub static GET_EXCLUSION: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "GetExclusion",
    &config::GET_EXCLUSION_REQUEST,
    &config::LOG_EXCLUSION,
);

/// `ConfigServiceV2.CreateExclusion`.
pub static CREATE_EXCLUSION: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "CreateExclusion",
    &config::CREATE_EXCLUSION_REQUEST,
    &config::LOG_EXCLUSION,
);

/// `ConfigServiceV2.UpdateExclusion`.
pub static UPDATE_EXCLUSION: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "UpdateExclusion",
    &config::UPDATE_EXCLUSION_REQUEST,
    &config::LOG_EXCLUSION,
);

/// `ConfigServiceV2.DeleteExclusion`.
pub static DELETE_EXCLUSION: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "DeleteExclusion",
    &config::DELETE_EXCLUSION_REQUEST,
    &wellknown::EMPTY,
);

/// `ConfigServiceV2.GetCmekSettings`.
pub static GET_CMEK_SETTINGS: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "GetCmekSettings",
    &config::GET_CMEK_SETTINGS_REQUEST,
    &config::CMEK_SETTINGS,
);

/// `ConfigServiceV2.UpdateCmekSettings`.
pub static UPDATE_CMEK_SETTINGS: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "UpdateCmekSettings",
    &config::UPDATE_CMEK_SETTINGS_REQUEST,
    &config::CMEK_SETTINGS,
);

/// `ConfigServiceV2.GetSettings`.
pub static GET_SETTINGS: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "GetSettings",
    &config::GET_SETTINGS_REQUEST,
    &config::SETTINGS,
);

/// `ConfigServiceV2.UpdateSettings`.
pub static UPDATE_SETTINGS: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "UpdateSettings",
    &config::UPDATE_SETTINGS_REQUEST,
    &config::SETTINGS,
);

/// `ConfigServiceV2.CopyLogEntries` (long-running; resolves to an
/// `Operation` whose response is a `CopyLogEntriesResponse`).
pub static COPY_LOG_ENTRIES: MethodDescriptor = unary_method(
    CONFIG_SERVICE,
    "CopyLogEntries",
    &config::COPY_LOG_ENTRIES_REQUEST,
    &longrunning::OPERATION,
);

/// The logging configuration service.
pub static CONFIG_SERVICE_V2: ServiceDescriptor = ServiceDescriptor {
    full_name: CONFIG_SERVICE,
    methods: &[
        &LIST_BUCKETS,
        &GET_BUCKET,
        &CREATE_BUCKET,
        &UPDATE_BUCKET,
        &DELETE_BUCKET,
        &UNDELETE_BUCKET,
        &LIST_VIEWS,
        &GET_VIEW,
        &CREATE_VIEW,
        &UPDATE_VIEW,
        &DELETE_VIEW,
        &LIST_SINKS,
        &GET_SINK,
        &CREATE_SINK,
        &UPDATE_SINK,
        &DELETE_SINK,
        &LIST_EXCLUSIONS,
        &GET_EXCLUSION,
        &CREATE_EXCLUSION,
        &UPDATE_EXCLUSION,
        &DELETE_EXCLUSION,
        &GET_CMEK_SETTINGS,
        &UPDATE_CMEK_SETTINGS,
        &GET_SETTINGS,
        &UPDATE_SETTINGS,
        &COPY_LOG_ENTRIES,
    ],
};

// --- MetricsServiceV2 -----------------------------------------------------

/// `MetricsServiceV2.ListLogMetrics`.
pub static LIST_LOG_METRICS: MethodDescriptor = unary_method(
    METRICS_SERVICE,
    "ListLogMetrics",
    &metrics::LIST_LOG_METRICS_REQUEST,
    &metrics::LIST_LOG_METRICS_RESPONSE,
);

/// `MetricsServiceV2.GetLogMetric`.
pub static GET_LOG_METRIC: MethodDescriptor = unary_method(
    METRICS_SERVICE,
    "GetLogMetric",
    &metrics::GET_LOG_METRIC_REQUEST,
    &metrics::LOG_METRIC,
);

/// `MetricsServiceV2.CreateLogMetric`.
pub static CREATE_LOG_METRIC: MethodDescriptor = unary_method(
    METRICS_SERVICE,
    "CreateLogMetric",
    &metrics::CREATE_LOG_METRIC_REQUEST,
    &metrics::LOG_METRIC,
);

/// `MetricsServiceV2.UpdateLogMetric`.
pub static UPDATE_LOG_METRIC: MethodDescriptor = unary_method(
    METRICS_SERVICE,
    "UpdateLogMetric",
    &metrics::UPDATE_LOG_METRIC_REQUEST,
    &metrics::LOG_METRIC,
);

/// `MetricsServiceV2.DeleteLogMetric`.
pub static DELETE_LOG_METRIC: MethodDescriptor = unary_method(
    METRICS_SERVICE,
    "DeleteLogMetric",
    &metrics::DELETE_LOG_METRIC_REQUEST,
    &wellknown::EMPTY,
);

/// The log-based metrics service.
pub static METRICS_SERVICE_V2: ServiceDescriptor = ServiceDescriptor {
    full_name: METRICS_SERVICE,
    methods: &[
        &LIST_LOG_METRICS,
        &GET_LOG_METRIC,
        &CREATE_LOG_METRIC,
        &UPDATE_LOG_METRIC,
        &DELETE_LOG_METRIC,
    ],
};

// --- Operations -----------------------------------------------------------

/// `Operations.ListOperations`.
pub static LIST_OPERATIONS: MethodDescriptor = unary_method(
    OPERATIONS_SERVICE,
    "ListOperations",
    &longrunning::LIST_OPERATIONS_REQUEST,
    &longrunning::LIST_OPERATIONS_RESPONSE,
);

/// `Operations.GetOperation`.
pub static GET_OPERATION: MethodDescriptor = unary_method(
    OPERATIONS_SERVICE,
    "GetOperation",
    &longrunning::GET_OPERATION_REQUEST,
    &longrunning::OPERATION,
);

/// `Operations.DeleteOperation`.
pub static DELETE_OPERATION: MethodDescriptor = unary_method(
    OPERATIONS_SERVICE,
    "DeleteOperation",
    &longrunning::DELETE_OPERATION_REQUEST,
    &wellknown::EMPTY,
);

/// `Operations.CancelOperation`.
pub static CANCEL_OPERATION: MethodDescriptor = unary_method(
    OPERATIONS_SERVICE,
    "CancelOperation",
    &longrunning::CANCEL_OPERATION_REQUEST,
    &wellknown::EMPTY,
);

/// `Operations.WaitOperation`.
pub static WAIT_OPERATION: MethodDescriptor = unary_method(
    OPERATIONS_SERVICE,
    "WaitOperation",
    &longrunning::WAIT_OPERATION_REQUEST,
    &longrunning::OPERATION,
);

/// The generic long-running operations service.
pub static OPERATIONS: ServiceDescriptor = ServiceDescriptor {
    full_name: OPERATIONS_SERVICE,
    methods: &[
        &LIST_OPERATIONS,
        &GET_OPERATION,
        &DELETE_OPERATION,
        &CANCEL_OPERATION,
        &WAIT_OPERATION,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_paths_match_the_wire_contract() {
        assert_eq!(
            WRITE_LOG_ENTRIES.path(),
            "/google.logging.v2.LoggingServiceV2/WriteLogEntries"
        );
        assert_eq!(
            COPY_LOG_ENTRIES.path(),
            "/google.logging.v2.ConfigServiceV2/CopyLogEntries"
        );
        assert_eq!(
            WAIT_OPERATION.path(),
            "/google.longrunning.Operations/WaitOperation"
        );
    }

    #[test]
    fn only_tail_log_entries_streams() {
        for service in [
            &LOGGING_SERVICE_V2,
            &CONFIG_SERVICE_V2,
            &METRICS_SERVICE_V2,
            &OPERATIONS,
        ] {
            for method in service.methods {
                assert_eq!(
                    method.server_streaming,
                    method.name == "TailLogEntries",
                    "{}",
                    method.name
                );
            }
        }
    }

    #[test]
    fn service_lookup_finds_every_method() {
        assert!(LOGGING_SERVICE_V2.method("TailLogEntries").is_some());
        assert!(CONFIG_SERVICE_V2.method("UndeleteBucket").is_some());
        assert!(METRICS_SERVICE_V2.method("DeleteLogMetric").is_some());
        assert!(OPERATIONS.method("CancelOperation").is_some());
        assert!(LOGGING_SERVICE_V2.method("WriteEntries").is_none());
    }
}
