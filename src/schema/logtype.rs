// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define schema tables for the google.logging.type shared types.
// Author: Lukas Bower

//! `google.logging.type` severity and HTTP request types.

use proto_codec::{EnumDescriptor, MessageDescriptor, ScalarType};

use super::{message_field, scalar, wellknown};

/// `google.logging.type.LogSeverity`.
pub static LOG_SEVERITY: EnumDescriptor = EnumDescriptor {
    full_name: "google.logging.type.LogSeverity",
    values: &[
        (0, "DEFAULT"),
        (100, "DEBUG"),
        (200, "INFO"),
        (300, "NOTICE"),
        (400, "WARNING"),
        (500, "ERROR"),
        (600, "CRITICAL"),
        (700, "ALERT"),
        (800, "EMERGENCY"),
    ],
};

/// `google.logging.type.HttpRequest`.
pub static HTTP_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.logging.type.HttpRequest",
    fields: &[
        scalar(1, "request_method", "requestMethod", ScalarType::String),
        scalar(2, "request_url", "requestUrl", ScalarType::String),
        scalar(3, "request_size", "requestSize", ScalarType::Int64),
        scalar(4, "status", "status", ScalarType::Int32),
        scalar(5, "response_size", "responseSize", ScalarType::Int64),
        scalar(6, "user_agent", "userAgent", ScalarType::String),
        scalar(7, "remote_ip", "remoteIp", ScalarType::String),
        scalar(8, "referer", "referer", ScalarType::String),
        scalar(9, "cache_hit", "cacheHit", ScalarType::Bool),
        scalar(
            10,
            "cache_validated_with_origin_server",
            "cacheValidatedWithOriginServer",
            ScalarType::Bool,
        ),
        scalar(11, "cache_lookup", "cacheLookup", ScalarType::Bool),
        scalar(12, "cache_fill_bytes", "cacheFillBytes", ScalarType::Int64),
        scalar(13, "server_ip", "serverIp", ScalarType::String),
        message_field(14, "latency", "latency", &wellknown::DURATION),
        scalar(15, "protocol", "protocol", ScalarType::String),
    ],
    oneofs: &[],
};
