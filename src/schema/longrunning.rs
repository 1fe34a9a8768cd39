// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define schema tables for the google.longrunning operation shapes.
// Author: Lukas Bower

//! `google.longrunning` operation polling shapes.

use proto_codec::{MessageDescriptor, OneofDescriptor, ScalarType};

use super::{member, message_field, repeated_message, rpc, scalar, wellknown};

/// `google.longrunning.Operation`. The `result` oneof carries either
/// `error` (4) or `response` (5) once `done` is true.
pub static OPERATION: MessageDescriptor = MessageDescriptor {
    full_name: "google.longrunning.Operation",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        message_field(2, "metadata", "metadata", &wellknown::ANY),
        scalar(3, "done", "done", ScalarType::Bool),
        member(message_field(4, "error", "error", &rpc::STATUS), 0),
        member(message_field(5, "response", "response", &wellknown::ANY), 0),
    ],
    oneofs: &[OneofDescriptor {
        name: "result",
        fields: &[4, 5],
    }],
};

/// `google.longrunning.GetOperationRequest`.
pub static GET_OPERATION_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.longrunning.GetOperationRequest",
    fields: &[scalar(1, "name", "name", ScalarType::String)],
    oneofs: &[],
};

/// `google.longrunning.ListOperationsRequest`.
pub static LIST_OPERATIONS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.longrunning.ListOperationsRequest",
    fields: &[
        scalar(1, "filter", "filter", ScalarType::String),
        scalar(2, "page_size", "pageSize", ScalarType::Int32),
        scalar(3, "page_token", "pageToken", ScalarType::String),
        scalar(4, "name", "name", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.longrunning.ListOperationsResponse`.
pub static LIST_OPERATIONS_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: "google.longrunning.ListOperationsResponse",
    fields: &[
        repeated_message(1, "operations", "operations", &OPERATION),
        scalar(2, "next_page_token", "nextPageToken", ScalarType::String),
    ],
    oneofs: &[],
};

/// `google.longrunning.CancelOperationRequest`.
pub static CANCEL_OPERATION_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.longrunning.CancelOperationRequest",
    fields: &[scalar(1, "name", "name", ScalarType::String)],
    oneofs: &[],
};

/// `google.longrunning.DeleteOperationRequest`.
pub static DELETE_OPERATION_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.longrunning.DeleteOperationRequest",
    fields: &[scalar(1, "name", "name", ScalarType::String)],
    oneofs: &[],
};

/// `google.longrunning.WaitOperationRequest`.
pub static WAIT_OPERATION_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: "google.longrunning.WaitOperationRequest",
    fields: &[
        scalar(1, "name", "name", ScalarType::String),
        message_field(2, "timeout", "timeout", &wellknown::DURATION),
    ],
    oneofs: &[],
};
