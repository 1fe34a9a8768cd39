// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define the schema table for the google.rpc status envelope.
// Author: Lukas Bower

//! `google.rpc` types carried inside operation results and partial errors.

use proto_codec::{MessageDescriptor, ScalarType};

use super::{repeated_message, scalar, wellknown};

/// `google.rpc.Status`.
pub static STATUS: MessageDescriptor = MessageDescriptor {
    full_name: "google.rpc.Status",
    fields: &[
        scalar(1, "code", "code", ScalarType::Int32),
        scalar(2, "message", "message", ScalarType::String),
        repeated_message(3, "details", "details", &wellknown::ANY),
    ],
    oneofs: &[],
};
