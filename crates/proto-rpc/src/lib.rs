// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Provide the typed unary RPC call layer over abstract transports.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Typed RPC plumbing: status envelopes, method/service descriptors, and
//! the unary call state machine, composed with an abstract byte transport.
//! Opening sockets, negotiating TLS, and attaching credentials are the
//! transport's business and never appear here.

mod call;
mod method;
mod status;

pub use call::{
    server_streaming, unary, CallError, CallState, CancelToken, StreamingResponses, Transport,
    UnaryCall,
};
pub use method::{MethodDescriptor, ServiceDescriptor};
pub use status::{Status, StatusCode, StatusDetail};
