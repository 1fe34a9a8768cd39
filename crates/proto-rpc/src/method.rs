// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Describe RPC services and methods as static schema data.
// Author: Lukas Bower

//! Method and service descriptors: the static tables that pair each RPC
//! with its request and response message schemas.

use proto_codec::MessageDescriptor;

/// One RPC method: its owning service, its name, and the message schemas
/// its request and response bytes conform to.
#[derive(Debug)]
pub struct MethodDescriptor {
    /// Fully-qualified service name, e.g. `google.logging.v2.LoggingServiceV2`.
    pub service: &'static str,
    /// Method name as declared, e.g. `WriteLogEntries`.
    pub name: &'static str,
    /// Request message schema.
    pub request: &'static MessageDescriptor,
    /// Response message schema.
    pub response: &'static MessageDescriptor,
    /// Whether the server streams multiple response messages.
    pub server_streaming: bool,
}

impl MethodDescriptor {
    /// Wire path of the method: `/{service}/{name}`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}/{}", self.service, self.name)
    }
}

/// A service: its fully-qualified name plus its method table.
#[derive(Debug)]
pub struct ServiceDescriptor {
    /// Fully-qualified service name.
    pub full_name: &'static str,
    /// Methods in declaration order.
    pub methods: &'static [&'static MethodDescriptor],
}

impl ServiceDescriptor {
    /// Look up a method by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&'static MethodDescriptor> {
        self.methods
            .iter()
            .copied()
            .find(|method| method.name == name)
    }
}
