// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Drive typed unary calls over an abstract byte transport.
// Author: Lukas Bower

//! The unary call layer: a typed call is a message codec pair (request and
//! response schema) composed with an abstract "send these bytes, receive
//! those bytes or an error" transport. The transport owns sockets, TLS,
//! credentials, and any retry policy; none of that lives here.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;
use proto_codec::{decode, encode, DecodeError, DynamicMessage};

use crate::method::MethodDescriptor;
use crate::status::{Status, StatusCode};

/// Abstract byte transport the call layer is composed with.
///
/// Implementations may be driven from multiple threads concurrently; each
/// call is independent and shares no mutable state beyond the transport
/// itself.
pub trait Transport {
    /// Issue one unary exchange: request bytes out, response bytes (or a
    /// status error) back.
    fn unary(&self, method: &MethodDescriptor, request: &[u8]) -> Result<Vec<u8>, Status>;

    /// Issue a server-streaming exchange, yielding one response payload per
    /// streamed message. Transports without streaming support report
    /// `UNIMPLEMENTED`.
    fn server_streaming<'a>(
        &'a self,
        method: &MethodDescriptor,
        request: &[u8],
    ) -> Result<Box<dyn Iterator<Item = Result<Vec<u8>, Status>> + 'a>, Status> {
        let _ = (method, request);
        Err(Status::unimplemented(
            "transport does not support server streaming",
        ))
    }
}

/// Cloneable cancellation flag for a pending call.
///
/// Cancelling never un-sends bytes already on the wire; it only suppresses
/// delivery of the result to the caller.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create an un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Lifecycle of a unary call. There are no intermediate states between
/// `Sent` and resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    /// Created, nothing sent.
    Idle,
    /// Request handed to the transport, awaiting resolution.
    Sent,
    /// Response received and decoded.
    Succeeded,
    /// Transport error, decode failure, non-OK peer status, or cancellation.
    Failed,
}

/// Typed failure of a call; every variant can be rendered as a [`Status`].
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum CallError {
    /// The request message does not conform to the method's request schema.
    #[error("method {method} expects request {expected}, got {got}")]
    RequestSchema {
        /// Method name.
        method: &'static str,
        /// Expected request message full name.
        expected: &'static str,
        /// Supplied message full name.
        got: &'static str,
    },
    /// The peer answered with a non-OK status envelope.
    #[error(transparent)]
    Status(#[from] Status),
    /// The response bytes did not decode against the response schema.
    #[error("response decode failed: {0}")]
    Decode(#[from] DecodeError),
    /// The caller abandoned the call before the result was delivered.
    #[error("call cancelled by caller")]
    Cancelled,
    /// A one-shot call object was invoked twice.
    #[error("call already resolved")]
    AlreadyResolved,
}

impl CallError {
    /// Status envelope equivalent of this failure.
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            CallError::RequestSchema { .. } => {
                Status::new(StatusCode::InvalidArgument, self.to_string())
            }
            CallError::Status(status) => status.clone(),
            CallError::Decode(_) => Status::new(StatusCode::Internal, self.to_string()),
            CallError::Cancelled => Status::cancelled(self.to_string()),
            CallError::AlreadyResolved => {
                Status::new(StatusCode::FailedPrecondition, self.to_string())
            }
        }
    }
}

/// One unary call: `Idle -> Sent -> {Succeeded, Failed}`.
///
/// A call object is single-use. Concurrent calls are independent objects
/// sharing only the transport.
#[derive(Debug)]
pub struct UnaryCall {
    method: &'static MethodDescriptor,
    state: CallState,
    cancel: CancelToken,
}

impl UnaryCall {
    /// Prepare a call for `method`.
    #[must_use]
    pub fn new(method: &'static MethodDescriptor) -> Self {
        Self {
            method,
            state: CallState::Idle,
            cancel: CancelToken::new(),
        }
    }

    /// Method this call targets.
    #[must_use]
    pub fn method(&self) -> &'static MethodDescriptor {
        self.method
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> CallState {
        self.state
    }

    /// Token that abandons this call when cancelled.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Encode the request, hand it to the transport, and decode the
    /// response against the method's response schema.
    pub fn invoke<T: Transport + ?Sized>(
        &mut self,
        transport: &T,
        request: &DynamicMessage,
    ) -> Result<DynamicMessage, CallError> {
        if self.state != CallState::Idle {
            return Err(CallError::AlreadyResolved);
        }
        if !std::ptr::eq(request.descriptor(), self.method.request) {
            return Err(CallError::RequestSchema {
                method: self.method.name,
                expected: self.method.request.full_name,
                got: request.descriptor().full_name,
            });
        }
        if self.cancel.is_cancelled() {
            // Nothing was sent; the call dies without touching the wire.
            self.state = CallState::Failed;
            return Err(CallError::Cancelled);
        }

        let request_bytes = encode(request);
        debug!(
            "unary {} -> {} request bytes",
            self.method.path(),
            request_bytes.len()
        );
        self.state = CallState::Sent;

        let outcome = transport.unary(self.method, &request_bytes);
        if self.cancel.is_cancelled() {
            // The exchange may have completed on the wire; the result is
            // suppressed, not undone.
            self.state = CallState::Failed;
            return Err(CallError::Cancelled);
        }
        match outcome {
            Ok(response_bytes) => match decode(self.method.response, &response_bytes) {
                Ok(response) => {
                    debug!(
                        "unary {} <- {} response bytes",
                        self.method.path(),
                        response_bytes.len()
                    );
                    self.state = CallState::Succeeded;
                    Ok(response)
                }
                Err(err) => {
                    self.state = CallState::Failed;
                    Err(CallError::Decode(err))
                }
            },
            Err(status) => {
                debug!("unary {} failed: {}", self.method.path(), status);
                self.state = CallState::Failed;
                Err(CallError::Status(status))
            }
        }
    }
}

/// One-shot convenience wrapper over [`UnaryCall`].
pub fn unary<T: Transport + ?Sized>(
    transport: &T,
    method: &'static MethodDescriptor,
    request: &DynamicMessage,
) -> Result<DynamicMessage, CallError> {
    UnaryCall::new(method).invoke(transport, request)
}

/// Issue a server-streaming call, decoding each streamed payload against
/// the method's response schema.
pub fn server_streaming<'a, T: Transport + ?Sized>(
    transport: &'a T,
    method: &'static MethodDescriptor,
    request: &DynamicMessage,
) -> Result<StreamingResponses<'a>, CallError> {
    if !std::ptr::eq(request.descriptor(), method.request) {
        return Err(CallError::RequestSchema {
            method: method.name,
            expected: method.request.full_name,
            got: request.descriptor().full_name,
        });
    }
    let request_bytes = encode(request);
    debug!(
        "streaming {} -> {} request bytes",
        method.path(),
        request_bytes.len()
    );
    let frames = transport
        .server_streaming(method, &request_bytes)
        .map_err(CallError::Status)?;
    Ok(StreamingResponses { method, frames })
}

/// Iterator over decoded server-streaming responses.
pub struct StreamingResponses<'a> {
    method: &'static MethodDescriptor,
    frames: Box<dyn Iterator<Item = Result<Vec<u8>, Status>> + 'a>,
}

impl Iterator for StreamingResponses<'_> {
    type Item = Result<DynamicMessage, CallError>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.frames.next()?;
        Some(match frame {
            Ok(bytes) => decode(self.method.response, &bytes).map_err(CallError::Decode),
            Err(status) => Err(CallError::Status(status)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::MethodDescriptor;
    use proto_codec::{
        Cardinality, FieldDescriptor, FieldType, MessageDescriptor, ScalarType, Value,
    };

    static ECHO_REQUEST: MessageDescriptor = MessageDescriptor {
        full_name: "test.EchoRequest",
        fields: &[FieldDescriptor {
            number: 1,
            name: "payload",
            json_name: "payload",
            ty: FieldType::Scalar(ScalarType::String),
            cardinality: Cardinality::Singular,
            oneof: None,
        }],
        oneofs: &[],
    };

    static ECHO_RESPONSE: MessageDescriptor = MessageDescriptor {
        full_name: "test.EchoResponse",
        fields: &[FieldDescriptor {
            number: 1,
            name: "payload",
            json_name: "payload",
            ty: FieldType::Scalar(ScalarType::String),
            cardinality: Cardinality::Singular,
            oneof: None,
        }],
        oneofs: &[],
    };

    static ECHO: MethodDescriptor = MethodDescriptor {
        service: "test.Echo",
        name: "Echo",
        request: &ECHO_REQUEST,
        response: &ECHO_RESPONSE,
        server_streaming: false,
    };

    static ECHO_STREAM: MethodDescriptor = MethodDescriptor {
        service: "test.Echo",
        name: "EchoStream",
        request: &ECHO_REQUEST,
        response: &ECHO_RESPONSE,
        server_streaming: true,
    };

    /// Loops request bytes straight back as the response.
    struct LoopbackTransport;

    impl Transport for LoopbackTransport {
        fn unary(&self, _method: &MethodDescriptor, request: &[u8]) -> Result<Vec<u8>, Status> {
            Ok(request.to_vec())
        }

        fn server_streaming<'a>(
            &'a self,
            _method: &MethodDescriptor,
            request: &[u8],
        ) -> Result<Box<dyn Iterator<Item = Result<Vec<u8>, Status>> + 'a>, Status> {
            let first = request.to_vec();
            let second = request.to_vec();
            Ok(Box::new([Ok(first), Ok(second)].into_iter()))
        }
    }

    struct FailingTransport(Status);

    impl Transport for FailingTransport {
        fn unary(&self, _method: &MethodDescriptor, _request: &[u8]) -> Result<Vec<u8>, Status> {
            Err(self.0.clone())
        }
    }

    fn echo_request(text: &str) -> DynamicMessage {
        let mut request = DynamicMessage::new(&ECHO_REQUEST);
        request.set(1, Value::String(text.into())).unwrap();
        request
    }

    #[test]
    fn successful_call_walks_idle_sent_succeeded() {
        let mut call = UnaryCall::new(&ECHO);
        assert_eq!(call.state(), CallState::Idle);
        let response = call.invoke(&LoopbackTransport, &echo_request("hi")).unwrap();
        assert_eq!(call.state(), CallState::Succeeded);
        assert_eq!(response.get(1), Some(&Value::String("hi".into())));
    }

    #[test]
    fn transport_status_fails_the_call() {
        let transport = FailingTransport(Status::new(StatusCode::Unavailable, "try later"));
        let mut call = UnaryCall::new(&ECHO);
        let err = call.invoke(&transport, &echo_request("hi")).unwrap_err();
        assert_eq!(call.state(), CallState::Failed);
        assert_eq!(err.status().code, StatusCode::Unavailable);
    }

    #[test]
    fn wrong_request_schema_is_rejected_before_send() {
        let mut call = UnaryCall::new(&ECHO);
        let bogus = DynamicMessage::new(&ECHO_RESPONSE);
        let err = call.invoke(&LoopbackTransport, &bogus).unwrap_err();
        assert!(matches!(err, CallError::RequestSchema { .. }));
        assert_eq!(call.state(), CallState::Idle);
    }

    #[test]
    fn call_objects_are_single_use() {
        let mut call = UnaryCall::new(&ECHO);
        call.invoke(&LoopbackTransport, &echo_request("a")).unwrap();
        assert_eq!(
            call.invoke(&LoopbackTransport, &echo_request("b")),
            Err(CallError::AlreadyResolved)
        );
    }

    #[test]
    fn cancellation_suppresses_the_result() {
        let mut call = UnaryCall::new(&ECHO);
        call.cancel_token().cancel();
        let err = call.invoke(&LoopbackTransport, &echo_request("hi")).unwrap_err();
        assert_eq!(err, CallError::Cancelled);
        assert_eq!(call.state(), CallState::Failed);
    }

    #[test]
    fn undecodable_response_fails_the_call() {
        struct GarbageTransport;
        impl Transport for GarbageTransport {
            fn unary(&self, _m: &MethodDescriptor, _r: &[u8]) -> Result<Vec<u8>, Status> {
                // Tag for field 1, length-delimited, declared length 200.
                Ok(vec![0x0a, 200])
            }
        }
        let mut call = UnaryCall::new(&ECHO);
        let err = call.invoke(&GarbageTransport, &echo_request("hi")).unwrap_err();
        assert_eq!(call.state(), CallState::Failed);
        assert_eq!(err.status().code, StatusCode::Internal);
    }

    #[test]
    fn streaming_decodes_each_frame() {
        let responses: Vec<_> = server_streaming(&LoopbackTransport, &ECHO_STREAM, &echo_request("x"))
            .unwrap()
            .collect();
        assert_eq!(responses.len(), 2);
        for response in responses {
            assert_eq!(response.unwrap().get(1), Some(&Value::String("x".into())));
        }
    }

    #[test]
    fn streaming_default_is_unimplemented() {
        let err = server_streaming(&FailingTransport(Status::unimplemented("no")), &ECHO_STREAM, &echo_request("x"))
            .err()
            .expect("default streaming path errors");
        assert_eq!(err.status().code, StatusCode::Unimplemented);
    }
}
