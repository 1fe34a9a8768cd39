// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Provide typed service clients over the unary call layer.
// Author: Lukas Bower

//! Typed clients for the four API services. Each client is a thin wrapper:
//! one method per RPC, delegating to the unary (or streaming) call path
//! with the right method descriptor. Clients own no connection state; the
//! transport handles sockets, credentials, and retries.

use std::thread;
use std::time::Duration;

use log::debug;
use proto_codec::{DynamicMessage, Value};
use proto_rpc::{
    server_streaming, unary, CallError, Status, StatusCode, StreamingResponses, Transport,
};
use serde::Deserialize;

use crate::names;
use crate::schema::longrunning;
use crate::services;

/// Client-side polling policy for long-running operations.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PollPolicy {
    /// Delay between polls, in milliseconds.
    pub interval_ms: u64,
    /// Number of polls before giving up with `DEADLINE_EXCEEDED`.
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval_ms: 1_000,
            max_attempts: 60,
        }
    }
}

/// Deployment-facing client configuration, loadable from JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Service endpoint the transport should dial.
    pub endpoint: String,
    /// Default parent resource (`projects/...` etc.) for convenience calls.
    pub default_parent: Option<String>,
    /// Long-running operation polling policy.
    pub poll: PollPolicy,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: "logging.googleapis.com".to_owned(),
            default_parent: None,
            poll: PollPolicy::default(),
        }
    }
}

type CallResult = Result<DynamicMessage, CallError>;

/// Client for `google.logging.v2.LoggingServiceV2`.
#[derive(Debug)]
pub struct LoggingClient<T: Transport> {
    transport: T,
    options: ClientOptions,
}

impl<T: Transport> LoggingClient<T> {
    /// Create a client with default options.
    pub fn new(transport: T) -> Self {
        Self::with_options(transport, ClientOptions::default())
    }

    /// Create a client with explicit options.
    pub fn with_options(transport: T, options: ClientOptions) -> Self {
        Self { transport, options }
    }

    /// Delete all entries of a log.
    pub fn delete_log(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::DELETE_LOG, request)
    }

    /// Write a batch of log entries.
    pub fn write_log_entries(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::WRITE_LOG_ENTRIES, request)
    }

    /// List entries matching a filter.
    pub fn list_log_entries(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::LIST_LOG_ENTRIES, request)
    }

    /// List the monitored resource descriptors the service knows.
    pub fn list_monitored_resource_descriptors(&self, request: &DynamicMessage) -> CallResult {
        unary(
            &self.transport,
            &services::LIST_MONITORED_RESOURCE_DESCRIPTORS,
            request,
        )
    }

    /// List log names under a parent resource.
    pub fn list_logs(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::LIST_LOGS, request)
    }

    /// Live-tail entries (server streaming).
    pub fn tail_log_entries(
        &self,
        request: &DynamicMessage,
    ) -> Result<StreamingResponses<'_>, CallError> {
        server_streaming(&self.transport, &services::TAIL_LOG_ENTRIES, request)
    }

    /// Convenience write against the configured default parent: builds the
    /// `WriteLogEntriesRequest` with `{parent}/logs/{log_id}` and the given
    /// entries.
    pub fn write(&self, log_id: &str, entries: Vec<DynamicMessage>) -> CallResult {
        let parent = self.options.default_parent.as_deref().ok_or_else(|| {
            CallError::Status(Status::new(
                StatusCode::InvalidArgument,
                "no default parent configured",
            ))
        })?;
        let log_name = names::format_log_name(parent, log_id).map_err(|err| {
            CallError::Status(Status::new(StatusCode::InvalidArgument, err.to_string()))
        })?;
        let mut request = DynamicMessage::new(&crate::schema::logging::WRITE_LOG_ENTRIES_REQUEST);
        request
            .set(1, Value::String(log_name))
            .expect("log_name is a string field");
        for entry in entries {
            request
                .push(4, Value::Message(entry))
                .map_err(|err| {
                    CallError::Status(Status::new(StatusCode::InvalidArgument, err.to_string()))
                })?;
        }
        self.write_log_entries(&request)
    }

    /// Iterate response pages of `ListLogEntries`, chasing `next_page_token`
    /// until the service returns an empty token.
    pub fn list_log_entries_pages(&self, request: DynamicMessage) -> EntryPages<'_, T> {
        EntryPages {
            client: self,
            request,
            done: false,
        }
    }
}

/// Iterator over `ListLogEntries` response pages.
#[derive(Debug)]
pub struct EntryPages<'a, T: Transport> {
    client: &'a LoggingClient<T>,
    request: DynamicMessage,
    done: bool,
}

impl<T: Transport> Iterator for EntryPages<'_, T> {
    type Item = CallResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.client.list_log_entries(&self.request) {
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
            Ok(page) => {
                let token = match page.get_by_name("next_page_token") {
                    Some(Value::String(token)) if !token.is_empty() => token.clone(),
                    _ => {
                        self.done = true;
                        return Some(Ok(page));
                    }
                };
                debug!("following next_page_token ({} bytes)", token.len());
                self.request
                    .set_by_name("page_token", Value::String(token))
                    .expect("page_token is a string field");
                Some(Ok(page))
            }
        }
    }
}

/// Client for `google.logging.v2.ConfigServiceV2`.
#[derive(Debug)]
pub struct ConfigClient<T: Transport> {
    transport: T,
}

impl<T: Transport> ConfigClient<T> {
    /// Create a client.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// List buckets under a parent.
    pub fn list_buckets(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::LIST_BUCKETS, request)
    }

    /// Fetch one bucket.
    pub fn get_bucket(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::GET_BUCKET, request)
    }

    /// Create a bucket.
    pub fn create_bucket(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::CREATE_BUCKET, request)
    }

    /// Update a bucket.
    pub fn update_bucket(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::UPDATE_BUCKET, request)
    }

    /// Delete a bucket.
    pub fn delete_bucket(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::DELETE_BUCKET, request)
    }

    /// Undelete a recently deleted bucket.
    pub fn undelete_bucket(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::UNDELETE_BUCKET, request)
    }

    /// List views on a bucket.
    pub fn list_views(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::LIST_VIEWS, request)
    }

    /// Fetch one view.
    pub fn get_view(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::GET_VIEW, request)
    }

    /// Create a view.
    pub fn create_view(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::CREATE_VIEW, request)
    }

    /// Update a view.
    pub fn update_view(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::UPDATE_VIEW, request)
    }

    /// Delete a view.
    pub fn delete_view(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::DELETE_VIEW, request)
    }

    /// List sinks under a parent.
    pub fn list_sinks(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::LIST_SINKS, request)
    }

    /// Fetch one sink.
    pub fn get_sink(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::GET_SINK, request)
    }

    /// Create a sink.
    pub fn create_sink(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::CREATE_SINK, request)
    }

    /// Update a sink.
    pub fn update_sink(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::UPDATE_SINK, request)
    }

    /// Delete a sink.
    pub fn delete_sink(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::DELETE_SINK, request)
    }

    /// List exclusions under a parent.
    pub fn list_exclusions(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::LIST_EXCLUSIONS, request)
    }

    /// Fetch one exclusion.
    pub fn get_exclusion(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::GET_EXCLUSION, request)
    }

    /// Create an exclusion.
    pub fn create_exclusion(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::CREATE_EXCLUSION, request)
    }

    /// Update an exclusion.
    pub fn update_exclusion(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::UPDATE_EXCLUSION, request)
    }

    /// Delete an exclusion.
    pub fn delete_exclusion(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::DELETE_EXCLUSION, request)
    }

    /// Fetch CMEK settings for a resource.
    pub fn get_cmek_settings(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::GET_CMEK_SETTINGS, request)
    }

    /// Update CMEK settings for a resource.
    pub fn update_cmek_settings(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::UPDATE_CMEK_SETTINGS, request)
    }

    /// Fetch organisation-level settings.
    pub fn get_settings(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::GET_SETTINGS, request)
    }

    /// Update organisation-level settings.
    pub fn update_settings(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::UPDATE_SETTINGS, request)
    }

    /// Start the long-running copy of log entries; returns an `Operation`
    /// to poll via [`OperationsClient`].
    pub fn copy_log_entries(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::COPY_LOG_ENTRIES, request)
    }
}

/// Client for `google.logging.v2.MetricsServiceV2`.
#[derive(Debug)]
pub struct MetricsClient<T: Transport> {
    transport: T,
}

impl<T: Transport> MetricsClient<T> {
    /// Create a client.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// List log-based metrics under a parent.
    pub fn list_log_metrics(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::LIST_LOG_METRICS, request)
    }

    /// Fetch one metric.
    pub fn get_log_metric(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::GET_LOG_METRIC, request)
    }

    /// Create a metric.
    pub fn create_log_metric(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::CREATE_LOG_METRIC, request)
    }

    /// Update a metric.
    pub fn update_log_metric(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::UPDATE_LOG_METRIC, request)
    }

    /// Delete a metric.
    pub fn delete_log_metric(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::DELETE_LOG_METRIC, request)
    }
}

/// Client for the generic `google.longrunning.Operations` service.
#[derive(Debug)]
pub struct OperationsClient<T: Transport> {
    transport: T,
    poll: PollPolicy,
}

impl<T: Transport> OperationsClient<T> {
    /// Create a client with the default polling policy.
    pub fn new(transport: T) -> Self {
        Self::with_poll_policy(transport, PollPolicy::default())
    }

    /// Create a client with an explicit polling policy.
    pub fn with_poll_policy(transport: T, poll: PollPolicy) -> Self {
        Self { transport, poll }
    }

    /// List operations matching a filter.
    pub fn list_operations(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::LIST_OPERATIONS, request)
    }

    /// Fetch the latest state of one operation.
    pub fn get_operation(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::GET_OPERATION, request)
    }

    /// Delete a finished operation record.
    pub fn delete_operation(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::DELETE_OPERATION, request)
    }

    /// Request cancellation of a running operation.
    pub fn cancel_operation(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::CANCEL_OPERATION, request)
    }

    /// Block server-side until the operation resolves or the timeout lapses.
    pub fn wait_operation(&self, request: &DynamicMessage) -> CallResult {
        unary(&self.transport, &services::WAIT_OPERATION, request)
    }

    /// Poll `GetOperation` until `done` is set, on a fixed interval with an
    /// attempt budget. Failed RPCs are not retried; retry of transient
    /// transport failures stays with the transport.
    pub fn poll_until_done(&self, operation_name: &str) -> CallResult {
        for attempt in 1..=self.poll.max_attempts {
            let mut request = DynamicMessage::new(&longrunning::GET_OPERATION_REQUEST);
            request
                .set(1, Value::String(operation_name.to_owned()))
                .expect("name is a string field");
            let operation = self.get_operation(&request)?;
            if matches!(operation.get_by_name("done"), Some(Value::Bool(true))) {
                return Ok(operation);
            }
            debug!("operation {operation_name} pending after poll {attempt}");
            if attempt < self.poll.max_attempts {
                thread::sleep(Duration::from_millis(self.poll.interval_ms));
            }
        }
        Err(CallError::Status(Status::new(
            StatusCode::DeadlineExceeded,
            format!(
                "operation {operation_name} still pending after {} polls",
                self.poll.max_attempts
            ),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{logging, longrunning};
    use proto_codec::encode;
    use proto_rpc::MethodDescriptor;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays a scripted sequence of responses, recording what was sent.
    struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<Vec<u8>, Status>>>,
        sent: RefCell<Vec<(String, Vec<u8>)>>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<Result<Vec<u8>, Status>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for ScriptedTransport {
        fn unary(&self, method: &MethodDescriptor, request: &[u8]) -> Result<Vec<u8>, Status> {
            self.sent
                .borrow_mut()
                .push((method.path(), request.to_vec()));
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(Status::new(StatusCode::Internal, "script exhausted")))
        }
    }

    fn entries_page(token: &str, names: &[&str]) -> Vec<u8> {
        let mut page = DynamicMessage::new(&logging::LIST_LOG_ENTRIES_RESPONSE);
        for name in names {
            let mut entry = DynamicMessage::new(&logging::LOG_ENTRY);
            entry
                .set_by_name("log_name", Value::String((*name).to_owned()))
                .unwrap();
            page.push(1, Value::Message(entry)).unwrap();
        }
        if !token.is_empty() {
            page.set(2, Value::String(token.to_owned())).unwrap();
        }
        encode(&page)
    }

    #[test]
    fn pagination_chases_tokens_until_empty() {
        let transport = ScriptedTransport::new(vec![
            Ok(entries_page("more", &["projects/p/logs/a"])),
            Ok(entries_page("", &["projects/p/logs/b"])),
        ]);
        let client = LoggingClient::new(transport);
        let request = DynamicMessage::new(&logging::LIST_LOG_ENTRIES_REQUEST);
        let pages: Vec<_> = client
            .list_log_entries_pages(request)
            .collect::<Result<_, _>>()
            .expect("both pages succeed");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].repeated(1).len(), 1);
        assert_eq!(pages[1].repeated(1).len(), 1);
    }

    #[test]
    fn pagination_stops_after_an_error() {
        let transport = ScriptedTransport::new(vec![Err(Status::new(
            StatusCode::PermissionDenied,
            "nope",
        ))]);
        let client = LoggingClient::new(transport);
        let request = DynamicMessage::new(&logging::LIST_LOG_ENTRIES_REQUEST);
        let mut pages = client.list_log_entries_pages(request);
        assert!(pages.next().expect("one item").is_err());
        assert!(pages.next().is_none());
    }

    #[test]
    fn write_builds_the_qualified_log_name() {
        let response = encode(&DynamicMessage::new(&logging::WRITE_LOG_ENTRIES_RESPONSE));
        let transport = ScriptedTransport::new(vec![Ok(response)]);
        let options = ClientOptions {
            default_parent: Some("projects/demo".to_owned()),
            ..ClientOptions::default()
        };
        let client = LoggingClient::with_options(transport, options);
        let entry = crate::entry::EntryBuilder::new().text_payload("hi").build();
        client.write("app", vec![entry]).expect("write succeeds");

        let sent = client.transport.sent.borrow();
        let (path, bytes) = &sent[0];
        assert_eq!(path, "/google.logging.v2.LoggingServiceV2/WriteLogEntries");
        let request =
            proto_codec::decode(&logging::WRITE_LOG_ENTRIES_REQUEST, bytes).expect("decode");
        assert_eq!(
            request.get_by_name("log_name"),
            Some(&Value::String("projects/demo/logs/app".to_owned()))
        );
        assert_eq!(request.repeated(4).len(), 1);
    }

    #[test]
    fn write_without_parent_is_invalid_argument() {
        let client = LoggingClient::new(ScriptedTransport::new(vec![]));
        let err = client.write("app", vec![]).unwrap_err();
        assert_eq!(err.status().code, StatusCode::InvalidArgument);
    }

    fn operation(done: bool) -> Vec<u8> {
        let mut operation = DynamicMessage::new(&longrunning::OPERATION);
        operation
            .set_by_name("name", Value::String("operations/copy-1".to_owned()))
            .unwrap();
        if done {
            operation.set_by_name("done", Value::Bool(true)).unwrap();
        }
        encode(&operation)
    }

    #[test]
    fn poll_until_done_stops_on_done() {
        let transport =
            ScriptedTransport::new(vec![Ok(operation(false)), Ok(operation(true))]);
        let client = OperationsClient::with_poll_policy(
            transport,
            PollPolicy {
                interval_ms: 0,
                max_attempts: 5,
            },
        );
        let resolved = client.poll_until_done("operations/copy-1").expect("done");
        assert_eq!(resolved.get_by_name("done"), Some(&Value::Bool(true)));
    }

    #[test]
    fn poll_until_done_exhausts_its_budget() {
        let transport =
            ScriptedTransport::new(vec![Ok(operation(false)), Ok(operation(false))]);
        let client = OperationsClient::with_poll_policy(
            transport,
            PollPolicy {
                interval_ms: 0,
                max_attempts: 2,
            },
        );
        let err = client.poll_until_done("operations/copy-1").unwrap_err();
        assert_eq!(err.status().code, StatusCode::DeadlineExceeded);
    }
}
