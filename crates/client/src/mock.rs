// Path: crates/client/src/mock.rs

//! In-memory transport for tests.

use crate::codec;
use crate::transport::Transport;
use async_trait::async_trait;
use eicoop_types::{ResponseFraming, WireError};
use prost::Message;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// A canned reply replayed by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// A successful response with this body.
    Body(Vec<u8>),
    /// A non-success HTTP status.
    Status(u16),
    /// A transport-level failure.
    Failure(String),
}

/// A request observed by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub url: String,
    pub field: String,
    pub value: String,
}

impl RecordedCall {
    /// Decodes the record carried in the form value.
    pub fn decode<M: Message + Default>(&self) -> Result<M, WireError> {
        codec::decode_record(&codec::decode_payload(&self.value)?)
    }
}

/// Records every request and answers with queued responses in FIFO order.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: MockResponse) {
        lock(&self.responses).push_back(response);
    }

    pub fn push_body(&self, body: impl Into<Vec<u8>>) {
        self.push(MockResponse::Body(body.into()));
    }

    /// Queues `record` framed the way the backend would send it.
    pub fn push_record<M: Message>(&self, record: &M, framing: ResponseFraming) {
        self.push_body(codec::frame(record, framing));
    }

    pub fn push_status(&self, status: u16) {
        self.push(MockResponse::Status(status));
    }

    pub fn push_failure(&self, reason: impl Into<String>) {
        self.push(MockResponse::Failure(reason.into()));
    }

    /// Every request received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_form(&self, url: &str, field: &str, value: &str) -> Result<Vec<u8>, WireError> {
        lock(&self.calls).push(RecordedCall {
            url: url.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        });
        let next = lock(&self.responses).pop_front();
        match next {
            Some(MockResponse::Body(body)) => Ok(body),
            Some(MockResponse::Status(status)) => Err(WireError::Remote {
                status,
                body: String::new(),
            }),
            Some(MockResponse::Failure(reason)) => Err(WireError::Transport(reason)),
            None => Err(WireError::Transport(format!(
                "no canned response queued for {}",
                url
            ))),
        }
    }
}
