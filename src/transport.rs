//! Pluggable wire transport.

use crate::jsonrpc::{Request, Response};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::{collections::VecDeque, sync::Mutex, time::Duration};
use thiserror::Error;

/// Options handed through to the transport on every send, untouched by the
/// client itself.
#[derive(Clone, Debug, Default)]
pub struct TransportOptions {
    /// Overrides the endpoint the transport was constructed with.
    pub url: Option<Url>,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
}

/// A wire transport capable of sending one request or one batch of requests.
///
/// Implementations own connection pooling, timeouts, and wire-level retries.
/// The client performs no retrying of its own and assumes nothing about the
/// order in which batch responses come back.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a single request and returns its single response.
    async fn send(
        &self,
        request: Request,
        options: &TransportOptions,
    ) -> Result<Response, TransportError>;

    /// Sends a batch of requests and returns the node's responses in whatever
    /// order they arrived.
    async fn send_batch(
        &self,
        requests: Vec<Request>,
        options: &TransportOptions,
    ) -> Result<Vec<Response>, TransportError>;
}

/// A transport level failure.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}: {1}")]
    Status(StatusCode, String),
    #[error("{0}")]
    Other(String),
}

/// A scripted transport for exercising client behavior without a node.
///
/// Every send pops the next scripted outcome in script order. Sent requests
/// are recorded in their serialized form so tests can assert the exact wire
/// shapes the client produced.
#[derive(Default)]
pub struct MockTransport {
    scripts: Mutex<VecDeque<Result<Vec<Response>, TransportError>>>,
    requests: Mutex<Vec<Value>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the responses returned by an upcoming send.
    pub fn script(&self, responses: Vec<Response>) {
        self.scripts
            .lock()
            .expect("mock transport lock poisoned")
            .push_back(Ok(responses));
    }

    /// Scripts a transport failure for an upcoming send.
    pub fn script_error(&self, error: TransportError) {
        self.scripts
            .lock()
            .expect("mock transport lock poisoned")
            .push_back(Err(error));
    }

    /// Returns every payload sent so far. Single requests are recorded as
    /// objects and batches as arrays, exactly as they would appear on the
    /// wire.
    pub fn requests(&self) -> Vec<Value> {
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .clone()
    }

    /// Returns the number of sends performed.
    pub fn calls(&self) -> usize {
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .len()
    }

    fn pop(&self) -> Result<Vec<Response>, TransportError> {
        self.scripts
            .lock()
            .expect("mock transport lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".to_owned())))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        request: Request,
        _options: &TransportOptions,
    ) -> Result<Response, TransportError> {
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .push(serde_json::to_value(&request)?);

        let mut responses = self.pop()?;
        if responses.len() != 1 {
            return Err(TransportError::Other(format!(
                "scripted {} responses for a single request",
                responses.len(),
            )));
        }
        Ok(responses.remove(0))
    }

    async fn send_batch(
        &self,
        requests: Vec<Request>,
        _options: &TransportOptions,
    ) -> Result<Vec<Response>, TransportError> {
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .push(serde_json::to_value(&requests)?);
        self.pop()
    }
}
