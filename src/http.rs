//! HTTP JSON RPC transport.

use crate::{
    jsonrpc::{Request, Response},
    transport::{Transport, TransportError, TransportOptions},
};
use async_trait::async_trait;
use reqwest::Url;
use serde::{de::DeserializeOwned, Serialize};
use std::env;

/// An Ethereum RPC HTTP transport.
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
}

impl HttpTransport {
    /// Creates a new HTTP transport for the specified URL with the default
    /// HTTP client.
    pub fn new(url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Creates a new HTTP transport for the specified client instance and
    /// URL.
    pub fn with_client(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }

    /// Creates a new HTTP transport from the environment. This method uses
    /// the `NODE_URL` environment variable. This is useful for testing.
    ///
    /// # Panics
    ///
    /// This method panics if the environment variable is not present, or if
    /// it is not a valid HTTP url.
    pub fn from_env() -> Self {
        Self::new(
            env::var("NODE_URL")
                .expect("missing NODE_URL environment variable")
                .parse()
                .unwrap(),
        )
    }

    async fn roundtrip<P, R>(&self, payload: &P, options: &TransportOptions) -> Result<R, TransportError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let url = options.url.clone().unwrap_or_else(|| self.url.clone());
        let body = serde_json::to_string(payload)?;

        let mut request = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .body(body);
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(TransportError::Status(status, body));
        }

        let result = serde_json::from_str(&body)?;
        Ok(result)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: Request,
        options: &TransportOptions,
    ) -> Result<Response, TransportError> {
        tracing::debug!(method = %request.method, id = request.id.0, "sending request");
        self.roundtrip(&request, options).await
    }

    async fn send_batch(
        &self,
        requests: Vec<Request>,
        options: &TransportOptions,
    ) -> Result<Vec<Response>, TransportError> {
        tracing::debug!(count = requests.len(), "sending batch");
        self.roundtrip(&requests, options).await
    }
}
