// Path: crates/client/src/transport.rs

use async_trait::async_trait;
use eicoop_types::WireError;
use reqwest::Client;
use std::time::Duration;

/// Maximum number of characters of an error body carried in a `WireError::Remote`.
const ERROR_SNIPPET_CHARS: usize = 160;

/// The HTTP boundary of the wire client.
///
/// One implementation is created per process and shared by every client, so
/// connection pooling belongs to the implementation, not to its callers.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs a single url-encoded form field to `url` and returns the raw
    /// response body of a 2xx response.
    async fn post_form(&self, url: &str, field: &str, value: &str) -> Result<Vec<u8>, WireError>;
}

/// `reqwest`-backed transport with a fixed per-request timeout.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a pooled HTTP client (HTTP/2 negotiated where the server offers it).
    pub fn new(timeout: Duration) -> Result<Self, WireError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WireError::Transport(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest` client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, field: &str, value: &str) -> Result<Vec<u8>, WireError> {
        let resp = self
            .client
            .post(url)
            .form(&[(field, value)])
            .send()
            .await
            .map_err(|e| WireError::Transport(format!("POST {} failed: {}", url, e)))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| WireError::Transport(format!("reading body from {} failed: {}", url, e)))?;

        if !status.is_success() {
            tracing::debug!(
                target: "transport",
                "HTTP {} from {}; body='{}'",
                status.as_u16(),
                url,
                ascii_snippet(&body)
            );
            return Err(WireError::Remote {
                status: status.as_u16(),
                body: ascii_snippet(&body),
            });
        }
        Ok(body.to_vec())
    }
}

/// Printable, single-line prefix of a response body for error reporting.
fn ascii_snippet(bytes: &[u8]) -> String {
    let s = String::from_utf8_lossy(bytes);
    s.trim()
        .chars()
        .take(ERROR_SNIPPET_CHARS)
        .collect::<String>()
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
