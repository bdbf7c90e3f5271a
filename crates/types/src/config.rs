// Path: crates/types/src/config.rs

//! Client configuration.
use crate::protocol::ProtocolGeneration;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL template of the public backend; `{}` is replaced by the endpoint name.
pub const DEFAULT_BASE_URL: &str = "https://www.auxbrain.com/ei/{}";
/// Client protocol version sent with every request.
pub const DEFAULT_CLIENT_VERSION: u32 = 47;
/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Settings a `WireClient` is constructed from. Immutable for the client's lifetime.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL, either a template containing `{}` or a prefix the endpoint is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Opaque identifier of the player the client acts as.
    pub user_id: String,
    /// Client protocol version.
    #[serde(default = "default_client_version")]
    pub client_version: u32,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Protocol generation spoken by the backend.
    #[serde(default)]
    pub protocol: ProtocolGeneration,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_client_version() -> u32 {
    DEFAULT_CLIENT_VERSION
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Configuration with the default timeout and protocol generation.
    pub fn new(base_url: impl Into<String>, user_id: impl Into<String>, client_version: u32) -> Self {
        Self {
            base_url: base_url.into(),
            user_id: user_id.into(),
            client_version,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            protocol: ProtocolGeneration::default(),
        }
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
