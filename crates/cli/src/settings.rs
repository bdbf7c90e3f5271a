// Path: crates/cli/src/settings.rs

use anyhow::{anyhow, Context, Result};
use clap::Args;
use eicoop_types::config::{DEFAULT_BASE_URL, DEFAULT_CLIENT_VERSION};
use eicoop_types::{ClientConfig, ProtocolGeneration};
use std::fs;
use std::path::PathBuf;

/// Where and as whom to talk to the backend.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// TOML file providing `user_id` and optionally `base_url`, `client_version`,
    /// `timeout_secs` and `protocol`. Flags override its values.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL; `{}` is replaced by the endpoint name.
    #[clap(long, env = "EI_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Player identifier to act as.
    #[clap(long, env = "EI_USER_ID", global = true)]
    pub user_id: Option<String>,

    /// Client protocol version.
    #[clap(long, global = true)]
    pub client_version: Option<u32>,

    /// Per-request timeout in seconds.
    #[clap(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Protocol generation spoken by the backend: `graded` or `leagued`.
    #[clap(long, value_parser = parse_protocol, global = true)]
    pub protocol: Option<ProtocolGeneration>,
}

fn parse_protocol(s: &str) -> Result<ProtocolGeneration, String> {
    match s.to_ascii_lowercase().as_str() {
        "graded" => Ok(ProtocolGeneration::Graded),
        "leagued" => Ok(ProtocolGeneration::Leagued),
        other => Err(format!(
            "unknown protocol '{}', expected 'graded' or 'leagued'",
            other
        )),
    }
}

impl ConnectionArgs {
    /// Builds the client configuration: the config file first, then flags.
    pub fn resolve(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                toml::from_str::<ClientConfig>(&raw)
                    .with_context(|| format!("Invalid config file {}", path.display()))?
            }
            None => {
                let user_id = self.user_id.clone().ok_or_else(|| {
                    anyhow!("A user id is required: pass --user-id, set EI_USER_ID or use --config")
                })?;
                ClientConfig::new(DEFAULT_BASE_URL, user_id, DEFAULT_CLIENT_VERSION)
            }
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(user_id) = &self.user_id {
            config.user_id = user_id.clone();
        }
        if let Some(version) = self.client_version {
            config.client_version = version;
        }
        if let Some(timeout) = self.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(protocol) = self.protocol {
            config.protocol = protocol;
        }
        Ok(config)
    }
}
