// Path: crates/types/src/error.rs
//! Core error types for the eicoop client.

use crate::selector::VariantSelector;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors raised while exchanging records with the backend.
#[derive(Error, Debug)]
pub enum WireError {
    /// The request could not be delivered or the response could not be read
    /// (connection failure, timeout, truncated body).
    #[error("Transport error: {0}")]
    Transport(String),
    /// The backend answered with a non-success HTTP status.
    #[error("Remote error: HTTP {status}: {body}")]
    Remote {
        /// The HTTP status code.
        status: u16,
        /// A printable snippet of the response body.
        body: String,
    },
    /// The response payload was not a well-formed record.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ErrorCode for WireError {
    fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "WIRE_TRANSPORT_ERROR",
            Self::Remote { .. } => "WIRE_REMOTE_ERROR",
            Self::Parse(_) => "WIRE_PARSE_ERROR",
        }
    }
}

impl From<prost::DecodeError> for WireError {
    fn from(e: prost::DecodeError) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Configuration errors detected when a coop tracker is constructed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// The contract has no goal variant for the requested selector.
    #[error("Contract '{contract}' has no goal variant for {selector}")]
    VariantNotFound {
        /// The contract identifier.
        contract: String,
        /// The selector that was not found.
        selector: VariantSelector,
    },
    /// The selected goal variant exists but lists no goals.
    #[error("Contract '{contract}' lists no goals for {selector}")]
    EmptyGoals {
        /// The contract identifier.
        contract: String,
        /// The selector whose goal list is empty.
        selector: VariantSelector,
    },
}

impl ErrorCode for TrackerError {
    fn code(&self) -> &'static str {
        match self {
            Self::VariantNotFound { .. } => "CONFIGURATION_VARIANT_NOT_FOUND",
            Self::EmptyGoals { .. } => "CONFIGURATION_EMPTY_GOALS",
        }
    }
}
