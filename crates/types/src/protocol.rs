// Path: crates/types/src/protocol.rs

//! Endpoints and per-endpoint response framing.
//!
//! Two generations of the backend protocol are in use. They agree on the
//! periodicals and coop-status endpoints but differ in request metadata and in
//! how the first-contact response body is framed. The framing is a static
//! table, never inferred from the bytes received.

use serde::{Deserialize, Serialize};

/// Backend endpoints used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Current contracts, events and sales.
    Periodicals,
    /// Live status of one coop.
    CoopStatus,
    /// Existence and joinability of one coop.
    QueryCoop,
    /// A player's account backup.
    FirstContact,
}

impl Endpoint {
    /// Name substituted into the base URL template.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Periodicals => "get_periodicals",
            Self::CoopStatus => "coop_status",
            Self::QueryCoop => "query_coop",
            Self::FirstContact => "bot_first_contact",
        }
    }
}

/// How the HTTP response body carries the binary payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// Radix-64 text with padding.
    Base64,
    /// The binary payload itself.
    Raw,
}

/// Whether the payload is the record itself or an `AuthenticatedMessage` around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// The payload is the typed record.
    Bare,
    /// The payload is an `AuthenticatedMessage` whose `message` is the typed record.
    Authenticated,
}

/// Complete decode strategy for one endpoint's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseFraming {
    /// Body encoding.
    pub encoding: BodyEncoding,
    /// Envelope shape.
    pub envelope: Envelope,
}

impl ResponseFraming {
    /// Base64 body carrying an `AuthenticatedMessage`.
    pub const AUTHENTICATED: Self = Self {
        encoding: BodyEncoding::Base64,
        envelope: Envelope::Authenticated,
    };
    /// Base64 body carrying the record directly.
    pub const BARE: Self = Self {
        encoding: BodyEncoding::Base64,
        envelope: Envelope::Bare,
    };
    /// Binary body carrying the record directly.
    pub const RAW: Self = Self {
        encoding: BodyEncoding::Raw,
        envelope: Envelope::Bare,
    };
}

/// Protocol generation spoken by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolGeneration {
    /// Grade-based generation: requests carry `BasicRequestInfo`.
    #[default]
    Graded,
    /// League-based generation: no request metadata, raw first-contact bodies.
    Leagued,
}

impl ProtocolGeneration {
    /// Response framing of `endpoint` in this generation.
    pub fn framing(&self, endpoint: Endpoint) -> ResponseFraming {
        match (self, endpoint) {
            (_, Endpoint::Periodicals) | (_, Endpoint::CoopStatus) => {
                ResponseFraming::AUTHENTICATED
            }
            (_, Endpoint::QueryCoop) => ResponseFraming::BARE,
            (Self::Graded, Endpoint::FirstContact) => ResponseFraming::BARE,
            (Self::Leagued, Endpoint::FirstContact) => ResponseFraming::RAW,
        }
    }

    /// Whether coop and first-contact requests carry a `BasicRequestInfo`.
    pub fn attaches_request_info(&self) -> bool {
        matches!(self, Self::Graded)
    }
}
