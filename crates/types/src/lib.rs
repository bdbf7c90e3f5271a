// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # eicoop Types
//!
//! Foundational records shared by every crate in the workspace: the binary
//! wire schema, the goal-variant selector, the per-endpoint framing table,
//! error enums and client configuration.
//!
//! ## Architectural Role
//!
//! `eicoop-types` has no knowledge of HTTP or of derived metrics. The client
//! and tracker crates both depend on it, which keeps the record definitions in
//! one place.

/// Client configuration and its defaults.
pub mod config;
/// Error enums and the `ErrorCode` trait.
pub mod error;
/// Endpoints, protocol generations and response framing.
pub mod protocol;
/// Binary wire records.
pub mod schema;
/// The `VariantSelector` over grade- and league-indexed goal variants.
pub mod selector;

pub use config::ClientConfig;
pub use error::{ErrorCode, TrackerError, WireError};
pub use protocol::{BodyEncoding, Endpoint, Envelope, ProtocolGeneration, ResponseFraming};
pub use selector::VariantSelector;
