// Path: crates/client/src/lib.rs
//! # eicoop Client Crate Lints
//!
//! This crate enforces a strict set of lints to ensure panic-free code.
//! Panics are disallowed in non-test code to promote robust error handling.
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

//! # eicoop Client
//!
//! Builds typed request records, posts them as text-safe encoded form data and
//! decodes the (bare or authenticated) binary responses into typed records.

pub mod codec;
pub mod mock;
pub mod transport;
pub mod wire;

// Re-export for convenience
pub use mock::MockTransport;
pub use transport::{HttpTransport, Transport};
pub use wire::WireClient;
