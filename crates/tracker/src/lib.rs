// Path: crates/tracker/src/lib.rs
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

//! # eicoop Tracker
//!
//! Pure derived metrics over a coop snapshot: the effective shipping rate,
//! linear projections to the deadline and the finished / full / expired
//! predicates. Nothing here touches the network except
//! [`CoopTracker::get_status`], a pass-through to the wire client.

/// Correctly rounded, order-independent summation.
pub mod fsum;
/// The coop tracker and its projection report.
pub mod tracker;

pub use fsum::fsum;
pub use tracker::{CoopProjection, CoopTracker};
