// Path: crates/cli/src/commands/mod.rs

pub mod contracts;
pub mod coop;
pub mod first_contact;
pub mod track;
