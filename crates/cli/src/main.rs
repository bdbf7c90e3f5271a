// Path: crates/cli/src/main.rs
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

//! # eicoop CLI
//!
//! Queries the game backend for contracts and coops and projects coop progress.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eicoop_client::{HttpTransport, WireClient};
use std::sync::Arc;

mod commands;
mod settings;
mod util;

use commands::*;

#[derive(Parser, Debug)]
#[clap(
    name = "eicoop",
    version,
    about = "Query coops on the game backend and project their progress.",
    long_about = "eicoop talks to the game backend's binary endpoints to list contracts, inspect coops and project whether a coop will reach its highest goal before the deadline."
)]
struct Cli {
    #[clap(flatten)]
    connection: settings::ConnectionArgs,

    /// Emit logs as JSON lines on stderr.
    #[clap(long, global = true)]
    json_logs: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the contracts currently offered.
    Contracts(contracts::ContractsArgs),

    /// Show the live status of a coop.
    Status(coop::CoopArgs),

    /// Check whether a coop exists and can be joined.
    Query(coop::QueryArgs),

    /// Infer a coop's grade from its creator's account.
    Grade(coop::CoopArgs),

    /// Fetch a player's account backup.
    FirstContact(first_contact::FirstContactArgs),

    /// Project a coop's progress to its deadline.
    Track(track::TrackArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    eicoop_telemetry::init_tracing(cli.json_logs)?;

    let config = cli.connection.resolve()?;
    // One transport per process; every client shares its connection pool.
    let transport = Arc::new(
        HttpTransport::new(config.timeout()).context("Failed to initialise HTTP transport")?,
    );
    tracing::debug!(target: "cli", base_url = %config.base_url, protocol = ?config.protocol, "client configured");
    let client = WireClient::new(transport, config);

    match cli.command {
        Commands::Contracts(args) => contracts::run(&client, args).await,
        Commands::Status(args) => coop::status(&client, args).await,
        Commands::Query(args) => coop::query(&client, args).await,
        Commands::Grade(args) => coop::grade(&client, args).await,
        Commands::FirstContact(args) => first_contact::run(&client, args).await,
        Commands::Track(args) => track::run(&client, args).await,
    }
}
