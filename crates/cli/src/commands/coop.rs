// Path: crates/cli/src/commands/coop.rs

use crate::util::{format_amount, format_duration};
use anyhow::{Context, Result};
use clap::Parser;
use eicoop_client::WireClient;
use eicoop_types::VariantSelector;

#[derive(Parser, Debug)]
pub struct CoopArgs {
    /// Contract identifier.
    pub contract: String,
    /// Coop code.
    pub coop: String,
}

#[derive(Parser, Debug)]
pub struct QueryArgs {
    #[clap(flatten)]
    pub coop: CoopArgs,
    /// Grade (C, B, A, AA, AAA) or league (league-0 is elite) of the asking player.
    pub selector: VariantSelector,
}

pub async fn status(client: &WireClient, args: CoopArgs) -> Result<()> {
    let status = client
        .fetch_coop_status(&args.contract, &args.coop)
        .await
        .with_context(|| format!("Failed to fetch status of {}/{}", args.contract, args.coop))?;

    println!("Coop {} ({})", status.coop_identifier, status.contract_identifier);
    println!("  Creator: {}", status.creator_id);
    println!("  Total: {}", format_amount(status.total_amount));
    println!("  Time left: {}", format_duration(status.seconds_remaining));
    println!("  Contributors: {}", status.contributors.len());
    for c in &status.contributors {
        println!(
            "    {:<24} {:>10} delivered  {:>10}/s reported  {:>10}/s cap{}",
            c.user_name,
            format_amount(c.contribution_amount),
            format_amount(c.contribution_rate),
            format_amount(c.shipping_rate_cap()),
            if c.active { "" } else { "  (inactive)" }
        );
    }
    Ok(())
}

pub async fn query(client: &WireClient, args: QueryArgs) -> Result<()> {
    let resp = client
        .query_coop(&args.coop.contract, &args.coop.coop, args.selector)
        .await
        .context("Failed to query coop")?;

    println!("Coop {} ({}), {}:", args.coop.coop, args.coop.contract, args.selector);
    println!("  Exists: {}", resp.exists);
    println!("  Full: {}", resp.full);
    println!("  Expired: {}", resp.expired);
    println!("  Banned: {}", resp.banned);
    println!("  Different league: {}", resp.different_league);
    println!("  Different grade: {}", resp.different_grade);
    Ok(())
}

pub async fn grade(client: &WireClient, args: CoopArgs) -> Result<()> {
    let grade = client
        .coop_grade(&args.contract, &args.coop)
        .await
        .context("Failed to infer coop grade")?;
    println!(
        "Coop {} ({}) appears to play grade {} (taken from its creator's account)",
        args.coop,
        args.contract,
        grade.label()
    );
    Ok(())
}
