// Path: crates/cli/src/commands/first_contact.rs

use anyhow::{Context, Result};
use clap::Parser;
use eicoop_client::WireClient;
use eicoop_types::schema::PlayerGrade;

#[derive(Parser, Debug)]
pub struct FirstContactArgs {
    /// Player to look up; defaults to the configured user.
    #[clap(long)]
    pub user: Option<String>,
}

pub async fn run(client: &WireClient, args: FirstContactArgs) -> Result<()> {
    let resp = client
        .fetch_first_contact(args.user.as_deref())
        .await
        .context("Failed to fetch first contact")?;

    if resp.error_code != 0 {
        println!("Error {}: {}", resp.error_code, resp.error_message);
    }
    let Some(backup) = resp.backup else {
        println!("No backup returned.");
        return Ok(());
    };

    println!("Player {} ({})", backup.user_name, backup.ei_user_id);
    let active = backup.contracts.map(|c| c.contracts).unwrap_or_default();
    println!("  Active contracts: {}", active.len());
    for local in active {
        let id = local.contract.map(|c| c.identifier).unwrap_or_default();
        let grade = PlayerGrade::from_wire(local.grade).map_or("?", |g| g.label());
        println!(
            "    {:<32} coop {:<16} grade {:<5} league {}",
            id, local.coop_identifier, grade, local.league
        );
    }
    Ok(())
}
