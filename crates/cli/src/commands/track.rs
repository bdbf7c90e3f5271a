// Path: crates/cli/src/commands/track.rs

use crate::commands::coop::CoopArgs;
use crate::util::{format_amount, format_duration};
use anyhow::{Context, Result};
use clap::Parser;
use eicoop_client::WireClient;
use eicoop_tracker::CoopTracker;
use eicoop_types::VariantSelector;

#[derive(Parser, Debug)]
pub struct TrackArgs {
    #[clap(flatten)]
    pub coop: CoopArgs,
    /// Goal variant the coop plays. Inferred from the coop creator's grade when omitted.
    pub selector: Option<VariantSelector>,
    /// Print the projection as JSON.
    #[clap(long)]
    pub json: bool,
}

pub async fn run(client: &WireClient, args: TrackArgs) -> Result<()> {
    let CoopArgs { contract, coop } = args.coop;

    let selector = match args.selector {
        Some(selector) => selector,
        None => {
            let grade = client
                .coop_grade(&contract, &coop)
                .await
                .context("No selector given and the coop grade could not be inferred")?;
            tracing::info!(target: "cli", grade = grade.label(), "inferred coop grade from its creator");
            VariantSelector::ByGrade(grade)
        }
    };

    let definition = client
        .list_current_contracts()
        .await
        .context("Failed to fetch current contracts")?
        .into_iter()
        .find(|c| c.identifier == contract)
        .with_context(|| format!("Contract '{}' is not currently offered", contract))?;

    let tracker = CoopTracker::new(definition, coop, selector)?;
    let snapshot = tracker
        .get_status(client)
        .await
        .context("Failed to fetch coop status")?;
    let p = tracker.project(&snapshot);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&p)?);
        return Ok(());
    }

    println!("Coop {} ({}, {})", p.coop_code, p.contract_id, p.selector);
    println!("  Contributors: {}/{}{}", p.contributors, p.max_coop_size, if p.is_full { " (full)" } else { "" });
    println!("  Delivered: {} of {}", format_amount(p.total_amount), format_amount(p.highest_goal));
    println!("  Effective rate: {}/s", format_amount(p.effective_shipping_rate));
    println!("  Projected at deadline: {}", format_amount(p.projected_final_amount));
    println!("  Time left: {}", format_duration(p.seconds_remaining));
    println!("  Time to finish: {}", format_duration(p.seconds_until_finished));
    let verdict = if p.is_finished {
        "finished"
    } else if p.has_time_run_out {
        "out of time"
    } else if p.will_finish {
        "on track"
    } else {
        "behind"
    };
    println!("  Status: {}", verdict);
    Ok(())
}
