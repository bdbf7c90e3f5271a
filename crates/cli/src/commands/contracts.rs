// Path: crates/cli/src/commands/contracts.rs

use crate::util::format_amount;
use anyhow::{Context, Result};
use clap::Parser;
use eicoop_client::WireClient;
use eicoop_types::schema::{Goal, PlayerGrade};

#[derive(Parser, Debug)]
pub struct ContractsArgs {
    /// Hide the tutorial contract and contracts without a coop roster.
    #[clap(long)]
    pub coop_only: bool,
}

fn goal_list(goals: &[Goal]) -> String {
    goals
        .iter()
        .map(|g| format_amount(g.target_amount))
        .collect::<Vec<_>>()
        .join(" / ")
}

pub async fn run(client: &WireClient, args: ContractsArgs) -> Result<()> {
    let contracts = client
        .list_current_contracts()
        .await
        .context("Failed to fetch current contracts")?;

    let shown: Vec<_> = contracts
        .iter()
        .filter(|c| !args.coop_only || c.is_coop_contract())
        .collect();
    println!("{} contract(s):", shown.len());

    for contract in shown {
        println!(
            "  {:<32} max coop size {:>2}  {}",
            contract.identifier, contract.max_coop_size, contract.name
        );
        for spec in &contract.grade_specs {
            let grade = PlayerGrade::from_wire(spec.grade).map_or("?", |g| g.label());
            println!("      grade {:<5} {}", grade, goal_list(&spec.goals));
        }
        for (league, set) in contract.goal_sets.iter().enumerate() {
            println!("      league {:<4} {}", league, goal_list(&set.goals));
        }
    }
    Ok(())
}
