//! 2x2 normal-form game solver.
//!
//! Finds Nash equilibria (pure and mixed) and non-myopic equilibria for a
//! 2x2 game supplied by flag, example, or interactive entry.

use clap::Parser;
use ng_solver::*;

#[derive(Parser)]
#[command(name = "solve", about = "Find Nash and non-myopic equilibria of a 2x2 game")]
struct Args {
    /// Payoff matrix as four "p1,p2" cells in row-major order.
    #[arg(long)]
    matrix: Option<String>,
    /// Solve the built-in Prisoner's Dilemma example.
    #[arg(long)]
    example: bool,
    /// Emit machine-readable JSON instead of formatted text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    ng_core::log();
    let args = Args::parse();
    let game = ng_cli::resolve(
        args.matrix.as_deref(),
        args.example,
        ng_cli::dilemma,
        "Prisoner's Dilemma",
    )?;
    log::info!("solving 2x2 game");
    let solver = Solver::from(game);
    let nash = solver.all_nash();
    let lookahead = solver.non_myopic();
    if args.json {
        let report = serde_json::json!({ "nash": nash, "non_myopic": lookahead });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("{}", game);
    println!("Nash equilibria:");
    if nash.is_empty() {
        println!("- none found");
    }
    for equilibrium in &nash {
        println!("- {}", equilibrium);
    }
    println!();
    println!("Non-myopic equilibria:");
    if lookahead.is_empty() {
        println!("- none found");
    }
    for equilibrium in &lookahead {
        println!("- {}", equilibrium);
    }
    Ok(())
}
