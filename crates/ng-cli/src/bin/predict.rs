//! 3x3 normal-form game analyzer.
//!
//! Decomposes a 3x3 game into its 2x2 subgames, solves each, and predicts
//! the overall outcome from the non-myopic vote tally.

use clap::Parser;
use ng_solver::*;

#[derive(Parser)]
#[command(name = "predict", about = "Predict a 3x3 game's outcome from its 2x2 subgames")]
struct Args {
    /// Payoff matrix as nine "p1,p2" cells in row-major order.
    #[arg(long)]
    matrix: Option<String>,
    /// Analyze the built-in Extended Coordination Game example.
    #[arg(long)]
    example: bool,
    /// Count each canonical submatrix shape at most once.
    #[arg(long)]
    dedup: bool,
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
        ng_cli::coordination,
        "Extended Coordination Game",
    )?;
    log::info!("analyzing 3x3 game by subgame decomposition");
    let prediction = Predictor::from(game).dedup(args.dedup).predict();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&prediction.summary())?);
        return Ok(());
    }
    println!("{}", game);
    for analysis in prediction.analyses() {
        println!("{}", analysis);
    }
    println!("{}", prediction);
    Ok(())
}
