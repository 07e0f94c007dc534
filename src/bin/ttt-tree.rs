//! ttt-tree CLI - Explore the Tic-Tac-Toe game tree in a browser
//!
//! Builds the reachable states up to a bounded depth and writes them as a
//! self-contained, zoomable hierarchical diagram with a preview per node.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "ttt-tree")]
#[command(version, about = "Bounded Tic-Tac-Toe game tree explorer", long_about = None)]
struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the tree and write the interactive page (or JSON / DOT)
    Generate(ttt_tree::cli::commands::generate::GenerateArgs),

    /// Print state counts per level and outcome
    Stats(ttt_tree::cli::commands::stats::StatsArgs),

    /// Describe one board and optionally render it
    Inspect(ttt_tree::cli::commands::inspect::InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match cli.command {
        Commands::Generate(args) => ttt_tree::cli::commands::generate::execute(args),
        Commands::Stats(args) => ttt_tree::cli::commands::stats::execute(args),
        Commands::Inspect(args) => ttt_tree::cli::commands::inspect::execute(args),
    }
}
