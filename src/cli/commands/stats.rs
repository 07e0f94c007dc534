//! Stats command - Count states without rendering anything

use anyhow::Result;
use clap::Parser;

use super::parse_depth;
use crate::{
    cli::output::{format_number, print_kv, print_level_counts, print_section, print_subsection},
    config::clamp_depth,
    tictactoe::build_tree,
};

/// Nine plies plus the empty board
const FULL_GAME_DEPTH: usize = 10;

#[derive(Parser, Debug)]
#[command(about = "Print state counts for a bounded or complete game tree")]
pub struct StatsArgs {
    /// Tree depth in levels (1-5)
    #[arg(
        long,
        short = 'd',
        value_parser = parse_depth,
        default_value = "3",
        conflicts_with = "full"
    )]
    pub depth: usize,

    /// Enumerate the complete game instead of a bounded prefix
    #[arg(long)]
    pub full: bool,
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let depth = if args.full {
        FULL_GAME_DEPTH
    } else {
        clamp_depth(args.depth)
    };
    let tree = build_tree(depth);
    let outcomes = tree.outcome_counts();

    print_section(if args.full {
        "Complete Game Tree"
    } else {
        "Bounded Game Tree"
    });
    print_kv("Levels", &(tree.max_level() + 1).to_string());
    print_kv("States", &format_number(tree.len()));
    print_kv("Edges", &format_number(tree.edges.len()));
    print_level_counts(&tree.level_counts());

    print_subsection("Outcomes");
    print_kv("Ongoing", &format_number(outcomes.ongoing));
    print_kv("X wins", &format_number(outcomes.x_wins));
    print_kv("O wins", &format_number(outcomes.o_wins));
    print_kv("Draws", &format_number(outcomes.draws));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_conflicts_with_depth() {
        assert!(StatsArgs::try_parse_from(["stats", "--full", "--depth", "2"]).is_err());
        let args = StatsArgs::try_parse_from(["stats", "--full"]).unwrap();
        assert!(args.full);
    }

    #[test]
    fn runs_for_small_depth() {
        let args = StatsArgs::try_parse_from(["stats", "-d", "2"]).unwrap();
        execute(args).unwrap();
    }
}
