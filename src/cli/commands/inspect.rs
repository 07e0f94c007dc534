//! Inspect command - Show the rules engine's view of one board

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section, print_subsection},
    render::{BoardPalette, render_board_svg},
    tictactoe::BoardState,
};

#[derive(Parser, Debug)]
#[command(about = "Describe a single board (e.g. \"XXX.OO...\")")]
pub struct InspectArgs {
    /// Board as 9 characters over '.', 'X' and 'O', row by row
    pub board: String,

    /// Write the rendered board to this SVG file
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Side length of the rendered SVG in pixels
    #[arg(long, default_value_t = 260)]
    pub size: u32,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let board = BoardState::from_string(&args.board)
        .with_context(|| format!("cannot inspect '{}'", args.board))?;

    print_section(&format!("Board {board}"));
    println!("{}", board.format_grid());
    println!();
    print_kv("Side to move", &board.to_move().to_string());
    print_kv(
        "Outcome",
        &board
            .outcome()
            .map_or_else(|| "ongoing".to_string(), |o| o.to_string()),
    );
    print_kv("Reachable", if board.is_valid() { "yes" } else { "no" });

    let successors = board.legal_successors();
    print_subsection(&format!("Legal successors ({})", successors.len()));
    for next in &successors {
        println!("  {next}");
    }

    if let Some(path) = &args.svg {
        let svg = render_board_svg(&board, args.size, args.size, &BoardPalette::default());
        fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nSVG written to: {}", path.display());
    }

    Ok(())
}
