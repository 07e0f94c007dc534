//! Generate command - Build the tree and write the visualisation

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::parse_depth;
use crate::{
    cli::{
        output::{create_spinner, format_number, print_kv, print_level_counts, print_section},
        prompt::prompt_for_depth,
    },
    config::{TreeConfig, clamp_depth, validate_depth},
    dataset::build_dataset,
    export::{ExportFormat, write_dataset},
    tictactoe::build_tree,
};

#[derive(Parser, Debug)]
#[command(about = "Build the game tree and write the visualisation")]
pub struct GenerateArgs {
    /// Tree depth in levels (1-5); asked for interactively when omitted
    #[arg(long, short = 'd', value_parser = parse_depth)]
    pub depth: Option<usize>,

    /// Output file (defaults to ttt_tree_interactive.<format>)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<ExportFormat>,

    /// JSON configuration file (depth, render sizes, palette, output)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Merge flags over the config file (or defaults), prompting for the depth
/// when neither supplies one.
pub fn resolve_config(args: &GenerateArgs) -> Result<TreeConfig> {
    let mut config = match &args.config {
        Some(path) => TreeConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TreeConfig::default(),
    };

    let requested = match (args.depth, &args.config) {
        (Some(depth), _) => depth,
        (None, Some(_)) => validate_depth(config.max_depth)?,
        (None, None) => prompt_for_depth()?,
    };
    config.max_depth = clamp_depth(requested);

    if let Some(format) = args.format {
        config.format = format;
    }
    config.output = match &args.output {
        Some(path) => path.clone(),
        None => config.output.with_extension(config.format.extension()),
    };

    Ok(config)
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    println!("\nUsing max depth = {}", config.max_depth);

    let spinner = create_spinner("Building game tree...")?;
    let tree = build_tree(config.max_depth);
    spinner.set_message(format!("Rendering {} nodes...", format_number(tree.len())));
    let dataset = build_dataset(&tree, &config.render);
    spinner.finish_and_clear();

    write_dataset(&dataset, config.format, &config.output)
        .with_context(|| format!("failed to generate {}", config.output.display()))?;

    print_section("Game Tree");
    print_kv("Max depth", &config.max_depth.to_string());
    print_kv("Nodes", &format_number(dataset.nodes.len()));
    print_kv("Edges", &format_number(dataset.edges.len()));
    print_level_counts(&tree.level_counts());

    println!("\nGenerated: {}", config.output.display());
    if config.format == ExportFormat::Html {
        println!("Open it in your browser to explore the interactive tree.");
    }

    Ok(())
}
