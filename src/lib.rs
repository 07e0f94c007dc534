//! Bounded Tic-Tac-Toe game tree explorer
//!
//! This crate provides:
//! - Tic-Tac-Toe rules over immutable 9-cell boards
//! - Breadth-first enumeration of reachable boards up to a depth bound
//! - SVG rendering of single boards at any size
//! - A node/edge dataset and exporters (interactive HTML, JSON, DOT)
//! - The `ttt-tree` command-line front end

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod render;
pub mod tictactoe;

pub use config::{DEPTH_CAP, RenderConfig, RenderSize, TreeConfig, clamp_depth, validate_depth};
pub use dataset::{Dataset, VisEdge, VisNode, build_dataset};
pub use error::{Error, Result};
pub use export::{ExportFormat, write_dataset};
pub use tictactoe::{BoardState, GameOutcome, GameTree, Player, build_tree};
