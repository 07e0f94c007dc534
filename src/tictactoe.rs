//! Tic-Tac-Toe rules and bounded state-space enumeration

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;
pub mod validation;

pub use board::{BoardState, Cell, PieceCount, Player};
pub use game::GameOutcome;
pub use game_tree::{GameTree, OutcomeCounts, build_tree};
pub use lines::{LineAnalyzer, WINNING_LINES};
