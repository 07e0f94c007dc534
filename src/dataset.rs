//! Node/edge dataset handed to the visualisation front-end
//!
//! The shapes here are the wire contract of the generated page: one record per
//! state with its two rendered images and status, and one record per move.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    config::RenderConfig,
    render::{render_board_svg, svg_data_url},
    tictactoe::{BoardState, GameOutcome, GameTree},
};

/// Whether a state still has moves to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Ongoing,
    Terminal,
}

/// Details shown when a node is selected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisNodeData {
    pub board: BoardState,
    pub level: usize,
    pub status: NodeStatus,
    /// `X`, `O`, `Draw`, or empty while ongoing
    pub winner: String,
    /// Preview image as a `data:` URL
    pub large_svg: String,
}

/// One graph node per state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisNode {
    pub id: BoardState,
    pub label: String,
    pub shape: String,
    /// Icon image as a `data:` URL
    pub image: String,
    /// Hover text (HTML)
    pub title: String,
    pub level: usize,
    pub data: VisNodeData,
}

/// One graph edge per move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisEdge {
    pub from: BoardState,
    pub to: BoardState,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub nodes: Vec<VisNode>,
    pub edges: Vec<VisEdge>,
}

impl VisNode {
    /// Render both images and summarise the state.
    pub fn new(board: BoardState, level: usize, render: &RenderConfig) -> Self {
        let icon = render_board_svg(
            &board,
            render.icon.width,
            render.icon.height,
            &render.palette,
        );
        let preview = render_board_svg(
            &board,
            render.preview.width,
            render.preview.height,
            &render.palette,
        );

        let outcome = board.outcome();
        let status = if outcome.is_some() {
            NodeStatus::Terminal
        } else {
            NodeStatus::Ongoing
        };

        Self {
            id: board,
            label: String::new(),
            shape: "image".to_string(),
            image: svg_data_url(&icon),
            title: status_title(level, status, outcome),
            level,
            data: VisNodeData {
                board,
                level,
                status,
                winner: GameOutcome::tag_of(outcome).to_string(),
                large_svg: svg_data_url(&preview),
            },
        }
    }
}

impl NodeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeStatus::Ongoing => "ongoing",
            NodeStatus::Terminal => "terminal",
        }
    }
}

/// Hover line: level, status and winner (`-` when there is none)
pub fn status_title(level: usize, status: NodeStatus, outcome: Option<GameOutcome>) -> String {
    let winner = match outcome {
        Some(outcome) => outcome.tag(),
        None => "-",
    };
    format!(
        "<b>Level:</b> {level}<br><b>Status:</b> {}<br><b>Winner:</b> {winner}",
        status.as_str()
    )
}

/// Project a tree into the front-end dataset.
///
/// Nodes are ordered by (level, board string) and rendered in parallel; the
/// order does not depend on scheduling. Edges keep the tree's order and
/// multiplicity.
pub fn build_dataset(tree: &GameTree, render: &RenderConfig) -> Dataset {
    let nodes: Vec<VisNode> = tree
        .sorted_states()
        .into_par_iter()
        .map(|(board, level)| VisNode::new(board, level, render))
        .collect();

    let edges = tree
        .edges
        .iter()
        .map(|&(from, to)| VisEdge { from, to })
        .collect();

    log::debug!("rendered {} nodes", nodes.len());
    Dataset { nodes, edges }
}
