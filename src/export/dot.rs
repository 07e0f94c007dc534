//! Graphviz DOT export

use std::{collections::BTreeMap, fmt::Write as _};

use crate::dataset::{Dataset, NodeStatus};

/// Draw the dataset as a top-down digraph with one rank per level.
pub fn render_dot(dataset: &Dataset) -> String {
    let mut out = String::from("digraph ttt_tree {\n");
    out.push_str("  rankdir=TB;\n");
    out.push_str("  node [shape=box, fontname=\"monospace\"];\n");

    let mut levels: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for node in &dataset.nodes {
        let id = node.id.encode();
        let label = node.id.format_grid().replace('\n', "\\n");
        let style = match node.data.status {
            NodeStatus::Ongoing => "",
            NodeStatus::Terminal => ", style=filled, fillcolor=\"#eeeeee\"",
        };
        let _ = writeln!(out, "  \"{id}\" [label=\"{label}\"{style}];");
        levels.entry(node.level).or_default().push(id);
    }

    for ids in levels.values() {
        let members: Vec<String> = ids.iter().map(|id| format!("\"{id}\";")).collect();
        let _ = writeln!(out, "  {{ rank=same; {} }}", members.join(" "));
    }

    for edge in &dataset.edges {
        let _ = writeln!(out, "  \"{}\" -> \"{}\";", edge.from, edge.to);
    }

    out.push_str("}\n");
    out
}
