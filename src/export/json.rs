//! Plain JSON export of the dataset

use crate::{Result, dataset::Dataset};

/// Pretty-printed `{ "nodes": [...], "edges": [...] }`
pub fn render_json(dataset: &Dataset) -> Result<String> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::RenderConfig, dataset::build_dataset, tictactoe::build_tree};

    #[test]
    fn json_has_nodes_and_edges() {
        let dataset = build_dataset(&build_tree(2), &RenderConfig::default());
        let text = render_json(&dataset).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["nodes"].as_array().unwrap().len(), 10);
        assert_eq!(value["edges"].as_array().unwrap().len(), 9);
        assert_eq!(value["edges"][0]["from"], ".........");
        assert_eq!(value["edges"][0]["to"], "X........");
    }
}
