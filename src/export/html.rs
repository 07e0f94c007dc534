//! Self-contained interactive HTML page (vis-network front-end)

use crate::{Result, dataset::Dataset};

const NODES_PLACEHOLDER: &str = "__NODES_JSON__";
const EDGES_PLACEHOLDER: &str = "__EDGES_JSON__";

/// Page skeleton; the two placeholders are replaced with JSON arrays.
pub const HTML_TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>Tic-Tac-Toe Tree</title>
<script src="https://unpkg.com/vis-network@9.1.2/dist/vis-network.min.js"></script>
<style>
body { margin:0; display:flex; height:100vh; font-family:Arial, sans-serif; }
#network { flex:1; }
#panel { width:340px; border-left:1px solid #ddd; padding:12px; overflow:auto; }
</style>
</head>
<body>
<div id="network"></div>
<div id="panel">
<h3>Node Details</h3>
<div id="node_details">Click a node.</div>
</div>
<script>
const nodesData = __NODES_JSON__;
const edgesData = __EDGES_JSON__;

const nodes = new vis.DataSet(nodesData.map(n => ({
    id: n.id, shape: n.shape, image: n.image, title: n.title, level: n.level, details: n.data
})));
const edges = new vis.DataSet(edgesData.map(e => ({ from: e.from, to: e.to, arrows: "to" })));

const network = new vis.Network(
    document.getElementById("network"),
    { nodes, edges },
    {
        layout: { hierarchical: { enabled: true, direction: "UD", levelSeparation: 150 } },
        interaction: { hover: true },
        physics: false
    }
);

network.on("click", function (params) {
    if (!params.nodes.length) return;
    const d = nodes.get(params.nodes[0]).details;
    document.getElementById("node_details").innerHTML =
        `<img src="${d.large_svg}" style="width:260px"><br><br>
         <b>Board:</b><pre>${d.board}</pre>
         <b>Level:</b> ${d.level}<br>
         <b>Status:</b> ${d.status}<br>
         <b>Winner:</b> ${d.winner || "-"}`;
});
</script>
</body>
</html>
"#;

/// Serialize for embedding inside a `<script>` element.
///
/// `</` is written as `<\/` (an equivalent JSON escape) so a string value can
/// never close the script tag.
fn script_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Fill the page template with the dataset.
pub fn render_html(dataset: &Dataset) -> Result<String> {
    let nodes = script_json(&dataset.nodes)?;
    let edges = script_json(&dataset.edges)?;
    Ok(HTML_TEMPLATE
        .replacen(NODES_PLACEHOLDER, &nodes, 1)
        .replacen(EDGES_PLACEHOLDER, &edges, 1))
}
