use std::path::Path;

use crate::{error::GraphError, graph::DotGraph};

/// Renders the graph back into the DOT-style edge-list form the parser
/// accepts: one indented `label;` line per node, one `u -> v;` line per
/// edge, both in insertion order.
pub fn to_dot_string(graph: &DotGraph) -> String {
    let mut out = String::from("digraph {\n");
    for node in graph.nodes() {
        out.push_str(&format!("    {node};\n"));
    }
    for edge in graph.edges() {
        out.push_str(&format!("    {} -> {};\n", edge.start(), edge.end()));
    }
    out.push('}');
    out
}

/// Writes the DOT form of the graph to `path`.
pub fn write_dot_file(graph: &DotGraph, path: impl AsRef<Path>) -> Result<(), GraphError> {
    std::fs::write(path, to_dot_string(graph))?;
    Ok(())
}

/// Writes the human-readable node/edge summary (the graph's `Display` form)
/// to `path`.
pub fn write_summary_file(graph: &DotGraph, path: impl AsRef<Path>) -> Result<(), GraphError> {
    std::fs::write(path, graph.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::parse_dot_str;

    fn sample() -> DotGraph {
        let mut graph = DotGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "c");
        graph.add_node("island");
        graph
    }

    #[test]
    fn dot_form_lists_nodes_then_edges() {
        let graph = sample();
        assert_eq!(
            to_dot_string(&graph),
            "digraph {\n    a;\n    b;\n    c;\n    island;\n    a -> b;\n    b -> c;\n}"
        );
    }

    #[test]
    fn round_trip_preserves_node_and_edge_sets() {
        let graph = sample();
        let reparsed = parse_dot_str(&to_dot_string(&graph));
        assert_eq!(reparsed.nodes(), graph.nodes());
        assert_eq!(reparsed.edges(), graph.edges());
    }

    #[test]
    fn round_trip_of_empty_graph() {
        let graph = DotGraph::new();
        let reparsed = parse_dot_str(&to_dot_string(&graph));
        assert_eq!(reparsed.node_count(), 0);
        assert_eq!(reparsed.edge_count(), 0);
    }

    #[test]
    fn writes_dot_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dot");
        write_dot_file(&sample(), &path).unwrap();
        let reparsed = parse_dot_str(&std::fs::read_to_string(&path).unwrap());
        assert_eq!(reparsed.edge_count(), 2);
        assert_eq!(reparsed.node_count(), 4);
    }

    #[test]
    fn writes_summary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_summary_file(&sample(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Nodes (4):"));
        assert!(text.contains("a -> b"));
    }
}
