use std::path::Path;

use crate::{error::GraphError, graph::DotGraph};

/// Builds a graph from a DOT-style edge-list description.
///
/// Line handling, per line after trimming whitespace:
/// - empty lines and lines starting with `digraph`, `{` or `}` are skipped
/// - one trailing `;` is stripped
/// - `u -> v` becomes an edge (inserting missing endpoints)
/// - a bare label becomes a node, so isolated nodes survive a round trip
/// - anything else is skipped silently
pub fn parse_dot_str(input: &str) -> DotGraph {
    let mut graph = DotGraph::new();
    for raw in input.lines() {
        let mut line = raw.trim();
        if line.is_empty()
            || line.starts_with("digraph")
            || line.starts_with('{')
            || line.starts_with('}')
        {
            continue;
        }
        line = line.strip_suffix(';').unwrap_or(line).trim();

        let parts: Vec<&str> = line.split("->").collect();
        match parts.as_slice() {
            [start, end] => graph.add_edge(start.trim(), end.trim()),
            [label] if !label.trim().is_empty() => graph.add_node(label.trim()),
            _ => {} // malformed, skip
        }
    }
    graph
}

/// Reads and parses a DOT-style file.
pub fn parse_dot_file(path: impl AsRef<Path>) -> Result<DotGraph, GraphError> {
    Ok(parse_dot_str(&std::fs::read_to_string(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edges_and_auto_inserts_nodes() {
        let graph = parse_dot_str("digraph {\n    a -> b;\n    b -> c;\n}");
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_edge("a", "b"));
        assert!(graph.contains_edge("b", "c"));
    }

    #[test]
    fn bare_labels_become_nodes() {
        let graph = parse_dot_str("digraph {\n    lonely;\n    a -> b;\n}");
        assert!(graph.contains_node("lonely"));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn skips_braces_headers_and_blank_lines() {
        let graph = parse_dot_str("digraph G {\n\n{\n}\n");
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn skips_malformed_lines_silently() {
        let graph = parse_dot_str("a -> b -> c;\na -> b;");
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge("a", "b"));
    }

    #[test]
    fn trims_whitespace_and_strips_one_terminator() {
        let graph = parse_dot_str("   a   ->    b  ;  ");
        assert!(graph.contains_edge("a", "b"));
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn duplicate_edge_lines_dedup() {
        let graph = parse_dot_str("a -> b;\na -> b;\nA -> B;");
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = parse_dot_file("/definitely/not/here.dot").unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }

    #[test]
    fn parses_a_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.dot");
        std::fs::write(&path, "digraph {\n    x -> y;\n}").unwrap();
        let graph = parse_dot_file(&path).unwrap();
        assert!(graph.contains_edge("x", "y"));
    }
}
