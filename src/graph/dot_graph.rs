use hashbrown::HashSet;
use std::fmt;

use crate::graph::Edge;

/// A directed graph over string node labels.
///
/// Labels are case-normalized: every insert and query path lower-cases its
/// input, so `addNode("A")` and `addNode("a")` name the same node. Both the
/// node set and the edge set remember insertion order (the order `neighbors`
/// reports ties in) while deduplicating by value.
///
/// Searches never mutate the graph; they only call [`DotGraph::nodes`] and
/// [`DotGraph::neighbors`].
#[derive(Default)]
pub struct DotGraph {
    // ordered views, deduped through the companion hash sets
    nodes: Vec<String>,
    node_set: HashSet<String>,
    edges: Vec<Edge>,
    edge_set: HashSet<Edge>,
}

fn canon(label: &str) -> String {
    label.to_lowercase()
}

impl DotGraph {
    pub fn new() -> Self {
        DotGraph::default()
    }

    /// Inserts a node label. Idempotent: reinserting an existing label leaves
    /// the graph unchanged.
    pub fn add_node(&mut self, label: &str) {
        let label = canon(label);
        if self.node_set.insert(label.clone()) {
            self.nodes.push(label);
        }
    }

    /// Inserts several node labels at once.
    pub fn add_nodes<S: AsRef<str>>(&mut self, labels: &[S]) {
        for label in labels {
            self.add_node(label.as_ref());
        }
    }

    /// Removes a node label. No-op when the label is absent.
    ///
    /// Only the label itself is removed; edges mentioning it stay in place.
    /// A search that follows such a dangling edge treats it as a dead end.
    pub fn remove_node(&mut self, label: &str) {
        let label = canon(label);
        if self.node_set.remove(&label) {
            self.nodes.retain(|n| n != &label);
        }
    }

    /// Removes several node labels at once.
    pub fn remove_nodes<S: AsRef<str>>(&mut self, labels: &[S]) {
        for label in labels {
            self.remove_node(label.as_ref());
        }
    }

    /// Inserts the directed edge `(start, end)`, auto-inserting either
    /// endpoint that is missing. Idempotent on the edge set.
    pub fn add_edge(&mut self, start: &str, end: &str) {
        self.add_node(start);
        self.add_node(end);
        let edge = Edge::new(canon(start), canon(end));
        if self.edge_set.insert(edge.clone()) {
            self.edges.push(edge);
        }
    }

    /// Removes the directed edge `(start, end)`. No-op when absent.
    pub fn remove_edge(&mut self, start: &str, end: &str) {
        let edge = Edge::new(canon(start), canon(end));
        if self.edge_set.remove(&edge) {
            self.edges.retain(|e| e != &edge);
        }
    }

    /// The successor labels of `label`, in edge insertion order.
    ///
    /// Labels outside the node set get an empty list, never an error.
    pub fn neighbors(&self, label: &str) -> Vec<String> {
        let label = canon(label);
        if !self.node_set.contains(&label) {
            return Vec::new();
        }
        self.edges
            .iter()
            .filter(|e| e.start() == label)
            .map(|e| e.end().to_owned())
            .collect()
    }

    /// The node labels in insertion order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// The edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.node_set.contains(&canon(label))
    }

    pub fn contains_edge(&self, start: &str, end: &str) -> bool {
        self.edge_set.contains(&Edge::new(canon(start), canon(end)))
    }
}

impl fmt::Display for DotGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Nodes ({}): [{}]",
            self.nodes.len(),
            self.nodes.join(", ")
        )?;
        writeln!(f, "Edges ({}):", self.edges.len())?;
        for edge in &self.edges {
            writeln!(f, "  {edge}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for DotGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DotGraph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .finish()
    }
}
