use serde::Serialize;
use std::fmt;

/// One node's per-search discovery record.
///
/// A fresh `PathNode` table is built from the graph's node set at the start
/// of every search and discarded when it returns; nothing here outlives the
/// call. `parent` is the name of the node this one was first discovered
/// from (`None` for the source), a back-reference that across the whole run
/// forms a forest rooted at the source.
#[derive(Clone, Serialize)]
pub struct PathNode {
    pub(crate) name: String,
    pub(crate) parent: Option<String>,
    pub(crate) explored: bool,
}

impl PathNode {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        PathNode {
            name: name.into(),
            parent: None,
            explored: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Whether this node was scheduled (placed in the frontier) during the
    /// run. Set at discovery time, not at processing time.
    pub fn explored(&self) -> bool {
        self.explored
    }
}

impl fmt::Debug for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node{{{}}}", self.name.to_lowercase())
    }
}

/// The ordered result of one traversal, from the source to the node where
/// the search stopped. Immutable once constructed.
#[derive(Clone, Serialize)]
pub struct Path {
    nodes: Vec<PathNode>,
    destination_reached: bool,
}

impl Path {
    pub(crate) fn new(nodes: Vec<PathNode>, destination_reached: bool) -> Self {
        Path {
            nodes,
            destination_reached,
        }
    }

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// True when the search stopped *at* the destination, false when it
    /// stopped at a dead end or drained its frontier.
    pub fn destination_reached(&self) -> bool {
        self.destination_reached
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node names along the path, source first.
    pub fn names(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.name.clone()).collect()
    }
}

impl fmt::Display for Path {
    /// Compact form: lower-cased names joined by `->`, with a suffix telling
    /// reached apart from dead-ended.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .nodes
            .iter()
            .map(|n| n.name.to_lowercase())
            .collect::<Vec<_>>()
            .join("->");
        let suffix = if self.destination_reached {
            " (Target node!)"
        } else {
            " (Dead end)"
        };
        write!(f, "{joined}{suffix}")
    }
}

impl fmt::Debug for Path {
    /// Structured diagnostic form: `Path{nodes=[Node{a}, Node{b}, ...]}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path{{nodes=[")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{node:?}")?;
        }
        write!(f, "]}}")
    }
}
