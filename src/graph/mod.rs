//! The graph store: an insertion-ordered node-label set plus a deduplicated
//! directed-edge set, with the read-only neighbor query the search layer
//! consumes.

mod dot_graph;
mod edge;

pub use dot_graph::*;
pub use edge::*;
