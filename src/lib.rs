//! A small directed-graph library built around one generic traversal skeleton
//! with pluggable exploration order (queue, stack, single slot) and neighbor
//! selection policy (all neighbors, or one of three random-walk variants).

pub mod error;
pub mod fs;
pub mod graph;
pub mod render;
pub mod search;
pub mod sets;
