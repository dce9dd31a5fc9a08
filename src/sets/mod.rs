//! Specialized containers for graph traversal.
//!
//! # Submodules
//!
//! - [`frontier`]: the working-set containers whose add/remove discipline
//!   turns the one search skeleton into BFS, DFS, or a random walk

pub mod frontier;
