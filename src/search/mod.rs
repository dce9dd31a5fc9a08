//! The traversal layer: one generic skeleton wired to pluggable frontier
//! containers and neighbor-selection policies.

mod engine;
mod path;
mod random_walk;
mod strategy;

pub use engine::*;
pub use path::*;
pub use random_walk::*;
pub use strategy::*;
