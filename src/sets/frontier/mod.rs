//! Frontier containers: the set of discovered-but-not-yet-processed nodes.
//!
//! The [`Frontier`] capability is deliberately tiny (create, push, pop); the
//! choice of container is what defines the traversal order. A FIFO queue
//! gives breadth-first order, a LIFO stack depth-first order, and a
//! single-slot container carries the one candidate of a random walk.

mod container;
mod queue_frontier;
mod slot_frontier;
mod stack_frontier;

pub use container::*;
pub use queue_frontier::*;
pub use slot_frontier::*;
pub use stack_frontier::*;
