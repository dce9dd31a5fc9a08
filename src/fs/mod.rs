//! Textual I/O for graphs: parsing a DOT-style edge-list description and
//! serializing a graph back into the same form, as strings or files.
//!
//! This is deliberately a thin collaborator around the graph store; the
//! traversal core never touches it.

mod dot_read;
mod dot_write;

pub use dot_read::*;
pub use dot_write::*;
