/// A trait for the containers holding discovered-but-not-yet-processed node
/// names during one traversal.
///
/// The skeleton only ever creates an empty container, pushes names into it,
/// and pops one name at a time; which name comes back out is entirely the
/// implementation's business, and is what distinguishes BFS from DFS from a
/// random walk.
pub trait Frontier {
    /// Creates a new empty frontier.
    fn new() -> Self;

    /// Adds a node name to the working set.
    fn push(&mut self, name: String);

    /// Removes and returns the next node to process, or `None` when the
    /// frontier is exhausted.
    fn pop(&mut self) -> Option<String>;

    /// Whether the working set is currently empty.
    fn is_empty(&self) -> bool;
}
