use std::collections::VecDeque;

use crate::sets::frontier::Frontier;

/// A LIFO frontier: the most recently discovered name comes back out first.
///
/// This is the depth-first discipline; relative to BFS, ties resolve in
/// reverse edge insertion order.
#[derive(Debug, Default)]
pub struct StackFrontier {
    deque: VecDeque<String>,
}

impl Frontier for StackFrontier {
    fn new() -> Self {
        StackFrontier {
            deque: VecDeque::new(),
        }
    }

    fn push(&mut self, name: String) {
        self.deque.push_front(name);
    }

    fn pop(&mut self) -> Option<String> {
        self.deque.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }
}
