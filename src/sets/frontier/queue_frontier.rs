use std::collections::VecDeque;

use crate::sets::frontier::Frontier;

/// A FIFO frontier: names come back out in the order they went in.
///
/// This is the breadth-first discipline; ties at equal distance resolve in
/// edge insertion order.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<String>,
}

impl Frontier for QueueFrontier {
    fn new() -> Self {
        QueueFrontier {
            queue: VecDeque::new(),
        }
    }

    fn push(&mut self, name: String) {
        self.queue.push_back(name);
    }

    fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
