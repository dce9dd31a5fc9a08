use crate::sets::frontier::Frontier;

/// A single-slot frontier: each push replaces the current contents.
///
/// Random walks keep at most one candidate alive at a time, so their
/// "working set" degenerates to this slot. When a walk schedules nothing,
/// the slot stays empty and the traversal halts where it stands.
#[derive(Debug, Default)]
pub struct SlotFrontier {
    slot: Option<String>,
}

impl Frontier for SlotFrontier {
    fn new() -> Self {
        SlotFrontier { slot: None }
    }

    fn push(&mut self, name: String) {
        self.slot = Some(name);
    }

    fn pop(&mut self) -> Option<String> {
        self.slot.take()
    }

    fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let frontier = SlotFrontier::new();
        assert!(frontier.is_empty());
    }

    #[test]
    fn push_replaces_contents() {
        let mut frontier = SlotFrontier::new();
        frontier.push("a".to_owned());
        frontier.push("b".to_owned());
        assert_eq!(frontier.pop().as_deref(), Some("b"));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn pop_empties_the_slot() {
        let mut frontier = SlotFrontier::new();
        frontier.push("a".to_owned());
        assert_eq!(frontier.pop().as_deref(), Some("a"));
        assert!(frontier.is_empty());
    }
}
