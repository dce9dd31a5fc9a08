use serde::Serialize;
use std::fmt;

/// A directed edge between two node labels.
///
/// Equality and hashing are by value, so the graph's edge set dedups two
/// inserts of the same pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    start: String,
    end: String,
}

impl Edge {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Edge {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
