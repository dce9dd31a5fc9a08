use std::str::FromStr;

use crate::{
    error::GraphError,
    graph::DotGraph,
    sets::frontier::{Frontier, QueueFrontier, StackFrontier},
};

/// A trait defining the pluggable pieces of one traversal strategy.
///
/// A strategy is the pairing of a frontier container (which fixes the
/// exploration order) and a neighbor-selection policy (which fixes what gets
/// scheduled at each expansion). The provided `plan_next` schedules *all*
/// neighbors, which is what BFS and DFS want; the random-walk variants
/// override it to return zero or one candidate.
///
/// Strategies are passed to the skeleton as plain values, not through
/// subclassing.
pub trait SearchStrategy {
    /// The frontier container driving this strategy's exploration order.
    type Frontier: Frontier;

    /// Chooses which of `current`'s successors to schedule next.
    ///
    /// `scheduled` lists, in discovery order, every name already marked
    /// explored in this run: processed nodes, current frontier contents,
    /// and `current` itself.
    fn plan_next(
        &mut self,
        graph: &DotGraph,
        current: &str,
        scheduled: &[String],
    ) -> Vec<String> {
        let _ = scheduled;
        graph.neighbors(current)
    }

    /// Whether an already-scheduled candidate may re-enter the frontier.
    ///
    /// Duplicate prevention is the default contract; the fully-random walk
    /// opts out so it can keep moving through nodes it has already crossed.
    fn allows_revisit(&self) -> bool {
        false
    }
}

/// Breadth-first search: FIFO frontier, schedules every neighbor.
///
/// Visits nodes in non-decreasing edge distance from the source; ties at the
/// same distance resolve in edge insertion order.
pub struct Bfs;

impl SearchStrategy for Bfs {
    type Frontier = QueueFrontier;
}

/// Depth-first search: LIFO frontier, schedules every neighbor.
///
/// Follows the most recently discovered branch first, so ties resolve in
/// reverse edge insertion order relative to BFS.
pub struct Dfs;

impl SearchStrategy for Dfs {
    type Frontier = StackFrontier;
}

/// A selector for dispatching to a concrete strategy by name, e.g. from a
/// command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Bfs,
    Dfs,
    FullyRandom,
    RandomUnvisited,
    HistoryBacktrack,
}

impl FromStr for StrategyKind {
    type Err = GraphError;

    /// Accepts the kebab-case and snake_case spellings, case-insensitively.
    /// Anything else is an error naming the selector, never a silent
    /// fallback.
    fn from_str(s: &str) -> Result<Self, GraphError> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(StrategyKind::Bfs),
            "dfs" => Ok(StrategyKind::Dfs),
            "random" | "fully-random" | "fully_random" => Ok(StrategyKind::FullyRandom),
            "random-unvisited" | "random_unvisited" => Ok(StrategyKind::RandomUnvisited),
            "history-backtrack" | "history_backtrack" => Ok(StrategyKind::HistoryBacktrack),
            _ => Err(GraphError::UnknownStrategy(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_next_returns_all_neighbors() {
        let mut graph = DotGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("a", "c");

        let mut bfs = Bfs;
        let planned = bfs.plan_next(&graph, "a", &["a".to_owned()]);
        assert_eq!(planned, vec!["b", "c"]);
    }

    #[test]
    fn bfs_and_dfs_prevent_revisits() {
        assert!(!Bfs.allows_revisit());
        assert!(!Dfs.allows_revisit());
    }

    #[test]
    fn selector_parses_known_names() {
        assert_eq!("bfs".parse::<StrategyKind>().unwrap(), StrategyKind::Bfs);
        assert_eq!("DFS".parse::<StrategyKind>().unwrap(), StrategyKind::Dfs);
        assert_eq!(
            "fully-random".parse::<StrategyKind>().unwrap(),
            StrategyKind::FullyRandom
        );
        assert_eq!(
            "random_unvisited".parse::<StrategyKind>().unwrap(),
            StrategyKind::RandomUnvisited
        );
        assert_eq!(
            "history-backtrack".parse::<StrategyKind>().unwrap(),
            StrategyKind::HistoryBacktrack
        );
    }

    #[test]
    fn selector_rejects_unknown_names() {
        let err = "bogofirst".parse::<StrategyKind>().unwrap_err();
        match err {
            GraphError::UnknownStrategy(name) => assert_eq!(name, "bogofirst"),
            other => panic!("expected UnknownStrategy, got {other:?}"),
        }
    }
}
