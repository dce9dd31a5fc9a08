use hashbrown::HashMap;

use crate::{
    error::GraphError,
    graph::DotGraph,
    search::{Bfs, Dfs, Path, PathNode, RandomWalk, SearchStrategy, StrategyKind, WalkMode},
    sets::frontier::Frontier,
};

/// Per-call discovery table: one [`PathNode`] for every current graph node.
type NodeMap = HashMap<String, PathNode>;

fn build_node_map(graph: &DotGraph) -> NodeMap {
    graph
        .nodes()
        .iter()
        .map(|name| (name.clone(), PathNode::new(name.clone())))
        .collect()
}

/// Follows parent pointers from `last` back to the source, then reverses.
///
/// Parents are set exactly once, at discovery time, so the chain always
/// terminates at the source.
fn trace_back(map: &NodeMap, last: &str) -> Vec<PathNode> {
    let mut nodes = Vec::new();
    let mut cursor = map.get(last);
    while let Some(node) = cursor {
        nodes.push(node.clone());
        cursor = node.parent.as_ref().and_then(|p| map.get(p));
    }
    nodes.reverse();
    nodes
}

fn path_so_far(map: &NodeMap, current: &str) -> String {
    trace_back(map, current)
        .iter()
        .map(|n| n.name().to_owned())
        .collect::<Vec<_>>()
        .join("->")
}

/// The traversal skeleton, with an observer hook.
///
/// One algorithm serves every strategy: build the discovery table, drive the
/// strategy's frontier until it empties or the destination pops out, and
/// reconstruct the path from parent pointers. `observer` is called with the
/// compact path-so-far string each time a node is taken off the frontier; it
/// has no effect on control flow.
///
/// # Errors
/// [`GraphError::SourceNotFound`] when `src` is not in the graph's node set.
/// An unreachable destination is not an error: the returned [`Path`] simply
/// reports `destination_reached() == false`.
pub fn search_observed<S, F>(
    graph: &DotGraph,
    src: &str,
    dst: &str,
    mut strategy: S,
    mut observer: F,
) -> Result<Path, GraphError>
where
    S: SearchStrategy,
    F: FnMut(&str),
{
    // labels are case-normalized everywhere, including here
    let src = src.to_lowercase();
    let dst = dst.to_lowercase();

    let mut map = build_node_map(graph);
    let Some(start) = map.get_mut(&src) else {
        return Err(GraphError::SourceNotFound(src));
    };
    start.explored = true;

    let mut scheduled = vec![src.clone()];
    let mut frontier = S::Frontier::new();
    frontier.push(src.clone());

    let mut last = src;
    while let Some(current) = frontier.pop() {
        observer(&path_so_far(&map, &current));

        if current == dst {
            return Ok(Path::new(trace_back(&map, &current), true));
        }

        for candidate in strategy.plan_next(graph, &current, &scheduled) {
            match map.get_mut(&candidate) {
                // the graph no longer knows this label (dangling edge):
                // the branch is a dead end, stop right here
                None => return Ok(Path::new(trace_back(&map, &current), false)),
                Some(node) if !node.explored => {
                    node.explored = true;
                    node.parent = Some(current.clone());
                    scheduled.push(candidate.clone());
                    frontier.push(candidate);
                }
                // already scheduled: re-enter the frontier only for
                // strategies that walk over visited ground
                Some(_) if strategy.allows_revisit() => frontier.push(candidate),
                Some(_) => {}
            }
        }
        last = current;
    }

    Ok(Path::new(trace_back(&map, &last), false))
}

/// [`search_observed`] with a trace-level logging observer.
pub fn search<S: SearchStrategy>(
    graph: &DotGraph,
    src: &str,
    dst: &str,
    strategy: S,
) -> Result<Path, GraphError> {
    search_observed(graph, src, dst, strategy, |path| {
        tracing::trace!(%path, "visiting");
    })
}

/// Dispatches a search by [`StrategyKind`] selector.
///
/// `seed` fixes the random source of the walk variants; BFS and DFS ignore
/// it. Without a seed the walks draw from OS entropy.
pub fn search_with(
    graph: &DotGraph,
    src: &str,
    dst: &str,
    kind: StrategyKind,
    seed: Option<u64>,
) -> Result<Path, GraphError> {
    let walk = |mode: WalkMode| match seed {
        Some(seed) => RandomWalk::seeded(mode, seed),
        None => RandomWalk::new(mode),
    };

    match kind {
        StrategyKind::Bfs => search(graph, src, dst, Bfs),
        StrategyKind::Dfs => search(graph, src, dst, Dfs),
        StrategyKind::FullyRandom => search(graph, src, dst, walk(WalkMode::FullyRandom)),
        StrategyKind::RandomUnvisited => search(graph, src, dst, walk(WalkMode::RandomUnvisited)),
        StrategyKind::HistoryBacktrack => {
            search(graph, src, dst, walk(WalkMode::HistoryBacktrack))
        }
    }
}
