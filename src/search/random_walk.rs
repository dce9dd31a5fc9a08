use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{graph::DotGraph, search::SearchStrategy, sets::frontier::SlotFrontier};

/// How many times a walk may schedule a candidate before it is cut off.
///
/// A fully-random walk over a cyclic graph has no structural guarantee of
/// progress, so the budget is what makes it terminate.
pub const DEFAULT_STEP_BUDGET: usize = 10_000;

/// Neighbor-selection variants for the random-walk strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkMode {
    /// Pick uniformly among *all* neighbors, ignoring visited state. May
    /// revisit nodes and cycle; terminates only at a sink or on the step
    /// budget.
    FullyRandom,
    /// Pick uniformly among the neighbors not yet visited in this run; the
    /// walk halts where it stands when none remain.
    RandomUnvisited,
    /// Same halting behavior as `RandomUnvisited`. Named for backtracking,
    /// but no retreat to an earlier branch point is performed.
    HistoryBacktrack,
}

/// A random-walk strategy over a single-slot frontier.
///
/// The random source is injected, so a fixed seed reproduces the walk
/// step for step.
pub struct RandomWalk<R: Rng = StdRng> {
    mode: WalkMode,
    rng: R,
    steps_left: usize,
}

impl RandomWalk<StdRng> {
    /// A walk seeded from OS entropy; runs are not reproducible.
    pub fn new(mode: WalkMode) -> Self {
        Self::with_rng(mode, StdRng::from_os_rng())
    }

    /// A walk seeded from `seed`. Same seed, same graph, same walk.
    pub fn seeded(mode: WalkMode, seed: u64) -> Self {
        Self::with_rng(mode, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWalk<R> {
    /// A walk drawing from a caller-provided random source.
    pub fn with_rng(mode: WalkMode, rng: R) -> Self {
        RandomWalk {
            mode,
            rng,
            steps_left: DEFAULT_STEP_BUDGET,
        }
    }

    /// Replaces the step budget. A budget of 0 halts before the first step.
    pub fn with_step_budget(mut self, steps: usize) -> Self {
        self.steps_left = steps;
        self
    }
}

impl<R: Rng> SearchStrategy for RandomWalk<R> {
    type Frontier = SlotFrontier;

    fn plan_next(&mut self, graph: &DotGraph, current: &str, scheduled: &[String]) -> Vec<String> {
        if self.steps_left == 0 {
            return Vec::new();
        }
        self.steps_left -= 1;

        let neighbors = graph.neighbors(current);
        let pick = match self.mode {
            WalkMode::FullyRandom => neighbors.choose(&mut self.rng).cloned(),
            WalkMode::RandomUnvisited | WalkMode::HistoryBacktrack => {
                let unvisited: Vec<String> = neighbors
                    .into_iter()
                    .filter(|n| !scheduled.contains(n))
                    .collect();
                unvisited.choose(&mut self.rng).cloned()
            }
        };

        pick.into_iter().collect()
    }

    fn allows_revisit(&self) -> bool {
        self.mode == WalkMode::FullyRandom
    }
}
