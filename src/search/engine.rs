//! The shared search loop.
//!
//! Each state moves through *unvisited* → *frontier-pending* → *visited*.
//! A state may be queued several times before its first pop; every later pop
//! is discarded (lazy deletion), so there is no decrease-key step.

use super::cost::CostModel;
use super::path::{Path, Pending};
use super::space::SearchSpace;
use crate::collections::Frontier;
use crate::error::Result;
use crate::graph::Weight;
use num_traits::Zero;
use serde::Serialize;
use std::collections::HashSet;
use std::rc::Rc;

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States popped for the first time and expanded.
    pub expanded: usize,
    /// Paths added to the frontier, including the start.
    pub pushed: usize,
    /// Stale paths popped after their state was already visited.
    pub discarded: usize,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

/// Outcome of a run: the path to the goal, if one was found, and counters.
#[derive(Debug)]
pub struct Search<S, W> {
    /// Path to the goal; `None` if the frontier ran dry first.
    pub path: Option<Rc<Path<S, W>>>,
    /// Counters for diagnostics.
    pub stats: SearchStats,
}

impl<S, W: Weight> Search<S, W> {
    /// Returns `true` if the goal was reached.
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Cost of the path found.
    pub fn cost(&self) -> Option<W> {
        self.path.as_ref().map(|p| p.cost())
    }

    /// Number of edges on the path found.
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.hops())
    }

    /// States of the path found, start to end.
    pub fn states(&self) -> Option<Vec<S>>
    where
        S: Clone,
    {
        self.path.as_ref().map(|p| p.states())
    }
}

/// Explores `space` from `start` until `is_goal` accepts a popped state.
///
/// 1. Push a zero-cost path holding `start`.
/// 2. Pop the next path. If its state is a goal, return it.
/// 3. If the state was already visited, discard the path; otherwise mark it
///    visited and push one extended path per successor that is not visited.
/// 4. When the frontier is empty, report no path.
///
/// An unreachable goal is not an error. Errors come from the frontier
/// (capacity) or from the space (e.g. a weighted search over a plain node).
pub fn run<Sp, F, M, G>(
    space: &Sp,
    start: Sp::State,
    is_goal: G,
    mut frontier: F,
    model: &M,
) -> Result<Search<Sp::State, Sp::Cost>>
where
    Sp: SearchSpace,
    F: Frontier<Pending<Sp::State, Sp::Cost>>,
    M: CostModel<Sp::State, Sp::Cost>,
    G: Fn(&Sp::State) -> bool,
{
    let mut visited: HashSet<Sp::Key> = HashSet::new();
    let mut stats = SearchStats::default();

    frontier.add(Pending::new(Rc::new(Path::root(start)), Sp::Cost::zero()))?;
    stats.pushed = 1;
    stats.peak_frontier = 1;

    while !frontier.is_empty() {
        let Pending { path, .. } = frontier.remove()?;

        if is_goal(path.state()) {
            tracing::debug!(
                hops = path.hops(),
                expanded = stats.expanded,
                pushed = stats.pushed,
                discarded = stats.discarded,
                "goal reached"
            );
            return Ok(Search {
                path: Some(path),
                stats,
            });
        }

        if !visited.insert(space.key(path.state())) {
            stats.discarded += 1;
            continue;
        }
        stats.expanded += 1;

        for (next, weight) in space.successors(path.state())? {
            if visited.contains(&space.key(&next)) {
                continue;
            }
            let cost = model.cost(&path, weight);
            let priority = model.priority(&next, cost);
            frontier.add(Pending::new(Rc::new(Path::extend(&path, next, cost)), priority))?;
            stats.pushed += 1;
        }
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    }

    tracing::debug!(
        expanded = stats.expanded,
        pushed = stats.pushed,
        "frontier exhausted without reaching the goal"
    );
    Ok(Search { path: None, stats })
}
