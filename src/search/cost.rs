//! Path-cost models.

use super::path::Path;
use crate::graph::Weight;

/// Computes the cost stored on a successor path and the priority it is
/// queued with.
pub trait CostModel<S, W> {
    /// Cost of extending `parent` by an edge of `weight`.
    fn cost(&self, parent: &Path<S, W>, weight: W) -> W;

    /// Priority of a successor `state` whose path cost is `cost`.
    fn priority(&self, _state: &S, cost: W) -> W {
        cost
    }
}

/// Every edge costs one: the cost is the hop count.
#[derive(Debug, Clone, Copy, Default)]
pub struct HopCount;

impl<S, W: Weight> CostModel<S, W> for HopCount {
    fn cost(&self, parent: &Path<S, W>, _weight: W) -> W {
        parent.cost() + W::one()
    }
}

/// Cumulative edge weight (Dijkstra).
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeWeight;

impl<S, W: Weight> CostModel<S, W> for EdgeWeight {
    fn cost(&self, parent: &Path<S, W>, weight: W) -> W {
        parent.cost() + weight
    }
}

/// Cumulative edge weight plus an estimate of the remaining cost (A*).
///
/// The path keeps the accumulated edge cost; only the queue priority includes
/// the estimate. The search is optimal only if the estimate never exceeds the
/// true remaining cost, which is the caller's responsibility.
#[derive(Debug, Clone, Copy)]
pub struct Heuristic<H>(pub H);

impl<S, W, H> CostModel<S, W> for Heuristic<H>
where
    W: Weight,
    H: Fn(&S) -> W,
{
    fn cost(&self, parent: &Path<S, W>, weight: W) -> W {
        parent.cost() + weight
    }

    fn priority(&self, state: &S, cost: W) -> W {
        cost + (self.0)(state)
    }
}
