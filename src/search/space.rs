//! Search spaces: what a state's successors are and how visits are keyed.

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId, Weight};
use core::hash::Hash;

/// A state space the engine can explore.
///
/// Spaces may be materialized (a [`Graph`]) or expand states lazily (the
/// sliding-tile puzzle). `Key` decides visited-state identity: node ids for
/// graphs, a structural hash for generated states.
pub trait SearchSpace {
    /// A search state.
    type State: Clone;
    /// Visited-set identity of a state.
    type Key: Eq + Hash;
    /// Edge weight and path cost type.
    type Cost: Weight;

    /// Identity used for visited marking.
    fn key(&self, state: &Self::State) -> Self::Key;

    /// Successor states with the weight of the edge leading to each.
    fn successors(&self, state: &Self::State) -> Result<Vec<(Self::State, Self::Cost)>>;
}

/// A [`Graph`] viewed as a search space over node ids.
#[derive(Debug, Clone, Copy)]
pub struct GraphSpace<'g, T, W> {
    graph: &'g Graph<T, W>,
    weighted: bool,
}

impl<'g, T, W: Weight> GraphSpace<'g, T, W> {
    /// Every edge has weight one; plain and weighted nodes are both accepted.
    pub fn unweighted(graph: &'g Graph<T, W>) -> Self {
        Self {
            graph,
            weighted: false,
        }
    }

    /// Edges carry their stored weights; expanding a plain node fails with
    /// [`Error::MissingWeights`].
    pub fn weighted(graph: &'g Graph<T, W>) -> Self {
        Self {
            graph,
            weighted: true,
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &'g Graph<T, W> {
        self.graph
    }
}

impl<'g, T, W: Weight> SearchSpace for GraphSpace<'g, T, W> {
    type State = NodeId;
    type Key = NodeId;
    type Cost = W;

    fn key(&self, state: &NodeId) -> NodeId {
        *state
    }

    fn successors(&self, state: &NodeId) -> Result<Vec<(NodeId, W)>> {
        let node = self.graph.try_node(*state)?;
        if self.weighted && !node.is_weighted() {
            return Err(Error::MissingWeights(*state));
        }
        Ok(node
            .neighbors()
            .iter()
            .map(|&n| {
                let weight = if self.weighted {
                    node.weight_to(n).unwrap_or_else(W::one)
                } else {
                    W::one()
                };
                (n, weight)
            })
            .collect())
    }
}
