//! DFS, BFS, Dijkstra and A* over [`Graph`]s.

use super::cost::{EdgeWeight, HopCount, Heuristic};
use super::engine::{run, Search};
use super::space::GraphSpace;
use crate::collections::{BoundedStack, MaxHeap, RingQueue};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::graph::{Graph, NodeId, Weight};

/// Runs graph searches with a shared [`SearchConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Traversal {
    config: SearchConfig,
}

impl Traversal {
    /// Creates a traversal runner.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration used for every run.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Depth-first search from `start` to `end`.
    pub fn dfs<T, W: Weight>(
        &self,
        graph: &Graph<T, W>,
        start: NodeId,
        end: NodeId,
    ) -> Result<Search<NodeId, W>> {
        check_endpoints(graph, start, end)?;
        tracing::debug!(%start, %end, "dfs");
        run(
            &GraphSpace::unweighted(graph),
            start,
            |&n| n == end,
            BoundedStack::with_config(self.config.frontier),
            &HopCount,
        )
    }

    /// Breadth-first search from `start` to `end`.
    ///
    /// The path found has the minimum number of edges. Results are
    /// deterministic for a given neighbor insertion order.
    pub fn bfs<T, W: Weight>(
        &self,
        graph: &Graph<T, W>,
        start: NodeId,
        end: NodeId,
    ) -> Result<Search<NodeId, W>> {
        check_endpoints(graph, start, end)?;
        tracing::debug!(%start, %end, "bfs");
        run(
            &GraphSpace::unweighted(graph),
            start,
            |&n| n == end,
            RingQueue::with_config(self.config.frontier),
            &HopCount,
        )
    }

    /// Dijkstra's cheapest path from `start` to `end`.
    ///
    /// Requires weighted nodes along the explored region
    /// ([`Error::MissingWeights`](crate::Error::MissingWeights) otherwise) and
    /// non-negative weights, which the graph enforces on insertion.
    pub fn dijkstra<T, W: Weight>(
        &self,
        graph: &Graph<T, W>,
        start: NodeId,
        end: NodeId,
    ) -> Result<Search<NodeId, W>> {
        check_endpoints(graph, start, end)?;
        tracing::debug!(%start, %end, "dijkstra");
        run(
            &GraphSpace::weighted(graph),
            start,
            |&n| n == end,
            MaxHeap::with_config(self.config.frontier),
            &EdgeWeight,
        )
    }

    /// A* from `start` to `end` guided by `heuristic`.
    ///
    /// The result is as cheap as Dijkstra's when `heuristic` never
    /// overestimates the remaining cost to `end`.
    pub fn astar<T, W, H>(
        &self,
        graph: &Graph<T, W>,
        start: NodeId,
        end: NodeId,
        heuristic: H,
    ) -> Result<Search<NodeId, W>>
    where
        W: Weight,
        H: Fn(NodeId) -> W,
    {
        check_endpoints(graph, start, end)?;
        tracing::debug!(%start, %end, "astar");
        run(
            &GraphSpace::weighted(graph),
            start,
            |&n| n == end,
            MaxHeap::with_config(self.config.frontier),
            &Heuristic(|n: &NodeId| heuristic(*n)),
        )
    }
}

fn check_endpoints<T, W: Weight>(graph: &Graph<T, W>, start: NodeId, end: NodeId) -> Result<()> {
    graph.try_node(start)?;
    graph.try_node(end)?;
    Ok(())
}

/// Depth-first search with the default configuration.
pub fn dfs<T, W: Weight>(
    graph: &Graph<T, W>,
    start: NodeId,
    end: NodeId,
) -> Result<Search<NodeId, W>> {
    Traversal::default().dfs(graph, start, end)
}

/// Breadth-first search with the default configuration.
pub fn bfs<T, W: Weight>(
    graph: &Graph<T, W>,
    start: NodeId,
    end: NodeId,
) -> Result<Search<NodeId, W>> {
    Traversal::default().bfs(graph, start, end)
}

/// Dijkstra's algorithm with the default configuration.
pub fn dijkstra<T, W: Weight>(
    graph: &Graph<T, W>,
    start: NodeId,
    end: NodeId,
) -> Result<Search<NodeId, W>> {
    Traversal::default().dijkstra(graph, start, end)
}

/// A* with the default configuration.
pub fn astar<T, W, H>(
    graph: &Graph<T, W>,
    start: NodeId,
    end: NodeId,
    heuristic: H,
) -> Result<Search<NodeId, W>>
where
    W: Weight,
    H: Fn(NodeId) -> W,
{
    Traversal::default().astar(graph, start, end, heuristic)
}

/// Straight-line distance to `goal` from node coordinates.
///
/// Nodes without [`Payload::Coordinates`](crate::graph::Payload) estimate 0.
/// Admissible whenever every edge weight is at least the Euclidean distance
/// between its endpoints.
pub fn straight_line<T>(graph: &Graph<T, f64>, goal: NodeId) -> impl Fn(NodeId) -> f64 + '_ {
    let target = graph.node(goal).and_then(|node| node.coordinates());
    move |id| match (target, graph.node(id).and_then(|node| node.coordinates())) {
        (Some((gx, gy)), Some((x, y))) => (gx - x).hypot(gy - y),
        _ => 0.0,
    }
}
