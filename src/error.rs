//! Error taxonomy for frontiers, graphs, searches and puzzle boards.
//!
//! Structural failures (capacity, underflow, contract violations) are errors.
//! Infeasible inputs such as an unreachable goal, an empty graph handed to a
//! spanning-tree builder or an unsolvable board are reported as values
//! (`Option`, [`Solution::Unsolvable`](crate::puzzle::Solution::Unsolvable)).

use crate::graph::NodeId;
use thiserror::Error;

/// Failure of a [`Frontier`](crate::collections::Frontier) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrontierError {
    /// The container would have to grow past its hard maximum.
    #[error("frontier capacity exceeded (max {max} items)")]
    CapacityExceeded {
        /// The configured maximum capacity.
        max: usize,
    },
    /// `remove` was called on an empty container.
    #[error("remove called on an empty frontier")]
    Underflow,
}

/// Crate-wide error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A frontier failed while driving a traversal.
    #[error(transparent)]
    Frontier(#[from] FrontierError),
    /// The id does not name a live node of the graph.
    #[error("node {0} is not part of this graph")]
    UnknownNode(NodeId),
    /// A weighted algorithm reached a node that carries no edge weights.
    #[error("node {0} has no edge weights; weighted algorithms require weighted nodes")]
    MissingWeights(NodeId),
    /// A weighted edge was requested on a plain node.
    #[error("node {0} is unweighted and cannot hold a weighted edge")]
    Unweighted(NodeId),
    /// Edge weights must be non-negative.
    #[error("edge {from} -> {to} has a negative weight")]
    NegativeWeight {
        /// Source of the rejected edge.
        from: NodeId,
        /// Target of the rejected edge.
        to: NodeId,
    },
    /// A mutual link would leave the two directions with different weights.
    #[error("edge {from} -> {to} already exists with a different weight")]
    ConflictingWeight {
        /// Source of the existing edge.
        from: NodeId,
        /// Target of the existing edge.
        to: NodeId,
    },
    /// Adjacency matrices must be square.
    #[error("adjacency matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },
    /// The tile layout or board dimensions are invalid.
    #[error("invalid board: {0}")]
    InvalidBoard(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
