//! # `wayfinder` - Graph Traversal and Shortest-Path Toolkit
//!
//! An arena-backed graph model and a single pluggable search loop that
//! drives depth-first search, breadth-first search, Dijkstra and A*, plus
//! spanning-tree builders and a sliding-tile puzzle solver built on the same
//! engine.
//!
//! ## Key Features
//!
//! - **Arena graph**: nodes live in a slot table addressed by [`NodeId`];
//!   neighbor lists store ids, so cyclic graphs need no shared ownership.
//! - **One search loop**: [`search::run`] is parameterized by a frontier
//!   ([`BoundedStack`], [`RingQueue`], [`MaxHeap`]), a
//!   [`CostModel`](search::CostModel) and a [`SearchSpace`](search::SearchSpace).
//! - **Bounded frontiers**: buffers grow by doubling up to a configured hard
//!   maximum and fail with [`FrontierError::CapacityExceeded`] beyond it.
//! - **Spanning trees**: [`spanning::prim`] and [`spanning::kruskal`] build
//!   fresh graphs and never touch their input.
//! - **Lazy state spaces**: [`puzzle`] boards expand into moves on demand and
//!   are deduplicated by a packed 128-bit key.
//!
//! ## Architecture
//!
//! ```text
//! Graph / Board ──► SearchSpace ─┐
//!                                ├──► engine::run ──► Path (parent chain)
//! Frontier + CostModel ──────────┘
//! ```
//!
//! Infeasible inputs (an unreachable goal, an empty graph handed to a
//! spanning-tree builder, an unsolvable board) are reported as values.
//! Structural failures are [`Error`]s.
//!
//! ## Example
//!
//! ```rust
//! use wayfinder::{search, Graph};
//!
//! let mut graph: Graph<&str> = Graph::new();
//! let a = graph.add_weighted_node("a");
//! let b = graph.add_weighted_node("b");
//! let c = graph.add_weighted_node("c");
//! graph.add_mutual(a, b, 1.0).unwrap();
//! graph.add_mutual(b, c, 1.0).unwrap();
//! graph.add_mutual(a, c, 5.0).unwrap();
//!
//! let hops = search::bfs(&graph, a, c).unwrap();
//! assert_eq!(hops.hops(), Some(1));
//!
//! let cheapest = search::dijkstra(&graph, a, c).unwrap();
//! assert_eq!(cheapest.cost(), Some(2.0));
//! assert_eq!(cheapest.states(), Some(vec![a, b, c]));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod config;
pub mod error;
pub mod graph;
pub mod puzzle;
pub mod search;
pub mod spanning;

pub use collections::{BoundedStack, Frontier, MaxHeap, RingQueue};
pub use config::{FrontierConfig, PuzzleConfig, SearchConfig};
pub use error::{Error, FrontierError, Result};
pub use graph::{has_cycle_from, Edge, Graph, Node, NodeId, Payload, Weight};
pub use search::{Path, Search, SearchStats, Traversal};

const _: () = {
    use core::mem;

    // Node ids are plain indices.
    assert!(mem::size_of::<NodeId>() == mem::size_of::<usize>());
};
