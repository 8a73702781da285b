//! The pluggable traversal engine and its four classic instantiations.
//!
//! One search loop ([`engine::run`]) is parameterized over
//! - a [`SearchSpace`]: how states expand and how visited states are keyed,
//! - a [`Frontier`](crate::collections::Frontier): which pending path is next,
//! - a [`CostModel`]: how path costs and heap priorities are computed.
//!
//! | algorithm | frontier | cost model |
//! |---|---|---|
//! | depth-first | [`BoundedStack`](crate::collections::BoundedStack) | [`HopCount`] |
//! | breadth-first | [`RingQueue`](crate::collections::RingQueue) | [`HopCount`] |
//! | Dijkstra | [`MaxHeap`](crate::collections::MaxHeap) | [`EdgeWeight`] |
//! | A* | [`MaxHeap`](crate::collections::MaxHeap) | [`Heuristic`] |

pub mod cost;
pub mod engine;
pub mod path;
pub mod space;
pub mod traversal;

pub use cost::{CostModel, EdgeWeight, HopCount, Heuristic};
pub use engine::{run, Search, SearchStats};
pub use path::{Ancestors, Path, Pending};
pub use space::{GraphSpace, SearchSpace};
pub use traversal::{astar, bfs, dfs, dijkstra, straight_line, Traversal};
