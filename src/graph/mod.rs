//! Arena-backed graph model.
//!
//! Nodes live in an index-addressed arena owned by [`Graph`]; neighbor lists
//! store [`NodeId`]s rather than references, so cyclic neighbor relations need
//! no shared ownership and node identity is an O(1) index comparison.
//!
//! - `node`: [`Node`] with optional weight map and auxiliary [`Payload`]
//! - `arena`: [`Graph`] storage and neighbor mutation
//! - `construct`: building graphs from values, grids, matrices and degree sequences
//! - `export`: adjacency matrices, edge lists and whole-graph metrics
//! - `cycle`: cycle detection on partially built undirected structures

pub mod arena;
pub mod construct;
pub mod cycle;
pub mod export;
pub mod node;

pub use arena::Graph;
pub use cycle::has_cycle_from;
pub use export::Edge;
pub use node::{Node, Payload};

use core::cmp::Ordering;
use core::fmt;
use core::ops::Add;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// A stable index naming a node inside one [`Graph`].
///
/// Ids are never reused by the graph that issued them, so an id whose node
/// was removed is reported as [`Error::UnknownNode`](crate::Error::UnknownNode).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw arena index.
    #[inline(always)]
    pub const fn new(idx: usize) -> Self {
        Self(idx)
    }

    /// Returns the raw arena index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Numeric edge weight / path cost.
///
/// Blanket-implemented for every type with the required arithmetic, so `f64`,
/// `f32` and the integer types all qualify. An unweighted edge counts as
/// `W::one()`.
pub trait Weight: Copy + PartialOrd + Zero + One + Add<Output = Self> + fmt::Debug {}

impl<W> Weight for W where W: Copy + PartialOrd + Zero + One + Add<Output = W> + fmt::Debug {}

/// Total order over weights; incomparable values (NaN) compare equal.
#[inline]
pub fn compare_weights<W: Weight>(a: &W, b: &W) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Returns `true` if `w` is a valid (non-negative, comparable) edge weight.
#[inline]
pub(crate) fn is_valid_weight<W: Weight>(w: W) -> bool {
    w >= W::zero()
}
