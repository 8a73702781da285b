//! Minimum spanning trees and forests.
//!
//! Both builders read a weighted, undirected graph and return a new graph
//! made of detached clones of its nodes (see [`Graph::add_mutual`]); the input
//! graph is never modified. An empty input yields `Ok(None)`.

pub mod kruskal;
pub mod prim;

pub use kruskal::kruskal;
pub use prim::prim;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId, Weight};
use std::collections::HashMap;

/// Maps vertices of the source graph to their clones in the tree being built.
pub(crate) type VertexMap = HashMap<NodeId, NodeId>;

/// Fails with [`Error::MissingWeights`] on the first plain node.
pub(crate) fn require_weighted<T, W: Weight>(graph: &Graph<T, W>) -> Result<()> {
    match graph.iter().find(|(_, node)| !node.is_weighted()) {
        Some((id, _)) => Err(Error::MissingWeights(id)),
        None => Ok(()),
    }
}

/// Clones `id` from `source` into `tree` and records the mapping.
pub(crate) fn admit<T: Clone, W: Weight>(
    source: &Graph<T, W>,
    tree: &mut Graph<T, W>,
    vertices: &mut VertexMap,
    id: NodeId,
) -> Result<NodeId> {
    let clone = tree.insert(source.try_node(id)?.detached_clone());
    vertices.insert(id, clone);
    tracing::trace!(source = %id, clone = %clone, "vertex admitted");
    Ok(clone)
}
