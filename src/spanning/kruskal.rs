//! Kruskal's algorithm: grow a forest edge by edge, rejecting cycles.

use super::{admit, require_weighted, VertexMap};
use crate::error::Result;
use crate::graph::{has_cycle_from, Graph, Weight};

/// Builds a minimum spanning forest: one tree per connected component.
///
/// Edges are taken in ascending weight order. When both endpoints are
/// already in the forest the edge is linked tentatively and kept only if
/// [`has_cycle_from`] finds no cycle; otherwise the missing endpoints are
/// cloned in and linked. Vertices without edges become single-vertex trees.
///
/// Returns `Ok(None)` for an empty graph.
pub fn kruskal<T: Clone, W: Weight>(graph: &Graph<T, W>) -> Result<Option<Graph<T, W>>> {
    if graph.is_empty() {
        tracing::debug!("kruskal: empty graph");
        return Ok(None);
    }
    require_weighted(graph)?;

    let mut forest = Graph::with_capacity(graph.len());
    let mut vertices = VertexMap::with_capacity(graph.len());

    for edge in graph.sorted_undirected_edges() {
        if edge.from == edge.to {
            continue;
        }
        let (a, b) = match (vertices.get(&edge.from).copied(), vertices.get(&edge.to).copied()) {
            (Some(a), Some(b)) => {
                forest.add_mutual(a, b, edge.weight)?;
                if has_cycle_from(&forest, a)? {
                    forest.remove_mutual(a, b)?;
                    tracing::trace!(from = %edge.from, to = %edge.to, "edge closes a cycle");
                }
                continue;
            }
            (Some(a), None) => (a, admit(graph, &mut forest, &mut vertices, edge.to)?),
            (None, Some(b)) => (admit(graph, &mut forest, &mut vertices, edge.from)?, b),
            (None, None) => {
                let a = admit(graph, &mut forest, &mut vertices, edge.from)?;
                (a, admit(graph, &mut forest, &mut vertices, edge.to)?)
            }
        };
        forest.add_mutual(a, b, edge.weight)?;
    }

    for &id in graph.ids() {
        if !vertices.contains_key(&id) {
            admit(graph, &mut forest, &mut vertices, id)?;
        }
    }

    Ok(Some(forest))
}
