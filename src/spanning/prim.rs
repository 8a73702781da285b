//! Prim's algorithm: grow a single tree greedily from the first vertex.

use super::{admit, require_weighted, VertexMap};
use crate::error::Result;
use crate::graph::{Graph, NodeId, Weight};
use std::collections::HashSet;

/// Builds a minimum spanning tree of a connected, weighted graph.
///
/// Starting from the first vertex in insertion order, the ascending edge list
/// is rescanned for the cheapest edge with exactly one endpoint in the tree;
/// the other endpoint is cloned in and linked. O(E·V).
///
/// Returns `Ok(None)` for an empty graph, and for a disconnected one (no
/// admissible edge remains while vertices are still outside the tree).
pub fn prim<T: Clone, W: Weight>(graph: &Graph<T, W>) -> Result<Option<Graph<T, W>>> {
    let Some(&first) = graph.ids().first() else {
        tracing::debug!("prim: empty graph");
        return Ok(None);
    };
    require_weighted(graph)?;

    let edges = graph.sorted_undirected_edges();
    let mut tree = Graph::with_capacity(graph.len());
    let mut vertices = VertexMap::with_capacity(graph.len());
    let mut remaining: HashSet<NodeId> = graph.ids().iter().copied().collect();

    admit(graph, &mut tree, &mut vertices, first)?;
    remaining.remove(&first);

    while !remaining.is_empty() {
        let crossing = edges
            .iter()
            .find(|e| vertices.contains_key(&e.from) != vertices.contains_key(&e.to));
        let Some(edge) = crossing else {
            tracing::warn!(outside = remaining.len(), "prim: graph is disconnected");
            return Ok(None);
        };

        let (inside, outside) = if vertices.contains_key(&edge.from) {
            (edge.from, edge.to)
        } else {
            (edge.to, edge.from)
        };
        let anchor = vertices[&inside];
        let clone = admit(graph, &mut tree, &mut vertices, outside)?;
        remaining.remove(&outside);
        tree.add_mutual(anchor, clone, edge.weight)?;
    }

    Ok(Some(tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spanning::fixtures::{from_edges, nine_vertex};
    use crate::Error;

    #[test]
    fn test_nine_vertex_weight() {
        let graph = nine_vertex();
        let tree = prim(&graph).unwrap().unwrap();
        assert_eq!(tree.len(), 9);
        assert_eq!(tree.undirected_edge_count(), 8);
        assert_eq!(tree.total_weight(), 37.0);
        assert_eq!(tree.component_count(), 1);
        assert!(tree.is_undirected());
    }

    #[test]
    fn test_source_is_untouched() {
        let graph = nine_vertex();
        let before = graph.adjacency_matrix();
        prim(&graph).unwrap();
        assert_eq!(graph.adjacency_matrix(), before);
        assert_eq!(graph.undirected_edge_count(), 14);
    }

    #[test]
    fn test_tree_values_are_cloned() {
        let graph = nine_vertex();
        let tree = prim(&graph).unwrap().unwrap();
        let mut values: Vec<usize> = tree.iter().map(|(_, node)| *node.value()).collect();
        values.sort_unstable();
        assert_eq!(values, (0..9).collect::<Vec<_>>());
        // The first vertex is admitted first.
        assert_eq!(tree.value(tree.ids()[0]), Some(&0));
    }

    #[test]
    fn test_empty_and_disconnected() {
        assert!(prim(&Graph::<u8>::new()).unwrap().is_none());
        let graph = from_edges(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
        assert!(prim(&graph).unwrap().is_none());
    }

    #[test]
    fn test_single_vertex() {
        let graph = from_edges(1, &[]);
        let tree = prim(&graph).unwrap().unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.undirected_edge_count(), 0);
    }

    #[test]
    fn test_requires_weighted_nodes() {
        let graph: Graph<u8> = Graph::from_values([1, 2]);
        let first = graph.ids()[0];
        assert_eq!(prim(&graph).unwrap_err(), Error::MissingWeights(first));
    }
}
