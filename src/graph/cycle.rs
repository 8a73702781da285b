//! Cycle detection on undirected structures that are presumed to be trees.
//!
//! Used by Kruskal's builder after tentatively linking two vertices that are
//! both already in the forest.

use super::arena::Graph;
use super::{NodeId, Weight};
use crate::collections::RingQueue;
use crate::config::{FrontierConfig, DEFAULT_INITIAL_CAPACITY};
use crate::error::Result;
use std::collections::HashMap;

/// Returns `true` if the component containing `endpoint` has a cycle.
///
/// Runs a breadth-first search from `endpoint`, recording which vertex
/// discovered each vertex. An edge `u - v` to an already discovered `v`
/// signals a cycle unless `v` is `u`'s discoverer or `u` discovered `v`, i.e.
/// unless it is the tree edge seen from its other end. Edges back to the root
/// from its direct children fall under the same rule. O(V + E).
///
/// The work queue is a [`RingQueue`] capped at the graph's size, since every
/// vertex is enqueued at most once.
///
/// Links must be mutual (see [`Graph::add_mutual`]); a one-way link would be
/// reported as a cycle when reached from its target.
pub fn has_cycle_from<T, W: Weight>(graph: &Graph<T, W>, endpoint: NodeId) -> Result<bool> {
    graph.try_node(endpoint)?;

    let mut discoverer: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    let mut queue = RingQueue::with_config(FrontierConfig::new(
        DEFAULT_INITIAL_CAPACITY,
        graph.len(),
    ));
    discoverer.insert(endpoint, None);
    queue.push_back(endpoint)?;

    while !queue.is_empty() {
        let current = queue.pop_front()?;
        let parent = discoverer.get(&current).copied().flatten();
        for &neighbor in graph.neighbors(current)? {
            match discoverer.get(&neighbor) {
                None => {
                    discoverer.insert(neighbor, Some(current));
                    queue.push_back(neighbor)?;
                }
                Some(&found_by) => {
                    if found_by != Some(current) && parent != Some(neighbor) {
                        tracing::trace!(%current, %neighbor, "cycle edge found");
                        return Ok(true);
                    }
                }
            }
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn weighted(n: usize) -> (Graph<usize>, Vec<NodeId>) {
        let graph = Graph::from_weighted_values(0..n);
        let ids = graph.ids().to_vec();
        (graph, ids)
    }

    #[test]
    fn test_path_has_no_cycle() {
        let (mut graph, ids) = weighted(4);
        graph.add_mutual(ids[0], ids[1], 1.0).unwrap();
        graph.add_mutual(ids[1], ids[2], 1.0).unwrap();
        graph.add_mutual(ids[2], ids[3], 1.0).unwrap();
        for &id in &ids {
            assert!(!has_cycle_from(&graph, id).unwrap());
        }
    }

    #[test]
    fn test_star_has_no_cycle() {
        let (mut graph, ids) = weighted(5);
        for &leaf in &ids[1..] {
            graph.add_mutual(ids[0], leaf, 1.0).unwrap();
        }
        assert!(!has_cycle_from(&graph, ids[0]).unwrap());
        assert!(!has_cycle_from(&graph, ids[3]).unwrap());
    }

    #[test]
    fn test_closing_edge_is_detected_from_any_endpoint() {
        let (mut graph, ids) = weighted(4);
        graph.add_mutual(ids[0], ids[1], 1.0).unwrap();
        graph.add_mutual(ids[1], ids[2], 1.0).unwrap();
        graph.add_mutual(ids[2], ids[3], 1.0).unwrap();
        graph.add_mutual(ids[3], ids[0], 1.0).unwrap();
        for &id in &ids {
            assert!(has_cycle_from(&graph, id).unwrap());
        }
    }

    #[test]
    fn test_triangle_through_root() {
        let (mut graph, ids) = weighted(3);
        graph.add_mutual(ids[0], ids[1], 1.0).unwrap();
        graph.add_mutual(ids[0], ids[2], 1.0).unwrap();
        assert!(!has_cycle_from(&graph, ids[0]).unwrap());
        graph.add_mutual(ids[1], ids[2], 1.0).unwrap();
        assert!(has_cycle_from(&graph, ids[0]).unwrap());
    }

    #[test]
    fn test_cycle_elsewhere_is_not_reported() {
        let (mut graph, ids) = weighted(5);
        graph.add_mutual(ids[0], ids[1], 1.0).unwrap();
        graph.add_mutual(ids[2], ids[3], 1.0).unwrap();
        graph.add_mutual(ids[3], ids[4], 1.0).unwrap();
        graph.add_mutual(ids[4], ids[2], 1.0).unwrap();
        assert!(!has_cycle_from(&graph, ids[0]).unwrap());
        assert!(has_cycle_from(&graph, ids[2]).unwrap());
    }

    #[test]
    fn test_star_wider_than_initial_queue() {
        // Every leaf is queued at once, so the ring grows to the vertex count.
        let (mut graph, ids) = weighted(3 * DEFAULT_INITIAL_CAPACITY + 5);
        for &leaf in &ids[1..] {
            graph.add_mutual(ids[0], leaf, 1.0).unwrap();
        }
        assert!(!has_cycle_from(&graph, ids[0]).unwrap());

        let (first, last) = (ids[1], ids[ids.len() - 1]);
        graph.add_mutual(first, last, 1.0).unwrap();
        assert!(has_cycle_from(&graph, ids[0]).unwrap());
        assert!(has_cycle_from(&graph, last).unwrap());
    }

    #[test]
    fn test_unknown_endpoint() {
        let (graph, _) = weighted(1);
        let missing = NodeId::new(9);
        assert_eq!(has_cycle_from(&graph, missing), Err(Error::UnknownNode(missing)));
    }
}
