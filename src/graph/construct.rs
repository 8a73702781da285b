//! Graph construction surfaces.
//!
//! Graphs can be assembled from bare values, from pre-built nodes (flat or as
//! a 2-D grid), from a square adjacency matrix, or synthesized from a degree
//! sequence.

use super::arena::Graph;
use super::node::Node;
use super::{is_valid_weight, NodeId, Weight};
use crate::error::{Error, Result};

impl<T, W: Weight> Graph<T, W> {
    /// Builds a graph of unlinked, unweighted nodes.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut graph = Self::new();
        for value in values {
            graph.add_node(value);
        }
        graph
    }

    /// Builds a graph of unlinked, weighted nodes.
    pub fn from_weighted_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut graph = Self::new();
        for value in values {
            graph.add_weighted_node(value);
        }
        graph
    }

    /// Builds a graph from pre-built nodes.
    ///
    /// The `i`-th node receives `NodeId::new(i)`, and neighbor ids carried by
    /// the nodes must refer to positions in `nodes`.
    pub fn from_nodes<I>(nodes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Node<T, W>>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.insert(node);
        }
        for (id, node) in graph.iter() {
            for &neighbor in node.neighbors() {
                if !graph.contains(neighbor) {
                    return Err(Error::UnknownNode(neighbor));
                }
                if node.weight_to(neighbor).is_some_and(|w| !is_valid_weight(w)) {
                    return Err(Error::NegativeWeight { from: id, to: neighbor });
                }
            }
        }
        Ok(graph)
    }

    /// Builds a graph from a 2-D grid of nodes, flattened row-major.
    pub fn from_grid(grid: Vec<Vec<Node<T, W>>>) -> Result<Self> {
        Self::from_nodes(grid.into_iter().flatten())
    }
}

impl<W: Weight> Graph<usize, W> {
    /// Synthesizes a weighted graph from a square adjacency matrix.
    ///
    /// Node `i` holds the value `i`. Every non-zero entry `matrix[i][j]`
    /// becomes an edge `i -> j` with that weight. With `undirected` set, a
    /// non-zero entry in either triangle links both endpoints mutually (the
    /// upper-triangle weight wins when both are present).
    pub fn from_adjacency_matrix(matrix: &[Vec<W>], undirected: bool) -> Result<Self> {
        let n = matrix.len();
        if let Some((row, entries)) = matrix.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(Error::NotSquare {
                row,
                len: entries.len(),
                expected: n,
            });
        }

        let mut graph = Self::from_weighted_values(0..n);
        let ids: Vec<NodeId> = graph.ids().to_vec();
        for i in 0..n {
            let columns = if undirected { i..n } else { 0..n };
            for j in columns {
                let mut weight = matrix[i][j];
                if undirected && weight.is_zero() {
                    weight = matrix[j][i];
                }
                if weight.is_zero() {
                    continue;
                }
                if undirected {
                    graph.add_mutual(ids[i], ids[j], weight)?;
                } else {
                    graph.add_weighted_neighbor(ids[i], ids[j], weight)?;
                }
            }
        }
        Ok(graph)
    }

    /// Synthesizes an undirected graph realizing `degrees` (Havel–Hakimi).
    ///
    /// Vertex `i` should end with `degrees[i]` neighbors. At every step the
    /// vertex with the highest remaining degree (ties: lowest label) is
    /// connected to the next-highest vertices. Returns `None` if the sequence
    /// cannot be realized by a simple graph.
    pub fn from_degree_sequence(degrees: &[usize]) -> Option<Self> {
        let n = degrees.len();
        let mut graph = Self::from_weighted_values(0..n);
        let ids: Vec<NodeId> = graph.ids().to_vec();
        let mut remaining = degrees.to_vec();

        loop {
            let mut ranked: Vec<usize> = (0..n).filter(|&v| remaining[v] > 0).collect();
            if ranked.is_empty() {
                return Some(graph);
            }
            ranked.sort_by(|&a, &b| remaining[b].cmp(&remaining[a]).then(a.cmp(&b)));

            let vertex = ranked[0];
            let degree = remaining[vertex];
            if degree > ranked.len() - 1 {
                tracing::debug!(vertex, degree, "degree sequence is not graphical");
                return None;
            }

            remaining[vertex] = 0;
            for &other in &ranked[1..=degree] {
                remaining[other] -= 1;
                graph.add_mutual(ids[vertex], ids[other], W::one()).ok()?;
            }
        }
    }
}
