//! Adjacency-matrix and edge-list materialization, plus whole-graph metrics.
//!
//! Matrix rows and columns follow the graph's insertion order.

use super::arena::Graph;
use super::{compare_weights, NodeId, Weight};
use serde::Serialize;

/// An edge between two nodes of the same graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge<W> {
    /// Source node (the lower matrix position for undirected edges).
    pub from: NodeId,
    /// Target node.
    pub to: NodeId,
    /// Edge weight, `W::one()` for unweighted links.
    pub weight: W,
}

impl<T, W: Weight> Graph<T, W> {
    /// Returns the 0/1 adjacency matrix in insertion order.
    ///
    /// The matrix is symmetric iff every link has a reverse link.
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.len();
        let mut matrix = vec![vec![0u8; n]; n];
        for (row, (_, node)) in self.iter().enumerate() {
            for &neighbor in node.neighbors() {
                if let Some(col) = self.position(neighbor) {
                    matrix[row][col] = 1;
                }
            }
        }
        matrix
    }

    /// Returns `true` if every link has a matching reverse link.
    pub fn is_undirected(&self) -> bool {
        let matrix = self.adjacency_matrix();
        (0..matrix.len()).all(|i| (i + 1..matrix.len()).all(|j| matrix[i][j] == matrix[j][i]))
    }

    /// One edge per stored neighbor link, in insertion order.
    pub fn directed_edges(&self) -> Vec<Edge<W>> {
        self.iter()
            .flat_map(|(from, node)| {
                node.neighbors().iter().map(move |&to| Edge {
                    from,
                    to,
                    weight: node.weight_to(to).unwrap_or_else(W::one),
                })
            })
            .collect()
    }

    /// One edge per unordered adjacent pair, read from the matrix's upper
    /// triangle (including self-loops).
    ///
    /// The weight is taken from the `from -> to` link if it is weighted,
    /// otherwise from the reverse link, otherwise `W::one()`.
    pub fn undirected_edges(&self) -> Vec<Edge<W>> {
        let matrix = self.adjacency_matrix();
        let ids = self.ids();
        let mut edges = Vec::new();
        for i in 0..ids.len() {
            for j in i..ids.len() {
                if matrix[i][j] == 0 && matrix[j][i] == 0 {
                    continue;
                }
                let (a, b) = (ids[i], ids[j]);
                let weight = self
                    .weight(a, b)
                    .or_else(|| self.weight(b, a))
                    .unwrap_or_else(W::one);
                edges.push(Edge {
                    from: a,
                    to: b,
                    weight,
                });
            }
        }
        edges
    }

    /// [`directed_edges`](Self::directed_edges) in ascending weight order (stable).
    pub fn sorted_directed_edges(&self) -> Vec<Edge<W>> {
        let mut edges = self.directed_edges();
        edges.sort_by(|a, b| compare_weights(&a.weight, &b.weight));
        edges
    }

    /// [`undirected_edges`](Self::undirected_edges) in ascending weight order (stable).
    pub fn sorted_undirected_edges(&self) -> Vec<Edge<W>> {
        let mut edges = self.undirected_edges();
        edges.sort_by(|a, b| compare_weights(&a.weight, &b.weight));
        edges
    }

    /// Number of unordered adjacent pairs.
    pub fn undirected_edge_count(&self) -> usize {
        self.undirected_edges().len()
    }

    /// Sum of the undirected edge weights.
    pub fn total_weight(&self) -> W {
        self.undirected_edges()
            .into_iter()
            .fold(W::zero(), |acc, edge| acc + edge.weight)
    }

    /// Component label (position of the component's representative) for each
    /// node in insertion order. Links are treated as undirected.
    pub fn components(&self) -> Vec<usize> {
        let mut sets = DisjointSet::new(self.len());
        for (row, (_, node)) in self.iter().enumerate() {
            for &neighbor in node.neighbors() {
                if let Some(col) = self.position(neighbor) {
                    sets.union(row, col);
                }
            }
        }
        (0..self.len()).map(|u| sets.find(u)).collect()
    }

    /// Number of weakly connected components.
    pub fn component_count(&self) -> usize {
        let labels = self.components();
        labels
            .iter()
            .enumerate()
            .filter(|&(i, &label)| i == label)
            .count()
    }
}

/// Union-find with path halving and union by size.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            core::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
    }
}
