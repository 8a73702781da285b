//! Graph vertices.
//!
//! A single [`Node`] type covers plain, weighted and annotated vertices: the
//! weight map is optional and extra data lives in a tagged [`Payload`].

use super::{NodeId, Weight};
use std::collections::HashMap;

/// Auxiliary data carried by a node.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    /// No auxiliary data.
    #[default]
    None,
    /// Planar position, typically consumed by A* heuristics.
    Coordinates {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Per-edge transition labels keyed by neighbor.
    Labels(HashMap<NodeId, String>),
}

/// A labeled vertex holding a value and an insertion-ordered neighbor list.
///
/// A *weighted* node additionally maps each neighbor to an edge weight. For
/// weighted nodes the neighbor list and the weight map always hold exactly the
/// same ids, and a neighbor is never listed twice.
#[derive(Debug, Clone)]
pub struct Node<T, W = f64> {
    value: T,
    neighbors: Vec<NodeId>,
    weights: Option<HashMap<NodeId, W>>,
    payload: Payload,
}

impl<T, W: Weight> Node<T, W> {
    /// Creates an unweighted node.
    pub fn new(value: T) -> Self {
        Self {
            value,
            neighbors: Vec::new(),
            weights: None,
            payload: Payload::None,
        }
    }

    /// Creates a weighted node with no neighbors.
    pub fn weighted(value: T) -> Self {
        Self {
            weights: Some(HashMap::new()),
            ..Self::new(value)
        }
    }

    /// Attaches auxiliary data.
    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Adds a link before the node joins a graph (see [`Graph::from_nodes`]).
    ///
    /// [`Graph::from_nodes`]: super::Graph::from_nodes
    #[must_use]
    pub fn with_neighbor(mut self, id: NodeId) -> Self {
        self.link(id);
        self
    }

    /// Adds a weighted link before the node joins a graph.
    ///
    /// On a plain node the weight is dropped and a plain link is added.
    #[must_use]
    pub fn with_weighted_neighbor(mut self, id: NodeId, weight: W) -> Self {
        if self.link_weighted(id, weight).is_none() {
            self.link(id);
        }
        self
    }

    /// The node's value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the node's value.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the node, returning its value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Neighbors in insertion order.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Number of outgoing links.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns `true` if the node carries an edge-weight map.
    pub fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }

    /// Returns `true` if `id` is a neighbor.
    pub fn has_neighbor(&self, id: NodeId) -> bool {
        match &self.weights {
            Some(weights) => weights.contains_key(&id),
            None => self.neighbors.contains(&id),
        }
    }

    /// Weight of the edge to `id`; `None` for plain nodes or non-neighbors.
    pub fn weight_to(&self, id: NodeId) -> Option<W> {
        self.weights.as_ref()?.get(&id).copied()
    }

    /// The auxiliary payload.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Mutable access to the auxiliary payload.
    pub fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }

    /// Coordinates, if the payload carries them.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match self.payload {
            Payload::Coordinates { x, y } => Some((x, y)),
            _ => None,
        }
    }

    /// Transition label on the edge to `id`, if any.
    pub fn label_to(&self, id: NodeId) -> Option<&str> {
        match &self.payload {
            Payload::Labels(labels) => labels.get(&id).map(String::as_str),
            _ => None,
        }
    }

    /// Appends `id`. Plain nodes accept duplicates; weighted nodes ignore an
    /// existing neighbor and give a new one weight `W::one()`.
    pub(crate) fn link(&mut self, id: NodeId) {
        match &mut self.weights {
            Some(weights) => {
                if !weights.contains_key(&id) {
                    weights.insert(id, W::one());
                    self.neighbors.push(id);
                }
            }
            None => self.neighbors.push(id),
        }
    }

    /// Adds a weighted link.
    ///
    /// Returns `None` for a plain node, `Some(false)` if `id` was already a
    /// neighbor (the stored weight is kept), `Some(true)` otherwise.
    pub(crate) fn link_weighted(&mut self, id: NodeId, weight: W) -> Option<bool> {
        let weights = self.weights.as_mut()?;
        if weights.contains_key(&id) {
            return Some(false);
        }
        weights.insert(id, weight);
        self.neighbors.push(id);
        Some(true)
    }

    /// Removes every link to `id`. Returns `true` if anything was removed.
    pub(crate) fn unlink(&mut self, id: NodeId) -> bool {
        let before = self.neighbors.len();
        self.neighbors.retain(|&n| n != id);
        if let Some(weights) = &mut self.weights {
            weights.remove(&id);
        }
        if let Payload::Labels(labels) = &mut self.payload {
            labels.remove(&id);
        }
        self.neighbors.len() != before
    }

    /// Copies value, weightedness and position data, but no links.
    ///
    /// Labels are keyed by ids of the source graph and are dropped.
    pub(crate) fn detached_clone(&self) -> Self
    where
        T: Clone,
    {
        let payload = match self.payload {
            Payload::Coordinates { x, y } => Payload::Coordinates { x, y },
            _ => Payload::None,
        };
        Self {
            value: self.value.clone(),
            neighbors: Vec::new(),
            weights: self.weights.as_ref().map(|_| HashMap::new()),
            payload,
        }
    }
}
