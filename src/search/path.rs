//! Immutable path records built during a traversal.

use crate::graph::{compare_weights, Weight};
use core::cmp::Ordering;
use std::rc::Rc;

/// How a state was reached: an immutable cons list back to the start.
///
/// `hops` is the number of edges from the start; `cost` is the accumulated
/// cost under the traversal's [`CostModel`](super::CostModel) (the hop count
/// for unweighted searches).
#[derive(Debug)]
pub struct Path<S, W> {
    state: S,
    parent: Option<Rc<Path<S, W>>>,
    hops: usize,
    cost: W,
}

impl<S, W: Weight> Path<S, W> {
    /// A zero-cost path containing only `state`.
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            hops: 0,
            cost: W::zero(),
        }
    }

    /// Extends `parent` by one edge to `state`.
    pub fn extend(parent: &Rc<Self>, state: S, cost: W) -> Self {
        Self {
            state,
            parent: Some(Rc::clone(parent)),
            hops: parent.hops + 1,
            cost,
        }
    }

    /// The final state of the path.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The path this one extends, `None` at the start.
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.hops
    }

    /// Accumulated cost.
    pub fn cost(&self) -> W {
        self.cost
    }

    /// Number of states on the path.
    pub fn len(&self) -> usize {
        self.hops + 1
    }

    /// A path always holds at least its final state.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Walks from this path's end back to the start.
    pub fn ancestors(&self) -> Ancestors<'_, S, W> {
        Ancestors { next: Some(self) }
    }

    /// States from start to end.
    pub fn states(&self) -> Vec<S>
    where
        S: Clone,
    {
        let mut states: Vec<S> = self.ancestors().map(|p| p.state.clone()).collect();
        states.reverse();
        states
    }
}

impl<S, W> Drop for Path<S, W> {
    // Unlink uniquely owned ancestors iteratively; the default recursive drop
    // overflows the stack on very long chains.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut path) => next = path.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator from a path's end back to its start.
pub struct Ancestors<'a, S, W> {
    next: Option<&'a Path<S, W>>,
}

impl<'a, S, W> Iterator for Ancestors<'a, S, W> {
    type Item = &'a Path<S, W>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

/// A frontier entry: a path plus the priority it was queued with.
///
/// Ordering is inverted: a **lower** priority compares **greater**, so a
/// max-heap of `Pending` pops the cheapest path first. Stack and queue
/// frontiers ignore the ordering.
#[derive(Debug)]
pub struct Pending<S, W> {
    /// The queued path.
    pub path: Rc<Path<S, W>>,
    /// Priority used by heap frontiers.
    pub priority: W,
}

impl<S, W: Weight> Pending<S, W> {
    /// Queues `path` with `priority`.
    pub fn new(path: Rc<Path<S, W>>, priority: W) -> Self {
        Self { path, priority }
    }
}

impl<S, W: Weight> PartialEq for Pending<S, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S, W: Weight> Eq for Pending<S, W> {}

impl<S, W: Weight> PartialOrd for Pending<S, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, W: Weight> Ord for Pending<S, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_weights(&other.priority, &self.priority)
    }
}
