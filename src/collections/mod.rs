//! Frontier containers that drive a traversal's exploration order.
//!
//! All three containers implement [`Frontier`]:
//! - [`BoundedStack`]: LIFO, drives depth-first search
//! - [`RingQueue`]: FIFO circular buffer, drives breadth-first search
//! - [`MaxHeap`]: binary max-heap, drives Dijkstra and A* (items invert their
//!   cost ordering so the cheapest pending path is the "greatest")
//!
//! Every container grows by doubling up to a hard maximum taken from
//! [`FrontierConfig`](crate::config::FrontierConfig); growing past it is a
//! [`FrontierError::CapacityExceeded`](crate::error::FrontierError) rather than
//! a silent truncation.

pub mod binary_heap;
pub mod queue;
pub mod stack;

pub use binary_heap::MaxHeap;
pub use queue::RingQueue;
pub use stack::BoundedStack;

use crate::error::FrontierError;

/// The pending-work container of a traversal.
pub trait Frontier<T> {
    /// Adds an item, growing the backing buffer if needed.
    fn add(&mut self, item: T) -> Result<(), FrontierError>;

    /// Removes the item with the highest priority for this container kind.
    ///
    /// Fails with [`FrontierError::Underflow`] when empty.
    fn remove(&mut self) -> Result<T, FrontierError>;

    /// Returns the number of pending items.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every pending item, keeping the allocated capacity.
    fn clear(&mut self);
}

/// Next capacity when a buffer of `capacity` slots is full.
///
/// Doubles, clamped to `max`. Fails when the buffer is already at `max`.
#[inline]
pub(crate) fn grown_capacity(capacity: usize, max: usize) -> Result<usize, FrontierError> {
    if capacity >= max {
        return Err(FrontierError::CapacityExceeded { max });
    }
    Ok(capacity.saturating_mul(2).clamp(1, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grown_capacity_doubles_until_max() {
        assert_eq!(grown_capacity(4, 100), Ok(8));
        assert_eq!(grown_capacity(64, 100), Ok(100));
        assert_eq!(
            grown_capacity(100, 100),
            Err(FrontierError::CapacityExceeded { max: 100 })
        );
    }

    #[test]
    fn test_trait_objects_share_one_interface() {
        let mut frontiers: Vec<Box<dyn Frontier<u32>>> = vec![
            Box::new(BoundedStack::new()),
            Box::new(RingQueue::new()),
            Box::new(MaxHeap::new()),
        ];
        for frontier in &mut frontiers {
            frontier.add(1).unwrap();
            frontier.add(2).unwrap();
            assert_eq!(frontier.len(), 2);
        }
        let first: Vec<u32> = frontiers.iter_mut().map(|f| f.remove().unwrap()).collect();
        assert_eq!(first, vec![2, 1, 2]);
        for frontier in &mut frontiers {
            frontier.clear();
            assert!(frontier.is_empty());
            assert_eq!(frontier.remove(), Err(FrontierError::Underflow));
        }
    }
}
