//! `MaxHeap` — a priority queue implemented with a binary heap.
//!
//! This structure guarantees that the root is always the greatest element.
//! Min-priority behaviour is obtained by giving items an inverted `Ord`
//! (see [`Pending`](crate::search::Pending)), not by a separate min-heap.

use super::Frontier;
use crate::config::FrontierConfig;
use crate::error::FrontierError;
use core::cmp::Ord;
use core::fmt;

/// A binary max-heap with a hard size limit.
pub struct MaxHeap<T> {
    data: Vec<T>,
    max_capacity: usize,
}

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty binary heap with the default capacity policy.
    pub fn new() -> Self {
        Self::with_config(FrontierConfig::default())
    }

    /// Creates an empty binary heap with the given capacity policy.
    pub fn with_config(config: FrontierConfig) -> Self {
        Self {
            data: Vec::with_capacity(config.effective_initial()),
            max_capacity: config.max_capacity.max(1),
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pushes an item onto the binary heap.
    pub fn push(&mut self, item: T) -> Result<(), FrontierError> {
        if self.data.len() >= self.max_capacity {
            return Err(FrontierError::CapacityExceeded {
                max: self.max_capacity,
            });
        }
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// Pops the greatest item from the binary heap.
    pub fn pop(&mut self) -> Result<T, FrontierError> {
        if self.data.is_empty() {
            return Err(FrontierError::Underflow);
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let item = self.data.pop().ok_or(FrontierError::Underflow)?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(item)
    }

    /// Returns a reference to the greatest item in the binary heap.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Consumes the heap, returning its items in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            out.push(item);
        }
        out.reverse();
        out
    }

    /// Iterates over all elements in the heap in arbitrary order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(parent, node) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut greater = left;
            if right < len && self.less(left, right) {
                greater = right;
            }

            if self.less(node, greater) {
                self.data.swap(node, greater);
                node = greater;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.data[a] < self.data[b]
    }
}

impl<T: Ord> Frontier<T> for MaxHeap<T> {
    fn add(&mut self, item: T) -> Result<(), FrontierError> {
        self.push(item)
    }

    fn remove(&mut self) -> Result<T, FrontierError> {
        self.pop()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    /// Builds an unbounded heap from `iter`.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::with_config(FrontierConfig::new(1, usize::MAX));
        for item in iter {
            // An unbounded heap cannot reject a push.
            let _ = heap.push(item);
        }
        heap
    }
}

impl<T: fmt::Debug + Ord> fmt::Debug for MaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxHeap")
            .field("len", &self.len())
            .field("peek", &self.peek())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Reverse;

    #[test]
    fn test_binary_heap_basic() {
        let mut heap = MaxHeap::new();
        heap.push(1).unwrap();
        heap.push(5).unwrap();
        heap.push(2).unwrap();
        heap.push(10).unwrap();

        assert_eq!(heap.peek(), Some(&10));
        assert_eq!(heap.pop(), Ok(10));
        assert_eq!(heap.peek(), Some(&5));
        assert_eq!(heap.pop(), Ok(5));
        assert_eq!(heap.pop(), Ok(2));
        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Err(FrontierError::Underflow));
    }

    #[test]
    fn test_binary_heap_order() {
        let data = vec![1, 10, 5, 2, 8, 3, 7];
        let heap: MaxHeap<_> = data.iter().copied().collect();
        assert_eq!(heap.iter().count(), data.len());

        let mut expected = data;
        expected.sort();
        assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn test_inverted_order_pops_minimum() {
        let mut heap = MaxHeap::new();
        for x in [4, 9, 1, 7] {
            heap.push(Reverse(x)).unwrap();
        }
        assert_eq!(heap.pop(), Ok(Reverse(1)));
        assert_eq!(heap.pop(), Ok(Reverse(4)));
    }

    #[test]
    fn test_capacity_limit() {
        let mut heap = MaxHeap::with_config(FrontierConfig::new(1, 2));
        heap.push(1).unwrap();
        heap.push(2).unwrap();
        assert_eq!(heap.push(3), Err(FrontierError::CapacityExceeded { max: 2 }));
        assert_eq!(heap.len(), 2);
    }
}
