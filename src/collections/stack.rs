//! `BoundedStack` — a LIFO frontier with explicit, capped growth.

use super::{grown_capacity, Frontier};
use crate::config::FrontierConfig;
use crate::error::FrontierError;
use core::fmt;

/// A last-in, first-out stack backed by a `Vec` whose capacity is managed
/// explicitly: it doubles on overflow and never exceeds `max_capacity`.
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
    max_capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack with the default capacity policy.
    pub fn new() -> Self {
        Self::with_config(FrontierConfig::default())
    }

    /// Creates an empty stack with the given capacity policy.
    pub fn with_config(config: FrontierConfig) -> Self {
        let capacity = config.effective_initial();
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            max_capacity: config.max_capacity.max(1),
        }
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current logical capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pushes an item, doubling the capacity if the stack is full.
    pub fn push(&mut self, item: T) -> Result<(), FrontierError> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        self.items.push(item);
        Ok(())
    }

    /// Pops the most recently pushed item.
    pub fn pop(&mut self) -> Result<T, FrontierError> {
        self.items.pop().ok_or(FrontierError::Underflow)
    }

    /// Returns a reference to the top item.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    fn grow(&mut self) -> Result<(), FrontierError> {
        let next = grown_capacity(self.capacity, self.max_capacity)?;
        self.items.reserve_exact(next - self.items.len());
        tracing::trace!(from = self.capacity, to = next, "stack grown");
        self.capacity = next;
        Ok(())
    }
}

impl<T> Frontier<T> for BoundedStack<T> {
    fn add(&mut self, item: T) -> Result<(), FrontierError> {
        self.push(item)
    }

    fn remove(&mut self) -> Result<T, FrontierError> {
        self.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("max_capacity", &self.max_capacity)
            .finish()
    }
}
