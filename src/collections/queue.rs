//! `RingQueue` — a FIFO frontier implemented as a growable ring buffer.
//!
//! Push/Pop: O(1) with ring buffer arithmetic. Freed slots at the front are
//! reused by later pushes without shifting. When the buffer is full it is
//! rebuilt at double the size, copying the live elements starting at `front`
//! so that `front` becomes 0 again.

use super::{grown_capacity, Frontier};
use crate::config::FrontierConfig;
use crate::error::FrontierError;
use core::fmt;

/// A first-in, first-out queue over a circular buffer.
pub struct RingQueue<T> {
    /// Slot storage; `buffer.len()` is the capacity.
    buffer: Vec<Option<T>>,
    /// Index of the next element to pop.
    front: usize,
    /// Number of elements in the queue.
    len: usize,
    max_capacity: usize,
}

impl<T> RingQueue<T> {
    /// Creates an empty queue with the default capacity policy.
    pub fn new() -> Self {
        Self::with_config(FrontierConfig::default())
    }

    /// Creates an empty queue with the given capacity policy.
    pub fn with_config(config: FrontierConfig) -> Self {
        let capacity = config.effective_initial();
        let mut buffer = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, || None);
        Self {
            buffer,
            front: 0,
            len: 0,
            max_capacity: config.max_capacity.max(1),
        }
    }

    /// Returns the number of elements in the queue.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the ring.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Index of the next element to pop (exposed for diagnostics).
    #[inline(always)]
    pub const fn front(&self) -> usize {
        self.front
    }

    /// Pushes an element to the back of the queue.
    pub fn push_back(&mut self, value: T) -> Result<(), FrontierError> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        let rear = (self.front + self.len) % self.capacity();
        self.buffer[rear] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Pops the element at the front of the queue.
    pub fn pop_front(&mut self) -> Result<T, FrontierError> {
        if self.is_empty() {
            return Err(FrontierError::Underflow);
        }
        let value = self.buffer[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        value.ok_or(FrontierError::Underflow)
    }

    /// Returns a reference to the front element.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.buffer[self.front].as_ref()
        }
    }

    fn grow(&mut self) -> Result<(), FrontierError> {
        let capacity = self.capacity();
        let next = grown_capacity(capacity, self.max_capacity)?;
        let mut rebuilt = Vec::with_capacity(next);
        for i in 0..self.len {
            rebuilt.push(self.buffer[(self.front + i) % capacity].take());
        }
        rebuilt.resize_with(next, || None);
        tracing::trace!(from = capacity, to = next, "queue grown");
        self.buffer = rebuilt;
        self.front = 0;
        Ok(())
    }
}

impl<T> Frontier<T> for RingQueue<T> {
    fn add(&mut self, item: T) -> Result<(), FrontierError> {
        self.push_back(item)
    }

    fn remove(&mut self) -> Result<T, FrontierError> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        for slot in &mut self.buffer {
            *slot = None;
        }
        self.front = 0;
        self.len = 0;
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("len", &self.len)
            .field("front", &self.front)
            .field("capacity", &self.capacity())
            .finish()
    }
}
