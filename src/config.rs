//! Tuning knobs for frontiers, searches and the puzzle solver.
//!
//! Every struct deserializes with `serde`, and missing fields fall back to
//! their `Default` values so partial JSON documents are accepted.

use serde::{Deserialize, Serialize};

/// Default number of slots a frontier allocates up front.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Default hard limit on the number of items a frontier may hold.
pub const DEFAULT_MAX_CAPACITY: usize = 1 << 24;

/// Capacity policy shared by the stack, queue and heap frontiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontierConfig {
    /// Slots allocated on construction. Clamped to at least one.
    pub initial_capacity: usize,
    /// Capacity the buffer may never exceed.
    pub max_capacity: usize,
}

impl FrontierConfig {
    /// Creates a policy with explicit bounds.
    pub fn new(initial_capacity: usize, max_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_capacity,
        }
    }

    /// Initial capacity after clamping into `1..=max_capacity`.
    pub(crate) fn effective_initial(&self) -> usize {
        self.initial_capacity.max(1).min(self.max_capacity.max(1))
    }
}

impl Default for FrontierConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_CAPACITY)
    }
}

/// Configuration for a [`Traversal`](crate::search::Traversal).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Capacity policy for the frontier created by each run.
    pub frontier: FrontierConfig,
}

/// Configuration for the sliding-tile solver entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Board height.
    pub rows: usize,
    /// Board width.
    pub cols: usize,
    /// Seed for board generation; `None` draws from system entropy.
    pub seed: Option<u64>,
    /// Search configuration used by the A* run.
    pub search: SearchConfig,
}

impl PuzzleConfig {
    /// Parses a JSON document, filling in defaults for missing fields.
    pub fn from_json_str(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            seed: None,
            search: SearchConfig::default(),
        }
    }
}
