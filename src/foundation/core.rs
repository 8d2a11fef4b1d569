use std::time::Duration;

use crate::foundation::error::{TraceError, TraceResult};

/// Delay between two autoplay ticks, in milliseconds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Speed(pub u64);

impl Speed {
    /// Build a speed, rejecting a zero delay (which would spin the scheduler).
    pub fn from_millis(ms: u64) -> TraceResult<Self> {
        if ms == 0 {
            return Err(TraceError::config("speed must be > 0 ms"));
        }
        Ok(Self(ms))
    }

    /// Delay in milliseconds.
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Delay as a [`Duration`].
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Clamp into `[min, max]`.
    pub fn clamp(self, min: Speed, max: Speed) -> Speed {
        Speed(self.0.clamp(min.0, max.0))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(700)
    }
}

/// Upper bounds applied to algorithm inputs before generation.
///
/// Traces are materialized eagerly, so every family caps the size of its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TraceLimits {
    /// Maximum element count for sorting and searching inputs.
    pub max_array_len: usize,
    /// Maximum knapsack capacity (table width is `capacity + 1`).
    pub max_capacity: i64,
    /// Maximum knapsack item count.
    pub max_items: usize,
    /// Maximum board size for N-Queens.
    pub max_queens: usize,
    /// Maximum `n` for memoized Fibonacci.
    pub max_fibonacci: u32,
    /// Maximum candidate count for subset sum.
    pub max_subset_len: usize,
    /// Maximum node count for graph traversals and BST inputs.
    pub max_nodes: usize,
    /// Largest value counting sort accepts (its count array has `max + 1` slots).
    pub max_counting_value: i64,
}

impl Default for TraceLimits {
    fn default() -> Self {
        Self {
            max_array_len: 64,
            max_capacity: 100,
            max_items: 12,
            max_queens: 8,
            max_fibonacci: 30,
            max_subset_len: 12,
            max_nodes: 64,
            max_counting_value: 99,
        }
    }
}

impl TraceLimits {
    /// Check the limits themselves are usable.
    pub fn validate(&self) -> TraceResult<()> {
        if self.max_array_len == 0
            || self.max_items == 0
            || self.max_queens == 0
            || self.max_subset_len == 0
            || self.max_nodes == 0
        {
            return Err(TraceError::config("trace limits must be > 0"));
        }
        if self.max_capacity < 0 {
            return Err(TraceError::config("max_capacity must be >= 0"));
        }
        if self.max_counting_value < 0 {
            return Err(TraceError::config("max_counting_value must be >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
