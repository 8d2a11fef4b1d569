//! Choose / recurse / undo searches flattened into linear traces.
//!
//! Each candidate is tried in ascending order, so the order in which solutions appear in
//! the trace is itself reproducible.

/// N-Queens placement search.
pub mod n_queens;
/// Subsets of positive numbers that hit a target sum.
pub mod subset_sum;
