//! Dynamic-programming traces: table filling (0/1 knapsack) and memoized recursion (Fibonacci).

/// Memoized Fibonacci.
pub mod fibonacci;
/// 0/1 knapsack table fill and backtrack.
pub mod knapsack;
