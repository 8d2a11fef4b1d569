//! Trace generators, one module per algorithm family, plus the JSON input boundary.

pub mod backtracking;
pub mod dp;
pub mod graph;
pub mod greedy;
pub mod input;
pub mod search;
pub mod sorting;
pub mod tree;
