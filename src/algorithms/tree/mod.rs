//! Binary search tree insertion and traversal traces.
//!
//! [`Bst`] is an append-only arena: node ids never change once assigned, so the ids inside a
//! [`TreeSnapshot`](crate::trace::snapshot::TreeSnapshot) line up with the live tree that
//! produced it.

/// Arena-backed binary search tree.
pub mod bst;
/// Traced insertion.
pub mod insert;
/// Traced depth-first traversals.
pub mod traversal;

pub use bst::Bst;
pub use traversal::TraversalOrder;
