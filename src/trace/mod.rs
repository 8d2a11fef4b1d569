//! Immutable step-trace model.
//!
//! A trace is produced once by a generator through [`builder::TraceBuilder`] and frozen into a
//! [`step::StepSequence`]. Every [`step::Step`] owns a complete copy of the state it shows, so any
//! index can be rendered without looking at its neighbours.

/// Append-only trace construction.
pub mod builder;
/// Content hashing of traces.
pub mod fingerprint;
/// Per-family algorithm state.
pub mod snapshot;
/// Steps and frozen sequences.
pub mod step;
/// Per-family semantic annotations.
pub mod tags;
