//! # algotrace guide
//!
//! A walkthrough of how a trace is produced and how playback consumes it. For command-line usage
//! see the repository `README.md`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`AlgorithmInput`](crate::AlgorithmInput): one algorithm plus its arguments, loadable from JSON
//! - [`Step`](crate::Step): a description, a complete [`AlgorithmState`](crate::AlgorithmState)
//!   snapshot, and [`SemanticTags`](crate::SemanticTags) for colouring
//! - [`StepSequence`](crate::StepSequence): the frozen, shareable trace of one run
//! - [`PlaybackController`](crate::PlaybackController): a cursor plus transport over one sequence
//! - [`Scheduler`](crate::Scheduler): where time lives; [`VirtualClock`](crate::VirtualClock) for
//!   tests, a real-time loop in the CLI
//!
//! The pipeline runs one way:
//!
//! 1. Validate: [`AlgorithmInput::validate`](crate::AlgorithmInput::validate)
//! 2. Generate eagerly: [`generate`](crate::generate)
//! 3. Play: [`PlaybackController::load`](crate::PlaybackController::load), then transport calls
//!
//! Generation finishes before playback starts. Nothing that happens during playback can fail.
//!
//! ---
//!
//! ## Snapshot completeness
//!
//! Every step owns a deep copy of the state it shows. Rendering step `k` never needs step `k - 1`,
//! which is what makes [`PlaybackController::seek`](crate::PlaybackController::seek) and `prev`
//! trivial: the cursor moves, the observer gets the new step, done.
//!
//! Trees are copied as arenas ([`TreeSnapshot`](crate::trace::snapshot::TreeSnapshot)). Arrays carry
//! element ids so a renderer can animate the same value across swaps.
//!
//! ---
//!
//! ## Flattening recursion
//!
//! Recursive algorithms (merge sort, quick sort, tree insertion, DFS, N-Queens, subset sum,
//! memoized Fibonacci) run to completion inside the generator. A step is appended at each enter,
//! decision, and return point, so the linear trace still shows the call structure, including the
//! "undo" half of backtracking.
//!
//! ---
//!
//! ## Generating and playing a trace
//!
//! ```rust
//! use std::time::Duration;
//!
//! use algotrace::{
//!     AlgorithmInput, PlaybackController, PlaybackOpts, PlaybackState, SortAlgorithm,
//!     TraceLimits, generate,
//! };
//!
//! # fn main() -> algotrace::TraceResult<()> {
//! let input = AlgorithmInput::Sort {
//!     algorithm: SortAlgorithm::Bubble,
//!     array: vec![5, 2, 8, 1],
//! };
//! let steps = generate(&input, &TraceLimits::default())?;
//!
//! let mut ctl = PlaybackController::new(PlaybackOpts::default())?;
//! ctl.load(steps);
//! ctl.play();
//!
//! // Three 700ms ticks.
//! assert_eq!(ctl.pump(Duration::from_millis(2100)), 3);
//! assert_eq!(ctl.current_index(), Some(3));
//!
//! ctl.pump(Duration::from_secs(3600));
//! assert_eq!(ctl.state(), PlaybackState::Complete);
//! # Ok(())
//! # }
//! ```
//!
//! Inputs also arrive as JSON, tagged by `kind`:
//!
//! ```rust
//! # fn main() -> algotrace::TraceResult<()> {
//! let input = algotrace::AlgorithmInput::from_json(r#"{ "kind": "n_queens", "n": 4 }"#)?;
//! let steps = algotrace::generate(&input, &algotrace::TraceLimits::default())?;
//! assert_eq!(
//!     steps.last().map(|s| s.description.as_str()),
//!     Some("Completed! Found 2 solutions.")
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ---
//!
//! ## Playback rules
//!
//! - Exactly one timer is pending while [`PlaybackState::Playing`](crate::PlaybackState); any
//!   other id reaching [`PlaybackController::on_timer`](crate::PlaybackController::on_timer) is
//!   ignored. Pause, reset, and load all cancel the pending tick.
//! - `next` and `prev` are ignored while playing. `seek` is honoured and autoplay continues from
//!   the new index.
//! - `play` from the last step rewinds to the first.
//! - [`PlaybackController::set_speed`](crate::PlaybackController::set_speed) clamps into the
//!   configured bounds and applies from the next tick.
//! - Observers ([`StepObserver`](crate::StepObserver)) hear every cursor change exactly once.
//!
//! ---
//!
//! ## Limits and errors
//!
//! [`TraceLimits`](crate::TraceLimits) caps input sizes so traces stay small enough to step
//! through by hand. Violations surface as [`TraceError::Validation`](crate::TraceError) before any
//! step is produced; a [`Visualizer`](crate::Visualizer) keeps its previous trace when a new input
//! is rejected.
//!
//! [`SessionConfig`](crate::SessionConfig) bundles limits with [`PlaybackOpts`](crate::PlaybackOpts)
//! and loads from JSON. Unknown keys are rejected.
//!
//! ---
//!
//! ## Determinism
//!
//! Generators use ordered containers only. The same input always yields the same steps, and
//! [`StepSequence::fingerprint`](crate::StepSequence::fingerprint) hashes the serialized trace with
//! a seeded xxh3 so two runs can be compared cheaply.
