//! Playback: a cursor over a frozen [`StepSequence`](crate::trace::step::StepSequence), driven
//! by transport calls and a single pending timer.
//!
//! Everything here is single-threaded. Time is owned by a [`scheduler::Scheduler`]; the
//! controller never sleeps, it only reacts to fired timer ids, so tests drive it with a
//! [`scheduler::VirtualClock`] and the CLI drives it from a real-time loop.

/// Transport state machine.
pub mod controller;
/// Render callbacks.
pub mod observer;
/// Timer scheduling.
pub mod scheduler;
pub mod session;
