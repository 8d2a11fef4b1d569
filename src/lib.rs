//! algotrace turns algorithm runs into immutable step traces and plays them back.
//!
//! The API is split in two halves that only meet at [`StepSequence`]:
//!
//! - Validate an [`AlgorithmInput`] and [`generate`] its trace. Every [`Step`] carries a complete
//!   snapshot, so any index renders on its own.
//! - Load the sequence into a [`PlaybackController`] and drive it with transport calls and timer
//!   ticks from a [`Scheduler`](crate::playback::scheduler::Scheduler).
//!
//! See [`guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod algorithms;
pub mod config;
pub mod guide;
pub mod playback;
pub mod render;
pub mod trace;

pub use crate::foundation::core::{Speed, TraceLimits};
pub use crate::foundation::error::{TraceError, TraceResult};

pub use crate::algorithms::input::{AlgorithmInput, ResetPolicy, generate, parse_number_list};
pub use crate::algorithms::sorting::SortAlgorithm;
pub use crate::config::SessionConfig;
pub use crate::playback::controller::{PlaybackController, PlaybackOpts, PlaybackState};
pub use crate::playback::observer::{RecordingObserver, StepObserver};
pub use crate::playback::scheduler::{Scheduler, TimerId, VirtualClock};
pub use crate::playback::session::{TreeVisualizer, Visualizer};
pub use crate::render::{TextObserver, render_step};
pub use crate::trace::fingerprint::TraceFingerprint;
pub use crate::trace::snapshot::AlgorithmState;
pub use crate::trace::step::{Step, StepSequence};
pub use crate::trace::tags::SemanticTags;
