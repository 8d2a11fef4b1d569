//! Visualizer front-ends: each owns a controller and knows how to rebuild or clear its trace.

use crate::algorithms::input::{AlgorithmInput, ResetPolicy, generate};
use crate::algorithms::tree::{Bst, TraversalOrder, insert, traversal};
use crate::config::SessionConfig;
use crate::foundation::core::TraceLimits;
use crate::foundation::error::{TraceError, TraceResult};
use crate::playback::controller::PlaybackController;
use crate::playback::scheduler::{Scheduler, VirtualClock};
use crate::trace::step::StepSequence;

/// One algorithm input at a time, replayable through a [`PlaybackController`].
///
/// On [`Visualizer::reset`], sorting, searching, graph and DP inputs regenerate their trace from
/// the stored input; backtracking inputs drop it.
pub struct Visualizer<S: Scheduler = VirtualClock> {
    input: Option<AlgorithmInput>,
    limits: TraceLimits,
    controller: PlaybackController<S>,
}

impl Visualizer<VirtualClock> {
    /// Visualizer on a virtual clock.
    pub fn new(config: &SessionConfig) -> TraceResult<Self> {
        config.validate()?;
        Ok(Self::with_controller(
            PlaybackController::new(config.playback)?,
            config.limits,
        ))
    }
}

impl<S: Scheduler> Visualizer<S> {
    /// Visualizer around an existing controller.
    pub fn with_controller(controller: PlaybackController<S>, limits: TraceLimits) -> Self {
        Self {
            input: None,
            limits,
            controller,
        }
    }

    /// Validate and generate `input`, then load the trace.
    ///
    /// On error nothing changes: the previous input and trace stay loaded.
    pub fn run(&mut self, input: AlgorithmInput) -> TraceResult<&StepSequence> {
        let seq = generate(&input, &self.limits)?;
        self.input = Some(input);
        self.controller.load(seq);
        self.controller
            .steps()
            .ok_or_else(|| TraceError::Other(anyhow::anyhow!("loaded sequence missing")))
    }

    /// Apply the input's reset policy.
    pub fn reset(&mut self) {
        let Some(input) = &self.input else {
            self.controller.clear();
            return;
        };
        match input.reset_policy() {
            ResetPolicy::Regenerate => {
                let seq = input.run();
                self.controller.load(seq);
            }
            ResetPolicy::Clear => {
                self.input = None;
                self.controller.clear();
            }
        }
    }

    /// Input behind the loaded trace.
    pub fn input(&self) -> Option<&AlgorithmInput> {
        self.input.as_ref()
    }

    /// Limits applied by [`Visualizer::run`].
    pub fn limits(&self) -> &TraceLimits {
        &self.limits
    }

    /// Transport.
    pub fn controller(&self) -> &PlaybackController<S> {
        &self.controller
    }

    /// Mutable transport.
    pub fn controller_mut(&mut self) -> &mut PlaybackController<S> {
        &mut self.controller
    }
}

/// Interactive BST: inserts accumulate into one tree, each producing its own trace.
///
/// [`TreeVisualizer::reset`] clears the tree as well as the trace.
pub struct TreeVisualizer<S: Scheduler = VirtualClock> {
    tree: Bst,
    limits: TraceLimits,
    controller: PlaybackController<S>,
}

impl TreeVisualizer<VirtualClock> {
    /// Empty tree on a virtual clock.
    pub fn new(config: &SessionConfig) -> TraceResult<Self> {
        config.validate()?;
        Ok(Self::with_controller(
            PlaybackController::new(config.playback)?,
            config.limits,
        ))
    }
}

impl<S: Scheduler> TreeVisualizer<S> {
    /// Empty tree around an existing controller.
    pub fn with_controller(controller: PlaybackController<S>, limits: TraceLimits) -> Self {
        Self {
            tree: Bst::new(),
            limits,
            controller,
        }
    }

    /// Trace inserting `value` and keep the grown tree.
    pub fn insert(&mut self, value: i64) -> TraceResult<()> {
        AlgorithmInput::BstInsert {
            existing: Vec::new(),
            value,
        }
        .validate(&self.limits)?;
        if !self.tree.contains(value) && self.tree.len() >= self.limits.max_nodes {
            return Err(TraceError::validation(format!(
                "tree is full ({} nodes)",
                self.limits.max_nodes
            )));
        }
        let (seq, tree) = insert::trace(&self.tree, value);
        self.tree = tree;
        self.controller.load(seq);
        Ok(())
    }

    /// Trace a traversal of the current tree.
    pub fn traverse(&mut self, order: TraversalOrder) {
        let seq = traversal::trace(&self.tree, order);
        self.controller.load(seq);
    }

    /// Drop the tree and the trace.
    pub fn reset(&mut self) {
        self.tree = Bst::new();
        self.controller.clear();
    }

    /// Current tree.
    pub fn tree(&self) -> &Bst {
        &self.tree
    }

    /// Transport.
    pub fn controller(&self) -> &PlaybackController<S> {
        &self.controller
    }

    /// Mutable transport.
    pub fn controller_mut(&mut self) -> &mut PlaybackController<S> {
        &mut self.controller
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/session.rs"]
mod tests;
