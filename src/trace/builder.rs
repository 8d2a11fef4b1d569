use crate::trace::snapshot::AlgorithmState;
use crate::trace::step::{Step, StepSequence};
use crate::trace::tags::SemanticTags;

/// Append-only collector used by generators.
///
/// Generators push a fully built snapshot for every observable transition and call
/// [`TraceBuilder::finish`] once; the result can no longer change.
#[derive(Debug, Default)]
pub struct TraceBuilder {
    steps: Vec<Step>,
}

impl TraceBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one step.
    pub fn push(
        &mut self,
        description: impl Into<String>,
        snapshot: AlgorithmState,
        tags: SemanticTags,
    ) {
        self.steps.push(Step {
            description: description.into(),
            snapshot,
            tags,
        });
    }

    /// Steps appended so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Freeze into a sequence.
    pub fn finish(self) -> StepSequence {
        tracing::trace!(steps = self.steps.len(), "trace frozen");
        StepSequence::from_steps(self.steps)
    }
}
