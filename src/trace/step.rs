use std::sync::Arc;

use crate::trace::fingerprint::{TraceFingerprint, fingerprint_steps};
use crate::trace::snapshot::AlgorithmState;
use crate::trace::tags::SemanticTags;

/// One immutable instant of an algorithm run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// Narration of what changed at this instant.
    pub description: String,
    /// Complete state needed to render this instant.
    pub snapshot: AlgorithmState,
    /// Semantic annotations used to colour and label the snapshot.
    pub tags: SemanticTags,
}

/// Frozen, ordered trace of one algorithm invocation.
///
/// Clones share the same underlying slice; nothing can mutate a step once the sequence exists.
#[derive(Clone, Debug, PartialEq)]
pub struct StepSequence {
    steps: Arc<[Step]>,
}

impl StepSequence {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
        }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// First step.
    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    /// Last step.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Index of the last step.
    pub fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    /// Iterate steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// All steps as a slice.
    pub fn as_slice(&self) -> &[Step] {
        &self.steps
    }

    /// Newline-joined descriptions of steps `0..=upto` (clamped to the trace length).
    pub fn transcript(&self, upto: usize) -> String {
        let end = upto.saturating_add(1).min(self.steps.len());
        self.steps[..end]
            .iter()
            .map(|s| s.description.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Newline-joined descriptions of every step.
    pub fn full_transcript(&self) -> String {
        match self.last_index() {
            Some(last) => self.transcript(last),
            None => String::new(),
        }
    }

    /// Stable content fingerprint.
    pub fn fingerprint(&self) -> TraceFingerprint {
        fingerprint_steps(&self.steps)
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl serde::Serialize for StepSequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.steps.as_ref().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for StepSequence {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Step>::deserialize(deserializer).map(Self::from_steps)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trace/step.rs"]
mod tests;
