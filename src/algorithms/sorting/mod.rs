//! Sorting trace generators.
//!
//! Every generator works on a private copy of the input and emits an init step and a completion
//! step (all indices settled), so even a single element yields a playable trace. The comparison
//! sorts are selected through [`SortAlgorithm`]; counting and radix sort only accept non-negative
//! values and have their own input kinds.

/// Bubble sort.
pub mod bubble;
/// Counting sort over small non-negative values.
pub mod counting;
/// Heap sort.
pub mod heap;
/// Insertion sort.
pub mod insertion;
/// Top-down merge sort.
pub mod merge;
/// Quick sort, Lomuto partition.
pub mod quick;
/// Least-significant-digit radix sort.
pub mod radix;
/// Selection sort.
pub mod selection;

use crate::trace::builder::TraceBuilder;
use crate::trace::snapshot::{
    AlgorithmState, ArrayElement, ArraySnapshot, Distribution, MergeScratch,
};
use crate::trace::step::StepSequence;
use crate::trace::tags::{ArrayAction, ArrayTags, SemanticTags};

/// Sorting algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    /// Bubble sort with early exit.
    Bubble,
    /// Selection sort.
    Selection,
    /// Insertion sort.
    Insertion,
    /// Top-down merge sort.
    Merge,
    /// Quick sort, Lomuto partition with last-element pivot.
    Quick,
    /// Heap sort with a max-heap.
    Heap,
}

impl SortAlgorithm {
    /// All algorithms, in a fixed order.
    pub const ALL: [SortAlgorithm; 6] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
    ];

    /// Lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
        }
    }

    /// Run the matching generator.
    pub fn trace(self, values: &[i64]) -> StepSequence {
        match self {
            Self::Bubble => bubble::trace(values),
            Self::Selection => selection::trace(values),
            Self::Insertion => insertion::trace(values),
            Self::Merge => merge::trace(values),
            Self::Quick => quick::trace(values),
            Self::Heap => heap::trace(values),
        }
    }
}

impl std::str::FromStr for SortAlgorithm {
    type Err = crate::TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::TraceError::validation(format!("unknown sort algorithm '{s}'")))
    }
}

/// Working array shared by the sorting and searching generators.
pub(crate) struct ArrayTracer {
    pub(crate) elements: Vec<ArrayElement>,
    sorted: Vec<usize>,
    out: TraceBuilder,
}

impl ArrayTracer {
    pub(crate) fn new(values: &[i64]) -> Self {
        let elements = values
            .iter()
            .enumerate()
            .map(|(i, &value)| ArrayElement {
                id: u32::try_from(i).unwrap_or(u32::MAX),
                value,
            })
            .collect();
        Self {
            elements,
            sorted: Vec::new(),
            out: TraceBuilder::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    pub(crate) fn value(&self, i: usize) -> i64 {
        self.elements[i].value
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.elements.swap(a, b);
    }

    /// Replace the working array wholesale (distribution sorts copying their output back).
    pub(crate) fn replace(&mut self, elements: Vec<ArrayElement>) {
        self.elements = elements;
    }

    pub(crate) fn settle(&mut self, i: usize) {
        if let Err(pos) = self.sorted.binary_search(&i) {
            self.sorted.insert(pos, i);
        }
    }

    pub(crate) fn settle_all(&mut self) {
        self.sorted = (0..self.elements.len()).collect();
    }

    pub(crate) fn settled_count(&self) -> usize {
        self.sorted.len()
    }

    pub(crate) fn values_str(&self) -> String {
        join_values(self.elements.iter().map(|e| e.value))
    }

    pub(crate) fn snapshot(&self) -> AlgorithmState {
        self.snapshot_with(None, None)
    }

    fn snapshot_with(
        &self,
        scratch: Option<MergeScratch>,
        distribution: Option<Distribution>,
    ) -> AlgorithmState {
        AlgorithmState::Array(ArraySnapshot {
            elements: self.elements.clone(),
            sorted_indices: self.sorted.clone(),
            scratch,
            distribution,
        })
    }

    pub(crate) fn push(&mut self, description: impl Into<String>, tags: ArrayTags) {
        let snapshot = self.snapshot();
        self.out.push(description, snapshot, SemanticTags::Array(tags));
    }

    pub(crate) fn push_with_scratch(
        &mut self,
        description: impl Into<String>,
        scratch: MergeScratch,
        tags: ArrayTags,
    ) {
        let snapshot = self.snapshot_with(Some(scratch), None);
        self.out.push(description, snapshot, SemanticTags::Array(tags));
    }

    pub(crate) fn push_with_distribution(
        &mut self,
        description: impl Into<String>,
        distribution: Distribution,
        tags: ArrayTags,
    ) {
        let snapshot = self.snapshot_with(None, Some(distribution));
        self.out.push(description, snapshot, SemanticTags::Array(tags));
    }

    pub(crate) fn finish(self) -> StepSequence {
        self.out.finish()
    }
}

pub(crate) fn join_values(values: impl IntoIterator<Item = i64>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn tags(action: ArrayAction) -> ArrayTags {
    ArrayTags::new(action)
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/sorting/mod.rs"]
mod tests;
