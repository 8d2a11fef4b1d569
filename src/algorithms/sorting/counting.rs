use crate::algorithms::sorting::{ArrayTracer, join_values, tags};
use crate::trace::snapshot::{ArrayElement, CountingBuffers, Distribution};
use crate::trace::step::StepSequence;
use crate::trace::tags::{ArrayAction, ArrayTags, SortPhase};

/// Count-array slot of `value`. Inputs are validated non-negative before they get here.
fn slot(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

pub(crate) fn phased(action: ArrayAction, phase: SortPhase) -> ArrayTags {
    ArrayTags {
        phase: Some(phase),
        ..tags(action)
    }
}

struct Buffers {
    counts: Vec<usize>,
    output: Vec<Option<ArrayElement>>,
}

impl Buffers {
    fn view(&self) -> Distribution {
        Distribution::Counting(CountingBuffers {
            counts: self.counts.clone(),
            output: self.output.clone(),
        })
    }

    fn counts_str(&self) -> String {
        counts_str(&self.counts)
    }
}

pub(crate) fn counts_str(counts: &[usize]) -> String {
    counts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Counting sort trace: tally, prefix-sum into end positions, fill the output back to front
/// (stable), then copy it over the array.
#[tracing::instrument(skip(values), fields(len = values.len()))]
pub fn trace(values: &[i64]) -> StepSequence {
    let mut t = ArrayTracer::new(values);
    let n = t.len();

    let Some(max) = values.iter().copied().max() else {
        t.push(
            "Initial array is empty. Nothing to sort.",
            phased(ArrayAction::Init, SortPhase::Counting),
        );
        t.push(
            "Counting Sort complete. Array is sorted.",
            phased(ArrayAction::Complete, SortPhase::Complete),
        );
        return t.finish();
    };

    let mut b = Buffers {
        counts: vec![0; slot(max) + 1],
        output: vec![None; n],
    };
    t.push(
        format!("Initial array. Max value is {max}. Preparing to count frequencies."),
        phased(ArrayAction::Init, SortPhase::Counting),
    );

    for i in 0..n {
        let v = t.value(i);
        let c = slot(v);
        b.counts[c] += 1;
        t.push_with_distribution(
            format!(
                "Counting element {v} (at input index {i}). Count for {v} is now {}.",
                b.counts[c]
            ),
            b.view(),
            ArrayTags {
                current_index: Some(i),
                count_index: Some(c),
                ..phased(ArrayAction::Count, SortPhase::Counting)
            },
        );
    }
    t.push_with_distribution(
        format!(
            "Finished counting frequencies. Count array: [{}]",
            b.counts_str()
        ),
        b.view(),
        phased(ArrayAction::Focus, SortPhase::CalculatingPositions),
    );

    for i in 1..b.counts.len() {
        b.counts[i] += b.counts[i - 1];
        t.push_with_distribution(
            format!(
                "Calculating cumulative count for value {i}. New count: {}. \
                 (Position for {i} will be count[{i}] - 1)",
                b.counts[i]
            ),
            b.view(),
            ArrayTags {
                count_index: Some(i),
                ..phased(ArrayAction::Count, SortPhase::CalculatingPositions)
            },
        );
    }
    t.push_with_distribution(
        format!(
            "Finished calculating cumulative counts. This array now stores end positions. \
             Count array: [{}]",
            b.counts_str()
        ),
        b.view(),
        phased(ArrayAction::Focus, SortPhase::BuildingOutput),
    );

    for i in (0..n).rev() {
        let el = t.elements[i];
        let v = el.value;
        let c = slot(v);
        // Every element was counted, so its slot is at least 1 here.
        let pos = b.counts[c].saturating_sub(1);
        if let Some(out) = b.output.get_mut(pos) {
            *out = Some(el);
        }
        t.push_with_distribution(
            format!(
                "Processing element {v} (from input index {i}). Its position in sorted output \
                 is {pos} (from count[{v}] - 1)."
            ),
            b.view(),
            ArrayTags {
                current_index: Some(i),
                count_index: Some(c),
                output_index: Some(pos),
                ..phased(ArrayAction::Distribute, SortPhase::BuildingOutput)
            },
        );
        b.counts[c] = pos;
        t.push_with_distribution(
            format!(
                "Placed {v} at output index {pos}. Decremented count for {v} to {}.",
                b.counts[c]
            ),
            b.view(),
            ArrayTags {
                current_index: Some(i),
                count_index: Some(c),
                output_index: Some(pos),
                ..phased(ArrayAction::Place, SortPhase::BuildingOutput)
            },
        );
    }

    let sorted: Vec<ArrayElement> = b.output.iter().flatten().copied().collect();
    t.push_with_distribution(
        format!(
            "Finished building sorted output array: [{}]",
            join_values(sorted.iter().map(|e| e.value))
        ),
        b.view(),
        phased(ArrayAction::Focus, SortPhase::CopyingBack),
    );

    t.replace(sorted);
    t.settle_all();
    t.push_with_distribution(
        "Counting Sort complete. Array is sorted.",
        b.view(),
        phased(ArrayAction::Complete, SortPhase::Complete),
    );
    t.finish()
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/sorting/counting.rs"]
mod tests;
