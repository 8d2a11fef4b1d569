use crate::algorithms::sorting::{ArrayTracer, join_values, tags};
use crate::trace::snapshot::{ArrayElement, MergeScratch};
use crate::trace::step::StepSequence;
use crate::trace::tags::{ArrayAction, ArrayTags};

/// Top-down merge sort trace.
///
/// Recursion is executed eagerly; a step is appended on every divide, base case, comparison,
/// placement, and finished merge.
#[tracing::instrument(skip(values), fields(len = values.len()))]
pub fn trace(values: &[i64]) -> StepSequence {
    let mut t = ArrayTracer::new(values);
    t.push("Initial array for Merge Sort.", tags(ArrayAction::Init));

    if !t.elements.is_empty() {
        let hi = t.len() - 1;
        sort_range(&mut t, 0, hi);
    }

    t.settle_all();
    t.push("Merge Sort complete. Array is sorted.", tags(ArrayAction::Complete));
    t.finish()
}

fn sort_range(t: &mut ArrayTracer, l: usize, r: usize) {
    if l >= r {
        t.push(
            format!(
                "Base Case Reached for range [{l}, {r}].\n\
                 Subarray has 1 or 0 elements, which is inherently sorted."
            ),
            ArrayTags {
                range: Some([l, r]),
                ..tags(ArrayAction::Focus)
            },
        );
        return;
    }

    let m = l + (r - l) / 2;
    t.push(
        format!("Recursive Call: MergeSort for the left part.\nRange: indices {l} to {m}."),
        ArrayTags {
            range: Some([l, m]),
            ..tags(ArrayAction::Focus)
        },
    );
    sort_range(t, l, m);

    t.push(
        format!("Dividing: Right part from index {} to {r}.", m + 1),
        ArrayTags {
            range: Some([m + 1, r]),
            ..tags(ArrayAction::Focus)
        },
    );
    sort_range(t, m + 1, r);

    merge(t, l, m, r);
}

fn merge(t: &mut ArrayTracer, l: usize, m: usize, r: usize) {
    let left: Vec<ArrayElement> = t.elements[l..=m].to_vec();
    let right: Vec<ArrayElement> = t.elements[m + 1..=r].to_vec();
    let mut merged: Vec<ArrayElement> = Vec::with_capacity(r - l + 1);

    let scratch = |merged: &[ArrayElement], lc: Option<usize>, rc: Option<usize>| MergeScratch {
        left: left.clone(),
        right: right.clone(),
        merged: merged.to_vec(),
        left_cursor: lc,
        right_cursor: rc,
    };

    t.push_with_scratch(
        format!(
            "Preparing to merge subarrays.\nLeft: [{}] (indices {l}-{m}).\nRight: [{}] (indices {}-{r}).",
            join_values(left.iter().map(|e| e.value)),
            join_values(right.iter().map(|e| e.value)),
            m + 1
        ),
        scratch(&merged, None, None),
        ArrayTags {
            range: Some([l, r]),
            pivot_index: Some(m),
            ..tags(ArrayAction::Merge)
        },
    );

    let (mut i, mut j, mut k) = (0usize, 0usize, l);
    while i < left.len() && j < right.len() {
        t.push_with_scratch(
            format!(
                "Comparing elements:\nLeft subarray's current: {}.\nRight subarray's current: {}.",
                left[i].value, right[j].value
            ),
            scratch(&merged, Some(i), Some(j)),
            ArrayTags {
                range: Some([l, r]),
                ..tags(ArrayAction::Compare)
            },
        );

        // `<=` keeps the sort stable.
        let (taken, lc, rc) = if left[i].value <= right[j].value {
            i += 1;
            (left[i - 1], Some(i - 1), None)
        } else {
            j += 1;
            (right[j - 1], None, Some(j - 1))
        };
        merged.push(taken);
        t.elements[k] = taken;
        t.push_with_scratch(
            format!(
                "{} is smaller (or equal).\nPlacing it into the main array at current merge position.",
                taken.value
            ),
            scratch(&merged, lc, rc),
            ArrayTags {
                range: Some([l, r]),
                placed_index: Some(k),
                ..tags(ArrayAction::Place)
            },
        );
        k += 1;
    }

    while i < left.len() {
        merged.push(left[i]);
        t.elements[k] = left[i];
        t.push_with_scratch(
            format!("Copying remaining element {} from left subarray.", left[i].value),
            scratch(&merged, Some(i), None),
            ArrayTags {
                range: Some([l, r]),
                placed_index: Some(k),
                ..tags(ArrayAction::Place)
            },
        );
        i += 1;
        k += 1;
    }

    while j < right.len() {
        merged.push(right[j]);
        t.elements[k] = right[j];
        t.push_with_scratch(
            format!("Copying remaining element {} from right subarray.", right[j].value),
            scratch(&merged, None, Some(j)),
            ArrayTags {
                range: Some([l, r]),
                placed_index: Some(k),
                ..tags(ArrayAction::Place)
            },
        );
        j += 1;
        k += 1;
    }

    let result = join_values(t.elements[l..=r].iter().map(|e| e.value));
    t.push(
        format!("Finished merging for range {l}-{r}. Result: [{result}]."),
        ArrayTags {
            range: Some([l, r]),
            ..tags(ArrayAction::Merge)
        },
    );
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/sorting/merge.rs"]
mod tests;
