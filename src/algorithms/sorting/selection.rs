use crate::algorithms::sorting::{ArrayTracer, tags};
use crate::trace::step::StepSequence;
use crate::trace::tags::{ArrayAction, ArrayTags};

/// Selection sort trace.
#[tracing::instrument(skip(values), fields(len = values.len()))]
pub fn trace(values: &[i64]) -> StepSequence {
    let mut t = ArrayTracer::new(values);
    let n = t.len();

    t.push(
        "Initial array. Click 'Play' or 'Next' to start Selection Sort.",
        ArrayTags {
            current_index: Some(0),
            min_index: Some(0),
            ..tags(ArrayAction::Init)
        },
    );

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        t.push(
            format!(
                "Pass {}: Finding the minimum element in the unsorted part (from index {i}). \
                 Current minimum is {} at index {min}.",
                i + 1,
                t.value(min)
            ),
            ArrayTags {
                current_index: Some(i),
                min_index: Some(min),
                ..tags(ArrayAction::Focus)
            },
        );

        for j in i + 1..n {
            t.push(
                format!(
                    "Comparing current minimum {} (at index {min}) with {} (at index {j}).",
                    t.value(min),
                    t.value(j)
                ),
                ArrayTags {
                    current_index: Some(i),
                    min_index: Some(min),
                    comparing: Some([min, j]),
                    ..tags(ArrayAction::Compare)
                },
            );
            if t.value(j) < t.value(min) {
                let old = min;
                min = j;
                t.push(
                    format!(
                        "New minimum found: {} (at index {min}). Old minimum was {}.",
                        t.value(min),
                        t.value(old)
                    ),
                    ArrayTags {
                        current_index: Some(i),
                        min_index: Some(min),
                        comparing: Some([old, j]),
                        ..tags(ArrayAction::NewExtreme)
                    },
                );
            }
        }

        if min != i {
            t.push(
                format!(
                    "Minimum for pass {} is {} (at index {min}). Swapping with element {} (at index {i}).",
                    i + 1,
                    t.value(min),
                    t.value(i)
                ),
                ArrayTags {
                    current_index: Some(i),
                    min_index: Some(min),
                    swapping: Some([i, min]),
                    ..tags(ArrayAction::Swap)
                },
            );
            t.swap(i, min);
            t.push(
                format!(
                    "Swap complete. Element {} is now at index {i}. Array: [{}].",
                    t.value(i),
                    t.values_str()
                ),
                ArrayTags {
                    current_index: Some(i),
                    min_index: Some(i),
                    swapped: Some([i, min]),
                    ..tags(ArrayAction::Swapped)
                },
            );
        } else {
            t.push(
                format!(
                    "Element {} (at index {i}) is already in its correct sorted position for this pass. \
                     No swap needed.",
                    t.value(i)
                ),
                ArrayTags {
                    current_index: Some(i),
                    min_index: Some(i),
                    ..tags(ArrayAction::Keep)
                },
            );
        }

        t.settle(i);
        let next = if i + 1 < n - 1 { i + 1 } else { i };
        t.push(
            format!("Pass {} complete. Element {} is sorted.", i + 1, t.value(i)),
            ArrayTags {
                current_index: Some(next),
                min_index: Some(next),
                pass_completed: Some(i),
                ..tags(ArrayAction::Settled)
            },
        );
    }

    t.settle_all();
    let last = n.saturating_sub(1);
    t.push(
        "Selection Sort complete. All elements are sorted.",
        ArrayTags {
            current_index: Some(last),
            min_index: Some(last),
            ..tags(ArrayAction::Complete)
        },
    );

    t.finish()
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/sorting/selection.rs"]
mod tests;
