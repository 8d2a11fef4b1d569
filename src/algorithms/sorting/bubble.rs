use crate::algorithms::sorting::{ArrayTracer, tags};
use crate::trace::step::StepSequence;
use crate::trace::tags::{ArrayAction, ArrayTags};

/// Bubble sort trace with early exit once a pass makes no swaps.
#[tracing::instrument(skip(values), fields(len = values.len()))]
pub fn trace(values: &[i64]) -> StepSequence {
    let mut t = ArrayTracer::new(values);
    let n = t.len();

    t.push(
        "Initial array. Click 'Play' or 'Next' to start.",
        tags(ArrayAction::Init),
    );

    for i in 0..n.saturating_sub(1) {
        let mut swapped_in_pass = false;
        for j in 0..n - i - 1 {
            let (a, b) = (t.value(j), t.value(j + 1));
            t.push(
                format!("Comparing {a} (at index {j}) and {b} (at index {}).", j + 1),
                ArrayTags {
                    comparing: Some([j, j + 1]),
                    ..tags(ArrayAction::Compare)
                },
            );

            if a > b {
                t.push(
                    format!("{a} > {b}. Swapping elements."),
                    ArrayTags {
                        comparing: Some([j, j + 1]),
                        swapping: Some([j, j + 1]),
                        ..tags(ArrayAction::Swap)
                    },
                );
                t.swap(j, j + 1);
                swapped_in_pass = true;
                let now = t.values_str();
                t.push(
                    format!("Elements swapped. Array is now [{now}]."),
                    ArrayTags {
                        swapped: Some([j, j + 1]),
                        ..tags(ArrayAction::Swapped)
                    },
                );
            } else {
                t.push(
                    format!("{a} <= {b}. No swap needed."),
                    ArrayTags {
                        comparing: Some([j, j + 1]),
                        ..tags(ArrayAction::Keep)
                    },
                );
            }
        }

        let settled = n - 1 - i;
        t.settle(settled);
        let v = t.value(settled);
        t.push(
            format!(
                "Pass {} complete. Element {v} is in its sorted position.",
                i + 1
            ),
            ArrayTags {
                pass_completed: Some(i),
                ..tags(ArrayAction::Settled)
            },
        );

        if !swapped_in_pass {
            for k in 0..settled {
                t.settle(k);
            }
            t.push(
                "Array is sorted (no swaps in the last pass). All elements are in final positions.",
                tags(ArrayAction::Complete),
            );
            break;
        }
    }

    if t.settled_count() < n || n == 0 {
        t.settle_all();
        t.push(
            "Sorting complete. All elements are in their final sorted positions.",
            tags(ArrayAction::Complete),
        );
    }

    t.finish()
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/sorting/bubble.rs"]
mod tests;
