use crate::algorithms::sorting::{ArrayTracer, tags};
use crate::trace::step::StepSequence;
use crate::trace::tags::{ArrayAction, ArrayTags};

/// Insertion sort trace.
///
/// The key is held aside while larger elements shift right; the array snapshot shows the
/// duplicated slot during shifting, as the real algorithm does.
#[tracing::instrument(skip(values), fields(len = values.len()))]
pub fn trace(values: &[i64]) -> StepSequence {
    let mut t = ArrayTracer::new(values);
    let n = t.len();

    t.push(
        "Initial array. First element is considered sorted. \
         Click 'Play' or 'Next' to start Insertion Sort.",
        ArrayTags {
            range: (n > 0).then_some([0, 0]),
            ..tags(ArrayAction::Init)
        },
    );

    for i in 1..n {
        let key = t.elements[i];
        t.push(
            format!(
                "Pass {i}: Picking element {} (at index {i}) as the key to insert into the sorted portion.",
                key.value
            ),
            ArrayTags {
                key_index: Some(i),
                range: Some([0, i - 1]),
                ..tags(ArrayAction::Focus)
            },
        );

        let mut j = i;
        while j > 0 && t.value(j - 1) > key.value {
            let cmp = j - 1;
            let v = t.value(cmp);
            t.push(
                format!(
                    "Comparing key {} with {v} (at index {cmp}). Since {v} > {}, shift {v} to the right.",
                    key.value, key.value
                ),
                ArrayTags {
                    key_index: Some(i),
                    comparing: Some([cmp, i]),
                    range: Some([0, i - 1]),
                    ..tags(ArrayAction::Compare)
                },
            );
            t.elements[j] = t.elements[cmp];
            t.push(
                format!("Element {v} (originally at {cmp}) shifted to index {j}."),
                ArrayTags {
                    key_index: Some(i),
                    placed_index: Some(j),
                    range: Some([0, i - 1]),
                    ..tags(ArrayAction::Shift)
                },
            );
            j -= 1;
        }
        t.elements[j] = key;

        t.push(
            format!(
                "Key {} inserted at index {j}. Sorted portion now extends to index {i}.",
                key.value
            ),
            ArrayTags {
                placed_index: Some(j),
                range: Some([0, i]),
                pass_completed: Some(i),
                ..tags(ArrayAction::Place)
            },
        );
    }

    t.settle_all();
    t.push(
        "Insertion Sort complete. All elements are sorted.",
        ArrayTags {
            range: (n > 0).then(|| [0, n - 1]),
            ..tags(ArrayAction::Complete)
        },
    );

    t.finish()
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/sorting/insertion.rs"]
mod tests;
