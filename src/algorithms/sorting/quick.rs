use crate::algorithms::sorting::{ArrayTracer, tags};
use crate::trace::step::StepSequence;
use crate::trace::tags::{ArrayAction, ArrayTags};

/// Quick sort trace (Lomuto partition, last element as pivot).
#[tracing::instrument(skip(values), fields(len = values.len()))]
pub fn trace(values: &[i64]) -> StepSequence {
    let mut t = ArrayTracer::new(values);
    t.push("Initial array for Quick Sort.", tags(ArrayAction::Init));

    let n = t.len() as i64;
    sort_range(&mut t, 0, n - 1);

    t.settle_all();
    t.push("Quick Sort complete. Array is sorted.", tags(ArrayAction::Complete));
    t.finish()
}

/// Bounds are signed: an empty right partition can end at `low - 1`.
fn sort_range(t: &mut ArrayTracer, low: i64, high: i64) {
    if low < high {
        let (lo, hi) = (low as usize, high as usize);
        t.push(
            format!("Recursive call for Quick Sort on subarray from index {lo} to {hi}."),
            ArrayTags {
                range: Some([lo, hi]),
                ..tags(ArrayAction::Focus)
            },
        );
        let p = partition(t, lo, hi);

        t.push(
            format!(
                "Pivot placed. Recursively sorting left subarray (indices {lo} to {}).",
                p as i64 - 1
            ),
            ArrayTags {
                range: (p > lo).then(|| [lo, p - 1]),
                pivot_index: Some(p),
                ..tags(ArrayAction::Focus)
            },
        );
        sort_range(t, low, p as i64 - 1);

        t.push(
            format!(
                "Recursively sorting right subarray (indices {} to {hi}).",
                p + 1
            ),
            ArrayTags {
                range: (p < hi).then(|| [p + 1, hi]),
                pivot_index: Some(p),
                ..tags(ArrayAction::Focus)
            },
        );
        sort_range(t, p as i64 + 1, high);
    } else if low == high {
        let i = low as usize;
        t.settle(i);
        t.push(
            format!("Subarray from index {i} to {i} has 1 element, considered sorted."),
            ArrayTags {
                range: Some([i, i]),
                ..tags(ArrayAction::Settled)
            },
        );
    } else {
        t.push(
            format!("Subarray from index {low} to {high} is empty, considered sorted."),
            tags(ArrayAction::Focus),
        );
    }
}

fn partition(t: &mut ArrayTracer, low: usize, high: usize) -> usize {
    let pivot = t.value(high);
    // `boundary` is the slot after the last element known to be < pivot (Lomuto's `i + 1`).
    let mut boundary = low;

    t.push(
        format!(
            "Partitioning subarray from index {low} to {high}. Pivot is {pivot} (at index {high})."
        ),
        ArrayTags {
            pivot_index: Some(high),
            range: Some([low, high]),
            ..tags(ArrayAction::Partition)
        },
    );

    for j in low..high {
        let left = boundary.checked_sub(1);
        t.push(
            format!(
                "Comparing element {} (at index {j}) with pivot {pivot}. Left pointer (i) is at {}.",
                t.value(j),
                boundary as i64 - 1
            ),
            ArrayTags {
                pivot_index: Some(high),
                range: Some([low, high]),
                comparing: Some([j, high]),
                current_index: left,
                ..tags(ArrayAction::Compare)
            },
        );
        if t.value(j) < pivot {
            let i = boundary;
            t.push(
                format!(
                    "{} < {pivot}. Incrementing left pointer (i) to {i}. Swapping {} and {}.",
                    t.value(j),
                    t.value(i),
                    t.value(j)
                ),
                ArrayTags {
                    pivot_index: Some(high),
                    range: Some([low, high]),
                    swapping: Some([i, j]),
                    current_index: Some(i),
                    ..tags(ArrayAction::Swap)
                },
            );
            t.swap(i, j);
            boundary += 1;
            t.push(
                format!("Swap complete. Array: [{}]", t.values_str()),
                ArrayTags {
                    pivot_index: Some(high),
                    range: Some([low, high]),
                    swapped: Some([i, j]),
                    current_index: Some(i),
                    ..tags(ArrayAction::Swapped)
                },
            );
        } else {
            t.push(
                format!(
                    "{} >= {pivot}. No swap needed for {}. Left pointer (i) remains {}.",
                    t.value(j),
                    t.value(j),
                    boundary as i64 - 1
                ),
                ArrayTags {
                    pivot_index: Some(high),
                    range: Some([low, high]),
                    current_index: left,
                    ..tags(ArrayAction::Keep)
                },
            );
        }
    }

    t.push(
        format!(
            "Placing pivot {pivot}. Swapping with element {} (at index {boundary}).",
            t.value(boundary)
        ),
        ArrayTags {
            pivot_index: Some(high),
            range: Some([low, high]),
            swapping: Some([boundary, high]),
            ..tags(ArrayAction::Swap)
        },
    );
    t.swap(boundary, high);
    t.settle(boundary);
    t.push(
        format!("Pivot {pivot} is now in its sorted position at index {boundary}."),
        ArrayTags {
            pivot_index: Some(boundary),
            range: Some([low, high]),
            ..tags(ArrayAction::Settled)
        },
    );
    boundary
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/sorting/quick.rs"]
mod tests;
