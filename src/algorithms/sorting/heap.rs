use crate::algorithms::sorting::{ArrayTracer, tags};
use crate::trace::step::StepSequence;
use crate::trace::tags::{ArrayAction, ArrayTags};

/// Heap sort trace: build a max-heap, then repeatedly move the root behind the heap.
#[tracing::instrument(skip(values), fields(len = values.len()))]
pub fn trace(values: &[i64]) -> StepSequence {
    let mut t = ArrayTracer::new(values);
    let n = t.len();

    t.push("Initial array for Heap Sort.", tags(ArrayAction::Init));
    t.push("Building max heap...", heap_tags(ArrayAction::Focus, n));

    for i in (0..n / 2).rev() {
        heapify(&mut t, n, i);
    }

    t.push(
        "Max heap built. Now extracting elements.",
        heap_tags(ArrayAction::Focus, n),
    );

    for end in (1..n).rev() {
        t.push(
            format!(
                "Extracting max element {} (root). Swapping with last element of heap {} (at index {end}).",
                t.value(0),
                t.value(end)
            ),
            ArrayTags {
                swapping: Some([0, end]),
                ..heap_tags(ArrayAction::Swap, end + 1)
            },
        );
        t.swap(0, end);
        t.settle(end);
        t.push(
            format!(
                "Element {} moved to sorted position {end}. Heap size reduced to {end}. Heapifying root.",
                t.value(end)
            ),
            ArrayTags {
                pivot_index: Some(0),
                ..heap_tags(ArrayAction::Settled, end)
            },
        );
        heapify(&mut t, end, 0);
    }

    t.settle_all();
    t.push("Heap Sort complete. Array is sorted.", tags(ArrayAction::Complete));
    t.finish()
}

fn heap_tags(action: ArrayAction, heap_size: usize) -> ArrayTags {
    ArrayTags {
        range: heap_size.checked_sub(1).map(|last| [0, last]),
        ..tags(action)
    }
}

/// Sift `root` down within the first `heap_size` elements.
fn heapify(t: &mut ArrayTracer, heap_size: usize, root: usize) {
    let mut root = root;
    loop {
        let l = 2 * root + 1;
        let r = 2 * root + 2;
        let left_child = (l < heap_size).then_some(l);
        let right_child = (r < heap_size).then_some(r);

        t.push(
            format!(
                "Heapifying subtree rooted at index {root}. Heap size: {heap_size}. \
                 Comparing root ({}) with children.",
                t.value(root)
            ),
            ArrayTags {
                pivot_index: Some(root),
                left_child,
                right_child,
                ..heap_tags(ArrayAction::Partition, heap_size)
            },
        );

        let mut largest = root;
        let mut largest_val = t.value(root);
        let mut desc = format!("Root ({largest_val} at index {root}) is current largest.");

        if let Some(l) = left_child {
            let lv = t.value(l);
            if lv > largest_val {
                desc = format!(
                    "Left child {lv} (at {l}) > current largest {largest_val}. New largest is {lv}."
                );
                largest = l;
                largest_val = lv;
            } else {
                desc = format!(
                    "Left child {lv} (at {l}) <= current largest {largest_val}. Largest remains {largest_val}."
                );
            }
        }
        if let Some(r) = right_child {
            let rv = t.value(r);
            if rv > largest_val {
                desc = format!(
                    "Right child {rv} (at {r}) > current largest {largest_val}. New largest is {rv}."
                );
                largest = r;
            } else {
                desc.push_str(&format!(
                    " Right child {rv} (at {r}) <= current largest {largest_val}. Largest remains {largest_val}."
                ));
            }
        }

        t.push(
            desc,
            ArrayTags {
                pivot_index: Some(root),
                largest_index: Some(largest),
                left_child,
                right_child,
                ..heap_tags(ArrayAction::Compare, heap_size)
            },
        );

        if largest == root {
            t.push(
                format!(
                    "Root ({} at index {root}) is already the largest. Subtree is heapified.",
                    t.value(root)
                ),
                ArrayTags {
                    pivot_index: Some(root),
                    largest_index: Some(root),
                    ..heap_tags(ArrayAction::Keep, heap_size)
                },
            );
            return;
        }

        t.push(
            format!(
                "Largest is not root. Swapping root {} (at {root}) with {} (at {largest}).",
                t.value(root),
                t.value(largest)
            ),
            ArrayTags {
                pivot_index: Some(root),
                largest_index: Some(largest),
                swapping: Some([root, largest]),
                ..heap_tags(ArrayAction::Swap, heap_size)
            },
        );
        t.swap(root, largest);
        t.push(
            format!(
                "Swap complete. Recursively heapify the affected sub-tree rooted at {largest}."
            ),
            ArrayTags {
                pivot_index: Some(root),
                largest_index: Some(largest),
                swapped: Some([root, largest]),
                ..heap_tags(ArrayAction::Swapped, heap_size)
            },
        );
        root = largest;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/sorting/heap.rs"]
mod tests;
