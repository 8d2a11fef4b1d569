//! Linear and binary search traces over an array snapshot.

use crate::algorithms::sorting::{ArrayTracer, tags};
use crate::trace::step::StepSequence;
use crate::trace::tags::{ArrayAction, ArrayTags};

/// Linear scan from index 0, stopping at the first match.
#[tracing::instrument(skip(values), fields(len = values.len()))]
pub fn linear(values: &[i64], target: i64) -> StepSequence {
    let mut t = ArrayTracer::new(values);
    t.push(
        format!("Initial array for Linear Search. Target: {target}."),
        tags(ArrayAction::Init),
    );

    for i in 0..t.len() {
        let v = t.value(i);
        t.push(
            format!("Comparing target {target} with element {v} at index {i}."),
            ArrayTags {
                current_index: Some(i),
                ..tags(ArrayAction::Probe)
            },
        );
        if v == target {
            t.push(
                format!("Target {target} found at index {i}!"),
                ArrayTags {
                    current_index: Some(i),
                    found_index: Some(i),
                    ..tags(ArrayAction::Found)
                },
            );
            return t.finish();
        }
    }

    t.push(
        format!("Target {target} not found in the array."),
        tags(ArrayAction::NotFound),
    );
    t.finish()
}

/// Binary search over a non-decreasing array.
///
/// The window is tracked with signed bounds so an exhausted search can report `high = low - 1`.
#[tracing::instrument(skip(values), fields(len = values.len()))]
pub fn binary(values: &[i64], target: i64) -> StepSequence {
    let mut t = ArrayTracer::new(values);
    let mut low: i64 = 0;
    let mut high: i64 = t.len() as i64 - 1;

    t.push(
        format!("Initial state for Binary Search. Target: {target}. Range: [{low}, {high}]."),
        ArrayTags {
            range: window(low, high),
            ..tags(ArrayAction::Init)
        },
    );

    while low <= high {
        let mid = low + (high - low) / 2;
        let m = mid as usize;
        let v = t.value(m);
        t.push(
            format!(
                "Calculating middle: mid = floor(({low} + {high}) / 2) = {mid}. Value at mid ({v})."
            ),
            ArrayTags {
                range: window(low, high),
                mid: Some(m),
                ..tags(ArrayAction::Probe)
            },
        );

        if v == target {
            t.push(
                format!("Target {target} found at index {mid}!"),
                ArrayTags {
                    range: window(low, high),
                    mid: Some(m),
                    found_index: Some(m),
                    ..tags(ArrayAction::Found)
                },
            );
            return t.finish();
        }

        // The narrowing step still shows the window it was decided in.
        let before = window(low, high);
        let description = if v < target {
            low = mid + 1;
            format!("{v} < {target}. Target might be in the right half. New low: {low}.")
        } else {
            high = mid - 1;
            format!("{v} > {target}. Target might be in the left half. New high: {high}.")
        };
        t.push(
            description,
            ArrayTags {
                range: before,
                mid: Some(m),
                ..tags(ArrayAction::Narrow)
            },
        );
    }

    let description = if t.len() == 0 {
        format!("Target {target} not found in the array. Search range exhausted.")
    } else {
        format!("Low ({low}) is now greater than High ({high}). Target {target} not found.")
    };
    t.push(description, tags(ArrayAction::NotFound));
    t.finish()
}

fn window(low: i64, high: i64) -> Option<[usize; 2]> {
    (low >= 0 && low <= high).then(|| [low as usize, high as usize])
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/search.rs"]
mod tests;
