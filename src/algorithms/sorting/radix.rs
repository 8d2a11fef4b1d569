use crate::algorithms::sorting::ArrayTracer;
use crate::algorithms::sorting::counting::{counts_str, phased};
use crate::trace::snapshot::{ArrayElement, Distribution, RadixBuffers};
use crate::trace::step::StepSequence;
use crate::trace::tags::{ArrayAction, ArrayTags, SortPhase};

const RADIX: usize = 10;

fn digit(value: i64, place: i64) -> usize {
    usize::try_from((value / place).rem_euclid(10)).unwrap_or(0)
}

struct Pass {
    digit_place: i64,
    counts: Vec<usize>,
    buckets: Vec<Vec<ArrayElement>>,
}

impl Pass {
    fn new(digit_place: i64) -> Self {
        Self {
            digit_place,
            counts: vec![0; RADIX],
            buckets: vec![Vec::new(); RADIX],
        }
    }

    fn view(&self) -> Distribution {
        Distribution::Radix(RadixBuffers {
            digit_place: self.digit_place,
            counts: self.counts.clone(),
            buckets: self.buckets.clone(),
        })
    }
}

/// LSD radix sort trace over non-negative values: one stable counting pass per decimal digit.
#[tracing::instrument(skip(values), fields(len = values.len()))]
pub fn trace(values: &[i64]) -> StepSequence {
    let mut t = ArrayTracer::new(values);

    if values.is_empty() {
        t.push("Array is empty.", phased(ArrayAction::Init, SortPhase::Distributing));
        t.push(
            "Radix Sort complete. Array is sorted.",
            phased(ArrayAction::Complete, SortPhase::Complete),
        );
        return t.finish();
    }

    t.push(
        "Initial array for Radix Sort.",
        phased(ArrayAction::Init, SortPhase::Distributing),
    );

    let max = values.iter().copied().max().unwrap_or(0).max(0);
    let mut place: i64 = 1;
    while max / place > 0 {
        t.push(
            format!("Sorting by digit place: {place}s."),
            phased(ArrayAction::Focus, SortPhase::Distributing),
        );
        digit_pass(&mut t, place);
        place = place.saturating_mul(10);
    }

    t.settle_all();
    t.push(
        "Radix Sort complete. Array is sorted.",
        phased(ArrayAction::Complete, SortPhase::Complete),
    );
    t.finish()
}

fn digit_pass(t: &mut ArrayTracer, place: i64) {
    let n = t.len();
    let mut p = Pass::new(place);

    t.push_with_distribution(
        format!("Starting counting sort for digit place {place}. Initializing buckets (counts)."),
        p.view(),
        phased(ArrayAction::Focus, SortPhase::Distributing),
    );

    for i in 0..n {
        let v = t.value(i);
        let d = digit(v, place);
        p.counts[d] += 1;
        t.push_with_distribution(
            format!(
                "Processing element {v}. Digit at place {place} is {d}. \
                 Incrementing count for digit {d}."
            ),
            p.view(),
            ArrayTags {
                current_index: Some(i),
                count_index: Some(d),
                bucket: Some(d),
                ..phased(ArrayAction::Count, SortPhase::Distributing)
            },
        );
    }

    for d in 1..RADIX {
        p.counts[d] += p.counts[d - 1];
    }
    t.push_with_distribution(
        format!(
            "Calculated cumulative counts for digit positions. Count array: [{}]",
            counts_str(&p.counts)
        ),
        p.view(),
        phased(ArrayAction::Focus, SortPhase::Distributing),
    );

    // Back to front keeps equal digits in their current order.
    let mut output: Vec<Option<ArrayElement>> = vec![None; n];
    for i in (0..n).rev() {
        let el = t.elements[i];
        let d = digit(el.value, place);
        let pos = p.counts[d].saturating_sub(1);
        if let Some(out) = output.get_mut(pos) {
            *out = Some(el);
        }
        p.buckets[d].insert(0, el);
        t.push_with_distribution(
            format!(
                "Placing element {} (digit {d}) into its sorted position based on current digit. \
                 Output index: {pos}.",
                el.value
            ),
            p.view(),
            ArrayTags {
                current_index: Some(i),
                bucket: Some(d),
                output_index: Some(pos),
                ..phased(ArrayAction::Distribute, SortPhase::Distributing)
            },
        );
        p.counts[d] = pos;
    }

    t.replace(output.into_iter().flatten().collect());
    t.push_with_distribution(
        format!("Collected elements from buckets. Array sorted by digit place {place}."),
        p.view(),
        phased(ArrayAction::Collect, SortPhase::Collecting),
    );
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/sorting/radix.rs"]
mod tests;
