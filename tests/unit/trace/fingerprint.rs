use super::*;
use crate::algorithms::dp::{fibonacci, knapsack};
use crate::algorithms::sorting::counting;
use crate::trace::snapshot::KnapsackItem;

fn steps_of(seq: &crate::trace::step::StepSequence) -> Vec<Step> {
    seq.iter().cloned().collect()
}

#[test]
fn map_and_tuple_snapshots_serialize() {
    // Memo caches are integer-keyed maps and DP cells are tuples.
    let fib = fibonacci::trace(6);
    let items = [
        KnapsackItem {
            weight: 2,
            value: 3,
        },
        KnapsackItem {
            weight: 3,
            value: 4,
        },
    ];
    let knap = knapsack::trace(&items, 5);
    let counted = counting::trace(&[3, 0, 2, 3]);

    for step in fib.iter().chain(knap.iter()).chain(counted.iter()) {
        let bytes = serde_json::to_vec(step).unwrap();
        assert!(!bytes.is_empty(), "{}", step.description);
    }
}

#[test]
fn one_changed_description_changes_the_fingerprint() {
    let mut steps = steps_of(&fibonacci::trace(4));
    let before = fingerprint_steps(&steps);
    assert_eq!(before, fingerprint_steps(&steps));

    steps[1].description.push('.');
    assert_ne!(before, fingerprint_steps(&steps));
}

#[test]
fn step_boundaries_are_part_of_the_hash() {
    let steps = steps_of(&fibonacci::trace(3));
    let empty = fingerprint_steps(&[]);
    assert_ne!(empty, fingerprint_steps(&steps[..1]));
    assert_ne!(fingerprint_steps(&steps[..1]), fingerprint_steps(&steps[..2]));
    assert_eq!(empty.to_string().len(), 32);
}
