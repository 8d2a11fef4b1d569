use super::*;
use crate::trace::tags::{ArrayAction, SortPhase};

fn radix_buffers(step: &crate::trace::step::Step) -> RadixBuffers {
    match step.snapshot.as_array().unwrap().distribution.clone() {
        Some(Distribution::Radix(b)) => b,
        other => panic!("expected radix buffers, got {other:?}"),
    }
}

#[test]
fn one_pass_per_digit_of_the_maximum() {
    let seq = trace(&[170, 45, 75, 90, 2]);
    let places: Vec<&str> = seq
        .iter()
        .map(|s| s.description.as_str())
        .filter(|d| d.starts_with("Sorting by digit place"))
        .collect();
    assert_eq!(
        places,
        vec![
            "Sorting by digit place: 1s.",
            "Sorting by digit place: 10s.",
            "Sorting by digit place: 100s."
        ]
    );
    // init, 3 x (announce, start, 5 counts, prefix sums, 5 placements, collect), complete
    assert_eq!(seq.len(), 44);

    let last = seq.last().unwrap();
    assert_eq!(
        last.snapshot.as_array().unwrap().values(),
        vec![2, 45, 75, 90, 170]
    );
    assert_eq!(last.tags.as_array().unwrap().phase, Some(SortPhase::Complete));
}

#[test]
fn ones_pass_collects_buckets_stably() {
    let seq = trace(&[170, 45, 75, 90, 2]);
    let collected = seq
        .iter()
        .find(|s| s.tags.as_array().unwrap().action == ArrayAction::Collect)
        .unwrap();
    assert_eq!(
        collected.description,
        "Collected elements from buckets. Array sorted by digit place 1."
    );
    assert_eq!(
        collected.snapshot.as_array().unwrap().values(),
        vec![170, 90, 2, 45, 75]
    );

    let b = radix_buffers(collected);
    assert_eq!(b.digit_place, 1);
    let bucket_values: Vec<Vec<i64>> = b
        .buckets
        .iter()
        .map(|bucket| bucket.iter().map(|e| e.value).collect())
        .collect();
    assert_eq!(bucket_values[0], vec![170, 90]);
    assert_eq!(bucket_values[2], vec![2]);
    assert_eq!(bucket_values[5], vec![45, 75]);
    assert!(bucket_values[1].is_empty());
}

#[test]
fn counting_steps_tag_the_digit_bucket() {
    let seq = trace(&[31, 4]);
    let counts: Vec<(Option<usize>, Option<usize>)> = seq
        .iter()
        .map(|s| s.tags.as_array().unwrap())
        .filter(|t| t.action == ArrayAction::Count)
        .map(|t| (t.current_index, t.bucket))
        .collect();
    assert_eq!(
        counts,
        vec![(Some(0), Some(1)), (Some(1), Some(4)), (Some(0), Some(3)), (Some(1), Some(0))]
    );
}

#[test]
fn all_zero_input_needs_no_pass() {
    let seq = trace(&[0, 0, 0]);
    assert_eq!(seq.len(), 2);
    let last = seq.last().unwrap().snapshot.as_array().unwrap();
    assert_eq!(last.sorted_indices, vec![0, 1, 2]);
}
