use super::*;
use crate::trace::tags::{ArrayAction, SortPhase};

fn counting_buffers(seq: &StepSequence, i: usize) -> CountingBuffers {
    match seq.get(i).unwrap().snapshot.as_array().unwrap().distribution.clone() {
        Some(Distribution::Counting(b)) => b,
        other => panic!("step {i}: expected counting buffers, got {other:?}"),
    }
}

#[test]
fn phases_run_in_order() {
    let seq = trace(&[3, 0, 2, 3]);
    let mut phases: Vec<SortPhase> = seq
        .iter()
        .filter_map(|s| s.tags.as_array().unwrap().phase)
        .collect();
    phases.dedup();
    assert_eq!(
        phases,
        vec![
            SortPhase::Counting,
            SortPhase::CalculatingPositions,
            SortPhase::BuildingOutput,
            SortPhase::CopyingBack,
            SortPhase::Complete,
        ]
    );
    assert_eq!(seq.len(), 20);
}

#[test]
fn counts_become_end_positions() {
    let seq = trace(&[3, 0, 2, 3]);
    assert_eq!(
        seq.first().unwrap().description,
        "Initial array. Max value is 3. Preparing to count frequencies."
    );
    assert_eq!(
        seq.get(5).unwrap().description,
        "Finished counting frequencies. Count array: [1, 0, 1, 2]"
    );
    assert_eq!(counting_buffers(&seq, 5).counts, vec![1, 0, 1, 2]);
    assert_eq!(counting_buffers(&seq, 9).counts, vec![1, 1, 2, 4]);
    assert_eq!(
        seq.get(9).unwrap().description,
        "Finished calculating cumulative counts. This array now stores end positions. \
         Count array: [1, 1, 2, 4]"
    );
}

#[test]
fn output_fills_back_to_front_and_stays_stable() {
    let seq = trace(&[3, 0, 2, 3]);
    let first_place = seq.get(10).unwrap();
    let tags = first_place.tags.as_array().unwrap();
    assert_eq!(tags.action, ArrayAction::Distribute);
    assert_eq!(tags.current_index, Some(3));
    assert_eq!(tags.output_index, Some(3));
    assert_eq!(
        first_place.description,
        "Processing element 3 (from input index 3). Its position in sorted output is 3 \
         (from count[3] - 1)."
    );
    assert_eq!(
        seq.get(11).unwrap().description,
        "Placed 3 at output index 3. Decremented count for 3 to 3."
    );

    let last = seq.last().unwrap().snapshot.as_array().unwrap();
    assert_eq!(last.values(), vec![0, 2, 3, 3]);
    let ids: Vec<u32> = last.elements.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 0, 3]);
    assert_eq!(last.sorted_indices, vec![0, 1, 2, 3]);
}

#[test]
fn input_stays_put_until_the_copy_back() {
    let seq = trace(&[2, 1]);
    let n = seq.len();
    for i in 0..n - 1 {
        let values = seq.get(i).unwrap().snapshot.as_array().unwrap().values();
        assert_eq!(values, vec![2, 1], "step {i}");
    }
    let copying = seq.get(n - 2).unwrap();
    assert_eq!(
        copying.description,
        "Finished building sorted output array: [1, 2]"
    );
    assert_eq!(
        counting_buffers(&seq, n - 2).output,
        vec![
            Some(ArrayElement { id: 1, value: 1 }),
            Some(ArrayElement { id: 0, value: 2 })
        ]
    );
}

#[test]
fn empty_and_zero_inputs() {
    let empty = trace(&[]);
    assert_eq!(empty.len(), 2);
    assert_eq!(
        empty.first().unwrap().description,
        "Initial array is empty. Nothing to sort."
    );

    let zeros = trace(&[0, 0]);
    assert_eq!(counting_buffers(&zeros, 2).counts, vec![2]);
    assert_eq!(
        zeros.last().unwrap().snapshot.as_array().unwrap().values(),
        vec![0, 0]
    );
}
