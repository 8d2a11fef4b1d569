use super::*;
use crate::trace::tags::ArrayAction;

#[test]
fn build_phase_produces_max_heap() {
    let seq = trace(&[1, 2, 3]);
    let built = seq
        .iter()
        .find(|s| s.description == "Max heap built. Now extracting elements.")
        .unwrap();
    assert_eq!(built.snapshot.as_array().unwrap().values(), vec![3, 2, 1]);
    assert_eq!(built.tags.as_array().unwrap().range, Some([0, 2]));
}

#[test]
fn heapify_tags_name_root_and_children() {
    let seq = trace(&[1, 2, 3]);
    let decision = seq
        .iter()
        .find(|s| s.tags.as_array().unwrap().action == ArrayAction::Compare)
        .unwrap();
    let tags = decision.tags.as_array().unwrap();
    assert_eq!(tags.pivot_index, Some(0));
    assert_eq!(tags.left_child, Some(1));
    assert_eq!(tags.right_child, Some(2));
    assert_eq!(tags.largest_index, Some(2));
    assert_eq!(tags.min_index, None);
}

#[test]
fn extraction_settles_from_the_back() {
    let seq = trace(&[3, 1, 2]);
    let settled: Vec<Vec<usize>> = seq
        .iter()
        .filter(|s| s.tags.as_array().unwrap().action == ArrayAction::Settled)
        .map(|s| s.snapshot.as_array().unwrap().sorted_indices.clone())
        .collect();
    assert_eq!(settled, vec![vec![2], vec![1, 2]]);
    assert_eq!(
        seq.last().unwrap().snapshot.as_array().unwrap().values(),
        vec![1, 2, 3]
    );
}
