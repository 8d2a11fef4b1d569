use super::*;
use crate::trace::tags::ArrayAction;

#[test]
fn pivot_lands_in_final_position() {
    let seq = trace(&[3, 1, 2]);
    let settle = seq
        .iter()
        .find(|s| s.description.starts_with("Pivot 2 is now"))
        .unwrap();
    assert_eq!(
        settle.description,
        "Pivot 2 is now in its sorted position at index 1."
    );
    let arr = settle.snapshot.as_array().unwrap();
    assert_eq!(arr.values(), vec![1, 2, 3]);
    assert_eq!(arr.sorted_indices, vec![1]);
    assert_eq!(settle.tags.as_array().unwrap().pivot_index, Some(1));
}

#[test]
fn empty_input_reports_empty_range() {
    let seq = trace(&[]);
    assert_eq!(seq.len(), 3);
    assert_eq!(
        seq.get(1).unwrap().description,
        "Subarray from index 0 to -1 is empty, considered sorted."
    );
    assert_eq!(
        seq.last().unwrap().tags.as_array().unwrap().action,
        ArrayAction::Complete
    );
}
