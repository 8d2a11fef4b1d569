use super::*;

fn solutions(seq: &StepSequence) -> Vec<Vec<i64>> {
    match seq.last().unwrap().snapshot.as_search().unwrap() {
        SearchSnapshot::Subset(s) => s.solutions.clone(),
        SearchSnapshot::Queens(_) => panic!("expected subset state"),
    }
}

#[test]
fn include_first_order_yields_one_four_then_two_three() {
    let seq = trace(&[1, 2, 3, 4], 5);
    assert_eq!(solutions(&seq), vec![vec![1, 4], vec![2, 3]]);
    assert_eq!(seq.get(1).unwrap().description, "Trying with 1: [1] = 1");
    assert_eq!(seq.get(2).unwrap().description, "Trying with 2: [1, 2] = 3");
    assert!(seq.iter().any(|s| s.description == "Found subset: [1, 4] = 5"));
    assert_eq!(seq.last().unwrap().description, "Completed! Found 2 subsets.");
}

#[test]
fn backtrack_restores_sum_and_choice() {
    let seq = trace(&[1, 2, 3, 4], 5);
    let undo = seq
        .iter()
        .find(|s| s.tags.as_search().unwrap().action == SearchAction::Backtrack)
        .unwrap();
    assert_eq!(undo.description, "Backtracking - removing 3");
    match undo.snapshot.as_search().unwrap() {
        SearchSnapshot::Subset(s) => {
            assert_eq!(s.chosen, vec![0, 1]);
            assert_eq!(s.sum, 3);
        }
        SearchSnapshot::Queens(_) => panic!("expected subset state"),
    }
}

#[test]
fn unreachable_target_finds_nothing() {
    let seq = trace(&[2, 4], 5);
    assert!(solutions(&seq).is_empty());
    let tries = seq
        .iter()
        .filter(|s| s.tags.as_search().unwrap().action == SearchAction::Try)
        .count();
    let undos = seq
        .iter()
        .filter(|s| s.tags.as_search().unwrap().action == SearchAction::Backtrack)
        .count();
    assert_eq!(tries, undos);
}

#[test]
fn zero_target_accepts_the_empty_subset() {
    let seq = trace(&[1, 2], 0);
    assert_eq!(solutions(&seq), vec![Vec::<i64>::new()]);
    assert_eq!(seq.len(), 3);
}
