use super::*;

fn solutions(seq: &StepSequence) -> Vec<Vec<usize>> {
    match seq.last().unwrap().snapshot.as_search().unwrap() {
        SearchSnapshot::Queens(b) => b.solutions.clone(),
        SearchSnapshot::Subset(_) => panic!("expected a queens board"),
    }
}

#[test]
fn four_queens_finds_two_solutions_in_column_order() {
    let seq = trace(4);
    assert_eq!(solutions(&seq), vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    assert_eq!(seq.last().unwrap().description, "Completed! Found 2 solutions.");

    let found: Vec<usize> = seq
        .iter()
        .filter_map(|s| s.tags.as_search().unwrap().solution_number)
        .collect();
    assert_eq!(found, vec![1, 2]);
}

#[test]
fn every_try_is_undone() {
    let seq = trace(5);
    let count = |action: SearchAction| {
        seq.iter()
            .filter(|s| s.tags.as_search().unwrap().action == action)
            .count()
    };
    assert_eq!(count(SearchAction::Try), count(SearchAction::Backtrack));
    assert_eq!(solutions(&seq).len(), 10);

    let last = seq.last().unwrap().snapshot.as_search().unwrap();
    assert!(last.choice_stack().is_empty());
}

#[test]
fn solution_step_shows_full_board() {
    let seq = trace(4);
    let first = seq
        .iter()
        .find(|s| s.tags.as_search().unwrap().action == SearchAction::Solution)
        .unwrap();
    let snap = first.snapshot.as_search().unwrap();
    assert_eq!(snap.choice_stack(), vec![1, 3, 0, 2]);
    assert_eq!(snap.solution_count(), 1);
    assert_eq!(first.description, "Found solution 1!");
}

#[test]
fn unsolvable_sizes_report_zero() {
    for n in [2, 3] {
        let seq = trace(n);
        assert!(solutions(&seq).is_empty());
        assert_eq!(seq.last().unwrap().description, "Completed! Found 0 solutions.");
    }
    assert_eq!(solutions(&trace(1)), vec![vec![0]]);
}
