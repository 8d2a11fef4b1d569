use super::*;

fn actions(seq: &StepSequence) -> Vec<TreeAction> {
    seq.iter().map(|s| s.tags.as_tree().unwrap().action).collect()
}

#[test]
fn insert_into_empty_tree() {
    let (seq, tree) = trace(&Bst::new(), 5);
    assert_eq!(
        actions(&seq),
        vec![TreeAction::StartInsert, TreeAction::Insert, TreeAction::Idle]
    );
    assert_eq!(tree.in_order(), vec![5]);
    let first = seq.first().unwrap().snapshot.as_tree().unwrap();
    assert!(first.nodes.is_empty());
    assert_eq!(first.root, None);
}

#[test]
fn descent_compares_then_turns() {
    let base = Bst::from_values([5, 3, 8]);
    let (seq, tree) = trace(&base, 4);
    assert_eq!(
        actions(&seq),
        vec![
            TreeAction::StartInsert,
            TreeAction::Compare,
            TreeAction::TraverseLeft,
            TreeAction::Compare,
            TreeAction::TraverseRight,
            TreeAction::Insert,
            TreeAction::Idle,
        ]
    );
    assert_eq!(seq.get(1).unwrap().description, "Comparing 4 with 5.");
    assert_eq!(seq.get(4).unwrap().description, "4 > 3. Traversing right.");

    let compare = seq.get(3).unwrap().snapshot.as_tree().unwrap();
    assert_eq!(compare.highlighted(NodeHighlight::Current), vec![3]);

    let inserted = seq.get(5).unwrap();
    let snap = inserted.snapshot.as_tree().unwrap();
    assert_eq!(snap.highlighted(NodeHighlight::Inserted), vec![4]);
    assert_eq!(snap.highlighted(NodeHighlight::Current), vec![3]);
    assert_eq!(inserted.tags.as_tree().unwrap().current, Some(3));

    assert_eq!(tree.in_order(), vec![3, 4, 5, 8]);
    assert_eq!(base.len(), 3);
}

#[test]
fn earlier_snapshots_do_not_see_the_new_node() {
    let (seq, _) = trace(&Bst::from_values([5]), 7);
    let before = seq.get(2).unwrap().snapshot.as_tree().unwrap();
    assert_eq!(before.nodes.len(), 1);
    let after = seq.last().unwrap().snapshot.as_tree().unwrap();
    assert_eq!(after.in_order_values(), vec![5, 7]);
}

#[test]
fn duplicate_leaves_tree_unchanged() {
    let base = Bst::from_values([5, 3]);
    let (seq, tree) = trace(&base, 3);
    let last = seq.last().unwrap();
    assert_eq!(last.tags.as_tree().unwrap().action, TreeAction::Duplicate);
    assert_eq!(last.description, "3 already exists in the tree. No insertion.");
    assert_eq!(tree, base);
}
