use super::*;

fn visits(seq: &StepSequence) -> Vec<i64> {
    seq.iter()
        .filter(|s| s.tags.as_tree().unwrap().action == TreeAction::Visit)
        .filter_map(|s| s.tags.as_tree().unwrap().current)
        .collect()
}

#[test]
fn three_orders_over_the_same_tree() {
    let tree = Bst::from_values([5, 3, 8, 1, 4]);
    assert_eq!(visits(&trace(&tree, TraversalOrder::Preorder)), vec![5, 3, 1, 4, 8]);
    assert_eq!(visits(&trace(&tree, TraversalOrder::Inorder)), vec![1, 3, 4, 5, 8]);
    assert_eq!(visits(&trace(&tree, TraversalOrder::Postorder)), vec![1, 4, 3, 8, 5]);
}

#[test]
fn path_grows_and_closes_the_trace() {
    let tree = Bst::from_values([2, 1, 3]);
    let seq = trace(&tree, TraversalOrder::Inorder);
    assert_eq!(
        seq.first().unwrap().description,
        "Starting Inorder Traversal (Left-Root-Right)."
    );
    let last = seq.last().unwrap();
    assert_eq!(last.description, "Inorder Traversal complete. Path: [1, 2, 3]");
    assert_eq!(last.tags.as_tree().unwrap().path, vec![1, 2, 3]);

    let mut prev = 0;
    for step in seq.iter() {
        let len = step.tags.as_tree().unwrap().path.len();
        assert!(len >= prev);
        prev = len;
    }
}

#[test]
fn visited_nodes_stay_highlighted() {
    let tree = Bst::from_values([2, 1, 3]);
    let seq = trace(&tree, TraversalOrder::Preorder);
    let last = seq.last().unwrap().snapshot.as_tree().unwrap();
    assert_eq!(last.highlighted(NodeHighlight::Visited), vec![2, 1, 3]);
    let root_visit = seq
        .iter()
        .find(|s| s.description.starts_with("Node 2 added to preorder traversal (Root)."))
        .unwrap();
    assert_eq!(root_visit.tags.as_tree().unwrap().path, vec![2]);
}

#[test]
fn empty_tree_is_a_single_step() {
    let seq = trace(&Bst::new(), TraversalOrder::Postorder);
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.first().unwrap().description, "Tree is empty.");
}

#[test]
fn order_names_parse_loosely() {
    assert_eq!("in-order".parse::<TraversalOrder>().unwrap(), TraversalOrder::Inorder);
    assert_eq!("PRE".parse::<TraversalOrder>().unwrap(), TraversalOrder::Preorder);
    assert_eq!("postorder".parse::<TraversalOrder>().unwrap(), TraversalOrder::Postorder);
    assert!("level".parse::<TraversalOrder>().is_err());
}
