use super::*;
use crate::algorithms::sorting::SortAlgorithm;
use crate::playback::controller::PlaybackState;

fn config() -> SessionConfig {
    SessionConfig::default()
}

#[test]
fn sorting_reset_regenerates_and_rewinds() {
    let mut vis = Visualizer::new(&config()).unwrap();
    let len = vis
        .run(AlgorithmInput::Sort {
            algorithm: SortAlgorithm::Bubble,
            array: vec![5, 2, 8, 1],
        })
        .unwrap()
        .len();
    let before = vis.controller().steps().unwrap().fingerprint();

    vis.controller_mut().seek(len - 1);
    vis.reset();
    assert_eq!(vis.controller().current_index(), Some(0));
    assert_eq!(vis.controller().state(), PlaybackState::Idle);
    assert_eq!(vis.controller().steps().unwrap().fingerprint(), before);
}

#[test]
fn backtracking_reset_clears() {
    let mut vis = Visualizer::new(&config()).unwrap();
    vis.run(AlgorithmInput::NQueens { n: 4 }).unwrap();
    vis.controller_mut().play();
    vis.reset();
    assert!(vis.controller().steps().is_none());
    assert!(vis.input().is_none());
    assert_eq!(vis.controller().scheduler().pending(), 0);
}

#[test]
fn rejected_input_keeps_previous_trace() {
    let mut vis = Visualizer::new(&config()).unwrap();
    vis.run(AlgorithmInput::Fibonacci { n: 4 }).unwrap();
    vis.controller_mut().next();

    let err = vis.run(AlgorithmInput::Fibonacci { n: 99 }).unwrap_err();
    assert!(err.is_input_error());
    assert_eq!(vis.input(), Some(&AlgorithmInput::Fibonacci { n: 4 }));
    assert_eq!(vis.controller().current_index(), Some(1));
}

#[test]
fn tree_inserts_accumulate_until_reset() {
    let mut vis = TreeVisualizer::new(&config()).unwrap();
    for v in [5, 3, 8, 1] {
        vis.insert(v).unwrap();
    }
    assert_eq!(vis.tree().in_order(), vec![1, 3, 5, 8]);

    vis.traverse(TraversalOrder::Inorder);
    let last = vis.controller().steps().unwrap().last().unwrap();
    assert_eq!(last.tags.as_tree().unwrap().path, vec![1, 3, 5, 8]);

    vis.reset();
    assert!(vis.tree().is_empty());
    assert!(vis.controller().steps().is_none());
}

#[test]
fn tree_capacity_is_enforced() {
    let mut cfg = config();
    cfg.limits.max_nodes = 2;
    let mut vis = TreeVisualizer::new(&cfg).unwrap();
    vis.insert(1).unwrap();
    vis.insert(2).unwrap();
    vis.insert(2).unwrap();
    let err = vis.insert(3).unwrap_err();
    assert!(err.to_string().contains("tree is full"));
}
