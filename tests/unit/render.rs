use super::*;
use crate::algorithms::greedy;
use crate::algorithms::sorting::{bubble, counting, heap};
use crate::trace::snapshot::Activity;
use crate::algorithms::tree::Bst;
use crate::trace::tags::{ArrayAction, TreeAction, TreeTags};

fn array(values: &[i64], sorted: Vec<usize>) -> ArraySnapshot {
    ArraySnapshot {
        elements: values
            .iter()
            .enumerate()
            .map(|(i, &value)| ArrayElement {
                id: i as u32,
                value,
            })
            .collect(),
        sorted_indices: sorted,
        scratch: None,
        distribution: None,
    }
}

#[test]
fn roles_follow_priority() {
    let snap = array(&[4, 7, 9], vec![2]);
    let tags = ArrayTags {
        comparing: Some([0, 1]),
        range: Some([0, 2]),
        ..ArrayTags::new(ArrayAction::Compare)
    };
    assert_eq!(
        array_roles(&snap, Some(&tags)),
        vec![
            ElementRole::Comparing,
            ElementRole::Comparing,
            ElementRole::Sorted
        ]
    );

    let swap = ArrayTags {
        comparing: Some([0, 1]),
        swapping: Some([0, 1]),
        ..ArrayTags::new(ArrayAction::Swap)
    };
    assert_eq!(array_roles(&snap, Some(&swap))[0], ElementRole::Swapping);
    assert_eq!(array_roles(&snap, None)[1], ElementRole::Plain);
}

#[test]
fn out_of_range_tags_are_ignored() {
    let snap = array(&[1], vec![]);
    let tags = ArrayTags {
        found_index: Some(5),
        range: Some([0, 3]),
        ..ArrayTags::new(ArrayAction::Found)
    };
    assert_eq!(array_roles(&snap, Some(&tags)), vec![ElementRole::InRange]);
}

#[test]
fn array_step_renders_markers() {
    let seq = bubble::trace(&[2, 1]);
    let text = render_step(seq.get(1).unwrap());
    assert_eq!(text, "Comparing 2 (at index 0) and 1 (at index 1).\n  2? 1?\n");

    let last = render_step(seq.last().unwrap());
    assert!(last.ends_with("  1# 2#\n"));
}

#[test]
fn heapify_largest_is_marked_as_extreme() {
    let seq = heap::trace(&[1, 2, 3]);
    let decision = seq
        .iter()
        .find(|s| s.tags.as_array().unwrap().action == ArrayAction::Compare)
        .unwrap();
    let snap = decision.snapshot.as_array().unwrap();
    assert_eq!(
        array_roles(snap, decision.tags.as_array()),
        vec![ElementRole::Pivot, ElementRole::InRange, ElementRole::Extreme]
    );
    assert!(render_step(decision).ends_with("\n  1p 2 3m\n"));
}

#[test]
fn counting_buffers_render_below_the_array() {
    let seq = counting::trace(&[2, 1]);
    assert_eq!(
        render_step(seq.get(7).unwrap()),
        "Processing element 1 (from input index 1). Its position in sorted output is 0 \
         (from count[1] - 1).\n  2 1^\n  count [0, 1, 2]\n  output [1, _]\n"
    );
}

#[test]
fn schedule_marks_current_and_selected() {
    let acts = [
        Activity {
            name: "P".into(),
            start: 1,
            finish: 3,
        },
        Activity {
            name: "Q".into(),
            start: 3,
            finish: 4,
        },
    ];
    let seq = greedy::trace(&acts);
    assert_eq!(
        render_step(seq.get(2).unwrap()),
        "Considering activity Q (starts 3, finishes 4). Last selected activity finished at 3.\n  \
         * P 1-3\n  > Q 3-4\n  last finish 3\n"
    );
}

#[test]
fn tree_renders_sideways() {
    let tree = Bst::from_values([5, 3, 8]);
    let step = Step {
        description: "tree".into(),
        snapshot: AlgorithmState::Tree(tree.snapshot(|_| NodeHighlight::None)),
        tags: SemanticTags::Tree(TreeTags {
            path: vec![3, 5],
            ..TreeTags::new(TreeAction::Visit)
        }),
    };
    assert_eq!(
        render_step(&step),
        "tree\n      8\n  5\n      3\npath: [3, 5]\n"
    );
}

#[test]
fn empty_tree_has_placeholder() {
    let step = Step {
        description: "Tree is empty.".into(),
        snapshot: AlgorithmState::Tree(TreeSnapshot::default()),
        tags: SemanticTags::Tree(TreeTags::new(TreeAction::Idle)),
    };
    assert!(render_step(&step).contains("(empty tree)"));
}

#[test]
fn queens_board_rows() {
    let step = Step {
        description: "board".into(),
        snapshot: AlgorithmState::Search(SearchSnapshot::Queens(QueensBoard {
            size: 4,
            placements: vec![Some(1), Some(3), None, None],
            solutions: Vec::new(),
        })),
        tags: SemanticTags::Search(crate::trace::tags::SearchTags::new(
            crate::trace::tags::SearchAction::Try,
        )),
    };
    assert_eq!(
        render_step(&step),
        "board\n  .Q..\n  ...Q\n  ....\n  ....\n  solutions 0\n"
    );
}

#[test]
fn text_observer_writes_headers() {
    let seq = bubble::trace(&[1]);
    let mut obs = TextObserver::new(Vec::new()).with_total(seq.len());
    for (i, step) in seq.iter().enumerate() {
        obs.on_step(i, step);
    }
    let out = String::from_utf8(obs.into_inner()).unwrap();
    assert!(out.starts_with("-- step 1/2 --\n"));
    assert!(out.contains("-- step 2/2 --\n"));
}

struct Broken;

impl Write for Broken {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_errors_do_not_panic() {
    let seq = bubble::trace(&[1]);
    let mut obs = TextObserver::new(Broken);
    obs.on_step(0, seq.first().unwrap());
}
