use std::cmp::Ordering;

use crate::algorithms::tree::bst::{Bst, Side};
use crate::trace::builder::TraceBuilder;
use crate::trace::snapshot::{AlgorithmState, NodeHighlight, NodeId};
use crate::trace::step::StepSequence;
use crate::trace::tags::{SemanticTags, TreeAction, TreeTags};

/// Trace inserting `value` into a copy of `tree`.
///
/// Returns the trace and the tree after insertion; `tree` itself is left untouched. A duplicate
/// value ends the trace with a [`TreeAction::Duplicate`] step and returns an identical tree.
#[tracing::instrument(skip(tree), fields(nodes = tree.len()))]
pub fn trace(tree: &Bst, value: i64) -> (StepSequence, Bst) {
    let mut tree = tree.clone();
    let mut out = TraceBuilder::new();

    push(
        &mut out,
        &tree,
        None,
        None,
        format!("Starting insertion of {value}."),
        TreeTags::new(TreeAction::StartInsert),
    );

    let mut parent: Option<(NodeId, Side)> = None;
    let mut cur = tree.root();

    while let Some(id) = cur {
        let Some(v) = tree.value(id) else {
            break;
        };
        let at = TreeTags {
            current: Some(v),
            ..TreeTags::new(TreeAction::Compare)
        };
        push(
            &mut out,
            &tree,
            Some(id),
            None,
            format!("Comparing {value} with {v}."),
            at.clone(),
        );

        let (side, action, description) = match value.cmp(&v) {
            Ordering::Less => (
                Side::Left,
                TreeAction::TraverseLeft,
                format!("{value} < {v}. Traversing left."),
            ),
            Ordering::Greater => (
                Side::Right,
                TreeAction::TraverseRight,
                format!("{value} > {v}. Traversing right."),
            ),
            Ordering::Equal => {
                push(
                    &mut out,
                    &tree,
                    Some(id),
                    None,
                    format!("{value} already exists in the tree. No insertion."),
                    TreeTags {
                        action: TreeAction::Duplicate,
                        ..at
                    },
                );
                return (out.finish(), tree);
            }
        };
        push(
            &mut out,
            &tree,
            Some(id),
            None,
            description,
            TreeTags { action, ..at },
        );

        parent = Some((id, side));
        cur = match side {
            Side::Left => tree.left(id),
            Side::Right => tree.right(id),
        };
    }

    let new_id = tree.attach(parent, value);
    let parent_id = parent.map(|(p, _)| p);
    push(
        &mut out,
        &tree,
        parent_id,
        Some(new_id),
        format!("Node is null. Inserting {value}."),
        TreeTags {
            current: parent_id.and_then(|p| tree.value(p)),
            inserted: Some(value),
            ..TreeTags::new(TreeAction::Insert)
        },
    );
    push(
        &mut out,
        &tree,
        None,
        Some(new_id),
        format!("Insertion of {value} complete."),
        TreeTags {
            inserted: Some(value),
            ..TreeTags::new(TreeAction::Idle)
        },
    );

    (out.finish(), tree)
}

fn push(
    out: &mut TraceBuilder,
    tree: &Bst,
    current: Option<NodeId>,
    inserted: Option<NodeId>,
    description: String,
    tags: TreeTags,
) {
    let snapshot = tree.snapshot(|id| {
        if Some(id) == inserted {
            NodeHighlight::Inserted
        } else if Some(id) == current {
            NodeHighlight::Current
        } else {
            NodeHighlight::None
        }
    });
    out.push(
        description,
        AlgorithmState::Tree(snapshot),
        SemanticTags::Tree(tags),
    );
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tree/insert.rs"]
mod tests;
