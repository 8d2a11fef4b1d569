use crate::algorithms::sorting::join_values;
use crate::algorithms::tree::bst::Bst;
use crate::trace::builder::TraceBuilder;
use crate::trace::snapshot::{AlgorithmState, NodeHighlight, NodeId};
use crate::trace::step::StepSequence;
use crate::trace::tags::{SemanticTags, TreeAction, TreeTags};

/// Depth-first visiting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Root, left, right.
    Preorder,
    /// Left, root, right.
    Inorder,
    /// Left, right, root.
    Postorder,
}

impl TraversalOrder {
    /// All orders.
    pub const ALL: [TraversalOrder; 3] = [Self::Preorder, Self::Inorder, Self::Postorder];

    /// Lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Preorder => "preorder",
            Self::Inorder => "inorder",
            Self::Postorder => "postorder",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Preorder => "Preorder",
            Self::Inorder => "Inorder",
            Self::Postorder => "Postorder",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            Self::Preorder => "Root-Left-Right",
            Self::Inorder => "Left-Root-Right",
            Self::Postorder => "Left-Right-Root",
        }
    }
}

impl std::str::FromStr for TraversalOrder {
    type Err = crate::TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        let key = key.strip_suffix("order").map(str::to_owned).unwrap_or(key);
        Self::ALL
            .into_iter()
            .find(|o| o.name().strip_suffix("order") == Some(key.as_str()))
            .ok_or_else(|| crate::TraceError::validation(format!("unknown traversal order '{s}'")))
    }
}

struct Walk<'a> {
    tree: &'a Bst,
    order: TraversalOrder,
    path: Vec<i64>,
    visited: Vec<NodeId>,
    out: TraceBuilder,
}

impl Walk<'_> {
    fn push(&mut self, current: Option<NodeId>, description: String, action: TreeAction) {
        let visited = &self.visited;
        let snapshot = self.tree.snapshot(|id| {
            if Some(id) == current {
                NodeHighlight::Current
            } else if visited.contains(&id) {
                NodeHighlight::Visited
            } else {
                NodeHighlight::None
            }
        });
        let tags = TreeTags {
            current: current.and_then(|id| self.tree.value(id)),
            path: self.path.clone(),
            ..TreeTags::new(action)
        };
        self.out
            .push(description, AlgorithmState::Tree(snapshot), SemanticTags::Tree(tags));
    }

    fn emit(&mut self, id: NodeId, value: i64) {
        self.path.push(value);
        self.visited.push(id);
        let suffix = match self.order {
            TraversalOrder::Inorder => "",
            TraversalOrder::Preorder | TraversalOrder::Postorder => " (Root)",
        };
        let description = format!(
            "Node {value} added to {} traversal{suffix}. Path: [{}]",
            self.order.name(),
            join_values(self.path.iter().copied())
        );
        self.push(Some(id), description, TreeAction::Visit);
    }

    fn descend(&mut self, id: NodeId, value: i64, action: TreeAction) {
        let side = if action == TreeAction::TraverseLeft {
            "left"
        } else {
            "right"
        };
        self.push(
            Some(id),
            format!("Visiting node {value}. Checking {side} subtree."),
            action,
        );
        let child = if action == TreeAction::TraverseLeft {
            self.tree.left(id)
        } else {
            self.tree.right(id)
        };
        if let Some(child) = child {
            self.visit(child);
        }
    }

    fn visit(&mut self, id: NodeId) {
        let Some(value) = self.tree.value(id) else {
            return;
        };
        match self.order {
            TraversalOrder::Preorder => {
                self.emit(id, value);
                self.descend(id, value, TreeAction::TraverseLeft);
                self.descend(id, value, TreeAction::TraverseRight);
            }
            TraversalOrder::Inorder => {
                self.descend(id, value, TreeAction::TraverseLeft);
                self.emit(id, value);
                self.descend(id, value, TreeAction::TraverseRight);
            }
            TraversalOrder::Postorder => {
                self.descend(id, value, TreeAction::TraverseLeft);
                self.descend(id, value, TreeAction::TraverseRight);
                self.emit(id, value);
            }
        }
    }
}

/// Trace a depth-first traversal; `tags.path` carries the output so far at every step.
#[tracing::instrument(skip(tree), fields(nodes = tree.len()))]
pub fn trace(tree: &Bst, order: TraversalOrder) -> StepSequence {
    let mut walk = Walk {
        tree,
        order,
        path: Vec::with_capacity(tree.len()),
        visited: Vec::with_capacity(tree.len()),
        out: TraceBuilder::new(),
    };

    let Some(root) = tree.root() else {
        walk.push(None, "Tree is empty.".to_string(), TreeAction::Idle);
        return walk.out.finish();
    };

    walk.push(
        None,
        format!(
            "Starting {} Traversal ({}).",
            order.title(),
            order.pattern()
        ),
        TreeAction::StartTraversal,
    );
    walk.visit(root);
    walk.push(
        None,
        format!(
            "{} Traversal complete. Path: [{}]",
            order.title(),
            join_values(walk.path.iter().copied())
        ),
        TreeAction::TraversalComplete,
    );
    walk.out.finish()
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tree/traversal.rs"]
mod tests;
