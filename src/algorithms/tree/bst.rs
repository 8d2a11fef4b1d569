use crate::trace::snapshot::{NodeHighlight, NodeId, TreeNode, TreeSnapshot};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Slot {
    value: i64,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Which child link of a parent a new node hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Arena-backed binary search tree of distinct values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bst {
    nodes: Vec<Slot>,
    root: Option<NodeId>,
}

impl Bst {
    /// Empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tree built by inserting `values` in order; duplicates are skipped.
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        let mut tree = Self::new();
        for v in values {
            tree.insert(v);
        }
        tree
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root node.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Value stored at `id`.
    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.nodes.get(id.0).map(|s| s.value)
    }

    /// Left child of `id`.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|s| s.left)
    }

    /// Right child of `id`.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|s| s.right)
    }

    /// Node holding `value`, if present.
    pub fn find(&self, value: i64) -> Option<NodeId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let v = self.nodes[id.0].value;
            cur = match value.cmp(&v) {
                std::cmp::Ordering::Equal => return Some(id),
                std::cmp::Ordering::Less => self.left(id),
                std::cmp::Ordering::Greater => self.right(id),
            };
        }
        None
    }

    /// True when `value` is in the tree.
    pub fn contains(&self, value: i64) -> bool {
        self.find(value).is_some()
    }

    /// Insert `value` without tracing. Returns the new node, or `None` for a duplicate.
    pub fn insert(&mut self, value: i64) -> Option<NodeId> {
        let Some(mut cur) = self.root else {
            return Some(self.attach(None, value));
        };
        loop {
            let v = self.nodes[cur.0].value;
            let (side, next) = match value.cmp(&v) {
                std::cmp::Ordering::Equal => return None,
                std::cmp::Ordering::Less => (Side::Left, self.left(cur)),
                std::cmp::Ordering::Greater => (Side::Right, self.right(cur)),
            };
            match next {
                Some(n) => cur = n,
                None => return Some(self.attach(Some((cur, side)), value)),
            }
        }
    }

    /// Values in in-order sequence.
    pub fn in_order(&self) -> Vec<i64> {
        self.snapshot(|_| NodeHighlight::None).in_order_values()
    }

    pub(crate) fn attach(&mut self, parent: Option<(NodeId, Side)>, value: i64) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Slot {
            value,
            left: None,
            right: None,
        });
        match parent {
            None => self.root = Some(id),
            Some((p, Side::Left)) => self.nodes[p.0].left = Some(id),
            Some((p, Side::Right)) => self.nodes[p.0].right = Some(id),
        }
        id
    }

    /// Deep copy of the tree with per-node highlights.
    pub fn snapshot(&self, mut highlight: impl FnMut(NodeId) -> NodeHighlight) -> TreeSnapshot {
        TreeSnapshot {
            nodes: self
                .nodes
                .iter()
                .enumerate()
                .map(|(i, s)| TreeNode {
                    value: s.value,
                    left: s.left,
                    right: s.right,
                    highlight: highlight(NodeId(i)),
                })
                .collect(),
            root: self.root,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tree/bst.rs"]
mod tests;
