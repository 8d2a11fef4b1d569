use std::collections::BTreeMap;

/// Complete, self-contained algorithm state for one step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum AlgorithmState {
    /// Sorting and searching over an array.
    Array(ArraySnapshot),
    /// Binary search tree operations.
    Tree(TreeSnapshot),
    /// Table-filling dynamic programming.
    DpTable(DpTableSnapshot),
    /// Backtracking search over a board or a candidate list.
    Search(SearchSnapshot),
    /// Graph traversal.
    Graph(GraphSnapshot),
    /// Memoized recursion.
    Memo(MemoSnapshot),
    /// Greedy interval scheduling.
    Schedule(ScheduleSnapshot),
}

impl AlgorithmState {
    /// The array arm, if this is an array snapshot.
    pub fn as_array(&self) -> Option<&ArraySnapshot> {
        match self {
            Self::Array(s) => Some(s),
            _ => None,
        }
    }

    /// The tree arm, if this is a tree snapshot.
    pub fn as_tree(&self) -> Option<&TreeSnapshot> {
        match self {
            Self::Tree(s) => Some(s),
            _ => None,
        }
    }

    /// The DP table arm, if this is a DP snapshot.
    pub fn as_dp_table(&self) -> Option<&DpTableSnapshot> {
        match self {
            Self::DpTable(s) => Some(s),
            _ => None,
        }
    }

    /// The search arm, if this is a backtracking snapshot.
    pub fn as_search(&self) -> Option<&SearchSnapshot> {
        match self {
            Self::Search(s) => Some(s),
            _ => None,
        }
    }

    /// The graph arm, if this is a graph snapshot.
    pub fn as_graph(&self) -> Option<&GraphSnapshot> {
        match self {
            Self::Graph(s) => Some(s),
            _ => None,
        }
    }

    /// The memo arm, if this is a memoized-recursion snapshot.
    pub fn as_memo(&self) -> Option<&MemoSnapshot> {
        match self {
            Self::Memo(s) => Some(s),
            _ => None,
        }
    }

    /// The schedule arm, if this is an interval-scheduling snapshot.
    pub fn as_schedule(&self) -> Option<&ScheduleSnapshot> {
        match self {
            Self::Schedule(s) => Some(s),
            _ => None,
        }
    }
}

/// An array value with a stable identity that survives swaps and shifts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ArrayElement {
    /// Original position of the element in the input.
    pub id: u32,
    /// Element value.
    pub value: i64,
}

/// Ordered values plus settled positions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArraySnapshot {
    /// Elements in current order.
    pub elements: Vec<ArrayElement>,
    /// Indices already in their final sorted position, ascending.
    pub sorted_indices: Vec<usize>,
    /// Merge-sort scratch buffers, present while a merge is in flight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scratch: Option<MergeScratch>,
    /// Count array and output buffers of a distribution sort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Distribution>,
}

impl ArraySnapshot {
    /// Element values in current order.
    pub fn values(&self) -> Vec<i64> {
        self.elements.iter().map(|e| e.value).collect()
    }

    /// True when index `i` is settled.
    pub fn is_sorted_at(&self, i: usize) -> bool {
        self.sorted_indices.binary_search(&i).is_ok()
    }
}

/// Left/right halves and the merged prefix of an in-flight merge.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MergeScratch {
    /// Copy of the left half.
    pub left: Vec<ArrayElement>,
    /// Copy of the right half.
    pub right: Vec<ArrayElement>,
    /// Elements placed so far, in merge order.
    pub merged: Vec<ArrayElement>,
    /// Highlighted position in `left`.
    pub left_cursor: Option<usize>,
    /// Highlighted position in `right`.
    pub right_cursor: Option<usize>,
}

/// Auxiliary buffers of a counting or radix sort.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "sort", rename_all = "snake_case")]
pub enum Distribution {
    /// Counting sort over values `0..counts.len()`.
    Counting(CountingBuffers),
    /// One least-significant-digit radix pass.
    Radix(RadixBuffers),
}

/// Count array plus the output buffer of a counting sort.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CountingBuffers {
    /// `counts[v]`: frequency of `v`, later the end position of `v` in the output.
    pub counts: Vec<usize>,
    /// Output slots, `None` until filled.
    pub output: Vec<Option<ArrayElement>>,
}

/// Digit counts and buckets of one radix pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadixBuffers {
    /// Place value of the digit in focus: 1, 10, 100, ...
    pub digit_place: i64,
    /// Per-digit counts (ten slots), cumulative after the prefix-sum step.
    pub counts: Vec<usize>,
    /// Per-digit buckets in output order (ten slots).
    pub buckets: Vec<Vec<ArrayElement>>,
}

/// Index of a node inside a [`TreeSnapshot`] arena.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub usize);

/// Per-node highlight used by tree renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeHighlight {
    /// No highlight.
    #[default]
    None,
    /// Node currently being compared or visited.
    Current,
    /// Node created by this operation.
    Inserted,
    /// Node already emitted by a traversal.
    Visited,
}

/// One node of a tree arena.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TreeNode {
    /// Node value.
    pub value: i64,
    /// Left child.
    pub left: Option<NodeId>,
    /// Right child.
    pub right: Option<NodeId>,
    /// Highlight for this step.
    pub highlight: NodeHighlight,
}

/// Deep copy of a tree taken at one step.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TreeSnapshot {
    /// Node arena; ids index into this vector.
    pub nodes: Vec<TreeNode>,
    /// Root node, `None` for an empty tree.
    pub root: Option<NodeId>,
}

impl TreeSnapshot {
    /// Node by id.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Values in in-order sequence.
    pub fn in_order_values(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut cur = self.root;
        while cur.is_some() || !stack.is_empty() {
            while let Some(id) = cur {
                stack.push(id);
                cur = self.node(id).and_then(|n| n.left);
            }
            let Some(id) = stack.pop() else {
                break;
            };
            if let Some(n) = self.node(id) {
                out.push(n.value);
                cur = n.right;
            }
        }
        out
    }

    /// Values of nodes carrying `highlight`, in arena order.
    pub fn highlighted(&self, highlight: NodeHighlight) -> Vec<i64> {
        self.nodes
            .iter()
            .filter(|n| n.highlight == highlight)
            .map(|n| n.value)
            .collect()
    }
}

/// One 0/1 knapsack item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KnapsackItem {
    /// Item weight.
    pub weight: i64,
    /// Item value.
    pub value: i64,
}

/// DP grid plus the active cell and best value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DpTableSnapshot {
    /// `table[i][w]`: best value using the first `i` items with capacity `w`.
    pub table: Vec<Vec<i64>>,
    /// Items in input order.
    pub items: Vec<KnapsackItem>,
    /// Knapsack capacity.
    pub capacity: usize,
    /// Cell `(i, w)` being filled or inspected.
    pub active_cell: Option<(usize, usize)>,
    /// Best value found so far; the optimum once the table is full.
    pub best_value: i64,
    /// Items chosen by the backtracking phase so far, in input order.
    pub selected: Vec<KnapsackItem>,
}

/// Board or candidate-list state of a backtracking search.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "problem", rename_all = "snake_case")]
pub enum SearchSnapshot {
    /// N-Queens board.
    Queens(QueensBoard),
    /// Subset-sum search.
    Subset(SubsetState),
}

impl SearchSnapshot {
    /// The current choice stack (column per placed row, or chosen candidate indices).
    pub fn choice_stack(&self) -> Vec<usize> {
        match self {
            Self::Queens(b) => b.placements.iter().map_while(|c| *c).collect(),
            Self::Subset(s) => s.chosen.clone(),
        }
    }

    /// Number of solutions accumulated so far.
    pub fn solution_count(&self) -> usize {
        match self {
            Self::Queens(b) => b.solutions.len(),
            Self::Subset(s) => s.solutions.len(),
        }
    }
}

/// Queens placed row by row.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QueensBoard {
    /// Board size.
    pub size: usize,
    /// Column of the queen in each row, `None` when the row is empty.
    pub placements: Vec<Option<usize>>,
    /// Solutions found so far; each lists the column per row.
    pub solutions: Vec<Vec<usize>>,
}

/// Candidates, current choice, and accumulated subset-sum solutions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubsetState {
    /// Candidate numbers.
    pub numbers: Vec<i64>,
    /// Target sum.
    pub target: i64,
    /// Indices of chosen candidates, in choice order.
    pub chosen: Vec<usize>,
    /// Sum of the chosen candidates.
    pub sum: i64,
    /// Solutions found so far, as values.
    pub solutions: Vec<Vec<i64>>,
}

/// Frontier discipline of a graph traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    /// FIFO queue (BFS).
    Queue,
    /// Recursion stack (DFS).
    Stack,
}

/// Directed edge between two node ids.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GraphEdge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
}

/// Graph plus traversal bookkeeping.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GraphSnapshot {
    /// Node ids in declaration order.
    pub nodes: Vec<String>,
    /// Edges in declaration order.
    pub edges: Vec<GraphEdge>,
    /// Queue or stack contents, front/bottom first.
    pub frontier: Vec<String>,
    /// How `frontier` is consumed.
    pub frontier_kind: FrontierKind,
    /// Visited node ids, in visit order.
    pub visited: Vec<String>,
    /// Discovery parent per node.
    pub parents: BTreeMap<String, Option<String>>,
}

/// Memo table and call stack of a memoized recursion.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MemoSnapshot {
    /// The requested argument.
    pub target: u32,
    /// Cached results by argument.
    pub cache: BTreeMap<u32, u64>,
    /// Active calls, outermost first.
    pub call_stack: Vec<u32>,
}

/// One interval of an activity selection input.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Activity {
    /// Label shown in descriptions.
    pub name: String,
    /// Start time.
    pub start: i64,
    /// Finish time, `>= start`.
    pub finish: i64,
}

/// Activities in finish order plus the greedy selection so far.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleSnapshot {
    /// Activities sorted by finish time, ties in input order.
    pub activities: Vec<Activity>,
    /// Positions in `activities` selected so far, ascending.
    pub selected: Vec<usize>,
    /// Finish time of the last selected activity.
    pub last_finish: Option<i64>,
}

impl ScheduleSnapshot {
    /// Names of the selected activities, in selection order.
    pub fn selected_names(&self) -> Vec<&str> {
        self.selected
            .iter()
            .filter_map(|&i| self.activities.get(i))
            .map(|a| a.name.as_str())
            .collect()
    }
}
