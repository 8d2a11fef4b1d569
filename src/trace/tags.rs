//! Per-step semantic annotations.
//!
//! Tags say *what happened* at a step (which indices were compared, which cell was filled, which
//! phase the algorithm is in). Renderers use them to colour and label the snapshot.

/// Algorithm-family specific annotations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum SemanticTags {
    /// Array annotations.
    Array(ArrayTags),
    /// Tree annotations.
    Tree(TreeTags),
    /// DP table annotations.
    DpTable(DpTags),
    /// Backtracking annotations.
    Search(SearchTags),
    /// Graph traversal annotations.
    Graph(GraphTags),
    /// Memoized recursion annotations.
    Memo(MemoTags),
    /// Interval scheduling annotations.
    Schedule(ScheduleTags),
}

impl SemanticTags {
    /// The array arm, if any.
    pub fn as_array(&self) -> Option<&ArrayTags> {
        match self {
            Self::Array(t) => Some(t),
            _ => None,
        }
    }

    /// The tree arm, if any.
    pub fn as_tree(&self) -> Option<&TreeTags> {
        match self {
            Self::Tree(t) => Some(t),
            _ => None,
        }
    }

    /// The DP arm, if any.
    pub fn as_dp_table(&self) -> Option<&DpTags> {
        match self {
            Self::DpTable(t) => Some(t),
            _ => None,
        }
    }

    /// The search arm, if any.
    pub fn as_search(&self) -> Option<&SearchTags> {
        match self {
            Self::Search(t) => Some(t),
            _ => None,
        }
    }

    /// The graph arm, if any.
    pub fn as_graph(&self) -> Option<&GraphTags> {
        match self {
            Self::Graph(t) => Some(t),
            _ => None,
        }
    }

    /// The memo arm, if any.
    pub fn as_memo(&self) -> Option<&MemoTags> {
        match self {
            Self::Memo(t) => Some(t),
            _ => None,
        }
    }

    /// The schedule arm, if any.
    pub fn as_schedule(&self) -> Option<&ScheduleTags> {
        match self {
            Self::Schedule(t) => Some(t),
            _ => None,
        }
    }
}

/// Observable event on an array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayAction {
    /// Initial state.
    Init,
    /// Start of a pass or a recursive range.
    Focus,
    /// Two positions are compared.
    Compare,
    /// A swap is about to happen.
    Swap,
    /// A swap just happened.
    Swapped,
    /// Nothing moves after a comparison.
    Keep,
    /// A new minimum (or maximum) candidate was found.
    NewExtreme,
    /// An element shifts one slot to the right.
    Shift,
    /// A held element is written into place.
    Place,
    /// A merge is being prepared or finished.
    Merge,
    /// A partition or heapify starts.
    Partition,
    /// One or more positions reached their final place.
    Settled,
    /// A search probes a position.
    Probe,
    /// A search narrows its window.
    Narrow,
    /// Target found.
    Found,
    /// Target not present.
    NotFound,
    /// A count-array slot is incremented or accumulated.
    Count,
    /// An element is routed to its output slot or bucket.
    Distribute,
    /// The output buffer is copied back into the array.
    Collect,
    /// Algorithm finished.
    Complete,
}

/// Phase of a distribution (counting or radix) sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPhase {
    /// Tallying value frequencies.
    Counting,
    /// Turning counts into end positions.
    CalculatingPositions,
    /// Placing elements into the output buffer.
    BuildingOutput,
    /// Output buffer replaces the array.
    CopyingBack,
    /// Routing elements into digit buckets.
    Distributing,
    /// Reading buckets back in order.
    Collecting,
    /// Done.
    Complete,
}

/// Index roles for an array step. Unset roles are `None`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArrayTags {
    /// What happened.
    pub action: ArrayAction,
    /// Positions being compared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparing: Option<[usize; 2]>,
    /// Positions about to be swapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swapping: Option<[usize; 2]>,
    /// Positions that were just swapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swapped: Option<[usize; 2]>,
    /// Position being filled (selection), probed (linear search), or read (distribution sorts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_index: Option<usize>,
    /// Current minimum (selection sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_index: Option<usize>,
    /// Largest of a heapify root and its children (heap sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub largest_index: Option<usize>,
    /// Held key (insertion sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_index: Option<usize>,
    /// Pivot position (quick sort) or heapify root (heap sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot_index: Option<usize>,
    /// Inclusive range in focus: partition, merge range, heap, or search window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[usize; 2]>,
    /// Position of a just-written element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placed_index: Option<usize>,
    /// Midpoint probe of a binary search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<usize>,
    /// Position where a search target was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_index: Option<usize>,
    /// Pass number (0-based) that just completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_completed: Option<usize>,
    /// Left child of the heapify root, when inside the heap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_child: Option<usize>,
    /// Right child of the heapify root, when inside the heap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_child: Option<usize>,
    /// Distribution-sort phase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<SortPhase>,
    /// Count-array slot touched at this step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_index: Option<usize>,
    /// Output-buffer slot written at this step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_index: Option<usize>,
    /// Radix bucket (digit) of the element in focus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<usize>,
}

impl ArrayTags {
    /// Tags with only an action set.
    pub fn new(action: ArrayAction) -> Self {
        Self {
            action,
            comparing: None,
            swapping: None,
            swapped: None,
            current_index: None,
            min_index: None,
            largest_index: None,
            key_index: None,
            pivot_index: None,
            range: None,
            placed_index: None,
            mid: None,
            found_index: None,
            pass_completed: None,
            left_child: None,
            right_child: None,
            phase: None,
            count_index: None,
            output_index: None,
            bucket: None,
        }
    }
}

/// Observable event on a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeAction {
    /// An insertion starts.
    StartInsert,
    /// The new value is compared with a node.
    Compare,
    /// Descend or recurse into the left subtree.
    TraverseLeft,
    /// Descend or recurse into the right subtree.
    TraverseRight,
    /// A node was created.
    Insert,
    /// The value already exists.
    Duplicate,
    /// A traversal starts.
    StartTraversal,
    /// A traversal emits a node.
    Visit,
    /// A traversal finished.
    TraversalComplete,
    /// Resting state.
    Idle,
}

/// Tree annotations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TreeTags {
    /// What happened.
    pub action: TreeAction,
    /// Value of the node being visited or compared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<i64>,
    /// Value inserted by this operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inserted: Option<i64>,
    /// Running traversal output.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<i64>,
}

impl TreeTags {
    /// Tags with only an action set.
    pub fn new(action: TreeAction) -> Self {
        Self {
            action,
            current: None,
            inserted: None,
            path: Vec::new(),
        }
    }
}

/// Phase of a table-filling DP trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DpPhase {
    /// Table allocated.
    Init,
    /// Cells are being computed.
    FillingTable,
    /// Reconstructing the chosen items.
    Backtracking,
    /// Done.
    Complete,
}

/// Outcome of filling one knapsack cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellDecision {
    /// The item is heavier than the capacity.
    DoesNotFit,
    /// Including the item is strictly better.
    Include,
    /// Excluding the item is better or equal.
    Exclude,
}

/// DP annotations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DpTags {
    /// Current phase.
    pub phase: DpPhase,
    /// Cell `(i, w)` in focus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell: Option<(usize, usize)>,
    /// 0-based item index in focus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_index: Option<usize>,
    /// Fill decision for `cell`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<CellDecision>,
    /// Whether the item in focus is (or was) included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<bool>,
    /// Remaining capacity during backtracking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_capacity: Option<usize>,
}

impl DpTags {
    /// Tags with only a phase set.
    pub fn new(phase: DpPhase) -> Self {
        Self {
            phase,
            cell: None,
            item_index: None,
            decision: None,
            included: None,
            remaining_capacity: None,
        }
    }
}

/// Backtracking step kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAction {
    /// Search starts.
    Start,
    /// A candidate choice is made.
    Try,
    /// A full valid assignment was reached.
    Solution,
    /// A choice is undone on return.
    Backtrack,
    /// Search finished.
    Complete,
}

/// Backtracking annotations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SearchTags {
    /// What happened.
    pub action: SearchAction,
    /// Recursion depth of the choice (row for N-Queens, candidate index for subset sum).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    /// The choice made or undone (column for N-Queens, candidate index for subset sum).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice: Option<usize>,
    /// 1-based number of the solution found at this step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_number: Option<usize>,
}

impl SearchTags {
    /// Tags with only an action set.
    pub fn new(action: SearchAction) -> Self {
        Self {
            action,
            depth: None,
            choice: None,
            solution_number: None,
        }
    }
}

/// Graph traversal event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphAction {
    /// Traversal starts.
    Start,
    /// A node joins the frontier.
    Discover,
    /// A node is taken from the frontier (BFS) or entered (DFS).
    Visit,
    /// An edge is inspected.
    CheckNeighbor,
    /// The neighbour was already visited.
    Skip,
    /// DFS recurses into the neighbour.
    Descend,
    /// DFS returned from the neighbour.
    Return,
    /// All neighbours of a node are done.
    Finish,
    /// Traversal finished.
    Complete,
}

/// Graph annotations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GraphTags {
    /// What happened.
    pub action: GraphAction,
    /// Node being processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    /// Neighbour being checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbor: Option<String>,
    /// True while unwinding.
    #[serde(default)]
    pub backtracking: bool,
}

impl GraphTags {
    /// Tags with only an action set.
    pub fn new(action: GraphAction) -> Self {
        Self {
            action,
            current: None,
            neighbor: None,
            backtracking: false,
        }
    }
}

/// Memoized recursion event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoEvent {
    /// Computation starts.
    Start,
    /// A call is entered.
    Call,
    /// Result served from the cache.
    CacheHit,
    /// Base case returns directly.
    BaseCase,
    /// Sub-calls are about to be made.
    Split,
    /// First sub-call returned.
    FirstReturned,
    /// Second sub-call returned.
    SecondReturned,
    /// Result stored in the cache.
    Store,
    /// Computation finished.
    Complete,
}

/// Memoized recursion annotations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MemoTags {
    /// What happened.
    pub event: MemoEvent,
    /// Argument of the call in focus.
    pub call: u32,
    /// Depth of the call in focus (0 outside any call).
    pub depth: usize,
    /// Value returned at this step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returned: Option<u64>,
}

/// Interval scheduling event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleAction {
    /// Activities listed in finish-time order.
    Start,
    /// An activity is weighed against the last selected one.
    Consider,
    /// The activity joins the selection.
    Select,
    /// The activity overlaps the selection and is dropped.
    Skip,
    /// Selection finished.
    Complete,
}

/// Interval scheduling annotations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleTags {
    /// What happened.
    pub action: ScheduleAction,
    /// Position (in finish order) of the activity in focus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<usize>,
    /// Whether the activity in focus fits after the last selected one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatible: Option<bool>,
}

impl ScheduleTags {
    /// Tags with only an action set.
    pub fn new(action: ScheduleAction) -> Self {
        Self {
            action,
            current: None,
            compatible: None,
        }
    }
}
