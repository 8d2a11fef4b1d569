//! JSON-facing algorithm inputs, validation, and dispatch to the generators.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::algorithms::graph::{Graph, GraphAlgorithm};
use crate::algorithms::sorting::SortAlgorithm;
use crate::algorithms::tree::{Bst, TraversalOrder};
use crate::algorithms::sorting::{counting, radix};
use crate::algorithms::{backtracking, dp, graph, greedy, search, tree};
use crate::foundation::core::TraceLimits;
use crate::foundation::error::{TraceError, TraceResult};
use crate::trace::snapshot::{Activity, GraphEdge, KnapsackItem};
use crate::trace::step::StepSequence;

/// Largest absolute value accepted for any numeric element, weight, value, or target.
///
/// Keeps every running sum a generator computes far away from `i64` overflow.
pub const MAX_MAGNITUDE: i64 = 1_000_000_000;

/// One visualized operation and its arguments.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmInput {
    /// Sort an array.
    Sort {
        /// Which sort.
        algorithm: SortAlgorithm,
        /// Values to sort.
        array: Vec<i64>,
    },
    /// Counting sort over small non-negative values.
    CountingSort {
        /// Values to sort, each in `0..=limits.max_counting_value`.
        array: Vec<i64>,
    },
    /// LSD radix sort over non-negative values.
    RadixSort {
        /// Values to sort.
        array: Vec<i64>,
    },
    /// Scan an array for `target`.
    LinearSearch {
        /// Values to scan.
        array: Vec<i64>,
        /// Value to find.
        target: i64,
    },
    /// Halve a sorted array looking for `target`.
    BinarySearch {
        /// Non-decreasing values.
        array: Vec<i64>,
        /// Value to find.
        target: i64,
    },
    /// Insert one value into a BST built from `existing`.
    BstInsert {
        /// Values inserted (untraced) before the traced insertion.
        #[serde(default)]
        existing: Vec<i64>,
        /// Value to insert.
        value: i64,
    },
    /// Traverse a BST built from `values`.
    BstTraversal {
        /// Insertion order of the tree.
        values: Vec<i64>,
        /// Visiting order.
        order: TraversalOrder,
    },
    /// BFS or DFS over a labelled graph.
    Graph {
        /// Which traversal.
        algorithm: GraphAlgorithm,
        /// Node ids.
        nodes: Vec<String>,
        /// Directed edges, in adjacency order.
        edges: Vec<GraphEdge>,
        /// Start node id.
        start: String,
        /// Follow every edge in both directions.
        #[serde(default)]
        undirected: bool,
    },
    /// 0/1 knapsack.
    Knapsack {
        /// Candidate items.
        items: Vec<KnapsackItem>,
        /// Weight budget.
        capacity: i64,
    },
    /// Memoized Fibonacci.
    Fibonacci {
        /// Argument.
        n: u32,
    },
    /// N-Queens.
    NQueens {
        /// Board size.
        n: usize,
    },
    /// Subsets of positive numbers summing to a target.
    SubsetSum {
        /// Candidate numbers.
        numbers: Vec<i64>,
        /// Target sum.
        target: i64,
    },
    /// Greedy interval scheduling.
    ActivitySelection {
        /// Candidate activities, in any order.
        activities: Vec<Activity>,
    },
}

/// What a visualizer does with its trace on reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Regenerate the trace from the stored input and rewind.
    Regenerate,
    /// Drop the trace and any accumulated structure.
    Clear,
}

impl AlgorithmInput {
    /// Parse an input from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TraceResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TraceError::serde(format!("parse algorithm input JSON: {e}")))
    }

    /// Parse an input from a JSON string.
    pub fn from_json(s: &str) -> TraceResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse an input from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TraceResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TraceError::validation(format!("open input JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Stable name of the input kind, matching the serde tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sort { .. } => "sort",
            Self::CountingSort { .. } => "counting_sort",
            Self::RadixSort { .. } => "radix_sort",
            Self::LinearSearch { .. } => "linear_search",
            Self::BinarySearch { .. } => "binary_search",
            Self::BstInsert { .. } => "bst_insert",
            Self::BstTraversal { .. } => "bst_traversal",
            Self::Graph { .. } => "graph",
            Self::Knapsack { .. } => "knapsack",
            Self::Fibonacci { .. } => "fibonacci",
            Self::NQueens { .. } => "n_queens",
            Self::SubsetSum { .. } => "subset_sum",
            Self::ActivitySelection { .. } => "activity_selection",
        }
    }

    /// Reset behaviour for a visualizer holding this input.
    pub fn reset_policy(&self) -> ResetPolicy {
        match self {
            Self::NQueens { .. } | Self::SubsetSum { .. } => ResetPolicy::Clear,
            _ => ResetPolicy::Regenerate,
        }
    }

    /// Reject input the generators must not see.
    pub fn validate(&self, limits: &TraceLimits) -> TraceResult<()> {
        match self {
            Self::Sort { array, .. } => check_array("array", array, limits)?,
            Self::CountingSort { array } => {
                check_array("array", array, limits)?;
                check_non_negative("array", array)?;
                if let Some(i) = array.iter().position(|&v| v > limits.max_counting_value) {
                    return Err(TraceError::validation(format!(
                        "array[{i}]: counting sort values must be <= {}, got {}",
                        limits.max_counting_value, array[i]
                    )));
                }
            }
            Self::RadixSort { array } => {
                check_array("array", array, limits)?;
                check_non_negative("array", array)?;
            }
            Self::LinearSearch { array, target } => {
                check_array("array", array, limits)?;
                check_magnitude("target", *target)?;
            }
            Self::BinarySearch { array, target } => {
                check_array("array", array, limits)?;
                check_magnitude("target", *target)?;
                if let Some(i) = array.windows(2).position(|w| w[0] > w[1]) {
                    return Err(TraceError::validation(format!(
                        "array: binary search needs non-decreasing values, but array[{i}] = {} > array[{}] = {}",
                        array[i],
                        i + 1,
                        array[i + 1]
                    )));
                }
            }
            Self::BstInsert { existing, value } => {
                if existing.len() >= limits.max_nodes {
                    return Err(TraceError::validation(format!(
                        "existing: at most {} values may precede the insertion, got {}",
                        limits.max_nodes.saturating_sub(1),
                        existing.len()
                    )));
                }
                check_values("existing", existing)?;
                check_magnitude("value", *value)?;
            }
            Self::BstTraversal { values, .. } => {
                if values.len() > limits.max_nodes {
                    return Err(TraceError::validation(format!(
                        "values: at most {} nodes, got {}",
                        limits.max_nodes,
                        values.len()
                    )));
                }
                check_values("values", values)?;
            }
            Self::Graph {
                nodes,
                edges,
                start,
                ..
            } => check_graph(nodes, edges, start, limits)?,
            Self::Knapsack { items, capacity } => {
                if *capacity < 0 {
                    return Err(TraceError::validation(format!(
                        "capacity: must be >= 0, got {capacity}"
                    )));
                }
                if *capacity > limits.max_capacity {
                    return Err(TraceError::validation(format!(
                        "capacity: at most {}, got {capacity}",
                        limits.max_capacity
                    )));
                }
                if items.len() > limits.max_items {
                    return Err(TraceError::validation(format!(
                        "items: at most {} items, got {}",
                        limits.max_items,
                        items.len()
                    )));
                }
                for (i, item) in items.iter().enumerate() {
                    if item.weight < 0 || item.value < 0 {
                        return Err(TraceError::validation(format!(
                            "items[{i}]: weight and value must be >= 0"
                        )));
                    }
                    check_magnitude(&format!("items[{i}].weight"), item.weight)?;
                    check_magnitude(&format!("items[{i}].value"), item.value)?;
                }
            }
            Self::Fibonacci { n } => {
                if *n > limits.max_fibonacci {
                    return Err(TraceError::validation(format!(
                        "n: at most {}, got {n}",
                        limits.max_fibonacci
                    )));
                }
            }
            Self::NQueens { n } => {
                if *n == 0 || *n > limits.max_queens {
                    return Err(TraceError::validation(format!(
                        "n: board size must be in 1..={}, got {n}",
                        limits.max_queens
                    )));
                }
            }
            Self::SubsetSum { numbers, target } => {
                if numbers.is_empty() {
                    return Err(TraceError::validation("numbers: must not be empty"));
                }
                if numbers.len() > limits.max_subset_len {
                    return Err(TraceError::validation(format!(
                        "numbers: at most {} candidates, got {}",
                        limits.max_subset_len,
                        numbers.len()
                    )));
                }
                if let Some(i) = numbers.iter().position(|&x| x <= 0) {
                    return Err(TraceError::validation(format!(
                        "numbers[{i}]: candidates must be > 0, got {}",
                        numbers[i]
                    )));
                }
                check_values("numbers", numbers)?;
                if *target < 0 {
                    return Err(TraceError::validation(format!(
                        "target: must be >= 0, got {target}"
                    )));
                }
                check_magnitude("target", *target)?;
            }
            Self::ActivitySelection { activities } => check_activities(activities, limits)?,
        }
        Ok(())
    }

    /// Run the matching generator. Callers validate first.
    pub(crate) fn run(&self) -> StepSequence {
        match self {
            Self::Sort { algorithm, array } => algorithm.trace(array),
            Self::CountingSort { array } => counting::trace(array),
            Self::RadixSort { array } => radix::trace(array),
            Self::LinearSearch { array, target } => search::linear(array, *target),
            Self::BinarySearch { array, target } => search::binary(array, *target),
            Self::BstInsert { existing, value } => {
                let base = Bst::from_values(existing.iter().copied());
                tree::insert::trace(&base, *value).0
            }
            Self::BstTraversal { values, order } => {
                let tree = Bst::from_values(values.iter().copied());
                tree::traversal::trace(&tree, *order)
            }
            Self::Graph {
                algorithm,
                nodes,
                edges,
                start,
                undirected,
            } => {
                let g = Graph::new(nodes.clone(), edges.clone(), *undirected);
                graph::trace(*algorithm, &g, start)
            }
            Self::Knapsack { items, capacity } => {
                dp::knapsack::trace(items, usize::try_from(*capacity).unwrap_or(0))
            }
            Self::Fibonacci { n } => dp::fibonacci::trace(*n),
            Self::NQueens { n } => backtracking::n_queens::trace(*n),
            Self::SubsetSum { numbers, target } => {
                backtracking::subset_sum::trace(numbers, *target)
            }
            Self::ActivitySelection { activities } => greedy::trace(activities),
        }
    }
}

/// Validate `input` against `limits`, then generate its trace.
///
/// Generation cannot fail once validation passes; every error is an input error.
#[tracing::instrument(skip(input, limits), fields(kind = input.kind()))]
pub fn generate(input: &AlgorithmInput, limits: &TraceLimits) -> TraceResult<StepSequence> {
    input.validate(limits)?;
    let seq = input.run();
    tracing::debug!(steps = seq.len(), "trace generated");
    Ok(seq)
}

/// Parse a comma- or whitespace-separated list of integers, e.g. `"5, 2, 8, 1"`.
///
/// An empty string yields an empty list; emptiness is judged by [`AlgorithmInput::validate`].
pub fn parse_number_list(s: &str) -> TraceResult<Vec<i64>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<i64>()
                .map_err(|_| TraceError::validation(format!("'{tok}' is not a valid integer")))
        })
        .collect()
}

fn check_magnitude(field: &str, v: i64) -> TraceResult<()> {
    if v.unsigned_abs() > MAX_MAGNITUDE.unsigned_abs() {
        return Err(TraceError::validation(format!(
            "{field}: magnitude must be <= {MAX_MAGNITUDE}, got {v}"
        )));
    }
    Ok(())
}

fn check_values(field: &str, values: &[i64]) -> TraceResult<()> {
    for (i, &v) in values.iter().enumerate() {
        check_magnitude(&format!("{field}[{i}]"), v)?;
    }
    Ok(())
}

fn check_array(field: &str, array: &[i64], limits: &TraceLimits) -> TraceResult<()> {
    if array.is_empty() {
        return Err(TraceError::validation(format!("{field}: must not be empty")));
    }
    if array.len() > limits.max_array_len {
        return Err(TraceError::validation(format!(
            "{field}: at most {} elements, got {}",
            limits.max_array_len,
            array.len()
        )));
    }
    check_values(field, array)
}

fn check_non_negative(field: &str, values: &[i64]) -> TraceResult<()> {
    if let Some(i) = values.iter().position(|&v| v < 0) {
        return Err(TraceError::validation(format!(
            "{field}[{i}]: must be >= 0, got {}",
            values[i]
        )));
    }
    Ok(())
}

fn check_activities(activities: &[Activity], limits: &TraceLimits) -> TraceResult<()> {
    if activities.is_empty() {
        return Err(TraceError::validation("activities: must not be empty"));
    }
    if activities.len() > limits.max_array_len {
        return Err(TraceError::validation(format!(
            "activities: at most {} activities, got {}",
            limits.max_array_len,
            activities.len()
        )));
    }
    for (i, a) in activities.iter().enumerate() {
        if a.name.trim().is_empty() {
            return Err(TraceError::validation(format!(
                "activities[{i}]: name must not be empty"
            )));
        }
        check_magnitude(&format!("activities[{i}].start"), a.start)?;
        check_magnitude(&format!("activities[{i}].finish"), a.finish)?;
        if a.finish < a.start {
            return Err(TraceError::validation(format!(
                "activities[{i}]: finish {} is before start {}",
                a.finish, a.start
            )));
        }
    }
    Ok(())
}

fn check_graph(
    nodes: &[String],
    edges: &[GraphEdge],
    start: &str,
    limits: &TraceLimits,
) -> TraceResult<()> {
    if nodes.is_empty() {
        return Err(TraceError::validation("nodes: must not be empty"));
    }
    if nodes.len() > limits.max_nodes {
        return Err(TraceError::validation(format!(
            "nodes: at most {} nodes, got {}",
            limits.max_nodes,
            nodes.len()
        )));
    }
    let mut seen = BTreeSet::new();
    for (i, id) in nodes.iter().enumerate() {
        if id.trim().is_empty() {
            return Err(TraceError::validation(format!("nodes[{i}]: id must not be empty")));
        }
        if !seen.insert(id.as_str()) {
            return Err(TraceError::validation(format!("nodes[{i}]: duplicate node id '{id}'")));
        }
    }
    for (i, e) in edges.iter().enumerate() {
        for end in [&e.from, &e.to] {
            if !seen.contains(end.as_str()) {
                return Err(TraceError::validation(format!(
                    "edges[{i}]: unknown node '{end}'"
                )));
            }
        }
    }
    if !seen.contains(start) {
        return Err(TraceError::validation(format!("start: unknown node '{start}'")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/input.rs"]
mod tests;
