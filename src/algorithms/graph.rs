//! Breadth- and depth-first traversal traces over a small labelled graph.
//!
//! Neighbours are visited in edge declaration order, so traces are fully determined by the
//! input lists.

use std::collections::BTreeMap;

use crate::trace::builder::TraceBuilder;
use crate::trace::snapshot::{AlgorithmState, FrontierKind, GraphEdge, GraphSnapshot};
use crate::trace::step::StepSequence;
use crate::trace::tags::{GraphAction, GraphTags, SemanticTags};

/// Traversal algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphAlgorithm {
    /// Breadth-first search with a FIFO queue.
    Bfs,
    /// Depth-first search, recursive.
    Dfs,
}

impl GraphAlgorithm {
    /// Lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }
}

impl std::str::FromStr for GraphAlgorithm {
    type Err = crate::TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            _ => Err(crate::TraceError::validation(format!(
                "unknown graph algorithm '{s}'"
            ))),
        }
    }
}

/// Node list plus edge list; node ids are arbitrary labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<String>,
    edges: Vec<GraphEdge>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Build adjacency lists. With `undirected`, every edge is also followed backwards.
    ///
    /// Edges naming unknown nodes are kept for display but never followed.
    pub fn new(nodes: Vec<String>, edges: Vec<GraphEdge>, undirected: bool) -> Self {
        let mut adjacency = vec![Vec::new(); nodes.len()];
        let index = |id: &str| nodes.iter().position(|n| n == id);
        for e in &edges {
            let (Some(from), Some(to)) = (index(&e.from), index(&e.to)) else {
                continue;
            };
            if !adjacency[from].contains(&to) {
                adjacency[from].push(to);
            }
            if undirected && !adjacency[to].contains(&from) {
                adjacency[to].push(from);
            }
        }
        Self {
            nodes,
            edges,
            adjacency,
        }
    }

    /// Node ids in declaration order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Neighbour ids of `id`, in traversal order.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.index_of(id)
            .map(|i| {
                self.adjacency[i]
                    .iter()
                    .map(|&n| self.nodes[n].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n == id)
    }
}

struct Walk<'a> {
    graph: &'a Graph,
    kind: FrontierKind,
    frontier: Vec<usize>,
    visited: Vec<usize>,
    parents: Vec<Option<usize>>,
    out: TraceBuilder,
}

impl<'a> Walk<'a> {
    fn new(graph: &'a Graph, kind: FrontierKind) -> Self {
        Self {
            graph,
            kind,
            frontier: Vec::new(),
            visited: Vec::new(),
            parents: vec![None; graph.nodes.len()],
            out: TraceBuilder::new(),
        }
    }

    fn id(&self, i: usize) -> String {
        self.graph.nodes[i].clone()
    }

    fn is_visited(&self, i: usize) -> bool {
        self.visited.contains(&i)
    }

    fn push(&mut self, description: String, tags: GraphTags) {
        let nodes = &self.graph.nodes;
        let snapshot = GraphSnapshot {
            nodes: nodes.clone(),
            edges: self.graph.edges.clone(),
            frontier: self.frontier.iter().map(|&i| nodes[i].clone()).collect(),
            frontier_kind: self.kind,
            visited: self.visited.iter().map(|&i| nodes[i].clone()).collect(),
            parents: nodes
                .iter()
                .zip(&self.parents)
                .map(|(n, p)| (n.clone(), p.map(|p| nodes[p].clone())))
                .collect::<BTreeMap<_, _>>(),
        };
        self.out.push(
            description,
            AlgorithmState::Graph(snapshot),
            SemanticTags::Graph(tags),
        );
    }

    fn tags(&self, action: GraphAction, current: Option<usize>, neighbor: Option<usize>) -> GraphTags {
        GraphTags {
            current: current.map(|i| self.id(i)),
            neighbor: neighbor.map(|i| self.id(i)),
            ..GraphTags::new(action)
        }
    }

    fn dfs(&mut self, u: usize, parent: Option<usize>) {
        let uid = self.id(u);
        self.visited.push(u);
        self.frontier.push(u);
        self.parents[u] = parent;
        let t = self.tags(GraphAction::Visit, Some(u), None);
        self.push(
            format!("Visiting node {uid}. Added to visited set and recursion stack."),
            t,
        );

        let graph = self.graph;
        for &v in &graph.adjacency[u] {
            let vid = self.id(v);
            let t = self.tags(GraphAction::CheckNeighbor, Some(u), Some(v));
            self.push(format!("Checking neighbor {vid} of node {uid}."), t);

            if self.is_visited(v) {
                let t = self.tags(GraphAction::Skip, Some(u), Some(v));
                self.push(format!("Neighbor {vid} already visited. Skipping."), t);
                continue;
            }

            let t = self.tags(GraphAction::Descend, Some(u), Some(v));
            self.push(
                format!("Neighbor {vid} not visited. Recursively calling DFS on {vid}."),
                t,
            );
            self.dfs(v, Some(u));
            let t = GraphTags {
                backtracking: true,
                ..self.tags(GraphAction::Return, Some(u), Some(v))
            };
            self.push(format!("Returned from DFS({vid}). Backtracking to {uid}."), t);
        }

        self.frontier.pop();
        let t = GraphTags {
            backtracking: true,
            ..self.tags(GraphAction::Finish, Some(u), None)
        };
        self.push(
            format!("Finished exploring neighbors of {uid}. Popping {uid} from recursion stack."),
            t,
        );
    }
}

/// Breadth-first traversal from `start`. Nodes are marked visited when enqueued.
#[tracing::instrument(skip(graph), fields(nodes = graph.nodes.len()))]
pub fn bfs(graph: &Graph, start: &str) -> StepSequence {
    let mut w = Walk::new(graph, FrontierKind::Queue);
    w.push(
        format!("Starting BFS from node {start}. Initializing queue and visited set."),
        GraphTags::new(GraphAction::Start),
    );

    if let Some(s) = graph.index_of(start) {
        w.frontier.push(s);
        w.visited.push(s);
        let t = w.tags(GraphAction::Discover, None, Some(s));
        w.push(
            format!("Added start node {start} to queue. Marked as visited."),
            t,
        );

        while !w.frontier.is_empty() {
            let u = w.frontier.remove(0);
            let uid = w.id(u);
            let t = w.tags(GraphAction::Visit, Some(u), None);
            w.push(format!("Dequeued node {uid}. Processing its neighbors."), t);

            for &v in &graph.adjacency[u] {
                let vid = w.id(v);
                let t = w.tags(GraphAction::CheckNeighbor, Some(u), Some(v));
                w.push(format!("Checking neighbor {vid} of node {uid}."), t);

                if w.is_visited(v) {
                    let t = w.tags(GraphAction::Skip, Some(u), Some(v));
                    w.push(format!("Neighbor {vid} already visited. Skipping."), t);
                } else {
                    w.visited.push(v);
                    w.frontier.push(v);
                    w.parents[v] = Some(u);
                    let t = w.tags(GraphAction::Discover, Some(u), Some(v));
                    w.push(
                        format!(
                            "Neighbor {vid} not visited. Added to queue and marked as visited. \
                             Path to {vid} via {uid}."
                        ),
                        t,
                    );
                }
            }

            let t = w.tags(GraphAction::Finish, Some(u), None);
            w.push(format!("Finished processing neighbors of node {uid}."), t);
        }
    }

    w.push(
        "BFS complete. Queue is empty.".to_string(),
        GraphTags::new(GraphAction::Complete),
    );
    w.out.finish()
}

/// Depth-first traversal from `start`; `frontier` in each snapshot is the recursion stack.
#[tracing::instrument(skip(graph), fields(nodes = graph.nodes.len()))]
pub fn dfs(graph: &Graph, start: &str) -> StepSequence {
    let mut w = Walk::new(graph, FrontierKind::Stack);
    w.push(
        format!("Starting DFS from node {start}. Initializing visited set."),
        GraphTags::new(GraphAction::Start),
    );
    if let Some(s) = graph.index_of(start) {
        w.dfs(s, None);
    }
    w.push("DFS complete.".to_string(), GraphTags::new(GraphAction::Complete));
    w.out.finish()
}

/// Run the selected traversal.
pub fn trace(algorithm: GraphAlgorithm, graph: &Graph, start: &str) -> StepSequence {
    match algorithm {
        GraphAlgorithm::Bfs => bfs(graph, start),
        GraphAlgorithm::Dfs => dfs(graph, start),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/graph.rs"]
mod tests;
