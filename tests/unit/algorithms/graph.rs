use super::*;

fn edge(from: &str, to: &str) -> GraphEdge {
    GraphEdge {
        from: from.to_string(),
        to: to.to_string(),
    }
}

fn sample(undirected: bool) -> Graph {
    let nodes = ["A", "B", "C", "D"].map(String::from).to_vec();
    let edges = vec![edge("A", "B"), edge("A", "C"), edge("B", "D"), edge("C", "D")];
    Graph::new(nodes, edges, undirected)
}

fn visit_order(seq: &StepSequence) -> Vec<String> {
    seq.iter()
        .filter(|s| s.tags.as_graph().unwrap().action == GraphAction::Visit)
        .filter_map(|s| s.tags.as_graph().unwrap().current.clone())
        .collect()
}

#[test]
fn bfs_visits_level_by_level() {
    let seq = bfs(&sample(false), "A");
    assert_eq!(visit_order(&seq), vec!["A", "B", "C", "D"]);

    let last = seq.last().unwrap();
    assert_eq!(last.description, "BFS complete. Queue is empty.");
    let snap = last.snapshot.as_graph().unwrap();
    assert!(snap.frontier.is_empty());
    assert_eq!(snap.frontier_kind, FrontierKind::Queue);
    assert_eq!(snap.parents.get("D"), Some(&Some("B".to_string())));
    assert_eq!(snap.parents.get("A"), Some(&None));
}

#[test]
fn bfs_skips_already_queued_neighbor() {
    let seq = bfs(&sample(false), "A");
    let skip = seq
        .iter()
        .find(|s| s.tags.as_graph().unwrap().action == GraphAction::Skip)
        .unwrap();
    assert_eq!(skip.description, "Neighbor D already visited. Skipping.");
    assert_eq!(skip.tags.as_graph().unwrap().current.as_deref(), Some("C"));
}

#[test]
fn dfs_goes_deep_before_wide() {
    let seq = dfs(&sample(false), "A");
    assert_eq!(visit_order(&seq), vec!["A", "B", "D", "C"]);

    let deepest = seq
        .iter()
        .find(|s| s.description.starts_with("Visiting node D."))
        .unwrap();
    assert_eq!(
        deepest.snapshot.as_graph().unwrap().frontier,
        vec!["A", "B", "D"]
    );

    let back = seq
        .iter()
        .find(|s| s.tags.as_graph().unwrap().action == GraphAction::Return)
        .unwrap();
    assert!(back.tags.as_graph().unwrap().backtracking);
    assert_eq!(seq.last().unwrap().description, "DFS complete.");
}

#[test]
fn undirected_edges_are_followed_both_ways() {
    let graph = sample(true);
    assert_eq!(graph.neighbors("D"), vec!["B", "C"]);
    let seq = bfs(&graph, "D");
    assert_eq!(visit_order(&seq), vec!["D", "B", "C", "A"]);
}

#[test]
fn unknown_start_produces_start_and_complete_only() {
    let seq = dfs(&sample(false), "Z");
    assert_eq!(seq.len(), 2);
    assert_eq!(trace(GraphAlgorithm::Bfs, &sample(false), "Z").len(), 2);
}

#[test]
fn algorithm_names_parse() {
    assert_eq!("BFS".parse::<GraphAlgorithm>().unwrap(), GraphAlgorithm::Bfs);
    assert_eq!("dfs".parse::<GraphAlgorithm>().unwrap().name(), "dfs");
    assert!("dijkstra".parse::<GraphAlgorithm>().is_err());
}
