use super::*;

fn limits() -> TraceLimits {
    TraceLimits::default()
}

fn rejects(input: AlgorithmInput, needle: &str) {
    let err = generate(&input, &limits()).unwrap_err();
    assert!(matches!(err, TraceError::Validation(_)), "{err}");
    assert!(err.to_string().contains(needle), "{err}");
}

#[test]
fn json_input_drives_the_matching_generator() {
    let input = AlgorithmInput::from_json(
        r#"{"kind":"sort","algorithm":"bubble","array":[5,2,8,1]}"#,
    )
    .unwrap();
    assert_eq!(input.kind(), "sort");
    let seq = generate(&input, &limits()).unwrap();
    let last = seq.last().unwrap().snapshot.as_array().unwrap();
    assert_eq!(last.values(), vec![1, 2, 5, 8]);
}

#[test]
fn optional_fields_default() {
    let input = AlgorithmInput::from_json(r#"{"kind":"bst_insert","value":4}"#).unwrap();
    assert_eq!(
        input,
        AlgorithmInput::BstInsert {
            existing: vec![],
            value: 4
        }
    );
    let graph = AlgorithmInput::from_json(
        r#"{"kind":"graph","algorithm":"dfs","nodes":["A"],"edges":[],"start":"A"}"#,
    )
    .unwrap();
    assert!(matches!(graph, AlgorithmInput::Graph { undirected: false, .. }));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = AlgorithmInput::from_json(r#"{"kind":"teleport"}"#).unwrap_err();
    assert!(matches!(err, TraceError::Serde(_)));
    assert!(err.is_input_error());
}

#[test]
fn empty_and_oversized_arrays_are_rejected() {
    rejects(
        AlgorithmInput::Sort {
            algorithm: SortAlgorithm::Quick,
            array: vec![],
        },
        "array: must not be empty",
    );
    rejects(
        AlgorithmInput::LinearSearch {
            array: vec![0; 65],
            target: 0,
        },
        "at most 64 elements",
    );
}

#[test]
fn binary_search_requires_sorted_input() {
    rejects(
        AlgorithmInput::BinarySearch {
            array: vec![1, 5, 3],
            target: 3,
        },
        "array[1] = 5 > array[2] = 3",
    );
    let ok = AlgorithmInput::BinarySearch {
        array: vec![1, 1, 3],
        target: 3,
    };
    assert!(generate(&ok, &limits()).is_ok());
}

#[test]
fn knapsack_bounds() {
    rejects(
        AlgorithmInput::Knapsack {
            items: vec![],
            capacity: -1,
        },
        "capacity: must be >= 0",
    );
    rejects(
        AlgorithmInput::Knapsack {
            items: vec![KnapsackItem {
                weight: -2,
                value: 1,
            }],
            capacity: 5,
        },
        "items[0]",
    );
    rejects(
        AlgorithmInput::Knapsack {
            items: vec![],
            capacity: 101,
        },
        "capacity: at most 100",
    );
}

#[test]
fn search_problem_bounds() {
    rejects(AlgorithmInput::NQueens { n: 0 }, "board size");
    rejects(AlgorithmInput::NQueens { n: 9 }, "board size");
    rejects(AlgorithmInput::Fibonacci { n: 31 }, "n: at most 30");
    rejects(
        AlgorithmInput::SubsetSum {
            numbers: vec![1, 0, 3],
            target: 4,
        },
        "numbers[1]: candidates must be > 0",
    );
    rejects(
        AlgorithmInput::SubsetSum {
            numbers: vec![1],
            target: -1,
        },
        "target: must be >= 0",
    );
}

#[test]
fn graph_references_are_checked() {
    let graph = |nodes: &[&str], edges: &[(&str, &str)], start: &str| AlgorithmInput::Graph {
        algorithm: GraphAlgorithm::Bfs,
        nodes: nodes.iter().map(|s| s.to_string()).collect(),
        edges: edges
            .iter()
            .map(|(a, b)| GraphEdge {
                from: a.to_string(),
                to: b.to_string(),
            })
            .collect(),
        start: start.to_string(),
        undirected: false,
    };
    rejects(graph(&[], &[], "A"), "nodes: must not be empty");
    rejects(graph(&["A", "A"], &[], "A"), "duplicate node id 'A'");
    rejects(graph(&["A"], &[("A", "B")], "A"), "edges[0]: unknown node 'B'");
    rejects(graph(&["A"], &[], "Q"), "start: unknown node 'Q'");
    assert!(generate(&graph(&["A", "B"], &[("A", "B")], "A"), &limits()).is_ok());
}

#[test]
fn magnitudes_are_capped() {
    rejects(
        AlgorithmInput::Sort {
            algorithm: SortAlgorithm::Merge,
            array: vec![1, MAX_MAGNITUDE + 1],
        },
        "array[1]: magnitude",
    );
}

#[test]
fn reset_policy_by_family() {
    assert_eq!(
        AlgorithmInput::NQueens { n: 4 }.reset_policy(),
        ResetPolicy::Clear
    );
    assert_eq!(
        AlgorithmInput::Fibonacci { n: 4 }.reset_policy(),
        ResetPolicy::Regenerate
    );
}

#[test]
fn number_lists_parse_or_name_the_bad_token() {
    assert_eq!(parse_number_list("5, 2,8  1").unwrap(), vec![5, 2, 8, 1]);
    assert_eq!(parse_number_list("-3,4").unwrap(), vec![-3, 4]);
    assert!(parse_number_list("  ").unwrap().is_empty());
    let err = parse_number_list("5, 2, x").unwrap_err();
    assert_eq!(err.to_string(), "validation error: 'x' is not a valid integer");
}

#[test]
fn every_kind_generates_from_valid_input() {
    let inputs = vec![
        AlgorithmInput::BstTraversal {
            values: vec![5, 3, 8, 1],
            order: TraversalOrder::Inorder,
        },
        AlgorithmInput::BstInsert {
            existing: vec![5, 3],
            value: 4,
        },
        AlgorithmInput::Fibonacci { n: 5 },
        AlgorithmInput::NQueens { n: 4 },
        AlgorithmInput::SubsetSum {
            numbers: vec![1, 2, 3, 4],
            target: 5,
        },
        AlgorithmInput::Knapsack {
            items: vec![KnapsackItem {
                weight: 2,
                value: 3,
            }],
            capacity: 5,
        },
    ];
    for input in inputs {
        let seq = generate(&input, &limits()).unwrap();
        assert!(seq.len() >= 2, "{}", input.kind());
    }
}

#[test]
fn distribution_sorts_need_non_negative_values() {
    rejects(
        AlgorithmInput::CountingSort {
            array: vec![3, -1, 2],
        },
        "array[1]: must be >= 0, got -1",
    );
    rejects(
        AlgorithmInput::RadixSort { array: vec![-5] },
        "array[0]: must be >= 0",
    );
    rejects(
        AlgorithmInput::CountingSort {
            array: vec![1, 100],
        },
        "array[1]: counting sort values must be <= 99, got 100",
    );

    let radix = AlgorithmInput::from_json(r#"{"kind":"radix_sort","array":[802, 24, 2, 66]}"#)
        .unwrap();
    assert_eq!(radix.kind(), "radix_sort");
    assert_eq!(radix.reset_policy(), ResetPolicy::Regenerate);
    let seq = generate(&radix, &limits()).unwrap();
    assert_eq!(
        seq.last().unwrap().snapshot.as_array().unwrap().values(),
        vec![2, 24, 66, 802]
    );

    let counting = AlgorithmInput::CountingSort {
        array: vec![4, 1, 3],
    };
    assert_eq!(counting.kind(), "counting_sort");
    assert!(generate(&counting, &limits()).is_ok());
}

#[test]
fn activity_selection_checks_intervals() {
    let input = AlgorithmInput::from_json(
        r#"{"kind":"activity_selection","activities":[
            {"name":"A","start":1,"finish":4},
            {"name":"B","start":4,"finish":6}
        ]}"#,
    )
    .unwrap();
    assert_eq!(input.kind(), "activity_selection");
    let seq = generate(&input, &limits()).unwrap();
    assert_eq!(
        seq.last().unwrap().snapshot.as_schedule().unwrap().selected,
        vec![0, 1]
    );

    rejects(
        AlgorithmInput::ActivitySelection { activities: vec![] },
        "activities: must not be empty",
    );
    rejects(
        AlgorithmInput::ActivitySelection {
            activities: vec![Activity {
                name: "late".into(),
                start: 5,
                finish: 2,
            }],
        },
        "activities[0]: finish 2 is before start 5",
    );
    rejects(
        AlgorithmInput::ActivitySelection {
            activities: vec![Activity {
                name: " ".into(),
                start: 0,
                finish: 1,
            }],
        },
        "activities[0]: name must not be empty",
    );
}
