use super::*;

fn events(seq: &StepSequence) -> Vec<MemoEvent> {
    seq.iter().map(|s| s.tags.as_memo().unwrap().event).collect()
}

#[test]
fn fib_three_walks_every_call() {
    use MemoEvent::*;
    let seq = trace(3);
    assert_eq!(
        events(&seq),
        vec![
            Start, Call, Split, Call, Split, Call, BaseCase, FirstReturned, Call, BaseCase,
            SecondReturned, Store, FirstReturned, Call, BaseCase, SecondReturned, Store, Complete,
        ]
    );
    let last = seq.last().unwrap();
    assert_eq!(last.description, "Fibonacci(3) calculation complete. Final result: 2.");
    assert_eq!(last.tags.as_memo().unwrap().returned, Some(2));
}

#[test]
fn repeated_subproblem_hits_cache() {
    let seq = trace(4);
    let hit = seq
        .iter()
        .find(|s| s.tags.as_memo().unwrap().event == MemoEvent::CacheHit)
        .unwrap();
    assert_eq!(hit.description, "fib(2): Value 1 found in cache (memoization).");
    assert_eq!(hit.snapshot.as_memo().unwrap().call_stack, vec![4, 2]);
}

#[test]
fn call_stack_depth_matches_tags() {
    let seq = trace(5);
    for step in seq.iter() {
        assert_eq!(
            step.snapshot.as_memo().unwrap().call_stack.len(),
            step.tags.as_memo().unwrap().depth
        );
    }
    let cache = &seq.last().unwrap().snapshot.as_memo().unwrap().cache;
    assert_eq!(cache.get(&5), Some(&5));
    assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
}

#[test]
fn base_inputs_are_short() {
    assert_eq!(trace(0).len(), 4);
    assert_eq!(
        trace(1).last().unwrap().tags.as_memo().unwrap().returned,
        Some(1)
    );
}
