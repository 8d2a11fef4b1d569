use std::collections::BTreeMap;

use crate::trace::builder::TraceBuilder;
use crate::trace::snapshot::{AlgorithmState, MemoSnapshot};
use crate::trace::step::StepSequence;
use crate::trace::tags::{MemoEvent, MemoTags, SemanticTags};

struct Memo {
    target: u32,
    cache: BTreeMap<u32, u64>,
    stack: Vec<u32>,
    out: TraceBuilder,
}

impl Memo {
    fn push(&mut self, description: String, event: MemoEvent, call: u32, returned: Option<u64>) {
        let snapshot = MemoSnapshot {
            target: self.target,
            cache: self.cache.clone(),
            call_stack: self.stack.clone(),
        };
        let tags = MemoTags {
            event,
            call,
            depth: self.stack.len(),
            returned,
        };
        self.out.push(
            description,
            AlgorithmState::Memo(snapshot),
            SemanticTags::Memo(tags),
        );
    }

    fn fib(&mut self, n: u32) -> u64 {
        self.stack.push(n);
        let depth = self.stack.len();
        self.push(
            format!("Calling fib({n}). Current depth: {depth}."),
            MemoEvent::Call,
            n,
            None,
        );

        if let Some(&hit) = self.cache.get(&n) {
            self.push(
                format!("fib({n}): Value {hit} found in cache (memoization)."),
                MemoEvent::CacheHit,
                n,
                Some(hit),
            );
            self.stack.pop();
            return hit;
        }

        if n <= 1 {
            let v = u64::from(n);
            self.push(
                format!("fib({n}): Base case, returns {n}."),
                MemoEvent::BaseCase,
                n,
                Some(v),
            );
            self.stack.pop();
            return v;
        }

        self.push(
            format!(
                "fib({n}): Calculating fib({}) + fib({}).",
                n - 1,
                n - 2
            ),
            MemoEvent::Split,
            n,
            None,
        );

        let first = self.fib(n - 1);
        self.push(
            format!(
                "fib({n}): fib({}) returned {first}. Now calculating fib({}).",
                n - 1,
                n - 2
            ),
            MemoEvent::FirstReturned,
            n,
            Some(first),
        );

        let second = self.fib(n - 2);
        let result = first.saturating_add(second);
        self.push(
            format!(
                "fib({n}): fib({}) returned {second}. Result for fib({n}) is {result}.",
                n - 2
            ),
            MemoEvent::SecondReturned,
            n,
            Some(second),
        );

        self.cache.insert(n, result);
        self.push(
            format!("fib({n}): Storing result {result} in cache. Returning {result}."),
            MemoEvent::Store,
            n,
            Some(result),
        );
        self.stack.pop();
        result
    }
}

/// Top-down memoized Fibonacci with the live call stack in every snapshot.
#[tracing::instrument]
pub fn trace(n: u32) -> StepSequence {
    let mut m = Memo {
        target: n,
        cache: BTreeMap::new(),
        stack: Vec::new(),
        out: TraceBuilder::new(),
    };
    m.push(
        format!("Starting Fibonacci({n}) with memoization."),
        MemoEvent::Start,
        n,
        None,
    );
    let result = m.fib(n);
    m.push(
        format!("Fibonacci({n}) calculation complete. Final result: {result}."),
        MemoEvent::Complete,
        n,
        Some(result),
    );
    m.out.finish()
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/dp/fibonacci.rs"]
mod tests;
