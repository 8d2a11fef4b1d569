use crate::algorithms::sorting::join_values;
use crate::trace::builder::TraceBuilder;
use crate::trace::snapshot::{AlgorithmState, SearchSnapshot, SubsetState};
use crate::trace::step::StepSequence;
use crate::trace::tags::{SearchAction, SearchTags, SemanticTags};

struct Solver {
    state: SubsetState,
    out: TraceBuilder,
}

impl Solver {
    fn push(&mut self, description: String, tags: SearchTags) {
        self.out.push(
            description,
            AlgorithmState::Search(SearchSnapshot::Subset(self.state.clone())),
            SemanticTags::Search(tags),
        );
    }

    fn chosen_values(&self) -> Vec<i64> {
        self.state
            .chosen
            .iter()
            .map(|&i| self.state.numbers[i])
            .collect()
    }

    fn search(&mut self, index: usize) {
        if self.state.sum == self.state.target {
            let found = self.chosen_values();
            let description = format!(
                "Found subset: [{}] = {}",
                join_values(found.iter().copied()),
                self.state.sum
            );
            self.state.solutions.push(found);
            let k = self.state.solutions.len();
            self.push(
                description,
                SearchTags {
                    solution_number: Some(k),
                    ..SearchTags::new(SearchAction::Solution)
                },
            );
            return;
        }
        if index >= self.state.numbers.len() || self.state.sum > self.state.target {
            return;
        }

        let x = self.state.numbers[index];
        let at = SearchTags {
            depth: Some(index),
            choice: Some(index),
            ..SearchTags::new(SearchAction::Try)
        };

        self.state.chosen.push(index);
        self.state.sum += x;
        let description = format!(
            "Trying with {x}: [{}] = {}",
            join_values(self.chosen_values()),
            self.state.sum
        );
        self.push(description, at.clone());

        self.search(index + 1);

        self.state.chosen.pop();
        self.state.sum -= x;
        self.push(
            format!("Backtracking - removing {x}"),
            SearchTags {
                action: SearchAction::Backtrack,
                ..at
            },
        );

        self.search(index + 1);
    }
}

/// Subsets of `numbers` summing to `target`; each candidate is included before it is skipped.
///
/// Branches stop once the running sum passes the target, so candidates are expected to be
/// positive.
#[tracing::instrument(skip(numbers), fields(len = numbers.len()))]
pub fn trace(numbers: &[i64], target: i64) -> StepSequence {
    let mut s = Solver {
        state: SubsetState {
            numbers: numbers.to_vec(),
            target,
            chosen: Vec::new(),
            sum: 0,
            solutions: Vec::new(),
        },
        out: TraceBuilder::new(),
    };
    s.push(
        format!("Finding subsets that sum to {target}..."),
        SearchTags::new(SearchAction::Start),
    );
    s.search(0);
    let found = s.state.solutions.len();
    s.push(
        format!("Completed! Found {found} subsets."),
        SearchTags::new(SearchAction::Complete),
    );
    s.out.finish()
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/backtracking/subset_sum.rs"]
mod tests;
