use crate::trace::builder::TraceBuilder;
use crate::trace::snapshot::{AlgorithmState, QueensBoard, SearchSnapshot};
use crate::trace::step::StepSequence;
use crate::trace::tags::{SearchAction, SearchTags, SemanticTags};

struct Solver {
    board: QueensBoard,
    out: TraceBuilder,
}

impl Solver {
    fn push(&mut self, description: String, tags: SearchTags) {
        self.out.push(
            description,
            AlgorithmState::Search(SearchSnapshot::Queens(self.board.clone())),
            SemanticTags::Search(tags),
        );
    }

    fn is_safe(&self, row: usize, col: usize) -> bool {
        self.board.placements[..row]
            .iter()
            .enumerate()
            .all(|(r, placed)| match *placed {
                Some(c) => c != col && c.abs_diff(col) != row - r,
                None => true,
            })
    }

    fn place(&mut self, row: usize) {
        let n = self.board.size;
        if row == n {
            let solution: Vec<usize> = self.board.placements.iter().flatten().copied().collect();
            self.board.solutions.push(solution);
            let k = self.board.solutions.len();
            self.push(
                format!("Found solution {k}!"),
                SearchTags {
                    solution_number: Some(k),
                    ..SearchTags::new(SearchAction::Solution)
                },
            );
            return;
        }

        for col in 0..n {
            if !self.is_safe(row, col) {
                continue;
            }
            let at = SearchTags {
                depth: Some(row),
                choice: Some(col),
                ..SearchTags::new(SearchAction::Try)
            };

            self.board.placements[row] = Some(col);
            self.push(format!("Placing queen at row {row}, column {col}"), at.clone());

            self.place(row + 1);

            self.board.placements[row] = None;
            self.push(
                format!("Backtracking from row {row}, column {col}"),
                SearchTags {
                    action: SearchAction::Backtrack,
                    ..at
                },
            );
        }
    }
}

/// Row-by-row N-Queens search, columns scanned left to right.
#[tracing::instrument]
pub fn trace(n: usize) -> StepSequence {
    let mut s = Solver {
        board: QueensBoard {
            size: n,
            placements: vec![None; n],
            solutions: Vec::new(),
        },
        out: TraceBuilder::new(),
    };
    s.push(
        "Starting N-Queens solver...".to_string(),
        SearchTags::new(SearchAction::Start),
    );
    s.place(0);
    let found = s.board.solutions.len();
    s.push(
        format!("Completed! Found {found} solutions."),
        SearchTags::new(SearchAction::Complete),
    );
    s.out.finish()
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/backtracking/n_queens.rs"]
mod tests;
