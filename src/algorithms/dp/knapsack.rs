use crate::trace::builder::TraceBuilder;
use crate::trace::snapshot::{AlgorithmState, DpTableSnapshot, KnapsackItem};
use crate::trace::step::StepSequence;
use crate::trace::tags::{CellDecision, DpPhase, DpTags, SemanticTags};

struct Table<'a> {
    items: &'a [KnapsackItem],
    capacity: usize,
    dp: Vec<Vec<i64>>,
    best: i64,
    selected: Vec<KnapsackItem>,
    out: TraceBuilder,
}

impl Table<'_> {
    fn push(&mut self, description: String, tags: DpTags) {
        let snapshot = DpTableSnapshot {
            table: self.dp.clone(),
            items: self.items.to_vec(),
            capacity: self.capacity,
            active_cell: tags.cell,
            best_value: self.best,
            selected: self.selected.clone(),
        };
        self.out.push(
            description,
            AlgorithmState::DpTable(snapshot),
            SemanticTags::DpTable(tags),
        );
    }
}

/// Weight as a column offset; negative weights never fit.
fn weight_of(item: &KnapsackItem) -> Option<usize> {
    usize::try_from(item.weight).ok()
}

/// 0/1 knapsack: fill `dp[i][w]` row by row, then walk back from `(n, capacity)`.
///
/// On equal include/exclude values the item is excluded, which keeps the reconstructed
/// selection minimal and the table reproducible.
#[tracing::instrument(skip(items), fields(items = items.len()))]
pub fn trace(items: &[KnapsackItem], capacity: usize) -> StepSequence {
    let n = items.len();
    let mut t = Table {
        items,
        capacity,
        dp: vec![vec![0; capacity + 1]; n + 1],
        best: 0,
        selected: Vec::new(),
        out: TraceBuilder::new(),
    };

    t.push(
        format!(
            "Initializing DP table for {n} items and capacity {capacity}. \
             dp[i][w] = max value using first i items with capacity w."
        ),
        DpTags::new(DpPhase::Init),
    );

    for i in 1..=n {
        let item = items[i - 1];
        for w in 0..=capacity {
            let focus = DpTags {
                cell: Some((i, w)),
                item_index: Some(i - 1),
                ..DpTags::new(DpPhase::FillingTable)
            };
            t.push(
                format!(
                    "Considering item {i} ({}w, {}v) for capacity {w}.",
                    item.weight, item.value
                ),
                focus.clone(),
            );

            let without = t.dp[i - 1][w];
            let (value, decision, description) = match weight_of(&item).filter(|&wt| wt <= w) {
                Some(wt) => {
                    let with = item.value + t.dp[i - 1][w - wt];
                    if with > without {
                        (
                            with,
                            CellDecision::Include,
                            format!(
                                "Including item {i} is better ({with} > {without}). dp[{i}][{w}] = {with}."
                            ),
                        )
                    } else {
                        (
                            without,
                            CellDecision::Exclude,
                            format!(
                                "Excluding item {i} is better or equal ({without} >= {with}). \
                                 dp[{i}][{w}] = {without}."
                            ),
                        )
                    }
                }
                None => (
                    without,
                    CellDecision::DoesNotFit,
                    format!(
                        "Item {i} ({}w) cannot fit in capacity {w}. dp[{i}][{w}] = dp[{}][{w}] = {without}.",
                        item.weight,
                        i - 1
                    ),
                ),
            };

            t.dp[i][w] = value;
            t.best = t.best.max(value);
            t.push(
                description,
                DpTags {
                    decision: Some(decision),
                    included: Some(decision == CellDecision::Include),
                    ..focus
                },
            );
        }
    }

    let max_value = t.dp[n][capacity];
    t.best = max_value;
    t.push(
        format!("DP table filled. Maximum value is {max_value}. Now backtracking to find items."),
        DpTags::new(DpPhase::Backtracking),
    );

    let mut remaining = capacity;
    let mut i = n;
    while i > 0 && remaining > 0 {
        let here = t.dp[i][remaining];
        let above = t.dp[i - 1][remaining];
        let focus = DpTags {
            cell: Some((i, remaining)),
            item_index: Some(i - 1),
            remaining_capacity: Some(remaining),
            ..DpTags::new(DpPhase::Backtracking)
        };
        t.push(
            format!(
                "Backtracking: Checking item {i}. Current max value for capacity {remaining} is {here}. \
                 Value without item {i} is {above}."
            ),
            focus.clone(),
        );

        if here != above {
            let item = items[i - 1];
            t.selected.insert(0, item);
            remaining = remaining.saturating_sub(weight_of(&item).unwrap_or(0));
            t.push(
                format!(
                    "Item {i} ({}w, {}v) was included. Remaining capacity: {remaining}.",
                    item.weight, item.value
                ),
                DpTags {
                    included: Some(true),
                    remaining_capacity: Some(remaining),
                    ..focus
                },
            );
        } else {
            t.push(
                format!("Item {i} was not included."),
                DpTags {
                    included: Some(false),
                    ..focus
                },
            );
        }
        i -= 1;
    }

    let chosen = t
        .selected
        .iter()
        .map(|it| format!("(w:{}, v:{})", it.weight, it.value))
        .collect::<Vec<_>>()
        .join(", ");
    t.push(
        format!("0/1 Knapsack complete. Max value: {max_value}. Selected items: {chosen}."),
        DpTags::new(DpPhase::Complete),
    );
    t.out.finish()
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/dp/knapsack.rs"]
mod tests;
