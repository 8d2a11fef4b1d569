//! Plain-text rendering of a single [`Step`].
//!
//! Every view is computed from the step alone; nothing here looks at neighbouring steps.

use std::fmt;
use std::io::Write;

use crate::playback::observer::StepObserver;
use crate::trace::snapshot::{
    AlgorithmState, ArrayElement, ArraySnapshot, Distribution, DpTableSnapshot, FrontierKind,
    GraphSnapshot, MemoSnapshot, NodeHighlight, NodeId, QueensBoard, ScheduleSnapshot,
    SearchSnapshot, SubsetState, TreeSnapshot,
};
use crate::trace::step::Step;
use crate::trace::tags::{ArrayTags, ScheduleTags, SemanticTags};

/// Highest-priority role of one array position in a step.
///
/// When a position plays several roles, the one listed first wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ElementRole {
    /// Search target position.
    Found,
    /// Being swapped or just swapped.
    Swapping,
    /// Being compared.
    Comparing,
    /// Pivot or heapify root.
    Pivot,
    /// Held insertion key.
    Key,
    /// Current minimum or heapify largest.
    Extreme,
    /// Probed by a search or filled by selection.
    Current,
    /// Just written.
    Placed,
    /// Settled in final position.
    Sorted,
    /// Inside the focused range.
    InRange,
    /// No role.
    Plain,
}

impl ElementRole {
    /// Suffix marker used by the text view.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Found => "!",
            Self::Swapping => "~",
            Self::Comparing => "?",
            Self::Pivot => "p",
            Self::Key => "k",
            Self::Extreme => "m",
            Self::Current => "^",
            Self::Placed => "+",
            Self::Sorted => "#",
            Self::InRange | Self::Plain => "",
        }
    }
}

/// Role of every position of `snapshot` under `tags`.
pub fn array_roles(snapshot: &ArraySnapshot, tags: Option<&ArrayTags>) -> Vec<ElementRole> {
    let mut roles = vec![ElementRole::Plain; snapshot.elements.len()];
    for &i in &snapshot.sorted_indices {
        mark(&mut roles, i, ElementRole::Sorted);
    }
    let Some(t) = tags else {
        return roles;
    };
    if let Some([lo, hi]) = t.range {
        for i in lo..=hi {
            mark(&mut roles, i, ElementRole::InRange);
        }
    }
    let pairs = [t.comparing, t.swapping, t.swapped];
    let pair_roles = [
        ElementRole::Comparing,
        ElementRole::Swapping,
        ElementRole::Swapping,
    ];
    for (pair, role) in pairs.into_iter().zip(pair_roles) {
        for i in pair.into_iter().flatten() {
            mark(&mut roles, i, role);
        }
    }
    let singles = [
        (t.found_index, ElementRole::Found),
        (t.pivot_index, ElementRole::Pivot),
        (t.key_index, ElementRole::Key),
        (t.min_index, ElementRole::Extreme),
        (t.largest_index, ElementRole::Extreme),
        (t.current_index, ElementRole::Current),
        (t.mid, ElementRole::Current),
        (t.placed_index, ElementRole::Placed),
    ];
    for (i, role) in singles.into_iter().filter_map(|(i, r)| Some((i?, r))) {
        mark(&mut roles, i, role);
    }
    roles
}

fn mark(roles: &mut [ElementRole], i: usize, role: ElementRole) {
    if let Some(r) = roles.get_mut(i) {
        *r = (*r).min(role);
    }
}

/// Multi-line text view of `step`: the description, then a family-specific body.
pub fn render_step(step: &Step) -> String {
    StepView(step).to_string()
}

/// [`fmt::Display`] adapter behind [`render_step`].
#[derive(Clone, Copy, Debug)]
pub struct StepView<'a>(pub &'a Step);

impl fmt::Display for StepView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.0;
        writeln!(f, "{}", step.description)?;
        match &step.snapshot {
            AlgorithmState::Array(s) => write_array(f, s, step.tags.as_array()),
            AlgorithmState::Tree(s) => {
                write_tree(f, s)?;
                if let Some(t) = step.tags.as_tree().filter(|t| !t.path.is_empty()) {
                    writeln!(f, "path: {}", join(&t.path))?;
                }
                Ok(())
            }
            AlgorithmState::DpTable(s) => write_dp(f, s),
            AlgorithmState::Search(SearchSnapshot::Queens(b)) => write_queens(f, b),
            AlgorithmState::Search(SearchSnapshot::Subset(s)) => write_subset(f, s),
            AlgorithmState::Graph(s) => write_graph(f, s, &step.tags),
            AlgorithmState::Memo(s) => write_memo(f, s),
            AlgorithmState::Schedule(s) => write_schedule(f, s, step.tags.as_schedule()),
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

fn elements(items: &[ArrayElement]) -> String {
    join(&items.iter().map(|e| e.value).collect::<Vec<_>>())
}

fn write_array(
    f: &mut fmt::Formatter<'_>,
    s: &ArraySnapshot,
    tags: Option<&ArrayTags>,
) -> fmt::Result {
    let roles = array_roles(s, tags);
    let cells: Vec<String> = s
        .elements
        .iter()
        .zip(&roles)
        .map(|(e, r)| format!("{}{}", e.value, r.marker()))
        .collect();
    writeln!(f, "  {}", cells.join(" "))?;
    if let Some(scratch) = &s.scratch {
        writeln!(
            f,
            "  left {} right {} merged {}",
            elements(&scratch.left),
            elements(&scratch.right),
            elements(&scratch.merged)
        )?;
    }
    match &s.distribution {
        Some(Distribution::Counting(b)) => {
            let output: Vec<String> = b
                .output
                .iter()
                .map(|slot| slot.map_or_else(|| "_".to_string(), |e| e.value.to_string()))
                .collect();
            writeln!(f, "  count {}", join(&b.counts))?;
            writeln!(f, "  output [{}]", output.join(", "))?;
        }
        Some(Distribution::Radix(b)) => {
            writeln!(f, "  place {} count {}", b.digit_place, join(&b.counts))?;
            for (digit, bucket) in b.buckets.iter().enumerate() {
                if !bucket.is_empty() {
                    writeln!(f, "  bucket {digit} {}", elements(bucket))?;
                }
            }
        }
        None => {}
    }
    Ok(())
}

fn write_tree(f: &mut fmt::Formatter<'_>, s: &TreeSnapshot) -> fmt::Result {
    let Some(root) = s.root else {
        return writeln!(f, "  (empty tree)");
    };
    // Sideways: right subtree above, left below.
    let mut stack: Vec<(NodeId, usize, bool)> = vec![(root, 0, false)];
    while let Some((id, depth, expanded)) = stack.pop() {
        let Some(node) = s.node(id) else {
            continue;
        };
        if expanded {
            let mark = match node.highlight {
                NodeHighlight::None => "",
                NodeHighlight::Current => "*",
                NodeHighlight::Inserted => "+",
                NodeHighlight::Visited => ".",
            };
            writeln!(f, "  {:indent$}{}{}", "", node.value, mark, indent = depth * 4)?;
            continue;
        }
        if let Some(l) = node.left {
            stack.push((l, depth + 1, false));
        }
        stack.push((id, depth, true));
        if let Some(r) = node.right {
            stack.push((r, depth + 1, false));
        }
    }
    Ok(())
}

fn write_dp(f: &mut fmt::Formatter<'_>, s: &DpTableSnapshot) -> fmt::Result {
    let width = s
        .table
        .iter()
        .flatten()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    for (i, row) in s.table.iter().enumerate() {
        write!(f, "  ")?;
        for (w, v) in row.iter().enumerate() {
            if s.active_cell == Some((i, w)) {
                write!(f, "[{v:>width$}]")?;
            } else {
                write!(f, " {v:>width$} ")?;
            }
        }
        writeln!(f)?;
    }
    let selected: Vec<String> = s
        .selected
        .iter()
        .map(|it| format!("(w:{}, v:{})", it.weight, it.value))
        .collect();
    writeln!(f, "  best {} selected [{}]", s.best_value, selected.join(", "))
}

fn write_queens(f: &mut fmt::Formatter<'_>, b: &QueensBoard) -> fmt::Result {
    for placed in &b.placements {
        let row: String = (0..b.size)
            .map(|c| if *placed == Some(c) { 'Q' } else { '.' })
            .collect();
        writeln!(f, "  {row}")?;
    }
    writeln!(f, "  solutions {}", b.solutions.len())
}

fn write_subset(f: &mut fmt::Formatter<'_>, s: &SubsetState) -> fmt::Result {
    let chosen: Vec<i64> = s
        .chosen
        .iter()
        .filter_map(|&i| s.numbers.get(i).copied())
        .collect();
    writeln!(f, "  chosen {} sum {} / {}", join(&chosen), s.sum, s.target)?;
    for sol in &s.solutions {
        writeln!(f, "  found {}", join(sol))?;
    }
    Ok(())
}

fn write_graph(f: &mut fmt::Formatter<'_>, s: &GraphSnapshot, tags: &SemanticTags) -> fmt::Result {
    let kind = match s.frontier_kind {
        FrontierKind::Queue => "queue",
        FrontierKind::Stack => "stack",
    };
    writeln!(f, "  {kind} [{}]", s.frontier.join(", "))?;
    writeln!(f, "  visited [{}]", s.visited.join(", "))?;
    if let Some(current) = tags.as_graph().and_then(|t| t.current.as_deref()) {
        writeln!(f, "  at {current}")?;
    }
    Ok(())
}

fn write_memo(f: &mut fmt::Formatter<'_>, s: &MemoSnapshot) -> fmt::Result {
    let stack: Vec<String> = s.call_stack.iter().map(|n| format!("fib({n})")).collect();
    writeln!(f, "  stack {}", stack.join(" > "))?;
    let cache: Vec<String> = s.cache.iter().map(|(k, v)| format!("{k}={v}")).collect();
    writeln!(f, "  cache {{{}}}", cache.join(", "))
}

fn write_schedule(
    f: &mut fmt::Formatter<'_>,
    s: &ScheduleSnapshot,
    tags: Option<&ScheduleTags>,
) -> fmt::Result {
    let current = tags.and_then(|t| t.current);
    for (i, a) in s.activities.iter().enumerate() {
        let mark = if current == Some(i) {
            '>'
        } else if s.selected.contains(&i) {
            '*'
        } else {
            ' '
        };
        writeln!(f, "  {mark} {} {}-{}", a.name, a.start, a.finish)?;
    }
    if let Some(t) = s.last_finish {
        writeln!(f, "  last finish {t}")?;
    }
    Ok(())
}

/// Observer that writes each step's text view to `W`.
///
/// Write failures are logged and otherwise ignored so playback never stops on a broken pipe.
#[derive(Debug)]
pub struct TextObserver<W: Write> {
    out: W,
    total: Option<usize>,
}

impl<W: Write> TextObserver<W> {
    /// Observer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, total: None }
    }

    /// Print `index/total` headers instead of bare indices.
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_step(&mut self, index: usize, step: &Step) -> std::io::Result<()> {
        match self.total {
            Some(total) => writeln!(self.out, "-- step {}/{} --", index + 1, total)?,
            None => writeln!(self.out, "-- step {} --", index + 1)?,
        }
        write!(self.out, "{}", StepView(step))?;
        self.out.flush()
    }
}

impl<W: Write> StepObserver for TextObserver<W> {
    fn on_step(&mut self, index: usize, step: &Step) {
        if let Err(err) = self.write_step(index, step) {
            tracing::warn!(index, %err, "failed to write step");
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;
