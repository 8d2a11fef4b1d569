//! Greedy activity selection (interval scheduling by earliest finish time).

use crate::trace::builder::TraceBuilder;
use crate::trace::snapshot::{Activity, AlgorithmState, ScheduleSnapshot};
use crate::trace::step::StepSequence;
use crate::trace::tags::{ScheduleAction, ScheduleTags, SemanticTags};

struct Schedule {
    activities: Vec<Activity>,
    selected: Vec<usize>,
    last_finish: Option<i64>,
    out: TraceBuilder,
}

impl Schedule {
    fn push(&mut self, description: String, tags: ScheduleTags) {
        let snapshot = ScheduleSnapshot {
            activities: self.activities.clone(),
            selected: self.selected.clone(),
            last_finish: self.last_finish,
        };
        self.out.push(
            description,
            AlgorithmState::Schedule(snapshot),
            SemanticTags::Schedule(tags),
        );
    }

    fn select(&mut self, i: usize) {
        self.selected.push(i);
        self.last_finish = self.activities.get(i).map(|a| a.finish);
    }

    fn selected_names(&self) -> String {
        self.selected
            .iter()
            .filter_map(|&i| self.activities.get(i))
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn tags_at(action: ScheduleAction, current: usize, compatible: Option<bool>) -> ScheduleTags {
    ScheduleTags {
        current: Some(current),
        compatible,
        ..ScheduleTags::new(action)
    }
}

/// Activity selection trace: sort by finish time, take the first activity, then every activity
/// that starts no earlier than the last selected one finishes.
///
/// Ties on finish time keep their input order.
#[tracing::instrument(skip(activities), fields(len = activities.len()))]
pub fn trace(activities: &[Activity]) -> StepSequence {
    let mut sorted = activities.to_vec();
    sorted.sort_by_key(|a| a.finish);

    let listed: Vec<String> = sorted
        .iter()
        .map(|a| format!("{}({}-{})", a.name, a.start, a.finish))
        .collect();
    let mut s = Schedule {
        activities: sorted,
        selected: Vec::new(),
        last_finish: None,
        out: TraceBuilder::new(),
    };
    s.push(
        format!(
            "Initial activities, sorted by finish times: [{}]",
            listed.join(", ")
        ),
        ScheduleTags::new(ScheduleAction::Start),
    );

    let Some(first) = s.activities.first().cloned() else {
        s.push(
            "No activities to select.".to_string(),
            ScheduleTags::new(ScheduleAction::Complete),
        );
        return s.out.finish();
    };

    s.select(0);
    s.push(
        format!(
            "Selected the first activity: {} (ends at {}).",
            first.name, first.finish
        ),
        tags_at(ScheduleAction::Select, 0, Some(true)),
    );

    for i in 1..s.activities.len() {
        let a = s.activities[i].clone();
        let last = s.last_finish.unwrap_or(first.finish);
        s.push(
            format!(
                "Considering activity {} (starts {}, finishes {}). Last selected activity \
                 finished at {last}.",
                a.name, a.start, a.finish
            ),
            tags_at(ScheduleAction::Consider, i, None),
        );

        if a.start >= last {
            s.select(i);
            s.push(
                format!(
                    "Activity {} is compatible (starts {} >= finishes {last}). Selected it. \
                     New last finish time: {}.",
                    a.name, a.start, a.finish
                ),
                tags_at(ScheduleAction::Select, i, Some(true)),
            );
        } else {
            s.push(
                format!(
                    "Activity {} is NOT compatible (starts {} < finishes {last}). Skipped.",
                    a.name, a.start
                ),
                tags_at(ScheduleAction::Skip, i, Some(false)),
            );
        }
    }

    let names = s.selected_names();
    s.push(
        format!("Activity selection complete. Selected activities: [{names}]"),
        ScheduleTags::new(ScheduleAction::Complete),
    );
    tracing::debug!(selected = s.selected.len(), "activity selection traced");
    s.out.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/algorithms/greedy.rs"]
mod tests;
