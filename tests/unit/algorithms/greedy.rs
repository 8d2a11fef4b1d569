use super::*;

fn act(name: &str, start: i64, finish: i64) -> Activity {
    Activity {
        name: name.to_string(),
        start,
        finish,
    }
}

fn schedule(seq: &StepSequence, i: usize) -> &ScheduleSnapshot {
    seq.get(i).unwrap().snapshot.as_schedule().unwrap()
}

fn actions(seq: &StepSequence) -> Vec<ScheduleAction> {
    seq.iter()
        .map(|s| s.tags.as_schedule().unwrap().action)
        .collect()
}

#[test]
fn earliest_finish_first_selection() {
    let seq = trace(&[
        act("C", 0, 6),
        act("A", 1, 4),
        act("B", 3, 5),
        act("D", 5, 7),
    ]);

    assert_eq!(
        seq.first().unwrap().description,
        "Initial activities, sorted by finish times: [A(1-4), B(3-5), C(0-6), D(5-7)]"
    );
    assert_eq!(
        actions(&seq),
        vec![
            ScheduleAction::Start,
            ScheduleAction::Select,
            ScheduleAction::Consider,
            ScheduleAction::Skip,
            ScheduleAction::Consider,
            ScheduleAction::Skip,
            ScheduleAction::Consider,
            ScheduleAction::Select,
            ScheduleAction::Complete,
        ]
    );
    assert_eq!(
        seq.get(3).unwrap().description,
        "Activity B is NOT compatible (starts 3 < finishes 4). Skipped."
    );
    assert_eq!(
        seq.get(7).unwrap().description,
        "Activity D is compatible (starts 5 >= finishes 4). Selected it. New last finish time: 7."
    );
    assert_eq!(
        seq.last().unwrap().description,
        "Activity selection complete. Selected activities: [A, D]"
    );

    let last = schedule(&seq, seq.len() - 1);
    assert_eq!(last.selected, vec![0, 3]);
    assert_eq!(last.selected_names(), vec!["A", "D"]);
    assert_eq!(last.last_finish, Some(7));
}

#[test]
fn consider_step_shows_the_selection_before_the_decision() {
    let seq = trace(&[act("P", 1, 3), act("Q", 3, 4)]);
    let consider = seq.get(2).unwrap();
    let tags = consider.tags.as_schedule().unwrap();
    assert_eq!(tags.current, Some(1));
    assert_eq!(tags.compatible, None);
    assert_eq!(schedule(&seq, 2).selected, vec![0]);

    // Touching intervals are compatible.
    assert_eq!(schedule(&seq, 3).selected, vec![0, 1]);
    assert_eq!(seq.get(3).unwrap().tags.as_schedule().unwrap().compatible, Some(true));
}

#[test]
fn finish_time_ties_keep_input_order() {
    let seq = trace(&[act("X", 2, 5), act("Y", 1, 5)]);
    let names: Vec<&str> = schedule(&seq, 0)
        .activities
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["X", "Y"]);
    assert_eq!(schedule(&seq, seq.len() - 1).selected_names(), vec!["X"]);
}

#[test]
fn empty_input_completes_immediately() {
    let seq = trace(&[]);
    assert_eq!(actions(&seq), vec![ScheduleAction::Start, ScheduleAction::Complete]);
    assert_eq!(seq.last().unwrap().description, "No activities to select.");
}
