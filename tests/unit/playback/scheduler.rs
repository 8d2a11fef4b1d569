use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn timers_fire_in_deadline_then_schedule_order() {
    let mut clock = VirtualClock::new();
    let late = clock.schedule(ms(300));
    let a = clock.schedule(ms(100));
    let b = clock.schedule(ms(100));

    assert_eq!(clock.next_deadline(), Some(ms(100)));
    assert_eq!(clock.pop_due(ms(1000)), Some(a));
    assert_eq!(clock.pop_due(ms(1000)), Some(b));
    assert_eq!(clock.now(), ms(100));
    assert_eq!(clock.pop_due(ms(1000)), Some(late));
    assert_eq!(clock.pop_due(ms(1000)), None);
}

#[test]
fn pop_due_respects_the_window() {
    let mut clock = VirtualClock::new();
    clock.schedule(ms(500));
    assert_eq!(clock.pop_due(ms(499)), None);
    assert_eq!(clock.now(), Duration::ZERO);
    assert_eq!(clock.pending(), 1);
}

#[test]
fn cancelled_timers_never_fire() {
    let mut clock = VirtualClock::new();
    let id = clock.schedule(ms(10));
    assert!(clock.cancel(id));
    assert!(!clock.cancel(id));
    assert_eq!(clock.pop_due(ms(100)), None);
    assert_eq!(clock.next_deadline(), None);
}

#[test]
fn clock_never_runs_backwards() {
    let mut clock = VirtualClock::new();
    clock.advance_to(ms(50));
    clock.advance_to(ms(20));
    assert_eq!(clock.now(), ms(50));
    let id = clock.schedule(ms(5));
    assert_eq!(clock.next_deadline(), Some(ms(55)));
    assert!(id.get() == 0);
}
