use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// Handle of one scheduled timer. Ids are never reused by a scheduler instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// One-shot timer queue with an explicit clock.
///
/// Timers fire in deadline order; equal deadlines fire in scheduling order.
pub trait Scheduler {
    /// Current time since the scheduler was created.
    fn now(&self) -> Duration;

    /// Schedule a timer `delay` after [`Scheduler::now`].
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending timer. Returns false when it already fired or was cancelled.
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Earliest pending deadline.
    fn next_deadline(&self) -> Option<Duration>;

    /// Remove and return the earliest timer due at or before `until`, moving the clock to its
    /// deadline.
    fn pop_due(&mut self, until: Duration) -> Option<TimerId>;

    /// Move the clock forward to `t`. Never moves it backwards.
    fn advance_to(&mut self, t: Duration);

    /// Number of pending timers.
    fn pending(&self) -> usize;
}

/// Deterministic scheduler whose clock only moves when told to.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    next_id: u64,
    queue: BTreeSet<(Duration, TimerId)>,
    deadlines: BTreeMap<TimerId, Duration>,
}

impl VirtualClock {
    /// Clock at time zero with no timers.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for VirtualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let at = self.now.saturating_add(delay);
        self.queue.insert((at, id));
        self.deadlines.insert(id, at);
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(at) => self.queue.remove(&(at, id)),
            None => false,
        }
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.queue.first().map(|(at, _)| *at)
    }

    fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let &(at, id) = self.queue.first()?;
        if at > until {
            return None;
        }
        self.queue.remove(&(at, id));
        self.deadlines.remove(&id);
        self.advance_to(at);
        Some(id)
    }

    fn advance_to(&mut self, t: Duration) {
        if t > self.now {
            self.now = t;
        }
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/scheduler.rs"]
mod tests;
