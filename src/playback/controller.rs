use std::time::Duration;

use crate::foundation::core::Speed;
use crate::foundation::error::{TraceError, TraceResult};
use crate::playback::observer::StepObserver;
use crate::playback::scheduler::{Scheduler, TimerId, VirtualClock};
use crate::trace::step::{Step, StepSequence};

/// Playback tuning, loaded from [`SessionConfig`](crate::config::SessionConfig).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlaybackOpts {
    /// Initial delay between autoplay ticks.
    pub speed_ms: u64,
    /// Fastest delay [`PlaybackController::set_speed`] accepts.
    pub min_speed_ms: u64,
    /// Slowest delay [`PlaybackController::set_speed`] accepts.
    pub max_speed_ms: u64,
}

impl Default for PlaybackOpts {
    fn default() -> Self {
        Self {
            speed_ms: 700,
            min_speed_ms: 100,
            max_speed_ms: 2500,
        }
    }
}

impl PlaybackOpts {
    /// Check bounds are ordered and the initial speed lies inside them.
    pub fn validate(&self) -> TraceResult<()> {
        Speed::from_millis(self.min_speed_ms)?;
        if self.min_speed_ms > self.max_speed_ms {
            return Err(TraceError::config(format!(
                "min_speed_ms ({}) must be <= max_speed_ms ({})",
                self.min_speed_ms, self.max_speed_ms
            )));
        }
        if !(self.min_speed_ms..=self.max_speed_ms).contains(&self.speed_ms) {
            return Err(TraceError::config(format!(
                "speed_ms ({}) must be within [{}, {}]",
                self.speed_ms, self.min_speed_ms, self.max_speed_ms
            )));
        }
        Ok(())
    }

    fn bounds(&self) -> (Speed, Speed) {
        (Speed(self.min_speed_ms), Speed(self.max_speed_ms))
    }
}

/// Transport state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// No sequence, or rewound to the start and not yet played.
    Idle,
    /// Autoplay active; exactly one timer is pending.
    Playing,
    /// Stopped somewhere before the last step.
    Paused,
    /// Cursor on the last step.
    Complete,
}

/// Cursor plus transport over one frozen [`StepSequence`].
///
/// Invariants kept by every operation:
/// - the cursor is `None` exactly when there is no non-empty sequence, otherwise a valid index;
/// - a timer is pending exactly when the state is [`PlaybackState::Playing`];
/// - observers hear about every cursor change, in order.
pub struct PlaybackController<S: Scheduler = VirtualClock> {
    steps: Option<StepSequence>,
    cursor: Option<usize>,
    state: PlaybackState,
    speed: Speed,
    opts: PlaybackOpts,
    pending: Option<TimerId>,
    scheduler: S,
    observers: Vec<Box<dyn StepObserver>>,
}

impl PlaybackController<VirtualClock> {
    /// Controller on a fresh [`VirtualClock`].
    pub fn new(opts: PlaybackOpts) -> TraceResult<Self> {
        Self::with_scheduler(opts, VirtualClock::new())
    }
}

impl<S: Scheduler> PlaybackController<S> {
    /// Controller on a caller-provided scheduler.
    pub fn with_scheduler(opts: PlaybackOpts, scheduler: S) -> TraceResult<Self> {
        opts.validate()?;
        Ok(Self {
            steps: None,
            cursor: None,
            state: PlaybackState::Idle,
            speed: Speed(opts.speed_ms),
            opts,
            pending: None,
            scheduler,
            observers: Vec::new(),
        })
    }

    /// Register a render callback.
    pub fn add_observer(&mut self, observer: Box<dyn StepObserver>) {
        self.observers.push(observer);
    }

    /// Current state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// True while autoplay is active.
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Cursor position, `None` without a non-empty sequence.
    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    /// Step under the cursor.
    pub fn current_step(&self) -> Option<&Step> {
        let i = self.cursor?;
        self.steps.as_ref()?.get(i)
    }

    /// Loaded sequence.
    pub fn steps(&self) -> Option<&StepSequence> {
        self.steps.as_ref()
    }

    /// Delay used for the next scheduled tick.
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Options this controller was built with.
    pub fn opts(&self) -> &PlaybackOpts {
        &self.opts
    }

    /// Scheduler driving autoplay.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Deadline of the pending tick, if playing.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Descriptions from step 0 through the cursor, newline-joined.
    pub fn transcript(&self) -> String {
        match (&self.steps, self.cursor) {
            (Some(steps), Some(i)) => steps.transcript(i),
            _ => String::new(),
        }
    }

    fn last_index(&self) -> Option<usize> {
        self.steps.as_ref().and_then(StepSequence::last_index)
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
            tracing::trace!(timer = id.get(), "tick cancelled");
        }
    }

    fn schedule_tick(&mut self) {
        let id = self.scheduler.schedule(self.speed.as_duration());
        tracing::trace!(timer = id.get(), delay_ms = self.speed.millis(), "tick scheduled");
        self.pending = Some(id);
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            tracing::debug!(from = ?self.state, to = ?state, cursor = ?self.cursor, "playback state");
            self.state = state;
        }
    }

    fn move_to(&mut self, index: usize) {
        if self.cursor == Some(index) {
            return;
        }
        self.cursor = Some(index);
        self.notify();
    }

    fn notify(&mut self) {
        let (Some(steps), Some(i)) = (&self.steps, self.cursor) else {
            return;
        };
        let Some(step) = steps.get(i) else {
            return;
        };
        for obs in &mut self.observers {
            obs.on_step(i, step);
        }
    }

    /// Take ownership of a new sequence and rewind to its first step.
    ///
    /// Any pending tick from the previous sequence is cancelled.
    pub fn load(&mut self, steps: StepSequence) {
        self.cancel_pending();
        self.cursor = (!steps.is_empty()).then_some(0);
        tracing::debug!(steps = steps.len(), "sequence loaded");
        self.steps = Some(steps);
        self.set_state(PlaybackState::Idle);
        self.notify();
    }

    /// Drop the sequence.
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.steps = None;
        self.cursor = None;
        self.set_state(PlaybackState::Idle);
    }

    /// Start autoplay. From the last step this replays from the start.
    pub fn play(&mut self) {
        let Some(last) = self.last_index() else {
            return;
        };
        if self.is_playing() {
            return;
        }
        if self.cursor == Some(last) {
            self.move_to(0);
        }
        if last == 0 {
            self.set_state(PlaybackState::Complete);
            return;
        }
        self.set_state(PlaybackState::Playing);
        self.schedule_tick();
    }

    /// Stop autoplay, keeping the cursor.
    pub fn pause(&mut self) {
        if !self.is_playing() {
            return;
        }
        self.cancel_pending();
        self.set_state(PlaybackState::Paused);
    }

    /// Pause when playing, play otherwise.
    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Step forward once. Ignored while playing; at the last step only the state changes.
    pub fn next(&mut self) {
        let (Some(last), Some(cur)) = (self.last_index(), self.cursor) else {
            return;
        };
        if self.is_playing() {
            return;
        }
        let to = (cur + 1).min(last);
        self.move_to(to);
        self.settle_at(to, last);
    }

    /// Step back once. Ignored while playing and at the first step.
    pub fn prev(&mut self) {
        let Some(cur) = self.cursor else {
            return;
        };
        if self.is_playing() || cur == 0 {
            return;
        }
        self.move_to(cur - 1);
        self.set_state(PlaybackState::Paused);
    }

    /// Jump to `index`, clamped to the last step.
    ///
    /// While playing, autoplay continues from the new position; seeking to the last step ends it.
    pub fn seek(&mut self, index: usize) {
        let Some(last) = self.last_index() else {
            return;
        };
        let to = index.min(last);
        self.move_to(to);
        if self.is_playing() {
            if to == last {
                self.cancel_pending();
                self.set_state(PlaybackState::Complete);
            }
            return;
        }
        if self.state == PlaybackState::Idle && to == 0 {
            return;
        }
        self.settle_at(to, last);
    }

    /// Cancel autoplay and rewind to the first step.
    pub fn reset(&mut self) {
        self.cancel_pending();
        if self.last_index().is_some() {
            self.move_to(0);
        }
        self.set_state(PlaybackState::Idle);
    }

    /// Change the tick delay, clamped to the configured bounds.
    ///
    /// A tick already pending keeps its deadline; the new delay applies from the next one.
    pub fn set_speed(&mut self, ms: u64) -> Speed {
        let (min, max) = self.opts.bounds();
        self.speed = Speed(ms).clamp(min, max);
        tracing::debug!(requested_ms = ms, speed_ms = self.speed.millis(), "speed changed");
        self.speed
    }

    /// Handle a fired timer. Returns true when it advanced the cursor.
    ///
    /// Ids other than the single pending tick are stale (cancelled by a pause, reset, or load) and
    /// ignored.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.pending != Some(id) || !self.is_playing() {
            tracing::trace!(timer = id.get(), "stale tick ignored");
            return false;
        }
        self.pending = None;
        let (Some(last), Some(cur)) = (self.last_index(), self.cursor) else {
            self.set_state(PlaybackState::Idle);
            return false;
        };
        let to = (cur + 1).min(last);
        self.move_to(to);
        if to == last {
            self.set_state(PlaybackState::Complete);
        } else {
            self.schedule_tick();
        }
        true
    }

    /// Advance the scheduler clock by `elapsed`, firing every tick that falls due, in order.
    ///
    /// Returns the number of steps advanced.
    pub fn pump(&mut self, elapsed: Duration) -> usize {
        let until = self.scheduler.now().saturating_add(elapsed);
        let mut advanced = 0;
        while let Some(id) = self.scheduler.pop_due(until) {
            if self.on_timer(id) {
                advanced += 1;
            }
        }
        self.scheduler.advance_to(until);
        advanced
    }

    fn settle_at(&mut self, index: usize, last: usize) {
        if index == last {
            self.set_state(PlaybackState::Complete);
        } else {
            self.set_state(PlaybackState::Paused);
        }
    }
}

impl<S: Scheduler + std::fmt::Debug> std::fmt::Debug for PlaybackController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("steps", &self.steps.as_ref().map(StepSequence::len))
            .field("cursor", &self.cursor)
            .field("state", &self.state)
            .field("speed", &self.speed)
            .field("pending", &self.pending)
            .field("scheduler", &self.scheduler)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/controller.rs"]
mod tests;
