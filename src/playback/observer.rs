use std::cell::RefCell;
use std::rc::Rc;

use crate::trace::step::Step;

/// Render callback invoked once per cursor change with the step now under the cursor.
pub trait StepObserver {
    /// Called after the cursor moved to `index` (and once when a sequence is loaded).
    fn on_step(&mut self, index: usize, step: &Step);
}

/// Lets a caller keep a handle on an observer the controller owns.
impl<T: StepObserver + ?Sized> StepObserver for Rc<RefCell<T>> {
    fn on_step(&mut self, index: usize, step: &Step) {
        self.borrow_mut().on_step(index, step)
    }
}

/// Observer that records every notification, for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    seen: Vec<(usize, String)>,
}

impl RecordingObserver {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder wrapped for sharing with a controller.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Indices in notification order.
    pub fn indices(&self) -> Vec<usize> {
        self.seen.iter().map(|(i, _)| *i).collect()
    }

    /// `(index, description)` pairs in notification order.
    pub fn seen(&self) -> &[(usize, String)] {
        &self.seen
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

impl StepObserver for RecordingObserver {
    fn on_step(&mut self, index: usize, step: &Step) {
        self.seen.push((index, step.description.clone()));
    }
}
