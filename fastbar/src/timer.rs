use std::time::{Duration, Instant};

/// Single-shot debounce timer driven by explicit time.
///
/// The host event loop passes `Instant` values in, so tests can simulate
/// time instead of sleeping. Scheduling always replaces any pending deadline
/// (last-write-wins); there is never more than one outstanding fire.
#[derive(Debug, Default)]
pub struct IdleTimer {
    deadline: Option<Instant>,
}

impl IdleTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the timer to fire `delay` after `now`, cancelling any
    /// pending deadline first.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Cancel the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a fire is pending.
    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, for event-loop poll timeout calculation.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire the timer if it is due. Returns true at most once per schedule.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
