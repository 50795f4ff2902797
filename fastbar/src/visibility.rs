use std::time::{Duration, Instant};

use crate::timer::IdleTimer;

/// Logical visibility of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Faded out after inactivity; shown again by scroll or drag.
    Hidden,
    /// On screen.
    Visible,
    /// Explicit host directive; overrides auto-hide/show until cleared.
    ForceHidden,
}

/// Fade effect the caller should forward to the surface.
///
/// Logical state changes synchronously when a transition is requested; the
/// animation itself is fire-and-forget and never awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    In,
    Out,
}

/// Show/auto-hide state machine for the bar.
///
/// Owns the single idle timer. All methods take explicit `Instant` values so
/// the machine can be driven deterministically in tests.
#[derive(Debug)]
pub struct BarVisibility {
    state: Visibility,
    auto_hide: bool,
    hide_delay: Duration,
    timer: IdleTimer,
}

impl BarVisibility {
    pub fn new(auto_hide: bool, hide_delay: Duration) -> Self {
        Self {
            // With auto-hide off the bar rests visible; Hidden is only ever
            // reachable while auto-hide is on.
            state: if auto_hide {
                Visibility::Hidden
            } else {
                Visibility::Visible
            },
            auto_hide,
            hide_delay,
            timer: IdleTimer::new(),
        }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    pub fn set_hide_delay(&mut self, delay: Duration) {
        self.hide_delay = delay;
    }

    /// Bring the bar into view. No-op when already visible, force-hidden, or
    /// when auto-hide is off (the bar is pinned visible in that case).
    pub fn show(&mut self) -> Option<Fade> {
        if self.state == Visibility::Hidden && self.auto_hide {
            log::debug!("[visibility] showing bar");
            self.state = Visibility::Visible;
            Some(Fade::In)
        } else {
            None
        }
    }

    /// Fade the bar out. Only acts when currently visible and auto-hide is
    /// on, so a stale timer fire after a force-hide or a repeated hide is a
    /// no-op, and a pinned bar never fades.
    pub fn hide(&mut self) -> Option<Fade> {
        if self.state == Visibility::Visible && self.auto_hide {
            log::debug!("[visibility] hiding bar");
            self.state = Visibility::Hidden;
            Some(Fade::Out)
        } else {
            None
        }
    }

    /// Imperative host override. Entering force-hidden cancels the idle
    /// timer. Leaving it lands in `Hidden` without auto-showing when
    /// auto-hide is on; with auto-hide off it restores the visible pin.
    pub fn set_force_hidden(&mut self, force: bool) -> Option<Fade> {
        if force {
            let was_visible = self.state == Visibility::Visible;
            self.state = Visibility::ForceHidden;
            self.timer.cancel();
            log::debug!("[visibility] force-hidden");
            was_visible.then_some(Fade::Out)
        } else if self.state == Visibility::ForceHidden {
            if self.auto_hide {
                self.state = Visibility::Hidden;
                None
            } else {
                self.state = Visibility::Visible;
                Some(Fade::In)
            }
        } else {
            None
        }
    }

    /// Enable or disable auto-hide. Disabling cancels the idle timer and pins
    /// the bar visible; re-enabling resumes idle behavior on the next show.
    pub fn set_auto_hide(&mut self, auto_hide: bool) -> Option<Fade> {
        self.auto_hide = auto_hide;
        if auto_hide {
            return None;
        }
        self.timer.cancel();
        if self.state == Visibility::Hidden {
            self.state = Visibility::Visible;
            Some(Fade::In)
        } else {
            None
        }
    }

    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    /// The list came to rest: arm the idle timer. Force-hidden keeps the
    /// timer cancelled so the host loop is never woken for a no-op fire.
    pub fn on_scroll_idle(&mut self, now: Instant) {
        if self.auto_hide && self.state != Visibility::ForceHidden {
            self.timer.schedule(now, self.hide_delay);
        }
    }

    /// The user started dragging the list content. Shows the bar only when
    /// the list can actually scroll somewhere.
    pub fn on_scroll_drag(&mut self, can_scroll: bool) -> Option<Fade> {
        if self.auto_hide && can_scroll {
            self.timer.cancel();
            self.show()
        } else {
            None
        }
    }

    /// Cancel any pending hide and show the bar (drag on the handle).
    pub fn on_handle_drag(&mut self) -> Option<Fade> {
        self.timer.cancel();
        self.show()
    }

    /// The handle was released: re-arm the idle timer if auto-hide is on.
    /// A force-hide issued mid-drag leaves the timer cancelled.
    pub fn on_handle_release(&mut self, now: Instant) {
        if self.auto_hide && self.state != Visibility::ForceHidden {
            self.timer.schedule(now, self.hide_delay);
        }
    }

    /// Fire the idle timer if due. Returns the fade-out to apply, if any.
    pub fn poll(&mut self, now: Instant) -> Option<Fade> {
        if self.timer.poll(now) {
            self.hide()
        } else {
            None
        }
    }

    /// Pending timer deadline, for event-loop timeout calculation.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }
}
