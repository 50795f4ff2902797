use std::time::{Duration, Instant};

use fastbar::{BarVisibility, Fade, Visibility};

const DELAY: Duration = Duration::from_millis(2500);

fn machine() -> BarVisibility {
    BarVisibility::new(true, DELAY)
}

// =============================================================================
// Show / hide
// =============================================================================

#[test]
fn test_starts_hidden() {
    let v = machine();
    assert_eq!(v.state(), Visibility::Hidden);
}

#[test]
fn test_show_from_hidden_fades_in() {
    let mut v = machine();
    assert_eq!(v.show(), Some(Fade::In));
    assert_eq!(v.state(), Visibility::Visible);
}

#[test]
fn test_show_when_visible_is_noop() {
    let mut v = machine();
    v.show();
    assert_eq!(v.show(), None);
}

#[test]
fn test_hide_is_idempotent() {
    let mut v = machine();
    v.show();
    assert_eq!(v.hide(), Some(Fade::Out));
    assert_eq!(v.hide(), None);
    assert_eq!(v.state(), Visibility::Hidden);
}

// =============================================================================
// Force-hidden override
// =============================================================================

#[test]
fn test_force_hidden_from_visible_fades_out() {
    let mut v = machine();
    v.show();
    assert_eq!(v.set_force_hidden(true), Some(Fade::Out));
    assert_eq!(v.state(), Visibility::ForceHidden);
}

#[test]
fn test_force_hidden_from_hidden_has_no_fade() {
    let mut v = machine();
    assert_eq!(v.set_force_hidden(true), None);
    assert_eq!(v.state(), Visibility::ForceHidden);
}

#[test]
fn test_force_hidden_blocks_show() {
    let mut v = machine();
    v.set_force_hidden(true);
    assert_eq!(v.show(), None);
    assert_eq!(v.state(), Visibility::ForceHidden);
}

#[test]
fn test_force_hidden_cancels_pending_hide() {
    let now = Instant::now();
    let mut v = machine();
    v.show();
    v.on_scroll_idle(now);
    assert!(v.next_deadline().is_some());

    v.set_force_hidden(true);
    assert!(v.next_deadline().is_none());

    // A stale fire instant must be a no-op.
    assert_eq!(v.poll(now + DELAY), None);
    assert_eq!(v.state(), Visibility::ForceHidden);
}

#[test]
fn test_clearing_force_hidden_does_not_auto_show() {
    let mut v = machine();
    v.show();
    v.set_force_hidden(true);
    assert_eq!(v.set_force_hidden(false), None);
    assert_eq!(v.state(), Visibility::Hidden);
    // The next show works again.
    assert_eq!(v.show(), Some(Fade::In));
}

// =============================================================================
// Auto-hide toggle
// =============================================================================

#[test]
fn test_disabling_auto_hide_pins_bar_visible() {
    let now = Instant::now();
    let mut v = machine();
    v.show();
    v.on_scroll_idle(now);
    v.hide();

    assert_eq!(v.set_auto_hide(false), Some(Fade::In));
    assert_eq!(v.state(), Visibility::Visible);
    assert!(v.next_deadline().is_none());

    // Idle events no longer arm the timer.
    v.on_scroll_idle(now);
    assert!(v.next_deadline().is_none());
}

#[test]
fn test_disabling_auto_hide_respects_force_hidden() {
    let mut v = machine();
    v.set_force_hidden(true);
    assert_eq!(v.set_auto_hide(false), None);
    assert_eq!(v.state(), Visibility::ForceHidden);
}

#[test]
fn test_auto_hide_off_at_construction_starts_visible() {
    let mut v = BarVisibility::new(false, DELAY);
    assert_eq!(v.state(), Visibility::Visible);

    // No event path may unpin it while auto-hide stays off.
    assert_eq!(v.on_scroll_drag(true), None);
    assert_eq!(v.state(), Visibility::Visible);
    v.on_scroll_idle(Instant::now());
    assert!(v.next_deadline().is_none());
    assert_eq!(v.hide(), None);
    assert_eq!(v.state(), Visibility::Visible);
}

#[test]
fn test_clearing_force_hidden_with_auto_hide_off_restores_pin() {
    let mut v = machine();
    v.set_auto_hide(false);
    v.set_force_hidden(true);
    assert_eq!(v.state(), Visibility::ForceHidden);

    assert_eq!(v.set_force_hidden(false), Some(Fade::In));
    assert_eq!(v.state(), Visibility::Visible);
}

#[test]
fn test_reenabling_auto_hide_resumes_idle_behavior() {
    let now = Instant::now();
    let mut v = machine();
    v.set_auto_hide(false);
    assert_eq!(v.set_auto_hide(true), None);

    v.on_scroll_idle(now);
    assert_eq!(v.poll(now + DELAY), Some(Fade::Out));
}

// =============================================================================
// Idle timer
// =============================================================================

#[test]
fn test_idle_arms_single_shot_timer() {
    let now = Instant::now();
    let mut v = machine();
    v.show();
    v.on_scroll_idle(now);

    assert_eq!(v.poll(now + DELAY - Duration::from_millis(1)), None);
    assert_eq!(v.poll(now + DELAY), Some(Fade::Out));
    // Fired once; no second fire.
    assert_eq!(v.poll(now + DELAY * 2), None);
}

#[test]
fn test_reschedule_is_last_write_wins() {
    let now = Instant::now();
    let later = now + Duration::from_millis(1000);
    let mut v = machine();
    v.show();
    v.on_scroll_idle(now);
    v.on_scroll_idle(later);

    // The first deadline was replaced, not queued.
    assert_eq!(v.poll(now + DELAY), None);
    assert_eq!(v.state(), Visibility::Visible);
    assert_eq!(v.poll(later + DELAY), Some(Fade::Out));
}

#[test]
fn test_content_drag_shows_and_cancels_timer() {
    let now = Instant::now();
    let mut v = machine();
    v.show();
    v.on_scroll_idle(now);
    assert_eq!(v.hide(), Some(Fade::Out));

    assert_eq!(v.on_scroll_drag(true), Some(Fade::In));
    assert!(v.next_deadline().is_none());
}

#[test]
fn test_content_drag_without_scroll_range_does_not_show() {
    let mut v = machine();
    assert_eq!(v.on_scroll_drag(false), None);
    assert_eq!(v.state(), Visibility::Hidden);
}

#[test]
fn test_force_hidden_blocks_timer_rearm() {
    let now = Instant::now();
    let mut v = machine();
    v.on_handle_drag();
    v.set_force_hidden(true);

    // Release and idle after a mid-drag force-hide must not leave a stale
    // deadline for the host loop to wake on.
    v.on_handle_release(now);
    assert!(v.next_deadline().is_none());
    v.on_scroll_idle(now);
    assert!(v.next_deadline().is_none());
}

#[test]
fn test_handle_release_arms_timer() {
    let now = Instant::now();
    let mut v = machine();
    v.on_handle_drag();
    assert_eq!(v.state(), Visibility::Visible);

    v.on_handle_release(now);
    assert_eq!(v.poll(now + DELAY), Some(Fade::Out));
}

#[test]
fn test_custom_hide_delay() {
    let now = Instant::now();
    let short = Duration::from_millis(200);
    let mut v = machine();
    v.set_hide_delay(short);
    v.show();
    v.on_scroll_idle(now);
    assert_eq!(v.poll(now + short), Some(Fade::Out));
}
