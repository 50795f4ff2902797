use crate::handle::HandleGeometry;
use crate::visibility::Visibility;

/// Transient state for one pointer gesture on the bar.
///
/// Created on pointer-down, destroyed on pointer-up/cancel. The routing
/// decision is made once at session start and held fixed, so a visibility or
/// policy change mid-gesture never flips how the rest of the session is
/// handled.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    routed: bool,
}

impl DragSession {
    /// Decide routing for a gesture starting at local `y`.
    pub fn begin(
        handle_touch_only: bool,
        visibility: Visibility,
        geometry: HandleGeometry,
        handle_offset: u16,
        y: u16,
    ) -> Self {
        let routed = match visibility {
            // Host directive: the bar does not exist for input purposes.
            Visibility::ForceHidden => false,
            Visibility::Hidden if handle_touch_only => false,
            _ if handle_touch_only => geometry.handle_contains(handle_offset, y),
            _ => true,
        };
        if !routed {
            log::debug!("[drag] session ignored (handle_touch_only or hidden)");
        }
        Self { routed }
    }

    pub fn routed(&self) -> bool {
        self.routed
    }
}

/// Map a pointer y position to an absolute list index.
///
/// No clamping: the host list is expected to clamp or ignore out-of-range
/// targets. A zero travel denominator (viewport no taller than the handle)
/// maps everything to index 0.
pub fn target_index(item_count: usize, y: u16, viewport_height: u16, handle_length: u16) -> usize {
    let denom = viewport_height.saturating_sub(handle_length);
    if denom == 0 {
        return 0;
    }
    (item_count as f32 * (y as f32 / denom as f32)).round() as usize
}
