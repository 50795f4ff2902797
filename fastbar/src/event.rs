/// Pointer event in the bar's local coordinate space.
///
/// The host delivers only events that fall within the bar's bounds; `y` runs
/// along the track, starting at the top of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Down { x: u16, y: u16 },
    /// Pointer moved while the button is held.
    Move { x: u16, y: u16 },
    /// Button released or gesture cancelled.
    Up,
}

impl PointerEvent {
    /// Convert a crossterm mouse event into a pointer event, if it is one the
    /// bar cares about. Hover moves and non-primary buttons map to `None`.
    pub fn from_mouse(event: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::{MouseButton, MouseEventKind};
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down {
                x: event.column,
                y: event.row,
            }),
            MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Move {
                x: event.column,
                y: event.row,
            }),
            MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up),
            _ => None,
        }
    }
}

/// Scroll-activity edges reported by the host list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollActivity {
    /// The user started dragging the list content directly.
    Dragging,
    /// The list came to rest.
    Idle,
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, let other handlers (or the underlying content) see it.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag session on the bar.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started a drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
