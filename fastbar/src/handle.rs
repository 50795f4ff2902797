/// Geometry of the handle on its track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandleGeometry {
    /// Length of the fixed rail the handle travels along.
    pub track_length: u16,
    /// Length of the draggable handle itself.
    pub handle_length: u16,
}

impl HandleGeometry {
    /// Create a geometry. The handle is clamped to the track length so the
    /// travel range is never negative.
    pub fn new(track_length: u16, handle_length: u16) -> Self {
        Self {
            track_length,
            handle_length: handle_length.min(track_length),
        }
    }

    /// Distance the handle can travel: track minus handle.
    pub fn travel(&self) -> u16 {
        self.track_length - self.handle_length
    }

    /// Map a scroll fraction to an offset along the track.
    pub fn offset_for(&self, fraction: f32) -> u16 {
        (fraction * self.travel() as f32).round() as u16
    }

    /// Whether a local y coordinate falls within the handle at `offset`.
    pub fn handle_contains(&self, offset: u16, y: u16) -> bool {
        y >= offset && y < offset.saturating_add(self.handle_length)
    }
}
