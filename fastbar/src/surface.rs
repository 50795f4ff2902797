/// Visual collaborator the bar writes to.
///
/// The bar owns logical state only; hosts implement this trait over whatever
/// actually draws the track, handle and indicator. Slide calls are
/// fire-and-forget animation requests whose playback is never awaited.
///
/// Indicator methods default to no-ops so hosts without an indicator visual
/// implement nothing extra.
pub trait BarSurface {
    /// Move the handle to `offset` cells/pixels from the top of the track.
    fn set_handle_offset(&mut self, offset: u16);

    /// Animate the bar into view.
    fn slide_in(&mut self);

    /// Animate the bar out of view.
    fn slide_out(&mut self);

    /// Swap the handle between its pressed and released palette. Only called
    /// when `light_on_touch` is configured.
    fn set_handle_pressed(&mut self, _pressed: bool) {}

    /// Show or hide the floating indicator.
    fn set_indicator_visible(&mut self, _visible: bool) {}

    /// Update the indicator's label text.
    fn set_indicator_text(&mut self, _text: &str) {}

    /// Track the indicator alongside the handle offset.
    fn set_indicator_offset(&mut self, _offset: u16) {}
}
