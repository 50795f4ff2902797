use std::time::{Duration, Instant};

use crate::drag::{target_index, DragSession};
use crate::error::AttachError;
use crate::event::{EventResult, PointerEvent, ScrollActivity};
use crate::handle::HandleGeometry;
use crate::indicator::{Indicator, IndicatorStyle};
use crate::list::ListView;
use crate::progress::scroll_progress;
use crate::surface::BarSurface;
use crate::visibility::{BarVisibility, Fade, Visibility};

/// Position reported to scroll listeners during a routed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// The drag moved the list to this index.
    Index(usize),
    /// The drag ended.
    End,
}

/// Configuration surface for [`FastScrollBar`].
#[derive(Debug, Clone, Copy)]
pub struct FastBarConfig {
    /// Idle delay before the bar auto-hides.
    pub hide_delay: Duration,
    /// Whether the bar hides after inactivity at all.
    pub auto_hide: bool,
    /// Restrict drag routing to gestures that start on the handle.
    pub handle_touch_only: bool,
    /// Swap the handle palette while pressed instead of a static color.
    pub light_on_touch: bool,
}

impl Default for FastBarConfig {
    fn default() -> Self {
        Self {
            hide_delay: Duration::from_millis(2500),
            auto_hide: true,
            handle_touch_only: false,
            light_on_touch: false,
        }
    }
}

/// Fast-scroll overlay bar state.
///
/// Owned by the host like tuidom's `ScrollState`/`FocusState`: the bar holds
/// its own logical state and is handed the list and surface collaborators on
/// each event entry point. With auto-hide on it starts hidden and the first
/// scroll or drag slides it in; with auto-hide off it rests visible from
/// construction (check [`visibility`](Self::visibility) when presenting the
/// surface initially).
pub struct FastScrollBar {
    geometry: HandleGeometry,
    visibility: BarVisibility,
    drag: Option<DragSession>,
    indicator: Option<Indicator>,
    listeners: Vec<Box<dyn FnMut(ScrollTarget)>>,
    handle_offset: u16,
    handle_touch_only: bool,
    light_on_touch: bool,
    last_label: Option<String>,
}

impl FastScrollBar {
    pub fn new(config: FastBarConfig) -> Self {
        Self {
            geometry: HandleGeometry::default(),
            visibility: BarVisibility::new(config.auto_hide, config.hide_delay),
            drag: None,
            indicator: None,
            listeners: Vec::new(),
            handle_offset: 0,
            handle_touch_only: config.handle_touch_only,
            light_on_touch: config.light_on_touch,
            last_label: None,
        }
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Update track/handle geometry after host layout.
    pub fn set_geometry(&mut self, track_length: u16, handle_length: u16) {
        self.geometry = HandleGeometry::new(track_length, handle_length);
    }

    pub fn geometry(&self) -> HandleGeometry {
        self.geometry
    }

    pub fn set_hide_delay(&mut self, delay: Duration) {
        self.visibility.set_hide_delay(delay);
    }

    /// Enable or disable auto-hide. Disabling pins the bar visible.
    pub fn set_auto_hide(&mut self, auto_hide: bool, surface: &mut dyn BarSurface) {
        let fade = self.visibility.set_auto_hide(auto_hide);
        self.apply_fade(fade, surface);
    }

    /// Imperative hide override; overrides auto-hide entirely until cleared.
    pub fn set_force_hidden(&mut self, force: bool, surface: &mut dyn BarSurface) {
        let fade = self.visibility.set_force_hidden(force);
        self.apply_fade(fade, surface);
    }

    pub fn set_handle_touch_only(&mut self, handle_touch_only: bool) {
        self.handle_touch_only = handle_touch_only;
    }

    pub fn set_light_on_touch(&mut self, light_on_touch: bool) {
        self.light_on_touch = light_on_touch;
    }

    /// Register a fast-scroll listener. All registered listeners fire on
    /// every routed drag position change, then once more with
    /// [`ScrollTarget::End`] on release.
    pub fn add_scroll_listener(&mut self, listener: impl FnMut(ScrollTarget) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // -------------------------------------------------------------------------
    // Indicator binding
    // -------------------------------------------------------------------------

    /// Attach a floating section indicator. Fails before any state changes if
    /// the host list does not expose section labels.
    pub fn attach_indicator(
        &mut self,
        style: IndicatorStyle,
        list: &dyn ListView,
    ) -> Result<(), AttachError> {
        if list.section_labels().is_none() {
            return Err(AttachError::CapabilityMissing);
        }
        log::debug!("[bar] indicator attached ({:?})", style);
        self.indicator = Some(Indicator::new(style));
        Ok(())
    }

    /// Detach the indicator, if any.
    pub fn remove_indicator(&mut self) {
        self.indicator = None;
        self.last_label = None;
    }

    // -------------------------------------------------------------------------
    // Event entry points
    // -------------------------------------------------------------------------

    /// The list scrolled: reposition the handle and refresh the indicator.
    ///
    /// Undefined progress (unmeasured or mid-layout snapshots) skips the
    /// update entirely, leaving the handle at its last valid position.
    pub fn on_list_scrolled(&mut self, list: &dyn ListView, surface: &mut dyn BarSurface) {
        let Some(progress) = scroll_progress(&list.window()) else {
            return;
        };

        let offset = self.geometry.offset_for(progress.fraction);
        self.handle_offset = offset;
        surface.set_handle_offset(offset);

        if let Some(indicator) = &self.indicator {
            if indicator.visible {
                surface.set_indicator_offset(offset);
                if let Some(labels) = list.section_labels() {
                    if let Some(text) = indicator.style.derive(labels, progress.section) {
                        surface.set_indicator_text(&text);
                        self.last_label = Some(text);
                    }
                }
            }
        }
    }

    /// The list's scroll activity changed (content drag started / came to rest).
    pub fn on_scroll_activity(
        &mut self,
        activity: ScrollActivity,
        list: &dyn ListView,
        surface: &mut dyn BarSurface,
        now: Instant,
    ) {
        match activity {
            ScrollActivity::Idle => self.visibility.on_scroll_idle(now),
            ScrollActivity::Dragging => {
                let fade = self.visibility.on_scroll_drag(list.can_scroll());
                self.apply_fade(fade, surface);
            }
        }
    }

    /// Route a pointer event in the bar's local coordinates.
    pub fn on_pointer(
        &mut self,
        event: PointerEvent,
        list: &mut dyn ListView,
        surface: &mut dyn BarSurface,
        now: Instant,
    ) -> EventResult {
        match event {
            PointerEvent::Down { y, .. } => {
                let session = DragSession::begin(
                    self.handle_touch_only,
                    self.visibility.state(),
                    self.geometry,
                    self.handle_offset,
                    y,
                );
                self.drag = Some(session);
                if session.routed() {
                    self.drag_to(y, list, surface);
                    EventResult::StartDrag
                } else {
                    EventResult::Ignored
                }
            }
            PointerEvent::Move { y, .. } => match self.drag {
                Some(session) if session.routed() => {
                    self.drag_to(y, list, surface);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            },
            PointerEvent::Up => {
                let Some(session) = self.drag.take() else {
                    return EventResult::Ignored;
                };
                if !session.routed() {
                    return EventResult::Ignored;
                }
                if let Some(indicator) = &mut self.indicator {
                    if indicator.visible {
                        indicator.visible = false;
                        surface.set_indicator_visible(false);
                    }
                }
                if self.light_on_touch {
                    surface.set_handle_pressed(false);
                }
                self.notify(ScrollTarget::End);
                self.visibility.on_handle_release(now);
                EventResult::Consumed
            }
        }
    }

    /// Drive time forward: fires the idle timer if due.
    pub fn poll(&mut self, surface: &mut dyn BarSurface, now: Instant) {
        let fade = self.visibility.poll(now);
        self.apply_fade(fade, surface);
    }

    /// Next instant the host loop should call [`poll`](Self::poll) by.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.visibility.next_deadline()
    }

    // -------------------------------------------------------------------------
    // Diagnostics
    // -------------------------------------------------------------------------

    pub fn visibility(&self) -> Visibility {
        self.visibility.state()
    }

    pub fn handle_offset(&self) -> u16 {
        self.handle_offset
    }

    pub fn indicator_visible(&self) -> bool {
        self.indicator.as_ref().is_some_and(|i| i.visible)
    }

    /// Last label pushed to the indicator surface.
    pub fn indicator_text(&self) -> Option<&str> {
        self.last_label.as_deref()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn drag_to(&mut self, y: u16, list: &mut dyn ListView, surface: &mut dyn BarSurface) {
        let window = list.window();
        let target = target_index(
            list.item_count(),
            y,
            window.viewport_height,
            self.geometry.handle_length,
        );
        log::trace!("[bar] drag y={} -> index {}", y, target);
        self.notify(ScrollTarget::Index(target));
        list.scroll_to_index(target);

        if let Some(indicator) = &mut self.indicator {
            if !indicator.visible {
                indicator.visible = true;
                surface.set_indicator_visible(true);
            }
        }
        if self.light_on_touch {
            surface.set_handle_pressed(true);
        }
        let fade = self.visibility.on_handle_drag();
        self.apply_fade(fade, surface);
    }

    fn notify(&mut self, target: ScrollTarget) {
        for listener in &mut self.listeners {
            listener(target);
        }
    }

    fn apply_fade(&mut self, fade: Option<Fade>, surface: &mut dyn BarSurface) {
        match fade {
            Some(Fade::In) => surface.slide_in(),
            Some(Fade::Out) => surface.slide_out(),
            None => {}
        }
    }
}

impl Default for FastScrollBar {
    fn default() -> Self {
        Self::new(FastBarConfig::default())
    }
}

impl std::fmt::Debug for FastScrollBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastScrollBar")
            .field("geometry", &self.geometry)
            .field("visibility", &self.visibility)
            .field("drag", &self.drag)
            .field("indicator", &self.indicator)
            .field("handle_offset", &self.handle_offset)
            .finish_non_exhaustive()
    }
}
