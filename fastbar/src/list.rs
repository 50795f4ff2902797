/// Snapshot of the list's visible-item window, taken fresh on every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListWindow {
    /// Total number of items in the list adapter.
    pub item_count: usize,
    /// Items per visual row: 1 for linear lists, the span count for grids.
    pub items_per_row: usize,
    /// Height of the first fully measured visible item, in cells/pixels.
    /// Zero means no item has been measured yet (e.g. empty list).
    pub first_visible_item_height: u16,
    /// Height of the list viewport.
    pub viewport_height: u16,
    /// Index of the last fully visible item, or `None` mid-layout.
    pub last_fully_visible: Option<usize>,
}

/// Section-label capability for indicator-equipped lists.
///
/// Hosts that want a floating indicator expose this from
/// [`ListView::section_labels`]; attach fails without it.
pub trait SectionLabels {
    /// Label for the item at `index`. May be longer than one character; the
    /// indicator style decides how much of it is shown.
    fn label_for_index(&self, index: usize) -> String;
}

/// Non-owning view of the host list the bar is linked to.
///
/// The bar never stores this; it is passed into each event entry point, so the
/// host keeps full control of the list's lifecycle.
pub trait ListView {
    /// Number of items in the list.
    fn item_count(&self) -> usize;

    /// Jump the list so the given item index is in view. Must tolerate
    /// out-of-range indices without panicking; the bar does not clamp.
    fn scroll_to_index(&mut self, index: usize);

    /// Current visible-window snapshot.
    fn window(&self) -> ListWindow;

    /// Whether the list can scroll in any direction at all. Gates
    /// show-on-drag so a fully fitting list never reveals the bar.
    fn can_scroll(&self) -> bool {
        true
    }

    /// Probe for the section-label capability. Defaults to absent.
    fn section_labels(&self) -> Option<&dyn SectionLabels> {
        None
    }
}
