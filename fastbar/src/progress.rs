use crate::list::ListWindow;

/// Normalized scroll position derived from a [`ListWindow`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollProgress {
    /// Fraction of the scrollable range, in `[0, 1]`.
    pub fraction: f32,
    /// Section index the viewport bottom currently sits in, used for
    /// indicator labels.
    pub section: usize,
}

/// Compute scroll progress for a window snapshot.
///
/// Returns `None` when progress is undefined: no item measured yet
/// (`first_visible_item_height == 0`) or no fully visible item reported
/// (transient layout pass). Callers skip the visual update for that event
/// and keep the handle where it was.
///
/// A list that fits entirely in the viewport has no scroll range and maps to
/// `fraction 0, section 0` rather than an error.
pub fn scroll_progress(window: &ListWindow) -> Option<ScrollProgress> {
    if window.first_visible_item_height == 0 {
        return None;
    }
    let last_fully_visible = window.last_fully_visible?;

    let rows_in_viewport = (window.viewport_height / window.first_visible_item_height) as usize;
    let items_in_viewport = rows_in_viewport * window.items_per_row.max(1);

    if window.item_count <= items_in_viewport {
        return Some(ScrollProgress {
            fraction: 0.0,
            section: 0,
        });
    }

    let scrollable = window.item_count - items_in_viewport;
    // Index of the last fully visible item when scrolled to the top.
    let base = window.item_count - scrollable - 1;
    let section = last_fully_visible.saturating_sub(base);
    let fraction = (section as f32 / scrollable as f32).clamp(0.0, 1.0);

    Some(ScrollProgress { fraction, section })
}
