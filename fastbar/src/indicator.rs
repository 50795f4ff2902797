use unicode_width::UnicodeWidthStr;

use crate::list::SectionLabels;

/// How the indicator derives its display text from the host's raw label.
///
/// Behavior differs only in label derivation, so the variants are a tagged
/// enum chosen at attach time rather than separate indicator types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorStyle {
    /// Compact one-character indicator: first character, uppercased.
    Alphabet,
    /// Multi-character indicator: the raw label as-is.
    FreeText,
}

impl IndicatorStyle {
    /// Derive the display label for `section`. Returns `None` for blank
    /// labels so the indicator keeps its previous text instead of flashing
    /// empty.
    pub fn derive(&self, labels: &dyn SectionLabels, section: usize) -> Option<String> {
        let raw = labels.label_for_index(section);
        if raw.trim().is_empty() {
            return None;
        }
        match self {
            IndicatorStyle::Alphabet => {
                let first = raw.chars().next()?;
                Some(first.to_uppercase().collect())
            }
            IndicatorStyle::FreeText => Some(raw),
        }
    }
}

/// Display-cell width of an indicator label, for host surface sizing.
pub fn indicator_width_hint(label: &str) -> u16 {
    label.width() as u16
}

/// Indicator binding owned by the bar while an indicator is attached.
#[derive(Debug)]
pub(crate) struct Indicator {
    pub style: IndicatorStyle,
    /// Shown only while a routed drag is in progress.
    pub visible: bool,
}

impl Indicator {
    pub fn new(style: IndicatorStyle) -> Self {
        Self {
            style,
            visible: false,
        }
    }
}
