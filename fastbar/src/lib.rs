pub mod bar;
pub mod drag;
pub mod error;
pub mod event;
pub mod handle;
pub mod indicator;
pub mod list;
pub mod progress;
pub mod surface;
pub mod timer;
pub mod visibility;

pub use bar::{FastBarConfig, FastScrollBar, ScrollTarget};
pub use error::AttachError;
pub use event::{EventResult, PointerEvent, ScrollActivity};
pub use handle::HandleGeometry;
pub use indicator::{indicator_width_hint, IndicatorStyle};
pub use list::{ListView, ListWindow, SectionLabels};
pub use progress::{scroll_progress, ScrollProgress};
pub use surface::BarSurface;
pub use timer::IdleTimer;
pub use visibility::{BarVisibility, Fade, Visibility};
