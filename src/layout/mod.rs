//! Gantt-style timeline layout.
//!
//! Turns timeline rows (details grouped by model or work center) into
//! pixel geometry: a visible range of whole days, day/hour header
//! cells, and one positioned bar per drawable detail.
//!
//! # Pipeline
//!
//! 1. [`visible_range`]: derive `[start, end)` from the data (zoom-free).
//! 2. [`ZoomLevel`]: choose pixels per hour.
//! 3. [`layout_rows`]: position bars. Re-run this step alone on zoom changes.

mod bars;
mod range;
mod zoom;

pub use bars::{
    layout_bar, layout_rows, layout_timeline, layout_timeline_with, RowLayout, TimelineBar,
    TimelineLayout,
};
pub use range::{visible_range, visible_range_with, VisibleRange};
pub use zoom::{HourTick, ZoomLevel};
