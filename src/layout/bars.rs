//! Bar geometry for the Gantt view.
//!
//! For each detail, relative to the range start:
//!
//! ```text
//! left  = (offset_minutes   / 60) * px_per_hour
//! width = (duration_minutes / 60) * px_per_hour
//! ```
//!
//! The bar is drawn at `max(0, left)` with width `max(1, width)`, and not
//! at all when it lies entirely outside `[0, total_width]`.

use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::TimelineConfig;
use crate::models::{ScheduleDetail, TimelineRow};
use crate::time::minutes_between;

use super::{visible_range_with, VisibleRange, ZoomLevel};

/// A positioned bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBar {
    /// Unclamped offset from the range start (px, may be negative).
    pub left: f64,
    /// Unclamped width (px).
    pub width: f64,
    /// Drawn offset: `max(0, left)`.
    pub x: f64,
    /// Drawn width: `max(1, width)`.
    pub draw_width: f64,
    /// Whether the bar is wide enough to carry its work center name.
    pub show_label: bool,
    pub detail: ScheduleDetail,
}

/// The bars of one row group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowLayout {
    /// Model or work center name.
    pub name: String,
    pub bars: Vec<TimelineBar>,
}

/// A complete Gantt layout at one zoom level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    pub zoom: ZoomLevel,
    pub range: VisibleRange,
    pub total_width: f64,
    pub rows: Vec<RowLayout>,
}

/// Positions one detail, or `None` when it cannot or should not be drawn.
///
/// Skipped: unparseable timestamps, finish before start, and bars
/// entirely left of the range or starting past its right edge.
pub fn layout_bar(
    detail: &ScheduleDetail,
    range_start: NaiveDateTime,
    zoom: ZoomLevel,
    total_width: f64,
    config: &TimelineConfig,
) -> Option<TimelineBar> {
    let Some((start, finish)) = detail.interval() else {
        debug!(
            "skipping detail {}: bad interval {:?}..{:?}",
            detail.id, detail.start_time, detail.finish_time
        );
        return None;
    };

    let pph = zoom.pixels_per_hour();
    let left = minutes_between(range_start, start) / 60.0 * pph;
    let width = minutes_between(start, finish) / 60.0 * pph;

    if left + width < 0.0 || left > total_width {
        return None;
    }

    Some(TimelineBar {
        left,
        width,
        x: left.max(0.0),
        draw_width: width.max(1.0),
        show_label: width > config.min_label_width,
        detail: detail.clone(),
    })
}

/// Lays out rows inside an already-derived range.
///
/// Rows without details are omitted. The range does not depend on the
/// zoom, so switching zoom only needs this call, not a new range.
pub fn layout_rows(
    rows: &[TimelineRow],
    range: &VisibleRange,
    zoom: ZoomLevel,
    config: &TimelineConfig,
) -> Vec<RowLayout> {
    let total_width = range.total_width(zoom);
    rows.iter()
        .filter(|r| r.has_details())
        .map(|r| RowLayout {
            name: r.name.clone(),
            bars: r
                .schedule_details
                .iter()
                .filter_map(|d| layout_bar(d, range.start, zoom, total_width, config))
                .collect(),
        })
        .collect()
}

/// Derives the range and lays out every row (default configuration).
pub fn layout_timeline(rows: &[TimelineRow], zoom: ZoomLevel, now: NaiveDateTime) -> TimelineLayout {
    layout_timeline_with(rows, zoom, now, &TimelineConfig::default())
}

/// Derives the range and lays out every row.
pub fn layout_timeline_with(
    rows: &[TimelineRow],
    zoom: ZoomLevel,
    now: NaiveDateTime,
    config: &TimelineConfig,
) -> TimelineLayout {
    let range = visible_range_with(rows, now, config);
    let rows = layout_rows(rows, &range, zoom, config);
    TimelineLayout {
        zoom,
        total_width: range.total_width(zoom),
        range,
        rows,
    }
}
