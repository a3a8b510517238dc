//! Visible range derivation for the Gantt view.
//!
//! # Rules
//! - No rows at all: `[now truncated to the hour, +N days)`.
//! - Rows but no valid start timestamp: `[today 00:00, +N days)`.
//! - Otherwise the range starts at midnight of the earliest valid start
//!   and spans `whole_days(latest_finish − start) + 1` days (at least
//!   one), so the day holding the latest finish is always included.
//!   When the latest finish is not after the start, the range falls
//!   back to `N` days.
//!
//! `N` is `TimelineConfig::default_window_days` (7). A start is valid
//! when it parses and lies after 2000-01-01; only records with a valid
//! start contribute their finish to the maximum.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::TimelineConfig;
use crate::models::TimelineRow;
use crate::time::{is_valid_timestamp, start_of_day, start_of_hour};

use super::ZoomLevel;

/// The time window drawn by the Gantt view: `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Start of each day column.
    pub days: Vec<NaiveDateTime>,
}

impl VisibleRange {
    /// A range of `days` whole days from `start`.
    ///
    /// Columns that would fall past the last representable date are
    /// dropped; the range then ends at `NaiveDateTime::MAX`.
    pub fn from_start(start: NaiveDateTime, days: i64) -> Self {
        let columns: Vec<NaiveDateTime> = (0..days.max(1))
            .map_while(|i| start.checked_add_signed(TimeDelta::try_days(i)?))
            .collect();
        let end = columns
            .last()
            .and_then(|d| d.checked_add_signed(TimeDelta::days(1)))
            .unwrap_or(NaiveDateTime::MAX);
        Self {
            start,
            end,
            days: columns,
        }
    }

    /// Number of day columns.
    #[inline]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Hours covered by the day columns.
    #[inline]
    pub fn total_hours(&self) -> i64 {
        self.days.len() as i64 * 24
    }

    /// Full width at `zoom` (px).
    #[inline]
    pub fn total_width(&self, zoom: ZoomLevel) -> f64 {
        self.total_hours() as f64 * zoom.pixels_per_hour()
    }

    /// Calendar dates of the day columns.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|d| d.date()).collect()
    }

    /// Whether `t` falls inside `[start, end)`.
    #[inline]
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        t >= self.start && t < self.end
    }
}

/// Derives the visible range with the default configuration.
pub fn visible_range(rows: &[TimelineRow], now: NaiveDateTime) -> VisibleRange {
    visible_range_with(rows, now, &TimelineConfig::default())
}

/// Derives the visible range from every detail of every row.
///
/// `now` is only consulted for the fallback windows.
pub fn visible_range_with(
    rows: &[TimelineRow],
    now: NaiveDateTime,
    config: &TimelineConfig,
) -> VisibleRange {
    let window = config.default_window_days;

    if rows.is_empty() {
        return VisibleRange::from_start(start_of_hour(now), window);
    }

    let mut min_start: Option<NaiveDateTime> = None;
    let mut max_finish: Option<NaiveDateTime> = None;

    for detail in rows.iter().flat_map(|r| &r.schedule_details) {
        let Some(start) = detail.start() else {
            debug!("detail {} has unparseable start {:?}", detail.id, detail.start_time);
            continue;
        };
        if !is_valid_timestamp(start, config.valid_after_ms) {
            debug!("detail {} start {start} is a sentinel, ignored for range", detail.id);
            continue;
        }
        min_start = Some(min_start.map_or(start, |m| m.min(start)));
        if let Some(finish) = detail.finish() {
            max_finish = Some(max_finish.map_or(finish, |m| m.max(finish)));
        }
    }

    let Some(min_start) = min_start else {
        debug!("no valid timestamps, falling back to a {window}-day window");
        return VisibleRange::from_start(start_of_day(now), window);
    };

    let start = start_of_day(min_start);
    match max_finish {
        Some(finish) if finish > start => {
            let whole_days = (finish - start).num_days();
            VisibleRange::from_start(start, (whole_days + 1).max(1))
        }
        _ => VisibleRange::from_start(start, window),
    }
}
