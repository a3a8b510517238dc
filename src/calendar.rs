//! Calendar event builders.
//!
//! Two calendar views consume process plans:
//!
//! - **Daily schedule**: one all-day event per (date, process), titled
//!   `"{process}: {total}"` and colored by the process's list position.
//! - **Single process**: one all-day event per planned part, titled
//!   `"{part} — {qty}"` and colored by its PO number.
//!
//! Both drop Saturdays and Sundays: production is assumed not to run on
//! weekends, so data recorded for a weekend date exists in the aggregate
//! but never renders as an event.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate_by_date_and_process, DailyAggregate, DayItem};
use crate::color::{colors_for_index_with, colors_for_po_number_with, ColorPair, PoColors};
use crate::config::TimelineConfig;
use crate::models::{ProcessEntry, ProcessTimeline};
use crate::time::{date_key, parse_date, weekday_number};

/// A daily-schedule calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// `"{date}-{process}"`.
    pub id: String,
    pub title: String,
    /// `YYYY-MM-DD`.
    pub start: String,
    pub all_day: bool,
    pub group_index: usize,
    pub group_name: String,
    pub total_quantity: u64,
    pub items: Vec<DayItem>,
    pub colors: ColorPair,
}

/// A single-process calendar event (one planned part).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailEvent {
    /// `"event-{process_id}-{date_idx}-{detail_idx}"`.
    pub id: String,
    pub title: String,
    pub start: String,
    pub all_day: bool,
    pub quantity: u64,
    pub part_name: String,
    pub po_number: String,
    pub process_name: String,
    pub colors: PoColors,
}

/// Whether `date` is a non-production day under `config`.
#[inline]
pub fn is_weekend(date: NaiveDate, config: &TimelineConfig) -> bool {
    config.is_weekend(weekday_number(date))
}

/// Daily-schedule events with the default configuration.
pub fn build_calendar_events(processes: &[ProcessTimeline]) -> Vec<CalendarEvent> {
    build_calendar_events_with(processes, &TimelineConfig::default())
}

/// Daily-schedule events: aggregate, then one event per (date, process).
pub fn build_calendar_events_with(
    processes: &[ProcessTimeline],
    config: &TimelineConfig,
) -> Vec<CalendarEvent> {
    events_from_aggregate(&aggregate_by_date_and_process(processes), config)
}

/// Events from an existing aggregate, ordered by date then group index.
pub fn events_from_aggregate(aggregate: &DailyAggregate, config: &TimelineConfig) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for date in aggregate.dates() {
        // Aggregate keys are normalized dates; a miss here means corruption
        let Some(day) = parse_date(date) else { continue };
        if is_weekend(day, config) {
            debug!("dropping weekend date {date} from calendar");
            continue;
        }

        for (name, grouped) in aggregate.groups_on(date) {
            events.push(CalendarEvent {
                id: format!("{date}-{name}"),
                title: format!("{name}: {}", grouped.total_quantity),
                start: date.to_string(),
                all_day: true,
                group_index: grouped.group_index,
                group_name: name.to_string(),
                total_quantity: grouped.total_quantity,
                items: grouped.items.clone(),
                colors: colors_for_index_with(grouped.group_index, config),
            });
        }
    }

    events
}

/// Single-process events with the default configuration.
pub fn build_detail_events(process_id: i64, timeline: &ProcessTimeline) -> Vec<DetailEvent> {
    build_detail_events_with(process_id, timeline, &TimelineConfig::default())
}

/// Single-process events: one per planned part, PO-colored.
pub fn build_detail_events_with(
    process_id: i64,
    timeline: &ProcessTimeline,
    config: &TimelineConfig,
) -> Vec<DetailEvent> {
    let mut events = Vec::new();

    for (date_idx, day) in timeline.data_list.iter().enumerate() {
        let Some(date) = parse_date(&day.date) else {
            debug!(
                "skipping day of process '{}': unparseable date {:?}",
                timeline.process_name, day.date
            );
            continue;
        };
        if is_weekend(date, config) {
            continue;
        }
        let start = date.format("%Y-%m-%d").to_string();

        for (detail_idx, entry) in day.process_detail.iter().enumerate() {
            let po = entry.po_key();
            events.push(DetailEvent {
                id: format!("event-{process_id}-{date_idx}-{detail_idx}"),
                title: format!("{} — {}", entry.part_name, entry.quantity),
                start: start.clone(),
                all_day: true,
                quantity: entry.quantity,
                part_name: entry.part_name.clone(),
                po_number: po.to_string(),
                process_name: timeline.process_name.clone(),
                colors: colors_for_po_number_with(po, config),
            });
        }
    }

    events
}

/// Entries planned on `date` (`YYYY-MM-DD`), for a drill-down view.
///
/// Matches the first day whose date key equals `date`; weekends are not
/// filtered here, so weekend data stays inspectable.
pub fn entries_on<'a>(timeline: &'a ProcessTimeline, date: &str) -> &'a [ProcessEntry] {
    timeline
        .data_list
        .iter()
        .find(|d| date_key(&d.date) == date)
        .map(|d| d.process_detail.as_slice())
        .unwrap_or(&[])
}
