//! Grouping aggregator: daily quantity totals per process.
//!
//! Flattens per-process dated plans into `date → group → totals`. The
//! result drives both the daily calendar events and the per-date
//! drill-down list.
//!
//! # Rules
//! - The date key is the text before the first `T`; entries whose key
//!   is not a calendar date are dropped.
//! - A group's index is its position in the input list and never
//!   changes for the lifetime of the result. If the same process name
//!   appears twice, the first index wins and items merge.
//! - Items accumulate in input order.
//! - A listed date with no entries still yields a zero-total group.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::ProcessTimeline;
use crate::time::parse_date;

/// One contributing entry of a grouped day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayItem {
    /// Normalized `YYYY-MM-DD`.
    pub date: String,
    pub quantity: u64,
    pub part_name: String,
    /// PO key (first token of the raw PO label).
    pub po_number: String,
}

/// Totals of one group on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedDay {
    pub total_quantity: u64,
    pub items: Vec<DayItem>,
    /// Position of the group in the source list (for color assignment).
    pub group_index: usize,
}

/// `date → group name → totals`, both levels ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAggregate {
    days: BTreeMap<String, BTreeMap<String, GroupedDay>>,
}

impl DailyAggregate {
    /// Groups on `date`, or `None` if nothing was recorded for it.
    pub fn get(&self, date: &str) -> Option<&BTreeMap<String, GroupedDay>> {
        self.days.get(date)
    }

    /// Groups on `date` ordered by group index.
    pub fn groups_on(&self, date: &str) -> Vec<(&str, &GroupedDay)> {
        let mut groups: Vec<(&str, &GroupedDay)> = self
            .days
            .get(date)
            .map(|g| g.iter().map(|(name, day)| (name.as_str(), day)).collect())
            .unwrap_or_default();
        groups.sort_by_key(|(_, day)| day.group_index);
        groups
    }

    /// Sum over all groups on `date`.
    pub fn day_total(&self, date: &str) -> u64 {
        self.days
            .get(date)
            .map(|g| g.values().fold(0u64, |acc, d| acc.saturating_add(d.total_quantity)))
            .unwrap_or(0)
    }

    /// Dates with data, ascending.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    /// Iterates `(date, groups)` in date order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, GroupedDay>)> {
        self.days.iter().map(|(d, g)| (d.as_str(), g))
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of dates with data.
    pub fn len(&self) -> usize {
        self.days.len()
    }
}

/// Aggregates per-process plans by date and process name.
pub fn aggregate_by_date_and_process(processes: &[ProcessTimeline]) -> DailyAggregate {
    let mut days: BTreeMap<String, BTreeMap<String, GroupedDay>> = BTreeMap::new();

    for (group_index, process) in processes.iter().enumerate() {
        for day in &process.data_list {
            let Some(date) = parse_date(&day.date) else {
                debug!(
                    "skipping day of process '{}': unparseable date {:?}",
                    process.process_name, day.date
                );
                continue;
            };
            let date_key = date.format("%Y-%m-%d").to_string();

            let grouped = days
                .entry(date_key.clone())
                .or_default()
                .entry(process.process_name.clone())
                .or_insert_with(|| GroupedDay {
                    total_quantity: 0,
                    items: Vec::new(),
                    group_index,
                });

            for entry in &day.process_detail {
                grouped.total_quantity = grouped.total_quantity.saturating_add(entry.quantity);
                grouped.items.push(DayItem {
                    date: date_key.clone(),
                    quantity: entry.quantity,
                    part_name: entry.part_name.clone(),
                    po_number: entry.po_key().to_string(),
                });
            }
        }
    }

    DailyAggregate { days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessDay, ProcessEntry};

    fn cutting() -> ProcessTimeline {
        ProcessTimeline::new("Cutting").with_day(
            ProcessDay::new("2024-06-03")
                .with_entry(ProcessEntry::new("Shaft", 50).with_po("PO-1 rev"))
                .with_entry(ProcessEntry::new("Gear", 30).with_po("PO-2")),
        )
    }

    #[test]
    fn test_sums_same_date_and_group() {
        let agg = aggregate_by_date_and_process(&[cutting()]);
        let group = &agg.get("2024-06-03").unwrap()["Cutting"];
        assert_eq!(group.total_quantity, 80);
        assert_eq!(group.items.len(), 2);
        assert_eq!(group.items[0].part_name, "Shaft"); // input order
        assert_eq!(group.items[0].po_number, "PO-1");
        assert_eq!(group.group_index, 0);
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let processes = [
            ProcessTimeline::new("Cutting").with_day(
                ProcessDay::new("2024-06-03")
                    .with_entry(ProcessEntry::new("Shaft", u64::MAX))
                    .with_entry(ProcessEntry::new("Gear", 1)),
            ),
            ProcessTimeline::new("Welding")
                .with_day(ProcessDay::new("2024-06-03").with_entry(ProcessEntry::new("Shaft", 7))),
        ];
        let agg = aggregate_by_date_and_process(&processes);
        assert_eq!(agg.get("2024-06-03").unwrap()["Cutting"].total_quantity, u64::MAX);
        assert_eq!(agg.day_total("2024-06-03"), u64::MAX);
    }

    #[test]
    fn test_time_component_is_truncated() {
        let p = ProcessTimeline::new("Welding")
            .with_day(ProcessDay::new("2024-06-03T00:00:00.000Z").with_entry(ProcessEntry::new("A", 5)))
            .with_day(ProcessDay::new("2024-06-03T12:00:00").with_entry(ProcessEntry::new("B", 7)));
        let agg = aggregate_by_date_and_process(&[p]);
        assert_eq!(agg.len(), 1);
        assert_eq!(agg.day_total("2024-06-03"), 12);
    }

    #[test]
    fn test_unparseable_dates_are_skipped() {
        let p = ProcessTimeline::new("Cutting")
            .with_day(ProcessDay::new("garbage").with_entry(ProcessEntry::new("A", 99)))
            .with_day(ProcessDay::new("2024-06-04").with_entry(ProcessEntry::new("B", 1)));
        let agg = aggregate_by_date_and_process(&[p]);
        assert_eq!(agg.dates().collect::<Vec<_>>(), vec!["2024-06-04"]);
    }

    #[test]
    fn test_group_index_follows_source_order() {
        let painting = ProcessTimeline::new("Painting")
            .with_day(ProcessDay::new("2024-06-03").with_entry(ProcessEntry::new("Shaft", 10)));
        let agg = aggregate_by_date_and_process(&[painting, cutting()]);
        let groups = agg.groups_on("2024-06-03");
        assert_eq!(groups[0].0, "Painting");
        assert_eq!(groups[0].1.group_index, 0);
        assert_eq!(groups[1].0, "Cutting");
        assert_eq!(groups[1].1.group_index, 1);
        assert_eq!(agg.day_total("2024-06-03"), 90);
    }

    #[test]
    fn test_duplicate_group_name_keeps_first_index() {
        let again = ProcessTimeline::new("Cutting")
            .with_day(ProcessDay::new("2024-06-03").with_entry(ProcessEntry::new("Bolt", 5)));
        let agg = aggregate_by_date_and_process(&[cutting(), again]);
        let group = &agg.get("2024-06-03").unwrap()["Cutting"];
        assert_eq!(group.group_index, 0);
        assert_eq!(group.total_quantity, 85);
        assert_eq!(group.items.len(), 3);
    }

    #[test]
    fn test_empty_day_yields_zero_group() {
        let p = ProcessTimeline::new("Idle").with_day(ProcessDay::new("2024-06-05"));
        let agg = aggregate_by_date_and_process(&[p]);
        assert_eq!(agg.get("2024-06-05").unwrap()["Idle"].total_quantity, 0);
    }

    #[test]
    fn test_deterministic_on_cloned_input() {
        let input = vec![cutting()];
        let cloned = input.clone();
        assert_eq!(
            aggregate_by_date_and_process(&input),
            aggregate_by_date_and_process(&cloned)
        );
    }

    #[test]
    fn test_missing_date_queries() {
        let agg = aggregate_by_date_and_process(&[]);
        assert!(agg.is_empty());
        assert!(agg.get("2024-06-03").is_none());
        assert!(agg.groups_on("2024-06-03").is_empty());
        assert_eq!(agg.day_total("2024-06-03"), 0);
    }
}
