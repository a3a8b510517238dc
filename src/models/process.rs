//! Per-process daily production plans.
//!
//! Returned by the by-process schedule endpoints: for each process, a
//! list of dates, and for each date the parts (with PO numbers and
//! quantities) planned on that process.

use serde::{Deserialize, Serialize};

/// One part planned on one process on one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessEntry {
    #[serde(default)]
    pub part_name: String,
    #[serde(default)]
    pub quantity: u64,
    /// Raw PO label; may carry a suffix after a space (`"PO-12 (rev 2)"`).
    #[serde(default)]
    pub po_number: Option<String>,
}

impl ProcessEntry {
    pub fn new(part_name: impl Into<String>, quantity: u64) -> Self {
        Self {
            part_name: part_name.into(),
            quantity,
            po_number: None,
        }
    }

    /// Sets the PO label.
    pub fn with_po(mut self, po_number: impl Into<String>) -> Self {
        self.po_number = Some(po_number.into());
        self
    }

    /// PO key used for coloring: the first whitespace-separated token.
    pub fn po_key(&self) -> &str {
        self.po_number
            .as_deref()
            .and_then(|po| po.split(' ').next())
            .unwrap_or("")
    }
}

/// All entries of one process on one date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDay {
    /// ISO date, possibly with a time component.
    pub date: String,
    #[serde(default)]
    pub process_detail: Vec<ProcessEntry>,
}

impl ProcessDay {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            process_detail: Vec::new(),
        }
    }

    /// Adds an entry.
    pub fn with_entry(mut self, entry: ProcessEntry) -> Self {
        self.process_detail.push(entry);
        self
    }

    /// Sum of entry quantities, saturating at `u64::MAX`.
    pub fn total_quantity(&self) -> u64 {
        self.process_detail
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.quantity))
    }
}

/// A process and its dated plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessTimeline {
    pub process_name: String,
    #[serde(default)]
    pub data_list: Vec<ProcessDay>,
}

impl ProcessTimeline {
    pub fn new(process_name: impl Into<String>) -> Self {
        Self {
            process_name: process_name.into(),
            data_list: Vec::new(),
        }
    }

    /// Adds a dated plan.
    pub fn with_day(mut self, day: ProcessDay) -> Self {
        self.data_list.push(day);
        self
    }

    /// Sum of quantities across every date, saturating at `u64::MAX`.
    pub fn total_quantity(&self) -> u64 {
        self.data_list
            .iter()
            .fold(0u64, |acc, d| acc.saturating_add(d.total_quantity()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_po_key_takes_first_token() {
        assert_eq!(ProcessEntry::new("A", 1).with_po("PO-12 (rev 2)").po_key(), "PO-12");
        assert_eq!(ProcessEntry::new("A", 1).with_po("PO-12").po_key(), "PO-12");
        assert_eq!(ProcessEntry::new("A", 1).po_key(), "");
    }

    #[test]
    fn test_deserialize_process_timeline() {
        let json = r#"{
            "processName": "Cutting",
            "dataList": [
                {"date": "2024-06-03T00:00:00", "processDetail": [
                    {"partName": "Shaft", "quantity": 50, "poNumber": "PO-1 A"},
                    {"partName": "Gear", "quantity": 30, "poNumber": null}
                ]},
                {"date": "2024-06-04"}
            ]
        }"#;
        let timeline: ProcessTimeline = serde_json::from_str(json).unwrap();
        assert_eq!(timeline.data_list.len(), 2);
        assert_eq!(timeline.data_list[0].total_quantity(), 80);
        assert!(timeline.data_list[1].process_detail.is_empty());
        assert_eq!(timeline.total_quantity(), 80);
    }

    #[test]
    fn test_totals_saturate() {
        let day = ProcessDay::new("2024-06-03")
            .with_entry(ProcessEntry::new("A", u64::MAX))
            .with_entry(ProcessEntry::new("B", 5));
        assert_eq!(day.total_quantity(), u64::MAX);

        let timeline = ProcessTimeline::new("Cutting")
            .with_day(day)
            .with_day(ProcessDay::new("2024-06-04").with_entry(ProcessEntry::new("C", 1)));
        assert_eq!(timeline.total_quantity(), u64::MAX);
    }
}
