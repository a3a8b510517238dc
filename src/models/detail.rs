//! Schedule detail records and timeline rows.
//!
//! A schedule detail is one operation of one part on one work center,
//! with a start and finish timestamp. Timeline endpoints return the
//! details grouped into rows, keyed either by model or by work center.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::time::parse_timestamp;

/// One scheduled operation.
///
/// Timestamps are kept as the raw strings received; parsing happens at
/// layout time so a single malformed record can be skipped instead of
/// failing the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDetail {
    pub id: i64,
    #[serde(default)]
    pub schedule_id: i64,
    #[serde(default)]
    pub part_name: String,
    #[serde(default)]
    pub work_center_name: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub finish_time: String,
    /// Planned quantity. `None` when the backend omits it.
    #[serde(default)]
    pub quantity: Option<u64>,
}

impl ScheduleDetail {
    /// Creates a detail with the given timestamps.
    pub fn new(id: i64, start_time: impl Into<String>, finish_time: impl Into<String>) -> Self {
        Self {
            id,
            schedule_id: 0,
            part_name: String::new(),
            work_center_name: String::new(),
            start_time: start_time.into(),
            finish_time: finish_time.into(),
            quantity: None,
        }
    }

    /// Sets the part name.
    pub fn with_part(mut self, part_name: impl Into<String>) -> Self {
        self.part_name = part_name.into();
        self
    }

    /// Sets the work center name.
    pub fn with_work_center(mut self, work_center_name: impl Into<String>) -> Self {
        self.work_center_name = work_center_name.into();
        self
    }

    /// Sets the planned quantity.
    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the parent schedule.
    pub fn with_schedule(mut self, schedule_id: i64) -> Self {
        self.schedule_id = schedule_id;
        self
    }

    /// Parsed start, if well-formed.
    pub fn start(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.start_time)
    }

    /// Parsed finish, if well-formed.
    pub fn finish(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.finish_time)
    }

    /// Parsed `(start, finish)` when both parse and `finish >= start`.
    pub fn interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let (start, finish) = (self.start()?, self.finish()?);
        (finish >= start).then_some((start, finish))
    }
}

/// A timeline row group: a model (or work center) and its details.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRow {
    /// Model name or work center name, depending on the endpoint.
    #[serde(alias = "modelName", alias = "workCenterName")]
    pub name: String,
    #[serde(default)]
    pub schedule_details: Vec<ScheduleDetail>,
}

impl TimelineRow {
    /// Creates an empty row.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schedule_details: Vec::new(),
        }
    }

    /// Adds a detail.
    pub fn with_detail(mut self, detail: ScheduleDetail) -> Self {
        self.schedule_details.push(detail);
        self
    }

    /// Whether the row has anything to draw.
    pub fn has_details(&self) -> bool {
        !self.schedule_details.is_empty()
    }
}
