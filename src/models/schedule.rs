//! Schedule records with per-process date plans.
//!
//! A schedule is an order for a quantity of one part for one customer.
//! Its process plans list, for each process in routing order, the dates
//! on which that process runs.
//!
//! Two backend revisions disagree on field names (`id` vs `scheduleId`,
//! `quantity` vs `qty`, nested `part`/`customer` objects vs flat names,
//! `scheduleDetails` vs `schedulesDetails`). Each name is its own
//! optional field, so a record carrying both still decodes; accessors
//! prefer the newer name and apply the display fallbacks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::parse_date;

const FALLBACK_PART: &str = "Part";
const FALLBACK_PART_TYPE: &str = "-";
const FALLBACK_CUSTOMER: &str = "Customer";

/// Nested part reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Nested customer reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// The dates one process runs for a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessPlan {
    /// Routing position (1-based).
    pub order: i64,
    pub process_name: String,
    pub target_qty_per_day: u64,
    pub target_qty_total: u64,
    /// ISO dates; unparseable entries are ignored downstream.
    pub dates: Vec<String>,
}

impl ProcessPlan {
    pub fn new(order: i64, process_name: impl Into<String>) -> Self {
        Self {
            order,
            process_name: process_name.into(),
            ..Self::default()
        }
    }

    /// Sets the per-day and total targets.
    pub fn with_targets(mut self, per_day: u64, total: u64) -> Self {
        self.target_qty_per_day = per_day;
        self.target_qty_total = total;
        self
    }

    /// Sets the run dates.
    pub fn with_dates<I, S>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dates = dates.into_iter().map(Into::into).collect();
        self
    }

    /// Run dates that parse, in input order.
    pub fn valid_dates(&self) -> Vec<NaiveDate> {
        self.dates.iter().filter_map(|d| parse_date(d)).collect()
    }
}

/// A schedule (order) and its process plans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleRecord {
    pub schedule_id: Option<i64>,
    /// Older name of `schedule_id`.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<i64>,
    pub target: Option<String>,
    pub qty: Option<u64>,
    /// Older name of `qty`.
    #[serde(rename = "quantity", skip_serializing_if = "Option::is_none")]
    pub legacy_quantity: Option<u64>,
    pub part: Option<PartRef>,
    pub part_name: Option<String>,
    pub part_type: Option<String>,
    pub customer: Option<CustomerRef>,
    pub customer_name: Option<String>,
    pub schedules_details: Option<Vec<ProcessPlan>>,
    /// Older name of `schedules_details`.
    #[serde(rename = "scheduleDetails", skip_serializing_if = "Option::is_none")]
    pub legacy_details: Option<Vec<ProcessPlan>>,
}

impl ScheduleRecord {
    pub fn new(schedule_id: i64, qty: u64) -> Self {
        Self {
            schedule_id: Some(schedule_id),
            qty: Some(qty),
            ..Self::default()
        }
    }

    /// Sets the part.
    pub fn with_part(mut self, name: impl Into<String>, kind: impl Into<String>) -> Self {
        self.part = Some(PartRef {
            name: Some(name.into()),
            kind: Some(kind.into()),
        });
        self
    }

    /// Sets the customer.
    pub fn with_customer(mut self, name: impl Into<String>) -> Self {
        self.customer = Some(CustomerRef {
            name: Some(name.into()),
        });
        self
    }

    /// Adds a process plan.
    pub fn with_plan(mut self, plan: ProcessPlan) -> Self {
        self.schedules_details.get_or_insert_with(Vec::new).push(plan);
        self
    }

    /// `scheduleId`, else `id`, else 0.
    pub fn schedule_id(&self) -> i64 {
        self.schedule_id.or(self.legacy_id).unwrap_or(0)
    }

    /// Ordered quantity: `qty`, else `quantity`, else 0.
    pub fn quantity(&self) -> u64 {
        self.qty.or(self.legacy_quantity).unwrap_or(0)
    }

    /// Process plans: `schedulesDetails`, else `scheduleDetails`.
    pub fn plans(&self) -> &[ProcessPlan] {
        self.schedules_details
            .as_deref()
            .or(self.legacy_details.as_deref())
            .unwrap_or(&[])
    }

    /// Part name with fallback.
    pub fn part_name(&self) -> &str {
        self.part
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .or(self.part_name.as_deref())
            .unwrap_or(FALLBACK_PART)
    }

    /// Part type with fallback.
    pub fn part_type(&self) -> &str {
        self.part
            .as_ref()
            .and_then(|p| p.kind.as_deref())
            .or(self.part_type.as_deref())
            .unwrap_or(FALLBACK_PART_TYPE)
    }

    /// Customer name with fallback.
    pub fn customer_name(&self) -> &str {
        self.customer
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .or(self.customer_name.as_deref())
            .unwrap_or(FALLBACK_CUSTOMER)
    }

    /// Row title: `"{part} ({type}) · {customer}"`.
    pub fn title(&self) -> String {
        format!(
            "{} ({}) · {}",
            self.part_name(),
            self.part_type(),
            self.customer_name()
        )
    }
}
