//! Month-span quantity distribution.
//!
//! Spreads a schedule's ordered quantity over the calendar months its
//! process plans touch, weighted by active (non-Sunday) days per month.
//!
//! # Algorithm
//! For months `m_1 … m_k` in chronological order with active-day counts
//! `d_i` and `D = Σ d_i`:
//!
//! ```text
//! share_i = floor(total * d_i / D)        for i < k
//! share_k = total - Σ_{i<k} share_i
//! ```
//!
//! Truncation error accumulates into the last month, so shares always
//! sum to `total` exactly. Months whose share is zero are omitted.
//!
//! Each listed date counts once per plan that lists it, so a month
//! where three processes run on the same day weighs three days.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::{number_format, range_label};
use crate::models::{ProcessPlan, ScheduleRecord};
use crate::time::{is_sunday, month_key};

/// One month's slice of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSpan {
    /// `YYYY-MM`.
    pub month_key: String,
    pub active_days: u32,
    /// Earliest active date in the month.
    pub start: NaiveDate,
    /// Latest active date in the month.
    pub end: NaiveDate,
    pub quantity: u64,
}

/// A month span placed on a schedule row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyItem {
    /// 1-based, sequential across all rows.
    pub id: usize,
    /// 1-based row (schedule position).
    pub group: usize,
    /// `"{qty} PO"`.
    pub title: String,
    pub span: MonthSpan,
    pub part_name: String,
    pub customer_name: String,
}

/// A schedule row of the monthly view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyGroup {
    pub id: usize,
    pub title: String,
}

/// The monthly view across all schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTimeline {
    pub groups: Vec<MonthlyGroup>,
    pub items: Vec<MonthlyItem>,
    /// Earliest and latest valid plan date; both `today` when none.
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub range_label: String,
    /// Sum of ordered quantities over all schedules.
    pub grand_total: u64,
}

struct MonthBucket {
    active_days: u32,
    start: NaiveDate,
    end: NaiveDate,
}

/// Apportions `total` across the months touched by `plans`.
///
/// Returns nothing when `total` is zero or no plan has an active date.
pub fn distribute_by_month(total: u64, plans: &[ProcessPlan]) -> Vec<MonthSpan> {
    let mut buckets: BTreeMap<String, MonthBucket> = BTreeMap::new();
    for date in plans
        .iter()
        .flat_map(ProcessPlan::valid_dates)
        .filter(|d| !is_sunday(*d))
    {
        buckets
            .entry(month_key(date))
            .and_modify(|b| {
                b.active_days += 1;
                b.start = b.start.min(date);
                b.end = b.end.max(date);
            })
            .or_insert(MonthBucket {
                active_days: 1,
                start: date,
                end: date,
            });
    }

    let total_days: u64 = buckets.values().map(|b| b.active_days as u64).sum();
    if total_days == 0 || total == 0 {
        return Vec::new();
    }

    let last = buckets.len() - 1;
    let mut assigned: u64 = 0;
    let mut spans = Vec::with_capacity(buckets.len());

    for (i, (month_key, bucket)) in buckets.into_iter().enumerate() {
        let quantity = if i == last {
            total - assigned
        } else {
            // u128: total * days may exceed u64 for very large orders
            let share = (total as u128 * bucket.active_days as u128 / total_days as u128) as u64;
            assigned += share;
            share
        };
        if quantity == 0 {
            continue;
        }
        spans.push(MonthSpan {
            month_key,
            active_days: bucket.active_days,
            start: bucket.start,
            end: bucket.end,
            quantity,
        });
    }

    spans
}

/// Builds the monthly view: one row per schedule, one item per month span.
///
/// `today` anchors the range label when no plan has a valid date.
pub fn build_monthly_timeline(schedules: &[ScheduleRecord], today: NaiveDate) -> MonthlyTimeline {
    let mut items = Vec::new();
    let mut next_id = 1;
    let mut first: Option<NaiveDate> = None;
    let mut last: Option<NaiveDate> = None;

    for (idx, schedule) in schedules.iter().enumerate() {
        for date in schedule.plans().iter().flat_map(ProcessPlan::valid_dates) {
            first = Some(first.map_or(date, |f| f.min(date)));
            last = Some(last.map_or(date, |l| l.max(date)));
        }

        for span in distribute_by_month(schedule.quantity(), schedule.plans()) {
            items.push(MonthlyItem {
                id: next_id,
                group: idx + 1,
                title: format!("{} PO", number_format(span.quantity)),
                span,
                part_name: schedule.part_name().to_string(),
                customer_name: schedule.customer_name().to_string(),
            });
            next_id += 1;
        }
    }

    let groups = schedules
        .iter()
        .enumerate()
        .map(|(idx, s)| MonthlyGroup {
            id: idx + 1,
            title: s.title(),
        })
        .collect();

    let first_date = first.unwrap_or(today);
    let last_date = last.unwrap_or(today);

    MonthlyTimeline {
        groups,
        items,
        first_date,
        last_date,
        range_label: range_label(first_date, last_date),
        grand_total: schedules
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.quantity())),
    }
}
