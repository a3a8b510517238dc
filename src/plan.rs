//! Per-schedule process plan timeline.
//!
//! One row per process (in routing order), one item per run date. Items
//! cover the production day (04:00–20:00 by default) rather than the
//! whole calendar day so consecutive days render as separate blocks.
//!
//! # Rules
//! - Sunday dates are removed; plans left without dates are dropped.
//! - With a date filter, a plan is dropped when its first date precedes
//!   `from` or its last date follows `to` (day granularity).
//! - The initial window runs from the earliest first date minus the
//!   padding to the latest last date plus the padding (12 h). Dates are
//!   taken at midnight. When filtering removed every plan, the window is
//!   derived from the unfiltered plans; when there are none, it is today.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::config::TimelineConfig;
use crate::error::{Result, TimelineError};
use crate::format::range_label;
use crate::models::{ProcessPlan, ScheduleRecord};
use crate::time::{is_sunday, parse_date};

/// Optional inclusive day window applied to plans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateFilter {
    /// No filtering.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Parses optional ISO bounds; empty strings mean "unbounded".
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Result<Self> {
        let bound = |raw: Option<&str>| -> Result<Option<NaiveDate>> {
            match raw.map(str::trim).filter(|s| !s.is_empty()) {
                None => Ok(None),
                Some(s) => parse_date(s)
                    .map(Some)
                    .ok_or_else(|| TimelineError::DateParse(s.to_string())),
            }
        };
        Ok(Self {
            from: bound(from)?,
            to: bound(to)?,
        })
    }

    /// Whether a plan spanning `[first, last]` passes.
    pub fn admits(&self, first: NaiveDate, last: NaiveDate) -> bool {
        if self.from.is_some_and(|from| first < from) {
            return false;
        }
        if self.to.is_some_and(|to| last > to) {
            return false;
        }
        true
    }
}

/// A timeline row: one process of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanGroup {
    /// Routing order.
    pub id: i64,
    /// `"{order}. {process}"`.
    pub title: String,
}

/// One production day of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    /// Sequential, 1-based.
    pub id: usize,
    /// Routing order of the owning process.
    pub group: i64,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// The plan timeline of one schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTimeline {
    pub schedule_id: i64,
    /// `"{part} ({type})"`.
    pub title: String,
    pub customer_name: String,
    /// Plans that survived filtering, dates normalized to `YYYY-MM-DD`.
    pub plans: Vec<ProcessPlan>,
    pub groups: Vec<PlanGroup>,
    pub items: Vec<PlanItem>,
    pub visible_start: NaiveDateTime,
    pub visible_end: NaiveDateTime,
    pub range_label: String,
    /// Sum of `target_qty_total` over the retained plans.
    pub total_target: u64,
}

/// Drops Sunday and unparseable dates, then plans that end up empty or
/// fall outside `filter`.
pub fn filter_plans(plans: &[ProcessPlan], filter: &DateFilter) -> Vec<ProcessPlan> {
    plans
        .iter()
        .filter_map(|plan| {
            let dates: Vec<NaiveDate> = plan
                .valid_dates()
                .into_iter()
                .filter(|d| !is_sunday(*d))
                .collect();
            let (first, last) = (*dates.first()?, *dates.last()?);
            if !filter.admits(first, last) {
                return None;
            }
            Some(ProcessPlan {
                dates: dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect(),
                ..plan.clone()
            })
        })
        .collect()
}

/// Items for each run date, spanning the configured production day.
pub fn plan_items(plans: &[ProcessPlan], config: &TimelineConfig) -> Vec<PlanItem> {
    let day_start = TimeDelta::hours(config.work_day_start_hour as i64);
    let day_end = TimeDelta::hours(config.work_day_end_hour as i64);

    plans
        .iter()
        .flat_map(|plan| {
            plan.valid_dates().into_iter().map(move |date| {
                let midnight = date.and_time(NaiveTime::MIN);
                (plan, midnight + day_start, midnight + day_end)
            })
        })
        .enumerate()
        .map(|(i, (plan, start, end))| PlanItem {
            id: i + 1,
            group: plan.order,
            title: plan.process_name.clone(),
            start,
            end,
        })
        .collect()
}

/// Initial window over `plans`, or `None` when no plan has a valid
/// first and last date or the padded window is not representable.
fn padded_range(
    plans: &[ProcessPlan],
    config: &TimelineConfig,
) -> Option<(NaiveDateTime, NaiveDateTime, String)> {
    let first = plans
        .iter()
        .filter_map(|p| p.dates.first().and_then(|d| parse_date(d)))
        .min()?;
    let last = plans
        .iter()
        .filter_map(|p| p.dates.last().and_then(|d| parse_date(d)))
        .max()?;
    let pad = TimeDelta::try_hours(config.range_padding_hours)?;
    Some((
        first.and_time(NaiveTime::MIN).checked_sub_signed(pad)?,
        last.and_time(NaiveTime::MIN).checked_add_signed(pad)?,
        range_label(first, last),
    ))
}

/// Builds the plan timeline with the default configuration.
pub fn build_plan_timeline(
    schedule: &ScheduleRecord,
    filter: &DateFilter,
    now: NaiveDateTime,
) -> PlanTimeline {
    build_plan_timeline_with(schedule, filter, now, &TimelineConfig::default())
}

/// Builds the plan timeline of one schedule.
pub fn build_plan_timeline_with(
    schedule: &ScheduleRecord,
    filter: &DateFilter,
    now: NaiveDateTime,
    config: &TimelineConfig,
) -> PlanTimeline {
    let plans = filter_plans(schedule.plans(), filter);

    let (visible_start, visible_end, label) = padded_range(&plans, config)
        .or_else(|| padded_range(schedule.plans(), config))
        .unwrap_or_else(|| {
            let today = now.date();
            let midnight = today.and_time(NaiveTime::MIN);
            let end = midnight
                .checked_add_signed(TimeDelta::days(1))
                .unwrap_or(NaiveDateTime::MAX);
            (midnight, end, range_label(today, today))
        });

    let groups = plans
        .iter()
        .map(|p| PlanGroup {
            id: p.order,
            title: format!("{}. {}", p.order, p.process_name),
        })
        .collect();

    PlanTimeline {
        schedule_id: schedule.schedule_id(),
        title: format!("{} ({})", schedule.part_name(), schedule.part_type()),
        customer_name: schedule.customer_name().to_string(),
        groups,
        items: plan_items(&plans, config),
        visible_start,
        visible_end,
        range_label: label,
        total_target: plans
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.target_qty_total)),
        plans,
    }
}
