//! Production timeline layout for manufacturing schedules.
//!
//! Turns the backend's schedule payloads into renderable views: a daily
//! calendar of process output, Gantt bars on an hour grid, a per-schedule
//! process plan, and a monthly view with the ordered quantity spread over
//! the months the plan touches. Every view is a pure function of its
//! input; nothing here performs I/O or keeps state between calls.
//!
//! # Modules
//!
//! - **`models`**: Wire types: `ScheduleDetail`, `TimelineRow`,
//!   `ProcessTimeline`, `ScheduleRecord`, `ApiResponse`, form payloads
//! - **`time`**: Timestamp parsing, day/hour truncation, month keys
//! - **`aggregate`**: Per-day, per-process quantity totals
//! - **`calendar`**: Calendar events (all processes, or one process by PO)
//! - **`color`**: Palette lookup and PO-number hashing with contrast text
//! - **`layout`**: Zoom levels, visible range, bar geometry
//! - **`plan`**: Process plan timeline of one schedule
//! - **`distribute`**: Month-span quantity distribution, monthly view
//! - **`format`**: Thousands separators and date range labels
//! - **`memo`**: Single-slot cache for layout results
//! - **`config`**: Tunable constants (palette, weekend, work day)
//! - **`validation`**: Form checks and timeline record audits
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use u_timeline::layout::{layout_timeline, ZoomLevel};
//! use u_timeline::models::{ScheduleDetail, TimelineRow};
//!
//! let rows = vec![TimelineRow::new("MX-200").with_detail(ScheduleDetail::new(
//!     1,
//!     "2024-06-03T08:00:00",
//!     "2024-06-03T10:30:00",
//! ))];
//! let now = NaiveDate::from_ymd_opt(2024, 6, 3)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//!
//! let layout = layout_timeline(&rows, ZoomLevel::OneHour, now);
//! let bar = &layout.rows[0].bars[0];
//! assert_eq!(bar.left, 480.0);
//! assert_eq!(bar.width, 150.0);
//! ```
//!
//! # References
//!
//! - W3C (2008), "Web Content Accessibility Guidelines 2.0", relative luminance
//! - ITU-R BT.601, luma coefficients
//! - Fowler, Noll, Vo, "FNV hash" (FNV-1a, 32-bit)

pub mod aggregate;
pub mod calendar;
pub mod color;
pub mod config;
pub mod distribute;
pub mod error;
pub mod format;
pub mod layout;
pub mod memo;
pub mod models;
pub mod plan;
pub mod time;
pub mod validation;

pub use config::TimelineConfig;
pub use error::{Result, TimelineError};
