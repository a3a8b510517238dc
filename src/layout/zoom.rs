//! Zoom levels and hour header ticks.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

/// Horizontal zoom of the Gantt view.
///
/// | Level | px/hour | px/day | Hour labels every |
/// |-------|---------|--------|-------------------|
/// | `1hour` | 60 | 1440 | 1 h |
/// | `3hour` | 30 | 720 | 3 h |
/// | `5hour` | 20 | 480 | 5 h |
/// | `12hour` | 10 | 240 | 12 h |
/// | `day` | 5 | 120 | never |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoomLevel {
    #[default]
    #[serde(rename = "1hour")]
    OneHour,
    #[serde(rename = "3hour")]
    ThreeHours,
    #[serde(rename = "5hour")]
    FiveHours,
    #[serde(rename = "12hour")]
    TwelveHours,
    #[serde(rename = "day")]
    Day,
}

/// One hour cell of a day column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourTick {
    /// Hour of day (0..24).
    pub hour: u32,
    pub at: NaiveDateTime,
    /// `"HH"` when this zoom labels the hour.
    pub label: Option<String>,
    /// Whether the grid line is drawn strong.
    pub major: bool,
}

impl ZoomLevel {
    /// All levels, finest first.
    pub const ALL: [ZoomLevel; 5] = [
        ZoomLevel::OneHour,
        ZoomLevel::ThreeHours,
        ZoomLevel::FiveHours,
        ZoomLevel::TwelveHours,
        ZoomLevel::Day,
    ];

    #[inline]
    pub fn pixels_per_hour(self) -> f64 {
        match self {
            ZoomLevel::OneHour => 60.0,
            ZoomLevel::ThreeHours => 30.0,
            ZoomLevel::FiveHours => 20.0,
            ZoomLevel::TwelveHours => 10.0,
            ZoomLevel::Day => 5.0,
        }
    }

    /// Width of one day column (px).
    #[inline]
    pub fn day_width(self) -> f64 {
        24.0 * self.pixels_per_hour()
    }

    /// Wire name (`"1hour"`, …).
    pub fn as_str(self) -> &'static str {
        match self {
            ZoomLevel::OneHour => "1hour",
            ZoomLevel::ThreeHours => "3hour",
            ZoomLevel::FiveHours => "5hour",
            ZoomLevel::TwelveHours => "12hour",
            ZoomLevel::Day => "day",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            ZoomLevel::OneHour => "1 Hour",
            ZoomLevel::ThreeHours => "3 Hours",
            ZoomLevel::FiveHours => "5 Hours",
            ZoomLevel::TwelveHours => "12 Hours",
            ZoomLevel::Day => "Day",
        }
    }

    /// Hours between major ticks.
    fn step(self) -> u32 {
        match self {
            ZoomLevel::OneHour => 1,
            ZoomLevel::ThreeHours => 3,
            ZoomLevel::FiveHours => 5,
            ZoomLevel::TwelveHours => 12,
            ZoomLevel::Day => 24,
        }
    }

    /// Whether hour `h` of a day is a major tick.
    #[inline]
    pub fn is_major_hour(self, hour: u32) -> bool {
        hour % self.step() == 0
    }

    /// Whether hour `h` carries a text label. The day zoom shows none.
    #[inline]
    pub fn shows_hour_label(self, hour: u32) -> bool {
        self != ZoomLevel::Day && self.is_major_hour(hour)
    }

    /// The 24 hour cells of `day`.
    pub fn hour_ticks(self, day: NaiveDate) -> Vec<HourTick> {
        let midnight = day.and_time(NaiveTime::MIN);
        (0..24u32)
            .map(|hour| HourTick {
                hour,
                at: midnight + TimeDelta::hours(hour as i64),
                label: self
                    .shows_hour_label(hour)
                    .then(|| format!("{hour:02}")),
                major: self.is_major_hour(hour),
            })
            .collect()
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoomLevel {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZoomLevel::ALL
            .into_iter()
            .find(|z| z.as_str() == s)
            .ok_or_else(|| TimelineError::UnknownZoom(s.to_string()))
    }
}
