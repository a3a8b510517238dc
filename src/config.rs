//! Layout configuration.
//!
//! Every tunable the layout components read lives here: the color
//! palette, which weekdays are non-production days, the sentinel floor
//! for timestamps, and the default window sizes. Components expose a
//! default-config entry point and a `*_with` variant taking
//! `&TimelineConfig`.

use serde::{Deserialize, Serialize};

use crate::color::{parse_hex, PALETTE};
use crate::error::{Result, TimelineError};
use crate::time::VALID_AFTER_MS;

/// Longest accepted fallback window (days).
pub const MAX_WINDOW_DAYS: i64 = 366;
/// Longest accepted plan range padding (hours).
pub const MAX_PADDING_HOURS: i64 = 24 * 31;

/// Tunables shared by all layout components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineConfig {
    /// Ordered background palette (`#RRGGBB`).
    pub palette: Vec<String>,
    /// Weekdays never shown on the daily calendar (0 = Sunday).
    pub weekend_days: Vec<u32>,
    /// Timestamps at or before this epoch-ms instant are sentinels.
    pub valid_after_ms: i64,
    /// Length of the fallback window when no valid dates exist (days).
    pub default_window_days: i64,
    /// Start hour of a production day on the plan timeline.
    pub work_day_start_hour: u32,
    /// End hour of a production day on the plan timeline.
    pub work_day_end_hour: u32,
    /// Padding applied on both sides of the plan timeline range (hours).
    pub range_padding_hours: i64,
    /// Bars narrower than this (px) carry no inline label.
    pub min_label_width: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            palette: PALETTE.iter().map(|s| s.to_string()).collect(),
            weekend_days: vec![0, 6],
            valid_after_ms: VALID_AFTER_MS,
            default_window_days: 7,
            work_day_start_hour: 4,
            work_day_end_hour: 20,
            range_padding_hours: 12,
            min_label_width: 20.0,
        }
    }
}

impl TimelineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the palette.
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        self.palette = palette;
        self
    }

    /// Replaces the non-production weekdays (0 = Sunday).
    pub fn with_weekend_days(mut self, days: Vec<u32>) -> Self {
        self.weekend_days = days;
        self
    }

    /// Sets the fallback window length.
    pub fn with_default_window_days(mut self, days: i64) -> Self {
        self.default_window_days = days;
        self
    }

    /// Sets the production-day window on the plan timeline.
    pub fn with_work_day(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.work_day_start_hour = start_hour;
        self.work_day_end_hour = end_hour;
        self
    }

    /// Checks that the configuration can drive every component.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(TimelineError::InvalidConfig("palette is empty".into()));
        }
        for hex in &self.palette {
            parse_hex(hex)?;
        }
        if let Some(day) = self.weekend_days.iter().find(|d| **d > 6) {
            return Err(TimelineError::InvalidConfig(format!(
                "weekend day {day} is outside 0..=6"
            )));
        }
        if !(1..=MAX_WINDOW_DAYS).contains(&self.default_window_days) {
            return Err(TimelineError::InvalidConfig(format!(
                "default window of {} days is outside 1..={MAX_WINDOW_DAYS}",
                self.default_window_days
            )));
        }
        if !(0..=MAX_PADDING_HOURS).contains(&self.range_padding_hours) {
            return Err(TimelineError::InvalidConfig(format!(
                "range padding of {} hours is outside 0..={MAX_PADDING_HOURS}",
                self.range_padding_hours
            )));
        }
        if self.work_day_start_hour >= self.work_day_end_hour || self.work_day_end_hour > 24 {
            return Err(TimelineError::InvalidConfig(format!(
                "work day {}..{} is not a valid hour range",
                self.work_day_start_hour, self.work_day_end_hour
            )));
        }
        Ok(())
    }

    /// Whether a weekday number (0 = Sunday) is a non-production day.
    #[inline]
    pub fn is_weekend(&self, weekday: u32) -> bool {
        self.weekend_days.contains(&weekday)
    }
}
