use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::resolution::{Resolution, ResolutionLadder};
use crate::error::{Result, TimelineError};

/// Accepted range for the click/double-click window, in milliseconds.
pub const DOUBLE_CLICK_MS_RANGE: std::ops::RangeInclusive<u64> = 250..=333;

/// Construction options for a timeline widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineOptions {
    /// Resolution shown at construction.
    pub resolution: Resolution,
    /// Initial anchor (first visible unit).
    pub start_date: NaiveDateTime,
    /// Width of one unit in pixels; also the drag distance for one pan.
    pub unit_pixel_width: f32,
    /// Accent color for ticks and labels.
    #[serde(with = "color_serde")]
    pub color: Color32,
    /// Coarsest resolution zoom may reach.
    pub min_resolution: Option<Resolution>,
    /// Finest resolution zoom may reach.
    pub max_resolution: Option<Resolution>,
    /// Put the week step on the zoom ladder between month and day.
    pub include_week: bool,
    /// How long a single click waits for a possible second click.
    pub double_click_ms: u64,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            resolution: Resolution::Year,
            start_date: default_start_date(),
            unit_pixel_width: 15.0,
            color: Color32::BLACK,
            min_resolution: None,
            max_resolution: None,
            include_week: false,
            double_click_ms: 300,
        }
    }
}

impl TimelineOptions {
    /// Check the fields that cannot be expressed through types alone.
    pub fn validate(&self) -> Result<()> {
        if !(self.unit_pixel_width.is_finite() && self.unit_pixel_width > 0.0) {
            return Err(TimelineError::InvalidConfig(format!(
                "unit pixel width must be positive, got {}",
                self.unit_pixel_width
            )));
        }
        if !DOUBLE_CLICK_MS_RANGE.contains(&self.double_click_ms) {
            return Err(TimelineError::InvalidConfig(format!(
                "double click window must be within {}..={} ms, got {}",
                DOUBLE_CLICK_MS_RANGE.start(),
                DOUBLE_CLICK_MS_RANGE.end(),
                self.double_click_ms
            )));
        }
        self.ladder().map(|_| ())
    }

    pub fn ladder(&self) -> Result<ResolutionLadder> {
        ResolutionLadder::new(self.min_resolution, self.max_resolution, self.include_week)
    }

    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }
}

fn default_start_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN)
}

/// Serde helper for `Color32`.
mod color_serde {
    use egui::Color32;
    use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rgba = [color.r(), color.g(), color.b(), color.a()];
        rgba.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rgba: [u8; 4] = Deserialize::deserialize(deserializer)?;
        Ok(Color32::from_rgba_unmultiplied(
            rgba[0], rgba[1], rgba[2], rgba[3],
        ))
    }
}
