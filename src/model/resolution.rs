use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};

/// Minutes covered by one unit at hour resolution.
pub const HOUR_STEP_MINUTES: i64 = 5;

/// Calendar granularity of the displayed units, ordered coarse to fine.
///
/// Each resolution displays units one calendar field below its name:
/// `Year` shows months, `Month` shows days, `Day` shows hours and `Hour`
/// shows five-minute slots. `Week` shows whole weeks starting on Sunday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Year,
    Month,
    Week,
    Day,
    Hour,
}

impl Resolution {
    pub const ALL: [Resolution; 5] = [
        Resolution::Year,
        Resolution::Month,
        Resolution::Week,
        Resolution::Day,
        Resolution::Hour,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::Year => "year",
            Resolution::Month => "month",
            Resolution::Week => "week",
            Resolution::Day => "day",
            Resolution::Hour => "hour",
        }
    }

    /// Start of the unit containing `date`.
    pub fn align(self, date: NaiveDateTime) -> NaiveDateTime {
        match self {
            Resolution::Year => first_of_month(date.date()).and_time(NaiveTime::MIN),
            Resolution::Month => date.date().and_time(NaiveTime::MIN),
            Resolution::Week => {
                let back = i64::from(date.weekday().num_days_from_sunday());
                let start = Duration::try_days(back)
                    .and_then(|d| date.date().checked_sub_signed(d))
                    .unwrap_or(date.date());
                start.and_time(NaiveTime::MIN)
            }
            Resolution::Day => NaiveTime::from_hms_opt(date.hour(), 0, 0)
                .map(|t| date.date().and_time(t))
                .unwrap_or(date),
            Resolution::Hour => NaiveTime::from_hms_opt(date.hour(), date.minute(), 0)
                .map(|t| date.date().and_time(t))
                .unwrap_or(date),
        }
    }

    /// Whether `date` already sits on a unit boundary.
    pub fn is_aligned(self, date: NaiveDateTime) -> bool {
        self.align(date) == date
    }

    /// Move `n` units away from the unit containing `date`.
    ///
    /// Steps follow calendar fields rather than fixed durations, so a
    /// year-resolution step always lands on the first of a month whatever
    /// the month length. Results outside chrono's range saturate at the
    /// aligned start.
    pub fn step(self, date: NaiveDateTime, n: i64) -> NaiveDateTime {
        let start = self.align(date);
        let moved = match self {
            Resolution::Year => add_months(start, n),
            Resolution::Month => Duration::try_days(n).and_then(|d| start.checked_add_signed(d)),
            Resolution::Week => Duration::try_weeks(n).and_then(|d| start.checked_add_signed(d)),
            Resolution::Day => Duration::try_hours(n).and_then(|d| start.checked_add_signed(d)),
            Resolution::Hour => n
                .checked_mul(HOUR_STEP_MINUTES)
                .and_then(Duration::try_minutes)
                .and_then(|d| start.checked_add_signed(d)),
        };
        moved.unwrap_or(start)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "year" => Ok(Resolution::Year),
            "month" => Ok(Resolution::Month),
            "week" => Ok(Resolution::Week),
            "day" => Ok(Resolution::Day),
            "hour" => Ok(Resolution::Hour),
            _ => Err(TimelineError::UnsupportedResolution(s.to_string())),
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn add_months(start: NaiveDateTime, n: i64) -> Option<NaiveDateTime> {
    let total = i64::from(start.year()) * 12 + i64::from(start.month0()) + n;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12) + 1).ok()?;
    NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.and_time(NaiveTime::MIN))
}

/// The ordered resolutions zoom is allowed to visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionLadder {
    steps: Vec<Resolution>,
}

impl ResolutionLadder {
    /// Build a ladder clamped to `[min, max]` (coarsest to finest).
    ///
    /// `Week` is only part of the ladder when `include_week` is set.
    pub fn new(
        min: Option<Resolution>,
        max: Option<Resolution>,
        include_week: bool,
    ) -> Result<Self> {
        for bound in [min, max].into_iter().flatten() {
            if bound == Resolution::Week && !include_week {
                return Err(TimelineError::UnsupportedResolution(
                    "week (week step is disabled)".to_string(),
                ));
            }
        }
        let lo = min.unwrap_or(Resolution::Year);
        let hi = max.unwrap_or(Resolution::Hour);
        if lo > hi {
            return Err(TimelineError::InvalidConfig(format!(
                "min resolution {lo} is finer than max resolution {hi}"
            )));
        }

        let steps = Resolution::ALL
            .into_iter()
            .filter(|r| include_week || *r != Resolution::Week)
            .filter(|r| *r >= lo && *r <= hi)
            .collect();
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Resolution] {
        &self.steps
    }

    pub fn contains(&self, resolution: Resolution) -> bool {
        self.steps.contains(&resolution)
    }

    /// Next finer resolution, or `None` at the fine end.
    pub fn finer(&self, resolution: Resolution) -> Option<Resolution> {
        let idx = self.steps.iter().position(|r| *r == resolution)?;
        self.steps.get(idx + 1).copied()
    }

    /// Next coarser resolution, or `None` at the coarse end.
    pub fn coarser(&self, resolution: Resolution) -> Option<Resolution> {
        let idx = self.steps.iter().position(|r| *r == resolution)?;
        idx.checked_sub(1).and_then(|i| self.steps.get(i)).copied()
    }
}

impl Default for ResolutionLadder {
    fn default() -> Self {
        Self {
            steps: vec![
                Resolution::Year,
                Resolution::Month,
                Resolution::Day,
                Resolution::Hour,
            ],
        }
    }
}
