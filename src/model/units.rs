use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::resolution::Resolution;
use crate::error::Result;

/// Two-tier label of a unit. Both parts are empty for minor ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLabel {
    pub small_text: String,
    pub large_text: String,
}

impl UnitLabel {
    /// A unit with any label text is drawn as a long (major) tick.
    pub fn is_long(&self) -> bool {
        !self.small_text.is_empty() || !self.large_text.is_empty()
    }
}

/// One displayed time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeUnit {
    pub date: NaiveDateTime,
    pub label: UnitLabel,
}

/// Text rendering of the calendar fields used in labels.
pub trait LabelFormatter {
    fn year(&self, date: NaiveDateTime) -> String;
    fn month_short(&self, date: NaiveDateTime) -> String;
    fn day_short(&self, date: NaiveDateTime) -> String;
    fn hour(&self, date: NaiveDateTime) -> String;
}

/// English short forms: `2025`, `Mar`, `Mar 05`, `3 PM`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabels;

impl LabelFormatter for DefaultLabels {
    fn year(&self, date: NaiveDateTime) -> String {
        date.format("%Y").to_string()
    }

    fn month_short(&self, date: NaiveDateTime) -> String {
        date.format("%b").to_string()
    }

    fn day_short(&self, date: NaiveDateTime) -> String {
        date.format("%b %d").to_string()
    }

    fn hour(&self, date: NaiveDateTime) -> String {
        date.format("%-I %p").to_string()
    }
}

/// Generate `count` consecutive units starting at the unit containing `anchor`.
pub fn generate(anchor: NaiveDateTime, resolution: Resolution, count: usize) -> Vec<TimeUnit> {
    generate_with(anchor, resolution, count, &DefaultLabels)
}

/// Same as [`generate`], for a resolution given by name.
pub fn generate_named(anchor: NaiveDateTime, resolution: &str, count: usize) -> Result<Vec<TimeUnit>> {
    let resolution = resolution.parse::<Resolution>()?;
    Ok(generate(anchor, resolution, count))
}

pub fn generate_with(
    anchor: NaiveDateTime,
    resolution: Resolution,
    count: usize,
    labels: &dyn LabelFormatter,
) -> Vec<TimeUnit> {
    (0..count as i64)
        .map(|i| {
            let date = resolution.step(anchor, i);
            TimeUnit {
                date,
                label: label_for(resolution, date, labels),
            }
        })
        .collect()
}

/// Long-form labels appear only on calendar boundaries one level up, which
/// gives sparse major ticks over a dense row of minor ones.
fn label_for(resolution: Resolution, date: NaiveDateTime, labels: &dyn LabelFormatter) -> UnitLabel {
    let (small_text, large_text) = match resolution {
        Resolution::Year if date.month() == 1 => (String::new(), labels.year(date)),
        Resolution::Month if date.day() == 1 => (labels.year(date), labels.month_short(date)),
        Resolution::Week if date.day() <= 7 => (labels.year(date), labels.day_short(date)),
        Resolution::Day if date.hour() == 0 => (labels.year(date), labels.day_short(date)),
        Resolution::Hour if date.minute() == 0 => (labels.day_short(date), labels.hour(date)),
        _ => return UnitLabel::default(),
    };
    UnitLabel {
        small_text,
        large_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimelineError;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_count_and_order_for_every_resolution() {
        let anchor = dt(2024, 12, 30, 22, 40);
        for resolution in Resolution::ALL {
            let units = generate(anchor, resolution, 40);
            assert_eq!(units.len(), 40, "{resolution}");
            assert!(
                units.windows(2).all(|w| w[0].date < w[1].date),
                "{resolution} units not strictly increasing"
            );
            assert!(units.iter().all(|u| resolution.is_aligned(u.date)));
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(generate(dt(2025, 1, 1, 0, 0), Resolution::Day, 0).is_empty());
    }

    #[test]
    fn test_year_labels_once_per_twelve_units() {
        let units = generate(dt(2025, 1, 1, 0, 0), Resolution::Year, 24);
        assert_eq!(units[0].label.large_text, "2025");
        assert_eq!(units[0].label.small_text, "");
        assert_eq!(units[12].label.large_text, "2026");
        assert_eq!(units.iter().filter(|u| u.label.is_long()).count(), 2);
    }

    #[test]
    fn test_month_labels_on_first_day() {
        let units = generate(dt(2025, 2, 27, 0, 0), Resolution::Month, 5);
        assert!(!units[0].label.is_long());
        assert_eq!(units[2].date, dt(2025, 3, 1, 0, 0));
        assert_eq!(units[2].label.small_text, "2025");
        assert_eq!(units[2].label.large_text, "Mar");
    }

    #[test]
    fn test_day_labels_at_midnight() {
        let units = generate(dt(2025, 7, 3, 22, 0), Resolution::Day, 4);
        assert_eq!(units[2].date, dt(2025, 7, 4, 0, 0));
        assert_eq!(units[2].label.small_text, "2025");
        assert_eq!(units[2].label.large_text, "Jul 04");
        assert!(!units[3].label.is_long());
    }

    #[test]
    fn test_hour_steps_five_minutes() {
        let units = generate(dt(2025, 7, 3, 14, 50), Resolution::Hour, 4);
        assert_eq!(units[1].date, dt(2025, 7, 3, 14, 55));
        assert_eq!(units[2].date, dt(2025, 7, 3, 15, 0));
        assert_eq!(units[2].label.small_text, "Jul 03");
        assert_eq!(units[2].label.large_text, "3 PM");
    }

    #[test]
    fn test_week_units_start_on_sunday() {
        // 2025-03-05 is a Wednesday
        let units = generate(dt(2025, 3, 5, 10, 0), Resolution::Week, 3);
        assert_eq!(units[0].date, dt(2025, 3, 2, 0, 0));
        assert_eq!(units[0].label.large_text, "Mar 02");
        assert_eq!(units[1].date, dt(2025, 3, 9, 0, 0));
        assert!(!units[1].label.is_long());
    }

    #[test]
    fn test_generate_named_rejects_unknown_token() {
        let err = generate_named(dt(2025, 1, 1, 0, 0), "fortnight", 3).unwrap_err();
        assert!(matches!(err, TimelineError::UnsupportedResolution(_)));
        assert_eq!(generate_named(dt(2025, 1, 1, 0, 0), "day", 3).unwrap().len(), 3);
    }

    struct Numeric;

    impl LabelFormatter for Numeric {
        fn year(&self, date: NaiveDateTime) -> String {
            date.year().to_string()
        }
        fn month_short(&self, date: NaiveDateTime) -> String {
            date.month().to_string()
        }
        fn day_short(&self, date: NaiveDateTime) -> String {
            format!("{}/{}", date.day(), date.month())
        }
        fn hour(&self, date: NaiveDateTime) -> String {
            format!("{}h", date.hour())
        }
    }

    #[test]
    fn test_custom_formatter() {
        let units = generate_with(dt(2025, 5, 1, 0, 0), Resolution::Month, 1, &Numeric);
        assert_eq!(units[0].label.large_text, "5");
    }
}
