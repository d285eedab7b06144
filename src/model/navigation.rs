use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::resolution::{Resolution, ResolutionLadder};
use crate::error::{Result, TimelineError};

/// Direction of a one-unit pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
}

impl PanDirection {
    fn delta(self) -> i64 {
        match self {
            PanDirection::Left => -1,
            PanDirection::Right => 1,
        }
    }
}

impl FromStr for PanDirection {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(PanDirection::Left),
            "right" => Ok(PanDirection::Right),
            _ => Err(TimelineError::UnsupportedDirection(s.to_string())),
        }
    }
}

/// Zoom `In` moves to a finer resolution, `Out` to a coarser one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl FromStr for ZoomDirection {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "in" => Ok(ZoomDirection::In),
            "out" => Ok(ZoomDirection::Out),
            _ => Err(TimelineError::UnsupportedDirection(s.to_string())),
        }
    }
}

impl fmt::Display for ZoomDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoomDirection::In => f.write_str("in"),
            ZoomDirection::Out => f.write_str("out"),
        }
    }
}

/// Resolution plus the date of the first visible unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub resolution: Resolution,
    /// Always aligned to a unit boundary of `resolution`.
    pub anchor: NaiveDateTime,
}

/// Owns the navigation state and applies pan and zoom to it.
#[derive(Debug, Clone)]
pub struct NavigationEngine {
    state: NavigationState,
    ladder: ResolutionLadder,
}

impl NavigationEngine {
    pub fn new(resolution: Resolution, anchor: NaiveDateTime, ladder: ResolutionLadder) -> Result<Self> {
        if !ladder.contains(resolution) {
            return Err(TimelineError::UnsupportedResolution(format!(
                "{resolution} is outside the zoom range"
            )));
        }
        Ok(Self {
            state: NavigationState {
                resolution,
                anchor: resolution.align(anchor),
            },
            ladder,
        })
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn resolution(&self) -> Resolution {
        self.state.resolution
    }

    pub fn anchor(&self) -> NaiveDateTime {
        self.state.anchor
    }

    pub fn ladder(&self) -> &ResolutionLadder {
        &self.ladder
    }

    /// Date of the unit in the middle of a window of `visible_units`.
    pub fn center_date(&self, visible_units: usize) -> NaiveDateTime {
        let half = half_count(visible_units);
        self.state.resolution.step(self.state.anchor, half)
    }

    /// Shift the anchor by one unit. Returns whether the view changed.
    pub fn pan(&mut self, direction: PanDirection) -> bool {
        let NavigationState { resolution, anchor } = self.state;
        let next = resolution.step(anchor, direction.delta());
        debug!(%resolution, from = %anchor, to = %next, "pan");
        self.state.anchor = next;
        next != anchor
    }

    /// Move one step along the ladder and re-anchor so the window stays
    /// centered. Returns `false` without touching state at either ladder end.
    ///
    /// With a `hover` date on zoom-in the window is centered on that date;
    /// otherwise the current center is estimated under the old resolution
    /// and re-anchored under the new one, since units change duration.
    pub fn zoom(
        &mut self,
        direction: ZoomDirection,
        hover: Option<NaiveDateTime>,
        visible_units: usize,
    ) -> bool {
        let current = self.state.resolution;
        let next = match direction {
            ZoomDirection::In => self.ladder.finer(current),
            ZoomDirection::Out => self.ladder.coarser(current),
        };
        let Some(next) = next else {
            debug!(%current, %direction, "zoom ignored at end of range");
            return false;
        };

        let half = half_count(visible_units);
        let center = match (direction, hover) {
            (ZoomDirection::In, Some(hover)) => hover,
            _ => current.step(self.state.anchor, half),
        };
        let anchor = next.step(center, -half);

        debug!(from = %current, to = %next, %center, %anchor, "zoom");
        self.state = NavigationState {
            resolution: next,
            anchor,
        };
        true
    }

    /// Re-anchor so `date` sits in the middle of the window.
    pub fn jump_to(&mut self, date: NaiveDateTime, visible_units: usize) {
        let resolution = self.state.resolution;
        self.state.anchor = resolution.step(date, -half_count(visible_units));
        debug!(%resolution, %date, anchor = %self.state.anchor, "jump");
    }
}

fn half_count(visible_units: usize) -> i64 {
    i64::try_from(visible_units / 2).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn engine(resolution: Resolution, anchor: NaiveDateTime) -> NavigationEngine {
        NavigationEngine::new(resolution, anchor, ResolutionLadder::default()).unwrap()
    }

    #[test]
    fn test_anchor_is_aligned_on_construction() {
        let nav = engine(Resolution::Year, dt(2025, 3, 19, 10, 0));
        assert_eq!(nav.anchor(), dt(2025, 3, 1, 0, 0));
    }

    #[test]
    fn test_rejects_resolution_outside_ladder() {
        let err = NavigationEngine::new(
            Resolution::Week,
            dt(2025, 1, 1, 0, 0),
            ResolutionLadder::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TimelineError::UnsupportedResolution(_)));
    }

    #[test]
    fn test_pan_is_invertible() {
        for resolution in [
            Resolution::Year,
            Resolution::Month,
            Resolution::Day,
            Resolution::Hour,
        ] {
            let mut nav = engine(resolution, dt(2024, 12, 31, 23, 55));
            let before = nav.state();
            assert!(nav.pan(PanDirection::Left));
            nav.pan(PanDirection::Right);
            assert_eq!(nav.state(), before, "{resolution}");
        }
    }

    #[test]
    fn test_pan_steps_one_unit() {
        let mut nav = engine(Resolution::Year, dt(2025, 12, 1, 0, 0));
        nav.pan(PanDirection::Right);
        assert_eq!(nav.anchor(), dt(2026, 1, 1, 0, 0));

        let mut nav = engine(Resolution::Hour, dt(2025, 1, 1, 0, 0));
        nav.pan(PanDirection::Left);
        assert_eq!(nav.anchor(), dt(2024, 12, 31, 23, 55));
    }

    #[test]
    fn test_direction_tokens() {
        assert_eq!("left".parse::<PanDirection>().unwrap(), PanDirection::Left);
        assert!(matches!(
            "up".parse::<PanDirection>(),
            Err(TimelineError::UnsupportedDirection(_))
        ));
        assert_eq!("out".parse::<ZoomDirection>().unwrap(), ZoomDirection::Out);
        assert!(matches!(
            "sideways".parse::<ZoomDirection>(),
            Err(TimelineError::UnsupportedDirection(_))
        ));
    }

    #[test]
    fn test_zoom_out_at_coarsest_is_noop() {
        let mut nav = engine(Resolution::Year, dt(2025, 1, 1, 0, 0));
        let before = nav.state();
        assert!(!nav.zoom(ZoomDirection::Out, None, 10));
        assert_eq!(nav.state(), before);
    }

    #[test]
    fn test_zoom_in_at_finest_is_noop() {
        let mut nav = engine(Resolution::Hour, dt(2025, 1, 1, 0, 0));
        let before = nav.state();
        assert!(!nav.zoom(ZoomDirection::In, Some(dt(2025, 6, 1, 0, 0)), 10));
        assert_eq!(nav.state(), before);
    }

    #[test]
    fn test_zoom_in_centers_on_hover_date() {
        let mut nav = engine(Resolution::Year, dt(2025, 1, 1, 0, 0));
        assert!(nav.zoom(ZoomDirection::In, Some(dt(2025, 3, 1, 0, 0)), 10));
        assert_eq!(nav.resolution(), Resolution::Month);
        assert_eq!(nav.anchor(), dt(2025, 2, 24, 0, 0));
        assert_eq!(nav.center_date(10), dt(2025, 3, 1, 0, 0));
    }

    #[test]
    fn test_zoom_without_hover_keeps_center() {
        let mut nav = engine(Resolution::Year, dt(2025, 1, 1, 0, 0));
        assert_eq!(nav.center_date(10), dt(2025, 6, 1, 0, 0));

        nav.zoom(ZoomDirection::In, None, 10);
        assert_eq!(nav.anchor(), dt(2025, 5, 27, 0, 0));
        assert_eq!(nav.center_date(10), dt(2025, 6, 1, 0, 0));

        nav.zoom(ZoomDirection::Out, None, 10);
        assert_eq!(nav.resolution(), Resolution::Year);
        assert_eq!(nav.anchor(), dt(2025, 1, 1, 0, 0));
    }

    #[test]
    fn test_zoom_round_trip_restores_resolution() {
        let mut nav = engine(Resolution::Month, dt(2025, 8, 14, 0, 0));
        nav.zoom(ZoomDirection::In, Some(dt(2025, 8, 20, 0, 0)), 31);
        nav.zoom(ZoomDirection::Out, None, 31);
        assert_eq!(nav.resolution(), Resolution::Month);
    }

    #[test]
    fn test_zoom_respects_clamped_ladder() {
        let ladder =
            ResolutionLadder::new(Some(Resolution::Month), Some(Resolution::Day), false).unwrap();
        let mut nav = NavigationEngine::new(Resolution::Month, dt(2025, 1, 1, 0, 0), ladder).unwrap();
        assert!(!nav.zoom(ZoomDirection::Out, None, 10));
        assert!(nav.zoom(ZoomDirection::In, None, 10));
        assert!(!nav.zoom(ZoomDirection::In, None, 10));
        assert_eq!(nav.resolution(), Resolution::Day);
    }

    #[test]
    fn test_week_step_sits_between_month_and_day() {
        let ladder = ResolutionLadder::new(None, None, true).unwrap();
        let mut nav = NavigationEngine::new(Resolution::Month, dt(2025, 3, 1, 0, 0), ladder).unwrap();
        nav.zoom(ZoomDirection::In, None, 8);
        assert_eq!(nav.resolution(), Resolution::Week);
        assert!(Resolution::Week.is_aligned(nav.anchor()));
    }

    #[test]
    fn test_jump_to_centers_date() {
        let mut nav = engine(Resolution::Day, dt(2025, 1, 1, 0, 0));
        nav.jump_to(dt(2025, 9, 9, 12, 30), 24);
        assert_eq!(nav.center_date(24), dt(2025, 9, 9, 12, 0));
    }
}
