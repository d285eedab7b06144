//! Property tests for the timeline core.

use std::time::{Duration, Instant};

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use chronoslider::input::{InputDisambiguator, Intent, RawEvent};
use chronoslider::model::{
    generate, NavigationEngine, PanDirection, RangeSelector, Resolution, ResolutionLadder,
    ZoomDirection,
};

// ═════════════════════════════════════════════════════════════════════════
// Strategies
// ═════════════════════════════════════════════════════════════════════════

fn any_date() -> impl Strategy<Value = NaiveDateTime> {
    (1950i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(|(y, m, d, h, min)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    })
}

fn any_resolution() -> impl Strategy<Value = Resolution> {
    prop::sample::select(Resolution::ALL.to_vec())
}

fn week_ladder() -> ResolutionLadder {
    ResolutionLadder::new(None, None, true).unwrap()
}

// ═════════════════════════════════════════════════════════════════════════
// Unit generation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn generate_is_sized_ordered_and_aligned(
        anchor in any_date(),
        resolution in any_resolution(),
        count in 0usize..80,
    ) {
        let units = generate(anchor, resolution, count);
        prop_assert_eq!(units.len(), count);
        prop_assert!(units.windows(2).all(|w| w[0].date < w[1].date));
        prop_assert!(units.iter().all(|u| resolution.is_aligned(u.date)));
        if let Some(first) = units.first() {
            prop_assert_eq!(first.date, resolution.align(anchor));
        }
    }

    #[test]
    fn generate_is_deterministic(anchor in any_date(), resolution in any_resolution()) {
        prop_assert_eq!(generate(anchor, resolution, 24), generate(anchor, resolution, 24));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Navigation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pan_left_then_right_restores_anchor(anchor in any_date(), resolution in any_resolution()) {
        let mut nav = NavigationEngine::new(resolution, anchor, week_ladder()).unwrap();
        let before = nav.state();
        prop_assert!(nav.pan(PanDirection::Left));
        prop_assert!(nav.pan(PanDirection::Right));
        prop_assert_eq!(nav.state(), before);
    }

    #[test]
    fn zoom_out_then_in_recenters_on_coarse_unit(
        anchor in any_date(),
        resolution in prop::sample::select(vec![Resolution::Month, Resolution::Day, Resolution::Hour]),
        visible in 0usize..60,
    ) {
        let mut nav = NavigationEngine::new(resolution, anchor, ResolutionLadder::default()).unwrap();
        let center = nav.center_date(visible);

        prop_assert!(nav.zoom(ZoomDirection::Out, None, visible));
        let coarse = nav.resolution();
        prop_assert!(nav.zoom(ZoomDirection::In, None, visible));

        prop_assert_eq!(nav.resolution(), resolution);
        prop_assert_eq!(nav.center_date(visible), coarse.align(center));
    }

    #[test]
    fn zoom_in_then_out_restores_resolution(
        anchor in any_date(),
        resolution in any_resolution(),
        visible in 0usize..60,
    ) {
        let ladder = week_ladder();
        let mut nav = NavigationEngine::new(resolution, anchor, ladder.clone()).unwrap();
        let before = nav.state();

        if ladder.finer(resolution).is_some() {
            prop_assert!(nav.zoom(ZoomDirection::In, None, visible));
            prop_assert!(nav.zoom(ZoomDirection::Out, None, visible));
            prop_assert_eq!(nav.resolution(), resolution);
        } else {
            prop_assert!(!nav.zoom(ZoomDirection::In, None, visible));
            prop_assert_eq!(nav.state(), before);
        }
    }

    #[test]
    fn zoom_in_with_hover_centers_on_hover(
        anchor in any_date(),
        hover in any_date(),
        visible in 0usize..60,
    ) {
        let mut nav = NavigationEngine::new(Resolution::Month, anchor, ResolutionLadder::default()).unwrap();
        prop_assert!(nav.zoom(ZoomDirection::In, Some(hover), visible));
        prop_assert_eq!(nav.resolution(), Resolution::Day);
        prop_assert_eq!(nav.center_date(visible), Resolution::Day.align(hover));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Range selection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn selection_stays_ordered_and_notifies_on_completion(clicks in prop::collection::vec(0i64..8, 0..40)) {
        let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let mut selector = RangeSelector::new();

        for offset in clicks {
            let before = selector.selection();
            let change = selector.select_unit(base + chrono::Duration::days(offset));
            let after = selector.selection();

            if let (Some(start), Some(end)) = (after.start, after.end) {
                prop_assert!(start <= end);
            }
            let completed_now = !before.is_complete() && after.is_complete();
            prop_assert_eq!(change.completed.is_some(), completed_now);
            prop_assert_eq!(change.changed, before != after);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drag_of_whole_units_pans_once_per_unit(units in 0i32..20, rightward in any::<bool>()) {
        let mut input = InputDisambiguator::default();
        let width = input.config().drag_threshold;
        let sign = if rightward { 1.0 } else { -1.0 };
        let t = Instant::now();

        let mut x = 500.0;
        input.process(&RawEvent::PointerDown { x }, &[], t);
        let mut pans = Vec::new();
        for _ in 0..units {
            x += sign * width;
            pans.extend(input.process(&RawEvent::PointerMove { x }, &[], t).intents);
        }
        input.process(&RawEvent::PointerUp { x }, &[], t);

        let expected = if rightward { PanDirection::Left } else { PanDirection::Right };
        prop_assert_eq!(pans.len(), units as usize);
        prop_assert!(pans.iter().all(|p| *p == Intent::Pan(expected)));
        prop_assert!(!input.is_dragging());
    }

    #[test]
    fn uneven_drag_pans_once_per_whole_unit(
        steps in prop::collection::vec(1u16..120, 0..24),
        rightward in any::<bool>(),
    ) {
        let mut input = InputDisambiguator::default();
        let width = input.config().drag_threshold;
        let sign = if rightward { 1.0 } else { -1.0 };
        let t = Instant::now();

        let mut x = 2000.0f32;
        input.process(&RawEvent::PointerDown { x }, &[], t);
        let mut pans = Vec::new();
        for step in &steps {
            x += sign * f32::from(*step);
            pans.extend(input.process(&RawEvent::PointerMove { x }, &[], t).intents);
        }

        let travelled: u32 = steps.iter().map(|s| u32::from(*s)).sum();
        let expected = (travelled as f32 / width).floor() as usize;
        prop_assert_eq!(pans.len(), expected);
    }

    #[test]
    fn pending_click_fires_at_most_once(gap_ms in 0u64..1000) {
        let mut input = InputDisambiguator::default();
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let t = Instant::now();

        input.process(&RawEvent::Click { unit: Some(date) }, &[], t);
        let fired: Vec<_> = (0..5)
            .filter_map(|i| input.poll(t + Duration::from_millis(gap_ms * i)))
            .collect();
        prop_assert!(fired.len() <= 1);
        if gap_ms * 4 >= 300 {
            prop_assert_eq!(fired, vec![Intent::UnitClicked(date)]);
        }
    }
}
