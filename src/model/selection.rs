use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Start/end pair picked by clicking units. When both are set, `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSelection {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl RangeSelection {
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn range(&self) -> Option<SelectedRange> {
        Some(SelectedRange {
            start_date: self.start?,
            end_date: self.end?,
        })
    }

    /// Whether `date` is one of the two bounds.
    pub fn is_bound(&self, date: NaiveDateTime) -> bool {
        self.start == Some(date) || self.end == Some(date)
    }
}

/// Payload handed to the range-selected callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRange {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

/// Outcome of one [`RangeSelector::select_unit`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionChange {
    pub changed: bool,
    /// Set only on the call that made both bounds present.
    pub completed: Option<SelectedRange>,
}

/// Click-driven state machine over a [`RangeSelection`].
#[derive(Debug, Clone, Default)]
pub struct RangeSelector {
    state: RangeSelection,
}

impl RangeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> RangeSelection {
        self.state
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.state.start
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.state.end
    }

    /// Apply one resolved single click on a unit dated `clicked`.
    pub fn select_unit(&mut self, clicked: NaiveDateTime) -> SelectionChange {
        let before = self.state;
        let (start, end) = match (before.start, before.end) {
            (None, None) => (Some(clicked), None),
            (Some(s), None) if clicked == s => (None, None),
            (Some(s), None) if clicked < s => (Some(clicked), Some(s)),
            (Some(s), None) => (Some(s), Some(clicked)),
            (Some(s), Some(e)) if clicked == s => (Some(e), None),
            (Some(s), Some(e)) if clicked == e => (Some(s), None),
            // A third click on neither bound is ignored.
            (Some(s), Some(e)) => (Some(s), Some(e)),
            (None, Some(e)) if clicked > e => (Some(e), Some(clicked)),
            (None, Some(e)) if clicked < e => (Some(clicked), Some(e)),
            (None, Some(_)) => (None, None),
        };
        self.state = RangeSelection { start, end };

        let completed = if !before.is_complete() {
            self.state.range()
        } else {
            None
        };
        let changed = self.state != before;
        debug!(%clicked, ?before, after = ?self.state, changed, "select unit");
        SelectionChange { changed, completed }
    }

    /// Set the start bound, swapping with the end if it would invert the range.
    pub fn set_start(&mut self, date: NaiveDateTime) {
        match self.state.end {
            Some(end) if date > end => {
                self.state.start = Some(end);
                self.state.end = Some(date);
            }
            _ => self.state.start = Some(date),
        }
    }

    /// Set the end bound, swapping with the start if it would invert the range.
    pub fn set_end(&mut self, date: NaiveDateTime) {
        match self.state.start {
            Some(start) if date < start => {
                self.state.end = Some(start);
                self.state.start = Some(date);
            }
            _ => self.state.end = Some(date),
        }
    }

    pub fn clear_start(&mut self) {
        self.state.start = None;
    }

    pub fn clear_end(&mut self) {
        self.state.end = None;
    }

    pub fn clear(&mut self) {
        self.state = RangeSelection::default();
    }
}
