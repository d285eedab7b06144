//! Turns raw pointer, wheel and resize events into timeline intents.
//!
//! [`InputDisambiguator`] resolves signals that overlap in time so that one
//! user action yields one intent:
//!
//! - **Click detector**: a click over a unit is held back for the double-click
//!   window. A second click inside the window cancels it and becomes
//!   `UnitDoubleClicked`; otherwise [`poll`](InputDisambiguator::poll) releases
//!   it as `UnitClicked`. Further clicks in the same rapid burst are dropped.
//! - **Drag detector**: horizontal movement between pointer-down and
//!   pointer-up emits one pan per whole unit width covered; the remainder
//!   carries into the next move.
//! - **Wheel**: scrolling up zooms in on the centered unit, scrolling down
//!   zooms out.
//! - **Resize**: a changed surface width asks for a re-render.
//!
//! Time is passed in by the caller, which keeps the state machine
//! deterministic under test.

use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use tracing::trace;

use super::pending::PendingAction;
use crate::model::{PanDirection, TimeUnit};

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Low-level input as reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawEvent {
    /// Primary button pressed over the strip.
    PointerDown { x: f32 },
    /// Pointer moved anywhere, pressed or not.
    PointerMove { x: f32 },
    /// Primary button released anywhere.
    PointerUp { x: f32 },
    /// Primary click on the strip; `unit` is the date under the pointer.
    Click { unit: Option<NaiveDateTime> },
    /// Vertical wheel delta, negative when scrolling up.
    Wheel { delta_y: f32 },
    /// The strip now reports `width` pixels.
    Resize { width: f32 },
}

/// High-level request produced from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Pan(PanDirection),
    ZoomIn(Option<NaiveDateTime>),
    ZoomOut,
    UnitClicked(NaiveDateTime),
    UnitDoubleClicked(NaiveDateTime),
    Rerender,
}

/// Result of feeding one raw event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Disambiguation {
    pub intents: Vec<Intent>,
    /// The host should swallow the event's default action (page scroll).
    pub suppress_default: bool,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DisambiguatorConfig {
    /// Time a single click waits for a second one (default: 300ms).
    pub double_click_window: Duration,
    /// Horizontal pixels of drag per pan; one unit width (default: 15).
    pub drag_threshold: f32,
}

impl Default for DisambiguatorConfig {
    fn default() -> Self {
        Self {
            double_click_window: Duration::from_millis(300),
            drag_threshold: 15.0,
        }
    }
}

/// Drag tracking between a pointer-down and the next pointer-up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub is_dragging: bool,
    pub last_x: f32,
    pub accumulated_dx: f32,
}

// ---------------------------------------------------------------------------
// InputDisambiguator
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct InputDisambiguator {
    config: DisambiguatorConfig,
    drag: DragState,
    /// A pan fired since the last pointer-down; the trailing click is not a selection.
    panned: bool,
    pending_click: PendingAction<NaiveDateTime>,
    /// When the last double click resolved; later clicks in the same burst are dropped.
    last_double_click: Option<Instant>,
    last_width: Option<f32>,
}

impl InputDisambiguator {
    pub fn new(config: DisambiguatorConfig) -> Self {
        Self {
            config,
            drag: DragState::default(),
            panned: false,
            pending_click: PendingAction::new(),
            last_double_click: None,
            last_width: None,
        }
    }

    pub fn config(&self) -> &DisambiguatorConfig {
        &self.config
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// When the held-back click will fire, if one is waiting.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending_click.deadline()
    }

    /// Feed one raw event. `rendered` is the unit row currently on screen.
    pub fn process(&mut self, event: &RawEvent, rendered: &[TimeUnit], now: Instant) -> Disambiguation {
        let mut out = Disambiguation::default();

        // A click whose window already ran out fires before anything newer.
        if let Some(intent) = self.poll(now) {
            out.intents.push(intent);
        }

        match *event {
            RawEvent::PointerDown { x } => {
                self.drag = DragState {
                    is_dragging: true,
                    last_x: x,
                    accumulated_dx: 0.0,
                };
                self.panned = false;
            }
            RawEvent::PointerMove { x } => self.on_move(x, &mut out),
            RawEvent::PointerUp { .. } => {
                self.drag = DragState::default();
            }
            RawEvent::Click { unit } => self.on_click(unit, now, &mut out),
            RawEvent::Wheel { delta_y } => self.on_wheel(delta_y, rendered, &mut out),
            RawEvent::Resize { width } => {
                if self.last_width != Some(width) {
                    trace!(width, "surface resized");
                    self.last_width = Some(width);
                    out.intents.push(Intent::Rerender);
                }
            }
        }
        out
    }

    /// Release a held-back click once its window has passed.
    pub fn poll(&mut self, now: Instant) -> Option<Intent> {
        self.pending_click.poll(now).map(|date| {
            trace!(%date, "single click resolved");
            Intent::UnitClicked(date)
        })
    }

    /// Forget any held-back click.
    pub fn cancel_pending(&mut self) -> bool {
        self.pending_click.cancel().is_some()
    }

    /// Return to idle: no drag, no held-back click.
    pub fn reset(&mut self) {
        self.pending_click.cancel();
        self.last_double_click = None;
        self.drag = DragState::default();
        self.panned = false;
    }

    fn on_move(&mut self, x: f32, out: &mut Disambiguation) {
        if !self.drag.is_dragging {
            return;
        }
        self.drag.accumulated_dx += x - self.drag.last_x;
        self.drag.last_x = x;

        // A fast move can cover several units in one event.
        let threshold = self.config.drag_threshold;
        while self.drag.accumulated_dx.abs() >= threshold {
            // Content follows the pointer: dragging right reveals earlier units.
            let direction = if self.drag.accumulated_dx > 0.0 {
                PanDirection::Left
            } else {
                PanDirection::Right
            };
            trace!(?direction, dx = self.drag.accumulated_dx, "drag pan");
            self.drag.accumulated_dx -= threshold.copysign(self.drag.accumulated_dx);
            self.panned = true;
            out.intents.push(Intent::Pan(direction));
        }
    }

    fn on_click(&mut self, unit: Option<NaiveDateTime>, now: Instant, out: &mut Disambiguation) {
        if std::mem::take(&mut self.panned) {
            trace!("click after drag pan ignored");
            return;
        }

        // Clicks past the second in a rapid burst belong to the double click.
        let window = self.config.double_click_window;
        if self
            .last_double_click
            .is_some_and(|at| now.saturating_duration_since(at) < window)
        {
            trace!("extra click in multi-click burst ignored");
            self.last_double_click = Some(now);
            return;
        }

        if self.pending_click.cancel().is_some() {
            self.last_double_click = Some(now);
            if let Some(date) = unit {
                trace!(%date, "double click");
                out.intents.push(Intent::UnitDoubleClicked(date));
            }
            return;
        }

        if let Some(date) = unit {
            self.pending_click
                .arm(date, now, self.config.double_click_window);
        }
    }

    fn on_wheel(&mut self, delta_y: f32, rendered: &[TimeUnit], out: &mut Disambiguation) {
        if delta_y < 0.0 {
            out.suppress_default = true;
            if rendered.is_empty() {
                return;
            }
            let center = &rendered[(rendered.len() - 1) / 2];
            out.intents.push(Intent::ZoomIn(Some(center.date)));
        } else if delta_y > 0.0 {
            out.suppress_default = true;
            out.intents.push(Intent::ZoomOut);
        }
    }
}

impl Default for InputDisambiguator {
    fn default() -> Self {
        Self::new(DisambiguatorConfig::default())
    }
}
