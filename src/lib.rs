//! Interactive date timeline: a row of time units at a chosen resolution
//! that can be panned, zoomed and clicked to pick a date range.
//!
//! The core lives in [`model`] (unit generation, navigation, range
//! selection) and [`input`] (turning raw pointer and wheel events into
//! intents). [`widget::Chronoslider`] ties them together over any
//! [`widget::RenderSurface`]; [`ui`] provides an egui surface and [`app`]
//! a small demo host.

pub mod app;
pub mod error;
pub mod input;
pub mod io;
pub mod model;
pub mod ui;
pub mod widget;

pub use error::{Result, TimelineError};
pub use widget::{Chronoslider, RenderFrame, RenderSurface};
