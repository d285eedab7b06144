pub mod navigation;
pub mod options;
pub mod resolution;
pub mod selection;
pub mod units;

pub use navigation::{NavigationEngine, NavigationState, PanDirection, ZoomDirection};
pub use options::TimelineOptions;
pub use resolution::{Resolution, ResolutionLadder};
pub use selection::{RangeSelection, RangeSelector, SelectedRange, SelectionChange};
pub use units::{generate, generate_named, generate_with, DefaultLabels, LabelFormatter, TimeUnit, UnitLabel};
