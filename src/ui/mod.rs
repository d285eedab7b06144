pub mod dialogs;
pub mod theme;
pub mod timeline_strip;
pub mod toolbar;

pub use timeline_strip::{show_timeline_strip, StripSurface};
