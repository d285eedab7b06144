pub mod disambiguator;
pub mod pending;

pub use disambiguator::{Disambiguation, DisambiguatorConfig, DragState, InputDisambiguator, Intent, RawEvent};
pub use pending::{PendingAction, PendingToken};
