use thiserror::Error;

/// Errors raised by the timeline core and its options file.
///
/// The first three variants are caller bugs and are surfaced immediately;
/// the remaining ones only come from loading or saving options.
#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("unsupported resolution: {0}")]
    UnsupportedResolution(String),

    #[error("unsupported direction: {0}")]
    UnsupportedDirection(String),

    #[error("invalid container: {0}")]
    InvalidContainer(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
