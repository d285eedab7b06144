use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TimelineError};
use crate::model::TimelineOptions;

/// `<config dir>/chronoslider/options.json` for the current user.
pub fn default_options_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "chronoslider", "chronoslider")
        .ok_or(TimelineError::NoConfigDir)?;
    Ok(dirs.config_dir().join("options.json"))
}

/// Load options from a JSON file. A missing file yields the defaults.
pub fn load_options(path: &Path) -> Result<TimelineOptions> {
    if !path.exists() {
        debug!(path = %path.display(), "no options file, using defaults");
        return Ok(TimelineOptions::default());
    }
    let json = std::fs::read_to_string(path)?;
    let options: TimelineOptions = serde_json::from_str(&json)?;
    options.validate()?;
    Ok(options)
}

/// Save options as pretty JSON, creating parent directories.
pub fn save_options(options: &TimelineOptions, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(options)?;
    std::fs::write(path, json)?;
    debug!(path = %path.display(), "options saved");
    Ok(())
}
