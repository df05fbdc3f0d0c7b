//! Appearance file loading.
//!
//! Responsibilities:
//! - Resolve the default appearance file location.
//! - Read and parse `appearance.json` into an `AppearanceConfig`.
//! - Apply file values to an `AppearanceLoader`.
//!
//! Does NOT handle:
//! - Environment variables (see env.rs).
//!
//! Invariants:
//! - A missing file is not an error; the loader keeps its defaults.
//! - Unreadable or malformed files are errors carrying the path.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::builder::AppearanceLoader;
use super::error::ConfigError;
use crate::constants::APPEARANCE_FILE_NAME;
use crate::types::AppearanceConfig;

/// Default location of the appearance file (`<config dir>/tui-alert/appearance.json`).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("", "", "tui-alert").ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory for the current user".to_string())
    })?;
    Ok(dirs.config_dir().join(APPEARANCE_FILE_NAME))
}

/// Read an appearance file. Returns `Ok(None)` when the file does not exist.
pub fn read_appearance_file(path: &Path) -> Result<Option<AppearanceConfig>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::ConfigFileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            source,
        })
}

/// Apply the appearance file to the loader.
pub fn apply_file(loader: &mut AppearanceLoader, path: &Path) -> Result<(), ConfigError> {
    match read_appearance_file(path)? {
        Some(config) => {
            tracing::debug!(path = %path.display(), "Loaded appearance file");
            loader.apply_config(config);
        }
        None => {
            tracing::debug!(path = %path.display(), "No appearance file, using defaults");
        }
    }
    Ok(())
}
