//! Runtime configuration.
//!
//! Resolves where the snapshot lives and which geocoding service to use.
//! Explicit values win, then environment variables, then platform defaults.

use std::env;
use std::path::PathBuf;

use tracing::info;

use crate::error::{DirectoryError, Result};

const APP_NAME: &str = "profile-directory";

pub const DATA_DIR_VAR: &str = "PROFILE_DIRECTORY_DATA";
pub const GEOCODER_VAR: &str = "PROFILE_DIRECTORY_GEOCODER";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Directory holding `profiles.json`.
    pub data_dir: PathBuf,
    /// Base URL of the geocoding service.
    pub geocoder_url: String,
    pub user_agent: String,
}

impl DirectoryConfig {
    /// Load from the environment, with an optional data directory override.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir.or_else(|| var(DATA_DIR_VAR).map(PathBuf::from)) {
            Some(dir) => dir,
            None => default_data_dir()?,
        };

        let geocoder_url = var(GEOCODER_VAR).unwrap_or_else(|| {
            info!("{GEOCODER_VAR} not set, using default: {DEFAULT_GEOCODER_URL}");
            DEFAULT_GEOCODER_URL.to_string()
        });

        Ok(Self {
            data_dir,
            geocoder_url,
            user_agent: default_user_agent(),
        })
    }
}

/// Platform data directory.
/// - Linux: ~/.local/share/profile-directory/
/// - Windows: %APPDATA%\profile-directory\
pub fn default_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or(DirectoryError::ConfigDirNotFound)?;
    info!("{DATA_DIR_VAR} not set, using default: {}", dir.display());
    Ok(dir)
}

pub fn default_user_agent() -> String {
    format!("{}/{}", APP_NAME, env!("CARGO_PKG_VERSION"))
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
