//! Custom error types for the profile directory.
//!
//! The store only fails for genuine I/O faults. Validation failures come from
//! the form layer, and unknown ids are silent no-ops inside the store.

use thiserror::Error;

use crate::storage::ProfileId;

/// Main error type for directory operations.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// A required form field was left blank.
    #[error("Please fill in all required fields ({field} is missing)")]
    MissingField { field: &'static str },

    /// Writing the snapshot failed.
    #[error("Failed to persist profiles: {0}")]
    Persistence(String),

    /// No platform data directory and no override was given.
    #[error("Could not find a data directory. Use --data-dir or PROFILE_DIRECTORY_DATA.")]
    ConfigDirNotFound,

    /// Geocoding request or response failure.
    #[error("Failed to fetch location: {0}")]
    Geocode(String),

    /// Every id up to `u64::MAX` has been issued.
    #[error("No profile ids left to assign")]
    IdsExhausted,

    /// Referenced profile does not exist.
    #[error("Profile {0} not found")]
    NotFound(ProfileId),

    /// Generic invalid input error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for DirectoryError {
    fn from(err: reqwest::Error) -> Self {
        DirectoryError::Geocode(err.to_string())
    }
}

/// Result type alias for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
