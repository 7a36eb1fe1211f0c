//! Parsing utilities for form input and CLI arguments.
//!
//! This module provides reusable parsing functions for the loosely-typed
//! strings collected by forms and the command line.

use crate::error::{DirectoryError, Result};
use crate::storage::ProfileId;

// =============================================================================
// List Parsing
// =============================================================================

/// Split a comma-separated string into trimmed, non-empty entries.
///
/// # Example
/// ```
/// use profile_directory::utils::parsing::split_list;
///
/// assert_eq!(split_list(" Math, Computing ,, "), vec!["Math", "Computing"]);
/// assert!(split_list("").is_empty());
/// ```
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Join list entries back into the comma-separated form shown in edit forms.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

// =============================================================================
// Optional Field Parsing
// =============================================================================

/// Trim an optional text field, mapping blank input to `None`.
pub fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// =============================================================================
// Id Parsing
// =============================================================================

/// Parse a profile id as it appears in a route or CLI argument.
pub fn parse_profile_id(input: &str) -> Result<ProfileId> {
    input.trim().parse::<u64>().map(ProfileId).map_err(|_| {
        DirectoryError::InvalidInput(format!("Invalid profile id '{}'", input))
    })
}

// =============================================================================
// Tests
// =============================================================================
