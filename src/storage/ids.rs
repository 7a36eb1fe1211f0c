//! Time-based id source.
//!
//! Ids are milliseconds since the Unix epoch, bumped so that every issued id
//! is strictly greater than the previous one and than any id already stored.

use std::time::{SystemTime, UNIX_EPOCH};

use super::types::ProfileId;
use crate::error::{DirectoryError, Result};

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Start above every id in `existing`.
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a ProfileId>) -> Self {
        let last = existing.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self { last }
    }

    /// Next id based on the system clock.
    pub fn next_id(&mut self) -> Result<ProfileId> {
        self.next_at(now_millis())
    }

    /// Next id for a given clock reading.
    ///
    /// Fails once the previous id is `u64::MAX`; there is nothing above it.
    pub fn next_at(&mut self, now_ms: u64) -> Result<ProfileId> {
        let bumped = self
            .last
            .checked_add(1)
            .ok_or(DirectoryError::IdsExhausted)?;
        self.last = now_ms.max(bumped);
        Ok(ProfileId(self.last))
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
