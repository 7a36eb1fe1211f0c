//! Profile store.
//!
//! Owns the authoritative collection and writes the whole snapshot after every
//! mutation. A mutation is only committed in memory once its snapshot has been
//! written, so a failed save leaves the store exactly as it was.

use tracing::debug;

use super::ids::IdGenerator;
use super::snapshot::{FileBackend, SnapshotBackend, encode_snapshot, load_or_empty};
use super::types::{Profile, ProfileFields, ProfileId};
use crate::error::{DirectoryError, Result};
use crate::search::SearchView;

pub struct ProfileStore<B: SnapshotBackend = FileBackend> {
    backend: B,
    profiles: Vec<Profile>,
    ids: IdGenerator,
}

impl<B: SnapshotBackend> ProfileStore<B> {
    /// Load the persisted collection. Never fails: a missing or corrupt
    /// snapshot gives an empty store.
    pub fn open(backend: B) -> Self {
        let profiles = load_or_empty(&backend);
        let ids = IdGenerator::seeded(profiles.iter().map(|p| &p.id));
        Self {
            backend,
            profiles,
            ids,
        }
    }

    /// Full collection in insertion order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Live filtered projection by name or location.
    pub fn search<'a>(&'a self, term: &'a str) -> SearchView<'a> {
        SearchView::new(&self.profiles, term)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a new profile under a freshly assigned id.
    pub fn add(&mut self, fields: ProfileFields) -> Result<Profile> {
        let mut ids = self.ids.clone();
        let profile = Profile {
            id: ids.next_id()?,
            fields,
        };

        let mut next = self.profiles.clone();
        next.push(profile.clone());
        self.commit(next)?;
        self.ids = ids;

        debug!(id = %profile.id, name = %profile.name(), "added profile");
        Ok(profile)
    }

    /// Replace the fields of `id`. Unknown ids leave the collection untouched.
    ///
    /// Returns whether a record was replaced.
    pub fn update(&mut self, id: ProfileId, fields: ProfileFields) -> Result<bool> {
        let mut found = false;
        let next: Vec<Profile> = self
            .profiles
            .iter()
            .map(|p| {
                if p.id == id {
                    found = true;
                    Profile {
                        id,
                        fields: fields.clone(),
                    }
                } else {
                    p.clone()
                }
            })
            .collect();

        self.commit(next)?;
        debug!(id = %id, found, "updated profile");
        Ok(found)
    }

    /// Remove `id` if present. Idempotent.
    ///
    /// Returns whether a record was removed.
    pub fn delete(&mut self, id: ProfileId) -> Result<bool> {
        let next: Vec<Profile> = self
            .profiles
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        let removed = next.len() != self.profiles.len();

        self.commit(next)?;
        debug!(id = %id, removed, "deleted profile");
        Ok(removed)
    }

    fn commit(&mut self, next: Vec<Profile>) -> Result<()> {
        let content = encode_snapshot(&next).map_err(|e| {
            DirectoryError::Persistence(format!("Failed to serialize profiles: {}", e))
        })?;

        self.backend
            .write(&content)
            .map_err(|e| DirectoryError::Persistence(format!("Failed to write profiles: {}", e)))?;

        self.profiles = next;
        Ok(())
    }
}
