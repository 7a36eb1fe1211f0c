//! Directory session.
//!
//! One [`ProfileDirectory`] owns the store and is shared by every view. It also
//! keeps the ambient UI state: the current search term and the profile
//! highlighted for map display. Neither is persisted.

use crate::error::Result;
use crate::form::ProfileForm;
use crate::search::SearchView;
use crate::storage::{
    FileBackend, MemoryBackend, Profile, ProfileFields, ProfileId, ProfileStore, SnapshotBackend,
};

pub struct ProfileDirectory<B: SnapshotBackend = FileBackend> {
    store: ProfileStore<B>,
    search_term: String,
    selected: Option<ProfileId>,
}

impl ProfileDirectory<MemoryBackend> {
    /// Directory with nothing persisted beyond the process.
    pub fn in_memory() -> Self {
        Self::new(ProfileStore::open(MemoryBackend::new()))
    }
}

impl<B: SnapshotBackend> ProfileDirectory<B> {
    pub fn new(store: ProfileStore<B>) -> Self {
        Self {
            store,
            search_term: String::new(),
            selected: None,
        }
    }

    pub fn open(backend: B) -> Self {
        Self::new(ProfileStore::open(backend))
    }

    pub fn store(&self) -> &ProfileStore<B> {
        &self.store
    }

    // =========================================================================
    // Search
    // =========================================================================

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// Profiles matching the current search term.
    pub fn visible(&self) -> SearchView<'_> {
        self.store.search(&self.search_term)
    }

    /// Detail lookup. Searches the full collection, ignoring the search term.
    pub fn find(&self, id: ProfileId) -> Option<&Profile> {
        self.store.get(id)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn select(&mut self, id: ProfileId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The highlighted profile, if it still exists.
    pub fn selected(&self) -> Option<&Profile> {
        self.selected.and_then(|id| self.store.get(id))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn add(&mut self, fields: ProfileFields) -> Result<Profile> {
        self.store.add(fields)
    }

    pub fn update(&mut self, id: ProfileId, fields: ProfileFields) -> Result<bool> {
        self.store.update(id, fields)
    }

    pub fn delete(&mut self, id: ProfileId) -> Result<bool> {
        let removed = self.store.delete(id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(removed)
    }

    /// Validate a form and either create a profile or update `editing`.
    ///
    /// Returns the stored profile, or `None` when `editing` names a profile
    /// that no longer exists.
    pub fn submit(&mut self, form: &ProfileForm, editing: Option<ProfileId>) -> Result<Option<Profile>> {
        let fields = form.validate()?;
        match editing {
            None => self.add(fields).map(Some),
            Some(id) => {
                self.update(id, fields)?;
                Ok(self.store.get(id).cloned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;

    fn form(name: &str, location: &str) -> ProfileForm {
        ProfileForm {
            name: name.into(),
            photo: "https://example.com/p.png".into(),
            description: "About".into(),
            location: location.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_visible_follows_search_term() {
        let mut dir = ProfileDirectory::in_memory();
        dir.submit(&form("Ada", "London"), None).unwrap();
        dir.submit(&form("Grace", "Arlington"), None).unwrap();

        assert_eq!(dir.visible().len(), 2);
        dir.set_search_term("ada");
        assert_eq!(dir.visible().len(), 1);

        // A new match shows up without resetting the term.
        dir.submit(&form("Adam", "Paris"), None).unwrap();
        assert_eq!(dir.visible().len(), 2);

        dir.clear_search();
        assert_eq!(dir.search_term(), "");
        assert_eq!(dir.visible().len(), 3);
    }

    #[test]
    fn test_find_ignores_search_term() {
        let mut dir = ProfileDirectory::in_memory();
        let ada = dir.submit(&form("Ada", "London"), None).unwrap().unwrap();
        dir.set_search_term("nobody");
        assert!(dir.visible().is_empty());
        assert_eq!(dir.find(ada.id), Some(&ada));
    }

    #[test]
    fn test_selection_cleared_on_delete() {
        let mut dir = ProfileDirectory::in_memory();
        let ada = dir.submit(&form("Ada", "London"), None).unwrap().unwrap();
        dir.select(ada.id);
        assert_eq!(dir.selected().map(|p| p.id), Some(ada.id));

        assert!(dir.delete(ada.id).unwrap());
        assert!(dir.selected().is_none());
    }

    #[test]
    fn test_submit_edit_updates_in_place() {
        let mut dir = ProfileDirectory::in_memory();
        let ada = dir.submit(&form("Ada", "London"), None).unwrap().unwrap();

        let mut edit = ProfileForm::from_profile(&ada);
        edit.skills = "Analysis, Notes".into();
        let updated = dir.submit(&edit, Some(ada.id)).unwrap().unwrap();

        assert_eq!(updated.id, ada.id);
        assert_eq!(updated.fields.skills, vec!["Analysis", "Notes"]);
        assert_eq!(dir.store().len(), 1);
    }

    #[test]
    fn test_submit_edit_of_missing_profile() {
        let mut dir = ProfileDirectory::in_memory();
        let result = dir.submit(&form("Ghost", "Nowhere"), Some(ProfileId(5))).unwrap();
        assert!(result.is_none());
        assert!(dir.store().is_empty());
    }

    #[test]
    fn test_submit_invalid_never_reaches_store() {
        let mut dir = ProfileDirectory::in_memory();
        let err = dir.submit(&form("", "London"), None).unwrap_err();
        assert!(matches!(err, DirectoryError::MissingField { field: "name" }));
        assert!(dir.store().is_empty());
    }
}
