//! Profile Directory Library
//!
//! A searchable directory of people profiles, persisted locally as a single
//! JSON snapshot.
//!
//! # Features
//!
//! - Create, update and delete profiles with store-assigned ids
//! - Case-insensitive search by name or location
//! - Parse admin form input into validated profile fields
//! - Look up a profile's location for map display
//!
//! # Example
//!
//! ```
//! use profile_directory::ProfileDirectory;
//! use profile_directory::form::ProfileForm;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut directory = ProfileDirectory::in_memory();
//!
//!     let form = ProfileForm {
//!         name: "Ada".into(),
//!         photo: "https://example.com/ada.png".into(),
//!         description: "Mathematician".into(),
//!         location: "London".into(),
//!         interests: "Math, Computing".into(),
//!         ..Default::default()
//!     };
//!     let ada = directory.submit(&form, None)?.expect("created");
//!     assert_eq!(ada.fields.interests, vec!["Math", "Computing"]);
//!
//!     directory.set_search_term("lon");
//!     assert_eq!(directory.visible().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod directory;
pub mod error;
pub mod form;
pub mod geocode;
pub mod search;
pub mod storage;
pub mod utils;

// Re-exports for convenience
pub use config::DirectoryConfig;
pub use directory::ProfileDirectory;
pub use error::{DirectoryError, Result};
pub use storage::{Profile, ProfileFields, ProfileId, ProfileStore};
