//! Profile storage and persistence module.
//!
//! Holds the profile data model, the snapshot backends and the store that
//! owns the collection.

pub mod ids;
pub mod profiles;
pub mod snapshot;
pub mod types;

// Re-export commonly used items
pub use profiles::ProfileStore;
pub use snapshot::{FileBackend, MemoryBackend, SnapshotBackend};
pub use types::*;
