//! Snapshot persistence.
//!
//! The whole collection lives in one named entry as a JSON array, in
//! insertion order. Backends only move text; encoding happens here.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::types::Profile;

// =============================================================================
// Snapshot Entry
// =============================================================================

/// Name of the persisted entry.
pub const SNAPSHOT_KEY: &str = "profiles";
const SNAPSHOT_FILE: &str = "profiles.json";

/// Where the serialized collection is kept.
pub trait SnapshotBackend {
    /// Read the entry. `Ok(None)` when it was never written.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the entry.
    fn write(&mut self, contents: &str) -> io::Result<()>;
}

// =============================================================================
// Encoding
// =============================================================================

pub fn encode_snapshot(profiles: &[Profile]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(profiles)
}

pub fn decode_snapshot(contents: &str) -> serde_json::Result<Vec<Profile>> {
    serde_json::from_str(contents)
}

/// Load the collection, treating a missing, unreadable or corrupt entry as empty.
pub fn load_or_empty<B: SnapshotBackend + ?Sized>(backend: &B) -> Vec<Profile> {
    let contents = match backend.read() {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            debug!("no {} snapshot yet, starting empty", SNAPSHOT_KEY);
            return Vec::new();
        }
        Err(e) => {
            warn!("failed to read {} snapshot, starting empty: {}", SNAPSHOT_KEY, e);
            return Vec::new();
        }
    };

    match decode_snapshot(&contents) {
        Ok(profiles) => {
            debug!(count = profiles.len(), "loaded {} snapshot", SNAPSHOT_KEY);
            profiles
        }
        Err(e) => {
            warn!("ignoring corrupt {} snapshot: {}", SNAPSHOT_KEY, e);
            Vec::new()
        }
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// Snapshot stored as `profiles.json` inside a data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SNAPSHOT_FILE)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SnapshotBackend for FileBackend {
    fn read(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.path()) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        // Write beside the target then rename over it.
        let path = self.path();
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, contents).inspect_err(|_| {
            let _ = std::fs::remove_file(&tmp);
        })?;
        std::fs::rename(&tmp, &path).inspect_err(|_| {
            let _ = std::fs::remove_file(&tmp);
        })
    }
}

// =============================================================================
// Memory Backend
// =============================================================================

/// In-process snapshot entry.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entry: Option<String>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw entry contents, valid or not.
    pub fn with_entry(contents: impl Into<String>) -> Self {
        Self {
            entry: Some(contents.into()),
            fail_writes: false,
        }
    }

    /// Make every following write fail, as a full storage quota would.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn entry(&self) -> Option<&str> {
        self.entry.as_deref()
    }
}

impl SnapshotBackend for MemoryBackend {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.entry.clone())
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::StorageFull,
                "storage quota exceeded",
            ));
        }
        self.entry = Some(contents.to_string());
        Ok(())
    }
}
