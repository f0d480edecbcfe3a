//! Persisted session snapshot.
//!
//! The full store shape (workout plus selection) is mirrored into a single
//! JSON file under the data directory: written after every mutation, read
//! once at startup. The channel carries no schema version; a missing or
//! unreadable file simply yields no snapshot, and the caller starts fresh.

use std::path::PathBuf;

use super::data_dir;
use crate::error::SnapshotError;
use crate::store::Snapshot;

/// File name of the session snapshot slot.
pub const SNAPSHOT_FILE: &str = "session.json";

/// Storage for the session snapshot.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Open the snapshot store at the default location.
    pub fn open() -> Result<Self, SnapshotError> {
        let dir = data_dir().map_err(|source| SnapshotError::Io {
            path: PathBuf::from("<data dir>"),
            source,
        })?;
        Ok(Self {
            path: dir.join(SNAPSHOT_FILE),
        })
    }

    /// Create a snapshot store with a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the snapshot, if a readable one exists.
    ///
    /// Missing and malformed files both yield `None`: the snapshot is a
    /// cache of the last session, never a source of errors at startup.
    pub fn load(&self) -> Option<Snapshot> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Write the snapshot, replacing any previous one.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let content = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&self.path, content).map_err(|source| SnapshotError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::WorkoutStore;
    use crate::template::Template;

    #[test]
    fn missing_file_yields_no_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::with_path(dir.path().join(SNAPSHOT_FILE));
        assert!(store.load().is_none());
    }

    #[test]
    fn snapshot_roundtrips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let snapshots = SnapshotStore::with_path(dir.path().join(SNAPSHOT_FILE));

        let mut store = WorkoutStore::with_title("Persisted");
        store.add_block(Template::CardioInterval.materialize());
        snapshots.save(&store.to_snapshot()).unwrap();

        let restored = WorkoutStore::from_snapshot(snapshots.load().unwrap());
        assert_eq!(restored.title(), "Persisted");
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.selection(), store.selection());
    }

    #[test]
    fn malformed_file_yields_no_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        let store = SnapshotStore::with_path(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn save_overwrites_the_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let snapshots = SnapshotStore::with_path(dir.path().join(SNAPSHOT_FILE));

        let mut store = WorkoutStore::new();
        store.add_block(Template::CardioWarmup.materialize());
        snapshots.save(&store.to_snapshot()).unwrap();
        store.clear_all();
        snapshots.save(&store.to_snapshot()).unwrap();

        let restored = WorkoutStore::from_snapshot(snapshots.load().unwrap());
        assert!(restored.is_empty());
    }
}
