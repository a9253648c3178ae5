use std::path::PathBuf;
use std::sync::Arc;

use tracing::warn;

use crate::app::error::{LarderError, Result};
use crate::list::{Command, ListState};
use crate::store::{BlobStore, MemoryStore, SnapshotStore, SqliteStore};

/// Wires the in-memory list to its persisted snapshot.
///
/// Construction probes the storage backend once; if the probe fails the
/// session runs memory-only and `storage_available` tells the presentation
/// layer to warn. Every dispatched command is applied in full, then the
/// resulting collection is mirrored to storage best-effort.
pub struct AppContext {
    list: ListState,
    snapshots: SnapshotStore,
    storage_available: bool,
}

impl AppContext {
    pub fn new(db_path: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        let store: Arc<dyn BlobStore> = Arc::new(SqliteStore::new(&db_path)?);
        Ok(Self::with_store(store))
    }

    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn BlobStore>) -> Self {
        let snapshots = SnapshotStore::new(store);
        let storage_available = snapshots.probe();

        let list = if storage_available {
            ListState::from_items(snapshots.load())
        } else {
            warn!("running without persistence, the list will not survive exit");
            ListState::new()
        };

        Self {
            list,
            snapshots,
            storage_available,
        }
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn storage_available(&self) -> bool {
        self.storage_available
    }

    /// Apply one command and mirror the result to storage.
    ///
    /// An unscoped clear-all removes the snapshot blob; every other command
    /// saves the new collection, except that empty collections are never
    /// saved (the snapshot store's own guard).
    pub fn dispatch(&mut self, command: Command) {
        let wipes_snapshot = matches!(command, Command::ClearAll { scope: None });
        self.list = self.list.apply(&command);

        if !self.storage_available {
            return;
        }
        if wipes_snapshot {
            self.snapshots.clear();
        } else {
            self.snapshots.save(self.list.items());
        }
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| LarderError::Config("Could not find data directory".into()))?;
        let larder_dir = data_dir.join("larder");
        std::fs::create_dir_all(&larder_dir)?;
        Ok(larder_dir.join("larder.db"))
    }
}
