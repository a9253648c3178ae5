use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::Item;
use crate::store::BlobStore;

/// Key the item snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "groceries";

const PROBE_KEY: &str = "larder-probe";

/// Persists the whole item collection as one JSON blob under a fixed key.
///
/// Nothing here is fatal: a missing or unreadable snapshot loads as an
/// empty collection, and a failed write leaves the in-memory list
/// authoritative for the rest of the session. Failures are logged and
/// swallowed.
pub struct SnapshotStore {
    store: Arc<dyn BlobStore>,
}

impl SnapshotStore {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Load the saved collection, or an empty one.
    ///
    /// A blob that fails to parse yields an empty collection, never a
    /// partial one.
    pub fn load(&self) -> Vec<Item> {
        let blob = match self.store.get(SNAPSHOT_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("failed to read snapshot, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(items) => items,
            Err(e) => {
                warn!("snapshot is not valid JSON, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the snapshot with the given collection.
    ///
    /// Skipped entirely when the collection is empty: an empty in-memory
    /// list (e.g. one that has not been loaded yet) must not wipe out a
    /// valid prior snapshot. Removing the blob is [`clear`](Self::clear),
    /// an explicit, separate action.
    pub fn save(&self, items: &[Item]) {
        if items.is_empty() {
            debug!("collection is empty, leaving previous snapshot in place");
            return;
        }

        let blob = match serde_json::to_string(items) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("failed to serialize snapshot: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.put(SNAPSHOT_KEY, &blob) {
            warn!("failed to write snapshot, list is in-memory only: {}", e);
        }
    }

    /// Remove the snapshot entirely.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(SNAPSHOT_KEY) {
            warn!("failed to remove snapshot: {}", e);
        }
    }

    /// Startup capability check: a trivial write and delete.
    ///
    /// When this fails, callers should treat storage as unavailable for the
    /// whole session and keep the list in memory only.
    pub fn probe(&self) -> bool {
        let ok = self.store.put(PROBE_KEY, "ok").is_ok() && self.store.remove(PROBE_KEY).is_ok();
        if !ok {
            warn!("storage probe failed, persistence is unavailable");
        }
        ok
    }
}
