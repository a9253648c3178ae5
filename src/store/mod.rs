pub mod memory;
pub mod snapshot;
pub mod sqlite;

use crate::app::Result;

pub use memory::MemoryStore;
pub use snapshot::SnapshotStore;
pub use sqlite::SqliteStore;

/// Flat key-value blob storage.
///
/// The persistence boundary of the whole system: one string blob per key,
/// overwritten wholesale. Backends only move bytes; serialization and the
/// snapshot policy live in [`SnapshotStore`].
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}
