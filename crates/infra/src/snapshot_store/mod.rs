//! Snapshot persistence port.
//!
//! The inventory store is persisted as a single JSON document
//! ([`bistro_inventory::InventorySnapshot`]). Consumers depend on the
//! [`SnapshotStore`] trait and receive an adapter by injection — the domain
//! never touches the filesystem directly.

use thiserror::Error;

use bistro_inventory::InventorySnapshot;

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemorySnapshotStore;
pub use json_file::JsonFileSnapshotStore;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot (de)serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Persistence port for the inventory snapshot document.
///
/// `load` returns `Ok(None)` when no snapshot has ever been saved — that is
/// not an error, it is a fresh session.
pub trait SnapshotStore {
    fn load(&self) -> Result<Option<InventorySnapshot>, SnapshotError>;

    fn save(&self, snapshot: &InventorySnapshot) -> Result<(), SnapshotError>;
}
