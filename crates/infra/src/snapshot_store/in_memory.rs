use std::sync::RwLock;

use bistro_inventory::InventorySnapshot;

use super::{SnapshotError, SnapshotStore};

/// In-memory snapshot store.
///
/// Intended for tests and ephemeral sessions — nothing outlives the process.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    slot: RwLock<Option<InventorySnapshot>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a snapshot, as if a previous session had saved it.
    pub fn with_snapshot(snapshot: InventorySnapshot) -> Self {
        Self {
            slot: RwLock::new(Some(snapshot)),
        }
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<Option<InventorySnapshot>, SnapshotError> {
        match self.slot.read() {
            Ok(slot) => Ok(slot.clone()),
            Err(_) => Ok(None), // poisoned lock: treat as no snapshot
        }
    }

    fn save(&self, snapshot: &InventorySnapshot) -> Result<(), SnapshotError> {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(snapshot.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_is_none_until_first_save() {
        let store = InMemorySnapshotStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&InventorySnapshot::default()).unwrap();
        assert_eq!(store.load().unwrap(), Some(InventorySnapshot::default()));
    }
}
