//! Session bootstrap: load the persisted snapshot or fall back to seed data.

use chrono::{DateTime, Utc};

use bistro_inventory::InventoryStore;

use crate::seed::seed_snapshot;
use crate::snapshot_store::SnapshotStore;

/// Build the session's inventory store from persisted state.
///
/// Three outcomes, none of which fail the caller:
/// - a snapshot loads: the store is rebuilt from it;
/// - no snapshot exists: a fresh store is seeded;
/// - the load errors (unreadable or corrupt document): the error is logged
///   and the store is seeded — a broken snapshot must not take the session
///   down.
pub fn load_or_seed<S: SnapshotStore>(store: &S, now: DateTime<Utc>) -> InventoryStore {
    match store.load() {
        Ok(Some(snapshot)) => {
            tracing::info!(
                items = snapshot.items.len(),
                movements = snapshot.movements.len(),
                "loaded inventory snapshot"
            );
            InventoryStore::from_snapshot(snapshot, now)
        }
        Ok(None) => {
            tracing::info!("no inventory snapshot found, seeding");
            InventoryStore::from_snapshot(seed_snapshot(now), now)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load inventory snapshot, falling back to seed data");
            InventoryStore::from_snapshot(seed_snapshot(now), now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot_store::{InMemorySnapshotStore, JsonFileSnapshotStore};

    #[test]
    fn empty_port_seeds_a_fresh_store() {
        let port = InMemorySnapshotStore::new();
        let store = load_or_seed(&port, Utc::now());
        assert!(!store.items().is_empty());
        assert!(store.movements().is_empty());
    }

    #[test]
    fn saved_snapshot_wins_over_seed() {
        let now = Utc::now();
        let mut session = InventoryStore::from_snapshot(seed_snapshot(now), now);
        let item_id = session.items()[0].id;
        session
            .record_movement(bistro_inventory::RecordMovement {
                item_id,
                movement_type: bistro_inventory::MovementType::StockIn,
                quantity: rust_decimal::Decimal::from(5),
                unit: session.items()[0].unit,
                reason: "delivery".to_string(),
                performed_by: bistro_core::UserId::new(),
                performed_by_name: "Dana".to_string(),
                cost_per_unit: Some(500),
                supplier_id: None,
                reference_id: None,
                expiry_date: None,
                occurred_at: now,
            })
            .unwrap();

        let port = InMemorySnapshotStore::with_snapshot(session.to_snapshot());
        let restored = load_or_seed(&port, now);
        assert_eq!(restored.movements().len(), 1);
        assert_eq!(restored.items(), session.items());
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_seed() {
        let path = std::env::temp_dir().join(format!(
            "bistro-bootstrap-corrupt-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "]]not json[[").unwrap();

        let port = JsonFileSnapshotStore::new(&path);
        let store = load_or_seed(&port, Utc::now());
        assert!(!store.items().is_empty());

        let _ = std::fs::remove_file(path);
    }
}
