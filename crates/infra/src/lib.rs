//! Infrastructure layer: snapshot persistence, seed data, session bootstrap.

pub mod bootstrap;
pub mod seed;
pub mod snapshot_store;

pub use bootstrap::load_or_seed;
pub use seed::seed_snapshot;
pub use snapshot_store::{
    InMemorySnapshotStore, JsonFileSnapshotStore, SnapshotError, SnapshotStore,
};
