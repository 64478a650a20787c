//! Inventory domain module.
//!
//! This crate contains the restaurant inventory state store: stock items, the
//! append-only movement ledger, waste records, suppliers, and the derived
//! low-stock alert and analytics views. Everything here is deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod alert;
pub mod analytics;
pub mod item;
pub mod movement;
pub mod snapshot;
pub mod store;
pub mod supplier;
pub mod waste;

pub use alert::{AlertUrgency, LowStockAlert, derive_low_stock_alerts};
pub use analytics::{
    CategoryBreakdown, InventoryAnalytics, WastedItemSummary, derive_analytics,
};
pub use item::{CreateItem, InventoryItem, ItemCategory, ItemPatch, LocalizedName, UnitOfMeasure};
pub use movement::{MovementType, RecordMovement, StockMovement};
pub use snapshot::InventorySnapshot;
pub use store::{InventoryStore, UpdateItem};
pub use supplier::Supplier;
pub use waste::{RecordWaste, WasteReason, WasteRecord};
