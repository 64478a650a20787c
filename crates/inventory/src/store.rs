use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bistro_core::{DomainError, DomainResult, ItemId, MovementId, WasteId};

use crate::alert::{LowStockAlert, derive_low_stock_alerts};
use crate::analytics::{InventoryAnalytics, derive_analytics};
use crate::item::{CreateItem, InventoryItem, ItemPatch};
use crate::movement::{MovementType, RecordMovement, StockMovement};
use crate::snapshot::InventorySnapshot;
use crate::supplier::Supplier;
use crate::waste::{RecordWaste, WasteRecord};

/// Command: UpdateItem — direct field edit, distinct from a stock movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateItem {
    pub item_id: ItemId,
    pub patch: ItemPatch,
    pub occurred_at: DateTime<Utc>,
}

/// Single source of truth for items, the movement ledger, waste records, and
/// suppliers.
///
/// The store is an explicit state holder: construct one per session and pass
/// it to consumers (no ambient singletons). Every successful mutation eagerly
/// recomputes the derived low-stock alerts and analytics, so reads of
/// [`InventoryStore::low_stock_alerts`] and [`InventoryStore::analytics`] are
/// always current. The derivations themselves stay pure free functions
/// ([`derive_low_stock_alerts`], [`derive_analytics`]) so they remain
/// deterministic and independently testable.
///
/// Invalid input is rejected with a typed [`DomainError`]: an unknown item id
/// is `NotFound`, a non-positive quantity is `Validation`. Insufficient stock
/// on a withdrawal is deliberately *not* an error — stock clamps at zero and
/// the movement is recorded in full. The system never blocks a withdrawal.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryStore {
    items: Vec<InventoryItem>,
    movements: Vec<StockMovement>,
    suppliers: Vec<Supplier>,
    waste_records: Vec<WasteRecord>,
    alerts: Vec<LowStockAlert>,
    analytics: InventoryAnalytics,
}

impl InventoryStore {
    /// An empty store with zeroed derived views.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            movements: Vec::new(),
            suppliers: Vec::new(),
            waste_records: Vec::new(),
            alerts: Vec::new(),
            analytics: InventoryAnalytics::empty(),
        }
    }

    /// Rebuild a store from a persisted snapshot, recomputing derived views
    /// as of `now`.
    pub fn from_snapshot(snapshot: InventorySnapshot, now: DateTime<Utc>) -> Self {
        let mut store = Self {
            items: snapshot.items,
            movements: snapshot.movements,
            suppliers: snapshot.suppliers,
            waste_records: snapshot.waste_records,
            alerts: Vec::new(),
            analytics: InventoryAnalytics::empty(),
        };
        store.refresh_derived(now);
        store
    }

    /// The persisted document form of the current state. Derived views are
    /// not included — they are recomputed on load.
    pub fn to_snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            items: self.items.clone(),
            movements: self.movements.clone(),
            suppliers: self.suppliers.clone(),
            waste_records: self.waste_records.clone(),
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Movement ledger, newest first.
    pub fn movements(&self) -> &[StockMovement] {
        &self.movements
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn waste_records(&self) -> &[WasteRecord] {
        &self.waste_records
    }

    /// Current low-stock alerts (recomputed after every mutation).
    pub fn low_stock_alerts(&self) -> &[LowStockAlert] {
        &self.alerts
    }

    /// Current analytics snapshot (recomputed after every mutation).
    pub fn analytics(&self) -> &InventoryAnalytics {
        &self.analytics
    }

    pub fn item(&self, item_id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Register a new stock item.
    pub fn create_item(&mut self, cmd: CreateItem) -> DomainResult<&InventoryItem> {
        if cmd.name.primary.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        if cmd.current_stock < Decimal::ZERO
            || cmd.minimum_stock < Decimal::ZERO
            || cmd.maximum_stock < Decimal::ZERO
        {
            return Err(DomainError::validation("stock levels cannot be negative"));
        }
        if cmd.cost_per_unit < 0 {
            return Err(DomainError::validation("cost per unit cannot be negative"));
        }
        if self.item(cmd.item_id).is_some() {
            return Err(DomainError::conflict("item already exists"));
        }

        let occurred_at = cmd.occurred_at;
        self.items.push(InventoryItem {
            id: cmd.item_id,
            name: cmd.name,
            category: cmd.category,
            unit: cmd.unit,
            current_stock: cmd.current_stock,
            minimum_stock: cmd.minimum_stock,
            maximum_stock: cmd.maximum_stock,
            cost_per_unit: cmd.cost_per_unit,
            sell_price: cmd.sell_price,
            supplier_id: cmd.supplier_id,
            last_restocked_at: occurred_at,
            expiry_date: cmd.expiry_date,
            storage_location: cmd.storage_location,
            is_active: true,
            created_at: occurred_at,
            updated_at: occurred_at,
        });
        self.refresh_derived(occurred_at);

        let idx = self.items.len() - 1;
        Ok(&self.items[idx])
    }

    /// Append a movement to the ledger and apply its stock effect.
    ///
    /// StockIn increases stock and refreshes `last_restocked_at`; StockOut and
    /// Waste decrease it, clamped at zero. The new movement is prepended so
    /// the ledger reads newest-first.
    pub fn record_movement(&mut self, cmd: RecordMovement) -> DomainResult<&StockMovement> {
        if cmd.quantity <= Decimal::ZERO {
            return Err(DomainError::validation("quantity must be positive"));
        }
        let idx = self.item_index(cmd.item_id)?;

        let total_cost = cmd
            .cost_per_unit
            .map(|cost| cmd.quantity * Decimal::from(cost));
        let movement = StockMovement {
            id: MovementId::new(),
            item_id: cmd.item_id,
            item_name: self.items[idx].name.primary.clone(),
            movement_type: cmd.movement_type,
            quantity: cmd.quantity,
            unit: cmd.unit,
            cost_per_unit: cmd.cost_per_unit,
            total_cost,
            reason: cmd.reason,
            reference_id: cmd.reference_id,
            supplier_id: cmd.supplier_id,
            performed_by: cmd.performed_by,
            performed_by_name: cmd.performed_by_name,
            expiry_date: cmd.expiry_date,
            occurred_at: cmd.occurred_at,
        };

        self.apply_stock_effect(idx, &movement);
        self.movements.insert(0, movement);
        self.refresh_derived(cmd.occurred_at);
        Ok(&self.movements[0])
    }

    /// Record discarded stock: one `WasteRecord` plus one paired
    /// `Waste`-typed movement, created together.
    ///
    /// `cost_value` uses the item's *current* cost per unit, not a historical
    /// cost. All validation happens before either record is committed, so the
    /// pair is atomic — both exist or neither does.
    pub fn record_waste(&mut self, cmd: RecordWaste) -> DomainResult<&WasteRecord> {
        if cmd.quantity <= Decimal::ZERO {
            return Err(DomainError::validation("quantity must be positive"));
        }
        let idx = self.item_index(cmd.item_id)?;

        let item = &self.items[idx];
        let cost_per_unit = item.cost_per_unit;
        let cost_value = cmd.quantity * Decimal::from(cost_per_unit);
        let item_name = item.name.primary.clone();

        let record = WasteRecord {
            id: WasteId::new(),
            item_id: cmd.item_id,
            item_name: item_name.clone(),
            quantity: cmd.quantity,
            unit: cmd.unit,
            reason: cmd.reason,
            cost_value,
            reported_by: cmd.reported_by,
            notes: cmd.notes,
            occurred_at: cmd.occurred_at,
        };
        let movement = StockMovement {
            id: MovementId::new(),
            item_id: cmd.item_id,
            item_name,
            movement_type: MovementType::Waste,
            quantity: cmd.quantity,
            unit: cmd.unit,
            cost_per_unit: Some(cost_per_unit),
            total_cost: Some(cost_value),
            reason: cmd.reason.label().to_string(),
            reference_id: None,
            supplier_id: None,
            performed_by: cmd.reported_by,
            performed_by_name: cmd.reported_by_name,
            expiry_date: None,
            occurred_at: cmd.occurred_at,
        };

        self.apply_stock_effect(idx, &movement);
        self.movements.insert(0, movement);
        self.waste_records.push(record);
        self.refresh_derived(cmd.occurred_at);

        let last = self.waste_records.len() - 1;
        Ok(&self.waste_records[last])
    }

    /// Merge a partial field edit into an item. Creates no movement record.
    pub fn update_item(&mut self, cmd: UpdateItem) -> DomainResult<&InventoryItem> {
        let idx = self.item_index(cmd.item_id)?;
        self.items[idx].apply_patch(&cmd.patch, cmd.occurred_at);
        self.refresh_derived(cmd.occurred_at);
        Ok(&self.items[idx])
    }

    /// Soft-deactivate an item. Its history stays intact; it stops producing
    /// alerts.
    pub fn deactivate_item(
        &mut self,
        item_id: ItemId,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let idx = self.item_index(item_id)?;
        if !self.items[idx].is_active {
            return Err(DomainError::conflict("item is already inactive"));
        }
        self.items[idx].is_active = false;
        self.items[idx].updated_at = occurred_at;
        self.refresh_derived(occurred_at);
        Ok(())
    }

    /// Reverse a soft deactivation.
    pub fn reactivate_item(
        &mut self,
        item_id: ItemId,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let idx = self.item_index(item_id)?;
        if self.items[idx].is_active {
            return Err(DomainError::conflict("item is already active"));
        }
        self.items[idx].is_active = true;
        self.items[idx].updated_at = occurred_at;
        self.refresh_derived(occurred_at);
        Ok(())
    }

    fn item_index(&self, item_id: ItemId) -> DomainResult<usize> {
        self.items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(DomainError::not_found)
    }

    fn apply_stock_effect(&mut self, idx: usize, movement: &StockMovement) {
        let item = &mut self.items[idx];
        match movement.movement_type.stock_direction() {
            1 => {
                item.current_stock += movement.quantity;
                item.last_restocked_at = movement.occurred_at;
                if movement.expiry_date.is_some() {
                    item.expiry_date = movement.expiry_date;
                }
            }
            -1 => {
                // Withdrawals clamp at zero; insufficient stock never blocks.
                item.current_stock =
                    (item.current_stock - movement.quantity).max(Decimal::ZERO);
            }
            _ => {}
        }
        item.updated_at = movement.occurred_at;
    }

    fn refresh_derived(&mut self, now: DateTime<Utc>) {
        self.alerts = derive_low_stock_alerts(&self.items, &self.movements, now);
        self.analytics = derive_analytics(&self.items, &self.waste_records);
    }
}
