use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bistro_core::{Entity, ItemId, MovementId, SupplierId, UserId};

use crate::item::UnitOfMeasure;

/// Kind of stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    StockIn,
    StockOut,
    Waste,
    Adjustment,
    Transfer,
}

impl MovementType {
    /// Signed effect on `current_stock`: +1 adds, -1 withdraws, 0 ledger-only.
    ///
    /// Adjustment and Transfer entries are audit records without a stock delta
    /// in this scope; corrections go through explicit StockIn/StockOut.
    pub fn stock_direction(self) -> i8 {
        match self {
            MovementType::StockIn => 1,
            MovementType::StockOut | MovementType::Waste => -1,
            MovementType::Adjustment | MovementType::Transfer => 0,
        }
    }
}

/// An immutable ledger entry recording a stock change.
///
/// Movements are append-only: once recorded they are never mutated or deleted.
/// They reference their item by id only (weak reference, no cascading delete)
/// and carry a name snapshot so the ledger stays readable if the item is later
/// renamed or deactivated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: MovementId,
    pub item_id: ItemId,
    /// Primary-locale item name at the time of the movement.
    pub item_name: String,
    pub movement_type: MovementType,
    pub quantity: Decimal,
    pub unit: UnitOfMeasure,
    /// Cost per unit in minor currency units, when known (incoming batches).
    pub cost_per_unit: Option<i64>,
    /// `quantity * cost_per_unit`, when a cost is supplied.
    pub total_cost: Option<Decimal>,
    pub reason: String,
    pub reference_id: Option<String>,
    pub supplier_id: Option<SupplierId>,
    pub performed_by: UserId,
    pub performed_by_name: String,
    /// Expiry of the incoming batch, for StockIn movements.
    pub expiry_date: Option<DateTime<Utc>>,
    pub occurred_at: DateTime<Utc>,
}

impl Entity for StockMovement {
    type Id = MovementId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Command: RecordMovement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMovement {
    pub item_id: ItemId,
    pub movement_type: MovementType,
    pub quantity: Decimal,
    pub unit: UnitOfMeasure,
    pub reason: String,
    pub performed_by: UserId,
    pub performed_by_name: String,
    pub cost_per_unit: Option<i64>,
    pub supplier_id: Option<SupplierId>,
    pub reference_id: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub occurred_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_direction_matches_movement_semantics() {
        assert_eq!(MovementType::StockIn.stock_direction(), 1);
        assert_eq!(MovementType::StockOut.stock_direction(), -1);
        assert_eq!(MovementType::Waste.stock_direction(), -1);
        assert_eq!(MovementType::Adjustment.stock_direction(), 0);
        assert_eq!(MovementType::Transfer.stock_direction(), 0);
    }

    #[test]
    fn movement_type_serializes_snake_case() {
        let json = serde_json::to_string(&MovementType::StockIn).unwrap();
        assert_eq!(json, "\"stock_in\"");
    }
}
