use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bistro_core::{Entity, ItemId, UserId, WasteId};

use crate::item::UnitOfMeasure;

/// Why stock was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteReason {
    Expired,
    Damaged,
    Spoiled,
    Overcooked,
    CustomerReturn,
    Spilled,
    Other,
}

impl WasteReason {
    pub fn label(self) -> &'static str {
        match self {
            WasteReason::Expired => "expired",
            WasteReason::Damaged => "damaged",
            WasteReason::Spoiled => "spoiled",
            WasteReason::Overcooked => "overcooked",
            WasteReason::CustomerReturn => "customer_return",
            WasteReason::Spilled => "spilled",
            WasteReason::Other => "other",
        }
    }
}

/// Immutable record of discarded stock.
///
/// Always created as one half of an atomic pair with a `Waste`-typed stock
/// movement decrementing the item — both exist or neither does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteRecord {
    pub id: WasteId,
    pub item_id: ItemId,
    /// Primary-locale item name at the time of the waste.
    pub item_name: String,
    pub quantity: Decimal,
    pub unit: UnitOfMeasure,
    pub reason: WasteReason,
    /// `quantity * cost_per_unit` at the time of waste, in minor currency units.
    pub cost_value: Decimal,
    pub reported_by: UserId,
    pub notes: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl Entity for WasteRecord {
    type Id = WasteId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Command: RecordWaste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordWaste {
    pub item_id: ItemId,
    pub quantity: Decimal,
    pub unit: UnitOfMeasure,
    pub reason: WasteReason,
    pub reported_by: UserId,
    pub reported_by_name: String,
    pub notes: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waste_reason_serializes_snake_case() {
        let json = serde_json::to_string(&WasteReason::CustomerReturn).unwrap();
        assert_eq!(json, "\"customer_return\"");
        assert_eq!(WasteReason::CustomerReturn.label(), "customer_return");
    }
}
