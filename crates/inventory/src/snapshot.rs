use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;
use crate::movement::StockMovement;
use crate::supplier::Supplier;
use crate::waste::WasteRecord;

/// The persisted state layout: a single JSON document keyed by logical
/// section, each an ordered sequence of the corresponding entity (movements
/// newest-first). Timestamps serialize as ISO-8601 via chrono.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub items: Vec<InventoryItem>,
    pub movements: Vec<StockMovement>,
    pub suppliers: Vec<Supplier>,
    pub waste_records: Vec<WasteRecord>,
}

impl InventorySnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.movements.is_empty()
            && self.suppliers.is_empty()
            && self.waste_records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemCategory, LocalizedName, UnitOfMeasure};
    use bistro_core::ItemId;
    use chrono::Utc;
    use rust_decimal::Decimal;

    #[test]
    fn sections_serialize_under_camel_case_keys() {
        let json = serde_json::to_value(InventorySnapshot::default()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["items", "movements", "suppliers", "wasteRecords"]);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let now = Utc::now();
        let snapshot = InventorySnapshot {
            items: vec![InventoryItem {
                id: ItemId::new(),
                name: LocalizedName::new("Rice", "Riso"),
                category: ItemCategory::Grains,
                unit: UnitOfMeasure::Kilogram,
                current_stock: Decimal::new(255, 1),
                minimum_stock: Decimal::from(10),
                maximum_stock: Decimal::from(80),
                cost_per_unit: 120,
                sell_price: Some(300),
                supplier_id: None,
                last_restocked_at: now,
                expiry_date: None,
                storage_location: "dry store".to_string(),
                is_active: true,
                created_at: now,
                updated_at: now,
            }],
            movements: Vec::new(),
            suppliers: Vec::new(),
            waste_records: Vec::new(),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: InventorySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }
}
