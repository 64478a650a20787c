use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bistro_core::{Entity, ItemId, SupplierId, ValueObject};

/// Bilingual display name (primary locale + secondary locale).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub primary: String,
    pub secondary: String,
}

impl LocalizedName {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

impl ValueObject for LocalizedName {}

/// Stock-keeping category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Meat,
    Seafood,
    Vegetables,
    Fruits,
    Dairy,
    Grains,
    Spices,
    Beverages,
    Frozen,
    DryGoods,
}

impl ItemCategory {
    /// All categories in display order. Category breakdowns iterate this so
    /// derived output stays deterministic.
    pub const ALL: [ItemCategory; 10] = [
        ItemCategory::Meat,
        ItemCategory::Seafood,
        ItemCategory::Vegetables,
        ItemCategory::Fruits,
        ItemCategory::Dairy,
        ItemCategory::Grains,
        ItemCategory::Spices,
        ItemCategory::Beverages,
        ItemCategory::Frozen,
        ItemCategory::DryGoods,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ItemCategory::Meat => "meat",
            ItemCategory::Seafood => "seafood",
            ItemCategory::Vegetables => "vegetables",
            ItemCategory::Fruits => "fruits",
            ItemCategory::Dairy => "dairy",
            ItemCategory::Grains => "grains",
            ItemCategory::Spices => "spices",
            ItemCategory::Beverages => "beverages",
            ItemCategory::Frozen => "frozen",
            ItemCategory::DryGoods => "dry_goods",
        }
    }
}

/// Unit of measure for stock quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitOfMeasure {
    Kilogram,
    Gram,
    Liter,
    Milliliter,
    Piece,
    Box,
    Pack,
}

impl UnitOfMeasure {
    pub fn label(self) -> &'static str {
        match self {
            UnitOfMeasure::Kilogram => "kg",
            UnitOfMeasure::Gram => "g",
            UnitOfMeasure::Liter => "l",
            UnitOfMeasure::Milliliter => "ml",
            UnitOfMeasure::Piece => "piece",
            UnitOfMeasure::Box => "box",
            UnitOfMeasure::Pack => "pack",
        }
    }
}

/// A trackable stock-keeping unit.
///
/// `minimum_stock` / `maximum_stock` are advisory reorder bounds, not enforced
/// invariants: stock may exceed the maximum or fall below the minimum. The one
/// hard invariant is `current_stock >= 0` (withdrawals clamp at zero). Items
/// are soft-deactivated via `is_active`, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: LocalizedName,
    pub category: ItemCategory,
    pub unit: UnitOfMeasure,
    pub current_stock: Decimal,
    pub minimum_stock: Decimal,
    pub maximum_stock: Decimal,
    /// Cost per unit in minor currency units.
    pub cost_per_unit: i64,
    /// Optional sell price in minor currency units.
    pub sell_price: Option<i64>,
    pub supplier_id: Option<SupplierId>,
    pub last_restocked_at: DateTime<Utc>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub storage_location: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// An item is low on stock when at or below its configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.minimum_stock
    }

    /// Current stock valued at the current cost per unit (minor currency units).
    pub fn stock_value(&self) -> Decimal {
        self.current_stock * Decimal::from(self.cost_per_unit)
    }

    /// Merge non-`None` patch fields into the item and bump `updated_at`.
    ///
    /// This is a direct field edit (e.g. correcting a reorder bound) — it does
    /// not touch `current_stock` and creates no movement record.
    pub fn apply_patch(&mut self, patch: &ItemPatch, occurred_at: DateTime<Utc>) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(minimum_stock) = patch.minimum_stock {
            self.minimum_stock = minimum_stock;
        }
        if let Some(maximum_stock) = patch.maximum_stock {
            self.maximum_stock = maximum_stock;
        }
        if let Some(cost_per_unit) = patch.cost_per_unit {
            self.cost_per_unit = cost_per_unit;
        }
        if let Some(sell_price) = patch.sell_price {
            self.sell_price = Some(sell_price);
        }
        if let Some(supplier_id) = patch.supplier_id {
            self.supplier_id = Some(supplier_id);
        }
        if let Some(expiry_date) = patch.expiry_date {
            self.expiry_date = Some(expiry_date);
        }
        if let Some(storage_location) = &patch.storage_location {
            self.storage_location = storage_location.clone();
        }
        self.updated_at = occurred_at;
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Partial update for direct field edits. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<LocalizedName>,
    pub category: Option<ItemCategory>,
    pub unit: Option<UnitOfMeasure>,
    pub minimum_stock: Option<Decimal>,
    pub maximum_stock: Option<Decimal>,
    pub cost_per_unit: Option<i64>,
    pub sell_price: Option<i64>,
    pub supplier_id: Option<SupplierId>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub storage_location: Option<String>,
}

/// Command: CreateItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItem {
    pub item_id: ItemId,
    pub name: LocalizedName,
    pub category: ItemCategory,
    pub unit: UnitOfMeasure,
    pub current_stock: Decimal,
    pub minimum_stock: Decimal,
    pub maximum_stock: Decimal,
    pub cost_per_unit: i64,
    pub sell_price: Option<i64>,
    pub supplier_id: Option<SupplierId>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub storage_location: String,
    pub occurred_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(now: DateTime<Utc>) -> InventoryItem {
        InventoryItem {
            id: ItemId::new(),
            name: LocalizedName::new("Tomatoes", "Pomodori"),
            category: ItemCategory::Vegetables,
            unit: UnitOfMeasure::Kilogram,
            current_stock: Decimal::new(120, 1),
            minimum_stock: Decimal::from(5),
            maximum_stock: Decimal::from(40),
            cost_per_unit: 350,
            sell_price: None,
            supplier_id: None,
            last_restocked_at: now,
            expiry_date: None,
            storage_location: "walk-in cooler".to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn stock_value_is_quantity_times_unit_cost() {
        let item = test_item(Utc::now());
        // 12.0 kg * 350 = 4200
        assert_eq!(item.stock_value(), Decimal::from(4200));
    }

    #[test]
    fn low_stock_boundary_is_inclusive() {
        let mut item = test_item(Utc::now());
        item.current_stock = item.minimum_stock;
        assert!(item.is_low_stock());
        item.current_stock = item.minimum_stock + Decimal::new(1, 2);
        assert!(!item.is_low_stock());
    }

    #[test]
    fn apply_patch_merges_only_set_fields_and_bumps_updated_at() {
        let created = Utc::now();
        let mut item = test_item(created);
        let edited = created + chrono::Duration::minutes(5);

        let patch = ItemPatch {
            minimum_stock: Some(Decimal::from(8)),
            cost_per_unit: Some(420),
            ..ItemPatch::default()
        };
        item.apply_patch(&patch, edited);

        assert_eq!(item.minimum_stock, Decimal::from(8));
        assert_eq!(item.cost_per_unit, 420);
        // Untouched fields keep their values; stock is never patched.
        assert_eq!(item.current_stock, Decimal::new(120, 1));
        assert_eq!(item.name.primary, "Tomatoes");
        assert_eq!(item.updated_at, edited);
        assert_eq!(item.created_at, created);
    }

    #[test]
    fn empty_patch_still_bumps_updated_at() {
        let created = Utc::now();
        let mut item = test_item(created);
        let edited = created + chrono::Duration::minutes(1);

        item.apply_patch(&ItemPatch::default(), edited);
        assert_eq!(item.updated_at, edited);
    }
}
