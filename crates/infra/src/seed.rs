//! Seed data: a small, realistic restaurant inventory used when no snapshot
//! exists (fresh install) or a saved one fails to load.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use bistro_core::{ItemId, SupplierId};
use bistro_inventory::{
    InventoryItem, InventorySnapshot, ItemCategory, LocalizedName, Supplier, UnitOfMeasure,
};

/// Build the seed snapshot as of `now`.
pub fn seed_snapshot(now: DateTime<Utc>) -> InventorySnapshot {
    let harbor = Supplier {
        id: SupplierId::new(),
        name: "Harbor Fresh Seafood".to_string(),
        contact_person: "Marta Ruiz".to_string(),
        phone: "+1 555 0101".to_string(),
        email: "orders@harborfresh.example".to_string(),
        address: "12 Pier Road".to_string(),
        categories: vec![ItemCategory::Seafood, ItemCategory::Frozen],
        rating: Decimal::new(46, 1),
        payment_terms: "net 30".to_string(),
        delivery_lead_time_days: 2,
        minimum_order_value: 15_000,
        is_active: true,
    };
    let greenfield = Supplier {
        id: SupplierId::new(),
        name: "Greenfield Produce".to_string(),
        contact_person: "Omar Haddad".to_string(),
        phone: "+1 555 0144".to_string(),
        email: "sales@greenfield.example".to_string(),
        address: "480 Market Lane".to_string(),
        categories: vec![
            ItemCategory::Vegetables,
            ItemCategory::Fruits,
            ItemCategory::Spices,
        ],
        rating: Decimal::new(42, 1),
        payment_terms: "net 14".to_string(),
        delivery_lead_time_days: 1,
        minimum_order_value: 5_000,
        is_active: true,
    };

    let items = vec![
        seed_item(
            LocalizedName::new("Salmon Fillet", "Filetto di salmone"),
            ItemCategory::Seafood,
            UnitOfMeasure::Kilogram,
            Decimal::new(85, 1), // 8.5 on hand, below the minimum of 15
            Decimal::from(15),
            Decimal::from(40),
            2_400,
            Some(harbor.id),
            "walk-in cooler",
            Some(now + Duration::days(3)),
            now,
        ),
        seed_item(
            LocalizedName::new("Tomatoes", "Pomodori"),
            ItemCategory::Vegetables,
            UnitOfMeasure::Kilogram,
            Decimal::from(22),
            Decimal::from(10),
            Decimal::from(50),
            350,
            Some(greenfield.id),
            "dry store shelf 2",
            None,
            now,
        ),
        seed_item(
            LocalizedName::new("Olive Oil", "Olio d'oliva"),
            ItemCategory::DryGoods,
            UnitOfMeasure::Liter,
            Decimal::new(62, 1),
            Decimal::from(4),
            Decimal::from(24),
            1_150,
            None,
            "dry store shelf 1",
            None,
            now,
        ),
        seed_item(
            LocalizedName::new("Basmati Rice", "Riso basmati"),
            ItemCategory::Grains,
            UnitOfMeasure::Kilogram,
            Decimal::from(35),
            Decimal::from(12),
            Decimal::from(80),
            180,
            None,
            "dry store shelf 4",
            None,
            now,
        ),
        seed_item(
            LocalizedName::new("Whole Milk", "Latte intero"),
            ItemCategory::Dairy,
            UnitOfMeasure::Liter,
            Decimal::from(9),
            Decimal::from(18),
            Decimal::from(48),
            95,
            Some(greenfield.id),
            "walk-in cooler",
            Some(now + Duration::days(5)),
            now,
        ),
    ];

    InventorySnapshot {
        items,
        movements: Vec::new(),
        suppliers: vec![harbor, greenfield],
        waste_records: Vec::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_item(
    name: LocalizedName,
    category: ItemCategory,
    unit: UnitOfMeasure,
    current_stock: Decimal,
    minimum_stock: Decimal,
    maximum_stock: Decimal,
    cost_per_unit: i64,
    supplier_id: Option<SupplierId>,
    storage_location: &str,
    expiry_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> InventoryItem {
    InventoryItem {
        id: ItemId::new(),
        name,
        category,
        unit,
        current_stock,
        minimum_stock,
        maximum_stock,
        cost_per_unit,
        sell_price: None,
        supplier_id,
        last_restocked_at: now,
        expiry_date,
        storage_location: storage_location.to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}
