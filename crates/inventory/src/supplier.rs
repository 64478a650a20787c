use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bistro_core::{Entity, SupplierId};

use crate::item::ItemCategory;

/// Vendor reference. Suppliers are catalog data: inventory operations read
/// them (reorder suggestions, incoming batches) but never mutate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Categories this supplier typically covers.
    pub categories: Vec<ItemCategory>,
    /// Vendor rating on a 0–5 scale.
    pub rating: Decimal,
    pub payment_terms: String,
    pub delivery_lead_time_days: u32,
    /// Minimum order value in minor currency units.
    pub minimum_order_value: i64,
    pub is_active: bool,
}

impl Supplier {
    pub fn covers_category(&self, category: ItemCategory) -> bool {
        self.categories.contains(&category)
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
