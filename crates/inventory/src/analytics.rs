use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bistro_core::ItemId;

use crate::item::{InventoryItem, ItemCategory};
use crate::waste::WasteRecord;

/// Number of entries reported in `top_wasted_items`.
pub const TOP_WASTED_LIMIT: usize = 5;

/// Stock turnover requires a sales/COGS feed that is not part of this system;
/// until one is wired in, analytics report this placeholder.
pub const STOCK_TURNOVER_PLACEHOLDER: Decimal = Decimal::ZERO;

/// Aggregated waste for a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WastedItemSummary {
    pub item_id: ItemId,
    pub item_name: String,
    pub total_quantity: Decimal,
    /// Summed cost impact in minor currency units.
    pub total_value: Decimal,
}

/// Per-category slice of the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: ItemCategory,
    pub item_count: usize,
    /// Summed stock value in minor currency units.
    pub total_value: Decimal,
    /// Items in the category at or below their minimum stock.
    pub low_stock_count: usize,
}

/// Fully derived analytics snapshot, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryAnalytics {
    /// Total stock value in minor currency units.
    pub total_value: Decimal,
    /// Total cost of the entire waste history in minor currency units.
    pub waste_value: Decimal,
    /// `waste_value / total_value * 100`; 0 when the inventory has no value.
    pub waste_percentage: Decimal,
    pub top_wasted_items: Vec<WastedItemSummary>,
    pub category_breakdown: Vec<CategoryBreakdown>,
    /// Placeholder until an external sales/COGS feed exists.
    pub stock_turnover: Decimal,
}

impl InventoryAnalytics {
    /// Analytics of an empty inventory: all zeroes, no breakdowns.
    pub fn empty() -> Self {
        Self {
            total_value: Decimal::ZERO,
            waste_value: Decimal::ZERO,
            waste_percentage: Decimal::ZERO,
            top_wasted_items: Vec::new(),
            category_breakdown: Vec::new(),
            stock_turnover: STOCK_TURNOVER_PLACEHOLDER,
        }
    }
}

/// Derive the analytics snapshot from items and the waste history.
///
/// Pure and idempotent: repeated calls with unchanged inputs yield identical
/// output. Never fails — empty or missing input degrades to zeroes.
pub fn derive_analytics(items: &[InventoryItem], waste_records: &[WasteRecord]) -> InventoryAnalytics {
    let total_value: Decimal = items.iter().map(InventoryItem::stock_value).sum();
    let waste_value: Decimal = waste_records.iter().map(|w| w.cost_value).sum();

    let waste_percentage = if total_value.is_zero() {
        Decimal::ZERO
    } else {
        waste_value / total_value * Decimal::ONE_HUNDRED
    };

    InventoryAnalytics {
        total_value,
        waste_value,
        waste_percentage,
        top_wasted_items: top_wasted_items(waste_records),
        category_breakdown: category_breakdown(items),
        stock_turnover: STOCK_TURNOVER_PLACEHOLDER,
    }
}

/// Waste history grouped by item, sorted by cost impact, top five.
///
/// Ties on value break by item id so repeated derivation is bytewise stable.
fn top_wasted_items(waste_records: &[WasteRecord]) -> Vec<WastedItemSummary> {
    let mut by_item: HashMap<ItemId, WastedItemSummary> = HashMap::new();
    for record in waste_records {
        by_item
            .entry(record.item_id)
            .and_modify(|summary| {
                summary.total_quantity += record.quantity;
                summary.total_value += record.cost_value;
            })
            .or_insert_with(|| WastedItemSummary {
                item_id: record.item_id,
                item_name: record.item_name.clone(),
                total_quantity: record.quantity,
                total_value: record.cost_value,
            });
    }

    let mut summaries: Vec<WastedItemSummary> = by_item.into_values().collect();
    summaries.sort_by(|a, b| {
        b.total_value
            .cmp(&a.total_value)
            .then_with(|| a.item_id.cmp(&b.item_id))
    });
    summaries.truncate(TOP_WASTED_LIMIT);
    summaries
}

/// Per-category counts and value, in fixed category order. Categories with no
/// items are omitted.
fn category_breakdown(items: &[InventoryItem]) -> Vec<CategoryBreakdown> {
    ItemCategory::ALL
        .iter()
        .filter_map(|&category| {
            let in_category: Vec<&InventoryItem> =
                items.iter().filter(|i| i.category == category).collect();
            if in_category.is_empty() {
                return None;
            }
            Some(CategoryBreakdown {
                category,
                item_count: in_category.len(),
                total_value: in_category.iter().map(|i| i.stock_value()).sum(),
                low_stock_count: in_category.iter().filter(|i| i.is_low_stock()).count(),
            })
        })
        .collect()
}
