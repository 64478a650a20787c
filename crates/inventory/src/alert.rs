use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use bistro_core::ItemId;

use crate::item::{InventoryItem, LocalizedName, UnitOfMeasure};
use crate::movement::{MovementType, StockMovement};

/// Trailing window used to estimate daily usage.
pub const USAGE_WINDOW_DAYS: i64 = 7;

/// Stockout horizon sentinel: when no usage is recorded (or the projection
/// exceeds it), the stockout date floors here instead of reporting imminent
/// depletion.
pub const FAR_FUTURE_DAYS: i64 = 9999;

// Urgency thresholds as fractions of minimum stock.
const CRITICAL_RATIO: Decimal = Decimal::from_parts(5, 0, 0, false, 1); // 0.5
const HIGH_RATIO: Decimal = Decimal::from_parts(7, 0, 0, false, 1); // 0.7

/// Urgency tier of a low-stock alert.
///
/// The classifier only produces `Critical`/`High`/`Medium`; `Low` is kept for
/// consumers that filter on the full tier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertUrgency {
    Critical,
    High,
    Medium,
    Low,
}

/// Derived, ephemeral low-stock signal. Never persisted — recomputed in full
/// from the current item list and movement history after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub item_id: ItemId,
    pub item_name: LocalizedName,
    pub unit: UnitOfMeasure,
    pub current_stock: Decimal,
    pub minimum_stock: Decimal,
    pub urgency: AlertUrgency,
    pub estimated_stockout_date: DateTime<Utc>,
    pub suggested_order_quantity: Decimal,
}

/// Classify urgency for an item already at or below its minimum.
///
/// Boundaries are inclusive on the more urgent side: exactly half the minimum
/// is `Critical`, exactly 0.7× is `High`.
pub fn classify_urgency(current_stock: Decimal, minimum_stock: Decimal) -> AlertUrgency {
    if current_stock <= minimum_stock * CRITICAL_RATIO {
        AlertUrgency::Critical
    } else if current_stock <= minimum_stock * HIGH_RATIO {
        AlertUrgency::High
    } else {
        AlertUrgency::Medium
    }
}

/// Average daily StockOut quantity for an item over the trailing usage window.
pub fn daily_usage_rate(
    item_id: ItemId,
    movements: &[StockMovement],
    now: DateTime<Utc>,
) -> Decimal {
    let window_start = now - Duration::days(USAGE_WINDOW_DAYS);
    let consumed: Decimal = movements
        .iter()
        .filter(|m| {
            m.item_id == item_id
                && m.movement_type == MovementType::StockOut
                && m.occurred_at >= window_start
                && m.occurred_at <= now
        })
        .map(|m| m.quantity)
        .sum();
    consumed / Decimal::from(USAGE_WINDOW_DAYS)
}

/// Project the date the item runs out at the current usage rate.
///
/// A zero rate means no depletion signal: the projection floors at
/// [`FAR_FUTURE_DAYS`] rather than failing or reporting "now".
pub fn estimated_stockout_date(
    current_stock: Decimal,
    usage_rate: Decimal,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    let days = if usage_rate <= Decimal::ZERO {
        FAR_FUTURE_DAYS
    } else {
        (current_stock / usage_rate)
            .floor()
            .to_i64()
            .unwrap_or(FAR_FUTURE_DAYS)
            .clamp(0, FAR_FUTURE_DAYS)
    };
    now + Duration::days(days)
}

/// Quantity to reorder: refill to the maximum, but never below a two-minimum
/// safety buffer.
pub fn suggested_order_quantity(item: &InventoryItem) -> Decimal {
    (item.maximum_stock - item.current_stock).max(Decimal::TWO * item.minimum_stock)
}

/// Derive low-stock alerts from the current items and movement ledger.
///
/// Pure function: same inputs, same output. One alert per active item at or
/// below its minimum; items above minimum (and deactivated items) produce
/// none. Output follows item iteration order — callers wanting urgency or id
/// ordering sort explicitly.
pub fn derive_low_stock_alerts(
    items: &[InventoryItem],
    movements: &[StockMovement],
    now: DateTime<Utc>,
) -> Vec<LowStockAlert> {
    items
        .iter()
        .filter(|item| item.is_active && item.is_low_stock())
        .map(|item| {
            let rate = daily_usage_rate(item.id, movements, now);
            LowStockAlert {
                item_id: item.id,
                item_name: item.name.clone(),
                unit: item.unit,
                current_stock: item.current_stock,
                minimum_stock: item.minimum_stock,
                urgency: classify_urgency(item.current_stock, item.minimum_stock),
                estimated_stockout_date: estimated_stockout_date(item.current_stock, rate, now),
                suggested_order_quantity: suggested_order_quantity(item),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemCategory, LocalizedName};
    use bistro_core::{MovementId, UserId};

    fn test_item(current: Decimal, minimum: Decimal) -> InventoryItem {
        let now = Utc::now();
        InventoryItem {
            id: ItemId::new(),
            name: LocalizedName::new("Basil", "Basilico"),
            category: ItemCategory::Vegetables,
            unit: UnitOfMeasure::Kilogram,
            current_stock: current,
            minimum_stock: minimum,
            maximum_stock: Decimal::from(50),
            cost_per_unit: 200,
            sell_price: None,
            supplier_id: None,
            last_restocked_at: now,
            expiry_date: None,
            storage_location: "shelf 3".to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn stock_out(item_id: ItemId, quantity: Decimal, occurred_at: DateTime<Utc>) -> StockMovement {
        StockMovement {
            id: MovementId::new(),
            item_id,
            item_name: "Basil".to_string(),
            movement_type: MovementType::StockOut,
            quantity,
            unit: UnitOfMeasure::Kilogram,
            cost_per_unit: None,
            total_cost: None,
            reason: "dinner service".to_string(),
            reference_id: None,
            supplier_id: None,
            performed_by: UserId::new(),
            performed_by_name: "Chef".to_string(),
            expiry_date: None,
            occurred_at,
        }
    }

    #[test]
    fn half_of_minimum_is_critical_inclusive() {
        // current == 0.5 * minimum sits on the critical side of the boundary.
        let urgency = classify_urgency(Decimal::new(75, 1), Decimal::from(15));
        assert_eq!(urgency, AlertUrgency::Critical);
    }

    #[test]
    fn between_half_and_seventy_percent_is_high() {
        // 8.5 <= 15 * 0.7 = 10.5 and 8.5 > 15 * 0.5 = 7.5
        let urgency = classify_urgency(Decimal::new(85, 1), Decimal::from(15));
        assert_eq!(urgency, AlertUrgency::High);
    }

    #[test]
    fn at_minimum_but_above_seventy_percent_is_medium() {
        let urgency = classify_urgency(Decimal::from(14), Decimal::from(15));
        assert_eq!(urgency, AlertUrgency::Medium);
    }

    #[test]
    fn zero_minimum_at_zero_stock_is_critical() {
        let urgency = classify_urgency(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(urgency, AlertUrgency::Critical);
    }

    #[test]
    fn items_above_minimum_produce_no_alert() {
        let item = test_item(Decimal::from(20), Decimal::from(15));
        let alerts = derive_low_stock_alerts(&[item], &[], Utc::now());
        assert!(alerts.is_empty());
    }

    #[test]
    fn deactivated_items_produce_no_alert() {
        let mut item = test_item(Decimal::from(2), Decimal::from(15));
        item.is_active = false;
        let alerts = derive_low_stock_alerts(&[item], &[], Utc::now());
        assert!(alerts.is_empty());
    }

    #[test]
    fn scenario_8_5_of_15_generates_high_alert() {
        let item = test_item(Decimal::new(85, 1), Decimal::from(15));
        let alerts = derive_low_stock_alerts(&[item], &[], Utc::now());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].urgency, AlertUrgency::High);
    }

    #[test]
    fn usage_rate_only_counts_stock_out_inside_window() {
        let now = Utc::now();
        let item_id = ItemId::new();
        let movements = vec![
            stock_out(item_id, Decimal::from(7), now - Duration::days(1)),
            stock_out(item_id, Decimal::from(7), now - Duration::days(3)),
            // Outside the trailing window — ignored.
            stock_out(item_id, Decimal::from(100), now - Duration::days(9)),
            // Different item — ignored.
            stock_out(ItemId::new(), Decimal::from(100), now - Duration::days(1)),
        ];
        // 14 consumed over 7 days = 2/day
        assert_eq!(daily_usage_rate(item_id, &movements, now), Decimal::from(2));
    }

    #[test]
    fn waste_movements_do_not_count_toward_usage_rate() {
        let now = Utc::now();
        let item_id = ItemId::new();
        let mut movement = stock_out(item_id, Decimal::from(7), now - Duration::days(1));
        movement.movement_type = MovementType::Waste;
        assert_eq!(daily_usage_rate(item_id, &[movement], now), Decimal::ZERO);
    }

    #[test]
    fn zero_usage_rate_floors_stockout_at_far_future() {
        let now = Utc::now();
        let date = estimated_stockout_date(Decimal::from(10), Decimal::ZERO, now);
        assert_eq!(date, now + Duration::days(FAR_FUTURE_DAYS));
    }

    #[test]
    fn stockout_date_is_stock_over_rate_in_days() {
        let now = Utc::now();
        // 10 on hand at 2/day = 5 days out.
        let date = estimated_stockout_date(Decimal::from(10), Decimal::from(2), now);
        assert_eq!(date, now + Duration::days(5));
    }

    #[test]
    fn suggested_order_refills_to_maximum_with_safety_floor() {
        let mut item = test_item(Decimal::from(5), Decimal::from(15));
        // max - current = 45, 2 * min = 30 -> 45
        assert_eq!(suggested_order_quantity(&item), Decimal::from(45));

        // Overstocked beyond maximum: the refill delta goes negative, the
        // two-minimum floor wins.
        item.current_stock = Decimal::from(60);
        item.minimum_stock = Decimal::from(20);
        assert_eq!(suggested_order_quantity(&item), Decimal::from(40));
    }
}
