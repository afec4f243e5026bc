//! Current/previous order generators
//!
//! Pure functions of the clock with no randomness involved. Dates are fixed
//! day offsets from "now" and order IDs embed the current year, so calling
//! twice under the same clock yields identical output.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::{SynthError, format_date, offset_date};
use crate::clock::Clock;

/// Lifecycle state of a laundry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum OrderStatus {
    #[serde(rename = "Picked Up")]
    PickedUp,
    #[serde(rename = "Processing")]
    Processing,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    #[serde(rename = "Scheduled for Pickup")]
    ScheduledForPickup,
    #[serde(rename = "Delivered")]
    Delivered,
}

/// A single mock order. Request-scoped, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Order {
    /// Order ID in the form `ORD-<year>-<seq>`
    #[schema(example = "ORD-2026-001")]
    pub order_id: String,
    #[schema(example = "John Doe")]
    pub customer_name: String,
    #[schema(example = "Dry Cleaning")]
    pub service_type: String,
    pub status: OrderStatus,
    /// Pickup date, `YYYY-MM-DD`
    #[schema(example = "2026-08-04")]
    pub pickup_date: String,
    /// Delivery date, `YYYY-MM-DD`
    #[schema(example = "2026-08-08")]
    pub delivery_date: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 45.99)]
    pub total_amount: Decimal,
    pub items: Vec<String>,
}

fn order_id(year: i32, seq: u32) -> String {
    format!("ORD-{}-{:03}", year, seq)
}

/// Orders currently moving through pickup/processing/delivery.
///
/// Internal failure degrades to an empty list, never an error.
pub fn current_orders(clock: &dyn Clock) -> Vec<Order> {
    match try_current_orders(clock) {
        Ok(orders) => orders,
        Err(e) => {
            tracing::error!(error = %e, "current-orders synthesis failed, serving empty list");
            Vec::new()
        }
    }
}

pub(crate) fn try_current_orders(clock: &dyn Clock) -> Result<Vec<Order>, SynthError> {
    let today = clock.now().date();
    let year = today.year();

    Ok(vec![
        Order {
            order_id: order_id(year, 1),
            customer_name: "John Doe".to_string(),
            service_type: "Laundry and Ironing".to_string(),
            status: OrderStatus::PickedUp,
            pickup_date: format_date(offset_date(today, -3)?),
            delivery_date: format_date(offset_date(today, 1)?),
            total_amount: Decimal::new(4599, 2),
            items: vec![
                "Shirts (5)".to_string(),
                "Pants (3)".to_string(),
                "Bed Sheets (2)".to_string(),
            ],
        },
        Order {
            order_id: order_id(year, 2),
            customer_name: "Jane Smith".to_string(),
            service_type: "Dry Cleaning".to_string(),
            status: OrderStatus::Processing,
            pickup_date: format_date(offset_date(today, -2)?),
            delivery_date: format_date(offset_date(today, 2)?),
            total_amount: Decimal::new(6750, 2),
            items: vec![
                "Suits (2)".to_string(),
                "Dress (1)".to_string(),
                "Jacket (1)".to_string(),
            ],
        },
        Order {
            order_id: order_id(year, 3),
            customer_name: "Mike Johnson".to_string(),
            service_type: "Express Laundry".to_string(),
            status: OrderStatus::OutForDelivery,
            pickup_date: format_date(offset_date(today, -1)?),
            delivery_date: format_date(today),
            total_amount: Decimal::new(3825, 2),
            items: vec!["Shirts (4)".to_string(), "Jeans (2)".to_string()],
        },
        Order {
            order_id: order_id(year, 5),
            customer_name: "David Wilson".to_string(),
            service_type: "Laundry Only".to_string(),
            status: OrderStatus::ScheduledForPickup,
            pickup_date: format_date(offset_date(today, 1)?),
            delivery_date: format_date(offset_date(today, 3)?),
            total_amount: Decimal::new(2999, 2),
            items: vec![
                "T-Shirts (10)".to_string(),
                "Underwear (7)".to_string(),
                "Socks (5 pairs)".to_string(),
            ],
        },
    ])
}

/// Completed orders from the last few weeks.
///
/// Internal failure degrades to an empty list, never an error.
pub fn previous_orders(clock: &dyn Clock) -> Vec<Order> {
    match try_previous_orders(clock) {
        Ok(orders) => orders,
        Err(e) => {
            tracing::error!(error = %e, "previous-orders synthesis failed, serving empty list");
            Vec::new()
        }
    }
}

pub(crate) fn try_previous_orders(clock: &dyn Clock) -> Result<Vec<Order>, SynthError> {
    let today = clock.now().date();
    let year = today.year();

    Ok(vec![
        Order {
            order_id: order_id(year, 901),
            customer_name: "John Doe".to_string(),
            service_type: "Dry Cleaning".to_string(),
            status: OrderStatus::Delivered,
            pickup_date: format_date(offset_date(today, -15)?),
            delivery_date: format_date(offset_date(today, -12)?),
            total_amount: Decimal::new(8950, 2),
            items: vec![
                "Winter Coat".to_string(),
                "Curtains (2 sets)".to_string(),
                "Formal Suit".to_string(),
            ],
        },
        Order {
            order_id: order_id(year, 845),
            customer_name: "Jane Smith".to_string(),
            service_type: "Wash and Fold".to_string(),
            status: OrderStatus::Delivered,
            pickup_date: format_date(offset_date(today, -10)?),
            delivery_date: format_date(offset_date(today, -8)?),
            total_amount: Decimal::new(3499, 2),
            items: vec!["Mixed Laundry (8 kg)".to_string()],
        },
        Order {
            order_id: order_id(year, 780),
            customer_name: "Mike Johnson".to_string(),
            service_type: "Premium Laundry".to_string(),
            status: OrderStatus::Delivered,
            pickup_date: format_date(offset_date(today, -20)?),
            delivery_date: format_date(offset_date(today, -18)?),
            total_amount: Decimal::new(7525, 2),
            items: vec![
                "Dress Shirts (8)".to_string(),
                "Slacks (4)".to_string(),
                "Blazers (2)".to_string(),
            ],
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock_at(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn current_orders_deterministic_under_fixed_clock() {
        let clock = clock_at(2026, 8, 7);
        assert_eq!(current_orders(&clock), current_orders(&clock));
    }

    #[test]
    fn current_orders_dates_and_ids() {
        let clock = clock_at(2026, 8, 7);
        let orders = current_orders(&clock);
        assert_eq!(orders.len(), 4);

        assert_eq!(orders[0].order_id, "ORD-2026-001");
        assert_eq!(orders[0].pickup_date, "2026-08-04");
        assert_eq!(orders[0].delivery_date, "2026-08-08");
        assert_eq!(orders[0].status, OrderStatus::PickedUp);

        // Third order delivers today
        assert_eq!(orders[2].delivery_date, "2026-08-07");
        assert_eq!(orders[2].status, OrderStatus::OutForDelivery);

        // The last order is scheduled, not yet picked up
        assert_eq!(orders[3].order_id, "ORD-2026-005");
        assert_eq!(orders[3].pickup_date, "2026-08-08");
    }

    #[test]
    fn order_ids_embed_clock_year() {
        let orders = current_orders(&clock_at(2031, 1, 15));
        assert!(orders.iter().all(|o| o.order_id.starts_with("ORD-2031-")));
    }

    #[test]
    fn previous_orders_all_delivered_in_the_past() {
        let clock = clock_at(2026, 8, 7);
        let orders = previous_orders(&clock);
        assert_eq!(orders.len(), 3);
        assert!(orders.iter().all(|o| o.status == OrderStatus::Delivered));
        assert_eq!(orders[0].order_id, "ORD-2026-901");
        assert_eq!(orders[0].pickup_date, "2026-07-23");
        assert_eq!(orders[0].delivery_date, "2026-07-26");
        assert!(orders.iter().all(|o| o.delivery_date < "2026-08-07".to_string()));
    }

    #[test]
    fn amounts_serialize_as_json_numbers() {
        let clock = clock_at(2026, 8, 7);
        let value = serde_json::to_value(current_orders(&clock)).unwrap();
        assert_eq!(value[0]["total_amount"], serde_json::json!(45.99));
        assert_eq!(value[0]["status"], serde_json::json!("Picked Up"));
    }

    #[test]
    fn current_orders_fall_back_to_empty_at_calendar_edge() {
        let clock = FixedClock(NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap());
        assert!(current_orders(&clock).is_empty());
    }

    #[test]
    fn previous_orders_fall_back_to_empty_at_calendar_edge() {
        let clock = FixedClock(NaiveDate::MIN.and_hms_opt(0, 0, 0).unwrap());
        assert!(previous_orders(&clock).is_empty());
    }
}
