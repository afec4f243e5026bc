//! Data synthesizer
//!
//! Four independent generators producing JSON-serializable mock data
//! (current orders, previous orders, slot availability, subscription
//! status), plus an aggregator merging all four. Everything is fabricated
//! per request; nothing is persisted.
//!
//! Each generator comes in two forms: a fallible `try_*` function returning
//! `Result<_, SynthError>`, and a public boundary function that resolves the
//! result into either the synthesized value or a documented empty fallback.
//! Callers never see a generator error; failures are only visible in logs.
//! Worth revisiting if these endpoints ever grow a real backing data source.

pub mod orders;
pub mod slots;
pub mod subscription;

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::clock::Clock;
use orders::Order;
use slots::SlotAvailability;
use subscription::SubscriptionStatus;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("date arithmetic overflowed shifting today by {0} days")]
    DateOverflow(i64),
}

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shift a date by a signed number of days.
pub(crate) fn offset_date(from: NaiveDate, days: i64) -> Result<NaiveDate, SynthError> {
    let shifted = if days >= 0 {
        from.checked_add_days(Days::new(days as u64))
    } else {
        from.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or(SynthError::DateOverflow(days))
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Merged output of all four generators (`type=all-data`).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AllData {
    pub current_orders: Vec<Order>,
    pub previous_orders: Vec<Order>,
    pub slots: SlotAvailability,
    pub subscription: SubscriptionStatus,
}

impl AllData {
    /// The fixed empty-but-well-formed aggregate served when synthesis fails.
    pub fn empty() -> Self {
        Self {
            current_orders: Vec::new(),
            previous_orders: Vec::new(),
            slots: SlotAvailability::empty(),
            subscription: SubscriptionStatus::empty(),
        }
    }
}

/// Run all four generators and merge their output.
///
/// If any generator fails internally, the whole aggregate is replaced by
/// [`AllData::empty`] and the response stays 200.
pub fn all_data<R: Rng + ?Sized>(clock: &dyn Clock, rng: &mut R) -> AllData {
    match try_all_data(clock, rng) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, "all-data synthesis failed, serving empty aggregate");
            AllData::empty()
        }
    }
}

fn try_all_data<R: Rng + ?Sized>(clock: &dyn Clock, rng: &mut R) -> Result<AllData, SynthError> {
    Ok(AllData {
        current_orders: orders::try_current_orders(clock)?,
        previous_orders: orders::try_previous_orders(clock)?,
        slots: slots::try_slot_availability(clock, rng)?,
        subscription: subscription::try_subscription_status(clock, rng)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn clock_at(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn offset_date_shifts_both_directions() {
        let base = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(
            offset_date(base, 3).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
        );
        assert_eq!(
            offset_date(base, -7).unwrap(),
            NaiveDate::from_ymd_opt(2026, 7, 31).unwrap()
        );
        assert_eq!(offset_date(base, 0).unwrap(), base);
    }

    #[test]
    fn offset_date_errors_at_calendar_edge() {
        assert!(offset_date(NaiveDate::MAX, 1).is_err());
        assert!(offset_date(NaiveDate::MIN, -1).is_err());
    }

    #[test]
    fn all_data_merges_all_four_generators() {
        let clock = clock_at(2026, 8, 7);
        let mut rng = StdRng::seed_from_u64(7);
        let data = all_data(&clock, &mut rng);
        assert_eq!(data.current_orders.len(), 4);
        assert_eq!(data.previous_orders.len(), 3);
        assert_eq!(data.slots.this_week.len(), 3);
        assert_eq!(data.subscription.available_plans.len(), 3);
    }

    #[test]
    fn all_data_falls_back_wholesale_on_generator_failure() {
        // At the calendar edge the current-orders generator overflows, and
        // the whole aggregate is substituted: previous orders come back
        // empty too even though their generator alone would have succeeded.
        let clock = FixedClock(NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap());
        let mut rng = StdRng::seed_from_u64(7);
        let data = all_data(&clock, &mut rng);
        assert_eq!(data, AllData::empty());
        assert!(data.previous_orders.is_empty());
        assert_eq!(data.subscription.active.plan, "None");
    }
}
