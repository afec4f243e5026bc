//! Slot availability generator
//!
//! Today/tomorrow slots carry randomly sampled availability booleans,
//! weighted toward "available" so the chatbot usually has something to
//! offer. The 3-day "this week" window starts two days out and samples 2-3
//! distinct time ranges per day from a fixed pool of six.

use chrono::Datelike;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use utoipa::ToSchema;

use super::SynthError;
use super::offset_date;
use crate::clock::Clock;

/// A bookable time range on a specific day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Slot {
    #[schema(example = "2:00 PM - 4:00 PM")]
    pub time: String,
    pub available: bool,
}

/// Open time ranges for one day later in the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DaySlots {
    /// Day label, `<weekday> (<month> <day>)`
    #[schema(example = "Monday (August 10)")]
    pub day: String,
    pub slots: Vec<String>,
}

/// The three availability buckets returned by `type=slot-availability`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SlotAvailability {
    pub today: Vec<Slot>,
    pub tomorrow: Vec<Slot>,
    pub this_week: Vec<DaySlots>,
}

impl SlotAvailability {
    /// The fixed empty-but-well-formed value served when synthesis fails.
    pub fn empty() -> Self {
        Self {
            today: Vec::new(),
            tomorrow: Vec::new(),
            this_week: Vec::new(),
        }
    }
}

const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Fixed pool the weekly slots are sampled from, without replacement.
pub const SLOT_POOL: [&str; 6] = [
    "9:00 AM - 11:00 AM",
    "10:00 AM - 12:00 PM",
    "12:00 PM - 2:00 PM",
    "1:00 PM - 3:00 PM",
    "3:00 PM - 5:00 PM",
    "4:00 PM - 6:00 PM",
];

/// Synthesize pickup/delivery slot availability.
///
/// Internal failure degrades to three empty buckets, never an error.
pub fn slot_availability<R: Rng + ?Sized>(clock: &dyn Clock, rng: &mut R) -> SlotAvailability {
    match try_slot_availability(clock, rng) {
        Ok(slots) => slots,
        Err(e) => {
            tracing::error!(error = %e, "slot-availability synthesis failed, serving empty buckets");
            SlotAvailability::empty()
        }
    }
}

pub(crate) fn try_slot_availability<R: Rng + ?Sized>(
    clock: &dyn Clock,
    rng: &mut R,
) -> Result<SlotAvailability, SynthError> {
    let today = clock.now().date();
    tracing::debug!("synthesizing slot availability");

    // 2-of-3 / 3-of-4 odds keep most slots open
    let today_slots = vec![
        Slot {
            time: "2:00 PM - 4:00 PM".to_string(),
            available: rng.gen_ratio(2, 3),
        },
        Slot {
            time: "5:00 PM - 7:00 PM".to_string(),
            available: rng.gen_ratio(3, 4),
        },
    ];

    let tomorrow_slots = vec![
        Slot {
            time: "10:00 AM - 12:00 PM".to_string(),
            available: rng.gen_ratio(2, 3),
        },
        Slot {
            time: "1:00 PM - 3:00 PM".to_string(),
            available: rng.gen_ratio(2, 3),
        },
        Slot {
            time: "4:00 PM - 6:00 PM".to_string(),
            available: rng.gen_ratio(3, 4),
        },
    ];

    // The next few days after tomorrow
    let mut this_week = Vec::with_capacity(3);
    for day_offset in 2..=4i64 {
        let day_date = offset_date(today, day_offset)?;

        let weekday_index = day_date.weekday().num_days_from_monday() as usize;
        let day_name = WEEKDAYS.get(weekday_index).copied().unwrap_or("Weekend");

        let num_slots = rng.gen_range(2..=3).min(SLOT_POOL.len());
        let day_slots: Vec<String> = SLOT_POOL
            .choose_multiple(rng, num_slots)
            .map(|s| s.to_string())
            .collect();

        this_week.push(DaySlots {
            day: format!("{} ({})", day_name, day_date.format("%B %d")),
            slots: day_slots,
        });
    }

    Ok(SlotAvailability {
        today: today_slots,
        tomorrow: tomorrow_slots,
        this_week,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Datelike, NaiveDate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn clock_at(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn buckets_have_fixed_cardinality() {
        let clock = clock_at(2026, 8, 3);
        let mut rng = StdRng::seed_from_u64(42);
        let slots = slot_availability(&clock, &mut rng);
        assert_eq!(slots.today.len(), 2);
        assert_eq!(slots.tomorrow.len(), 3);
        assert_eq!(slots.this_week.len(), 3);
    }

    #[test]
    fn weekly_slots_are_distinct_and_from_the_pool() {
        let clock = clock_at(2026, 8, 3);
        // A handful of seeds to cover both the 2- and 3-slot draws
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let slots = slot_availability(&clock, &mut rng);
            for day in &slots.this_week {
                assert!(day.slots.len() == 2 || day.slots.len() == 3);
                for s in &day.slots {
                    assert!(SLOT_POOL.contains(&s.as_str()));
                }
                let mut deduped = day.slots.clone();
                deduped.sort();
                deduped.dedup();
                assert_eq!(deduped.len(), day.slots.len(), "duplicate slot within a day");
            }
        }
    }

    #[test]
    fn weekday_labels_follow_the_calendar() {
        // Monday 2026-08-03: offsets 2..4 land on Wed/Thu/Fri
        let clock = clock_at(2026, 8, 3);
        let mut rng = StdRng::seed_from_u64(1);
        let slots = slot_availability(&clock, &mut rng);
        assert!(slots.this_week[0].day.starts_with("Wednesday (August 05)"));
        assert!(slots.this_week[1].day.starts_with("Thursday (August 06)"));
        assert!(slots.this_week[2].day.starts_with("Friday (August 07)"));
    }

    #[test]
    fn saturday_and_sunday_fall_back_to_weekend_label() {
        // Thursday 2026-08-06: offsets 2..4 land on Sat/Sun/Mon
        let clock = clock_at(2026, 8, 6);
        assert_eq!(clock.0.date().weekday().num_days_from_monday(), 3);
        let mut rng = StdRng::seed_from_u64(1);
        let slots = slot_availability(&clock, &mut rng);
        assert!(slots.this_week[0].day.starts_with("Weekend (August 08)"));
        assert!(slots.this_week[1].day.starts_with("Weekend (August 09)"));
        assert!(slots.this_week[2].day.starts_with("Monday (August 10)"));
    }

    #[test]
    fn falls_back_to_empty_buckets_at_calendar_edge() {
        let clock = FixedClock(NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(slot_availability(&clock, &mut rng), SlotAvailability::empty());
    }
}
