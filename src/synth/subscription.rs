//! Subscription status generator
//!
//! One hardcoded active "Premium" plan with a random expiry 15-90 days out,
//! plus the fixed three-plan catalog.

use once_cell::sync::Lazy;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::{SynthError, format_date, offset_date};
use crate::clock::Clock;

/// The customer's currently active plan.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ActivePlan {
    #[schema(example = "Premium")]
    pub plan: String,
    /// Expiry date, `YYYY-MM-DD` (empty in the fallback value)
    #[schema(example = "2026-09-20")]
    pub expires: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 119.00)]
    pub price: Decimal,
    pub auto_renew: bool,
    pub includes: Vec<String>,
}

/// A plan offer from the fixed catalog.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PlanOffer {
    #[schema(example = "Basic")]
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 49.00)]
    pub price: Decimal,
    pub features: Vec<String>,
}

/// Response body for `type=subscription-status`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SubscriptionStatus {
    pub active: ActivePlan,
    pub available_plans: Vec<PlanOffer>,
}

impl SubscriptionStatus {
    /// The fixed zeroed value served when synthesis fails.
    pub fn empty() -> Self {
        Self {
            active: ActivePlan {
                plan: "None".to_string(),
                expires: String::new(),
                price: Decimal::ZERO,
                auto_renew: false,
                includes: Vec::new(),
            },
            available_plans: Vec::new(),
        }
    }
}

/// Fixed plan catalog: Basic, Standard, Premium, in that order.
static PLAN_CATALOG: Lazy<Vec<PlanOffer>> = Lazy::new(|| {
    vec![
        PlanOffer {
            name: "Basic".to_string(),
            price: Decimal::new(4900, 2),
            features: vec![
                "Up to 20 items per month".to_string(),
                "Standard delivery (2-3 days)".to_string(),
                "Basic garment care".to_string(),
            ],
        },
        PlanOffer {
            name: "Standard".to_string(),
            price: Decimal::new(7900, 2),
            features: vec![
                "Up to 40 items per month".to_string(),
                "Express delivery available".to_string(),
                "Extended garment care".to_string(),
                "Weekend service".to_string(),
            ],
        },
        PlanOffer {
            name: "Premium".to_string(),
            price: Decimal::new(11900, 2),
            features: vec![
                "Unlimited items".to_string(),
                "Free pickup and delivery".to_string(),
                "Priority processing".to_string(),
                "24/7 customer support".to_string(),
                "Garment repairs included".to_string(),
            ],
        },
    ]
});

/// Synthesize the customer's subscription status.
///
/// Internal failure degrades to a "None" plan and an empty catalog, never
/// an error.
pub fn subscription_status<R: Rng + ?Sized>(clock: &dyn Clock, rng: &mut R) -> SubscriptionStatus {
    match try_subscription_status(clock, rng) {
        Ok(status) => status,
        Err(e) => {
            tracing::error!(error = %e, "subscription-status synthesis failed, serving zeroed status");
            SubscriptionStatus::empty()
        }
    }
}

pub(crate) fn try_subscription_status<R: Rng + ?Sized>(
    clock: &dyn Clock,
    rng: &mut R,
) -> Result<SubscriptionStatus, SynthError> {
    let today = clock.now().date();
    let expiry_date = offset_date(today, rng.gen_range(15..=90))?;

    Ok(SubscriptionStatus {
        active: ActivePlan {
            plan: "Premium".to_string(),
            expires: format_date(expiry_date),
            price: Decimal::new(11900, 2),
            auto_renew: true,
            includes: vec![
                "Unlimited laundry and dry cleaning".to_string(),
                "Free pickup and delivery".to_string(),
                "Priority processing".to_string(),
                "24/7 customer support".to_string(),
                "Garment repairs included".to_string(),
            ],
        },
        available_plans: PLAN_CATALOG.clone(),
    })
}
