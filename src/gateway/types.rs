//! Gateway types
//!
//! - [`DataType`]: the selector choosing which mock dataset to return
//! - [`ErrorResponse`]: 400 body for an unrecognized selector
//! - [`DispatchFailure`]: 500 body for an unhandled dispatch error

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

// Re-export the response payloads at the gateway boundary
pub use crate::synth::AllData;
pub use crate::synth::orders::{Order, OrderStatus};
pub use crate::synth::slots::{DaySlots, Slot, SlotAvailability};
pub use crate::synth::subscription::{ActivePlan, PlanOffer, SubscriptionStatus};

/// Selector (`data_type`) accepted by the dynamic-data endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    CurrentOrders,
    PreviousOrders,
    SlotAvailability,
    SubscriptionStatus,
    AllData,
}

impl DataType {
    /// Parse a selector string; `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "current-orders" => Some(Self::CurrentOrders),
            "previous-orders" => Some(Self::PreviousOrders),
            "slot-availability" => Some(Self::SlotAvailability),
            "subscription-status" => Some(Self::SubscriptionStatus),
            "all-data" => Some(Self::AllData),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CurrentOrders => "current-orders",
            Self::PreviousOrders => "previous-orders",
            Self::SlotAvailability => "slot-availability",
            Self::SubscriptionStatus => "subscription-status",
            Self::AllData => "all-data",
        }
    }
}

/// Unhandled error surfaced by the dispatch layer as HTTP 500.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DispatchError(pub String);

/// 400 body: the selector was not one of the known values.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Unknown data type: bogus")]
    pub error: String,
}

impl ErrorResponse {
    pub fn unknown_type(value: &str) -> Self {
        Self {
            error: format!("Unknown data type: {}", value),
        }
    }
}

/// 500 body: dispatch failed outright; `data` is always the empty object.
#[derive(Debug, Serialize, ToSchema)]
pub struct DispatchFailure {
    pub error: String,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

impl DispatchFailure {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            data: serde_json::json!({}),
        }
    }
}
