//! Chatbot Data Gateway
//!
//! A small HTTP service that synthesizes mock data (orders, delivery slots,
//! subscription plans) for the laundry chatbot front-end to display.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber / rolling file setup
//! - [`clock`] - injectable time source
//! - [`synth`] - the data synthesizer (per-request mock data generators)
//! - [`gateway`] - axum router, handlers, shared state

pub mod clock;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod synth;

// Convenient re-exports at crate root
pub use clock::{Clock, FixedClock, SystemClock};
pub use synth::{AllData, SynthError};
pub use synth::orders::{Order, OrderStatus};
pub use synth::slots::{DaySlots, Slot, SlotAvailability};
pub use synth::subscription::{ActivePlan, PlanOffer, SubscriptionStatus};
