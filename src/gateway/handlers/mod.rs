pub mod dynamic_data;
pub mod health;

pub use dynamic_data::{get_dynamic_data, get_dynamic_data_typed};
pub use health::{HealthResponse, health_check};
