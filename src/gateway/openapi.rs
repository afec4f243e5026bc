//! OpenAPI / Swagger UI Documentation
//!
//! Auto-generated OpenAPI 3.0 documentation for the gateway.
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    ActivePlan, AllData, DaySlots, DispatchFailure, ErrorResponse, Order, OrderStatus, PlanOffer,
    Slot, SlotAvailability, SubscriptionStatus,
};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chatbot Data Gateway API",
        version = "1.0.0",
        description = "Mock data endpoints (orders, delivery slots, subscription plans) backing the laundry chatbot front-end. All data is synthesized per request.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::dynamic_data::get_dynamic_data,
        crate::gateway::handlers::dynamic_data::get_dynamic_data_typed,
    ),
    components(
        schemas(
            HealthResponse,
            Order,
            OrderStatus,
            Slot,
            DaySlots,
            SlotAvailability,
            ActivePlan,
            PlanOffer,
            SubscriptionStatus,
            AllData,
            ErrorResponse,
            DispatchFailure,
        )
    ),
    tags(
        (name = "Dynamic Data", description = "Per-request synthesized mock datasets"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_doc_includes_all_routes() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        let paths = json["paths"].as_object().unwrap();
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/dynamic-data/"));
        assert!(paths.contains_key("/dynamic-data/{data_type}/"));
    }
}
