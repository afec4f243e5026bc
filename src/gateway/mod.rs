pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use state::AppState;

/// Build the gateway router.
///
/// Exposed separately from [`run_server`] so tests can drive the router
/// in-process without binding a socket.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/dynamic-data/", get(handlers::get_dynamic_data))
        .route(
            "/dynamic-data/{data_type}/",
            get(handlers::get_dynamic_data_typed),
        )
        .merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .with_state(state)
}

/// Start the HTTP gateway server.
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "gateway listening");
    println!("🚀 Chatbot data gateway listening on http://{}", addr);
    println!("📖 Swagger UI: http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
