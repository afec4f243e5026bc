//! Dynamic data dispatch handlers
//!
//! `GET /dynamic-data/` takes an optional `type` query parameter;
//! `GET /dynamic-data/{data_type}/` takes the selector from the path, which
//! wins over any query parameter. An unknown selector returns 400 with the
//! offending value named. Generator failures degrade to empty payloads
//! inside the synthesizer, and anything unhandled past that surfaces as a
//! 500 envelope instead of a crash.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::super::state::AppState;
use super::super::types::{DataType, DispatchError, DispatchFailure, ErrorResponse};
use crate::synth;

/// Get mock data by query selector
///
/// GET /dynamic-data/?type=current-orders
#[utoipa::path(
    get,
    path = "/dynamic-data/",
    params(
        ("type" = Option<String>, Query,
         description = "Dataset selector: current-orders | previous-orders | slot-availability | subscription-status | all-data (default)")
    ),
    responses(
        (status = 200, description = "Requested mock dataset", content_type = "application/json"),
        (status = 400, description = "Unknown selector", body = ErrorResponse),
        (status = 500, description = "Unhandled dispatch failure", body = DispatchFailure)
    ),
    tag = "Dynamic Data"
)]
pub async fn get_dynamic_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    dispatch(&state, params.get("type").map(String::as_str))
}

/// Get mock data by path selector
///
/// GET /dynamic-data/subscription-status/
#[utoipa::path(
    get,
    path = "/dynamic-data/{data_type}/",
    params(
        ("data_type" = String, Path,
         description = "Dataset selector; takes precedence over the `type` query parameter")
    ),
    responses(
        (status = 200, description = "Requested mock dataset", content_type = "application/json"),
        (status = 400, description = "Unknown selector", body = ErrorResponse),
        (status = 500, description = "Unhandled dispatch failure", body = DispatchFailure)
    ),
    tag = "Dynamic Data"
)]
pub async fn get_dynamic_data_typed(
    State(state): State<Arc<AppState>>,
    Path(data_type): Path<String>,
) -> Response {
    dispatch(&state, Some(&data_type))
}

fn dispatch(state: &AppState, selector: Option<&str>) -> Response {
    match try_dispatch(state, selector) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "dynamic data dispatch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DispatchFailure::new(e.to_string())),
            )
                .into_response()
        }
    }
}

fn try_dispatch(state: &AppState, selector: Option<&str>) -> Result<Response, DispatchError> {
    let raw = selector.unwrap_or(DataType::AllData.as_str());

    let Some(data_type) = DataType::parse(raw) else {
        tracing::warn!(selector = raw, "unknown data type requested");
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::unknown_type(raw)),
        )
            .into_response());
    };

    tracing::debug!(selector = data_type.as_str(), "dispatching dynamic data request");
    let clock = state.clock.as_ref();
    let mut rng = rand::thread_rng();

    let response = match data_type {
        DataType::CurrentOrders => Json(synth::orders::current_orders(clock)).into_response(),
        DataType::PreviousOrders => Json(synth::orders::previous_orders(clock)).into_response(),
        DataType::SlotAvailability => {
            Json(synth::slots::slot_availability(clock, &mut rng)).into_response()
        }
        DataType::SubscriptionStatus => {
            Json(synth::subscription::subscription_status(clock, &mut rng)).into_response()
        }
        DataType::AllData => Json(synth::all_data(clock, &mut rng)).into_response(),
    };

    Ok(response)
}
