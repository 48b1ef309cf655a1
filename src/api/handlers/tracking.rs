//! Handler for the public tracking endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::application::services::TrackingView;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the public tracking view of a shipment.
///
/// # Endpoint
///
/// `GET /api/tracking/{id}`
///
/// # Errors
///
/// Returns 404 if no shipment has this tracking number.
pub async fn tracking_handler(
    Path(tracking_number): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<TrackingView>, AppError> {
    state
        .tracking_service
        .lookup(&tracking_number)
        .await
        .map(Json)
        .ok_or_else(|| {
            AppError::not_found(
                "Shipment not found",
                json!({ "tracking_number": tracking_number }),
            )
        })
}
