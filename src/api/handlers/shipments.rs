//! Handlers for the admin shipment endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shipment::{
    CreateShipmentRequest, ShipmentResponse, StatusUpdate, UpdateShipmentRequest,
    UpdateShipmentResponse,
};
use crate::domain::notification::StatusNotification;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shipment and its initial `created` event.
///
/// # Endpoint
///
/// `POST /api/shipments/create`
///
/// # Request Body
///
/// ```json
/// {
///   "trackingNumber": "FR-123456789",
///   "senderName": "John Smith",
///   "senderAddress": "123 Broadway Ave, New York",
///   "receiverName": "Jane Doe",
///   "receiverEmail": "jane@example.com",
///   "weight": "2.5",
///   "serviceType": "express"
/// }
/// ```
///
/// # Errors
///
/// - 400 if a required field is blank or an email is malformed
/// - 409 if the tracking number already exists
/// - 500 on storage failure
pub async fn create_shipment_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateShipmentRequest>,
) -> Result<(StatusCode, Json<ShipmentResponse>), AppError> {
    payload.validate()?;

    let shipment = state
        .shipment_service
        .create_shipment(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(shipment.into())))
}

/// Lists all shipments, newest first, each with its events newest first.
///
/// # Endpoint
///
/// `GET /api/shipments/list`
pub async fn list_shipments_handler(State(state): State<AppState>) -> Json<Vec<ShipmentResponse>> {
    let shipments = state.shipment_service.get_all_shipments().await;

    Json(shipments.into_iter().map(ShipmentResponse::from).collect())
}

/// Sets a new status, appends an event and queues notifications.
///
/// # Endpoint
///
/// `POST /api/shipments/update`
///
/// # Request Body
///
/// ```json
/// { "trackingNumber": "FR-123456789", "status": "in_transit", "location": "Denver, CO" }
/// ```
///
/// `location` defaults to `Processing Center` and `description` to
/// `Shipment status updated to {status}`.
///
/// # Errors
///
/// - 400 if tracking number or status is missing
/// - 404 if the shipment does not exist
/// - 500 if the write fails
pub async fn update_shipment_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdateShipmentRequest>,
) -> Result<Json<UpdateShipmentResponse>, AppError> {
    let update = payload.into_status_update().ok_or_else(|| {
        AppError::bad_request(
            "Tracking number and status are required",
            json!({ "fields": ["trackingNumber", "status"] }),
        )
    })?;

    apply_status_update(&state, &update).await?;

    Ok(Json(UpdateShipmentResponse { success: true }))
}

/// Looks the shipment up, writes the update and submits the notification.
///
/// Shared with the admin HTML form.
pub async fn apply_status_update(state: &AppState, update: &StatusUpdate) -> Result<(), AppError> {
    if state
        .shipment_service
        .get_shipment(&update.tracking_number)
        .await
        .is_none()
    {
        return Err(AppError::not_found(
            "Shipment not found",
            json!({ "tracking_number": update.tracking_number }),
        ));
    }

    let shipment = state
        .shipment_service
        .update_shipment_status(
            &update.tracking_number,
            &update.status,
            &update.location,
            &update.description,
        )
        .await
        .ok_or_else(|| {
            AppError::internal(
                "Failed to update shipment status",
                json!({ "tracking_number": update.tracking_number }),
            )
        })?;

    state
        .notification_service
        .submit(StatusNotification::for_shipment(
            &shipment,
            &update.status,
            &update.location,
            &update.description,
        ));

    Ok(())
}
