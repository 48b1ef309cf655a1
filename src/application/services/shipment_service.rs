//! Shipment creation, lookup and status updates.

use std::sync::Arc;

use crate::domain::entities::{
    CREATED_DESCRIPTION, CREATED_STATUS, NewShipment, NewShipmentEvent, Shipment, StatusCount,
};
use crate::domain::repositories::ShipmentRepository;
use crate::error::AppError;
use crate::utils::address;
use serde_json::json;

/// Location recorded on the creation event when the sender address has no
/// usable place name.
pub const ORIGIN_FALLBACK: &str = "Origin Facility";

/// Service for the shipment lifecycle: create, read, append status events.
///
/// Read operations never fail: storage errors are logged and surface as an
/// empty list or `None`, so public pages degrade to "not found".
pub struct ShipmentService {
    repository: Arc<dyn ShipmentRepository>,
}

impl ShipmentService {
    /// Creates a new shipment service.
    pub fn new(repository: Arc<dyn ShipmentRepository>) -> Self {
        Self { repository }
    }

    /// Returns every shipment with its events.
    ///
    /// Shipments are ordered by `created_at` descending and each shipment's
    /// events by timestamp descending. Returns an empty list on read failure.
    pub async fn get_all_shipments(&self) -> Vec<Shipment> {
        match self.repository.list_all().await {
            Ok(mut shipments) => {
                for shipment in &mut shipments {
                    shipment.sort_events();
                }
                shipments.sort_by(|a, b| {
                    b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
                });
                shipments
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching shipments");
                Vec::new()
            }
        }
    }

    /// Returns one shipment with its events, or `None` if not found or on error.
    pub async fn get_shipment(&self, tracking_number: &str) -> Option<Shipment> {
        match self
            .repository
            .find_by_tracking_number(tracking_number)
            .await
        {
            Ok(shipment) => shipment.map(|mut s| {
                s.sort_events();
                s
            }),
            Err(e) => {
                tracing::error!(error = %e, tracking_number, "Error fetching shipment");
                None
            }
        }
    }

    /// Creates a shipment and its synthetic `created` event.
    ///
    /// The event location is the last comma-separated segment of the sender
    /// address, or [`ORIGIN_FALLBACK`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if tracking number, sender name or
    /// receiver name is blank.
    /// Returns [`AppError::Conflict`] if the tracking number already exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_shipment(&self, input: NewShipment) -> Result<Shipment, AppError> {
        validate_new_shipment(&input)?;

        let location = address::last_segment_or(&input.sender.address, ORIGIN_FALLBACK);
        let initial_event = NewShipmentEvent::new(CREATED_STATUS, location, CREATED_DESCRIPTION);

        let tracking_number = input.tracking_number.clone();
        let mut shipment = self
            .repository
            .create(input, initial_event)
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "A shipment with this tracking number already exists",
                    json!({ "tracking_number": tracking_number }),
                ),
                other => other,
            })?;

        shipment.sort_events();
        tracing::info!(tracking_number = %shipment.tracking_number, "Shipment created");

        Ok(shipment)
    }

    /// Sets a new status and appends the matching event.
    ///
    /// Any status string is accepted. Returns the refreshed shipment, or
    /// `None` if the shipment does not exist or a write failed.
    pub async fn update_shipment_status(
        &self,
        tracking_number: &str,
        status: &str,
        location: &str,
        description: &str,
    ) -> Option<Shipment> {
        let event = NewShipmentEvent::new(status, location, description);

        match self.repository.update_status(tracking_number, event).await {
            Ok(Some(mut shipment)) => {
                shipment.sort_events();
                tracing::info!(tracking_number, status, "Shipment status updated");
                Some(shipment)
            }
            Ok(None) => {
                tracing::debug!(tracking_number, "Status update for unknown shipment");
                None
            }
            Err(e) => {
                tracing::error!(error = %e, tracking_number, "Error updating shipment");
                None
            }
        }
    }

    /// Shipment counts per status. Returns an empty list on read failure.
    pub async fn status_counts(&self) -> Vec<StatusCount> {
        self.repository
            .status_counts()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error counting shipments"))
            .unwrap_or_default()
    }

    /// Checks datastore connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the datastore cannot be reached.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn validate_new_shipment(input: &NewShipment) -> Result<(), AppError> {
    let missing: Vec<&str> = [
        ("trackingNumber", &input.tracking_number),
        ("senderName", &input.sender.name),
        ("receiverName", &input.receiver.name),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err(AppError::bad_request(
            "Missing required fields",
            json!({ "fields": missing }),
        ));
    }

    Ok(())
}
