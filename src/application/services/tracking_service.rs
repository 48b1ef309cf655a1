//! Public tracking lookup.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::ShipmentService;
use crate::domain::entities::{Party, Shipment, ShipmentEvent};
use crate::utils::{address, status};

/// Place name used when an address has no comma-separated segment.
pub const UNKNOWN_PLACE: &str = "Unknown";

/// Package description used when the shipment has no contents.
pub const DEFAULT_PACKAGE_DESCRIPTION: &str = "Package";

/// Public view of a shipment, as shown to customers.
///
/// Contact emails, payment mode and internal ids are not exposed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingView {
    pub id: String,
    pub tracking_number: String,
    pub status: String,
    pub estimated_delivery: String,
    pub origin: String,
    pub destination: String,
    pub sender: ContactView,
    pub receiver: ContactView,
    pub package_details: PackageDetails,
    pub events: Vec<TrackingEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView {
    pub name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageDetails {
    /// Weight with unit suffix, e.g. `2.5 kg`.
    pub weight: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingEvent {
    pub id: String,
    pub status: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

impl From<&Party> for ContactView {
    fn from(party: &Party) -> Self {
        Self {
            name: party.name.clone(),
            address: party.address.clone(),
            phone: party.phone.clone(),
        }
    }
}

impl From<&ShipmentEvent> for TrackingEvent {
    fn from(event: &ShipmentEvent) -> Self {
        Self {
            id: event.id.to_string(),
            status: event.status.clone(),
            location: event.location.clone(),
            timestamp: event.timestamp,
            description: event.description.clone(),
        }
    }
}

impl From<&Shipment> for TrackingView {
    fn from(shipment: &Shipment) -> Self {
        Self {
            id: shipment.tracking_number.clone(),
            tracking_number: shipment.tracking_number.clone(),
            status: shipment.status.clone(),
            estimated_delivery: shipment.estimated_delivery.clone(),
            origin: address::last_segment_or(&shipment.sender.address, UNKNOWN_PLACE).to_string(),
            destination: address::last_segment_or(&shipment.receiver.address, UNKNOWN_PLACE)
                .to_string(),
            sender: ContactView::from(&shipment.sender),
            receiver: ContactView::from(&shipment.receiver),
            package_details: PackageDetails {
                weight: format!("{} kg", shipment.weight),
                kind: shipment.service_type.clone(),
                description: shipment
                    .contents
                    .clone()
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_PACKAGE_DESCRIPTION.to_string()),
            },
            events: shipment.events.iter().map(TrackingEvent::from).collect(),
        }
    }
}

impl TrackingView {
    /// Progress bar fill for the tracking page.
    pub fn progress_percent(&self) -> u8 {
        match self.status.as_str() {
            "delivered" => 100,
            "out_for_delivery" => 75,
            _ => 50,
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.status == "delivered"
    }

    /// Upper-cased status for badges, e.g. `OUT FOR DELIVERY`.
    pub fn status_label(&self) -> String {
        status::display(&self.status)
    }
}

impl TrackingEvent {
    pub fn status_label(&self) -> String {
        status::display(&self.status)
    }
}

/// Looks up shipments for customers and reshapes them into [`TrackingView`]s.
pub struct TrackingService {
    shipments: Arc<ShipmentService>,
}

impl TrackingService {
    pub fn new(shipments: Arc<ShipmentService>) -> Self {
        Self { shipments }
    }

    /// Returns the public view of a shipment, or `None` if it is unknown.
    pub async fn lookup(&self, tracking_number: &str) -> Option<TrackingView> {
        let tracking_number = tracking_number.trim();
        if tracking_number.is_empty() {
            return None;
        }

        self.shipments
            .get_shipment(tracking_number)
            .await
            .map(|shipment| TrackingView::from(&shipment))
    }
}
