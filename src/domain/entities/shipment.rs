//! Shipment entity and its lifecycle events.

use chrono::{DateTime, Utc};

/// Status written on the synthetic event recorded when a shipment is created.
pub const CREATED_STATUS: &str = "created";

/// Description of the synthetic creation event.
pub const CREATED_DESCRIPTION: &str = "Shipment information received";

/// A tracked package record.
///
/// `status` is free-form: no transition rules are enforced, any string the
/// admin writes is stored as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    pub id: i64,
    pub tracking_number: String,
    pub sender: Party,
    pub receiver: Party,
    pub weight: String,
    pub service_type: String,
    pub status: String,
    pub date_sent: String,
    pub estimated_delivery: String,
    pub contents: Option<String>,
    pub payment_mode: Option<String>,
    pub instructions: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Lifecycle events, most recent first.
    pub events: Vec<ShipmentEvent>,
}

impl Shipment {
    /// Sorts events by timestamp, most recent first.
    ///
    /// Events sharing a timestamp fall back to id order so the output is stable.
    pub fn sort_events(&mut self) {
        self.events
            .sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
    }

    /// Returns the most recent event, if any.
    pub fn latest_event(&self) -> Option<&ShipmentEvent> {
        self.events.first()
    }
}

/// Sender or receiver contact details.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Party {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

/// An immutable milestone in a shipment's delivery lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentEvent {
    pub id: i64,
    pub status: String,
    pub location: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new shipment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShipment {
    pub tracking_number: String,
    pub sender: Party,
    pub receiver: Party,
    pub weight: String,
    pub service_type: String,
    pub status: String,
    pub date_sent: String,
    pub estimated_delivery: String,
    pub contents: Option<String>,
    pub payment_mode: Option<String>,
    pub instructions: Option<String>,
}

/// Input data for appending an event to a shipment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShipmentEvent {
    pub status: String,
    pub location: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl NewShipmentEvent {
    pub fn new(
        status: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            location: location.into(),
            description: description.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Number of shipments currently in a given status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}
