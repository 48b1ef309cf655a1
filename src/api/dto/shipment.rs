//! DTOs for the shipment endpoints.
//!
//! [`CreateShipmentRequest`] is shared by the JSON API and the admin HTML
//! form, so blank form inputs deserialize to `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::domain::entities::{NewShipment, Party, Shipment, ShipmentEvent};
use crate::utils::status;

pub const DEFAULT_SERVICE_TYPE: &str = "standard";
pub const DEFAULT_STATUS: &str = "pending";
pub const DEFAULT_UPDATE_LOCATION: &str = "Processing Center";

/// Request body for `POST /api/shipments/create`.
///
/// `trackingNumber`, `senderName` and `receiverName` are required; the
/// service reports all missing ones at once.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentRequest {
    #[serde(default)]
    #[validate(length(max = 64))]
    pub tracking_number: String,

    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub sender_address: String,
    #[serde(default)]
    pub sender_phone: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(email(message = "Invalid sender email"))]
    pub sender_email: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub sender_country: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub sender_zip: Option<String>,

    #[serde(default)]
    pub receiver_name: String,
    #[serde(default)]
    pub receiver_address: String,
    #[serde(default)]
    pub receiver_phone: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(email(message = "Invalid receiver email"))]
    pub receiver_email: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub receiver_country: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub receiver_zip: Option<String>,

    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date_sent: String,
    #[serde(default)]
    pub estimated_delivery: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub contents: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub payment_mode: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub instructions: Option<String>,
}

fn or_default(value: String, default: impl FnOnce() -> String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default()
    } else {
        trimmed.to_string()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<CreateShipmentRequest> for NewShipment {
    /// Trims inputs and fills service type, status and send date defaults.
    fn from(req: CreateShipmentRequest) -> Self {
        Self {
            tracking_number: req.tracking_number.trim().to_string(),
            sender: Party {
                name: req.sender_name.trim().to_string(),
                address: req.sender_address.trim().to_string(),
                phone: req.sender_phone.trim().to_string(),
                email: non_blank(req.sender_email),
                country: non_blank(req.sender_country),
                zip: non_blank(req.sender_zip),
            },
            receiver: Party {
                name: req.receiver_name.trim().to_string(),
                address: req.receiver_address.trim().to_string(),
                phone: req.receiver_phone.trim().to_string(),
                email: non_blank(req.receiver_email),
                country: non_blank(req.receiver_country),
                zip: non_blank(req.receiver_zip),
            },
            weight: req.weight.trim().to_string(),
            service_type: or_default(req.service_type, || DEFAULT_SERVICE_TYPE.to_string()),
            status: or_default(req.status, || DEFAULT_STATUS.to_string()),
            date_sent: or_default(req.date_sent, || {
                Utc::now().date_naive().format("%Y-%m-%d").to_string()
            }),
            estimated_delivery: req.estimated_delivery.trim().to_string(),
            contents: non_blank(req.contents),
            payment_mode: non_blank(req.payment_mode),
            instructions: non_blank(req.instructions),
        }
    }
}

/// Request body for `POST /api/shipments/update` and the admin update form.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShipmentRequest {
    #[serde(default)]
    pub tracking_number: String,
    #[serde(default)]
    pub status: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub location: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub description: Option<String>,
}

/// A status update with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    pub tracking_number: String,
    pub status: String,
    pub location: String,
    pub description: String,
}

impl UpdateShipmentRequest {
    /// Applies defaults, or returns `None` when tracking number or status is blank.
    pub fn into_status_update(self) -> Option<StatusUpdate> {
        let tracking_number = self.tracking_number.trim().to_string();
        let status = self.status.trim().to_string();
        if tracking_number.is_empty() || status.is_empty() {
            return None;
        }

        let location = non_blank(self.location)
            .unwrap_or_else(|| DEFAULT_UPDATE_LOCATION.to_string());
        let description = non_blank(self.description).unwrap_or_else(|| {
            format!("Shipment status updated to {}", status::humanize(&status))
        });

        Some(StatusUpdate {
            tracking_number,
            status,
            location,
            description,
        })
    }
}

/// Response body for `POST /api/shipments/update`.
#[derive(Debug, Serialize)]
pub struct UpdateShipmentResponse {
    pub success: bool,
}

/// Full shipment representation for admin endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentResponse {
    pub tracking_number: String,
    pub sender_name: String,
    pub sender_address: String,
    pub sender_phone: String,
    pub sender_email: Option<String>,
    pub sender_country: Option<String>,
    pub sender_zip: Option<String>,
    pub receiver_name: String,
    pub receiver_address: String,
    pub receiver_phone: String,
    pub receiver_email: Option<String>,
    pub receiver_country: Option<String>,
    pub receiver_zip: Option<String>,
    pub weight: String,
    pub service_type: String,
    pub status: String,
    pub date_sent: String,
    pub estimated_delivery: String,
    pub contents: Option<String>,
    pub payment_mode: Option<String>,
    pub instructions: Option<String>,
    pub created_at: DateTime<Utc>,
    pub events: Vec<ShipmentEventResponse>,
}

#[derive(Debug, Serialize)]
pub struct ShipmentEventResponse {
    pub id: String,
    pub status: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

impl From<ShipmentEvent> for ShipmentEventResponse {
    fn from(event: ShipmentEvent) -> Self {
        Self {
            id: event.id.to_string(),
            status: event.status,
            location: event.location,
            timestamp: event.timestamp,
            description: event.description,
        }
    }
}

impl From<Shipment> for ShipmentResponse {
    fn from(s: Shipment) -> Self {
        Self {
            tracking_number: s.tracking_number,
            sender_name: s.sender.name,
            sender_address: s.sender.address,
            sender_phone: s.sender.phone,
            sender_email: s.sender.email,
            sender_country: s.sender.country,
            sender_zip: s.sender.zip,
            receiver_name: s.receiver.name,
            receiver_address: s.receiver.address,
            receiver_phone: s.receiver.phone,
            receiver_email: s.receiver.email,
            receiver_country: s.receiver.country,
            receiver_zip: s.receiver.zip,
            weight: s.weight,
            service_type: s.service_type,
            status: s.status,
            date_sent: s.date_sent,
            estimated_delivery: s.estimated_delivery,
            contents: s.contents,
            payment_mode: s.payment_mode,
            instructions: s.instructions,
            created_at: s.created_at,
            events: s.events.into_iter().map(ShipmentEventResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_blank_optionals_are_none() {
        let req: CreateShipmentRequest = serde_json::from_str(
            r#"{"trackingNumber": "FR1", "senderName": "A", "receiverName": "B",
                "senderEmail": "", "contents": ""}"#,
        )
        .unwrap();

        assert!(req.sender_email.is_none());
        assert!(req.contents.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_email() {
        let req: CreateShipmentRequest = serde_json::from_str(
            r#"{"trackingNumber": "FR1", "senderName": "A", "receiverName": "B",
                "receiverEmail": "not-an-email"}"#,
        )
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_new_shipment_defaults() {
        let req = CreateShipmentRequest {
            tracking_number: " FR1 ".to_string(),
            sender_name: "A".to_string(),
            receiver_name: "B".to_string(),
            ..CreateShipmentRequest::default()
        };

        let new: NewShipment = req.into();

        assert_eq!(new.tracking_number, "FR1");
        assert_eq!(new.service_type, "standard");
        assert_eq!(new.status, "pending");
        assert_eq!(new.date_sent.len(), 10);
        assert!(new.sender.email.is_none());
    }

    #[test]
    fn test_update_request_defaults() {
        let req: UpdateShipmentRequest = serde_json::from_str(
            r#"{"trackingNumber": "FR1", "status": "out_for_delivery", "location": ""}"#,
        )
        .unwrap();

        let update = req.into_status_update().unwrap();

        assert_eq!(update.location, "Processing Center");
        assert_eq!(
            update.description,
            "Shipment status updated to out for delivery"
        );
    }

    #[test]
    fn test_update_request_requires_status() {
        let req: UpdateShipmentRequest =
            serde_json::from_str(r#"{"trackingNumber": "FR1"}"#).unwrap();

        assert!(req.into_status_update().is_none());
    }

    #[test]
    fn test_shipment_response_camel_case() {
        let now = Utc::now();
        let shipment = Shipment {
            id: 1,
            tracking_number: "FR1".to_string(),
            sender: Party {
                name: "A".to_string(),
                ..Party::default()
            },
            receiver: Party {
                name: "B".to_string(),
                ..Party::default()
            },
            weight: "1".to_string(),
            service_type: "standard".to_string(),
            status: "pending".to_string(),
            date_sent: "2025-01-01".to_string(),
            estimated_delivery: String::new(),
            contents: None,
            payment_mode: None,
            instructions: None,
            created_at: now,
            events: vec![ShipmentEvent {
                id: 9,
                status: "created".to_string(),
                location: "Origin Facility".to_string(),
                description: "Shipment information received".to_string(),
                timestamp: now,
                created_at: now,
            }],
        };

        let json = serde_json::to_value(ShipmentResponse::from(shipment)).unwrap();

        assert_eq!(json["trackingNumber"], "FR1");
        assert_eq!(json["senderName"], "A");
        assert_eq!(json["events"][0]["id"], "9");
        assert!(json["createdAt"].is_string());
    }
}
