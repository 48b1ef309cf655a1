//! Status notification model for best-effort outbound delivery.

use crate::domain::entities::{Party, Shipment};

/// A status change to announce to a shipment's sender and receiver.
///
/// Created by the update handler and passed to the notification worker via
/// a channel, so the HTTP response never waits on the email/SMS providers.
/// Contains denormalized contact data to avoid lookups in the worker.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusNotification {
    pub tracking_number: String,
    pub status: String,
    pub location: String,
    pub description: String,
    pub sender: Recipient,
    pub receiver: Recipient,
}

/// Contact details of one notified party.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<&Party> for Recipient {
    fn from(party: &Party) -> Self {
        Self {
            name: party.name.clone(),
            email: party.email.clone().filter(|e| !e.trim().is_empty()),
            phone: Some(party.phone.clone()).filter(|p| !p.trim().is_empty()),
        }
    }
}

impl StatusNotification {
    /// Builds a notification for `shipment` moving to `status`.
    pub fn for_shipment(
        shipment: &Shipment,
        status: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            tracking_number: shipment.tracking_number.clone(),
            status: status.into(),
            location: location.into(),
            description: description.into(),
            sender: Recipient::from(&shipment.sender),
            receiver: Recipient::from(&shipment.receiver),
        }
    }

    /// Parties in notification order: sender first, then receiver.
    pub fn recipients(&self) -> [&Recipient; 2] {
        [&self.sender, &self.receiver]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn party(name: &str, email: Option<&str>, phone: &str) -> Party {
        Party {
            name: name.to_string(),
            address: "1 Main St, Springfield".to_string(),
            phone: phone.to_string(),
            email: email.map(str::to_string),
            country: None,
            zip: None,
        }
    }

    fn shipment() -> Shipment {
        Shipment {
            id: 7,
            tracking_number: "FR42".to_string(),
            sender: party("Alice", Some("alice@example.com"), "+1 555 0100"),
            receiver: party("Bob", Some("  "), ""),
            weight: "1.5".to_string(),
            service_type: "express".to_string(),
            status: "pending".to_string(),
            date_sent: "2025-01-01".to_string(),
            estimated_delivery: "2025-01-03".to_string(),
            contents: None,
            payment_mode: None,
            instructions: None,
            created_at: Utc::now(),
            events: vec![],
        }
    }

    #[test]
    fn test_for_shipment_copies_contacts() {
        let n = StatusNotification::for_shipment(&shipment(), "in_transit", "Denver", "Moving");

        assert_eq!(n.tracking_number, "FR42");
        assert_eq!(n.status, "in_transit");
        assert_eq!(n.sender.email.as_deref(), Some("alice@example.com"));
        assert_eq!(n.sender.phone.as_deref(), Some("+1 555 0100"));
    }

    #[test]
    fn test_blank_contacts_are_dropped() {
        let n = StatusNotification::for_shipment(&shipment(), "in_transit", "Denver", "Moving");

        assert!(n.receiver.email.is_none());
        assert!(n.receiver.phone.is_none());
    }

    #[test]
    fn test_recipients_order() {
        let n = StatusNotification::for_shipment(&shipment(), "delivered", "Austin", "Done");
        let names: Vec<&str> = n.recipients().iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Alice", "Bob"]);
    }
}
