//! Core domain entities.
//!
//! Entities are plain data structures. Creation inputs live next to the
//! entity they produce:
//!
//! - [`Shipment`] / [`NewShipment`] - A tracked package
//! - [`ShipmentEvent`] / [`NewShipmentEvent`] - An append-only lifecycle milestone
//! - [`Party`] - Sender or receiver contact details

pub mod shipment;

pub use shipment::{
    CREATED_DESCRIPTION, CREATED_STATUS, NewShipment, NewShipmentEvent, Party, Shipment,
    ShipmentEvent, StatusCount,
};
