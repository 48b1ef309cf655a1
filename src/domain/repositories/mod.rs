//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ShipmentRepository`] - Shipments and their lifecycle events

pub mod shipment_repository;

pub use shipment_repository::ShipmentRepository;

#[cfg(test)]
pub use shipment_repository::MockShipmentRepository;
