//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow`.
//!
//! # Repositories
//!
//! - [`PgShipmentRepository`] - Shipments and shipment events

pub mod pg_shipment_repository;

pub use pg_shipment_repository::PgShipmentRepository;
