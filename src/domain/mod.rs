//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Shipments, events and contact details
//! - [`repositories`] - Data access trait definitions
//! - [`notification`] - Status notification model
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].
//!
//! # Status Update Flow
//!
//! 1. Admin posts a new status for a tracking number
//! 2. [`repositories::ShipmentRepository::update_status`] updates the row and appends an event
//! 3. A [`notification::StatusNotification`] is submitted to an async channel
//! 4. The notification worker emails sender and receiver; failures are only logged

pub mod entities;
pub mod notification;
pub mod repositories;
