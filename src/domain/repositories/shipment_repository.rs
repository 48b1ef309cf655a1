//! Repository trait for shipment data access.

use crate::domain::entities::{NewShipment, NewShipmentEvent, Shipment, StatusCount};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shipments and their events.
///
/// Implementations return shipments with their events attached.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShipmentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_shipment.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Lists every shipment with its events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Shipment>, AppError>;

    /// Finds a shipment by tracking number.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Shipment))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Shipment>, AppError>;

    /// Inserts a shipment together with its first event.
    ///
    /// Both rows are written atomically: if the event insert fails the
    /// shipment row is rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the tracking number already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(
        &self,
        new_shipment: NewShipment,
        initial_event: NewShipmentEvent,
    ) -> Result<Shipment, AppError>;

    /// Sets the shipment status to `event.status` and appends `event`.
    ///
    /// Both writes are atomic. Returns `Ok(None)` if no shipment has this
    /// tracking number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_status(
        &self,
        tracking_number: &str,
        event: NewShipmentEvent,
    ) -> Result<Option<Shipment>, AppError>;

    /// Counts shipments grouped by status, most common first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn status_counts(&self) -> Result<Vec<StatusCount>, AppError>;

    /// Checks that the datastore is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
