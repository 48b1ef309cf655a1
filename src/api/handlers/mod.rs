//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod captcha;
pub mod contact;
pub mod health;
pub mod shipments;
pub mod tracking;

pub use auth::{login_handler, logout_handler, register_handler, session_handler};
pub use captcha::verify_captcha_handler;
pub use contact::contact_handler;
pub use health::health_handler;
pub use shipments::{create_shipment_handler, list_shipments_handler, update_shipment_handler};
pub use tracking::tracking_handler;
