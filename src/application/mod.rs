//! Application layer services implementing business logic.
//!
//! Services consume repository and provider traits and give HTTP handlers a
//! small API that never exposes SQL or provider details.
//!
//! # Available Services
//!
//! - [`services::shipment_service::ShipmentService`] - Shipment creation, listing and status updates
//! - [`services::tracking_service::TrackingService`] - Public tracking view
//! - [`services::notification_service::NotificationService`] - Best-effort email/SMS queue
//! - [`services::auth_service::AuthService`] - Admin login and session tokens
//! - [`services::captcha_service::CaptchaService`] - reCAPTCHA score checks

pub mod services;
