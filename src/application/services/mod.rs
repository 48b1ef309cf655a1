//! Business logic services for the application layer.

pub mod auth_service;
pub mod captcha_service;
pub mod notification_service;
pub mod shipment_service;
pub mod tracking_service;

pub use auth_service::{AdminCredentials, AdminUser, AuthService, Session};
pub use captcha_service::{CaptchaOutcome, CaptchaService};
pub use notification_service::{
    NotificationDispatcher, NotificationService, run_notification_worker,
};
pub use shipment_service::ShipmentService;
pub use tracking_service::{TrackingService, TrackingView};
