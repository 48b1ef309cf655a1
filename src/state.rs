//! Shared application state passed to every handler.

use std::sync::Arc;

use crate::application::services::{
    AuthService, CaptchaService, NotificationService, ShipmentService, TrackingService,
};

/// Public settings templates and handlers need.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// Absolute base URL, without trailing slash.
    pub app_url: String,
    /// reCAPTCHA v3 site key rendered into public forms.
    pub recaptcha_site_key: Option<String>,
    /// Add `Secure` to the session cookie (HTTPS deployments).
    pub secure_cookies: bool,
    pub email_enabled: bool,
}

impl SiteSettings {
    pub fn new(app_url: &str) -> Self {
        Self {
            app_url: app_url.trim_end_matches('/').to_string(),
            recaptcha_site_key: None,
            secure_cookies: app_url.starts_with("https://"),
            email_enabled: false,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub shipment_service: Arc<ShipmentService>,
    pub tracking_service: Arc<TrackingService>,
    pub notification_service: NotificationService,
    pub auth_service: Arc<AuthService>,
    pub captcha_service: Arc<CaptchaService>,
    pub site: Arc<SiteSettings>,
}
