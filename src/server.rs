//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, provider clients, worker spawning, and Axum
//! server lifecycle.

use crate::application::services::{
    AdminCredentials, AuthService, CaptchaService, NotificationDispatcher, NotificationService,
    ShipmentService, TrackingService, run_notification_worker,
};
use crate::config::Config;
use crate::infrastructure::captcha::{CaptchaVerifier, RecaptchaVerifier};
use crate::infrastructure::messaging::{
    EmailSender, NullSender, ResendEmailSender, SmsSender, TwilioSmsSender,
};
use crate::infrastructure::persistence::PgShipmentRepository;
use crate::routes::app_router;
use crate::state::{AppState, SiteSettings};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Email, SMS and reCAPTCHA clients (or no-op fallbacks)
/// - Background notification worker
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let http = reqwest::Client::builder()
        .timeout(PROVIDER_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    let email: Arc<dyn EmailSender> = match &config.resend_api_key {
        Some(api_key) => {
            tracing::info!("Email notifications enabled (Resend)");
            Arc::new(ResendEmailSender::new(
                http.clone(),
                api_key.clone(),
                config.mail_from.clone(),
            ))
        }
        None => {
            tracing::info!("Email notifications disabled (NullSender)");
            Arc::new(NullSender::new())
        }
    };

    let sms: Arc<dyn SmsSender> = match (&config.twilio, config.is_sms_enabled()) {
        (Some(twilio), true) => {
            tracing::info!("SMS notifications enabled (Twilio)");
            Arc::new(TwilioSmsSender::new(
                http.clone(),
                twilio.account_sid.clone(),
                twilio.auth_token.clone(),
                twilio.phone_number.clone(),
            ))
        }
        _ => {
            tracing::info!("SMS notifications disabled (NullSender)");
            Arc::new(NullSender::new())
        }
    };

    let verifier = config.recaptcha_secret_key.as_ref().map(|secret| {
        Arc::new(RecaptchaVerifier::new(http.clone(), secret.clone())) as Arc<dyn CaptchaVerifier>
    });

    let app_url = config.parsed_app_url()?;
    let dispatcher = Arc::new(NotificationDispatcher::new(
        email,
        sms,
        app_url,
        config.is_sms_enabled(),
    ));

    let (notification_service, notification_rx) =
        NotificationService::channel(config.notification_queue_capacity);
    tokio::spawn(run_notification_worker(notification_rx, dispatcher));

    let repository = Arc::new(PgShipmentRepository::new(Arc::new(pool)));
    let shipment_service = Arc::new(ShipmentService::new(repository));
    let tracking_service = Arc::new(TrackingService::new(shipment_service.clone()));
    let auth_service = Arc::new(AuthService::new(
        AdminCredentials {
            email: config.admin_email.clone(),
            name: config.admin_name.clone(),
            password_hash: config.admin_password_hash.clone(),
        },
        &config.session_secret,
        chrono::Duration::days(config.session_ttl_days),
    ));
    let captcha_service = Arc::new(CaptchaService::new(verifier, config.recaptcha_min_score));

    let mut site = SiteSettings::new(&config.app_url);
    site.recaptcha_site_key = config.recaptcha_site_key.clone();
    site.email_enabled = config.is_email_enabled();

    let state = AppState {
        shipment_service,
        tracking_service,
        notification_service,
        auth_service,
        captcha_service,
        site: Arc::new(site),
    };

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
