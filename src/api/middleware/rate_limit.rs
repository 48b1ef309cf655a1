//! Rate limiting middleware using token bucket algorithm.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

type PeerLayer = GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;
type ProxyLayer =
    GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Per-IP quota profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimit {
    /// One token every 2 seconds, burst of 100. Pages, tracking and admin API.
    Standard,
    /// One token per second, burst of 10. Login, contact form and reCAPTCHA,
    /// where each request is a password guess or an outbound provider call.
    Strict,
}

impl RateLimit {
    fn quota(self) -> (u64, u32) {
        match self {
            RateLimit::Standard => (2, 100),
            RateLimit::Strict => (1, 10),
        }
    }
}

fn peer_layer(limit: RateLimit) -> PeerLayer {
    let (per_second, burst) = limit.quota();
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

fn proxy_layer(limit: RateLimit) -> ProxyLayer {
    let (per_second, burst) = limit.quota();
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(per_second)
            .burst_size(burst)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Wraps `router` in a per-IP rate limiter.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// By default the client IP is the socket peer address, which requires the
/// server to be started with connect info. With `behind_proxy` the IP is
/// read from `X-Forwarded-For` / `X-Real-IP` / `Forwarded` first; enable it
/// only behind a trusted reverse proxy.
///
/// # Example
///
/// ```rust,ignore
/// let login = rate_limit::apply(
///     Router::new().route("/auth/login", post(login_handler)),
///     RateLimit::Strict,
///     config.behind_proxy,
/// );
/// ```
pub fn apply(router: Router<AppState>, limit: RateLimit, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        router.layer(proxy_layer(limit))
    } else {
        router.layer(peer_layer(limit))
    }
}
