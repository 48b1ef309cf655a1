//! Public tracking page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::services::TrackingView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TrackingQuery {
    pub id: Option<String>,
}

/// Renders `templates/pages/tracking.html` with:
/// - the search form, prefilled with the last query
/// - progress bar, route, contacts and event timeline when found
/// - a "not found" notice when a search matched nothing
#[derive(Template, WebTemplate)]
#[template(path = "pages/tracking.html")]
struct TrackingTemplate {
    query: String,
    view: Option<TrackingView>,
    searched: bool,
}

/// Renders the tracking page.
///
/// # Endpoint
///
/// `GET /tracking?id={trackingNumber}`
///
/// Responds 404 (with the page) when a searched number is unknown.
pub async fn tracking_page_handler(
    State(state): State<AppState>,
    Query(params): Query<TrackingQuery>,
) -> impl IntoResponse {
    let query = params.id.unwrap_or_default().trim().to_string();

    if query.is_empty() {
        return (
            StatusCode::OK,
            TrackingTemplate {
                query,
                view: None,
                searched: false,
            },
        );
    }

    let view = state.tracking_service.lookup(&query).await;
    let status = if view.is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    (
        status,
        TrackingTemplate {
            query,
            view,
            searched: true,
        },
    )
}
