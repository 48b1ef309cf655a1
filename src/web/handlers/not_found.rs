use askama::Template;
use askama_web::WebTemplate;
use axum::{http::{StatusCode, Uri}, response::IntoResponse};

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    path: String,
}

/// Fallback for unknown paths.
pub async fn not_found_handler(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            path: uri.path().to_string(),
        },
    )
}
