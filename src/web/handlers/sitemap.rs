//! `sitemap.xml` for the public marketing pages.

use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};

use crate::state::AppState;

/// Public paths with their change frequency and priority.
const PAGES: &[(&str, &str, &str)] = &[
    ("/", "daily", "1.0"),
    ("/about", "monthly", "0.8"),
    ("/services", "monthly", "0.8"),
    ("/tracking", "daily", "0.9"),
    ("/contact", "monthly", "0.7"),
    ("/faq", "monthly", "0.6"),
    ("/shipping", "yearly", "0.5"),
    ("/refunds", "yearly", "0.5"),
    ("/privacy", "yearly", "0.3"),
    ("/terms", "yearly", "0.3"),
    ("/cookies", "yearly", "0.3"),
    ("/login", "yearly", "0.2"),
];

/// Builds the sitemap document for `base_url` (no trailing slash).
pub fn sitemap_xml(base_url: &str, last_modified: NaiveDate) -> String {
    let base = base_url.trim_end_matches('/');
    let date = last_modified.format("%Y-%m-%d");

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for (path, changefreq, priority) in PAGES {
        let loc = if *path == "/" {
            base.to_string()
        } else {
            format!("{base}{path}")
        };
        xml.push_str(&format!(
            "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{date}</lastmod>\n    \
             <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>\n"
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// # Endpoint
///
/// `GET /sitemap.xml`
pub async fn sitemap_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = sitemap_xml(&state.site.app_url, Utc::now().date_naive());
    ([(CONTENT_TYPE, "application/xml")], body)
}
