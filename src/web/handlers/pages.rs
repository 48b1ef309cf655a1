//! Static marketing and policy pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
struct HomeTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
struct AboutTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "pages/services.html")]
struct ServicesTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "pages/faq.html")]
struct FaqTemplate {}

/// Renders `templates/pages/contact.html`; the form posts to `/api/contact`.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
struct ContactTemplate {
    recaptcha_site_key: Option<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/shipping.html")]
struct ShippingTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "pages/refunds.html")]
struct RefundsTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "pages/privacy.html")]
struct PrivacyTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "pages/terms.html")]
struct TermsTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "pages/cookies.html")]
struct CookiesTemplate {}

/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}

/// `GET /about`
pub async fn about_handler() -> impl IntoResponse {
    AboutTemplate {}
}

/// `GET /services`
pub async fn services_handler() -> impl IntoResponse {
    ServicesTemplate {}
}

/// `GET /faq`
pub async fn faq_handler() -> impl IntoResponse {
    FaqTemplate {}
}

/// `GET /contact`
///
/// Loads reCAPTCHA v3 in the page when a site key is configured.
pub async fn contact_handler(State(state): State<AppState>) -> impl IntoResponse {
    ContactTemplate {
        recaptcha_site_key: state.site.recaptcha_site_key.clone(),
    }
}

/// `GET /shipping`
pub async fn shipping_handler() -> impl IntoResponse {
    ShippingTemplate {}
}

/// `GET /refunds`
pub async fn refunds_handler() -> impl IntoResponse {
    RefundsTemplate {}
}

/// `GET /privacy`
pub async fn privacy_handler() -> impl IntoResponse {
    PrivacyTemplate {}
}

/// `GET /terms`
pub async fn terms_handler() -> impl IntoResponse {
    TermsTemplate {}
}

/// `GET /cookies`
pub async fn cookies_handler() -> impl IntoResponse {
    CookiesTemplate {}
}
