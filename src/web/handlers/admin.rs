//! Admin dashboard, shipment creation and status update pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::api::dto::shipment::{CreateShipmentRequest, UpdateShipmentRequest};
use crate::api::handlers::shipments::apply_status_update;
use crate::application::services::AdminUser;
use crate::domain::entities::{Shipment, StatusCount};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::status;

/// A `<select>` option.
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const STATUS_OPTIONS: &[SelectOption] = &[
    option("pending", "Pending"),
    option("picked_up", "Picked Up"),
    option("processing", "Processing"),
    option("in_transit", "In Transit"),
    option("customs", "Customs"),
    option("out_for_delivery", "Out for Delivery"),
    option("delivered", "Delivered"),
    option("exception", "Exception"),
];

pub const SERVICE_TYPE_OPTIONS: &[SelectOption] = &[
    option("express", "Express"),
    option("standard", "Standard"),
    option("international", "International"),
    option("international_priority", "International Priority"),
    option("freight", "Freight"),
    option("same_day", "Same Day"),
];

pub const PAYMENT_MODE_OPTIONS: &[SelectOption] = &[
    option("prepaid", "Prepaid"),
    option("cod", "Cash on Delivery"),
    option("credit", "Credit Account"),
];

/// Banner shown after a redirect back to the dashboard.
pub struct Flash {
    pub kind: &'static str,
    pub message: &'static str,
}

impl Flash {
    fn from_notice(notice: &str) -> Option<Self> {
        let (kind, message) = match notice {
            "created" => ("success", "Shipment created."),
            "updated" => ("success", "Shipment status updated."),
            "not_found" => ("error", "Shipment not found."),
            "invalid" => ("error", "Tracking number and status are required."),
            "failed" => ("error", "Failed to update shipment status."),
            _ => return None,
        };
        Some(Self { kind, message })
    }
}

pub struct DashboardRow {
    pub tracking_href: String,
    pub tracking_number: String,
    pub sender: String,
    pub receiver: String,
    pub status: String,
    pub status_label: String,
    pub last_location: String,
    pub created_at: String,
}

impl From<&Shipment> for DashboardRow {
    fn from(s: &Shipment) -> Self {
        let encoded: String =
            url::form_urlencoded::byte_serialize(s.tracking_number.as_bytes()).collect();

        Self {
            tracking_href: format!("/tracking?id={encoded}"),
            tracking_number: s.tracking_number.clone(),
            sender: s.sender.name.clone(),
            receiver: s.receiver.name.clone(),
            status: s.status.clone(),
            status_label: status::display(&s.status),
            last_location: s
                .latest_event()
                .map(|e| e.location.clone())
                .unwrap_or_else(|| "-".to_string()),
            created_at: s.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
struct DashboardTemplate {
    user: AdminUser,
    flash: Option<Flash>,
    total: i64,
    in_transit: i64,
    delivered: i64,
    pending: i64,
    query: String,
    rows: Vec<DashboardRow>,
    statuses: &'static [SelectOption],
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub notice: String,
}

fn count_of(counts: &[StatusCount], status: &str) -> i64 {
    counts
        .iter()
        .find(|c| c.status == status)
        .map_or(0, |c| c.count)
}

fn matches_query(shipment: &Shipment, needle: &str) -> bool {
    [
        &shipment.tracking_number,
        &shipment.sender.name,
        &shipment.receiver.name,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Renders the admin dashboard.
///
/// # Endpoint
///
/// `GET /admin?q=<search>&notice=<code>`
///
/// Counters cover every shipment; `q` filters only the table.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AdminUser>,
    Query(params): Query<DashboardQuery>,
) -> impl IntoResponse {
    let counts = state.shipment_service.status_counts().await;
    let shipments = state.shipment_service.get_all_shipments().await;

    let query = params.q.trim().to_string();
    let needle = query.to_lowercase();
    let rows = shipments
        .iter()
        .filter(|s| needle.is_empty() || matches_query(s, &needle))
        .map(DashboardRow::from)
        .collect();

    DashboardTemplate {
        user,
        flash: Flash::from_notice(&params.notice),
        total: counts.iter().map(|c| c.count).sum(),
        in_transit: count_of(&counts, "in_transit"),
        delivered: count_of(&counts, "delivered"),
        pending: count_of(&counts, "pending"),
        query,
        rows,
        statuses: STATUS_OPTIONS,
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/create.html")]
struct CreateTemplate {
    error: Option<String>,
    tracking_number: String,
    today: String,
    service_types: &'static [SelectOption],
    statuses: &'static [SelectOption],
    payment_modes: &'static [SelectOption],
}

impl CreateTemplate {
    fn new(error: Option<String>, tracking_number: String) -> Self {
        Self {
            error,
            tracking_number,
            today: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            service_types: SERVICE_TYPE_OPTIONS,
            statuses: STATUS_OPTIONS,
            payment_modes: PAYMENT_MODE_OPTIONS,
        }
    }
}

/// Suggested tracking number for a new shipment, e.g. `FR1736500000000`.
fn generate_tracking_number() -> String {
    format!("FR{}", Utc::now().timestamp_millis())
}

/// Renders the shipment creation form with a generated tracking number.
///
/// # Endpoint
///
/// `GET /admin/create`
pub async fn create_page_handler() -> impl IntoResponse {
    CreateTemplate::new(None, generate_tracking_number())
}

/// Handles the shipment creation form.
///
/// # Endpoint
///
/// `POST /admin/create`
///
/// Redirects to `/admin?notice=created` on success, otherwise re-renders the
/// form with the error and the status code the JSON API would return.
pub async fn create_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateShipmentRequest>,
) -> Response {
    let tracking_number = form.tracking_number.trim().to_string();

    let result = match form.validate() {
        Ok(()) => state.shipment_service.create_shipment(form.into()).await,
        Err(e) => Err(AppError::from(e)),
    };

    match result {
        Ok(shipment) => {
            tracing::info!(tracking_number = %shipment.tracking_number, "Shipment created from admin form");
            Redirect::to("/admin?notice=created").into_response()
        }
        Err(e) => {
            let status = e.status_code();
            let message = e.to_error_info().message;
            (status, CreateTemplate::new(Some(message), tracking_number)).into_response()
        }
    }
}

/// Handles the inline status update form on the dashboard.
///
/// # Endpoint
///
/// `POST /admin/update`
pub async fn update_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<UpdateShipmentRequest>,
) -> Redirect {
    let Some(update) = form.into_status_update() else {
        return Redirect::to("/admin?notice=invalid");
    };

    let notice = match apply_status_update(&state, &update).await {
        Ok(()) => "updated",
        Err(e) if e.status_code() == StatusCode::NOT_FOUND => "not_found",
        Err(_) => "failed",
    };

    Redirect::to(&format!("/admin?notice={notice}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Party, ShipmentEvent};

    fn shipment(tracking_number: &str, sender: &str) -> Shipment {
        let now = Utc::now();
        Shipment {
            id: 1,
            tracking_number: tracking_number.to_string(),
            sender: Party {
                name: sender.to_string(),
                ..Party::default()
            },
            receiver: Party {
                name: "Bob Receiver".to_string(),
                ..Party::default()
            },
            weight: "2".to_string(),
            service_type: "standard".to_string(),
            status: "in_transit".to_string(),
            date_sent: "2025-01-01".to_string(),
            estimated_delivery: String::new(),
            contents: None,
            payment_mode: None,
            instructions: None,
            created_at: now,
            events: vec![ShipmentEvent {
                id: 3,
                status: "in_transit".to_string(),
                location: "Lagos Hub".to_string(),
                description: "Departed".to_string(),
                timestamp: now,
                created_at: now,
            }],
        }
    }

    #[test]
    fn test_row_encodes_tracking_link() {
        let row = DashboardRow::from(&shipment("FR 1&2", "Alice"));

        assert_eq!(row.tracking_href, "/tracking?id=FR+1%262");
        assert_eq!(row.status_label, status::display("in_transit"));
        assert_eq!(row.last_location, "Lagos Hub");
    }

    #[test]
    fn test_row_without_events() {
        let mut s = shipment("FR1", "Alice");
        s.events.clear();

        assert_eq!(DashboardRow::from(&s).last_location, "-");
    }

    #[test]
    fn test_matches_query_is_case_insensitive() {
        let s = shipment("FR123", "Alice Sender");

        assert!(matches_query(&s, "fr12"));
        assert!(matches_query(&s, "alice"));
        assert!(matches_query(&s, "bob"));
        assert!(!matches_query(&s, "carol"));
    }

    #[test]
    fn test_count_of() {
        let counts = vec![
            StatusCount {
                status: "pending".to_string(),
                count: 3,
            },
            StatusCount {
                status: "delivered".to_string(),
                count: 1,
            },
        ];

        assert_eq!(count_of(&counts, "pending"), 3);
        assert_eq!(count_of(&counts, "delivered"), 1);
        assert_eq!(count_of(&counts, "in_transit"), 0);
    }

    #[test]
    fn test_generate_tracking_number() {
        let tn = generate_tracking_number();

        assert!(tn.starts_with("FR"));
        assert!(tn[2..].chars().all(|c| c.is_ascii_digit()));
        assert!(tn.len() > 10);
    }

    #[test]
    fn test_flash_codes() {
        assert_eq!(Flash::from_notice("created").map(|f| f.kind), Some("success"));
        assert_eq!(Flash::from_notice("failed").map(|f| f.kind), Some("error"));
        assert!(Flash::from_notice("").is_none());
        assert!(Flash::from_notice("bogus").is_none());
    }
}
