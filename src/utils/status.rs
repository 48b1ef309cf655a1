//! Formatting helpers for free-form shipment statuses.

/// Replaces underscores with spaces: `out_for_delivery` → `out for delivery`.
pub fn humanize(status: &str) -> String {
    status.replace('_', " ")
}

/// Upper-cased [`humanize`], used in notifications and badges.
pub fn display(status: &str) -> String {
    humanize(status).to_uppercase()
}
