//! JSON API under `/api`.
//!
//! Shipment administration, public tracking, admin session endpoints,
//! the contact form and reCAPTCHA verification.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies (camelCase JSON)
//! - [`handlers`] - Endpoint handlers
//! - [`middleware`] - Session auth, rate limiting, request tracing
//! - [`routes`] - Route groups by protection level

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
