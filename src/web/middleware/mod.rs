//! Browser-facing middleware.

pub mod web_auth;
