//! Small helpers shared across layers.
//!
//! - [`address`] - Place names derived from free-form addresses
//! - [`status`] - Human-readable status labels
//! - [`cookies`] - Session cookie parsing and formatting

pub mod address;
pub mod cookies;
pub mod status;
