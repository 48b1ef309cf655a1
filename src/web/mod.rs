//! Server-rendered HTML site.
//!
//! Marketing pages, the public tracking page and the admin dashboard,
//! rendered with Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Cookie session check for admin pages
//! - [`routes`] - HTML route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
