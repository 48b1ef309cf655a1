//! HTML handlers rendered with Askama templates.

mod admin;
mod login;
mod not_found;
mod pages;
mod sitemap;
mod tracking;

pub use admin::{
    create_page_handler, create_submit_handler, dashboard_handler, update_submit_handler,
};
pub use login::{login_page_handler, login_submit_handler, logout_handler};
pub use not_found::not_found_handler;
pub use pages::{
    about_handler, contact_handler, cookies_handler, faq_handler, home_handler,
    privacy_handler, refunds_handler, services_handler, shipping_handler, terms_handler,
};
pub use sitemap::{sitemap_handler, sitemap_xml};
pub use tracking::tracking_page_handler;
