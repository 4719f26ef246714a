//! Web layer for the browser-facing site.
//!
//! Renders mirrored content with Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers and the not-found fallback
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
