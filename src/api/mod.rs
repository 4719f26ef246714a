//! JSON API layer: operational endpoints and shared HTTP middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
