//! Outline API integration.

mod client;

pub use client::{DEFAULT_API_URL, OutlineClient, OutlineSettings};
