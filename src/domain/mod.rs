//! Domain layer containing the site's entities and content contracts.
//!
//! Defines typed views of upstream content and the repository interface
//! the application layer reads through, independent of infrastructure.
//!
//! # Architecture
//!
//! - [`entities`] - Documents, collection, navigation tree, redirect records
//! - [`repositories`] - Content source trait definition
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer

pub mod entities;
pub mod repositories;
