//! HTTP layer.
//!
//! Translates requests into resolver calls and resolutions into responses.
//!
//! # Modules
//!
//! - [`dto`] - JSON response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and panic recovery
//! - [`render`] - Redirect / confirmation page rendering
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod routes;
