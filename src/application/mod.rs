//! Application layer services.
//!
//! Services orchestrate repository calls and domain policy and expose a
//! small API to HTTP handlers.
//!
//! - [`services::resolver_service::RedirectResolver`] - Slug resolution and click tracking

pub mod services;
