//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /redirect/{slug}` - Slug redirect (public)
//! - `GET /health`          - Health check: link store connectivity
//!
//! Deeper paths under `/redirect/` get the default redirect; anything else
//! unmatched is `404`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic guard** - Panics become the default redirect

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler};
use crate::api::middleware::{panic_guard, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let layers = ServiceBuilder::new()
        .layer(tracing::layer())
        .layer(panic_guard::layer(state.responder.clone()));

    Router::new()
        .merge(api::routes::redirect_routes())
        .route("/health", get(health_handler))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(layers)
}
