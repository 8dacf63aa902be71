//! Redirect route configuration.

use crate::api::handlers::{
    method_not_allowed_handler, missing_slug_handler, redirect_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public redirect routes.
///
/// # Endpoints
///
/// - `GET /redirect/{slug}` - Resolve a slug and redirect
/// - `GET /redirect`        - Missing slug, default redirect
///
/// Any other method on these paths gets `405 Method Not Allowed`.
pub fn redirect_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/redirect/{slug}",
            get(redirect_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/redirect",
            get(missing_slug_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/redirect/",
            get(missing_slug_handler).fallback(method_not_allowed_handler),
        )
}
