//! Handlers for the slug redirect endpoint.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{Method, Uri},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::resolution::FallbackReason;
use crate::error::AppError;
use crate::state::AppState;

/// Methods answered by the redirect routes.
pub const ALLOWED_METHODS: &str = "GET, HEAD";

const REDIRECT_PREFIX: &str = "/redirect/";

/// Resolves a slug and redirects to its destination.
///
/// # Endpoint
///
/// `GET /redirect/{slug}`
///
/// # Request Flow
///
/// 1. Validate and sanitize the slug
/// 2. Look up the active record with that slug
/// 3. Increment its click counter (best-effort)
/// 4. Pick primary, fallback or default destination
/// 5. Respond according to the configured response mode
///
/// # Responses
///
/// - **301** to the destination with `X-<prefix>-Affiliate` and
///   `X-<prefix>-Clicks` headers and caching disabled
/// - **200** HTML confirmation page instead, in confirmation mode
/// - **301** to the default URL with a positive `max-age` whenever the
///   slug cannot be resolved, including undecodable path segments
pub async fn redirect_handler(
    slug: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Response {
    let Ok(Path(slug)) = slug else {
        return missing_slug_handler(State(state)).await;
    };

    let resolution = state.resolver.resolve(&slug).await;
    state.responder.render(resolution)
}

/// Handles the redirect route without a usable slug.
///
/// # Endpoint
///
/// `GET /redirect`
pub async fn missing_slug_handler(State(state): State<AppState>) -> Response {
    debug!("Redirect requested without a usable slug");
    metrics::counter!("redirect_resolutions_total", "outcome" => FallbackReason::InputInvalid.as_str())
        .increment(1);
    state.responder.fallback(FallbackReason::InputInvalid)
}

/// Rejects every method other than `GET`/`HEAD` on the redirect routes.
///
/// Never touches the store.
pub async fn method_not_allowed_handler(method: Method) -> impl IntoResponse {
    info!(%method, "Rejected method on redirect route");
    AppError::method_not_allowed(ALLOWED_METHODS)
}

/// Answers requests no route matched.
///
/// Paths below `/redirect/` with more than one segment (`/redirect/a/b`,
/// an unnormalized `/redirect/../etc`) never reach [`redirect_handler`] but
/// still belong to the redirect surface: `GET`/`HEAD` get the invalid-input
/// default redirect and other methods `405`. Everything else is `404`.
pub async fn fallback_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    if uri.path().starts_with(REDIRECT_PREFIX) {
        if method == Method::GET || method == Method::HEAD {
            return missing_slug_handler(State(state)).await;
        }
        return method_not_allowed_handler(method).await.into_response();
    }

    debug!(%method, %uri, "No route");
    AppError::not_found(json!({ "path": uri.path() })).into_response()
}
