//! Response rendering for resolution outcomes.
//!
//! One resolver feeds one [`Responder`]; the configured [`ResponseMode`]
//! decides whether a tracked hit becomes a plain `301` or an HTML page that
//! opens the destination from script. Default redirects look the same in
//! both modes.

use std::str::FromStr;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{
        HeaderMap, HeaderName, HeaderValue, StatusCode,
        header::{CACHE_CONTROL, LOCATION},
    },
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::resolution::{CacheLifetimes, CachePolicy, FallbackReason, Resolution};
use crate::utils::url_validator::validate_destination_url;

/// How a tracked resolution is presented to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// `301 Moved Permanently` straight to the destination.
    #[default]
    Redirect,
    /// `200 OK` HTML page that opens the destination and confirms it.
    ConfirmationPage,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown response mode {0:?}, expected 'redirect' or 'confirmation'")]
pub struct UnknownResponseMode(String);

impl FromStr for ResponseMode {
    type Err = UnknownResponseMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redirect" => Ok(Self::Redirect),
            "confirmation" | "confirmation_page" | "confirmation-page" => {
                Ok(Self::ConfirmationPage)
            }
            other => Err(UnknownResponseMode(other.to_string())),
        }
    }
}

/// Errors building a [`Responder`] from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
    #[error("header prefix {0:?} does not form a valid header name")]
    InvalidHeaderPrefix(String),

    #[error("default redirect URL {0:?} cannot be used as a Location header")]
    InvalidDefaultUrl(String),
}

/// Template for the confirmation page.
///
/// Renders `templates/confirmation.html`.
#[derive(Template, WebTemplate)]
#[template(path = "confirmation.html")]
struct ConfirmationTemplate {
    destination: String,
    /// Destination as a JavaScript string literal, safe inside `<script>`.
    destination_js: String,
    delay_ms: u64,
}

/// Delay before the page opens the destination.
const CONFIRMATION_DELAY_MS: u64 = 300;

/// Turns [`Resolution`]s into HTTP responses.
#[derive(Debug, Clone)]
pub struct Responder {
    mode: ResponseMode,
    default_location: HeaderValue,
    lifetimes: CacheLifetimes,
    affiliate_header: HeaderName,
    clicks_header: HeaderName,
}

impl Responder {
    /// Creates a responder.
    ///
    /// `header_prefix` names the diagnostic headers:
    /// `X-<prefix>-Affiliate` and `X-<prefix>-Clicks`.
    ///
    /// # Errors
    ///
    /// Returns [`ResponderError`] if the prefix or the default URL cannot be
    /// carried in a header.
    pub fn new(
        mode: ResponseMode,
        default_url: &str,
        header_prefix: &str,
        lifetimes: CacheLifetimes,
    ) -> Result<Self, ResponderError> {
        let header = |suffix: &str| {
            HeaderName::try_from(format!("x-{}-{}", header_prefix.to_ascii_lowercase(), suffix))
                .map_err(|_| ResponderError::InvalidHeaderPrefix(header_prefix.to_string()))
        };

        let default_location = location_value(default_url)
            .ok_or_else(|| ResponderError::InvalidDefaultUrl(default_url.to_string()))?;

        Ok(Self {
            mode,
            default_location,
            lifetimes,
            affiliate_header: header("affiliate")?,
            clicks_header: header("clicks")?,
        })
    }

    /// Renders a resolution according to the configured mode.
    pub fn render(&self, resolution: Resolution) -> Response {
        match resolution {
            Resolution::Tracked {
                record_id,
                clicks,
                destination,
            } => self.tracked(record_id, clicks, &destination.url),
            Resolution::Fallback { reason } => self.fallback(reason),
        }
    }

    /// Default redirect with the cache lifetime of `reason`.
    pub fn fallback(&self, reason: FallbackReason) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, self.default_location.clone());
        insert_cache_control(&mut headers, self.lifetimes.for_reason(reason));

        (StatusCode::MOVED_PERMANENTLY, headers).into_response()
    }

    fn tracked(&self, record_id: i64, clicks: i64, destination: &str) -> Response {
        let Some(location) = location_value(destination) else {
            error!(record_id, destination, "Destination cannot be sent as a header");
            return self.fallback(FallbackReason::Unexpected);
        };

        let mut headers = HeaderMap::new();
        insert_cache_control(&mut headers, CachePolicy::NoStore);
        headers.insert(self.affiliate_header.clone(), HeaderValue::from(record_id));
        headers.insert(self.clicks_header.clone(), HeaderValue::from(clicks));

        match self.mode {
            ResponseMode::Redirect => {
                headers.insert(LOCATION, location);
                (StatusCode::MOVED_PERMANENTLY, headers).into_response()
            }
            ResponseMode::ConfirmationPage => match confirmation_page(destination) {
                Some(page) => (StatusCode::OK, headers, page).into_response(),
                None => {
                    error!(record_id, "Failed to encode destination for confirmation page");
                    self.fallback(FallbackReason::Unexpected)
                }
            },
        }
    }
}

fn insert_cache_control(headers: &mut HeaderMap, policy: CachePolicy) {
    if let Ok(value) = HeaderValue::try_from(policy.header_value()) {
        headers.insert(CACHE_CONTROL, value);
    }
}

/// Builds a `Location` value. Non-ASCII URLs are sent in their
/// percent-encoded / punycode serialization.
fn location_value(url: &str) -> Option<HeaderValue> {
    if url.is_ascii() {
        return HeaderValue::from_str(url).ok();
    }

    validate_destination_url(url)
        .ok()
        .and_then(|parsed| HeaderValue::from_str(parsed.as_str()).ok())
}

fn confirmation_page(destination: &str) -> Option<ConfirmationTemplate> {
    let destination_js = serde_json::to_string(destination)
        .ok()?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e");

    Some(ConfirmationTemplate {
        destination: destination.to_string(),
        destination_js,
        delay_ms: CONFIRMATION_DELAY_MS,
    })
}
