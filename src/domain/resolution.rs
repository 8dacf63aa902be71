//! Outcome of resolving a slug.

use crate::domain::destination::Destination;

/// Why a request ended on the default redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackReason {
    /// Empty slug or disallowed characters.
    InputInvalid,
    /// No active record matches the slug.
    NotFound,
    /// The lookup failed at the persistence layer.
    StoreError,
    /// Anything else, including panics caught by the request guard.
    Unexpected,
}

impl FallbackReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InputInvalid => "input_invalid",
            Self::NotFound => "not_found",
            Self::StoreError => "store_error",
            Self::Unexpected => "unexpected",
        }
    }
}

/// Result of [`crate::application::services::RedirectResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A record matched and a usage event was recorded.
    Tracked {
        record_id: i64,
        /// Click count after this resolution.
        clicks: i64,
        destination: Destination,
    },
    /// The caller is sent to the configured default URL.
    Fallback { reason: FallbackReason },
}

impl Resolution {
    pub fn fallback(reason: FallbackReason) -> Self {
        Self::Fallback { reason }
    }

    /// Short label used in logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Tracked { .. } => "tracked",
            Self::Fallback { reason } => reason.as_str(),
        }
    }
}

/// Caching directive attached to a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    NoStore,
    MaxAge(u64),
}

impl CachePolicy {
    /// Renders the `Cache-Control` header value.
    pub fn header_value(self) -> String {
        match self {
            Self::NoStore => "no-cache, no-store, must-revalidate".to_string(),
            Self::MaxAge(secs) => format!("public, max-age={secs}"),
        }
    }
}

/// Cache lifetimes (seconds) for each default-redirect path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLifetimes {
    pub input_invalid: u64,
    pub not_found: u64,
    pub store_error: u64,
    pub unexpected: u64,
}

impl Default for CacheLifetimes {
    fn default() -> Self {
        Self {
            input_invalid: 300,
            not_found: 600,
            store_error: 60,
            unexpected: 60,
        }
    }
}

impl CacheLifetimes {
    pub fn for_reason(&self, reason: FallbackReason) -> CachePolicy {
        let secs = match reason {
            FallbackReason::InputInvalid => self.input_invalid,
            FallbackReason::NotFound => self.not_found,
            FallbackReason::StoreError => self.store_error,
            FallbackReason::Unexpected => self.unexpected,
        };
        CachePolicy::MaxAge(secs)
    }
}
