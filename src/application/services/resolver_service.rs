//! Slug resolution service.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::destination::select_destination;
use crate::domain::repositories::LinkRepository;
use crate::domain::resolution::{FallbackReason, Resolution};
use crate::domain::slug::Slug;

/// Resolves raw slugs to destinations and records usage.
///
/// [`RedirectResolver::resolve`] never fails: every problem ends in a
/// [`Resolution::Fallback`] whose reason drives logging and caching.
pub struct RedirectResolver {
    links: Arc<dyn LinkRepository>,
    default_url: String,
}

impl RedirectResolver {
    /// Creates a new resolver.
    ///
    /// `default_url` must already be a valid `http(s)` URL; configuration
    /// validation enforces that at startup.
    pub fn new(links: Arc<dyn LinkRepository>, default_url: impl Into<String>) -> Self {
        Self {
            links,
            default_url: default_url.into(),
        }
    }

    /// Resolves a raw slug.
    ///
    /// # Flow
    ///
    /// 1. Trim, lowercase and reject any character outside `[a-z0-9-_]`
    /// 2. Look up the single active record with that slug
    /// 3. Atomically increment its click counter (best-effort)
    /// 4. Pick primary, fallback or default destination
    ///
    /// A failed counter update is logged and never changes the outcome;
    /// the reported count is then the observed count plus one.
    pub async fn resolve(&self, raw_slug: &str) -> Resolution {
        let resolution = self.resolve_inner(raw_slug).await;
        metrics::counter!("redirect_resolutions_total", "outcome" => resolution.outcome())
            .increment(1);
        resolution
    }

    async fn resolve_inner(&self, raw_slug: &str) -> Resolution {
        let slug = match Slug::parse(raw_slug) {
            Ok(slug) => slug,
            Err(e) => {
                info!(raw_slug, reason = %e, "Rejected slug");
                return Resolution::fallback(FallbackReason::InputInvalid);
            }
        };

        let record = match self.links.find_active_by_slug(&slug).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(%slug, "No active link for slug");
                return Resolution::fallback(FallbackReason::NotFound);
            }
            Err(e) => {
                error!(%slug, error = %e, "Link lookup failed");
                return Resolution::fallback(FallbackReason::StoreError);
            }
        };

        let clicks = match self.links.increment_clicks(record.id).await {
            Ok(clicks) => clicks,
            Err(e) => {
                warn!(
                    %slug,
                    record_id = record.id,
                    error = %e,
                    "Click counter update failed"
                );
                record.clicks.saturating_add(1)
            }
        };

        let destination = select_destination(
            record.redirect_url.as_deref(),
            record.fallback_url.as_deref(),
            &self.default_url,
        );

        info!(
            %slug,
            record_id = record.id,
            clicks,
            source = destination.source.as_str(),
            destination = %destination.url,
            "Resolved slug"
        );

        Resolution::Tracked {
            record_id: record.id,
            clicks,
            destination,
        }
    }
}
