//! Link record entity representing a slug-to-destination mapping.

use chrono::{DateTime, Utc};

/// A stored redirect mapping.
///
/// Records are owned by an external management surface. The redirect
/// service only reads them and bumps `clicks`; it never creates, edits or
/// deactivates a record.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct LinkRecord {
    pub id: i64,
    /// Normalized lowercase slug, unique among active records.
    pub slug: String,
    /// Primary destination. May be missing or malformed.
    pub redirect_url: Option<String>,
    /// Secondary destination used when `redirect_url` is unusable.
    pub fallback_url: Option<String>,
    pub clicks: i64,
    /// Inactive records are invisible to lookups.
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Creates a new active record with zero clicks.
    pub fn new(
        id: i64,
        slug: impl Into<String>,
        redirect_url: Option<String>,
        fallback_url: Option<String>,
    ) -> Self {
        Self {
            id,
            slug: slug.into(),
            redirect_url,
            fallback_url,
            clicks: 0,
            active: true,
            created_at: Utc::now(),
        }
    }

    /// Sets the observed click counter.
    pub fn with_clicks(mut self, clicks: i64) -> Self {
        self.clicks = clicks;
        self
    }

    /// Marks the record as deactivated.
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}
