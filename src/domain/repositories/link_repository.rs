//! Repository trait for link record access.

use crate::domain::entities::LinkRecord;
use crate::domain::slug::Slug;
use async_trait::async_trait;

/// Errors raised by the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("expected one active record for slug {slug:?}, found {rows}")]
    Ambiguous { slug: String, rows: usize },

    #[error("link record {id} no longer exists")]
    RecordMissing { id: i64 },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Narrow read/update contract the redirect resolver depends on.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds the single active record whose slug equals `slug` exactly.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkRecord))` if exactly one active record matches
    /// - `Ok(None)` if none does
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Ambiguous`] if several active records match and
    /// [`StoreError::Database`] on database errors.
    async fn find_active_by_slug(&self, slug: &Slug) -> Result<Option<LinkRecord>, StoreError>;

    /// Atomically adds one to the record's click counter.
    ///
    /// Returns the stored counter after the increment.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RecordMissing`] if no record has this id.
    async fn increment_clicks(&self, id: i64) -> Result<i64, StoreError>;

    /// Checks connectivity with the backing store.
    async fn ping(&self) -> Result<(), StoreError>;
}
