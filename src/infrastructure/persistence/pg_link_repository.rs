//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::domain::slug::Slug;

/// PostgreSQL repository for link records.
///
/// Uses SQLx prepared statements with bound parameters.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_active_by_slug(&self, slug: &Slug) -> Result<Option<LinkRecord>, StoreError> {
        // LIMIT 2 is enough to tell "exactly one" from "several".
        let mut rows = sqlx::query_as::<_, LinkRecord>(
            r#"
            SELECT id, slug, redirect_url, fallback_url, clicks, active, created_at
            FROM links
            WHERE slug = $1 AND active = TRUE
            LIMIT 2
            "#,
        )
        .bind(slug.as_str())
        .fetch_all(self.pool.as_ref())
        .await?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => Err(StoreError::Ambiguous {
                slug: slug.to_string(),
                rows: n,
            }),
        }
    }

    async fn increment_clicks(&self, id: i64) -> Result<i64, StoreError> {
        let clicks = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE links
            SET clicks = clicks + 1
            WHERE id = $1
            RETURNING clicks
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        clicks.ok_or(StoreError::RecordMissing { id })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
