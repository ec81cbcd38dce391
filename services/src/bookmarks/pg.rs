//! PostgreSQL implementation of [`BookmarkStore`].

use super::{Bookmark, BookmarkInsert, BookmarkStore, BookmarkUpdate, StoreError};
use sqlx::PgPool;
use uuid::Uuid;

const COLUMNS: &str = "id, url, title, summary, favicon, tags, user_id, created_at, updated_at";

#[derive(Clone)]
pub struct PgBookmarkStore {
    pool: PgPool,
}

impl PgBookmarkStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Escape `LIKE` metacharacters so the query is matched literally.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

impl BookmarkStore for PgBookmarkStore {
    async fn is_connected(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM bookmarks WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Bookmark>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, owner_id, "Error fetching bookmarks");
                StoreError::Fetch(e.to_string())
            })
    }

    async fn create(&self, input: BookmarkInsert) -> Result<Bookmark, StoreError> {
        let sql = format!(
            r#"
            INSERT INTO bookmarks (url, title, summary, favicon, tags, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        );
        sqlx::query_as::<_, Bookmark>(&sql)
            .bind(&input.url)
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.favicon)
            .bind(&input.tags)
            .bind(&input.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = %input.user_id, "Error creating bookmark");
                StoreError::Create(e.to_string())
            })
    }

    async fn update(
        &self,
        id: Uuid,
        owner_id: &str,
        changes: BookmarkUpdate,
    ) -> Result<Option<Bookmark>, StoreError> {
        let sql = format!(
            r#"
            UPDATE bookmarks
            SET url = COALESCE($3, url),
                title = COALESCE($4, title),
                summary = COALESCE($5, summary),
                favicon = CASE WHEN $6 THEN $7 ELSE favicon END,
                tags = COALESCE($8, tags),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING {COLUMNS}
            "#
        );
        let set_favicon = changes.favicon.is_some();
        sqlx::query_as::<_, Bookmark>(&sql)
            .bind(id)
            .bind(owner_id)
            .bind(changes.url)
            .bind(changes.title)
            .bind(changes.summary)
            .bind(set_favicon)
            .bind(changes.favicon.flatten())
            .bind(changes.tags)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, %id, owner_id, "Error updating bookmark");
                StoreError::Update(e.to_string())
            })
    }

    async fn delete(&self, id: Uuid, owner_id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, %id, owner_id, "Error deleting bookmark");
                StoreError::Delete(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, owner_id: &str, query: &str) -> Result<Vec<Bookmark>, StoreError> {
        let sql = format!(
            r#"
            SELECT {COLUMNS} FROM bookmarks
            WHERE user_id = $1
              AND (title ILIKE $2 OR summary ILIKE $2 OR url ILIKE $2)
            ORDER BY created_at DESC
            "#
        );
        sqlx::query_as::<_, Bookmark>(&sql)
            .bind(owner_id)
            .bind(like_pattern(query))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, owner_id, "Error searching bookmarks");
                StoreError::Search(e.to_string())
            })
    }

    async fn by_tags(&self, owner_id: &str, tags: &[String]) -> Result<Vec<Bookmark>, StoreError> {
        let sql = format!(
            r#"
            SELECT {COLUMNS} FROM bookmarks
            WHERE user_id = $1 AND tags @> $2
            ORDER BY created_at DESC
            "#
        );
        sqlx::query_as::<_, Bookmark>(&sql)
            .bind(owner_id)
            .bind(tags)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, owner_id, "Error fetching bookmarks by tags");
                StoreError::ByTags(e.to_string())
            })
    }
}
