//! PostgreSQL ContentRepository implementation.

use chrono::{SubsecRound, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::db::{Content, ContentRepository, DbResult, NewContent};

/// SQLx-backed content repository.
pub struct PostgresContentRepository<'a> {
    pub(crate) pool: &'a PgPool,
}

fn row_to_content(row: &PgRow) -> Content {
    Content {
        id: row.get("id"),
        title: row.get("title"),
        body: row.get("body"),
        created_at: row.get("created_at"),
    }
}

impl<'a> ContentRepository for PostgresContentRepository<'a> {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<Content>> {
        let row = sqlx::query("SELECT id, title, body, created_at FROM content WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_content))
    }

    async fn create(&self, content: &NewContent) -> DbResult<Content> {
        // TIMESTAMPTZ keeps microseconds; truncate so the returned value
        // matches what a later read sees.
        let row = sqlx::query(
            r#"
            INSERT INTO content (title, body, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, title, body, created_at
            "#,
        )
        .bind(&content.title)
        .bind(&content.body)
        .bind(Utc::now().trunc_subsecs(6))
        .fetch_one(self.pool)
        .await?;

        Ok(row_to_content(&row))
    }

    async fn list(&self) -> DbResult<Vec<Content>> {
        let rows = sqlx::query("SELECT id, title, body, created_at FROM content ORDER BY id ASC")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.iter().map(row_to_content).collect())
    }
}
