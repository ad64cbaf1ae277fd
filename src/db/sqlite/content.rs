//! SQLite ContentRepository implementation.

use chrono::{SubsecRound, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::db::{Content, ContentRepository, DbResult, NewContent};

/// SQLx-backed content repository.
pub struct SqliteContentRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn row_to_content(row: &SqliteRow) -> Content {
    Content {
        id: row.get("id"),
        title: row.get("title"),
        body: row.get("body"),
        created_at: row.get("created_at"),
    }
}

impl<'a> ContentRepository for SqliteContentRepository<'a> {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<Content>> {
        let row = sqlx::query("SELECT id, title, body, created_at FROM content WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_content))
    }

    async fn create(&self, content: &NewContent) -> DbResult<Content> {
        let row = sqlx::query(
            r#"
            INSERT INTO content (title, body, created_at)
            VALUES (?, ?, ?)
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
