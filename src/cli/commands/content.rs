//! Content commands - add, get and list stored content records

use tabled::{Table, Tabled};

use super::with_database;
use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, single_line, truncate_with_ellipsis};
use crate::db::{Content, ContentRepository, Database, DbConfig, DbError, NewContent};

#[derive(Tabled)]
pub(crate) struct ContentDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: i64,
    #[tabled(rename = "Title")]
    pub(crate) title: String,
    #[tabled(rename = "Body")]
    pub(crate) body: String,
    #[tabled(rename = "Created")]
    pub(crate) created_at: String,
}

impl From<&Content> for ContentDisplay {
    fn from(content: &Content) -> Self {
        Self {
            id: content.id,
            title: truncate_with_ellipsis(&content.title, 40),
            body: truncate_with_ellipsis(&single_line(&content.body), 60),
            created_at: content.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

fn render(items: &[Content], format: &str) -> CliResult<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(items)?),
        "table" => {
            if items.is_empty() {
                return Ok("No content found.".to_string());
            }
            let rows: Vec<ContentDisplay> = items.iter().map(ContentDisplay::from).collect();
            let mut table = Table::new(rows);
            apply_table_style(&mut table);
            Ok(table.to_string())
        }
        other => Err(CliError::InvalidFormat {
            format: other.to_string(),
        }),
    }
}

fn render_one(item: &Content, format: &str) -> CliResult<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(item)?),
        _ => render(std::slice::from_ref(item), format),
    }
}

pub async fn add<D: Database>(db: &D, title: &str, body: &str, format: &str) -> CliResult<String> {
    if title.trim().is_empty() {
        return Err(DbError::Validation {
            message: "title cannot be empty".to_string(),
        }
        .into());
    }

    db.migrate().await?;
    let created = db.contents().create(&NewContent::new(title, body)).await?;
    render_one(&created, format)
}

pub async fn get<D: Database>(db: &D, id: i64, format: &str) -> CliResult<String> {
    let content = db
        .contents()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DbError::NotFound {
            entity_type: "Content".to_string(),
            id: id.to_string(),
        })?;
    render_one(&content, format)
}

pub async fn list<D: Database>(db: &D, format: &str) -> CliResult<String> {
    let items = db.contents().list().await?;
    render(&items, format)
}

pub async fn run_add(db_config: &DbConfig, title: &str, body: &str, format: &str) -> CliResult<String> {
    with_database!(db_config, db => add(&db, title, body, format).await)
}

pub async fn run_get(db_config: &DbConfig, id: i64, format: &str) -> CliResult<String> {
    with_database!(db_config, db => get(&db, id, format).await)
}

pub async fn run_list(db_config: &DbConfig, format: &str) -> CliResult<String> {
    with_database!(db_config, db => list(&db, format).await)
}
