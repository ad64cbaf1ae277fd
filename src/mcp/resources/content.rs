//! Content resource: `content://{id}`.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use serde_json::json;
use tracing::instrument;

use super::ResourceText;
use crate::db::{ContentRepository, Database, DbError};
use crate::mcp::errors::{db_error, serialization_error};

pub const CONTENT_URI_SCHEME: &str = "content://";

pub const JSON_MIME_TYPE: &str = "application/json";

/// Looks up one content record per read. No caching.
pub struct ContentResources<D: Database> {
    db: Arc<D>,
}

impl<D: Database> Clone for ContentResources<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> ContentResources<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn read(&self, id: &str) -> Result<ResourceText, McpError> {
        let parsed: i64 = id.trim().parse().map_err(|_| {
            McpError::invalid_params(
                format!("Invalid content ID '{id}': expected an integer"),
                Some(json!({"kind": "invalid_input"})),
            )
        })?;

        let content = self
            .db
            .contents()
            .find_by_id(parsed)
            .await
            .map_err(db_error)?
            .ok_or_else(|| {
                db_error(DbError::NotFound {
                    entity_type: "Content".to_string(),
                    id: id.to_string(),
                })
            })?;

        Ok(ResourceText {
            uri: format!("{CONTENT_URI_SCHEME}{id}"),
            mime_type: JSON_MIME_TYPE.to_string(),
            text: serde_json::to_string_pretty(&content).map_err(serialization_error)?,
        })
    }
}
