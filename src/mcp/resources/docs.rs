//! Documentation resources: `docs://list` and `docs://{filepath}`.

use rmcp::ErrorData as McpError;

use super::ResourceText;
use super::content::JSON_MIME_TYPE;
use crate::docs::{DocLister, DocStore, README_NAME};
use crate::mcp::errors::{docs_error, serialization_error};

pub const DOCS_LIST_URI: &str = "docs://list";

#[derive(Debug, Clone)]
pub struct DocResources {
    lister: DocLister,
    store: DocStore,
}

impl DocResources {
    pub fn new(lister: DocLister, store: DocStore) -> Self {
        Self { lister, store }
    }

    /// JSON array of readable document names, `readme` always first.
    pub async fn list(&self) -> Result<ResourceText, McpError> {
        let files = self.lister.list().await.map_err(docs_error)?;

        let mut names = Vec::with_capacity(files.len() + 1);
        names.push(README_NAME.to_string());
        names.extend(files);

        Ok(ResourceText {
            uri: DOCS_LIST_URI.to_string(),
            mime_type: JSON_MIME_TYPE.to_string(),
            text: serde_json::to_string_pretty(&names).map_err(serialization_error)?,
        })
    }

    pub async fn read(&self, filepath: &str) -> Result<ResourceText, McpError> {
        let doc = self.store.read(filepath).await.map_err(docs_error)?;
        Ok(ResourceText {
            uri: doc.uri,
            mime_type: doc.mime_type,
            text: doc.text,
        })
    }
}
