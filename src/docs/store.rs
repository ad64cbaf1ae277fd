//! Logical document name resolution.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use super::error::{DocsError, DocsResult};

/// Reserved name that maps to the readme outside the docs root.
pub const README_NAME: &str = "readme";

pub const DOCS_URI_SCHEME: &str = "docs://";

pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";

/// A document read from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

/// Reads documents by logical name.
#[derive(Debug, Clone)]
pub struct DocStore {
    root: PathBuf,
    readme: PathBuf,
}

impl DocStore {
    pub fn new(root: impl Into<PathBuf>, readme: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            readme: readme.into(),
        }
    }

    /// Read a document by name.
    ///
    /// `readme` resolves to the configured readme file. Any other name is
    /// looked up under the root verbatim, then with `.md` appended. A name
    /// containing `..` anywhere is rejected before touching the filesystem.
    #[instrument(skip(self))]
    pub async fn read(&self, name: &str) -> DocsResult<Document> {
        let path = if name == README_NAME {
            self.readme.clone()
        } else {
            self.resolve(name).await?
        };

        debug!(path = %path.display(), "Reading document");
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| DocsError::filesystem(&path, e))?;

        Ok(Document {
            uri: format!("{DOCS_URI_SCHEME}{name}"),
            mime_type: MARKDOWN_MIME_TYPE.to_string(),
            text: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    async fn resolve(&self, name: &str) -> DocsResult<PathBuf> {
        if name.contains("..") {
            return Err(DocsError::InvalidInput {
                name: name.to_string(),
                reason: "cannot contain \"..\"".to_string(),
            });
        }

        // Leading separators are relative to the root, never absolute.
        let relative = Path::new(name.trim_start_matches(['/', '\\']));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(DocsError::InvalidInput {
                name: name.to_string(),
                reason: "must be a path inside the docs directory".to_string(),
            });
        }

        let exact = self.root.join(relative);
        if exists(&exact).await {
            return Ok(exact);
        }

        let mut with_ext = exact.into_os_string();
        with_ext.push(".md");
        let with_ext = PathBuf::from(with_ext);
        if exists(&with_ext).await {
            return Ok(with_ext);
        }

        Err(DocsError::NotFound {
            name: name.to_string(),
        })
    }
}

async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}
