//! Recursive document enumeration.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use super::error::{DocsError, DocsResult};

/// Enumerates every file below a docs root.
#[derive(Debug, Clone)]
pub struct DocLister {
    root: PathBuf,
}

impl DocLister {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List all files under the root as `/`-separated paths relative to it.
    ///
    /// Walks with an explicit worklist so deep trees never grow the call
    /// stack. Any unreadable directory fails the whole listing; partial
    /// results are never returned. Symlinks are listed when they resolve to
    /// a file and never descended into.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub async fn list(&self) -> DocsResult<Vec<String>> {
        let mut pending = vec![self.root.clone()];
        let mut files = Vec::new();

        while let Some(dir) = pending.pop() {
            let mut entries = tokio::fs::read_dir(&dir)
                .await
                .map_err(|e| DocsError::filesystem(&dir, e))?;

            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| DocsError::filesystem(&dir, e))?
            {
                let path = entry.path();
                let file_type = entry
                    .file_type()
                    .await
                    .map_err(|e| DocsError::filesystem(&path, e))?;

                if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_file() {
                    files.push(self.relative(&path));
                } else if file_type.is_symlink() {
                    // Dangling links are not documents.
                    if let Ok(meta) = tokio::fs::metadata(&path).await
                        && meta.is_file()
                    {
                        files.push(self.relative(&path));
                    }
                }
            }
        }

        files.sort();
        debug!(count = files.len(), "Listed documents");
        Ok(files)
    }

    fn relative(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
