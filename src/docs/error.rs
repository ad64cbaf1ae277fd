//! Documentation access errors.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while listing, reading, or searching documents.
#[derive(Error, Diagnostic, Debug)]
pub enum DocsError {
    #[error("Invalid document name '{name}': {reason}")]
    #[diagnostic(
        code(mcp_docs::docs::invalid_input),
        help("Use a path relative to the docs directory, as returned by docs://list")
    )]
    InvalidInput { name: String, reason: String },

    #[error("Documentation file '{name}' not found")]
    #[diagnostic(code(mcp_docs::docs::not_found))]
    NotFound { name: String },

    #[error("Filesystem error at {}: {source}", path.display())]
    #[diagnostic(code(mcp_docs::docs::filesystem))]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocsError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocsError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type for documentation operations.
pub type DocsResult<T> = Result<T, DocsError>;
