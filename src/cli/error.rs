use miette::Diagnostic;
use thiserror::Error;

use crate::api::ApiError;
use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DbError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Server(#[from] ApiError),

    #[error("Invalid output format '{format}'")]
    #[diagnostic(
        code(mcp_docs::cli::invalid_format),
        help("Use --format table or --format json")
    )]
    InvalidFormat { format: String },

    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(mcp_docs::cli::serialization))]
    Serialization { message: String },
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
