//! Conversion of domain errors into MCP error responses.

use rmcp::ErrorData as McpError;
use serde_json::json;

use crate::db::DbError;
use crate::docs::DocsError;

pub(crate) fn docs_error(e: DocsError) -> McpError {
    let message = e.to_string();
    match e {
        DocsError::InvalidInput { .. } => {
            McpError::invalid_params(message, Some(json!({"kind": "invalid_input"})))
        }
        DocsError::NotFound { .. } => {
            McpError::resource_not_found(message, Some(json!({"kind": "not_found"})))
        }
        DocsError::Filesystem { .. } => {
            McpError::internal_error(message, Some(json!({"kind": "filesystem_error"})))
        }
    }
}

pub(crate) fn db_error(e: DbError) -> McpError {
    let message = e.to_string();
    match e {
        DbError::NotFound { .. } => {
            McpError::resource_not_found(message, Some(json!({"kind": "not_found"})))
        }
        DbError::Validation { .. } => {
            McpError::invalid_params(message, Some(json!({"kind": "invalid_input"})))
        }
        _ => McpError::internal_error(message, Some(json!({"kind": "store_error"}))),
    }
}

pub(crate) fn serialization_error(e: serde_json::Error) -> McpError {
    McpError::internal_error(
        "serialization_error",
        Some(json!({"error": e.to_string()})),
    )
}
