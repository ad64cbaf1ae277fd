//! Documentation search tool.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};

use crate::docs::DocSearch;
use crate::mcp::errors::{docs_error, serialization_error};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchDocsParams {
    #[schemars(
        description = "Search query. Matched case-insensitively against file paths, then file content"
    )]
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct DocTools {
    search: DocSearch,
}

impl DocTools {
    pub fn new(search: DocSearch) -> Self {
        Self { search }
    }

    /// Returns a JSON array of `{ path, matchType }`.
    pub async fn search_docs(
        &self,
        params: Parameters<SearchDocsParams>,
    ) -> Result<CallToolResult, McpError> {
        let hits = self
            .search
            .search(&params.0.query)
            .await
            .map_err(docs_error)?;

        let text = serde_json::to_string_pretty(&hits).map_err(serialization_error)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
