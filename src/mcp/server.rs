//! MCP server implementation
//!
//! `McpServer` registers the tools with rmcp's router and dispatches
//! resource reads by URI.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Implementation, ListResourceTemplatesResult, ListResourcesResult,
        PaginatedRequestParams, ProgressNotificationParam, ReadResourceRequestParams,
        ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::json;
use tracing::{debug, warn};

use super::resources::{self, ContentResources, DocResources, ResourceUri};
use super::tools::{DocTools, GreetingParams, GreetingTools, SearchDocsParams};
use crate::db::Database;
use crate::docs::{DocLister, DocSearch, DocStore};

/// Main MCP server coordinator
///
/// Generic over `D: Database` for zero-cost abstraction (no dynamic dispatch).
/// Every collaborator is passed in by the caller; nothing is looked up from a
/// global registry.
pub struct McpServer<D: Database> {
    greeting_tools: GreetingTools,
    doc_tools: DocTools,
    doc_resources: DocResources,
    content_resources: ContentResources<D>,
    pub(crate) tool_router: ToolRouter<Self>,
}

impl<D: Database> Clone for McpServer<D> {
    fn clone(&self) -> Self {
        Self {
            greeting_tools: self.greeting_tools.clone(),
            doc_tools: self.doc_tools.clone(),
            doc_resources: self.doc_resources.clone(),
            content_resources: self.content_resources.clone(),
            tool_router: self.tool_router.clone(),
        }
    }
}

#[tool_router]
impl<D: Database + 'static> McpServer<D> {
    /// Create a new MCP server
    ///
    /// # Arguments
    /// * `db` - Content store
    /// * `lister` - Enumerates the docs tree for `docs://list`
    /// * `store` - Resolves `docs://{filepath}` reads
    /// * `search` - Backs the `search-docs` tool
    pub fn new(db: Arc<D>, lister: DocLister, store: DocStore, search: DocSearch) -> Self {
        Self {
            greeting_tools: GreetingTools::new(),
            doc_tools: DocTools::new(search),
            doc_resources: DocResources::new(lister, store),
            content_resources: ContentResources::new(db),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "greeting-tool",
        description = "Returns a greeting with progress updates"
    )]
    pub async fn greeting_tool(
        &self,
        params: Parameters<GreetingParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(progress_token) = context.meta.get_progress_token() {
            let progress = ProgressNotificationParam::new(progress_token, 50.0).with_total(100.0);
            if let Err(e) = context.peer.notify_progress(progress).await {
                warn!(error = %e, "Failed to send progress notification");
            }
        }

        self.greeting_tools.greet(params)
    }

    #[tool(
        name = "search-docs",
        description = "Search for documentation files by filename or content"
    )]
    pub async fn search_docs(
        &self,
        params: Parameters<SearchDocsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.doc_tools.search_docs(params).await
    }

    /// Read any resource this server exposes.
    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        debug!(uri, "Reading resource");
        let resource = match ResourceUri::parse(uri) {
            Some(ResourceUri::DocsList) => self.doc_resources.list().await?,
            Some(ResourceUri::Doc(filepath)) => self.doc_resources.read(filepath).await?,
            Some(ResourceUri::Content(id)) => self.content_resources.read(id).await?,
            None => {
                return Err(McpError::resource_not_found(
                    format!("Unknown resource URI '{uri}'"),
                    Some(json!({"kind": "not_found"})),
                ));
            }
        };
        Ok(resource.into())
    }
}

#[tool_handler]
impl<D: Database + 'static> ServerHandler for McpServer<D> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(
            ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
        )
        .with_server_info(Implementation::new(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        ))
        .with_instructions(
            "Documentation server - list and read docs via docs:// resources, search them with search-docs, and fetch stored content via content://{id}",
        )
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(resources::resources()))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(
            resources::resource_templates(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read(&request.uri).await
    }
}
