//! MCP Streamable HTTP service creation
//!
//! This module provides functions to create the MCP service
//! that can be integrated with an Axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::db::Database;
use crate::docs::{DocLister, DocSearch, DocStore};

use super::server::McpServer;

/// Create MCP Streamable HTTP service
///
/// # Arguments
/// * `db` - Database instance implementing the Database trait
/// * `lister`, `store`, `search` - Documentation components shared by every session
/// * `cancellation_token` - Token for graceful shutdown
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use mcp_docs::db::{Database, SqliteDatabase};
/// # use mcp_docs::docs::{DocLister, DocSearch, DocStore};
/// # use mcp_docs::mcp::create_mcp_service;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let db = SqliteDatabase::in_memory().await?;
/// let lister = DocLister::new("docs");
/// let store = DocStore::new("docs", "README.md");
/// let search = DocSearch::new(lister.clone());
///
/// let ct = CancellationToken::new();
/// let mcp_service = create_mcp_service(db, lister, store, search, ct);
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service<D: Database + 'static>(
    db: impl Into<Arc<D>>,
    lister: DocLister,
    store: DocStore,
    search: DocSearch,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<D>, LocalSessionManager> {
    let db = db.into();

    // Service factory: creates new McpServer instance per session
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<McpServer<D>, std::io::Error> {
        Ok(McpServer::new(
            Arc::clone(&db),
            lister.clone(),
            store.clone(),
            search.clone(),
        ))
    };

    let config = StreamableHttpServerConfig::default()
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
