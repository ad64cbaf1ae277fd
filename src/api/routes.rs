//! HTTP route configuration.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio_util::sync::CancellationToken;

use super::Config;
use super::handlers;
use crate::db::Database;
use crate::mcp::create_mcp_service;

/// Create the router: health check plus the MCP endpoint at `/mcp`.
pub fn create_router<D: Database + 'static>(
    db: Arc<D>,
    config: &Config,
    ct: CancellationToken,
) -> Router {
    let (lister, store, search) = config.doc_components();
    let mcp_service = create_mcp_service::<D>(db, lister, store, search, ct);

    Router::new()
        .route("/health", get(handlers::health))
        .nest_service("/mcp", mcp_service)
}
