//! Server runtime: configuration, tracing, and the HTTP and stdio transports.

mod handlers;
mod routes;

#[cfg(test)]
mod routes_test;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use miette::Diagnostic;
use rmcp::ServiceExt;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;
use crate::docs::{DocLister, DocSearch, DocStore};
use crate::mcp::McpServer;

pub use routes::create_router;

/// Server errors
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind to {addr}: {source}")]
    #[diagnostic(code(mcp_docs::api::bind), help("Is another process using this port?"))]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(mcp_docs::api::server))]
    Server(#[from] std::io::Error),

    #[error("MCP transport error: {0}")]
    #[diagnostic(code(mcp_docs::api::transport))]
    Transport(String),
}

/// Server configuration
///
/// Precedence: CLI flag (`with_*`) > environment variable > default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Verbosity level (0=warn, 1=info, 2=debug, 3+=trace)
    pub verbosity: u8,
    /// Root of the documentation tree
    pub docs_dir: PathBuf,
    /// File served for the `readme` document
    pub readme_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            verbosity: 0,
            docs_dir: PathBuf::from("docs"),
            readme_path: PathBuf::from("README.md"),
        }
    }
}

impl Config {
    /// Read `MCP_HOST`, `MCP_PORT`, `DOCS_DIR` and `README_PATH` over the
    /// defaults. Values that fail to parse are ignored.
    pub fn new() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("MCP_HOST")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.host),
            port: env::var("MCP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            verbosity: defaults.verbosity,
            docs_dir: env::var("DOCS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.docs_dir),
            readme_path: env::var("README_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.readme_path),
        }
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_docs_dir(mut self, docs_dir: PathBuf) -> Self {
        self.docs_dir = docs_dir;
        self
    }

    pub fn with_readme_path(mut self, readme_path: PathBuf) -> Self {
        self.readme_path = readme_path;
        self
    }

    /// Build the documentation components for this configuration.
    pub fn doc_components(&self) -> (DocLister, DocStore, DocSearch) {
        let lister = DocLister::new(&self.docs_dir);
        let store = DocStore::new(&self.docs_dir, &self.readme_path);
        let search = DocSearch::new(lister.clone());
        (lister, store, search)
    }
}

/// Default log filter for a `-v` count; `RUST_LOG` still wins.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "mcp_docs=warn,tower_http=warn",
        1 => "mcp_docs=info,tower_http=info",
        2 => "mcp_docs=debug,tower_http=debug,rmcp=info",
        _ => "mcp_docs=trace,tower_http=trace,rmcp=debug",
    }
}

/// Initialize tracing subscriber with env filter
///
/// Logs go to stderr so the stdio transport keeps stdout for protocol
/// frames.
pub fn init_tracing(verbosity: u8) {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbosity).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Run the HTTP server (`/health` and MCP at `/mcp`) until Ctrl-C.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    init_tracing(config.verbosity);

    let ct = CancellationToken::new();
    let app = create_router(Arc::new(db), &config, ct.clone()).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
            ct.cancel();
        })
        .await?;
    Ok(())
}

/// Serve a single MCP session over stdin/stdout.
pub async fn run_stdio<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    init_tracing(config.verbosity);

    let (lister, store, search) = config.doc_components();
    let server = McpServer::new(Arc::new(db), lister, store, search);

    info!("MCP server running on stdio");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    service
        .waiting()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok(())
}
