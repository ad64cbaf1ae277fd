//! Model Context Protocol (MCP) server implementation
//!
//! Exposes the documentation and content handlers to MCP clients over
//! Streamable HTTP or stdio.
//!
//! # Architecture
//!
//! - **server**: `McpServer`, the `ServerHandler` that routes tool calls and
//!   resource reads
//! - **tools**: tool handlers (`greeting-tool`, `search-docs`)
//! - **resources**: resource handlers (`docs://list`, `docs://{filepath}`,
//!   `content://{id}`)
//! - **service**: Streamable HTTP service for nesting into an axum router
//!
//! The server is generic over `D: Database`, so the content backend is
//! chosen by the caller.

mod errors;
pub mod resources;
pub mod server;
mod service;
pub mod tools;


pub use server::McpServer;
pub use service::create_mcp_service;
