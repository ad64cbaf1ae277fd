//! MCP server exposing a documentation tree and stored content records.
//!
//! `docs` and `db` hold the domain logic, `mcp` adapts it to the protocol,
//! `api` runs the transports and `cli` is the composition root.

pub mod api;
pub mod cli;
pub mod db;
pub mod docs;
pub mod mcp;
