//! MCP tool implementations
//!
//! Each tool struct owns one concern and is registered on `McpServer`.

mod docs;
mod greeting;


pub use docs::{DocTools, SearchDocsParams};
pub use greeting::{GreetingParams, GreetingTools};
