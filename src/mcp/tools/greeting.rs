//! Greeting tool.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "World".to_string()
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GreetingParams {
    #[schemars(description = "Name to greet (default: World)")]
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for GreetingParams {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GreetingTools;

impl GreetingTools {
    pub fn new() -> Self {
        Self
    }

    pub fn greet(&self, params: Parameters<GreetingParams>) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Hello, {}!",
            params.0.name
        ))]))
    }
}
