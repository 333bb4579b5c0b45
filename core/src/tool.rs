use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;

/// A callable an orchestrator can hand to an LLM.
///
/// The orchestrator validates arguments against [`Tool::parameters`] before
/// calling [`Tool::invoke`]; implementations take what they are given.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON Schema of the accepted arguments
    fn parameters(&self) -> Value;

    async fn invoke(&self, args: Value) -> Result<String, ToolError>;
}

// The published shape of a tool. What the LLM sees when deciding to call it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value, // Flexible JSON schema
}

impl ToolSpec {
    pub fn from_tool(tool: &dyn Tool) -> Self {
        Self {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            parameters: tool.parameters(),
        }
    }
}
