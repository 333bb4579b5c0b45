pub mod config;
pub mod error;
pub mod llm;
pub mod registry;
pub mod tool;

pub use config::{GatewayConfig, WebhookConfig};
pub use error::ToolError;
pub use registry::{AgentCard, AgentDescriptor, Registry};
pub use tool::{Tool, ToolSpec};
