use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs, ChatCompletionTool,
    ChatCompletionToolArgs, ChatCompletionToolType, FunctionObjectArgs,
};
use anyhow::{Context, Result};

use crate::registry::AgentDescriptor;

// Converts an agent's tools into OpenAI function-calling definitions.
// The schema is passed through as-is; validating arguments against it is the caller's job.
pub fn openai_tools(agent: &AgentDescriptor) -> Result<Vec<ChatCompletionTool>> {
    agent
        .tool_specs()
        .into_iter()
        .map(|spec| {
            let function = FunctionObjectArgs::default()
                .name(&spec.name)
                .description(&spec.description)
                .parameters(spec.parameters)
                .build()
                .with_context(|| format!("Invalid function definition for tool '{}'", spec.name))?;

            ChatCompletionToolArgs::default()
                .r#type(ChatCompletionToolType::Function)
                .function(function)
                .build()
                .with_context(|| format!("Invalid tool definition for '{}'", spec.name))
        })
        .collect()
}

pub fn system_prompt(agent: &AgentDescriptor) -> Result<ChatCompletionRequestMessage> {
    let message = ChatCompletionRequestSystemMessageArgs::default()
        .content(agent.system_message.as_str())
        .name(&agent.id)
        .build()
        .context("Invalid system message")?;
    Ok(ChatCompletionRequestMessage::System(message))
}
