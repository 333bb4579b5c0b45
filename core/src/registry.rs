use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::tool::{Tool, ToolSpec};

/// A static agent definition: prompt, routing hint and the tools it may call.
///
/// Built once at startup and shared read-only afterwards.
pub struct AgentDescriptor {
    pub id: String,
    pub name: String,
    pub system_message: String,
    pub description: String,
    pub tools: Vec<Arc<dyn Tool>>,
}

impl AgentDescriptor {
    pub fn tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn tool_specs(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|t| ToolSpec::from_tool(t.as_ref())).collect()
    }

    pub fn card(&self) -> AgentCard {
        AgentCard {
            id: self.id.clone(),
            name: self.name.clone(),
            system_message: self.system_message.clone(),
            description: self.description.clone(),
            tools: self.tool_specs(),
        }
    }
}

impl std::fmt::Debug for AgentDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("tools", &self.tools.iter().map(|t| t.name()).collect::<Vec<_>>())
            .finish()
    }
}

// The serializable "passport" of an agent, handed to the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCard {
    pub id: String,
    pub name: String,
    pub system_message: String,
    pub description: String,
    pub tools: Vec<ToolSpec>,
}

#[derive(Debug, Default)]
pub struct Registry {
    agents: Vec<Arc<AgentDescriptor>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // Registering an id twice replaces the earlier agent in place
    pub fn register(&mut self, agent: AgentDescriptor) {
        let agent = Arc::new(agent);
        match self.agents.iter_mut().find(|a| a.id == agent.id) {
            Some(existing) => {
                tracing::warn!("Agent '{}' registered twice; keeping the latest", agent.id);
                *existing = agent;
            }
            None => self.agents.push(agent),
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<AgentDescriptor>> {
        self.agents.iter().find(|a| a.id == id).cloned()
    }

    pub fn cards(&self) -> Vec<AgentCard> {
        self.agents.iter().map(|a| a.card()).collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct Echo;

    #[async_trait]
    impl Tool for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo the input back."
        }

        fn parameters(&self) -> Value {
            json!({ "type": "object", "properties": { "input": { "type": "string" } } })
        }

        async fn invoke(&self, args: Value) -> Result<String, ToolError> {
            Ok(args["input"].as_str().unwrap_or_default().to_string())
        }
    }

    fn agent(id: &str, name: &str) -> AgentDescriptor {
        AgentDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            system_message: "You echo things.".to_string(),
            description: "Call this to echo.".to_string(),
            tools: vec![Arc::new(Echo)],
        }
    }

    #[test]
    fn card_carries_tool_specs() {
        let card = agent("Assistant_Echo", "Echo").card();
        assert_eq!(card.tools.len(), 1);
        assert_eq!(card.tools[0].name, "echo");
        assert_eq!(card.tools[0].parameters["properties"]["input"]["type"], "string");
    }

    #[test]
    fn register_replaces_duplicate_ids() {
        let mut registry = Registry::new();
        registry.register(agent("a", "First"));
        registry.register(agent("b", "Second"));
        registry.register(agent("a", "Replacement"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("a").unwrap().name, "Replacement");
        let ids: Vec<_> = registry.cards().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn unknown_agent_is_none() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.get("missing").is_none());
    }

    #[tokio::test]
    async fn tool_lookup_by_name_invokes() {
        let agent = agent("a", "Echo");
        assert!(agent.tool("nope").is_none());

        let tool = agent.tool("echo").unwrap();
        let out = tool.invoke(json!({ "input": "hi" })).await.unwrap();
        assert_eq!(out, "hi");
    }
}
