use serde_json::{json, Value};
use std::sync::Arc;
use telco_core::{AgentDescriptor, WebhookConfig};

use super::ActivationNotifier;

pub const AGENT_ID: &str = "Assistant_ActivationAssistant";
pub const AGENT_NAME: &str = "Activation Assistant";

const SYSTEM_MESSAGE: &str = r#"You are a support person that helps customer activate the service they purchased.

You must be accurate and collect all necessary information to activate the service. Required information depends on the service.
Keep sentences short and simple, suitable for a voice conversation, so it's *super* important that answers are as short as possible. Use professional language.

- Mobile Internet: Customer's phone number
- All-in-One Bundle: Customer's phone number and home address
- Home Internet: Customer's home address
- Additional Mobile Data: Customer's phone number
- Replacement SIM Card: Customer's home address and email

IMPORTANT NOTES:
- In any case, you must confirm the customer's identity before proceeding: ask for their full name and email address.
- If you need additional internal information, ask other agents for help.
- Before proceeding, make sure the customer accepts the terms and conditions of the service at https//aka.ms/sample-telco-tc.
- At the end MUST sure to confirm activation to the user
- When customer provides an email, remember "@" and "at" are the same, so "john at example.com" is the same as "john@example.com"
- When providing an email as a tool parameter, you MUST use the format with "@" symbol.
"#;

const DESCRIPTION: &str = r#"Call this if:
    - You need to activate a service or product Customer want to purchase
    - You need to activate a procedure that requires customer's personal information
DO NOT CALL THIS IF:
    - You need to fetch answers
    - You need to provide technical support"#;

// Argument shape of `queue_service_activation`, as shown to the LLM
pub fn parameters_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "service_sku": { "type": "string", "description": "Service SKU" },
            "customer": {
                "type": "object",
                "description": "Customer information",
                "properties": {
                    "full_name": { "type": "string", "description": "Customer's full name" },
                    "email": { "type": "string", "description": "Customer's email address" },
                    "phone": { "type": "string", "description": "Customer's phone number" },
                    "address": { "type": "string", "description": "Customer's home address" }
                }
            },
            "tcAccepted": { "type": "boolean", "description": "Terms and conditions accepted" }
        }
    })
}

/// The Activation Assistant, wired to notify `config`'s webhook.
pub fn activation_assistant(config: &WebhookConfig) -> AgentDescriptor {
    AgentDescriptor {
        id: AGENT_ID.to_string(),
        name: AGENT_NAME.to_string(),
        system_message: SYSTEM_MESSAGE.to_string(),
        description: DESCRIPTION.to_string(),
        tools: vec![Arc::new(ActivationNotifier::new(config.clone()))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_a_single_activation_tool() {
        let agent = activation_assistant(&WebhookConfig::disabled());
        let card = agent.card();

        assert_eq!(card.id, "Assistant_ActivationAssistant");
        assert_eq!(card.name, "Activation Assistant");
        assert_eq!(card.tools.len(), 1);
        assert_eq!(card.tools[0].name, "queue_service_activation");
        assert_eq!(card.tools[0].description, "Queue a service activation request.");
        assert!(agent.tool("queue_service_activation").is_some());
    }

    #[test]
    fn prompt_covers_identity_and_terms() {
        assert!(SYSTEM_MESSAGE.contains("full name and email address"));
        assert!(SYSTEM_MESSAGE.contains("https//aka.ms/sample-telco-tc"));
        assert!(DESCRIPTION.starts_with("Call this if:"));
    }

    #[test]
    fn schema_declares_request_fields() {
        let schema = parameters_schema();
        let props = &schema["properties"];
        assert_eq!(props["service_sku"]["type"], "string");
        assert_eq!(props["tcAccepted"]["type"], "boolean");
        for field in ["full_name", "email", "phone", "address"] {
            assert_eq!(props["customer"]["properties"][field]["type"], "string");
        }
    }
}
