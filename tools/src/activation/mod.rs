//! Service activation: the request model and the notifier that forwards it
//! to the configured Logic App webhook.

mod descriptor;

pub use descriptor::{activation_assistant, parameters_schema, AGENT_ID, AGENT_NAME};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use telco_core::{Tool, ToolError, WebhookConfig};
use tracing::{debug, info};

pub const TOOL_NAME: &str = "queue_service_activation";
pub const TOOL_DESCRIPTION: &str = "Queue a service activation request.";

// Missing fields read as empty; nothing here is validated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationRequest {
    pub service_sku: String,
    pub customer: Customer,
    #[serde(rename = "tcAccepted")]
    pub tc_accepted: bool,
}

/// Forwards activation requests to the Logic App webhook, if one is configured.
#[derive(Debug, Clone)]
pub struct ActivationNotifier {
    config: WebhookConfig,
    client: Client,
}

impl ActivationNotifier {
    pub fn new(config: WebhookConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: WebhookConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Posts `request` to the webhook (when configured) and returns the
    /// confirmation line for the caller.
    ///
    /// The webhook's response is ignored. A failed POST is returned as
    /// [`ToolError::TransportFailure`] and is never retried.
    pub async fn queue_service_activation(
        &self,
        request: &ActivationRequest,
    ) -> Result<String, ToolError> {
        info!("Queueing activation for SKU '{}'", request.service_sku);
        self.notify(request).await?;
        Ok(confirmation(&request.service_sku, &request.customer.full_name))
    }

    async fn notify<T: Serialize + ?Sized>(&self, body: &T) -> Result<(), ToolError> {
        match self.config.endpoint() {
            Some(url) => {
                let response = self.client.post(url).json(body).send().await?;
                debug!("Webhook answered with {}", response.status());
            }
            None => debug!("No webhook configured; skipping POST"),
        }
        Ok(())
    }
}

pub fn confirmation(service_sku: &str, full_name: &str) -> String {
    format!(
        "Service activation request for {} queued for {}",
        service_sku, full_name
    )
}

#[async_trait]
impl Tool for ActivationNotifier {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        TOOL_DESCRIPTION
    }

    fn parameters(&self) -> Value {
        parameters_schema()
    }

    // Arguments are forwarded exactly as received; only the two fields the
    // confirmation needs are read, and missing or mistyped ones read as empty.
    async fn invoke(&self, args: Value) -> Result<String, ToolError> {
        if !args.is_object() {
            return Err(ToolError::InvalidArguments(format!(
                "expected a JSON object, got {}",
                args
            )));
        }
        let service_sku = args["service_sku"].as_str().unwrap_or_default();
        let full_name = args["customer"]["full_name"].as_str().unwrap_or_default();

        info!("Queueing activation for SKU '{}'", service_sku);
        self.notify(&args).await?;
        Ok(confirmation(service_sku, full_name))
    }
}
