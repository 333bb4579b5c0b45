mod api;

use anyhow::Context;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

// Internal imports
use crate::api::{ApiError, InvokeResponse};
use telco_core::llm::openai_tools;
use telco_core::{AgentCard, GatewayConfig, Registry, WebhookConfig};
use telco_tools::activation_assistant;

// Application State: the agents we publish, read-only after startup
#[derive(Clone)]
struct AppState {
    registry: Arc<Registry>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .compact()
        .init();

    info!("Telco Agent Gateway Initializing...");

    let webhook = WebhookConfig::from_env();
    match webhook.endpoint() {
        Some(_) => info!("Activation webhook configured"),
        None => info!("No activation webhook configured; activations are not forwarded"),
    }

    let mut registry = Registry::new();
    registry.register(activation_assistant(&webhook));
    info!("Loaded {} agents for the orchestrator.", registry.len());

    let state = AppState {
        registry: Arc::new(registry),
    };

    let config = GatewayConfig::from_env();
    let listener = TcpListener::bind(config.bind.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("Gateway listening on {}...", config.bind);

    axum::serve(listener, app(state))
        .await
        .context("Gateway server stopped unexpectedly")
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/agents", get(list_agents))
        .route("/agents/{id}", get(get_agent))
        .route("/agents/{id}/openai-tools", get(get_openai_tools))
        .route("/agents/{id}/tools/{tool}", post(invoke_tool))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// --- HANDLERS ---

async fn health_check() -> &'static str {
    "Telco Agent Gateway: Operational"
}

async fn list_agents(State(state): State<AppState>) -> Json<Vec<AgentCard>> {
    Json(state.registry.cards())
}

async fn get_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AgentCard>, ApiError> {
    let agent = state.registry.get(&id).ok_or(ApiError::AgentNotFound(id))?;
    Ok(Json(agent.card()))
}

async fn get_openai_tools(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let agent = state.registry.get(&id).ok_or(ApiError::AgentNotFound(id))?;
    let tools = openai_tools(&agent)?;
    let value = serde_json::to_value(tools).context("Failed to encode tool definitions")?;
    Ok(Json(value))
}

// The orchestrator has already picked the tool and built its arguments
async fn invoke_tool(
    State(state): State<AppState>,
    Path((id, tool_name)): Path<(String, String)>,
    Json(args): Json<Value>,
) -> Result<Json<InvokeResponse>, ApiError> {
    let agent = state
        .registry
        .get(&id)
        .ok_or_else(|| ApiError::AgentNotFound(id.clone()))?;
    let tool = agent.tool(&tool_name).ok_or_else(|| ApiError::ToolNotFound {
        agent: id.clone(),
        tool: tool_name.clone(),
    })?;

    info!("Agent '{}' invoking tool '{}'", id, tool_name);
    let output = tool.invoke(args).await?;
    info!("Result: {}", output);

    Ok(Json(InvokeResponse { output }))
}
