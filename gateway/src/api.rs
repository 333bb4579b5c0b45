use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use telco_core::ToolError;
use tracing::{error, warn};

// Output: what the tool said
#[derive(Debug, Serialize, Deserialize)]
pub struct InvokeResponse {
    pub output: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    AgentNotFound(String),
    ToolNotFound { agent: String, tool: String },
    Tool(ToolError),
    Internal(anyhow::Error),
}

impl From<ToolError> for ApiError {
    fn from(e: ToolError) -> Self {
        Self::Tool(e)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::Internal(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::AgentNotFound(_) | Self::ToolNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Tool(ToolError::InvalidArguments(_)) => StatusCode::BAD_REQUEST,
            Self::Tool(ToolError::TransportFailure(_)) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::AgentNotFound(id) => format!("Agent '{}' not found", id),
            Self::ToolNotFound { agent, tool } => {
                format!("Tool '{}' not found on agent '{}'", tool, agent)
            }
            Self::Tool(e) => e.to_string(),
            Self::Internal(e) => format!("{:#}", e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            error!("{} ({})", message, status.as_u16());
        } else {
            warn!("{} ({})", message, status.as_u16());
        }
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
