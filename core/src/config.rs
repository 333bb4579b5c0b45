use std::env;

pub const WEBHOOK_URL_VAR: &str = "LOGIC_APPS_URL";
pub const GATEWAY_BIND_VAR: &str = "GATEWAY_BIND";
pub const DEFAULT_GATEWAY_BIND: &str = "0.0.0.0:3000";

// Where activation notifications go. `None` means "don't send anything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookConfig {
    url: Option<String>,
}

impl WebhookConfig {
    pub fn new(url: Option<String>) -> Self {
        // An empty URL is the same as no URL
        let url = url.filter(|u| !u.is_empty());
        Self { url }
    }

    pub fn disabled() -> Self {
        Self { url: None }
    }

    // Reads LOGIC_APPS_URL once (after loading .env if present)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::new(env::var(WEBHOOK_URL_VAR).ok())
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub bind: String,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let bind = env::var(GATEWAY_BIND_VAR)
            .ok()
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_GATEWAY_BIND.to_string());
        Self { bind }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_GATEWAY_BIND.to_string(),
        }
    }
}
