use std::{fmt, str::FromStr, time::Duration};

use nlink_notion::DEFAULT_BASE_URL;
use serde::Deserialize;

/// Deployment environment, selects log format and HSTS.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment `{other}`")),
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Process configuration, read once from the environment at startup.
///
/// Field names map to upper-case variables (`client_id` <- `CLIENT_ID`).
#[derive(Clone, Deserialize)]
pub struct ApiConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub notion_api_version: String,
    #[serde(default = "default_notion_api_base_url")]
    pub notion_api_base_url: String,
    #[serde(default = "default_dashboard_url")]
    pub dashboard_url: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default)]
    pub env: Environment,
}

fn default_notion_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_dashboard_url() -> String {
    "https://webflow.com/dashboard".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_request_timeout_secs() -> u64 {
    10
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Build the config from explicit key/value pairs instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn authorize_endpoint(&self) -> String {
        format!("{}/v1/oauth/authorize", self.base_url())
    }

    pub fn token_endpoint(&self) -> String {
        format!("{}/v1/oauth/token", self.base_url())
    }

    /// Allowed CORS origins with blanks removed.
    pub fn parsed_allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect()
    }

    fn base_url(&self) -> &str {
        self.notion_api_base_url.trim_end_matches('/')
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("redirect_uri", &self.redirect_uri)
            .field("notion_api_version", &self.notion_api_version)
            .field("notion_api_base_url", &self.notion_api_base_url)
            .field("dashboard_url", &self.dashboard_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("allowed_origins", &self.allowed_origins)
            .field("env", &self.env)
            .finish()
    }
}
