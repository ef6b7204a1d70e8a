use nlink_notion::NotionClient;

use crate::{
    ApiConfig,
    auth::{NotionOAuthClient, create_oauth_client},
    config::Environment,
};

/// Shared, immutable handler state. Cloned per request.
#[derive(Clone)]
pub struct ApiState {
    pub oauth_client: NotionOAuthClient,
    pub http_client: reqwest::Client,
    pub notion: NotionClient,
    pub dashboard_url: String,
    pub environment: Environment,
}

impl ApiState {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        // Redirects stay disabled: the token endpoint must not bounce credentials elsewhere
        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(config.request_timeout())
            .build()?;

        let oauth_client = create_oauth_client(config)?;

        let notion = NotionClient::new(
            http_client.clone(),
            config.notion_api_base_url.clone(),
            config.notion_api_version.clone(),
        );

        Ok(Self {
            oauth_client,
            http_client,
            notion,
            dashboard_url: config.dashboard_url.clone(),
            environment: config.env,
        })
    }
}
