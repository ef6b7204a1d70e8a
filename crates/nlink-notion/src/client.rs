//! Notion REST client.

use metrics::counter;
use reqwest::RequestBuilder;
use serde::de::IgnoredAny;

use crate::error::{NotionError, Result};
use crate::models::{SearchResponse, User};

/// Production Notion API host.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com";

const NOTION_VERSION_HEADER: &str = "Notion-Version";

/// Calls Notion on behalf of whichever bearer token is passed in.
///
/// The client holds no credentials of its own. Every call sends the configured
/// `Notion-Version` header and `Authorization: Bearer <token>`.
#[derive(Clone, Debug)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    api_version: String,
}

impl NotionClient {
    /// Create a client on top of a shared `reqwest::Client`.
    ///
    /// Timeouts and redirect policy come from `http`.
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_version: api_version.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, path)
    }

    /// `GET /v1/users/me`: the user or bot the token belongs to.
    pub async fn current_user(&self, token: &str) -> Result<User> {
        let request = self.http.get(self.url("users/me"));
        let body = self.send(request, token, "users_me").await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// `POST /v1/search` with an empty filter, decoded.
    pub async fn search(&self, token: &str) -> Result<SearchResponse> {
        let body = self.search_raw(token).await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// `POST /v1/search` with an empty filter, returning the body exactly as
    /// Notion sent it. The body is checked to be well-formed JSON.
    pub async fn search_raw(&self, token: &str) -> Result<String> {
        let request = self.http.post(self.url("search")).json(&serde_json::json!({}));
        let body = self.send(request, token, "search").await?;

        serde_json::from_str::<IgnoredAny>(&body)?;

        Ok(body)
    }

    async fn send(
        &self,
        request: RequestBuilder,
        token: &str,
        endpoint: &'static str,
    ) -> Result<String> {
        let response = match request
            .header(NOTION_VERSION_HEADER, &self.api_version)
            .bearer_auth(token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                record_request(endpoint, "error");
                return Err(e.into());
            }
        };

        let status = response.status();
        record_request(endpoint, status.as_str());

        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(endpoint, status = status.as_u16(), "Notion request failed");
            return Err(NotionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

fn record_request(endpoint: &'static str, status: &str) {
    counter!(
        "notion_requests_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);
}
