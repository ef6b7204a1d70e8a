use serde::{Deserialize, Serialize};

/// The user (or bot) that owns a bearer token, as returned by `GET /v1/users/me`.
///
/// Only the fields the server reads are typed; everything else Notion sends is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub object: String,
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bot: Option<serde_json::Value>,
}

/// Page of results from `POST /v1/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

impl SearchResponse {
    /// URL of the first shared page or database, if any.
    pub fn first_url(&self) -> Option<&str> {
        self.results.first().and_then(|r| r.url.as_deref())
    }
}

/// A page or database visible to the integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub object: String,
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}
