use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use crate::{ApiState, error::ApiError};

pub fn routes() -> Router<ApiState> {
    Router::new().route("/notion/search", get(search))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    token: Option<String>,
}

/// Run a Notion search with the caller's bearer token and relay the JSON as-is.
async fn search(
    State(state): State<ApiState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    // A malformed query (e.g. a repeated `token`) counts as no usable token
    let token = query
        .ok()
        .and_then(|Query(q)| q.token)
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::AccessTokenRequired)?;

    let body = state.notion.search_raw(&token).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
