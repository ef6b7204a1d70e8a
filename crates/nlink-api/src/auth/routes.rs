use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use super::client;
use crate::{ApiState, error::ApiError};

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/auth", get(authorize))
        .route("/callback", get(callback))
}

/// `302 Found` with the given `Location`.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

async fn authorize(State(state): State<ApiState>) -> Response {
    let auth_url = client::authorize_url(&state.oauth_client);
    tracing::debug!("Redirecting to Notion consent screen");

    found(auth_url.as_str())
}

#[derive(Debug, Deserialize)]
struct CallbackQuery {
    code: Option<String>,
    error: Option<String>,
}

async fn callback(
    State(state): State<ApiState>,
    query: Result<Query<CallbackQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) =
        query.map_err(|e| ApiError::TokenExchange(format!("invalid callback query: {e}")))?;

    // Notion sends `error=access_denied` when the user cancels the consent screen
    if let Some(error) = query.error {
        return Err(ApiError::TokenExchange(format!("authorization denied: {error}")));
    }

    let code = query
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::TokenExchange("missing authorization code".to_string()))?;

    let access_token = client::exchange_code(&state.oauth_client, &state.http_client, code).await?;
    let token = access_token.secret();

    let user = state
        .notion
        .current_user(token)
        .await
        .map_err(|e| ApiError::TokenExchange(format!("user lookup failed: {e}")))?;

    tracing::info!(
        user_id = %user.id,
        user_name = user.name.as_deref().unwrap_or_default(),
        "Notion authorization completed"
    );

    let search = state
        .notion
        .search(token)
        .await
        .map_err(|e| ApiError::TokenExchange(format!("search failed: {e}")))?;

    match search.first_url() {
        Some(url) => tracing::info!(url, shared = search.results.len(), "First shared resource"),
        None => tracing::info!("No resources shared with the integration"),
    }

    Ok(found(&state.dashboard_url))
}
