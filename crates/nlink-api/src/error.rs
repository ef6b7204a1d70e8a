use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nlink_notion::NotionError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP callers.
///
/// The `Display` text carries the detail and is only logged. Callers see the
/// fixed message from [`ApiError::public_message`].
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Access token is required")]
    AccessTokenRequired,
    #[error("Token exchange failed: {0}")]
    TokenExchange(String),
    #[error("Notion error: {0}")]
    Notion(#[from] NotionError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AccessTokenRequired => StatusCode::BAD_REQUEST,
            Self::TokenExchange(_) | Self::Notion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            Self::AccessTokenRequired => "Access token is required",
            Self::TokenExchange(_) => "Failed to obtain access token",
            Self::Notion(_) => "Failed to fetch data from Notion",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Self::Notion(e) = &self {
            tracing::error!(
                status = %status,
                timeout = e.is_timeout(),
                unauthorized = e.is_unauthorized(),
                error = %self,
                "Notion request failed"
            );
        } else if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Rejected request");
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
