use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::{auth, notion, state::ApiState};

pub const WELCOME_MESSAGE: &str = "Welcome to the Notion OAuth2 integration server";

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth::routes())
        .merge(notion::routes())
        .fallback(handler_404)
}

async fn root() -> &'static str {
    WELCOME_MESSAGE
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
