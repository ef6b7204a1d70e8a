use thiserror::Error;

/// Failure of a call to the Notion API.
#[derive(Debug, Error)]
pub enum NotionError {
    /// Transport failure, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Notion answered with a non-success status.
    #[error("Notion returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, usually a Notion error object.
        body: String,
    },

    /// The response body was not the JSON we expected.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NotionError {
    /// Check if Notion rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// Check if the request timed out before Notion answered.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, NotionError>;
