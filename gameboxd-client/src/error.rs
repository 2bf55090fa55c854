/// Errors that can occur while talking to the remote catalog.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No game matching '{query}' in the catalog")]
    NotFound { query: String },
}
