use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Remote catalog request failed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Rejected user input
    #[error("{0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}

impl From<gameboxd_lib::EngineError> for CliError {
    fn from(err: gameboxd_lib::EngineError) -> Self {
        match err {
            gameboxd_lib::EngineError::InvalidRating(_) => Self::InvalidInput(err.to_string()),
            gameboxd_lib::EngineError::Store(e) => Self::Database(e.to_string()),
        }
    }
}

impl From<gameboxd_client::FetchError> for CliError {
    fn from(err: gameboxd_client::FetchError) -> Self {
        Self::catalog(err.to_string())
    }
}
