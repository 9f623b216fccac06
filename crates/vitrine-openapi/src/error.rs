use thiserror::Error;

/// Result type for OpenAPI operations
pub type OpenApiResult<T> = Result<T, OpenApiError>;

/// Errors that can occur while generating or serving API documents
#[derive(Debug, Error)]
pub enum OpenApiError {
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema fragment could not be interpreted
    #[error("schema error: {0}")]
    Schema(String),

    /// No document registered under the requested id
    #[error("unknown api document `{0}`")]
    UnknownDocument(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl OpenApiError {
    /// Create a new schema error
    pub fn schema_error<T: ToString>(msg: T) -> Self {
        Self::Schema(msg.to_string())
    }

    /// Create a new configuration error
    pub fn config_error<T: ToString>(msg: T) -> Self {
        Self::Config(msg.to_string())
    }
}
