use crate::config::ConfigError;
use thiserror::Error;
use vitrine_openapi::OpenApiError;
use vitrine_registry::RegistryError;

/// Result type for startup operations
pub type StartupResult<T> = Result<T, StartupError>;

/// Errors that abort application startup.
///
/// The process logs the error and exits rather than serve a partial API
/// surface.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("registration error: {0}")]
    Registry(#[from] RegistryError),

    #[error("documentation error: {0}")]
    OpenApi(#[from] OpenApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
