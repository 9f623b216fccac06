//! Application configuration bound from the environment.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use vitrine_registry::DocumentDefaults;

/// Configuration errors raised while binding or validating [`AppConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: `{value}` ({expected})")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("invalid configuration for {field}: {reason}")]
    ValidationFailed { field: String, reason: String },
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server bind host
    pub host: String,
    /// Server bind port
    pub port: u16,
    /// Default document title merged into definitions that omit one
    pub default_api_title: Option<String>,
    /// Default document description merged into definitions that omit one
    pub default_api_description: Option<String>,
    /// Whether the documentation endpoints and UIs are mounted
    pub docs_enabled: bool,
    /// Health check endpoint path
    pub health_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            default_api_title: None,
            default_api_description: None,
            docs_enabled: true,
            health_path: "/health".to_string(),
        }
    }
}

impl AppConfig {
    /// Bind configuration from `VITRINE_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = get_env_or_default("VITRINE_HOST", "127.0.0.1");

        let port_value = get_env_or_default("VITRINE_PORT", "8080");
        let port = port_value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue {
                field: "port".to_string(),
                value: port_value,
                expected: "valid port number".to_string(),
            })?;

        let docs_value = get_env_or_default("VITRINE_DOCS_ENABLED", "true");
        let docs_enabled = docs_value
            .parse::<bool>()
            .map_err(|_| ConfigError::InvalidValue {
                field: "docs_enabled".to_string(),
                value: docs_value,
                expected: "true or false".to_string(),
            })?;

        let health_path = get_env_or_default("VITRINE_HEALTH_PATH", "/health");

        Ok(Self {
            host,
            port,
            default_api_title: env::var("VITRINE_API_TITLE").ok().filter(|v| !v.is_empty()),
            default_api_description: env::var("VITRINE_API_DESCRIPTION")
                .ok()
                .filter(|v| !v.is_empty()),
            docs_enabled,
            health_path,
        })
    }

    /// Validate the bound values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "host".to_string(),
                reason: "Host must not be empty".to_string(),
            });
        }

        if self.port == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.health_path.is_empty() || !self.health_path.starts_with('/') {
            return Err(ConfigError::ValidationFailed {
                field: "health_path".to_string(),
                reason: "Health check path must be non-empty and start with '/'".to_string(),
            });
        }

        Ok(())
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Defaults merged into every registered document
    pub fn document_defaults(&self) -> DocumentDefaults {
        DocumentDefaults {
            title: self.default_api_title.clone(),
            description: self.default_api_description.clone(),
        }
    }
}

// Helper function for environment variable handling
fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Global test lock to prevent concurrent environment modifications
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn set_test_env() {
        env::set_var("VITRINE_HOST", "0.0.0.0");
        env::set_var("VITRINE_PORT", "9090");
        env::set_var("VITRINE_API_TITLE", "Vitrine APIs");
        env::set_var("VITRINE_API_DESCRIPTION", "Sample endpoints");
        env::set_var("VITRINE_DOCS_ENABLED", "false");
        env::set_var("VITRINE_HEALTH_PATH", "/healthz");
    }

    fn clean_test_env() {
        env::remove_var("VITRINE_HOST");
        env::remove_var("VITRINE_PORT");
        env::remove_var("VITRINE_API_TITLE");
        env::remove_var("VITRINE_API_DESCRIPTION");
        env::remove_var("VITRINE_DOCS_ENABLED");
        env::remove_var("VITRINE_HEALTH_PATH");
    }

    #[test]
    fn test_app_config_defaults() {
        let _guard = TEST_MUTEX.lock().unwrap();

        let config = AppConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.docs_enabled);
        assert_eq!(config.health_path, "/health");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_app_config_from_env() {
        let _guard = TEST_MUTEX.lock().unwrap();
        set_test_env();

        let config = AppConfig::from_env().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
        assert_eq!(config.default_api_title.as_deref(), Some("Vitrine APIs"));
        assert_eq!(
            config.default_api_description.as_deref(),
            Some("Sample endpoints")
        );
        assert!(!config.docs_enabled);
        assert_eq!(config.health_path, "/healthz");

        clean_test_env();
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let _guard = TEST_MUTEX.lock().unwrap();
        env::set_var("VITRINE_PORT", "not-a-port");

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(err.to_string().contains("not-a-port"));

        env::remove_var("VITRINE_PORT");
    }

    #[test]
    fn test_validation_rejects_bad_health_path() {
        let _guard = TEST_MUTEX.lock().unwrap();

        let mut config = AppConfig::default();
        config.health_path = "no-slash".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    }

    #[test]
    fn test_document_defaults_carry_configured_values() {
        let _guard = TEST_MUTEX.lock().unwrap();

        let mut config = AppConfig::default();
        config.default_api_title = Some("Vitrine APIs".to_string());

        let defaults = config.document_defaults();
        assert_eq!(defaults.title.as_deref(), Some("Vitrine APIs"));
        assert_eq!(defaults.description, None);
    }
}
