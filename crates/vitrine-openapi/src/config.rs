use crate::error::{OpenApiError, OpenApiResult};
use serde::{Deserialize, Serialize};

/// Configuration for the documentation endpoints and UIs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Browser tab title shared by the UI pages
    pub document_title: String,

    /// Mount path of the Swagger UI page
    pub swagger_path: String,

    /// Mount path of the ReDoc page
    pub redoc_path: String,

    /// Mount path of the Scalar page
    pub scalar_path: String,

    /// Prefix under which raw documents are served, as
    /// `{prefix}/{document_id}.json`
    pub spec_path_prefix: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            document_title: "API Documentation".to_string(),
            swagger_path: "/swagger".to_string(),
            redoc_path: "/api-docs".to_string(),
            scalar_path: "/scalar".to_string(),
            spec_path_prefix: "/openapi".to_string(),
        }
    }
}

impl DocsConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shared page title
    pub fn with_document_title(mut self, title: &str) -> Self {
        self.document_title = title.to_string();
        self
    }

    /// Set the Swagger UI mount path
    pub fn with_swagger_path(mut self, path: &str) -> Self {
        self.swagger_path = path.to_string();
        self
    }

    /// Set the ReDoc mount path
    pub fn with_redoc_path(mut self, path: &str) -> Self {
        self.redoc_path = path.to_string();
        self
    }

    /// Set the Scalar mount path
    pub fn with_scalar_path(mut self, path: &str) -> Self {
        self.scalar_path = path.to_string();
        self
    }

    /// URL of the raw document for the given id
    pub fn spec_url(&self, document_id: &str) -> String {
        format!(
            "{}/{}.json",
            self.spec_path_prefix.trim_end_matches('/'),
            document_id
        )
    }

    /// Check every mount path is absolute
    pub fn validate(&self) -> OpenApiResult<()> {
        for (field, path) in [
            ("swagger_path", &self.swagger_path),
            ("redoc_path", &self.redoc_path),
            ("scalar_path", &self.scalar_path),
            ("spec_path_prefix", &self.spec_path_prefix),
        ] {
            if path.is_empty() || !path.starts_with('/') {
                return Err(OpenApiError::config_error(format!(
                    "{} must be non-empty and start with '/'",
                    field
                )));
            }
        }
        Ok(())
    }
}
