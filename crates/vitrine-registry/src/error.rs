use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised while discovering and registering API entries.
///
/// All of these are startup-fatal: the host logs the error and refuses to
/// start rather than serve a partial API surface.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Malformed or incomplete metadata on a discovered entry
    #[error("invalid api definition on `{type_name}`: {reason}")]
    Discovery { type_name: String, reason: String },

    /// Two entries declared the same document id
    #[error("duplicate api document id `{document_id}`: already declared by `{existing}`, rejected `{duplicate}`")]
    DuplicateDocument {
        document_id: String,
        existing: String,
        duplicate: String,
    },

    /// Two routes claimed the same method and path
    #[error("route `{method} {path}` is already registered")]
    RouteConflict { method: String, path: String },

    /// A discovered mapper could not be constructed
    #[error("failed to construct endpoint mapper `{type_name}`: {reason}")]
    Instantiation { type_name: String, reason: String },
}

impl RegistryError {
    /// Create a new discovery error for the named type
    pub fn discovery(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Discovery {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new duplicate-document error
    pub fn duplicate_document(
        document_id: impl Into<String>,
        existing: impl Into<String>,
        duplicate: impl Into<String>,
    ) -> Self {
        Self::DuplicateDocument {
            document_id: document_id.into(),
            existing: existing.into(),
            duplicate: duplicate.into(),
        }
    }

    /// Create a new route-conflict error
    pub fn route_conflict(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self::RouteConflict {
            method: method.into(),
            path: path.into(),
        }
    }

    /// Create a new instantiation error for the named type
    pub fn instantiation(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Instantiation {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}
