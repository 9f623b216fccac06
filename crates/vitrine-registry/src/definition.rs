/*!
Marker declarations for registerable API units.

An endpoint module declares itself with an [`ApiEntry`] submitted into the
process-wide collection at link time. The entry carries declarative
[`ApiDefinition`] metadata (a documentation section), a factory for an
[`EndpointMapper`] (an endpoint-mapping capability), or both.
*/

use crate::error::{RegistryError, RegistryResult};
use crate::providers::Providers;
use crate::routes::RoutingSurface;

/// Declarative metadata describing one API documentation section.
///
/// `document_id` and `version` are required and must be non-empty; `title`
/// and `description` fall back to configured defaults when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiDefinition {
    /// Unique key of the documentation section
    pub document_id: &'static str,
    /// Section title; defaults apply when absent
    pub title: Option<&'static str>,
    /// Section description; defaults apply when absent
    pub description: Option<&'static str>,
    /// Document version, e.g. "v1"
    pub version: &'static str,
}

impl ApiDefinition {
    /// Create a definition with the required fields
    pub const fn new(document_id: &'static str, version: &'static str) -> Self {
        Self {
            document_id,
            title: None,
            description: None,
            version,
        }
    }

    /// Set the section title
    pub const fn with_title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the section description
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Check the required fields, naming `type_name` in any error
    pub fn validate(&self, type_name: &str) -> RegistryResult<()> {
        if self.document_id.trim().is_empty() {
            return Err(RegistryError::discovery(
                type_name,
                "missing required `document_id`",
            ));
        }
        if self.version.trim().is_empty() {
            return Err(RegistryError::discovery(
                type_name,
                "missing required `version`",
            ));
        }
        Ok(())
    }

    /// Merge this definition with configured defaults into a resolved document.
    ///
    /// A definition's own title and description win; the document id is the
    /// final title fallback so a document is never rendered nameless.
    pub fn resolve(&self, type_name: &str, defaults: &DocumentDefaults) -> ApiDocument {
        ApiDocument {
            document_id: self.document_id.to_string(),
            title: self
                .title
                .map(str::to_string)
                .or_else(|| defaults.title.clone())
                .unwrap_or_else(|| self.document_id.to_string()),
            description: self
                .description
                .map(str::to_string)
                .or_else(|| defaults.description.clone()),
            version: self.version.to_string(),
            declared_by: type_name.to_string(),
        }
    }
}

/// Fallback title and description applied to definitions that omit them,
/// supplied by the host configuration.
#[derive(Debug, Clone, Default)]
pub struct DocumentDefaults {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// A fully resolved documentation section: definition metadata merged with
/// the configured defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDocument {
    pub document_id: String,
    pub title: String,
    pub description: Option<String>,
    pub version: String,
    /// Type name of the entry that declared this document
    pub declared_by: String,
}

/// Capability marker: a type that registers its HTTP endpoints against the
/// shared routing surface. Invoked exactly once during startup.
pub trait EndpointMapper {
    fn map_routes(&self, routes: &mut RoutingSurface<'_>) -> RegistryResult<()>;
}

impl std::fmt::Debug for dyn EndpointMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn EndpointMapper")
    }
}

/// Constructs an endpoint mapper from the provider context.
pub type MapperFactory = fn(&Providers) -> RegistryResult<Box<dyn EndpointMapper>>;

/// One unit of link-time registration, collected process-wide.
///
/// Submitted from the declaring module:
///
/// ```rust,ignore
/// inventory::submit! {
///     ApiEntry::new(
///         "my_app::endpoints::PetsApi",
///         ApiDefinition::new("pets-api", "v1").with_title("Pets API"),
///         PetsApi::from_providers,
///     )
/// }
/// ```
#[derive(Debug)]
pub struct ApiEntry {
    /// Full type name of the declaring unit, used in error reports and logs
    pub type_name: &'static str,
    /// Documentation-section metadata, when the unit declares one
    pub definition: Option<ApiDefinition>,
    /// Endpoint-mapper factory, when the unit maps routes
    pub mapper: Option<MapperFactory>,
}

inventory::collect!(ApiEntry);

impl ApiEntry {
    /// An entry declaring both a documentation section and an endpoint mapper
    pub const fn new(
        type_name: &'static str,
        definition: ApiDefinition,
        mapper: MapperFactory,
    ) -> Self {
        Self {
            type_name,
            definition: Some(definition),
            mapper: Some(mapper),
        }
    }

    /// An entry declaring only a documentation section
    pub const fn definition_only(type_name: &'static str, definition: ApiDefinition) -> Self {
        Self {
            type_name,
            definition: Some(definition),
            mapper: None,
        }
    }

    /// An entry declaring only an endpoint mapper
    pub const fn mapper_only(type_name: &'static str, mapper: MapperFactory) -> Self {
        Self {
            type_name,
            definition: None,
            mapper: Some(mapper),
        }
    }

    /// Check the entry's metadata, naming the entry's type in any error
    pub fn validate(&self) -> RegistryResult<()> {
        if self.definition.is_none() && self.mapper.is_none() {
            return Err(RegistryError::discovery(
                self.type_name,
                "entry declares neither an api definition nor an endpoint mapper",
            ));
        }
        if let Some(definition) = &self.definition {
            definition.validate(self.type_name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_mapper(_: &Providers) -> RegistryResult<Box<dyn EndpointMapper>> {
        struct Noop;
        impl EndpointMapper for Noop {
            fn map_routes(&self, _: &mut RoutingSurface<'_>) -> RegistryResult<()> {
                Ok(())
            }
        }
        Ok(Box::new(Noop))
    }

    #[test]
    fn test_definition_builder() {
        let definition = ApiDefinition::new("pets-api", "v2")
            .with_title("Pets API")
            .with_description("Everything about pets");

        assert_eq!(definition.document_id, "pets-api");
        assert_eq!(definition.title, Some("Pets API"));
        assert_eq!(definition.description, Some("Everything about pets"));
        assert_eq!(definition.version, "v2");
    }

    #[test]
    fn test_validate_rejects_empty_document_id() {
        let definition = ApiDefinition::new("", "v1");
        let err = definition.validate("demo::BrokenApi").unwrap_err();

        assert!(matches!(err, RegistryError::Discovery { .. }));
        assert!(err.to_string().contains("demo::BrokenApi"));
        assert!(err.to_string().contains("document_id"));
    }

    #[test]
    fn test_validate_rejects_empty_version() {
        let definition = ApiDefinition::new("pets-api", "  ");
        let err = definition.validate("demo::BrokenApi").unwrap_err();

        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_resolve_prefers_own_metadata_over_defaults() {
        let definition = ApiDefinition::new("pets-api", "v1").with_title("Pets API");
        let defaults = DocumentDefaults {
            title: Some("Default title".to_string()),
            description: Some("Default description".to_string()),
        };

        let document = definition.resolve("demo::PetsApi", &defaults);

        assert_eq!(document.title, "Pets API");
        assert_eq!(document.description.as_deref(), Some("Default description"));
        assert_eq!(document.declared_by, "demo::PetsApi");
    }

    #[test]
    fn test_resolve_falls_back_to_document_id() {
        let definition = ApiDefinition::new("pets-api", "v1");
        let document = definition.resolve("demo::PetsApi", &DocumentDefaults::default());

        assert_eq!(document.title, "pets-api");
        assert_eq!(document.description, None);
    }

    #[test]
    fn test_entry_requires_definition_or_mapper() {
        let entry = ApiEntry {
            type_name: "demo::Empty",
            definition: None,
            mapper: None,
        };
        let err = entry.validate().unwrap_err();
        assert!(err.to_string().contains("demo::Empty"));

        let entry = ApiEntry::mapper_only("demo::MapperOnly", noop_mapper);
        assert!(entry.validate().is_ok());
    }
}
