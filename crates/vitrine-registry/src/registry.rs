/*!
The registration driver.

Consumes the discovered entry set in one startup pass: documentation
sections are registered first (so the documentation UIs can enumerate them
by key afterwards), then every endpoint mapper is constructed through the
provider context and invoked against the shared routing surface.

This is a single-shot startup operation; running it twice in one process
is not supported.
*/

use crate::definition::{ApiDocument, ApiEntry, DocumentDefaults};
use crate::error::{RegistryError, RegistryResult};
use crate::providers::Providers;
use crate::routes::{RouteSet, RoutingSurface};
use std::collections::HashMap;

/// Everything registration produced: the resolved documents in
/// registration order and the collected route set.
#[derive(Debug)]
pub struct ApiRegistry {
    documents: Vec<ApiDocument>,
    routes: RouteSet,
}

impl ApiRegistry {
    /// Registered documents, in registration order
    pub fn documents(&self) -> &[ApiDocument] {
        &self.documents
    }

    /// Look up a document by id
    pub fn document(&self, document_id: &str) -> Option<&ApiDocument> {
        self.documents
            .iter()
            .find(|document| document.document_id == document_id)
    }

    /// The collected route set
    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }

    /// Consume the registry into its documents and routes
    pub fn into_parts(self) -> (Vec<ApiDocument>, RouteSet) {
        (self.documents, self.routes)
    }
}

/// Drives one registration pass over a discovered entry set.
pub struct RegistrationDriver<'a> {
    providers: &'a Providers,
    defaults: DocumentDefaults,
}

impl<'a> RegistrationDriver<'a> {
    /// Create a driver over the given provider context
    pub fn new(providers: &'a Providers) -> Self {
        Self {
            providers,
            defaults: DocumentDefaults::default(),
        }
    }

    /// Set the title/description defaults merged into each document
    pub fn with_defaults(mut self, defaults: DocumentDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Run registration over the entries.
    ///
    /// Duplicate document ids and overlapping routes abort the pass; the
    /// last registration never silently wins.
    pub fn run<'e, I>(&self, entries: I) -> RegistryResult<ApiRegistry>
    where
        I: IntoIterator<Item = &'e ApiEntry>,
    {
        let entries: Vec<&ApiEntry> = entries.into_iter().collect();

        let mut documents = Vec::new();
        let mut owners: HashMap<&str, &str> = HashMap::new();
        for entry in &entries {
            let Some(definition) = &entry.definition else {
                continue;
            };
            if let Some(existing) = owners.get(definition.document_id) {
                return Err(RegistryError::duplicate_document(
                    definition.document_id,
                    *existing,
                    entry.type_name,
                ));
            }
            owners.insert(definition.document_id, entry.type_name);

            let document = definition.resolve(entry.type_name, &self.defaults);
            tracing::info!(
                "registered api document `{}` ({}) declared by `{}`",
                document.document_id,
                document.version,
                entry.type_name
            );
            documents.push(document);
        }

        let mut routes = RouteSet::new();
        for entry in &entries {
            let Some(factory) = entry.mapper else {
                continue;
            };
            let mapper = factory(self.providers)?;
            let document_id = entry.definition.as_ref().map(|d| d.document_id);

            let before = routes.len();
            let mut surface = RoutingSurface::new(document_id, &mut routes);
            mapper.map_routes(&mut surface)?;
            tracing::info!(
                "mapped {} endpoint(s) from `{}`",
                routes.len() - before,
                entry.type_name
            );
        }

        Ok(ApiRegistry { documents, routes })
    }
}
