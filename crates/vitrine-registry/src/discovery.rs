/*!
Discovery over the process-wide entry collection.

The Rust rendition of scanning loaded modules for marked types: every
endpoint module submits an [`ApiEntry`] into the `inventory` collection at
link time, and discovery iterates the collected entries. The scan is pure
(no side effects, no instantiation) and an empty result is valid.
*/

use crate::definition::{ApiDefinition, ApiEntry};
use crate::error::RegistryResult;

/// Discovery service over link-time collected [`ApiEntry`] values.
pub struct Discovery;

impl Discovery {
    /// All entries submitted into the process-wide collection, each
    /// validated. Malformed metadata fails fast, naming the offending type.
    pub fn collect() -> RegistryResult<Vec<&'static ApiEntry>> {
        Self::validate(inventory::iter::<ApiEntry>)
    }

    /// Entries carrying declarative metadata, as (entry, definition) pairs
    pub fn definitions() -> RegistryResult<Vec<(&'static ApiEntry, &'static ApiDefinition)>> {
        Ok(Self::collect()?
            .into_iter()
            .filter_map(|entry| entry.definition.as_ref().map(|definition| (entry, definition)))
            .collect())
    }

    /// Entries providing an endpoint mapper
    pub fn mappers() -> RegistryResult<Vec<&'static ApiEntry>> {
        Ok(Self::collect()?
            .into_iter()
            .filter(|entry| entry.mapper.is_some())
            .collect())
    }

    /// Validate an explicit entry sequence. The checks do not depend on
    /// where the entries came from, so callers may pass their own.
    pub fn validate<'e, I>(entries: I) -> RegistryResult<Vec<&'e ApiEntry>>
    where
        I: IntoIterator<Item = &'e ApiEntry>,
    {
        let mut found = Vec::new();
        for entry in entries {
            entry.validate()?;
            found.push(entry);
        }
        Ok(found)
    }
}
