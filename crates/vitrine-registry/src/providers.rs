//! Explicit provider context for mapper construction.
//!
//! Values the host installs before registration (configuration, shared
//! services) are handed to every mapper factory through [`Providers`]
//! instead of an ambient container.

use crate::error::{RegistryError, RegistryResult};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Type-keyed map of shared values available to mapper factories.
#[derive(Default)]
pub struct Providers {
    values: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Providers {
    /// Create an empty provider context
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a value, replacing any previous provider of the same type
    pub fn insert<T: Send + Sync + 'static>(&mut self, value: T) -> &mut Self {
        self.values.insert(TypeId::of::<T>(), Arc::new(value));
        self
    }

    /// Look up a provider by type
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| Arc::clone(value).downcast::<T>().ok())
    }

    /// Look up a provider, failing with an instantiation error when absent.
    ///
    /// Mapper factories use this for their required dependencies so a
    /// missing provider aborts startup with the offending type named.
    pub fn require<T: Send + Sync + 'static>(&self) -> RegistryResult<Arc<T>> {
        self.get::<T>().ok_or_else(|| {
            RegistryError::instantiation(type_name::<T>(), "no provider registered for this type")
        })
    }

    /// Number of installed providers
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
