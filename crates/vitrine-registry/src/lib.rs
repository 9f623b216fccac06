/*!
# vitrine-registry

Declarative API registration for the vitrine sample service.

Endpoint modules declare themselves once, at link time, by submitting an
[`ApiEntry`] into the process-wide collection; nothing maintains a central
list by hand. At startup the host runs [`Discovery`] over the collected
entries and hands the result to the [`RegistrationDriver`], which registers
documentation sections and invokes every [`EndpointMapper`] against the
shared [`RoutingSurface`].

## Usage

```rust,ignore
use vitrine_registry::{ApiDefinition, ApiEntry, Discovery, Providers, RegistrationDriver};

inventory::submit! {
    ApiEntry::new(
        "my_app::endpoints::PetsApi",
        ApiDefinition::new("pets-api", "v1").with_title("Pets API"),
        PetsApi::from_providers,
    )
}

let providers = Providers::new();
let entries = Discovery::collect()?;
let registry = RegistrationDriver::new(&providers).run(entries)?;
let router = registry.into_parts().1.into_router();
```

Discovery and registration run once, before the server accepts
connections; every error they raise is startup-fatal.
*/

// Re-export main types
pub use crate::{
    definition::{
        ApiDefinition, ApiDocument, ApiEntry, DocumentDefaults, EndpointMapper, MapperFactory,
    },
    discovery::Discovery,
    error::{RegistryError, RegistryResult},
    providers::Providers,
    registry::{ApiRegistry, RegistrationDriver},
    routes::{
        BodyDoc, HttpMethod, NamedExample, OperationDoc, ParamDoc, ParamLocation, RegisteredRoute,
        ResponseDoc, RouteSet, RoutingSurface,
    },
};

// Re-export inventory so declaring crates need no direct dependency
pub use inventory;

pub mod definition;
pub mod discovery;
pub mod error;
pub mod providers;
pub mod registry;
pub mod routes;
