/*!
# vitrine-openapi

OpenAPI 3.0 document generation and documentation UIs for the vitrine
sample service.

Registered API documents and their route documentation are folded into one
OpenAPI specification per document, then served together with three
interactive UIs (Swagger UI, ReDoc, Scalar) that enumerate the documents
by key.

## Usage

```rust,ignore
use vitrine_openapi::{docs_router, DocsConfig, OpenApiGenerator};

let generator = OpenApiGenerator::new().with_server("http://localhost:8080", None);
let spec = generator.generate(&document, routes.routes_for_document(&document.document_id))?;
let router = docs_router(DocsConfig::default(), documents, specs);
```
*/

// Re-export main types
pub use crate::{
    config::DocsConfig,
    error::{OpenApiError, OpenApiResult},
    generator::OpenApiGenerator,
    specification::OpenApiSpec,
    ui::docs_router,
};

pub mod config;
pub mod error;
pub mod generator;
pub mod specification;

// Interactive documentation
pub mod redoc;
pub mod scalar;
pub mod swagger;
pub mod ui;
