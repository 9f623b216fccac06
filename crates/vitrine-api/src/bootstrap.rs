/*!
Application assembly.

Startup ordering is fixed: bind configuration → install providers → run
discovery → run the registration driver → generate and mount the
documentation → lower the route set into the router. Every failure along
the way is startup-fatal; the caller logs it and exits.
*/

use crate::config::AppConfig;
use crate::error::StartupResult;
use crate::health::{HealthChecker, HealthStatus};
use axum::Router;
use std::collections::HashMap;
use tower_http::trace::TraceLayer;
use tracing::info;
use vitrine_openapi::{docs_router, DocsConfig, OpenApiGenerator};
use vitrine_registry::{Discovery, Providers, RegistrationDriver};

/// Build the full application router from the discovered entries
pub fn build_application(config: &AppConfig) -> StartupResult<Router> {
    let mut providers = Providers::new();
    providers
        .insert(config.clone())
        .insert(HealthChecker::new().with_check("api", || HealthStatus::Healthy));

    let entries = Discovery::collect()?;
    info!("discovered {} registration entries", entries.len());

    let registry = RegistrationDriver::new(&providers)
        .with_defaults(config.document_defaults())
        .run(entries)?;

    let (documents, routes) = registry.into_parts();

    let mut router = Router::new();
    if config.docs_enabled {
        // Every document is registered by this point; only now is the UI
        // configured, since it enumerates documents by key.
        let mut docs_config = DocsConfig::default();
        if let Some(title) = &config.default_api_title {
            docs_config = docs_config.with_document_title(title);
        }
        docs_config.validate()?;

        let generator = OpenApiGenerator::new().with_server(
            &format!("http://{}", config.bind_addr()),
            Some("Local server"),
        );

        let mut specs = HashMap::new();
        for document in &documents {
            let spec = generator.generate(
                document,
                routes.routes_for_document(&document.document_id),
            )?;
            specs.insert(document.document_id.clone(), spec);
        }

        router = router.merge(docs_router(docs_config, documents, specs));
    }

    Ok(router
        .merge(routes.into_router())
        .layer(TraceLayer::new_for_http()))
}
