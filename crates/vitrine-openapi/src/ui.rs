/*!
Axum routes serving the generated documents and the documentation UIs.

Mounted by the host after registration completes, so the UIs always
enumerate the full set of registered documents.
*/

use crate::{
    config::DocsConfig,
    redoc::redoc_html,
    scalar::scalar_html,
    specification::OpenApiSpec,
    swagger::swagger_html,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use vitrine_registry::ApiDocument;

/// Shared state for the documentation routes
#[derive(Clone)]
pub struct DocsState {
    config: DocsConfig,
    documents: Arc<Vec<ApiDocument>>,
    specs: Arc<HashMap<String, OpenApiSpec>>,
}

/// Build the router serving raw documents and the three UIs.
///
/// Routes: the Swagger UI, ReDoc, and Scalar pages at their configured
/// paths, plus `{spec_path_prefix}/{document_id}.json` per document.
pub fn docs_router(
    config: DocsConfig,
    documents: Vec<ApiDocument>,
    specs: HashMap<String, OpenApiSpec>,
) -> Router {
    let spec_route = format!("{}/:spec", config.spec_path_prefix.trim_end_matches('/'));
    let swagger_path = config.swagger_path.clone();
    let redoc_path = config.redoc_path.clone();
    let scalar_path = config.scalar_path.clone();

    tracing::info!(
        "serving {} api document(s) at {}",
        documents.len(),
        swagger_path
    );

    let state = DocsState {
        config,
        documents: Arc::new(documents),
        specs: Arc::new(specs),
    };

    Router::new()
        .route(&swagger_path, get(serve_swagger))
        .route(&redoc_path, get(serve_redoc))
        .route(&scalar_path, get(serve_scalar))
        .route(&spec_route, get(serve_spec))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the Swagger UI index page
async fn serve_swagger(State(state): State<DocsState>) -> Html<String> {
    Html(swagger_html(&state.config, &state.documents))
}

/// Serve a raw document as `{document_id}.json`
async fn serve_spec(
    State(state): State<DocsState>,
    Path(spec): Path<String>,
) -> Result<Json<OpenApiSpec>, (StatusCode, &'static str)> {
    let document_id = spec
        .strip_suffix(".json")
        .ok_or((StatusCode::NOT_FOUND, "Not Found"))?;

    state
        .specs
        .get(document_id)
        .map(|spec| Json(spec.clone()))
        .ok_or((StatusCode::NOT_FOUND, "Not Found"))
}

#[derive(Debug, Deserialize)]
struct RedocQuery {
    /// Document to render; the first registered document when absent
    doc: Option<String>,
}

/// Serve the ReDoc page for the selected document
async fn serve_redoc(
    State(state): State<DocsState>,
    Query(query): Query<RedocQuery>,
) -> Result<Html<String>, (StatusCode, &'static str)> {
    let document = match &query.doc {
        Some(id) => state
            .documents
            .iter()
            .find(|document| document.document_id == *id),
        None => state.documents.first(),
    };

    document
        .map(|document| Html(redoc_html(&state.config, document)))
        .ok_or((StatusCode::NOT_FOUND, "Not Found"))
}

/// Serve the Scalar page
async fn serve_scalar(State(state): State<DocsState>) -> Html<String> {
    Html(scalar_html(&state.config, &state.documents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let documents = vec![
            ApiDocument {
                document_id: "sample-api".to_string(),
                title: "Sample API".to_string(),
                description: None,
                version: "v1".to_string(),
                declared_by: "demo::SampleApi".to_string(),
            },
            ApiDocument {
                document_id: "service-api".to_string(),
                title: "Service API".to_string(),
                description: None,
                version: "v1".to_string(),
                declared_by: "demo::ServiceApi".to_string(),
            },
        ];
        let mut specs = HashMap::new();
        for document in &documents {
            specs.insert(
                document.document_id.clone(),
                OpenApiSpec::new(&document.title, &document.version),
            );
        }
        docs_router(DocsConfig::default(), documents, specs)
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_serves_raw_documents_by_id() {
        let (status, body) = get_body(test_router(), "/openapi/sample-api.json").await;

        assert_eq!(status, StatusCode::OK);
        let spec: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(spec["openapi"], "3.0.3");
        assert_eq!(spec["info"]["title"], "Sample API");
    }

    #[tokio::test]
    async fn test_unknown_document_is_404() {
        let (status, _) = get_body(test_router(), "/openapi/nope.json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // missing .json suffix is not a document either
        let (status, _) = get_body(test_router(), "/openapi/sample-api").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_swagger_page_lists_every_document() {
        let (status, body) = get_body(test_router(), "/swagger").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/openapi/sample-api.json"));
        assert!(body.contains("/openapi/service-api.json"));
    }

    #[tokio::test]
    async fn test_redoc_defaults_to_the_first_document() {
        let (status, body) = get_body(test_router(), "/api-docs").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/openapi/sample-api.json"));

        let (_, body) = get_body(test_router(), "/api-docs?doc=service-api").await;
        assert!(body.contains("/openapi/service-api.json"));
    }

    #[tokio::test]
    async fn test_scalar_page_is_served() {
        let (status, body) = get_body(test_router(), "/scalar").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("createApiReference"));
    }
}
