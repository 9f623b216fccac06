/*!
The routing surface endpoint mappers register against.

Routes are recorded before they reach the underlying router so that
overlapping registrations are rejected with a clear error instead of the
last one silently winning. Each recorded route carries the operation
documentation that later feeds the generated API documents.
*/

use crate::error::{RegistryError, RegistryResult};
use axum::routing::MethodRouter;
use axum::Router;
use serde_json::Value;
use std::collections::HashSet;

/// HTTP methods accepted by the routing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
    OPTIONS,
    HEAD,
}

impl HttpMethod {
    /// Get the method as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::OPTIONS => "OPTIONS",
            HttpMethod::HEAD => "HEAD",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Location of an operation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Query,
    Path,
    Header,
}

impl ParamLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamLocation::Query => "query",
            ParamLocation::Path => "path",
            ParamLocation::Header => "header",
        }
    }
}

/// Documentation for one operation parameter
#[derive(Debug, Clone)]
pub struct ParamDoc {
    pub name: String,
    pub location: ParamLocation,
    pub description: Option<String>,
    pub required: bool,
    /// JSON Schema fragment for the parameter, e.g. `{"type": "string"}`
    pub schema: Value,
    pub example: Option<Value>,
}

impl ParamDoc {
    /// Create a parameter documented at the given location
    pub fn new(name: impl Into<String>, location: ParamLocation) -> Self {
        Self {
            name: name.into(),
            location,
            description: None,
            required: location == ParamLocation::Path,
            schema: serde_json::json!({"type": "string"}),
            example: None,
        }
    }

    /// Create a query parameter (optional by default)
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(name, ParamLocation::Query)
    }

    /// Create a path parameter (always required)
    pub fn path(name: impl Into<String>) -> Self {
        Self::new(name, ParamLocation::Path)
    }

    /// Set the parameter description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the parameter required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Replace the schema fragment
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = schema;
        self
    }

    /// Set an example value
    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }
}

/// Documentation for a request body
#[derive(Debug, Clone)]
pub struct BodyDoc {
    pub description: Option<String>,
    pub content_type: String,
    /// JSON Schema fragment for the body
    pub schema: Value,
    pub required: bool,
}

impl BodyDoc {
    /// Create a required JSON body with the given schema fragment
    pub fn json(schema: Value) -> Self {
        Self {
            description: None,
            content_type: "application/json".to_string(),
            schema,
            required: true,
        }
    }

    /// Set the body description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A named example attached to a response
#[derive(Debug, Clone)]
pub struct NamedExample {
    pub name: String,
    pub summary: Option<String>,
    pub value: Value,
}

/// Documentation for one response of an operation
#[derive(Debug, Clone)]
pub struct ResponseDoc {
    pub status: u16,
    pub description: String,
    pub content_type: Option<String>,
    /// JSON Schema fragment for the response body
    pub schema: Option<Value>,
    pub example: Option<Value>,
    pub examples: Vec<NamedExample>,
}

impl ResponseDoc {
    /// Create a response for the given status code
    pub fn new(status: u16, description: impl Into<String>) -> Self {
        Self {
            status,
            description: description.into(),
            content_type: None,
            schema: None,
            example: None,
            examples: Vec::new(),
        }
    }

    /// Describe the response content
    pub fn with_content(mut self, content_type: impl Into<String>, schema: Value) -> Self {
        self.content_type = Some(content_type.into());
        self.schema = Some(schema);
        self
    }

    /// Set an example value
    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    /// Add a named example
    pub fn with_named_example(
        mut self,
        name: impl Into<String>,
        summary: impl Into<String>,
        value: Value,
    ) -> Self {
        self.examples.push(NamedExample {
            name: name.into(),
            summary: Some(summary.into()),
            value,
        });
        self
    }
}

/// Documentation carried by a registered route, folded into the generated
/// API document for the owning section.
#[derive(Debug, Clone)]
pub struct OperationDoc {
    pub method: HttpMethod,
    pub path: String,
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub parameters: Vec<ParamDoc>,
    pub request_body: Option<BodyDoc>,
    pub responses: Vec<ResponseDoc>,
}

impl OperationDoc {
    /// Create an operation for the given method and path
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            operation_id: None,
            summary: None,
            description: None,
            tags: Vec::new(),
            parameters: Vec::new(),
            request_body: None,
            responses: Vec::new(),
        }
    }

    /// Create a GET operation
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::GET, path)
    }

    /// Create a POST operation
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::POST, path)
    }

    /// Set the unique operation id
    pub fn operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }

    /// Set the operation summary
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the operation description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a grouping tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add a parameter
    pub fn with_parameter(mut self, parameter: ParamDoc) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the request body
    pub fn with_request_body(mut self, body: BodyDoc) -> Self {
        self.request_body = Some(body);
        self
    }

    /// Add a response
    pub fn with_response(mut self, response: ResponseDoc) -> Self {
        self.responses.push(response);
        self
    }
}

/// A route recorded on the routing surface: its documentation plus the
/// handler that serves it.
#[derive(Debug)]
pub struct RegisteredRoute {
    /// Document the route is attributed to, when the mapper declared one
    pub document_id: Option<String>,
    pub doc: OperationDoc,
    pub handler: MethodRouter,
}

/// Accumulates routes from every mapper and rejects overlaps before they
/// reach the underlying router.
#[derive(Debug, Default)]
pub struct RouteSet {
    routes: Vec<RegisteredRoute>,
    claimed: HashSet<(HttpMethod, String)>,
}

impl RouteSet {
    /// Create an empty route set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a route, rejecting a duplicate (method, path) claim
    pub fn register(
        &mut self,
        document_id: Option<&str>,
        doc: OperationDoc,
        handler: MethodRouter,
    ) -> RegistryResult<()> {
        let key = (doc.method, doc.path.clone());
        if !self.claimed.insert(key) {
            return Err(RegistryError::route_conflict(doc.method.as_str(), &doc.path));
        }
        self.routes.push(RegisteredRoute {
            document_id: document_id.map(str::to_string),
            doc,
            handler,
        });
        Ok(())
    }

    /// All recorded routes, in registration order
    pub fn routes(&self) -> &[RegisteredRoute] {
        &self.routes
    }

    /// Routes attributed to the given document
    pub fn routes_for_document<'a>(
        &'a self,
        document_id: &'a str,
    ) -> impl Iterator<Item = &'a RegisteredRoute> {
        self.routes
            .iter()
            .filter(move |route| route.document_id.as_deref() == Some(document_id))
    }

    /// Number of recorded routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Lower every recorded route into an axum router.
    ///
    /// Method routers for the same path are merged; the collision check in
    /// [`RouteSet::register`] guarantees no method+path is claimed twice.
    pub fn into_router(self) -> Router {
        let mut router = Router::new();
        for route in self.routes {
            router = router.route(&route.doc.path, route.handler);
        }
        router
    }
}

/// The routing surface handed to an endpoint mapper. Routes registered
/// through it are attributed to the mapper's document.
pub struct RoutingSurface<'a> {
    document_id: Option<&'a str>,
    routes: &'a mut RouteSet,
}

impl<'a> RoutingSurface<'a> {
    pub(crate) fn new(document_id: Option<&'a str>, routes: &'a mut RouteSet) -> Self {
        Self {
            document_id,
            routes,
        }
    }

    /// Document the surface attributes routes to
    pub fn document_id(&self) -> Option<&str> {
        self.document_id
    }

    /// Register a route with its documentation and handler
    pub fn route(&mut self, doc: OperationDoc, handler: MethodRouter) -> RegistryResult<&mut Self> {
        self.routes.register(self.document_id, doc, handler)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn ok_handler() -> &'static str {
        "ok"
    }

    #[test]
    fn test_operation_doc_builder() {
        let doc = OperationDoc::get("/pets")
            .operation_id("list_pets")
            .summary("Lists pets")
            .tag("Pets")
            .with_parameter(ParamDoc::query("limit").with_description("Page size"))
            .with_response(ResponseDoc::new(200, "A list of pets"));

        assert_eq!(doc.method, HttpMethod::GET);
        assert_eq!(doc.path, "/pets");
        assert_eq!(doc.operation_id.as_deref(), Some("list_pets"));
        assert_eq!(doc.tags, vec!["Pets"]);
        assert_eq!(doc.parameters.len(), 1);
        assert_eq!(doc.responses[0].status, 200);
    }

    #[test]
    fn test_route_conflict_is_rejected() {
        let mut routes = RouteSet::new();
        routes
            .register(None, OperationDoc::get("/health"), get(ok_handler))
            .unwrap();

        let err = routes
            .register(None, OperationDoc::get("/health"), get(ok_handler))
            .unwrap_err();

        assert!(matches!(err, RegistryError::RouteConflict { .. }));
        assert!(err.to_string().contains("GET /health"));
        assert_eq!(routes.len(), 1);
    }

    #[test]
    fn test_same_path_different_methods_is_allowed() {
        let mut routes = RouteSet::new();
        routes
            .register(None, OperationDoc::get("/pets"), get(ok_handler))
            .unwrap();
        routes
            .register(
                None,
                OperationDoc::post("/pets"),
                axum::routing::post(ok_handler),
            )
            .unwrap();

        assert_eq!(routes.len(), 2);
    }

    #[test]
    fn test_routes_for_document_filters_by_owner() {
        let mut routes = RouteSet::new();
        routes
            .register(Some("pets-api"), OperationDoc::get("/pets"), get(ok_handler))
            .unwrap();
        routes
            .register(None, OperationDoc::get("/misc"), get(ok_handler))
            .unwrap();

        let owned: Vec<_> = routes.routes_for_document("pets-api").collect();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].doc.path, "/pets");
    }

    #[tokio::test]
    async fn test_into_router_serves_recorded_routes() {
        let mut routes = RouteSet::new();
        routes
            .register(None, OperationDoc::get("/ping"), get(ok_handler))
            .unwrap();

        let router = routes.into_router();
        let response = router
            .oneshot(
                axum::http::Request::builder()
                    .uri("/ping")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"ok");
    }
}
