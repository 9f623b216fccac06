/*!
Sample document: echo and server date-time endpoints.

The simplest possible registerable unit: stateless handlers, one
documentation section, no provider dependencies.
*/

use axum::extract::{Json, Query};
use axum::routing::{get, post};
use serde::Deserialize;
use serde_json::json;
use vitrine_registry::{
    ApiDefinition, ApiEntry, BodyDoc, EndpointMapper, OperationDoc, ParamDoc, Providers,
    RegistryResult, ResponseDoc, RoutingSurface,
};

/// Maps the sample endpoints under `/sample`
pub struct SampleApi;

inventory::submit! {
    ApiEntry::new(
        "vitrine_api::endpoints::sample::SampleApi",
        ApiDefinition::new("sample-api", "v1")
            .with_title("Sample API")
            .with_description("Echo and server date-time sample endpoints"),
        SampleApi::from_providers,
    )
}

impl SampleApi {
    fn from_providers(_providers: &Providers) -> RegistryResult<Box<dyn EndpointMapper>> {
        Ok(Box::new(SampleApi))
    }
}

impl EndpointMapper for SampleApi {
    fn map_routes(&self, routes: &mut RoutingSurface<'_>) -> RegistryResult<()> {
        routes.route(
            OperationDoc::get("/sample/echo")
                .operation_id("get_echo")
                .summary("Echoes a message")
                .description("Returns the echoed message from the query string")
                .tag("Echo")
                .with_parameter(
                    ParamDoc::query("message")
                        .with_description("Message to echo")
                        .with_schema(json!({"type": "string", "default": "hello"}))
                        .with_example(json!("hello")),
                )
                .with_response(
                    ResponseDoc::new(200, "Successful response with the echoed message")
                        .with_content("text/plain", json!({"type": "string"}))
                        .with_example(json!("hello")),
                ),
            get(get_echo),
        )?;

        routes.route(
            OperationDoc::post("/sample/echo")
                .operation_id("post_echo")
                .summary("Echoes a message from the request body")
                .description("Returns the echoed message from the JSON request body")
                .tag("Echo")
                .with_request_body(
                    BodyDoc::json(json!({
                        "type": "object",
                        "properties": {"message": {"type": "string"}},
                        "required": ["message"]
                    }))
                    .with_description("Echo request"),
                )
                .with_response(
                    ResponseDoc::new(200, "Echoed message")
                        .with_content("text/plain", json!({"type": "string"})),
                )
                .with_response(ResponseDoc::new(415, "Unsupported request content type")),
            post(post_echo),
        )?;

        routes.route(
            OperationDoc::get("/sample/datetime")
                .operation_id("get_datetime")
                .summary("Gets date time")
                .description("Returns the date-time of the server")
                .tag("DateTime")
                .with_response(
                    ResponseDoc::new(200, "Server date-time").with_content(
                        "application/json",
                        json!({"type": "string", "format": "date-time"}),
                    ),
                ),
            get(get_datetime),
        )?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct EchoQuery {
    message: Option<String>,
}

/// Echo the query-string message as plain text
async fn get_echo(Query(query): Query<EchoQuery>) -> String {
    let message = query.message.unwrap_or_else(|| "hello".to_string());
    tracing::debug!("echoing message of {} byte(s)", message.len());
    message
}

#[derive(Debug, Deserialize)]
struct EchoRequest {
    message: String,
}

/// Echo the JSON body message as plain text
async fn post_echo(Json(request): Json<EchoRequest>) -> String {
    format!("Echo: {}", request.message)
}

/// Return the server's current local date-time, RFC 3339
async fn get_datetime() -> Json<String> {
    Json(chrono::Local::now().to_rfc3339())
}
