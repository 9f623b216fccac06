/*!
Folds registered documents and their route documentation into OpenAPI
specifications, one per document.
*/

use crate::{
    error::{OpenApiError, OpenApiResult},
    specification::{
        Example, MediaType, OpenApiSpec, Operation, Parameter, RequestBody, Response, Schema,
        Server,
    },
};
use std::collections::HashMap;
use vitrine_registry::{
    ApiDocument, BodyDoc, HttpMethod, OperationDoc, ParamDoc, RegisteredRoute, ResponseDoc,
};

/// OpenAPI specification generator
#[derive(Debug, Clone, Default)]
pub struct OpenApiGenerator {
    servers: Vec<Server>,
}

impl OpenApiGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a server entry emitted into every generated document
    pub fn with_server(mut self, url: &str, description: Option<&str>) -> Self {
        self.servers.push(Server {
            url: url.to_string(),
            description: description.map(|s| s.to_string()),
        });
        self
    }

    /// Generate the OpenAPI document for one registered section and the
    /// routes attributed to it.
    pub fn generate<'r>(
        &self,
        document: &ApiDocument,
        routes: impl IntoIterator<Item = &'r RegisteredRoute>,
    ) -> OpenApiResult<OpenApiSpec> {
        let mut spec = OpenApiSpec::new(&document.title, &document.version);
        spec.info.description = document.description.clone();
        spec.servers = self.servers.clone();

        for route in routes {
            self.process_route(&mut spec, &route.doc)?;
        }

        Ok(spec)
    }

    /// Add one route's operation to the specification
    fn process_route(&self, spec: &mut OpenApiSpec, doc: &OperationDoc) -> OpenApiResult<()> {
        let operation = self.create_operation(doc)?;
        let path_item = spec.paths.entry(doc.path.clone()).or_default();

        let slot = match doc.method {
            HttpMethod::GET => &mut path_item.get,
            HttpMethod::POST => &mut path_item.post,
            HttpMethod::PUT => &mut path_item.put,
            HttpMethod::PATCH => &mut path_item.patch,
            HttpMethod::DELETE => &mut path_item.delete,
            HttpMethod::OPTIONS => &mut path_item.options,
            HttpMethod::HEAD => &mut path_item.head,
        };
        *slot = Some(operation);

        Ok(())
    }

    fn create_operation(&self, doc: &OperationDoc) -> OpenApiResult<Operation> {
        let parameters = doc
            .parameters
            .iter()
            .map(|param| self.create_parameter(param))
            .collect::<OpenApiResult<Vec<_>>>()?;

        let request_body = doc
            .request_body
            .as_ref()
            .map(|body| self.create_request_body(body))
            .transpose()?;

        let mut responses = HashMap::new();
        for response in &doc.responses {
            responses.insert(response.status.to_string(), self.create_response(response)?);
        }

        Ok(Operation {
            tags: doc.tags.clone(),
            summary: doc.summary.clone(),
            description: doc.description.clone(),
            operation_id: doc.operation_id.clone(),
            parameters,
            request_body,
            responses,
        })
    }

    fn create_parameter(&self, param: &ParamDoc) -> OpenApiResult<Parameter> {
        Ok(Parameter {
            name: param.name.clone(),
            location: param.location.as_str().to_string(),
            description: param.description.clone(),
            required: Some(param.required),
            schema: Some(self.parse_schema(&param.schema, &param.name)?),
            example: param.example.clone(),
        })
    }

    fn create_request_body(&self, body: &BodyDoc) -> OpenApiResult<RequestBody> {
        let mut content = HashMap::new();
        content.insert(
            body.content_type.clone(),
            MediaType {
                schema: Some(self.parse_schema(&body.schema, "request body")?),
                ..MediaType::default()
            },
        );

        Ok(RequestBody {
            description: body.description.clone(),
            content,
            required: Some(body.required),
        })
    }

    fn create_response(&self, response: &ResponseDoc) -> OpenApiResult<Response> {
        let mut content = HashMap::new();
        if let Some(content_type) = &response.content_type {
            let mut examples = HashMap::new();
            for example in &response.examples {
                examples.insert(
                    example.name.clone(),
                    Example {
                        summary: example.summary.clone(),
                        value: Some(example.value.clone()),
                    },
                );
            }

            content.insert(
                content_type.clone(),
                MediaType {
                    schema: response
                        .schema
                        .as_ref()
                        .map(|schema| self.parse_schema(schema, "response"))
                        .transpose()?,
                    example: response.example.clone(),
                    examples,
                },
            );
        }

        Ok(Response {
            description: response.description.clone(),
            content,
        })
    }

    /// Interpret a JSON Schema fragment carried on a route descriptor
    fn parse_schema(&self, fragment: &serde_json::Value, context: &str) -> OpenApiResult<Schema> {
        serde_json::from_value(fragment.clone()).map_err(|e| {
            OpenApiError::schema_error(format!("invalid schema for {}: {}", context, e))
        })
    }
}
