/*!
Service document: health, time-zone aware date-time, and the zone list.

Unlike [`SampleApi`](crate::endpoints::sample::SampleApi), this unit has
provider dependencies: the application configuration (for the health
endpoint path) and the health checker. A missing provider aborts startup
as an instantiation error.

The definition deliberately omits a description so the configured default
is merged in.
*/

use crate::config::AppConfig;
use crate::health::{HealthChecker, HealthStatus};
use axum::extract::{Json, Query};
use axum::http::StatusCode;
use axum::routing::get;
use chrono_tz::Tz;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use vitrine_registry::{
    ApiDefinition, ApiEntry, EndpointMapper, OperationDoc, ParamDoc, Providers, RegistryResult,
    ResponseDoc, RoutingSurface,
};

/// Maps the service endpoints: health, date-time, time-zone list
pub struct ServiceApi {
    config: Arc<AppConfig>,
    health: Arc<HealthChecker>,
}

inventory::submit! {
    ApiEntry::new(
        "vitrine_api::endpoints::service::ServiceApi",
        ApiDefinition::new("service-api", "v1").with_title("Vitrine Service API"),
        ServiceApi::from_providers,
    )
}

impl ServiceApi {
    fn from_providers(providers: &Providers) -> RegistryResult<Box<dyn EndpointMapper>> {
        Ok(Box::new(ServiceApi {
            config: providers.require()?,
            health: providers.require()?,
        }))
    }
}

impl EndpointMapper for ServiceApi {
    fn map_routes(&self, routes: &mut RoutingSurface<'_>) -> RegistryResult<()> {
        let checker = Arc::clone(&self.health);
        let health_handler = move || {
            let checker = Arc::clone(&checker);
            async move {
                let report = checker.run();
                let status = if report.status == HealthStatus::Healthy {
                    StatusCode::OK
                } else {
                    StatusCode::SERVICE_UNAVAILABLE
                };
                (status, Json(report))
            }
        };

        routes.route(
            OperationDoc::get(self.config.health_path.as_str())
                .operation_id("api-health")
                .summary("Gets API health")
                .description("Returns the health status of the APIs")
                .tag("Health")
                .with_response(
                    ResponseDoc::new(200, "The service is healthy").with_content(
                        "application/json",
                        json!({"type": "object"}),
                    ),
                )
                .with_response(ResponseDoc::new(503, "One or more checks failed")),
            get(health_handler),
        )?;

        routes.route(
            OperationDoc::get("/datetime")
                .operation_id("get_datetime_for_time_zone")
                .summary("Gets date time")
                .description("Returns the current date-time converted to the requested time zone")
                .tag("DateTime")
                .with_parameter(
                    ParamDoc::query("time_zone_id")
                        .with_description("IANA time-zone identifier; UTC when absent or unknown")
                        .with_example(json!("Asia/Singapore")),
                )
                .with_response(
                    ResponseDoc::new(200, "Current date-time in the requested zone")
                        .with_content(
                            "application/json",
                            json!({"type": "string", "format": "date-time"}),
                        )
                        .with_named_example(
                            "taipei",
                            "Taipei Standard Time",
                            json!("2025-10-04T08:12:59+08:00"),
                        )
                        .with_named_example(
                            "singapore",
                            "Singapore Standard Time",
                            json!("2025-10-04T08:12:59+09:00"),
                        ),
                ),
            get(get_datetime_for_time_zone),
        )?;

        routes.route(
            OperationDoc::get("/timezone")
                .operation_id("list_time_zones")
                .summary("Lists time zones")
                .description("Returns every known IANA time-zone identifier")
                .tag("DateTime")
                .with_response(
                    ResponseDoc::new(200, "Known time-zone identifiers").with_content(
                        "application/json",
                        json!({"type": "array", "items": {"type": "string"}}),
                    ),
                ),
            get(list_time_zones),
        )?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct DateTimeQuery {
    time_zone_id: Option<String>,
}

/// Return the current instant converted to the requested time zone
async fn get_datetime_for_time_zone(Query(query): Query<DateTimeQuery>) -> Json<String> {
    let zone = query
        .time_zone_id
        .as_deref()
        .map(lookup_time_zone)
        .unwrap_or(Tz::UTC);

    let result = chrono::Utc::now().with_timezone(&zone);
    tracing::debug!("returning date-time {} for zone {}", result.to_rfc3339(), zone.name());
    Json(result.to_rfc3339())
}

/// Return every known IANA time-zone identifier
async fn list_time_zones() -> Json<Vec<String>> {
    Json(
        chrono_tz::TZ_VARIANTS
            .iter()
            .map(|zone| zone.name().to_string())
            .collect(),
    )
}

/// Case-insensitive zone lookup, falling back to UTC for unknown ids
fn lookup_time_zone(id: &str) -> Tz {
    id.parse::<Tz>()
        .ok()
        .or_else(|| {
            chrono_tz::TZ_VARIANTS
                .iter()
                .copied()
                .find(|zone| zone.name().eq_ignore_ascii_case(id))
        })
        .unwrap_or(Tz::UTC)
}
