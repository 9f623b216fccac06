//! Integration tests for the documentation endpoints and UIs.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use vitrine_api::{build_application, AppConfig};

async fn get(config: &AppConfig, uri: &str) -> (StatusCode, String) {
    let app = build_application(config).unwrap();
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_each_document_is_served_by_id() {
    let config = AppConfig::default();

    let (status, body) = get(&config, "/openapi/sample-api.json").await;
    assert_eq!(status, StatusCode::OK);
    let spec: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(spec["openapi"], "3.0.3");
    assert_eq!(spec["info"]["title"], "Sample API");
    assert_eq!(spec["info"]["version"], "v1");
    assert!(spec["paths"]["/sample/echo"]["get"].is_object());
    assert!(spec["paths"]["/sample/echo"]["post"].is_object());
    assert!(spec["paths"]["/sample/datetime"]["get"].is_object());

    let (status, body) = get(&config, "/openapi/service-api.json").await;
    assert_eq!(status, StatusCode::OK);
    let spec: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(spec["info"]["title"], "Vitrine Service API");
    assert!(spec["paths"]["/health"]["get"].is_object());
    assert!(spec["paths"]["/datetime"]["get"].is_object());
    assert!(spec["paths"]["/timezone"]["get"].is_object());
}

#[tokio::test]
async fn test_routes_are_documented_under_their_own_section_only() {
    let config = AppConfig::default();

    let (_, body) = get(&config, "/openapi/sample-api.json").await;
    let spec: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(spec["paths"]["/health"].is_null());

    let (_, body) = get(&config, "/openapi/service-api.json").await;
    let spec: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(spec["paths"]["/sample/echo"].is_null());
}

#[tokio::test]
async fn test_configured_default_description_is_merged() {
    let mut config = AppConfig::default();
    config.default_api_description = Some("APIs for the vitrine sample service".to_string());

    // service-api omits a description, so the configured default applies
    let (_, body) = get(&config, "/openapi/service-api.json").await;
    let spec: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        spec["info"]["description"],
        "APIs for the vitrine sample service"
    );

    // sample-api declares its own description, which wins
    let (_, body) = get(&config, "/openapi/sample-api.json").await;
    let spec: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        spec["info"]["description"],
        "Echo and server date-time sample endpoints"
    );
}

#[tokio::test]
async fn test_swagger_ui_enumerates_both_documents() {
    let (status, body) = get(&AppConfig::default(), "/swagger").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("SwaggerUIBundle"));
    assert!(body.contains("/openapi/sample-api.json"));
    assert!(body.contains("/openapi/service-api.json"));
}

#[tokio::test]
async fn test_redoc_and_scalar_pages_are_served() {
    let config = AppConfig::default();

    let (status, body) = get(&config, "/api-docs").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("redoc"));

    let (status, body) = get(&config, "/api-docs?doc=service-api").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/openapi/service-api.json"));

    let (status, body) = get(&config, "/scalar").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("createApiReference"));
}

#[tokio::test]
async fn test_unknown_document_is_404() {
    let (status, _) = get(&AppConfig::default(), "/openapi/nope.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_docs_can_be_disabled() {
    let mut config = AppConfig::default();
    config.docs_enabled = false;

    let (status, _) = get(&config, "/swagger").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&config, "/openapi/sample-api.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // the api endpoints themselves are unaffected
    let (status, _) = get(&config, "/sample/echo").await;
    assert_eq!(status, StatusCode::OK);
}
