//! Scalar API reference page generation.

use crate::config::DocsConfig;
use vitrine_registry::ApiDocument;

/// Generate the Scalar page listing every registered document as a source
pub fn scalar_html(config: &DocsConfig, documents: &[ApiDocument]) -> String {
    let sources = documents
        .iter()
        .map(|document| {
            serde_json::json!({
                "url": config.spec_url(&document.document_id),
                "title": document.title,
            })
        })
        .collect::<Vec<_>>();
    let configuration = serde_json::json!({ "sources": sources }).to_string();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
</head>
<body>
    <div id="api-reference"></div>
    <script src="https://cdn.jsdelivr.net/npm/@scalar/api-reference"></script>
    <script>
        Scalar.createApiReference('#api-reference', {configuration});
    </script>
</body>
</html>"#,
        title = config.document_title,
        configuration = configuration,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_html_lists_all_sources() {
        let config = DocsConfig::default();
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

        let html = scalar_html(&config, &documents);
        assert!(html.contains("createApiReference"));
        assert!(html.contains("/openapi/sample-api.json"));
        assert!(html.contains("/openapi/service-api.json"));
    }
}
