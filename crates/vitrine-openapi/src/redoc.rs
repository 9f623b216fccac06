//! ReDoc page generation. ReDoc renders a single document; the page is
//! generated for whichever document the caller selects.

use crate::config::DocsConfig;
use vitrine_registry::ApiDocument;

/// Generate the ReDoc page for one document
pub fn redoc_html(config: &DocsConfig, document: &ApiDocument) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            margin: 0;
            padding: 0;
        }}
    </style>
</head>
<body>
    <redoc spec-url="{spec_url}"></redoc>
    <script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
</body>
</html>"#,
        title = config.document_title,
        spec_url = config.spec_url(&document.document_id),
    )
}
