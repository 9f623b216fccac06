/*!
Swagger UI page generation.

The page is a single generated HTML document loading the published
Swagger UI bundle and enumerating every registered document by key.
*/

use crate::config::DocsConfig;
use vitrine_registry::ApiDocument;

/// Generate the Swagger UI index page for the registered documents
pub fn swagger_html(config: &DocsConfig, documents: &[ApiDocument]) -> String {
    let urls = documents
        .iter()
        .map(|document| {
            serde_json::json!({
                "url": config.spec_url(&document.document_id),
                "name": document.title,
            })
        })
        .collect::<Vec<_>>();
    let urls_json = serde_json::Value::Array(urls).to_string();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
    <style>
        html {{
            box-sizing: border-box;
            overflow-y: scroll;
        }}

        *, *:before, *:after {{
            box-sizing: inherit;
        }}

        body {{
            margin: 0;
            background: #fafafa;
        }}
    </style>
</head>
<body>
    <div id="swagger-ui"></div>

    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {{
            const ui = SwaggerUIBundle({{
                urls: {urls},
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout",
                validatorUrl: null,
                tryItOutEnabled: true,
                filter: true
            }});

            window.ui = ui;
        }};
    </script>
</body>
</html>"#,
        title = config.document_title,
        urls = urls_json,
    )
}
