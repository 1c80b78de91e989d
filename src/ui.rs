//! Document-serving accessors.
//!
//! The engine does not run an HTTP server; the host mounts two read-only
//! endpoints when [`DocumentationRoutes`] is enabled: one returning the
//! specification JSON, one returning a static HTML viewer page that loads it.

use crate::error::Result;
use crate::specification::OpenAPI;

/// Mount point of the specification JSON endpoint.
pub const SPECIFICATION_PATH: &str = "/documentation/specification";

/// Mount point of the HTML viewer page.
pub const UI_PATH: &str = "/documentation";

/// The paths of the two documentation-serving endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationRoutes {
    pub specification_path: &'static str,
    pub ui_path: &'static str,
}

impl Default for DocumentationRoutes {
    fn default() -> Self {
        Self {
            specification_path: SPECIFICATION_PATH,
            ui_path: UI_PATH,
        }
    }
}

/// The response body of the specification endpoint.
pub fn specification_body(document: &OpenAPI) -> Result<String> {
    let value = document.render()?;
    Ok(serde_json::to_string(&value)?)
}

/// The response body of the viewer endpoint: a static page loading the
/// specification from the given URL.
pub fn render_ui_page(specification_url: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <title>OpenAPI UI</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@4/swagger-ui.css"/>
</head>
<body>
<div id="openapi-ui"></div>
<script src="https://unpkg.com/swagger-ui-dist@4/swagger-ui-bundle.js"></script>
<script src="https://unpkg.com/swagger-ui-dist@4/swagger-ui-standalone-preset.js"></script>
<script>
window.onload = function() {{
  SwaggerUIBundle({{
    url: "{}",
    dom_id: "#openapi-ui",
    deepLinking: true,
    presets: [SwaggerUIBundle.presets.apis, SwaggerUIStandalonePreset],
    layout: "StandaloneLayout"
  }});
}};
</script>
</body>
</html>
"##,
        specification_url
    )
}
