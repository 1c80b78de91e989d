//! Documentation options and the document assembler.
//!
//! [`OpenApiBuilder`] owns the document, the converter registry and the
//! configured options. One call to [`OpenApiBuilder::add_routes`] walks the
//! host's route table and fills the document; the pass runs once, after which
//! the document is only read.

use std::str::FromStr;

use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::Value;

use crate::context::DocumentationContext;
use crate::converters::{
    Conversion, ConverterRegistry, DefaultConverter, ParameterConverter, SchemaConverter,
};
use crate::documentation::Documentation;
use crate::error::{Error, Result};
use crate::routing::{Method, Route, RouteSource};
use crate::specification::{
    Info, MediaType, OpenAPI, Operation, Parameter, PathItem, RequestBody, Response, Responses,
    SchemaOrRef, Server, Tag,
};
use crate::ui::DocumentationRoutes;

/// Controls what happens when no converter matches a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrictMode {
    /// Raise the missing-converter error and abort the build.
    FailOnError,
    /// Log a warning and substitute a placeholder schema.
    #[default]
    ShowWarnings,
}

impl FromStr for StrictMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "fail-on-error" | "FAIL_ON_ERROR" => Ok(StrictMode::FailOnError),
            "show-warnings" | "SHOW_WARNINGS" => Ok(StrictMode::ShowWarnings),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown strict mode `{}`",
                other
            ))),
        }
    }
}

/// What a response description falls back to when the documentation record
/// declares none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseDescriptionFallback {
    /// Use an empty string.
    #[default]
    Empty,
    /// Use the route handler's own description.
    RouteDescription,
}

/// Configuration surface of the document build.
pub struct DocumentationOptions {
    /// Emit operations for HEAD methods.
    pub include_head_response: bool,
    /// Emit operations for OPTIONS methods.
    pub include_options_response: bool,
    /// Expose the built-in documentation-serving routes.
    pub include_documentation_routes: bool,
    pub server_url: String,
    pub request_content_type: String,
    pub response_content_type: String,
    pub strict_mode: StrictMode,
    pub response_description_fallback: ResponseDescriptionFallback,
    /// Register the converters for the built-in field model.
    pub include_builtin_converters: bool,
    /// Extra schema converters, checked before the built-in set.
    pub schema_converters: Vec<Box<dyn SchemaConverter>>,
    /// Extra default-value converters, checked before the built-in set.
    pub default_converters: Vec<Box<dyn DefaultConverter>>,
    /// Extra path-parameter converters, checked before the built-in set.
    pub parameter_converters: Vec<Box<dyn ParameterConverter>>,
}

impl Default for DocumentationOptions {
    fn default() -> Self {
        Self {
            include_head_response: true,
            include_options_response: true,
            include_documentation_routes: true,
            server_url: "/".to_string(),
            request_content_type: "application/json".to_string(),
            response_content_type: "application/json".to_string(),
            strict_mode: StrictMode::default(),
            response_description_fallback: ResponseDescriptionFallback::default(),
            include_builtin_converters: true,
            schema_converters: Vec::new(),
            default_converters: Vec::new(),
            parameter_converters: Vec::new(),
        }
    }
}

/// Assembles the OpenAPI document from the host's route table.
pub struct OpenApiBuilder {
    specification: OpenAPI,
    registry: ConverterRegistry,
    options: DocumentationOptions,
}

impl OpenApiBuilder {
    /// Create a builder with default options.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self::with_options(title, version, DocumentationOptions::default())
    }

    /// Create a builder, moving the user-supplied converters out of the options
    /// and into the registry ahead of the built-in sets.
    pub fn with_options(
        title: impl Into<String>,
        version: impl Into<String>,
        mut options: DocumentationOptions,
    ) -> Self {
        let mut registry = ConverterRegistry::new();
        for converter in options.schema_converters.drain(..) {
            registry.schema.register(converter);
        }
        for converter in options.default_converters.drain(..) {
            registry.defaults.register(converter);
        }
        for converter in options.parameter_converters.drain(..) {
            registry.parameter.register(converter);
        }
        if options.include_builtin_converters {
            registry.schema.register_builtins();
        }
        registry.defaults.register_builtins();
        registry.parameter.register_builtins();

        let mut specification = OpenAPI::new(Info::new(title, version));
        specification.servers.push(Server::new(options.server_url.clone()));

        Self {
            specification,
            registry,
            options,
        }
    }

    pub fn options(&self) -> &DocumentationOptions {
        &self.options
    }

    pub fn specification(&self) -> &OpenAPI {
        &self.specification
    }

    /// Mutable access to the document, e.g. to enrich `info` or add security
    /// schemes before serving.
    pub fn specification_mut(&mut self) -> &mut OpenAPI {
        &mut self.specification
    }

    /// Render the document to its JSON-compatible value tree.
    pub fn render(&self) -> Result<Value> {
        self.specification.render()
    }

    /// The mount points for the document-serving endpoints, when enabled.
    pub fn documentation_routes(&self) -> Option<DocumentationRoutes> {
        self.options
            .include_documentation_routes
            .then(DocumentationRoutes::default)
    }

    /// Walk the route table once and assemble the document.
    pub fn add_routes(&mut self, source: &(impl RouteSource + ?Sized)) -> Result<()> {
        for route in source.routes() {
            self.add_route(route)?;
        }
        Ok(())
    }

    /// Process a single route. Routes without attached documentation are
    /// skipped.
    pub fn add_route(&mut self, route: &Route) -> Result<()> {
        let documentation = match &route.documentation {
            Some(documentation) => documentation,
            None => {
                debug!("route `{}` carries no documentation, skipping", route.rule);
                return Ok(());
            }
        };

        let tags = self.merge_tags(documentation, route);

        let mut context = DocumentationContext::new();
        context.enter(documentation)?;
        let result = self.build_route(route, documentation, &tags, &context);
        context.exit();
        result
    }

    /// Merge route tags with the owning resource's default tags, and keep the
    /// document's tag list sorted by name.
    fn merge_tags(&mut self, documentation: &Documentation, route: &Route) -> Vec<String> {
        let mut tags = documentation.tags.clone();
        if let Some(resource) = &route.resource {
            for tag in &resource.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        for tag in &tags {
            if !self.specification.tags.iter().any(|t| &t.name == tag) {
                self.specification.tags.push(Tag::new(tag.clone()));
            }
        }
        self.specification.tags.sort_by(|a, b| a.name.cmp(&b.name));
        tags
    }

    fn build_route(
        &mut self,
        route: &Route,
        documentation: &Documentation,
        tags: &[String],
        context: &DocumentationContext<'_>,
    ) -> Result<()> {
        let path = route.normalized_rule();
        debug!("documenting `{}`", path);

        let registry = &self.registry;
        let options = &self.options;
        let mut cx = Conversion {
            schemas: &mut self.specification.components.schemas,
            options,
            context,
        };

        // Path-level parameters: explicit ones first, then one per path
        // variable, typed through the parameter registry.
        let mut path_parameters = documentation.parameters.clone();
        for argument in &route.arguments {
            let schema = registry.process_parameter(&*argument.marker, &argument.name, &mut cx)?;
            let mut parameter = Parameter::new(argument.name.clone(), "path");
            parameter.schema = Some(SchemaOrRef::Schema(schema));
            path_parameters.push(parameter);
        }

        let response_description = documentation.description.clone().unwrap_or_else(|| {
            match options.response_description_fallback {
                ResponseDescriptionFallback::Empty => String::new(),
                ResponseDescriptionFallback::RouteDescription => {
                    route.description.clone().unwrap_or_default()
                }
            }
        });

        let mut responses = Responses::default();
        for (status, declared) in &documentation.responses {
            let node = registry.process_schema(&**declared, &format!("{}.{}", path, status), &mut cx)?;
            let mut content = IndexMap::new();
            content.insert(options.response_content_type.clone(), MediaType::of(node));
            responses.values.insert(
                status.clone(),
                Response {
                    description: response_description.clone(),
                    content,
                },
            );
        }

        let request_body = match &documentation.input_schema {
            Some(declared) => {
                let node = registry.process_schema(&**declared, &path, &mut cx)?;
                let mut content = IndexMap::new();
                content.insert(options.request_content_type.clone(), MediaType::of(node));
                Some(RequestBody {
                    description: None,
                    content,
                    required: false,
                })
            }
            None => None,
        };

        // Query parameters: resolve the query schema to an object schema and
        // promote each property, carrying its own required flag.
        let mut query_parameters = Vec::new();
        if let Some(declared) = &documentation.query_schema {
            let node = registry.process_schema(&**declared, &path, &mut cx)?;
            let object = match &node {
                SchemaOrRef::Reference(reference) => reference.resolve(cx.schemas).cloned(),
                SchemaOrRef::Schema(schema) => Some(schema.clone()),
            };
            match object {
                Some(schema) => {
                    for (name, property) in &schema.properties {
                        let mut parameter = Parameter::new(name.clone(), "query");
                        parameter.required = property.required();
                        parameter.schema = Some(property.clone());
                        query_parameters.push(parameter);
                    }
                }
                None => warn!("query schema of `{}` did not resolve to an object schema", path),
            }
        }

        let path_item = self
            .specification
            .paths
            .values
            .entry(path)
            .or_insert_with(PathItem::default);
        for parameter in path_parameters {
            let known = path_item
                .parameters
                .iter()
                .any(|p| p.name == parameter.name && p.location == parameter.location);
            if !known {
                path_item.parameters.push(parameter);
            }
        }

        for method in Method::ALL {
            if !route.methods.contains(&method) {
                continue;
            }
            if method == Method::Head && !self.options.include_head_response {
                continue;
            }
            if method == Method::Options && !self.options.include_options_response {
                continue;
            }
            let operation = Operation {
                tags: tags.to_vec(),
                summary: documentation.summary.clone(),
                description: documentation.description.clone(),
                parameters: query_parameters.clone(),
                request_body: request_body.clone(),
                responses: responses.clone(),
                ..Operation::default()
            };
            let slot = match method {
                Method::Get => &mut path_item.get,
                Method::Put => &mut path_item.put,
                Method::Post => &mut path_item.post,
                Method::Delete => &mut path_item.delete,
                Method::Options => &mut path_item.options,
                Method::Head => &mut path_item.head,
            };
            *slot = Some(operation);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documentation::ResourceOptions;
    use crate::fields::{Attribute, Integer, ObjectSchema, Text};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn documented_route(rule: &str, methods: impl IntoIterator<Item = Method>) -> Route {
        Route::new(rule, methods).document(Documentation::empty())
    }

    #[test]
    fn test_default_options() {
        let options = DocumentationOptions::default();
        assert!(options.include_head_response);
        assert!(options.include_options_response);
        assert!(options.include_documentation_routes);
        assert!(options.include_builtin_converters);
        assert_eq!(options.server_url, "/");
        assert_eq!(options.request_content_type, "application/json");
        assert_eq!(options.response_content_type, "application/json");
        assert_eq!(options.strict_mode, StrictMode::ShowWarnings);
        assert_eq!(
            options.response_description_fallback,
            ResponseDescriptionFallback::Empty
        );
    }

    #[test]
    fn test_strict_mode_parsing() {
        assert_eq!(
            "fail-on-error".parse::<StrictMode>().unwrap(),
            StrictMode::FailOnError
        );
        assert_eq!(
            "SHOW_WARNINGS".parse::<StrictMode>().unwrap(),
            StrictMode::ShowWarnings
        );
        let err = "sometimes".parse::<StrictMode>().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_document_defaults() {
        let builder = OpenApiBuilder::new("Open API REST documentation", "1.0.0");
        let value = builder.render().unwrap();
        assert_eq!(value["openapi"], json!("3.0.3"));
        assert_eq!(value["info"]["title"], json!("Open API REST documentation"));
        assert_eq!(value["info"]["version"], json!("1.0.0"));
        assert_eq!(value["servers"], json!([{"url": "/"}]));
    }

    #[test]
    fn test_route_without_documentation_is_skipped() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let routes = vec![Route::new("/route", [Method::Get])];
        builder.add_routes(&routes).unwrap();
        assert_eq!(builder.render().unwrap()["paths"], json!({}));
    }

    #[test]
    fn test_route_with_empty_documentation() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let routes = vec![documented_route("/route", [Method::Get])];
        builder.add_routes(&routes).unwrap();
        let value = builder.render().unwrap();
        assert_eq!(value["paths"]["/route"], json!({"get": {"responses": {}}}));
    }

    #[test]
    fn test_head_and_options_emitted_by_default() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let routes = vec![documented_route(
            "/route",
            [Method::Get, Method::Head, Method::Options],
        )];
        builder.add_routes(&routes).unwrap();
        let path = &builder.render().unwrap()["paths"]["/route"];
        assert_eq!(path["get"], json!({"responses": {}}));
        assert_eq!(path["head"], json!({"responses": {}}));
        assert_eq!(path["options"], json!({"responses": {}}));
    }

    #[test]
    fn test_head_suppressed_by_configuration() {
        let mut options = DocumentationOptions::default();
        options.include_head_response = false;
        let mut builder = OpenApiBuilder::with_options("Test API", "1.0.0", options);
        let routes = vec![documented_route("/route", [Method::Get, Method::Head])];
        builder.add_routes(&routes).unwrap();
        let path = &builder.render().unwrap()["paths"]["/route"];
        assert_eq!(path["get"], json!({"responses": {}}));
        assert!(path.get("head").is_none());
    }

    #[test]
    fn test_options_suppressed_by_configuration() {
        let mut options = DocumentationOptions::default();
        options.include_options_response = false;
        let mut builder = OpenApiBuilder::with_options("Test API", "1.0.0", options);
        let routes = vec![documented_route("/route", [Method::Get, Method::Options])];
        builder.add_routes(&routes).unwrap();
        let path = &builder.render().unwrap()["paths"]["/route"];
        assert!(path.get("options").is_none());
    }

    #[test]
    fn test_path_parameters_derived_from_rule() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let routes = vec![documented_route("/users/<int:user_id>", [Method::Get])];
        builder.add_routes(&routes).unwrap();
        let value = builder.render().unwrap();
        let path = &value["paths"]["/users/{user_id}"];
        assert_eq!(
            path["parameters"],
            json!([{
                "in": "path",
                "name": "user_id",
                "schema": {"type": "number", "format": "integer"},
                "required": true,
            }])
        );
    }

    #[test]
    fn test_explicit_parameters_listed_before_path_parameters() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let documentation = Documentation::builder()
            .parameter(Parameter::new("X-Request-Id", "header"))
            .build();
        let routes = vec![Route::new("/users/<int:user_id>", [Method::Get]).document(documentation)];
        builder.add_routes(&routes).unwrap();
        let value = builder.render().unwrap();
        let parameters = &value["paths"]["/users/{user_id}"]["parameters"];
        assert_eq!(parameters[0]["name"], json!("X-Request-Id"));
        assert_eq!(parameters[1]["name"], json!("user_id"));
    }

    #[test]
    fn test_response_schema_lands_in_components_and_content() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let documentation = Documentation::builder()
            .response(
                200,
                ObjectSchema::new("User")
                    .attribute("id", Attribute::new(Integer))
                    .attribute("name", Attribute::new(Text)),
            )
            .build();
        let routes = vec![Route::new("/users", [Method::Get]).document(documentation)];
        builder.add_routes(&routes).unwrap();

        let value = builder.render().unwrap();
        let response = &value["paths"]["/users"]["get"]["responses"]["200"];
        assert_eq!(response["description"], json!(""));
        assert_eq!(
            response["content"]["application/json"]["schema"],
            json!({"$ref": "#/components/schemas/User"})
        );
        assert_eq!(
            value["components"]["schemas"]["User"]["required"],
            json!(["id", "name"])
        );
    }

    #[test]
    fn test_request_schema_becomes_request_body() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let documentation = Documentation::builder()
            .input_schema(ObjectSchema::new("CreateUser").attribute("name", Attribute::new(Text)))
            .build();
        let routes = vec![Route::new("/users", [Method::Post]).document(documentation)];
        builder.add_routes(&routes).unwrap();

        let value = builder.render().unwrap();
        let body = &value["paths"]["/users"]["post"]["requestBody"];
        assert_eq!(
            body["content"]["application/json"]["schema"],
            json!({"$ref": "#/components/schemas/CreateUser"})
        );
    }

    #[test]
    fn test_query_schema_flattens_to_parameters() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let documentation = Documentation::builder()
            .query_schema(ObjectSchema::new("Filters").attribute("field", Attribute::new(Text)))
            .build();
        let routes = vec![Route::new("/search", [Method::Put]).document(documentation)];
        builder.add_routes(&routes).unwrap();

        let value = builder.render().unwrap();
        let operation = &value["paths"]["/search"]["put"];
        assert_eq!(
            operation["parameters"],
            json!([{
                "in": "query",
                "name": "field",
                "schema": {"type": "string"},
                "required": true,
            }])
        );
        assert_eq!(operation["responses"], json!({}));
    }

    #[test]
    fn test_query_parameter_keeps_optional_flag() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let documentation = Documentation::builder()
            .query_schema(
                ObjectSchema::new("Filters").attribute("page", Attribute::new(Integer).optional()),
            )
            .build();
        let routes = vec![Route::new("/search", [Method::Get]).document(documentation)];
        builder.add_routes(&routes).unwrap();

        let value = builder.render().unwrap();
        let parameter = &value["paths"]["/search"]["get"]["parameters"][0];
        assert_eq!(parameter["name"], json!("page"));
        assert!(parameter.get("required").is_none());
    }

    #[test]
    fn test_content_type_overrides() {
        let mut options = DocumentationOptions::default();
        options.response_content_type = "application/vnd.api+json".to_string();
        options.request_content_type = "application/msgpack".to_string();
        let mut builder = OpenApiBuilder::with_options("Test API", "1.0.0", options);
        let documentation = Documentation::builder()
            .response(200, ObjectSchema::new("User").attribute("id", Attribute::new(Integer)))
            .input_schema(ObjectSchema::new("CreateUser").attribute("name", Attribute::new(Text)))
            .build();
        let routes = vec![Route::new("/users", [Method::Post]).document(documentation)];
        builder.add_routes(&routes).unwrap();

        let value = builder.render().unwrap();
        let operation = &value["paths"]["/users"]["post"];
        assert!(operation["responses"]["200"]["content"]
            .get("application/vnd.api+json")
            .is_some());
        assert!(operation["requestBody"]["content"]
            .get("application/msgpack")
            .is_some());
    }

    #[test]
    fn test_resource_tags_merged_and_sorted() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let routes = vec![
            Route::new("/users", [Method::Get])
                .document(Documentation::builder().tag("users").build())
                .resource(ResourceOptions::new().tag("zoo").tag("users")),
            Route::new("/admin", [Method::Get])
                .document(Documentation::builder().tag("admin").build()),
        ];
        builder.add_routes(&routes).unwrap();

        let value = builder.render().unwrap();
        assert_eq!(
            value["paths"]["/users"]["get"]["tags"],
            json!(["users", "zoo"])
        );
        assert_eq!(
            value["tags"],
            json!([{"name": "admin"}, {"name": "users"}, {"name": "zoo"}])
        );
    }

    #[test]
    fn test_same_schema_across_routes_registered_once() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let routes = vec![
            Route::new("/users", [Method::Get]).document(
                Documentation::builder()
                    .response(200, ObjectSchema::new("User").attribute("id", Attribute::new(Integer)))
                    .build(),
            ),
            Route::new("/users/<int:user_id>", [Method::Get]).document(
                Documentation::builder()
                    .response(200, ObjectSchema::new("User").attribute("id", Attribute::new(Integer)))
                    .build(),
            ),
        ];
        builder.add_routes(&routes).unwrap();

        let value = builder.render().unwrap();
        let schemas = value["components"]["schemas"].as_object().unwrap();
        assert_eq!(schemas.len(), 1);
        assert!(schemas.contains_key("User"));
    }

    #[test]
    fn test_multiple_methods_share_the_path_item() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let routes = vec![
            documented_route("/users", [Method::Get]),
            documented_route("/users", [Method::Post]),
        ];
        builder.add_routes(&routes).unwrap();

        let value = builder.render().unwrap();
        let paths = value["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 1);
        assert!(value["paths"]["/users"].get("get").is_some());
        assert!(value["paths"]["/users"].get("post").is_some());
    }

    #[test]
    fn test_strict_mode_aborts_the_build() {
        struct Mystery;
        let mut options = DocumentationOptions::default();
        options.strict_mode = StrictMode::FailOnError;
        let mut builder = OpenApiBuilder::with_options("Test API", "1.0.0", options);
        let routes = vec![Route::new("/route", [Method::Get])
            .document(Documentation::builder().response(200, Mystery).build())];
        let err = builder.add_routes(&routes).unwrap_err();
        assert!(matches!(err, Error::MissingConverter { .. }));
    }

    #[test]
    fn test_warn_mode_substitutes_placeholder() {
        struct Mystery;
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let routes = vec![Route::new("/route", [Method::Get])
            .document(Documentation::builder().response(200, Mystery).build())];
        builder.add_routes(&routes).unwrap();

        let value = builder.render().unwrap();
        assert_eq!(
            value["paths"]["/route"]["get"]["responses"]["200"]["content"]["application/json"]
                ["schema"],
            json!({"example": "<unknown>"})
        );
    }

    #[test]
    fn test_response_description_falls_back_to_route_description() {
        let mut options = DocumentationOptions::default();
        options.response_description_fallback = ResponseDescriptionFallback::RouteDescription;
        let mut builder = OpenApiBuilder::with_options("Test API", "1.0.0", options);
        let routes = vec![Route::new("/users", [Method::Get])
            .document(
                Documentation::builder()
                    .response(200, ObjectSchema::new("User"))
                    .build(),
            )
            .describe("Returns the users.")];
        builder.add_routes(&routes).unwrap();

        let value = builder.render().unwrap();
        assert_eq!(
            value["paths"]["/users"]["get"]["responses"]["200"]["description"],
            json!("Returns the users.")
        );
    }

    #[test]
    fn test_documentation_description_wins_over_fallback() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let routes = vec![Route::new("/users", [Method::Get]).document(
            Documentation::builder()
                .description("Documented description.")
                .response(200, ObjectSchema::new("User"))
                .build(),
        )];
        builder.add_routes(&routes).unwrap();

        let value = builder.render().unwrap();
        assert_eq!(
            value["paths"]["/users"]["get"]["responses"]["200"]["description"],
            json!("Documented description.")
        );
    }

    #[test]
    fn test_documentation_routes_toggle() {
        let builder = OpenApiBuilder::new("Test API", "1.0.0");
        assert!(builder.documentation_routes().is_some());

        let mut options = DocumentationOptions::default();
        options.include_documentation_routes = false;
        let builder = OpenApiBuilder::with_options("Test API", "1.0.0", options);
        assert!(builder.documentation_routes().is_none());
    }

    #[test]
    fn test_malformed_documentation_aborts() {
        let mut builder = OpenApiBuilder::new("Test API", "1.0.0");
        let routes = vec![Route::new("/route", [Method::Get])
            .document(Documentation::builder().response(42, Text).build())];
        let err = builder.add_routes(&routes).unwrap_err();
        assert!(matches!(err, Error::InvalidDocumentation(_)));
    }
}
