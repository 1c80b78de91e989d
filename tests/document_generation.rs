//! End-to-end document generation scenarios against an in-memory route table.

use openapi_from_routes::builder::{DocumentationOptions, OpenApiBuilder, StrictMode};
use openapi_from_routes::documentation::{Documentation, ResourceOptions};
use openapi_from_routes::error::Error;
use openapi_from_routes::fields::{
    Attribute, DiscriminatorOptions, Integer, List, Nested, ObjectSchema, SchemaOptions, SchemaRef,
    Text,
};
use openapi_from_routes::routing::{Method, Route};
use openapi_from_routes::specification::Parameter;
use openapi_from_routes::{serializer, ui};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn user_schema() -> ObjectSchema {
    ObjectSchema::new("User")
        .attribute("id", Attribute::new(Integer))
        .attribute("name", Attribute::new(Text))
        .attribute("email", Attribute::new(openapi_from_routes::fields::Email).optional())
}

fn user_routes() -> Vec<Route> {
    let resource = ResourceOptions::new().tag("users");
    vec![
        Route::new("/users", [Method::Get])
            .document(
                Documentation::builder()
                    .summary("List users")
                    .response(200, user_schema().many())
                    .query_schema(
                        ObjectSchema::new("UserFilters")
                            .attribute("search", Attribute::new(Text).optional())
                            .attribute("page", Attribute::new(Integer).optional()),
                    )
                    .build(),
            )
            .resource(resource.clone()),
        Route::new("/users", [Method::Post])
            .document(
                Documentation::builder()
                    .summary("Create a user")
                    .input_schema(
                        ObjectSchema::new("CreateUser")
                            .attribute("name", Attribute::new(Text))
                            .attribute("email", Attribute::new(openapi_from_routes::fields::Email)),
                    )
                    .response(201, user_schema())
                    .build(),
            )
            .resource(resource.clone()),
        Route::new("/users/<int:user_id>", [Method::Get, Method::Head])
            .document(
                Documentation::builder()
                    .summary("Fetch a user")
                    .response(200, user_schema())
                    .response(404, ObjectSchema::new("ApiError").attribute("message", Attribute::new(Text)))
                    .build(),
            )
            .resource(resource),
    ]
}

fn build(routes: &[Route]) -> Value {
    let mut builder = OpenApiBuilder::new("User Service", "2.1.0");
    builder.add_routes(routes).unwrap();
    builder.render().unwrap()
}

#[test]
fn test_full_user_service_document() {
    init_logging();
    let value = build(&user_routes());

    assert_eq!(value["openapi"], json!("3.0.3"));
    assert_eq!(value["info"], json!({"title": "User Service", "version": "2.1.0"}));
    assert_eq!(value["servers"], json!([{"url": "/"}]));
    assert_eq!(value["tags"], json!([{"name": "users"}]));

    let paths = value["paths"].as_object().unwrap();
    assert_eq!(paths.len(), 2);

    // GET /users: array response referencing the shared User schema, plus
    // promoted query parameters.
    let list = &value["paths"]["/users"]["get"];
    assert_eq!(list["summary"], json!("List users"));
    assert_eq!(list["tags"], json!(["users"]));
    assert_eq!(
        list["responses"]["200"]["content"]["application/json"]["schema"],
        json!({"type": "array", "items": {"$ref": "#/components/schemas/User"}})
    );
    let query_names: Vec<&str> = list["parameters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(query_names, ["search", "page"]);

    // POST /users: request body referencing CreateUser.
    let create = &value["paths"]["/users"]["post"];
    assert_eq!(
        create["requestBody"]["content"]["application/json"]["schema"],
        json!({"$ref": "#/components/schemas/CreateUser"})
    );

    // GET /users/{user_id}: normalized path with an auto-derived parameter.
    let detail = &value["paths"]["/users/{user_id}"];
    assert_eq!(
        detail["parameters"],
        json!([{
            "in": "path",
            "name": "user_id",
            "schema": {"type": "number", "format": "integer"},
            "required": true,
        }])
    );
    assert!(detail.get("get").is_some());
    assert!(detail.get("head").is_some());

    // Components hold each named schema exactly once.
    let schemas = value["components"]["schemas"].as_object().unwrap();
    let mut names: Vec<&String> = schemas.keys().collect();
    names.sort();
    assert_eq!(names, ["ApiError", "CreateUser", "User", "UserFilters"]);
    assert_eq!(
        schemas["User"]["properties"]["email"],
        json!({"type": "string", "format": "email"})
    );
    assert_eq!(schemas["User"]["required"], json!(["id", "name"]));
}

#[test]
fn test_undocumented_routes_produce_empty_paths() {
    init_logging();
    let routes = vec![Route::new("/health", [Method::Get])];
    let value = build(&routes);
    assert_eq!(value["paths"], json!({}));
}

#[test]
fn test_empty_documentation_produces_bare_operation() {
    init_logging();
    let routes = vec![Route::new("/route", [Method::Get]).document(Documentation::empty())];
    let value = build(&routes);
    assert_eq!(value["paths"]["/route"], json!({"get": {"responses": {}}}));
}

#[test]
fn test_recursive_schema_round_trip() {
    init_logging();

    fn category_schema() -> Arc<ObjectSchema> {
        ObjectSchema::new("Category")
            .attribute("name", Attribute::new(Text))
            .attribute(
                "subcategories",
                Attribute::new(Nested::of(SchemaRef::lazy(category_schema)).many()).optional(),
            )
            .into_ref()
    }

    let routes = vec![Route::new("/categories", [Method::Get]).document(
        Documentation::builder()
            .response(200, category_schema())
            .build(),
    )];
    let value = build(&routes);

    let schemas = value["components"]["schemas"].as_object().unwrap();
    assert_eq!(schemas.len(), 1);
    assert_eq!(
        schemas["Category"]["properties"]["subcategories"]["items"],
        json!({"$ref": "#/components/schemas/Category"})
    );
}

#[test]
fn test_discriminated_union_document() {
    init_logging();
    let dog = ObjectSchema::new("Dog")
        .attribute("bark", Attribute::new(Text))
        .into_ref();
    let cat = ObjectSchema::new("Cat")
        .attribute("lives", Attribute::new(Integer))
        .into_ref();
    let pet = ObjectSchema::new("Pet")
        .attribute("kind", Attribute::new(Text))
        .options(
            SchemaOptions::new().discriminator(
                DiscriminatorOptions::new("kind")
                    .all_of()
                    .variant("dog", dog)
                    .variant("cat", cat),
            ),
        );

    let routes = vec![Route::new("/pets", [Method::Get]).document(
        Documentation::builder().response(200, pet).build(),
    )];
    let value = build(&routes);

    let wrapper = &value["components"]["schemas"]["Pet"];
    assert_eq!(
        wrapper["oneOf"],
        json!([
            {"$ref": "#/components/schemas/Dog"},
            {"$ref": "#/components/schemas/Cat"},
        ])
    );
    assert_eq!(wrapper["discriminator"]["propertyName"], json!("kind"));
    assert_eq!(
        wrapper["discriminator"]["mapping"],
        json!({
            "dog": "#/components/schemas/Dog",
            "cat": "#/components/schemas/Cat",
        })
    );
    // the base object schema is folded into each variant
    let dog = &value["components"]["schemas"]["Dog"];
    assert_eq!(dog["allOf"][0]["properties"], json!({"kind": {"type": "string"}}));
}

#[test]
fn test_list_fields_and_explicit_parameters() {
    init_logging();
    let routes = vec![Route::new("/reports", [Method::Get]).document(
        Documentation::builder()
            .parameter(Parameter::new("X-Request-Id", "header"))
            .response(
                200,
                ObjectSchema::new("Report")
                    .attribute("labels", Attribute::new(List::of(Text)))
                    .attribute("matrix", Attribute::new(List::of(List::of(Integer)))),
            )
            .build(),
    )];
    let value = build(&routes);

    assert_eq!(
        value["paths"]["/reports"]["parameters"][0]["name"],
        json!("X-Request-Id")
    );
    let report = &value["components"]["schemas"]["Report"];
    assert_eq!(
        report["properties"]["labels"],
        json!({"type": "array", "items": {"type": "string"}})
    );
    assert_eq!(
        report["properties"]["matrix"]["items"],
        json!({"type": "array", "items": {"type": "integer"}})
    );
}

#[test]
fn test_strict_mode_fails_whole_build() {
    init_logging();
    struct Mystery;
    let mut options = DocumentationOptions::default();
    options.strict_mode = StrictMode::FailOnError;
    let mut builder = OpenApiBuilder::with_options("User Service", "2.1.0", options);
    let routes = vec![Route::new("/broken", [Method::Get]).document(
        Documentation::builder().response(200, Mystery).build(),
    )];
    let err = builder.add_routes(&routes).unwrap_err();
    assert!(matches!(err, Error::MissingConverter { .. }));
}

#[test]
fn test_serialization_round_trip() {
    init_logging();
    let routes = user_routes();
    let mut builder = OpenApiBuilder::new("User Service", "2.1.0");
    builder.add_routes(&routes).unwrap();

    let json = serializer::serialize_json(builder.specification()).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["info"]["title"], json!("User Service"));

    let yaml = serializer::serialize_yaml(builder.specification()).unwrap();
    let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed["openapi"], serde_yaml::Value::from("3.0.3"));
}

#[test]
fn test_document_export_to_file() {
    init_logging();
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("docs").join("openapi.json");

    let mut builder = OpenApiBuilder::new("User Service", "2.1.0");
    builder.add_routes(&user_routes()).unwrap();
    let json = serializer::serialize_json(builder.specification()).unwrap();
    serializer::write_to_file(&json, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: Value = serde_json::from_str(&content).unwrap();
    assert!(parsed["paths"].get("/users/{user_id}").is_some());
}

#[test]
fn test_ui_routes_and_bodies() {
    init_logging();
    let mut builder = OpenApiBuilder::new("User Service", "2.1.0");
    builder.add_routes(&user_routes()).unwrap();

    let routes = builder.documentation_routes().unwrap();
    assert_eq!(routes.specification_path, ui::SPECIFICATION_PATH);

    let body = ui::specification_body(builder.specification()).unwrap();
    let parsed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["info"]["title"], json!("User Service"));

    let page = ui::render_ui_page(routes.specification_path);
    assert!(page.contains(routes.specification_path));
}
