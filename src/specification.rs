//! OpenAPI 3.0.3 document model.
//!
//! Every node knows how to render itself into a plain JSON value, omitting any
//! field that still holds its default or empty value. Nodes perform no I/O and no
//! converter dispatch; the tree is a passive value graph that the builder mutates
//! while iterating endpoints.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Root document object of the OpenAPI document.
#[derive(Debug, Clone)]
pub struct OpenAPI {
    /// Semantic version of the OpenAPI specification in use.
    pub openapi: String,
    /// Metadata about the API.
    pub info: Info,
    /// Connectivity information for the documented servers.
    pub servers: Vec<Server>,
    /// Available paths and operations.
    pub paths: Paths,
    /// Reusable objects, most importantly the named schema registry.
    pub components: Components,
    /// Security mechanisms applicable across the whole API.
    pub security: Vec<SecurityRequirement>,
    /// Tags used by the specification, kept sorted by name.
    pub tags: Vec<Tag>,
    /// Additional external documentation.
    pub external_docs: Option<ExternalDocumentation>,
}

impl OpenAPI {
    pub fn new(info: Info) -> Self {
        Self {
            openapi: "3.0.3".to_string(),
            info,
            servers: Vec::new(),
            paths: Paths::default(),
            components: Components::default(),
            security: Vec::new(),
            tags: Vec::new(),
            external_docs: None,
        }
    }

    pub fn render(&self) -> Result<Value> {
        let mut value = Map::new();
        value.insert("openapi".to_string(), Value::String(self.openapi.clone()));
        value.insert("info".to_string(), self.info.render());
        value.insert(
            "servers".to_string(),
            Value::Array(self.servers.iter().map(Server::render).collect()),
        );
        value.insert("paths".to_string(), self.paths.render()?);
        value.insert("components".to_string(), self.components.render()?);
        if !self.security.is_empty() {
            value.insert(
                "security".to_string(),
                Value::Array(self.security.iter().map(SecurityRequirement::render).collect()),
            );
        }
        if !self.tags.is_empty() {
            value.insert(
                "tags".to_string(),
                Value::Array(self.tags.iter().map(Tag::render).collect()),
            );
        }
        if let Some(docs) = &self.external_docs {
            value.insert("externalDocs".to_string(), docs.render());
        }
        Ok(Value::Object(value))
    }
}

impl Serialize for OpenAPI {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.render()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

/// Metadata about the API.
#[derive(Debug, Clone)]
pub struct Info {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    pub terms_of_service: Option<String>,
    pub contact: Option<Contact>,
    pub license: Option<License>,
}

impl Info {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: None,
            terms_of_service: None,
            contact: None,
            license: None,
        }
    }

    pub fn render(&self) -> Value {
        let mut value = Map::new();
        value.insert("title".to_string(), Value::String(self.title.clone()));
        value.insert("version".to_string(), Value::String(self.version.clone()));
        if let Some(description) = &self.description {
            value.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(terms) = &self.terms_of_service {
            value.insert("termsOfService".to_string(), Value::String(terms.clone()));
        }
        if let Some(contact) = &self.contact {
            value.insert("contact".to_string(), contact.render());
        }
        if let Some(license) = &self.license {
            value.insert("license".to_string(), license.render());
        }
        Value::Object(value)
    }
}

/// Contact information for the exposed API.
#[derive(Debug, Clone, Default)]
pub struct Contact {
    pub name: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
}

impl Contact {
    pub fn render(&self) -> Value {
        let mut value = Map::new();
        if let Some(name) = &self.name {
            value.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(url) = &self.url {
            value.insert("url".to_string(), Value::String(url.clone()));
        }
        if let Some(email) = &self.email {
            value.insert("email".to_string(), Value::String(email.clone()));
        }
        Value::Object(value)
    }
}

/// License information for the exposed API.
#[derive(Debug, Clone)]
pub struct License {
    pub name: String,
    pub url: Option<String>,
}

impl License {
    pub fn render(&self) -> Value {
        let mut value = Map::new();
        value.insert("name".to_string(), Value::String(self.name.clone()));
        if let Some(url) = &self.url {
            value.insert("url".to_string(), Value::String(url.clone()));
        }
        Value::Object(value)
    }
}

/// A single documented server.
#[derive(Debug, Clone)]
pub struct Server {
    /// URL to the target host; may be relative to the document location.
    pub url: String,
    pub description: Option<String>,
    pub variables: IndexMap<String, ServerVariable>,
}

impl Server {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
            variables: IndexMap::new(),
        }
    }

    pub fn render(&self) -> Value {
        let mut value = Map::new();
        value.insert("url".to_string(), Value::String(self.url.clone()));
        if let Some(description) = &self.description {
            value.insert("description".to_string(), Value::String(description.clone()));
        }
        if !self.variables.is_empty() {
            let vars: Map<String, Value> = self
                .variables
                .iter()
                .map(|(key, var)| (key.clone(), var.render()))
                .collect();
            value.insert("variables".to_string(), Value::Object(vars));
        }
        Value::Object(value)
    }
}

/// Server variable for URL template substitution.
#[derive(Debug, Clone)]
pub struct ServerVariable {
    pub default: String,
    pub enum_values: Vec<String>,
    pub description: Option<String>,
}

impl ServerVariable {
    pub fn render(&self) -> Value {
        let mut value = Map::new();
        value.insert("default".to_string(), Value::String(self.default.clone()));
        if !self.enum_values.is_empty() {
            value.insert(
                "enum".to_string(),
                Value::Array(self.enum_values.iter().cloned().map(Value::String).collect()),
            );
        }
        if let Some(description) = &self.description {
            value.insert("description".to_string(), Value::String(description.clone()));
        }
        Value::Object(value)
    }
}

/// Reference to external documentation.
#[derive(Debug, Clone)]
pub struct ExternalDocumentation {
    pub url: String,
    pub description: Option<String>,
}

impl ExternalDocumentation {
    pub fn render(&self) -> Value {
        let mut value = Map::new();
        value.insert("url".to_string(), Value::String(self.url.clone()));
        if let Some(description) = &self.description {
            value.insert("description".to_string(), Value::String(description.clone()));
        }
        Value::Object(value)
    }
}

/// Holds the relative paths to the individual endpoints and their operations.
#[derive(Debug, Clone, Default)]
pub struct Paths {
    pub values: IndexMap<String, PathItem>,
}

impl Paths {
    pub fn render(&self) -> Result<Value> {
        let mut value = Map::new();
        for (key, item) in &self.values {
            value.insert(key.clone(), item.render()?);
        }
        Ok(Value::Object(value))
    }
}

/// Describes the operations available on a single path.
///
/// At most one `PathItem` exists per normalized path string; the builder creates
/// it lazily on first visit and reuses it afterwards.
#[derive(Debug, Clone, Default)]
pub struct PathItem {
    pub ref_path: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub get: Option<Operation>,
    pub put: Option<Operation>,
    pub post: Option<Operation>,
    pub delete: Option<Operation>,
    pub options: Option<Operation>,
    pub head: Option<Operation>,
    pub patch: Option<Operation>,
    pub trace: Option<Operation>,
    pub servers: Vec<Server>,
    /// Parameters shared across every operation on this path.
    pub parameters: Vec<Parameter>,
}

impl PathItem {
    pub fn render(&self) -> Result<Value> {
        let mut value = Map::new();
        if let Some(ref_path) = &self.ref_path {
            value.insert("$ref".to_string(), Value::String(ref_path.clone()));
        }
        if let Some(summary) = &self.summary {
            value.insert("summary".to_string(), Value::String(summary.clone()));
        }
        if let Some(description) = &self.description {
            value.insert("description".to_string(), Value::String(description.clone()));
        }
        let operations = [
            ("get", &self.get),
            ("put", &self.put),
            ("post", &self.post),
            ("delete", &self.delete),
            ("options", &self.options),
            ("head", &self.head),
            ("patch", &self.patch),
            ("trace", &self.trace),
        ];
        for (key, operation) in operations {
            if let Some(operation) = operation {
                value.insert(key.to_string(), operation.render()?);
            }
        }
        if !self.servers.is_empty() {
            value.insert(
                "servers".to_string(),
                Value::Array(self.servers.iter().map(Server::render).collect()),
            );
        }
        if !self.parameters.is_empty() {
            let mut parameters = Vec::with_capacity(self.parameters.len());
            for parameter in &self.parameters {
                parameters.push(parameter.render()?);
            }
            value.insert("parameters".to_string(), Value::Array(parameters));
        }
        Ok(Value::Object(value))
    }
}

/// Describes a single API operation on a path.
#[derive(Debug, Clone, Default)]
pub struct Operation {
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub external_docs: Option<ExternalDocumentation>,
    pub operation_id: Option<String>,
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    /// Expected responses; rendered even when empty.
    pub responses: Responses,
    pub deprecated: bool,
    pub security: Vec<SecurityRequirement>,
    pub servers: Vec<Server>,
}

impl Operation {
    pub fn render(&self) -> Result<Value> {
        let mut value = Map::new();
        if !self.tags.is_empty() {
            value.insert(
                "tags".to_string(),
                Value::Array(self.tags.iter().cloned().map(Value::String).collect()),
            );
        }
        if let Some(summary) = &self.summary {
            value.insert("summary".to_string(), Value::String(summary.clone()));
        }
        if let Some(description) = &self.description {
            value.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(docs) = &self.external_docs {
            value.insert("externalDocs".to_string(), docs.render());
        }
        if let Some(operation_id) = &self.operation_id {
            value.insert("operationId".to_string(), Value::String(operation_id.clone()));
        }
        if !self.parameters.is_empty() {
            let mut parameters = Vec::with_capacity(self.parameters.len());
            for parameter in &self.parameters {
                parameters.push(parameter.render()?);
            }
            value.insert("parameters".to_string(), Value::Array(parameters));
        }
        if let Some(request_body) = &self.request_body {
            value.insert("requestBody".to_string(), request_body.render()?);
        }
        value.insert("responses".to_string(), self.responses.render()?);
        if self.deprecated {
            value.insert("deprecated".to_string(), Value::Bool(true));
        }
        if !self.security.is_empty() {
            value.insert(
                "security".to_string(),
                Value::Array(self.security.iter().map(SecurityRequirement::render).collect()),
            );
        }
        if !self.servers.is_empty() {
            value.insert(
                "servers".to_string(),
                Value::Array(self.servers.iter().map(Server::render).collect()),
            );
        }
        Ok(Value::Object(value))
    }
}

/// Describes a single operation parameter, identified by name and location.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    /// Location of the parameter: `query`, `header`, `path` or `cookie`.
    pub location: String,
    pub description: Option<String>,
    pub schema: Option<SchemaOrRef>,
    pub required: bool,
    pub deprecated: bool,
    pub allow_empty_value: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            description: None,
            schema: None,
            required: true,
            deprecated: false,
            allow_empty_value: false,
        }
    }

    pub fn render(&self) -> Result<Value> {
        let mut value = Map::new();
        value.insert("in".to_string(), Value::String(self.location.clone()));
        value.insert("name".to_string(), Value::String(self.name.clone()));
        if let Some(description) = &self.description {
            value.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(schema) = &self.schema {
            value.insert("schema".to_string(), schema.render()?);
        }
        if self.required {
            value.insert("required".to_string(), Value::Bool(true));
        }
        if self.deprecated {
            value.insert("deprecated".to_string(), Value::Bool(true));
        }
        if self.allow_empty_value {
            value.insert("allowEmptyValue".to_string(), Value::Bool(true));
        }
        Ok(Value::Object(value))
    }
}

/// Describes a single request body.
#[derive(Debug, Clone, Default)]
pub struct RequestBody {
    pub description: Option<String>,
    pub content: IndexMap<String, MediaType>,
    pub required: bool,
}

impl RequestBody {
    pub fn render(&self) -> Result<Value> {
        let mut content = Map::new();
        for (key, media_type) in &self.content {
            content.insert(key.clone(), media_type.render()?);
        }
        let mut value = Map::new();
        value.insert("content".to_string(), Value::Object(content));
        if let Some(description) = &self.description {
            value.insert("description".to_string(), Value::String(description.clone()));
        }
        if self.required {
            value.insert("required".to_string(), Value::Bool(true));
        }
        Ok(Value::Object(value))
    }
}

/// Schema and examples for a single media type key.
#[derive(Debug, Clone, Default)]
pub struct MediaType {
    pub schema: Option<SchemaOrRef>,
    pub example: Option<Value>,
    pub examples: IndexMap<String, Example>,
}

impl MediaType {
    pub fn of(schema: SchemaOrRef) -> Self {
        Self {
            schema: Some(schema),
            example: None,
            examples: IndexMap::new(),
        }
    }

    pub fn render(&self) -> Result<Value> {
        let mut value = Map::new();
        if let Some(schema) = &self.schema {
            value.insert("schema".to_string(), schema.render()?);
        }
        if let Some(example) = &self.example {
            value.insert("example".to_string(), example.clone());
        } else if !self.examples.is_empty() {
            let examples: Map<String, Value> = self
                .examples
                .iter()
                .map(|(key, example)| (key.clone(), example.render()))
                .collect();
            value.insert("examples".to_string(), Value::Object(examples));
        }
        Ok(Value::Object(value))
    }
}

/// Container mapping HTTP status codes to expected responses.
#[derive(Debug, Clone, Default)]
pub struct Responses {
    pub values: IndexMap<String, Response>,
}

impl Responses {
    pub fn render(&self) -> Result<Value> {
        let mut value = Map::new();
        for (key, response) in &self.values {
            value.insert(key.clone(), response.render()?);
        }
        Ok(Value::Object(value))
    }
}

/// Describes a single response from an API operation.
#[derive(Debug, Clone, Default)]
pub struct Response {
    pub description: String,
    pub content: IndexMap<String, MediaType>,
}

impl Response {
    pub fn render(&self) -> Result<Value> {
        let mut value = Map::new();
        value.insert("description".to_string(), Value::String(self.description.clone()));
        if !self.content.is_empty() {
            let mut content = Map::new();
            for (key, media_type) in &self.content {
                content.insert(key.clone(), media_type.render()?);
            }
            value.insert("content".to_string(), Value::Object(content));
        }
        Ok(Value::Object(value))
    }
}

/// Example object attached to media types or schemas.
#[derive(Debug, Clone, Default)]
pub struct Example {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub value: Option<Value>,
    pub external_value: Option<String>,
}

impl Example {
    pub fn render(&self) -> Value {
        let mut value = Map::new();
        if let Some(summary) = &self.summary {
            value.insert("summary".to_string(), Value::String(summary.clone()));
        }
        if let Some(description) = &self.description {
            value.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(example_value) = &self.value {
            value.insert("value".to_string(), example_value.clone());
        }
        if let Some(external_value) = &self.external_value {
            value.insert("externalValue".to_string(), Value::String(external_value.clone()));
        }
        Value::Object(value)
    }
}

/// Adds metadata to a single tag used by operations.
#[derive(Debug, Clone)]
pub struct Tag {
    pub name: String,
    pub description: Option<String>,
    pub external_docs: Option<ExternalDocumentation>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            external_docs: None,
        }
    }

    pub fn render(&self) -> Value {
        let mut value = Map::new();
        value.insert("name".to_string(), Value::String(self.name.clone()));
        if let Some(description) = &self.description {
            value.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(docs) = &self.external_docs {
            value.insert("externalDocs".to_string(), docs.render());
        }
        Value::Object(value)
    }
}

/// Holds the reusable objects of the document.
///
/// `schemas` doubles as the deduplication registry: converting a named object
/// schema reserves its slot here before recursing into its fields.
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub schemas: IndexMap<String, Schema>,
    pub responses: IndexMap<String, Response>,
    pub parameters: IndexMap<String, Parameter>,
    pub examples: IndexMap<String, Example>,
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

impl Components {
    pub fn render(&self) -> Result<Value> {
        let mut value = Map::new();
        if !self.schemas.is_empty() {
            let mut schemas = Map::new();
            for (key, schema) in &self.schemas {
                schemas.insert(key.clone(), schema.render()?);
            }
            value.insert("schemas".to_string(), Value::Object(schemas));
        }
        if !self.responses.is_empty() {
            let mut responses = Map::new();
            for (key, response) in &self.responses {
                responses.insert(key.clone(), response.render()?);
            }
            value.insert("responses".to_string(), Value::Object(responses));
        }
        if !self.parameters.is_empty() {
            let mut parameters = Map::new();
            for (key, parameter) in &self.parameters {
                parameters.insert(key.clone(), parameter.render()?);
            }
            value.insert("parameters".to_string(), Value::Object(parameters));
        }
        if !self.examples.is_empty() {
            let examples: Map<String, Value> = self
                .examples
                .iter()
                .map(|(key, example)| (key.clone(), example.render()))
                .collect();
            value.insert("examples".to_string(), Value::Object(examples));
        }
        if !self.security_schemes.is_empty() {
            let schemes: Map<String, Value> = self
                .security_schemes
                .iter()
                .map(|(key, scheme)| (key.clone(), scheme.render()))
                .collect();
            value.insert("securitySchemes".to_string(), Value::Object(schemes));
        }
        Ok(Value::Object(value))
    }
}

/// Lists the security schemes required to execute an operation.
#[derive(Debug, Clone, Default)]
pub struct SecurityRequirement {
    pub values: IndexMap<String, Vec<String>>,
}

impl SecurityRequirement {
    pub fn render(&self) -> Value {
        let value: Map<String, Value> = self
            .values
            .iter()
            .map(|(key, scopes)| {
                (
                    key.clone(),
                    Value::Array(scopes.iter().cloned().map(Value::String).collect()),
                )
            })
            .collect();
        Value::Object(value)
    }
}

/// Defines a security scheme usable by the operations.
#[derive(Debug, Clone)]
pub struct SecurityScheme {
    /// `apiKey`, `http`, `oauth2` or `openIdConnect`.
    pub scheme_type: String,
    /// Location of the API key: `query`, `header` or `cookie`.
    pub location: Option<String>,
    pub name: Option<String>,
    pub scheme: Option<String>,
    pub bearer_format: Option<String>,
    pub description: Option<String>,
    pub open_id_connect_url: Option<String>,
    pub flows: Option<OAuthFlows>,
}

impl SecurityScheme {
    pub fn render(&self) -> Value {
        let mut value = Map::new();
        value.insert("type".to_string(), Value::String(self.scheme_type.clone()));
        if let Some(location) = &self.location {
            value.insert("in".to_string(), Value::String(location.clone()));
        }
        if let Some(name) = &self.name {
            value.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(scheme) = &self.scheme {
            value.insert("scheme".to_string(), Value::String(scheme.clone()));
        }
        if let Some(flows) = &self.flows {
            value.insert("flows".to_string(), flows.render());
        }
        if let Some(url) = &self.open_id_connect_url {
            value.insert("openIdConnectUrl".to_string(), Value::String(url.clone()));
        }
        if let Some(description) = &self.description {
            value.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(bearer_format) = &self.bearer_format {
            value.insert("bearerFormat".to_string(), Value::String(bearer_format.clone()));
        }
        Value::Object(value)
    }
}

/// Configuration of the supported OAuth flows.
#[derive(Debug, Clone, Default)]
pub struct OAuthFlows {
    pub implicit: Option<OAuthFlow>,
    pub password: Option<OAuthFlow>,
    pub client_credentials: Option<OAuthFlow>,
    pub authorization_code: Option<OAuthFlow>,
}

impl OAuthFlows {
    pub fn render(&self) -> Value {
        let mut value = Map::new();
        if let Some(flow) = &self.implicit {
            value.insert("implicit".to_string(), flow.render());
        }
        if let Some(flow) = &self.password {
            value.insert("password".to_string(), flow.render());
        }
        if let Some(flow) = &self.client_credentials {
            value.insert("clientCredentials".to_string(), flow.render());
        }
        if let Some(flow) = &self.authorization_code {
            value.insert("authorizationCode".to_string(), flow.render());
        }
        Value::Object(value)
    }
}

/// Configuration details for one OAuth flow.
#[derive(Debug, Clone)]
pub struct OAuthFlow {
    pub authorization_url: String,
    pub token_url: String,
    pub refresh_url: Option<String>,
    pub scopes: IndexMap<String, String>,
}

impl OAuthFlow {
    pub fn render(&self) -> Value {
        let mut value = Map::new();
        value.insert(
            "authorizationUrl".to_string(),
            Value::String(self.authorization_url.clone()),
        );
        value.insert("tokenUrl".to_string(), Value::String(self.token_url.clone()));
        let scopes: Map<String, Value> = self
            .scopes
            .iter()
            .map(|(key, description)| (key.clone(), Value::String(description.clone())))
            .collect();
        value.insert("scopes".to_string(), Value::Object(scopes));
        if let Some(refresh_url) = &self.refresh_url {
            value.insert("refreshUrl".to_string(), Value::String(refresh_url.clone()));
        }
        Value::Object(value)
    }
}

/// Named pointer into the components section.
///
/// The `required` flag is carried alongside the pointer because a `$ref` cannot
/// hold it, while the embedding property list needs it to build its `required`
/// array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The reference string, e.g. `#/components/schemas/User`.
    pub target: String,
    /// Whether the referenced schema is required in its parent's property list.
    pub required: bool,
}

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

impl Reference {
    /// Reference to a named component schema.
    pub fn schema(name: &str) -> Self {
        Self {
            target: format!("{}{}", SCHEMA_REF_PREFIX, name),
            required: true,
        }
    }

    /// Reference to a named component schema, carrying that schema's own
    /// `required` flag.
    pub fn from_schema(name: &str, schema: &Schema) -> Self {
        Self {
            target: format!("{}{}", SCHEMA_REF_PREFIX, name),
            required: schema.required,
        }
    }

    /// The component schema name this reference points at, if it is a schema
    /// reference.
    pub fn schema_name(&self) -> Option<&str> {
        self.target.strip_prefix(SCHEMA_REF_PREFIX)
    }

    /// Look the referenced schema up in a components schema map.
    pub fn resolve<'a>(&self, schemas: &'a IndexMap<String, Schema>) -> Option<&'a Schema> {
        schemas.get(self.schema_name()?)
    }

    pub fn render(&self) -> Value {
        let mut value = Map::new();
        value.insert("$ref".to_string(), Value::String(self.target.clone()));
        Value::Object(value)
    }
}

/// Either an inline schema or a reference to a named component schema.
#[derive(Debug, Clone)]
pub enum SchemaOrRef {
    Schema(Schema),
    Reference(Reference),
}

impl SchemaOrRef {
    /// Whether this node is required in its parent's property list.
    pub fn required(&self) -> bool {
        match self {
            SchemaOrRef::Schema(schema) => schema.required,
            SchemaOrRef::Reference(reference) => reference.required,
        }
    }

    pub fn set_required(&mut self, required: bool) {
        match self {
            SchemaOrRef::Schema(schema) => schema.required = required,
            SchemaOrRef::Reference(reference) => reference.required = required,
        }
    }

    /// Attach a resolved default value. References cannot carry defaults, so the
    /// value is dropped there.
    pub fn set_default(&mut self, default: Option<Value>) {
        if let SchemaOrRef::Schema(schema) = self {
            schema.default = default;
        }
    }

    /// Attach a free-form options overlay. References render as a bare `$ref`,
    /// so the overlay is dropped there.
    pub fn set_options(&mut self, options: Map<String, Value>) {
        if let SchemaOrRef::Schema(schema) = self {
            schema.options = Some(options);
        }
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            SchemaOrRef::Reference(reference) => Some(reference),
            SchemaOrRef::Schema(_) => None,
        }
    }

    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            SchemaOrRef::Schema(schema) => Some(schema),
            SchemaOrRef::Reference(_) => None,
        }
    }

    pub fn render(&self) -> Result<Value> {
        match self {
            SchemaOrRef::Schema(schema) => schema.render(),
            SchemaOrRef::Reference(reference) => Ok(reference.render()),
        }
    }
}

impl From<Schema> for SchemaOrRef {
    fn from(schema: Schema) -> Self {
        SchemaOrRef::Schema(schema)
    }
}

impl From<Reference> for SchemaOrRef {
    fn from(reference: Reference) -> Self {
        SchemaOrRef::Reference(reference)
    }
}

/// The Schema Object: input and output data type definitions, covering objects,
/// primitives and arrays.
///
/// `required` means "required in the parent's property list" and is never
/// rendered on the node itself; the parent hoists the required property names
/// into its own `required` array.
#[derive(Debug, Clone)]
pub struct Schema {
    pub title: Option<String>,
    pub multiple_of: Option<i64>,
    pub maximum: Option<i64>,
    pub exclusive_maximum: Option<bool>,
    pub minimum: Option<i64>,
    pub exclusive_minimum: Option<bool>,
    pub max_length: Option<u64>,
    pub min_length: Option<u64>,
    pub pattern: Option<String>,
    pub max_items: Option<u64>,
    pub min_items: Option<u64>,
    pub unique_items: Option<bool>,
    pub max_properties: Option<u64>,
    pub min_properties: Option<u64>,
    pub required: bool,
    pub enum_values: Vec<Value>,
    pub schema_type: Option<String>,
    pub all_of: Vec<SchemaOrRef>,
    pub any_of: Vec<SchemaOrRef>,
    pub one_of: Vec<SchemaOrRef>,
    pub not: Option<Box<SchemaOrRef>>,
    pub items: Option<Box<SchemaOrRef>>,
    pub properties: IndexMap<String, SchemaOrRef>,
    pub nullable: bool,
    pub description: Option<String>,
    pub format: Option<String>,
    pub default: Option<Value>,
    pub example: Option<Value>,
    pub examples: IndexMap<String, Example>,
    /// Free-form overlay merged into the rendered value last; the escape hatch
    /// for keywords the model does not carry as fields.
    pub options: Option<Map<String, Value>>,
    pub discriminator: Option<Discriminator>,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            title: None,
            multiple_of: None,
            maximum: None,
            exclusive_maximum: None,
            minimum: None,
            exclusive_minimum: None,
            max_length: None,
            min_length: None,
            pattern: None,
            max_items: None,
            min_items: None,
            unique_items: None,
            max_properties: None,
            min_properties: None,
            required: true,
            enum_values: Vec::new(),
            schema_type: None,
            all_of: Vec::new(),
            any_of: Vec::new(),
            one_of: Vec::new(),
            not: None,
            items: None,
            properties: IndexMap::new(),
            nullable: false,
            description: None,
            format: None,
            default: None,
            example: None,
            examples: IndexMap::new(),
            options: None,
            discriminator: None,
        }
    }
}

impl Schema {
    pub fn typed(schema_type: &str) -> Self {
        Self {
            schema_type: Some(schema_type.to_string()),
            ..Self::default()
        }
    }

    pub fn with_format(schema_type: &str, format: &str) -> Self {
        Self {
            schema_type: Some(schema_type.to_string()),
            format: Some(format.to_string()),
            ..Self::default()
        }
    }

    pub fn array(items: SchemaOrRef) -> Self {
        Self {
            schema_type: Some("array".to_string()),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    pub fn object() -> Self {
        Self::typed("object")
    }

    pub fn with_example(example: impl Into<Value>) -> Self {
        Self {
            example: Some(example.into()),
            ..Self::default()
        }
    }

    pub fn render(&self) -> Result<Value> {
        let mut value = Map::new();
        if let Some(title) = &self.title {
            value.insert("title".to_string(), Value::String(title.clone()));
        }
        if let Some(multiple_of) = self.multiple_of {
            value.insert("multipleOf".to_string(), multiple_of.into());
        }
        if let Some(maximum) = self.maximum {
            value.insert("maximum".to_string(), maximum.into());
        }
        if let Some(exclusive_maximum) = self.exclusive_maximum {
            value.insert("exclusiveMaximum".to_string(), Value::Bool(exclusive_maximum));
        }
        if let Some(minimum) = self.minimum {
            value.insert("minimum".to_string(), minimum.into());
        }
        if let Some(exclusive_minimum) = self.exclusive_minimum {
            value.insert("exclusiveMinimum".to_string(), Value::Bool(exclusive_minimum));
        }
        if let Some(max_length) = self.max_length {
            value.insert("maxLength".to_string(), max_length.into());
        }
        if let Some(min_length) = self.min_length {
            value.insert("minLength".to_string(), min_length.into());
        }
        if let Some(pattern) = &self.pattern {
            value.insert("pattern".to_string(), Value::String(pattern.clone()));
        }
        if let Some(max_items) = self.max_items {
            value.insert("maxItems".to_string(), max_items.into());
        }
        if let Some(min_items) = self.min_items {
            value.insert("minItems".to_string(), min_items.into());
        }
        if let Some(unique_items) = self.unique_items {
            value.insert("uniqueItems".to_string(), Value::Bool(unique_items));
        }
        if let Some(max_properties) = self.max_properties {
            value.insert("maxProperties".to_string(), max_properties.into());
        }
        if let Some(min_properties) = self.min_properties {
            value.insert("minProperties".to_string(), min_properties.into());
        }
        if !self.enum_values.is_empty() {
            value.insert("enum".to_string(), Value::Array(self.enum_values.clone()));
        }
        if let Some(schema_type) = &self.schema_type {
            value.insert("type".to_string(), Value::String(schema_type.clone()));
        }
        if self.nullable {
            value.insert("nullable".to_string(), Value::Bool(true));
        }
        if !self.all_of.is_empty() {
            let mut items = Vec::with_capacity(self.all_of.len());
            for item in &self.all_of {
                items.push(item.render()?);
            }
            value.insert("allOf".to_string(), Value::Array(items));
        }
        if !self.any_of.is_empty() {
            let mut items = Vec::with_capacity(self.any_of.len());
            for item in &self.any_of {
                items.push(item.render()?);
            }
            value.insert("anyOf".to_string(), Value::Array(items));
        }
        if !self.one_of.is_empty() {
            let mut items = Vec::with_capacity(self.one_of.len());
            for item in &self.one_of {
                items.push(item.render()?);
            }
            value.insert("oneOf".to_string(), Value::Array(items));
        }
        if let Some(not) = &self.not {
            value.insert("not".to_string(), not.render()?);
        }
        if let Some(items) = &self.items {
            value.insert("items".to_string(), items.render()?);
        }
        if !self.properties.is_empty() {
            let mut properties = Map::new();
            for (key, property) in &self.properties {
                properties.insert(key.clone(), property.render()?);
            }
            value.insert("properties".to_string(), Value::Object(properties));
            let required_properties: Vec<Value> = self
                .properties
                .iter()
                .filter(|(_, property)| property.required())
                .map(|(key, _)| Value::String(key.clone()))
                .collect();
            if !required_properties.is_empty() {
                value.insert("required".to_string(), Value::Array(required_properties));
            }
        }
        if let Some(description) = &self.description {
            value.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(format) = &self.format {
            value.insert("format".to_string(), Value::String(format.clone()));
        }
        if let Some(default) = &self.default {
            value.insert("default".to_string(), default.clone());
        }
        if self.example.is_some() && !self.examples.is_empty() {
            return Err(Error::ConflictingExamples {
                name: self.title.clone().unwrap_or_else(|| "<anonymous>".to_string()),
            });
        }
        if let Some(example) = &self.example {
            value.insert("example".to_string(), example.clone());
        }
        if !self.examples.is_empty() {
            let examples: Map<String, Value> = self
                .examples
                .iter()
                .map(|(key, example)| (key.clone(), example.render()))
                .collect();
            value.insert("examples".to_string(), Value::Object(examples));
        }
        if let Some(discriminator) = &self.discriminator {
            value.insert("discriminator".to_string(), discriminator.render());
        }
        if let Some(options) = &self.options {
            for (key, option) in options {
                value.insert(key.clone(), option.clone());
            }
        }
        Ok(Value::Object(value))
    }
}

/// Informs consumers which alternative schema applies, based on a property value.
#[derive(Debug, Clone)]
pub struct Discriminator {
    /// Name of the payload property holding the discriminator value.
    pub property_name: String,
    /// Payload value to schema reference mapping.
    pub mapping: IndexMap<String, String>,
}

impl Discriminator {
    pub fn render(&self) -> Value {
        let mut value = Map::new();
        value.insert(
            "propertyName".to_string(),
            Value::String(self.property_name.clone()),
        );
        if !self.mapping.is_empty() {
            let mapping: Map<String, Value> = self
                .mapping
                .iter()
                .map(|(key, target)| (key.clone(), Value::String(target.clone())))
                .collect();
            value.insert("mapping".to_string(), Value::Object(mapping));
        }
        Value::Object(value)
    }
}
