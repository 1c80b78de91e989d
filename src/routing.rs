//! Read-only interface to the host routing layer.
//!
//! The engine never owns the route table; the host adapter materializes one
//! [`Route`] record per registered rule, carrying the rule template, the allowed
//! methods, the ordered path-argument markers and the optionally attached
//! [`Documentation`] record. Rule templates may use Flask-style `<int:id>`,
//! Axum-style `:id` or brace `{id}` variables; all are normalized to brace
//! syntax for the document.

use std::any::Any;
use std::fmt;

use crate::documentation::{Documentation, ResourceOptions};

/// HTTP methods the assembler documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
}

impl Method {
    /// Canonical iteration order, matching the rendered path-item order.
    pub const ALL: [Method; 6] = [
        Method::Get,
        Method::Put,
        Method::Post,
        Method::Delete,
        Method::Options,
        Method::Head,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Head => "HEAD",
        }
    }
}

/// Marker for a plain string path argument.
#[derive(Debug, Clone, Copy)]
pub struct StringArg;

/// Marker for an argument restricted to an enumerated set of strings.
#[derive(Debug, Clone, Copy)]
pub struct AnyArg;

/// Marker for an argument matching a remaining path, slashes included.
#[derive(Debug, Clone, Copy)]
pub struct PathArg;

/// Marker for an integer path argument.
#[derive(Debug, Clone, Copy)]
pub struct IntArg;

/// Marker for a floating point path argument.
#[derive(Debug, Clone, Copy)]
pub struct FloatArg;

/// Marker for a UUID path argument.
#[derive(Debug, Clone, Copy)]
pub struct UuidArg;

/// Marker for a host-defined argument converter, identified by its rule token.
/// Documenting one requires registering a matching parameter converter.
#[derive(Debug, Clone)]
pub struct CustomArg(pub String);

/// A named path variable and its argument-type marker.
pub struct PathArgument {
    pub name: String,
    pub marker: Box<dyn Any>,
}

impl PathArgument {
    pub fn new(name: impl Into<String>, marker: impl Any) -> Self {
        Self {
            name: name.into(),
            marker: Box::new(marker),
        }
    }
}

impl fmt::Debug for PathArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PathArgument")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A single entry of the host's route table.
pub struct Route {
    /// Rule template in the host framework's syntax.
    pub rule: String,
    /// Methods the host accepts on this rule.
    pub methods: Vec<Method>,
    /// Ordered path variables with their argument-type markers.
    pub arguments: Vec<PathArgument>,
    /// Metadata attached to the handler, if the route is documented.
    pub documentation: Option<Documentation>,
    /// Defaults declared by the owning route group.
    pub resource: Option<ResourceOptions>,
    /// Handler description, used by the configurable response fallback.
    pub description: Option<String>,
}

impl Route {
    /// Create a route, deriving the path arguments from the rule template.
    pub fn new(rule: impl Into<String>, methods: impl IntoIterator<Item = Method>) -> Self {
        let rule = rule.into();
        let arguments = parse_arguments(&rule);
        Self {
            rule,
            methods: methods.into_iter().collect(),
            arguments,
            documentation: None,
            resource: None,
            description: None,
        }
    }

    pub fn document(mut self, documentation: Documentation) -> Self {
        self.documentation = Some(documentation);
        self
    }

    pub fn resource(mut self, resource: ResourceOptions) -> Self {
        self.resource = Some(resource);
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the marker of a named path variable, or append a new variable.
    /// This is how host-defined argument converters reach the registry.
    pub fn argument(mut self, name: impl Into<String>, marker: impl Any) -> Self {
        let name = name.into();
        match self.arguments.iter_mut().find(|arg| arg.name == name) {
            Some(argument) => argument.marker = Box::new(marker),
            None => self.arguments.push(PathArgument::new(name, marker)),
        }
        self
    }

    /// The rule rewritten to OpenAPI brace syntax.
    pub fn normalized_rule(&self) -> String {
        normalize_rule(&self.rule)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Route")
            .field("rule", &self.rule)
            .field("methods", &self.methods)
            .field("arguments", &self.arguments)
            .field("documented", &self.documentation.is_some())
            .finish_non_exhaustive()
    }
}

/// Enumerable snapshot of the host's route table.
pub trait RouteSource {
    fn routes(&self) -> &[Route];
}

impl RouteSource for Vec<Route> {
    fn routes(&self) -> &[Route] {
        self
    }
}

impl RouteSource for [Route] {
    fn routes(&self) -> &[Route] {
        self
    }
}

/// Rewrite a rule template to OpenAPI `{name}` brace syntax.
///
/// Handles `<converter:name>` and `<name>` variables as well as `:name` path
/// segments; brace variables pass through unchanged.
pub fn normalize_rule(rule: &str) -> String {
    let mut flattened = String::with_capacity(rule.len());
    let mut chars = rule.chars();
    while let Some(c) = chars.next() {
        if c != '<' {
            flattened.push(c);
            continue;
        }
        let mut token = String::new();
        for inner in chars.by_ref() {
            if inner == '>' {
                break;
            }
            token.push(inner);
        }
        flattened.push('{');
        flattened.push_str(variable_name(&token));
        flattened.push('}');
    }

    let parts: Vec<String> = flattened
        .split('/')
        .map(|part| match part.strip_prefix(':') {
            Some(name) => format!("{{{}}}", name),
            None => part.to_string(),
        })
        .collect();
    parts.join("/")
}

/// Derive the path arguments declared by a rule template.
fn parse_arguments(rule: &str) -> Vec<PathArgument> {
    let mut arguments = Vec::new();
    let mut chars = rule.chars();
    while let Some(c) = chars.next() {
        if c != '<' {
            continue;
        }
        let mut token = String::new();
        for inner in chars.by_ref() {
            if inner == '>' {
                break;
            }
            token.push(inner);
        }
        arguments.push(PathArgument {
            name: variable_name(&token).to_string(),
            marker: converter_marker(&token),
        });
    }
    for part in rule.split('/') {
        if let Some(name) = part.strip_prefix(':') {
            arguments.push(PathArgument::new(name, StringArg));
        }
    }
    arguments
}

/// The variable name of a `<converter:name>` token.
fn variable_name(token: &str) -> &str {
    match token.rsplit_once(':') {
        Some((_, name)) => name,
        None => token,
    }
}

/// The argument-type marker of a `<converter:name>` token.
fn converter_marker(token: &str) -> Box<dyn Any> {
    let converter = match token.rsplit_once(':') {
        Some((converter, _)) => converter,
        None => return Box::new(StringArg),
    };
    // strip converter arguments, e.g. `int(min=1)`
    let converter = converter.split('(').next().unwrap_or(converter);
    match converter {
        "string" => Box::new(StringArg),
        "any" => Box::new(AnyArg),
        "path" => Box::new(PathArg),
        "int" => Box::new(IntArg),
        "float" => Box::new(FloatArg),
        "uuid" => Box::new(UuidArg),
        other => Box::new(CustomArg(other.to_string())),
    }
}
