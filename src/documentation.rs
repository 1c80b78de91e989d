//! Per-route documentation metadata.
//!
//! A [`Documentation`] record is what the host's annotation mechanism attaches
//! to a route handler: the declared responses, optional request and query
//! schemas, explicit parameters and descriptive text. The record is created at
//! route-registration time, consumed exactly once during the document build
//! pass, and never mutated by the engine.

use std::any::Any;
use std::fmt;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::specification::Parameter;

/// Documentation attached to a single route handler.
pub struct Documentation {
    /// Declared responses keyed by canonical string status code.
    pub responses: IndexMap<String, Box<dyn Any>>,
    /// Schema describing the request body.
    pub input_schema: Option<Box<dyn Any>>,
    /// Schema whose properties are promoted to query parameters.
    pub query_schema: Option<Box<dyn Any>>,
    /// Explicit parameters, listed ahead of the auto-derived path parameters.
    pub parameters: Vec<Parameter>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl Documentation {
    pub fn builder() -> DocumentationBuilder {
        DocumentationBuilder {
            documentation: Documentation {
                responses: IndexMap::new(),
                input_schema: None,
                query_schema: None,
                parameters: Vec::new(),
                summary: None,
                description: None,
                tags: Vec::new(),
            },
        }
    }

    /// An empty record: the route is documented, with nothing declared yet.
    pub fn empty() -> Self {
        Self::builder().build()
    }

    /// Checks the structural contract of the record. Violations are fatal when
    /// the record enters the documentation context.
    pub fn validate(&self) -> Result<()> {
        for status in self.responses.keys() {
            let code: u16 = status
                .parse()
                .map_err(|_| Error::InvalidDocumentation(format!("status code `{}`", status)))?;
            if !(100..=599).contains(&code) {
                return Err(Error::InvalidDocumentation(format!(
                    "status code `{}` out of range",
                    code
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Documentation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Documentation")
            .field("responses", &self.responses.keys().collect::<Vec<_>>())
            .field("has_input_schema", &self.input_schema.is_some())
            .field("has_query_schema", &self.query_schema.is_some())
            .field("parameters", &self.parameters.len())
            .field("summary", &self.summary)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Documentation`]; the Rust counterpart of the decorator that
/// annotates a route handler.
pub struct DocumentationBuilder {
    documentation: Documentation,
}

impl DocumentationBuilder {
    /// Declare a response schema for a status code. Keys are normalized to
    /// canonical string form.
    pub fn response(mut self, status: u16, schema: impl Any) -> Self {
        self.documentation
            .responses
            .insert(status.to_string(), Box::new(schema));
        self
    }

    pub fn input_schema(mut self, schema: impl Any) -> Self {
        self.documentation.input_schema = Some(Box::new(schema));
        self
    }

    pub fn query_schema(mut self, schema: impl Any) -> Self {
        self.documentation.query_schema = Some(Box::new(schema));
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.documentation.parameters.push(parameter);
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.documentation.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.documentation.description = Some(description.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.documentation.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Documentation {
        self.documentation
    }
}

/// Defaults contributed by the route group that owns a route.
#[derive(Debug, Clone, Default)]
pub struct ResourceOptions {
    /// Tags applied to every documented route of the group.
    pub tags: Vec<String>,
}

impl ResourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}
