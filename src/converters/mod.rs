//! Converter registries.
//!
//! Three independent, open-ended dispatch tables resolve arbitrary values into
//! document-model nodes: schema converters, default-value converters and
//! path-parameter converters. Each table is an ordered list of boxed trait
//! objects scanned front to back; the first converter whose predicate matches
//! wins, so registration order encodes override precedence. User-supplied
//! converters are registered ahead of the built-in set.

pub mod defaults;
pub mod parameter;
pub mod schema;

use std::any::Any;

use indexmap::IndexMap;
use serde_json::Value;

use crate::builder::DocumentationOptions;
use crate::context::DocumentationContext;
use crate::error::Result;
use crate::specification::{Schema, SchemaOrRef};

pub use defaults::{DefaultConverter, DefaultFactory, DefaultManager, Enumerated, Null};
pub use parameter::{ParameterConverter, ParameterManager};
pub use schema::{SchemaConverter, SchemaManager};

/// Mutable state threaded through a conversion call chain: the components
/// schema registry being filled, the effective options and the active
/// documentation context.
pub struct Conversion<'a, 'd> {
    pub schemas: &'a mut IndexMap<String, Schema>,
    pub options: &'a DocumentationOptions,
    pub context: &'a DocumentationContext<'d>,
}

/// The three converter tables used during one document build.
pub struct ConverterRegistry {
    pub schema: SchemaManager,
    pub defaults: DefaultManager,
    pub parameter: ParameterManager,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self {
            schema: SchemaManager::new(),
            defaults: DefaultManager::new(),
            parameter: ParameterManager::new(),
        }
    }

    /// Resolve a schema-describing value into a schema or reference node.
    pub fn process_schema(
        &self,
        value: &dyn Any,
        name: &str,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<SchemaOrRef> {
        self.schema.process(value, name, self, cx)
    }

    /// Resolve a declared default value into a JSON value.
    pub fn process_default(
        &self,
        value: &dyn Any,
        name: &str,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<Option<Value>> {
        self.defaults.process(value, name, self, cx)
    }

    /// Resolve a path-argument marker into its fixed primitive schema.
    pub fn process_parameter(
        &self,
        marker: &dyn Any,
        name: &str,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<Schema> {
        self.parameter.process(marker, name, cx)
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
