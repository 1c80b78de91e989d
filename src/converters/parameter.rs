//! Path-parameter converters.
//!
//! A pure lookup table from path-argument markers to fixed primitive schemas.
//! No recursion is involved; the table only exists so hosts can register
//! converters for their own argument-marker types.

use std::any::Any;

use log::{debug, warn};

use crate::builder::StrictMode;
use crate::error::{Error, Result};
use crate::routing;
use crate::specification::Schema;

use super::Conversion;

/// A path-parameter converter: predicate over markers plus the fixed schema.
pub trait ParameterConverter {
    fn matches(&self, marker: &dyn Any) -> bool;

    fn schema(&self) -> Schema;
}

/// Ordered path-parameter converter table.
pub struct ParameterManager {
    converters: Vec<Box<dyn ParameterConverter>>,
}

impl ParameterManager {
    pub fn new() -> Self {
        Self {
            converters: Vec::new(),
        }
    }

    pub fn register(&mut self, converter: Box<dyn ParameterConverter>) {
        self.converters.push(converter);
    }

    pub fn register_builtins(&mut self) {
        self.register(Box::new(StringParameterConverter));
        self.register(Box::new(AnyParameterConverter));
        self.register(Box::new(PathParameterConverter));
        self.register(Box::new(IntParameterConverter));
        self.register(Box::new(FloatParameterConverter));
        self.register(Box::new(UuidParameterConverter));
    }

    pub fn process(
        &self,
        marker: &dyn Any,
        name: &str,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<Schema> {
        cx.context.current()?;
        debug!("converting path argument `{}`", name);
        match self.converters.iter().find(|c| c.matches(marker)) {
            Some(converter) => Ok(converter.schema()),
            None => match cx.options.strict_mode {
                StrictMode::FailOnError => Err(Error::MissingParameterConverter {
                    name: name.to_string(),
                }),
                StrictMode::ShowWarnings => {
                    warn!("no parameter converter matched `{}`", name);
                    Ok(Schema::with_example("<unknown>"))
                }
            },
        }
    }
}

impl Default for ParameterManager {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! parameter_converter {
    ($converter:ident, $marker:ty, $schema_type:literal, $format:literal) => {
        pub struct $converter;

        impl ParameterConverter for $converter {
            fn matches(&self, marker: &dyn Any) -> bool {
                marker.is::<$marker>()
            }

            fn schema(&self) -> Schema {
                Schema::with_format($schema_type, $format)
            }
        }
    };
}

parameter_converter!(StringParameterConverter, routing::StringArg, "string", "string");
parameter_converter!(AnyParameterConverter, routing::AnyArg, "string", "string");
parameter_converter!(PathParameterConverter, routing::PathArg, "string", "string");
parameter_converter!(IntParameterConverter, routing::IntArg, "number", "integer");
parameter_converter!(FloatParameterConverter, routing::FloatArg, "number", "float");
parameter_converter!(UuidParameterConverter, routing::UuidArg, "string", "hex");
