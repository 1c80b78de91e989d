//! Default-value converters.
//!
//! Declared field defaults are arbitrary values; this table resolves them into
//! plain JSON: scalars pass through, lists recurse per element, zero-argument
//! factories are invoked and their result re-resolved, enumerated values
//! resolve to their underlying value, and the null marker resolves to no
//! default at all.

use std::any::Any;

use log::{debug, warn};
use serde_json::Value;

use crate::builder::StrictMode;
use crate::error::{Error, Result};

use super::{Conversion, ConverterRegistry};

/// Marker for "the default is null"; it documents as an absent default.
#[derive(Debug, Clone, Copy)]
pub struct Null;

/// A default produced by calling a zero-argument factory; the produced value is
/// resolved through the registry again.
pub struct DefaultFactory(Box<dyn Fn() -> Box<dyn Any>>);

impl DefaultFactory {
    pub fn new(factory: impl Fn() -> Box<dyn Any> + 'static) -> Self {
        Self(Box::new(factory))
    }

    fn produce(&self) -> Box<dyn Any> {
        (self.0)()
    }
}

/// An enumerated default; resolves to its underlying value.
pub struct Enumerated(Box<dyn Any>);

impl Enumerated {
    pub fn new(value: impl Any) -> Self {
        Self(Box::new(value))
    }
}

/// A default-value converter: predicate plus transform to a JSON value.
/// Returning `None` means the field documents no default.
pub trait DefaultConverter {
    fn matches(&self, value: &dyn Any) -> bool;

    fn convert(
        &self,
        value: &dyn Any,
        name: &str,
        registry: &ConverterRegistry,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<Option<Value>>;
}

/// Ordered default-value converter table.
pub struct DefaultManager {
    converters: Vec<Box<dyn DefaultConverter>>,
}

impl DefaultManager {
    pub fn new() -> Self {
        Self {
            converters: Vec::new(),
        }
    }

    pub fn register(&mut self, converter: Box<dyn DefaultConverter>) {
        self.converters.push(converter);
    }

    pub fn register_builtins(&mut self) {
        self.register(Box::new(ScalarConverter));
        self.register(Box::new(JsonConverter));
        self.register(Box::new(ListConverter));
        self.register(Box::new(FactoryConverter));
        self.register(Box::new(EnumeratedConverter));
        self.register(Box::new(NullConverter));
    }

    /// First-match resolution; an unmatched default degrades to no default
    /// under `ShowWarnings`.
    pub fn process(
        &self,
        value: &dyn Any,
        name: &str,
        registry: &ConverterRegistry,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<Option<Value>> {
        cx.context.current()?;
        debug!("converting default value for `{}`", name);
        match self.converters.iter().find(|c| c.matches(value)) {
            Some(converter) => converter.convert(value, name, registry, cx),
            None => match cx.options.strict_mode {
                StrictMode::FailOnError => Err(Error::MissingDefaultConverter {
                    name: name.to_string(),
                }),
                StrictMode::ShowWarnings => {
                    warn!("no default converter matched `{}`", name);
                    Ok(None)
                }
            },
        }
    }
}

impl Default for DefaultManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Passes native scalar defaults through unchanged.
pub struct ScalarConverter;

impl DefaultConverter for ScalarConverter {
    fn matches(&self, value: &dyn Any) -> bool {
        value.is::<String>()
            || value.is::<&'static str>()
            || value.is::<i64>()
            || value.is::<i32>()
            || value.is::<u64>()
            || value.is::<u32>()
            || value.is::<f64>()
            || value.is::<f32>()
            || value.is::<bool>()
    }

    fn convert(
        &self,
        value: &dyn Any,
        _name: &str,
        _registry: &ConverterRegistry,
        _cx: &mut Conversion<'_, '_>,
    ) -> Result<Option<Value>> {
        let resolved = if let Some(text) = value.downcast_ref::<String>() {
            Value::String(text.clone())
        } else if let Some(text) = value.downcast_ref::<&'static str>() {
            Value::String((*text).to_string())
        } else if let Some(number) = value.downcast_ref::<i64>() {
            Value::from(*number)
        } else if let Some(number) = value.downcast_ref::<i32>() {
            Value::from(*number)
        } else if let Some(number) = value.downcast_ref::<u64>() {
            Value::from(*number)
        } else if let Some(number) = value.downcast_ref::<u32>() {
            Value::from(*number)
        } else if let Some(number) = value.downcast_ref::<f64>() {
            Value::from(*number)
        } else if let Some(number) = value.downcast_ref::<f32>() {
            Value::from(f64::from(*number))
        } else if let Some(flag) = value.downcast_ref::<bool>() {
            Value::Bool(*flag)
        } else {
            return Ok(None);
        };
        Ok(Some(resolved))
    }
}

/// Passes literal JSON defaults through unchanged.
pub struct JsonConverter;

impl DefaultConverter for JsonConverter {
    fn matches(&self, value: &dyn Any) -> bool {
        value.is::<Value>()
    }

    fn convert(
        &self,
        value: &dyn Any,
        _name: &str,
        _registry: &ConverterRegistry,
        _cx: &mut Conversion<'_, '_>,
    ) -> Result<Option<Value>> {
        Ok(value.downcast_ref::<Value>().cloned())
    }
}

/// Resolves list defaults element by element.
pub struct ListConverter;

impl DefaultConverter for ListConverter {
    fn matches(&self, value: &dyn Any) -> bool {
        value.is::<Vec<Box<dyn Any>>>()
    }

    fn convert(
        &self,
        value: &dyn Any,
        name: &str,
        registry: &ConverterRegistry,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<Option<Value>> {
        let items = value.downcast_ref::<Vec<Box<dyn Any>>>().unwrap();
        let mut resolved = Vec::with_capacity(items.len());
        for item in items {
            let element = registry.process_default(&**item, name, cx)?;
            resolved.push(element.unwrap_or(Value::Null));
        }
        Ok(Some(Value::Array(resolved)))
    }
}

/// Invokes factory defaults and re-resolves their result.
pub struct FactoryConverter;

impl DefaultConverter for FactoryConverter {
    fn matches(&self, value: &dyn Any) -> bool {
        value.is::<DefaultFactory>()
    }

    fn convert(
        &self,
        value: &dyn Any,
        name: &str,
        registry: &ConverterRegistry,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<Option<Value>> {
        let factory = value.downcast_ref::<DefaultFactory>().unwrap();
        let produced = factory.produce();
        registry.process_default(&*produced, name, cx)
    }
}

/// Unwraps enumerated defaults to their underlying value.
pub struct EnumeratedConverter;

impl DefaultConverter for EnumeratedConverter {
    fn matches(&self, value: &dyn Any) -> bool {
        value.is::<Enumerated>()
    }

    fn convert(
        &self,
        value: &dyn Any,
        name: &str,
        registry: &ConverterRegistry,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<Option<Value>> {
        let enumerated = value.downcast_ref::<Enumerated>().unwrap();
        registry.process_default(&*enumerated.0, name, cx)
    }
}

/// Resolves the null marker to no default.
pub struct NullConverter;

impl DefaultConverter for NullConverter {
    fn matches(&self, value: &dyn Any) -> bool {
        value.is::<Null>()
    }

    fn convert(
        &self,
        _value: &dyn Any,
        _name: &str,
        _registry: &ConverterRegistry,
        _cx: &mut Conversion<'_, '_>,
    ) -> Result<Option<Value>> {
        Ok(None)
    }
}
