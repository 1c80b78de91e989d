//! Schema converters.
//!
//! The schema table is where the recursive work happens: scalar field markers
//! map to primitive schemas, wrappers recurse through the registry, and object
//! schemas go through the name-keyed deduplication protocol that also breaks
//! self-referential schema graphs.

use std::any::Any;
use std::sync::Arc;

use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::Value;

use crate::builder::StrictMode;
use crate::error::{Error, Result};
use crate::fields;
use crate::specification::{Discriminator, Reference, Schema, SchemaOrRef};

use super::{Conversion, ConverterRegistry};

/// A schema converter: a predicate over candidate values plus the transform
/// producing the schema node.
pub trait SchemaConverter {
    /// Whether this converter can handle the value.
    fn matches(&self, value: &dyn Any) -> bool;

    /// Produce the schema node for a matched value. `name` is a diagnostic
    /// hint such as `UserSchema.email`.
    fn convert(
        &self,
        value: &dyn Any,
        name: &str,
        registry: &ConverterRegistry,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<SchemaOrRef>;
}

/// Ordered schema converter table.
pub struct SchemaManager {
    converters: Vec<Box<dyn SchemaConverter>>,
}

impl SchemaManager {
    pub fn new() -> Self {
        Self {
            converters: Vec::new(),
        }
    }

    pub fn register(&mut self, converter: Box<dyn SchemaConverter>) {
        self.converters.push(converter);
    }

    /// Register the converters for the built-in field model and native scalars.
    pub fn register_builtins(&mut self) {
        self.register(Box::new(EmailConverter));
        self.register(Box::new(TextConverter));
        self.register(Box::new(BooleanConverter));
        self.register(Box::new(IntegerConverter));
        self.register(Box::new(NumberConverter));
        self.register(Box::new(UuidConverter));
        self.register(Box::new(DateConverter));
        self.register(Box::new(DateTimeConverter));
        self.register(Box::new(TimeConverter));
        self.register(Box::new(UrlConverter));
        self.register(Box::new(MappingConverter));
        self.register(Box::new(ListConverter));
        self.register(Box::new(NullableConverter));
        self.register(Box::new(NestedConverter));
        self.register(Box::new(ObjectSchemaConverter));
        self.register(Box::new(NativeScalarConverter));
        self.register(Box::new(JsonValueConverter));
    }

    /// First-match resolution over the ordered table. A failed lookup is
    /// handled by the configured strict mode: fatal, or degraded to a
    /// placeholder schema with a warning.
    pub fn process(
        &self,
        value: &dyn Any,
        name: &str,
        registry: &ConverterRegistry,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<SchemaOrRef> {
        cx.context.current()?;
        debug!("converting schema value `{}`", name);
        match self.converters.iter().find(|c| c.matches(value)) {
            Some(converter) => converter.convert(value, name, registry, cx),
            None => match cx.options.strict_mode {
                StrictMode::FailOnError => Err(Error::MissingConverter {
                    name: name.to_string(),
                }),
                StrictMode::ShowWarnings => {
                    warn!("no schema converter matched `{}`", name);
                    Ok(Schema::with_example("<unknown>").into())
                }
            },
        }
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! scalar_converter {
    ($converter:ident, $field:ty, $schema:expr) => {
        pub struct $converter;

        impl SchemaConverter for $converter {
            fn matches(&self, value: &dyn Any) -> bool {
                value.is::<$field>()
            }

            fn convert(
                &self,
                _value: &dyn Any,
                _name: &str,
                _registry: &ConverterRegistry,
                _cx: &mut Conversion<'_, '_>,
            ) -> Result<SchemaOrRef> {
                Ok($schema.into())
            }
        }
    };
}

scalar_converter!(EmailConverter, fields::Email, Schema::with_format("string", "email"));
scalar_converter!(TextConverter, fields::Text, Schema::typed("string"));
scalar_converter!(BooleanConverter, fields::Boolean, Schema::typed("boolean"));
scalar_converter!(IntegerConverter, fields::Integer, Schema::typed("integer"));
scalar_converter!(NumberConverter, fields::Number, Schema::typed("number"));
scalar_converter!(UuidConverter, fields::Uuid, Schema::with_format("string", "uuid"));
scalar_converter!(DateConverter, fields::Date, Schema::with_format("string", "date"));
scalar_converter!(
    DateTimeConverter,
    fields::DateTime,
    Schema::with_format("string", "date-time")
);
scalar_converter!(TimeConverter, fields::Time, Schema::with_format("string", "time"));
scalar_converter!(UrlConverter, fields::Url, Schema::with_format("string", "url"));
scalar_converter!(MappingConverter, fields::Mapping, Schema::object());

/// Converts list fields; `allow_scalar` lists document as a `oneOf` of the
/// array form and the bare item form.
pub struct ListConverter;

impl SchemaConverter for ListConverter {
    fn matches(&self, value: &dyn Any) -> bool {
        value.is::<fields::List>()
    }

    fn convert(
        &self,
        value: &dyn Any,
        name: &str,
        registry: &ConverterRegistry,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<SchemaOrRef> {
        let list = value.downcast_ref::<fields::List>().unwrap();
        let items = registry.process_schema(&*list.item, name, cx)?;
        let array = Schema::array(items.clone());
        if list.allow_scalar {
            let mut either = Schema::default();
            either.one_of = vec![array.into(), items];
            Ok(either.into())
        } else {
            Ok(array.into())
        }
    }
}

/// Converts nullable wrappers by flagging the converted inner schema.
pub struct NullableConverter;

impl SchemaConverter for NullableConverter {
    fn matches(&self, value: &dyn Any) -> bool {
        value.is::<fields::Nullable>()
    }

    fn convert(
        &self,
        value: &dyn Any,
        name: &str,
        registry: &ConverterRegistry,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<SchemaOrRef> {
        let nullable = value.downcast_ref::<fields::Nullable>().unwrap();
        let mut inner = registry.process_schema(&*nullable.inner, name, cx)?;
        if let SchemaOrRef::Schema(schema) = &mut inner {
            schema.nullable = true;
        }
        Ok(inner)
    }
}

/// Converts nested object fields, wrapping in an array when `many` is set.
pub struct NestedConverter;

impl SchemaConverter for NestedConverter {
    fn matches(&self, value: &dyn Any) -> bool {
        value.is::<fields::Nested>()
    }

    fn convert(
        &self,
        value: &dyn Any,
        name: &str,
        registry: &ConverterRegistry,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<SchemaOrRef> {
        let nested = value.downcast_ref::<fields::Nested>().unwrap();
        let schema = nested.schema.resolve();
        let node = registry.process_schema(schema.as_ref(), name, cx)?;
        if nested.many {
            Ok(Schema::array(node).into())
        } else {
            Ok(node)
        }
    }
}

/// Converts named object schemas through the deduplication protocol.
///
/// The stable name is checked against the components registry before any field
/// recursion, and a placeholder is reserved under that name first; that order
/// is what terminates self-referential and mutually-recursive schema graphs.
pub struct ObjectSchemaConverter;

impl ObjectSchemaConverter {
    fn object_of(value: &dyn Any) -> Option<&fields::ObjectSchema> {
        if let Some(object) = value.downcast_ref::<fields::ObjectSchema>() {
            return Some(object);
        }
        value
            .downcast_ref::<Arc<fields::ObjectSchema>>()
            .map(Arc::as_ref)
    }

    fn convert_attributes(
        object: &fields::ObjectSchema,
        registry: &ConverterRegistry,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<IndexMap<String, SchemaOrRef>> {
        let mut properties = IndexMap::new();
        for (key, attribute) in &object.attributes {
            let hint = format!("{}.{}", object.name, key);
            let mut node = registry.process_schema(&*attribute.kind, &hint, cx)?;
            if let Some(options) = &object.options {
                if let Some(overlay) = options.overrides.get(key) {
                    node.set_options(overlay.clone());
                }
            }
            if !attribute.required {
                node.set_required(false);
            }
            if let Some(default) = &attribute.default {
                node.set_required(false);
                let resolved = registry.process_default(&**default, &hint, cx)?;
                if resolved.is_some() {
                    node.set_default(resolved);
                }
            }
            properties.insert(key.clone(), node);
        }
        Ok(properties)
    }

    fn assemble_discriminator(
        base: &Schema,
        name: &str,
        options: &fields::DiscriminatorOptions,
        registry: &ConverterRegistry,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<Schema> {
        let mut mapping = IndexMap::new();
        let mut variants = Vec::new();
        for (tag, variant) in &options.mapping {
            let schema = variant.resolve();
            let node = registry.process_schema(schema.as_ref(), tag, cx)?;
            match node.as_reference() {
                Some(reference) => {
                    if options.all_of {
                        if let Some(target) = reference.schema_name() {
                            if let Some(variant_schema) = cx.schemas.get_mut(target) {
                                variant_schema.all_of = vec![base.clone().into()];
                            }
                        }
                    }
                    mapping.insert(tag.clone(), reference.target.clone());
                    variants.push(Reference::schema(reference.schema_name().unwrap_or(tag)).into());
                }
                None => {
                    warn!(
                        "discriminator variant `{}` of `{}` did not resolve to a reference",
                        tag, name
                    );
                }
            }
        }
        let mut wrapper = Schema::object();
        wrapper.one_of = variants;
        wrapper.discriminator = Some(Discriminator {
            property_name: options.property_name.clone(),
            mapping,
        });
        Ok(wrapper)
    }
}

impl SchemaConverter for ObjectSchemaConverter {
    fn matches(&self, value: &dyn Any) -> bool {
        Self::object_of(value).is_some()
    }

    fn convert(
        &self,
        value: &dyn Any,
        _name: &str,
        registry: &ConverterRegistry,
        cx: &mut Conversion<'_, '_>,
    ) -> Result<SchemaOrRef> {
        let object = Self::object_of(value).unwrap();
        let schema_name = object.name.clone();

        if let Some(existing) = cx.schemas.get(&schema_name) {
            debug!("schema `{}` already registered, reusing reference", schema_name);
            let reference = Reference::from_schema(&schema_name, existing);
            return Ok(if object.many {
                Schema::array(reference.into()).into()
            } else {
                reference.into()
            });
        }

        // Reserve the slot before recursing into the attributes.
        cx.schemas.insert(schema_name.clone(), Schema::object());

        let properties = Self::convert_attributes(object, registry, cx)?;
        let mut schema = Schema::object();
        schema.properties = properties;
        cx.schemas.insert(schema_name.clone(), schema.clone());

        let discriminator = object.options.as_ref().and_then(|o| o.discriminator.as_ref());
        if let Some(options) = discriminator {
            let wrapper =
                Self::assemble_discriminator(&schema, &schema_name, options, registry, cx)?;
            cx.schemas.insert(schema_name.clone(), wrapper);
        }

        let reference = Reference::schema(&schema_name);
        Ok(if object.many {
            Schema::array(reference.into()).into()
        } else {
            reference.into()
        })
    }
}

/// Converts native Rust scalars into the matching primitive schema.
pub struct NativeScalarConverter;

impl SchemaConverter for NativeScalarConverter {
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
    ) -> Result<SchemaOrRef> {
        let schema = if value.is::<String>() || value.is::<&'static str>() {
            Schema::typed("string")
        } else if value.is::<f64>() || value.is::<f32>() {
            Schema::typed("number")
        } else if value.is::<bool>() {
            Schema::typed("boolean")
        } else {
            Schema::typed("integer")
        };
        Ok(schema.into())
    }
}

/// Converts literal JSON values into example-carrying schemas.
pub struct JsonValueConverter;

impl SchemaConverter for JsonValueConverter {
    fn matches(&self, value: &dyn Any) -> bool {
        value.is::<Value>()
    }

    fn convert(
        &self,
        value: &dyn Any,
        _name: &str,
        _registry: &ConverterRegistry,
        _cx: &mut Conversion<'_, '_>,
    ) -> Result<SchemaOrRef> {
        let value = value.downcast_ref::<Value>().unwrap();
        Ok(Schema::with_example(value.clone()).into())
    }
}
