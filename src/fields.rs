//! Serialization-schema field model understood by the built-in converters.
//!
//! These types play the role of an external serialization ecosystem: scalar
//! field markers, list/nested/nullable wrappers and whole object schemas with
//! declared, ordered attributes. The converter registry recognizes them through
//! downcast predicates, so third-party schema types never have to implement
//! anything from this crate; registering an additional converter is enough.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Plain string field.
#[derive(Debug, Clone, Copy)]
pub struct Text;

/// String field carrying an email address.
#[derive(Debug, Clone, Copy)]
pub struct Email;

/// Boolean field.
#[derive(Debug, Clone, Copy)]
pub struct Boolean;

/// Integer field.
#[derive(Debug, Clone, Copy)]
pub struct Integer;

/// Floating point field.
#[derive(Debug, Clone, Copy)]
pub struct Number;

/// String field carrying a UUID.
#[derive(Debug, Clone, Copy)]
pub struct Uuid;

/// ISO-8601 calendar date field.
#[derive(Debug, Clone, Copy)]
pub struct Date;

/// ISO-8601 date and time field.
#[derive(Debug, Clone, Copy)]
pub struct DateTime;

/// ISO-8601 time of day field.
#[derive(Debug, Clone, Copy)]
pub struct Time;

/// String field carrying a URL.
#[derive(Debug, Clone, Copy)]
pub struct Url;

/// Free-form key/value field, documented as a bare object.
#[derive(Debug, Clone, Copy)]
pub struct Mapping;

/// Homogeneous list field wrapping an item field type.
pub struct List {
    pub item: Box<dyn Any>,
    /// When set, the source also accepts a bare item instead of a list, and the
    /// documented schema becomes a `oneOf` of both forms.
    pub allow_scalar: bool,
}

impl List {
    pub fn of(item: impl Any) -> Self {
        Self {
            item: Box::new(item),
            allow_scalar: false,
        }
    }

    pub fn allow_scalar(mut self) -> Self {
        self.allow_scalar = true;
        self
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("List")
            .field("allow_scalar", &self.allow_scalar)
            .finish_non_exhaustive()
    }
}

/// Optional wrapper marking the inner field as nullable.
pub struct Nullable {
    pub inner: Box<dyn Any>,
}

impl Nullable {
    pub fn of(inner: impl Any) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl fmt::Debug for Nullable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Nullable").finish_non_exhaustive()
    }
}

/// Handle to an object schema, resolved eagerly or through a thunk.
///
/// The lazy form is what makes self-referential and mutually-recursive schema
/// graphs expressible: the thunk is only invoked during conversion, after the
/// referencing schema's name has already been reserved in the components
/// registry, so the recursion terminates on the name-keyed cache.
#[derive(Clone)]
pub enum SchemaRef {
    Eager(Arc<ObjectSchema>),
    Lazy(Arc<dyn Fn() -> Arc<ObjectSchema>>),
}

impl SchemaRef {
    pub fn eager(schema: Arc<ObjectSchema>) -> Self {
        SchemaRef::Eager(schema)
    }

    pub fn lazy(resolve: impl Fn() -> Arc<ObjectSchema> + 'static) -> Self {
        SchemaRef::Lazy(Arc::new(resolve))
    }

    pub fn resolve(&self) -> Arc<ObjectSchema> {
        match self {
            SchemaRef::Eager(schema) => Arc::clone(schema),
            SchemaRef::Lazy(resolve) => resolve(),
        }
    }
}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SchemaRef::Eager(schema) => write!(f, "SchemaRef::Eager({})", schema.name),
            SchemaRef::Lazy(_) => write!(f, "SchemaRef::Lazy"),
        }
    }
}

impl From<Arc<ObjectSchema>> for SchemaRef {
    fn from(schema: Arc<ObjectSchema>) -> Self {
        SchemaRef::Eager(schema)
    }
}

/// Field embedding another object schema.
#[derive(Debug)]
pub struct Nested {
    pub schema: SchemaRef,
    /// Whether the field holds a list of the nested objects.
    pub many: bool,
}

impl Nested {
    pub fn of(schema: impl Into<SchemaRef>) -> Self {
        Self {
            schema: schema.into(),
            many: false,
        }
    }

    pub fn many(mut self) -> Self {
        self.many = true;
        self
    }
}

/// A declared attribute of an object schema: the field type plus the wrapper
/// properties the object converter merges into the converted field schema.
pub struct Attribute {
    pub kind: Box<dyn Any>,
    pub required: bool,
    /// Default value, resolved through the default-value converter registry.
    /// Declaring a default also makes the attribute optional.
    pub default: Option<Box<dyn Any>>,
}

impl Attribute {
    pub fn new(kind: impl Any) -> Self {
        Self {
            kind: Box::new(kind),
            required: true,
            default: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_default(mut self, default: impl Any) -> Self {
        self.default = Some(Box::new(default));
        self
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("required", &self.required)
            .field("has_default", &self.default.is_some())
            .finish_non_exhaustive()
    }
}

/// A named object schema with ordered declared attributes.
///
/// The name is the stable deduplication key: converting the same name twice
/// yields one components entry and a reference to it.
pub struct ObjectSchema {
    pub name: String,
    pub attributes: IndexMap<String, Attribute>,
    /// Whether the value serializes as a list of objects.
    pub many: bool,
    pub options: Option<SchemaOptions>,
}

impl ObjectSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            many: false,
            options: None,
        }
    }

    pub fn attribute(mut self, key: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(key.into(), attribute);
        self
    }

    pub fn many(mut self) -> Self {
        self.many = true;
        self
    }

    pub fn options(mut self, options: SchemaOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn into_ref(self) -> Arc<ObjectSchema> {
        Arc::new(self)
    }
}

impl fmt::Debug for ObjectSchema {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ObjectSchema")
            .field("name", &self.name)
            .field("attributes", &self.attributes.keys().collect::<Vec<_>>())
            .field("many", &self.many)
            .finish_non_exhaustive()
    }
}

/// Documentation options attached to an object schema.
#[derive(Debug, Default)]
pub struct SchemaOptions {
    /// Per-attribute free-form overlays merged into the rendered field schema
    /// last, e.g. `{"example": "abc"}`.
    pub overrides: IndexMap<String, Map<String, Value>>,
    pub discriminator: Option<DiscriminatorOptions>,
}

impl SchemaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn override_attribute(
        mut self,
        key: impl Into<String>,
        overlay: Map<String, Value>,
    ) -> Self {
        self.overrides.insert(key.into(), overlay);
        self
    }

    pub fn discriminator(mut self, discriminator: DiscriminatorOptions) -> Self {
        self.discriminator = Some(discriminator);
        self
    }
}

/// Tagged-union configuration for an object schema.
#[derive(Debug)]
pub struct DiscriminatorOptions {
    /// Payload property holding the variant tag.
    pub property_name: String,
    /// Fold the base object schema into each variant via `allOf`.
    pub all_of: bool,
    /// Variant tag to variant schema mapping.
    pub mapping: IndexMap<String, SchemaRef>,
}

impl DiscriminatorOptions {
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            all_of: false,
            mapping: IndexMap::new(),
        }
    }

    pub fn all_of(mut self) -> Self {
        self.all_of = true;
        self
    }

    pub fn variant(mut self, tag: impl Into<String>, schema: impl Into<SchemaRef>) -> Self {
        self.mapping.insert(tag.into(), schema.into());
        self
    }
}
