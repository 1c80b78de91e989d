//! OpenAPI documentation generated from a live route table.
//!
//! This library inspects a web application's registered routes and the
//! serialization schemas attached to them, and assembles an OpenAPI 3.0.3
//! document describing paths, operations, parameters, request/response bodies
//! and reusable component schemas. The host framework stays in charge of
//! routing and serving; this crate only reads the route table and produces the
//! document.
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`routing`] - Read-only interface to the host's route table
//! 2. [`documentation`] - Per-route metadata records attached to handlers
//! 3. [`fields`] - Serialization-schema field model for the built-in converters
//! 4. [`converters`] - Schema, default-value and path-parameter registries
//! 5. [`context`] - Single-slot documentation context for the build pass
//! 6. [`specification`] - OpenAPI document model with minimal rendering
//! 7. [`builder`] - Endpoint iteration and document assembly
//! 8. [`serializer`] - Serializes the document to YAML or JSON
//! 9. [`ui`] - Bodies and mount points for the document-serving endpoints
//!
//! # Example Usage
//!
//! ```
//! use openapi_from_routes::builder::OpenApiBuilder;
//! use openapi_from_routes::documentation::Documentation;
//! use openapi_from_routes::fields::{Attribute, Integer, ObjectSchema, Text};
//! use openapi_from_routes::routing::{Method, Route};
//! use openapi_from_routes::serializer::serialize_json;
//!
//! let routes = vec![
//!     Route::new("/users/<int:user_id>", [Method::Get]).document(
//!         Documentation::builder()
//!             .summary("Fetch a user")
//!             .response(
//!                 200,
//!                 ObjectSchema::new("User")
//!                     .attribute("id", Attribute::new(Integer))
//!                     .attribute("name", Attribute::new(Text)),
//!             )
//!             .build(),
//!     ),
//! ];
//!
//! let mut builder = OpenApiBuilder::new("My API", "1.0.0");
//! builder.add_routes(&routes).unwrap();
//! let json = serialize_json(builder.specification()).unwrap();
//! assert!(json.contains("/users/{user_id}"));
//! ```

pub mod builder;
pub mod context;
pub mod converters;
pub mod documentation;
pub mod error;
pub mod fields;
pub mod routing;
pub mod serializer;
pub mod specification;
pub mod ui;

pub use builder::{DocumentationOptions, OpenApiBuilder, ResponseDescriptionFallback, StrictMode};
pub use documentation::{Documentation, ResourceOptions};
pub use error::{Error, Result};
pub use routing::{Method, Route, RouteSource};
