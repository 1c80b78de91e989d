//! Single-slot documentation context.
//!
//! Exactly one route is processed at a time; the context holds that route's
//! [`Documentation`] record while its schemas are converted. Entering an
//! occupied slot and converting without an active slot are both programming
//! errors, never policy-gated.

use log::debug;

use crate::documentation::Documentation;
use crate::error::{Error, Result};

/// Holds the documentation record of the route currently being processed.
#[derive(Debug, Default)]
pub struct DocumentationContext<'d> {
    current: Option<&'d Documentation>,
}

impl<'d> DocumentationContext<'d> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Install a record as the active one. Fails if another record is still
    /// active or if the record itself is malformed.
    pub fn enter(&mut self, documentation: &'d Documentation) -> Result<()> {
        if self.current.is_some() {
            return Err(Error::ContextOccupied);
        }
        documentation.validate()?;
        debug!("entering documentation context");
        self.current = Some(documentation);
        Ok(())
    }

    /// Clear the active record.
    pub fn exit(&mut self) {
        debug!("leaving documentation context");
        self.current = None;
    }

    /// The active record; conversions must only run inside a context.
    pub fn current(&self) -> Result<&'d Documentation> {
        self.current.ok_or(Error::MissingContext)
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}
