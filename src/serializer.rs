//! Serialization of the rendered OpenAPI document to YAML or JSON.
//!
//! The functions accept the document model directly; rendering to the minimal
//! value tree happens through the model's own `render` implementation.

use crate::specification::OpenAPI;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes an OpenAPI document to YAML format.
///
/// # Errors
///
/// Returns an error if rendering or serialization fails.
pub fn serialize_yaml(doc: &OpenAPI) -> Result<String> {
    debug!("Serializing OpenAPI document to YAML");
    let value = doc.render().context("Failed to render OpenAPI document")?;
    serde_yaml::to_string(&value).context("Failed to serialize OpenAPI document to YAML")
}

/// Serializes an OpenAPI document to JSON format with pretty printing.
///
/// # Errors
///
/// Returns an error if rendering or serialization fails.
pub fn serialize_json(doc: &OpenAPI) -> Result<String> {
    debug!("Serializing OpenAPI document to JSON");
    let value = doc.render().context("Failed to render OpenAPI document")?;
    serde_json::to_string_pretty(&value).context("Failed to serialize OpenAPI document to JSON")
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does. Parent
/// directories are created as needed.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
