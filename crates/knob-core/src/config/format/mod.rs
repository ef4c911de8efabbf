//! On-disk formats for configuration stores.
//!
//! Every format normalizes to `serde_json::Map<String, Value>`, so the rest of
//! the crate never needs to know which file type backs a scope.

mod json;
mod toml;

use std::path::Path;

use anyhow::Result;
use serde_json::{Map, Value};

pub use json::JsonSerializer;
pub use toml::TomlSerializer;

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick a format from the file extension. Unknown extensions are JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Trait for serializing/deserializing configuration store files.
pub trait ConfigSerializer: Send + Sync {
    /// Load a configuration file and return its contents as a JSON-compatible map.
    ///
    /// Returns an empty map if the file does not exist.
    fn load(&self, path: &Path) -> Result<Map<String, Value>>;

    /// Save a JSON-compatible map to the configuration file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self, path: &Path, map: &Map<String, Value>) -> Result<()>;

    /// Get the format this serializer handles.
    fn format(&self) -> ConfigFormat;
}

/// Create a serializer for the given format.
pub fn serializer_for_format(format: ConfigFormat) -> Box<dyn ConfigSerializer> {
    match format {
        ConfigFormat::Json => Box::new(JsonSerializer),
        ConfigFormat::Toml => Box::new(TomlSerializer),
    }
}

fn create_parent_dir(path: &Path) -> Result<()> {
    use anyhow::Context;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }
    Ok(())
}
