//! TOML serializer for configuration stores.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use super::{ConfigFormat, ConfigSerializer, create_parent_dir};

/// TOML configuration file serializer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlSerializer;

impl ConfigSerializer for TomlSerializer {
    fn load(&self, path: &Path) -> Result<Map<String, Value>> {
        if !path.exists() {
            return Ok(Map::new());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?;

        Ok(toml_table_to_json_map(table))
    }

    fn save(&self, path: &Path, map: &Map<String, Value>) -> Result<()> {
        create_parent_dir(path)?;

        let table = json_map_to_toml_table(map)?;
        let content = toml::to_string_pretty(&table).context("Failed to serialize TOML config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    fn format(&self) -> ConfigFormat {
        ConfigFormat::Toml
    }
}

fn toml_table_to_json_map(table: toml::Table) -> Map<String, Value> {
    table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json_value(value)))
        .collect()
}

/// Convert a single TOML value to a JSON value.
fn toml_to_json_value(toml_value: toml::Value) -> Value {
    match toml_value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => {
            // serde_json::Number doesn't support NaN/Infinity, fall back to string
            serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(f.to_string()))
        }
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json_value).collect()),
        toml::Value::Table(table) => Value::Object(toml_table_to_json_map(table)),
    }
}

fn json_map_to_toml_table(map: &Map<String, Value>) -> Result<toml::Table> {
    let mut table = toml::Table::new();
    for (key, value) in map {
        let converted = json_to_toml_value(value)
            .with_context(|| format!("Cannot store key '{}' in TOML", key))?;
        table.insert(key.clone(), converted);
    }
    Ok(table)
}

/// Convert a single JSON value to a TOML value.
fn json_to_toml_value(json_value: &Value) -> Result<toml::Value> {
    match json_value {
        Value::Null => anyhow::bail!("TOML has no null value"),
        Value::Bool(b) => Ok(toml::Value::Boolean(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(toml::Value::Integer(i))
            } else if n.is_u64() {
                // TOML integers are i64; a float here would change the value.
                anyhow::bail!("Integer {} is out of TOML range", n)
            } else if let Some(f) = n.as_f64() {
                Ok(toml::Value::Float(f))
            } else {
                anyhow::bail!("Unsupported number type")
            }
        }
        Value::String(s) => Ok(toml::Value::String(s.clone())),
        Value::Array(arr) => {
            let toml_arr: Result<Vec<_>> = arr.iter().map(json_to_toml_value).collect();
            Ok(toml::Value::Array(toml_arr?))
        }
        Value::Object(obj) => Ok(toml::Value::Table(json_map_to_toml_table(obj)?)),
    }
}
