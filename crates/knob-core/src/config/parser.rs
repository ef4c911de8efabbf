//! Parsing of `key=value` assignments given to `config set`.

use serde_json::Value;

use crate::error::ConfigError;

/// Split `key=value` on the first `=` and parse the value.
pub fn parse_assignment(arg: &str) -> Result<(String, Value), ConfigError> {
    let (key, raw) = arg
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidAssignment {
            arg: arg.to_string(),
        })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::KeyRequired);
    }
    Ok((key.to_string(), parse_value(raw)))
}

/// JSON literals keep their type; anything else is stored as a string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
