//! Rendering of `config` results for the terminal.

use anyhow::Result;
use serde_json::Value;

use knob_core::commands::{ConfigOutput, display_value};

use crate::OutputFormat;

/// Text to print for `output`, or `None` when nothing should be printed.
pub fn render(output: &ConfigOutput, format: OutputFormat) -> Result<Option<String>> {
    match format {
        OutputFormat::Text => render_text(output),
        OutputFormat::Json => Ok(render_json(output).map(|value| value.to_string())),
    }
}

fn render_text(output: &ConfigOutput) -> Result<Option<String>> {
    let text = match output {
        ConfigOutput::Scalar(value) => value.as_ref().map(display_value),
        ConfigOutput::RawJson(json) => json.clone(),
        ConfigOutput::Picked(picked) => Some(serde_json::to_string_pretty(&picked.to_json())?),
        ConfigOutput::Lines(lines) if lines.is_empty() => None,
        ConfigOutput::Lines(lines) => Some(lines.join("\n")),
        ConfigOutput::Location(path) => Some(path.display().to_string()),
        ConfigOutput::Done => None,
    };
    Ok(text)
}

fn render_json(output: &ConfigOutput) -> Option<Value> {
    match output {
        ConfigOutput::Scalar(value) => Some(value.clone().unwrap_or(Value::Null)),
        ConfigOutput::RawJson(json) => Some(
            json.as_deref()
                .and_then(|json| serde_json::from_str(json).ok())
                .unwrap_or(Value::Null),
        ),
        ConfigOutput::Picked(picked) => Some(picked.to_json()),
        ConfigOutput::Lines(lines) => Some(Value::from(lines.clone())),
        ConfigOutput::Location(path) => Some(Value::String(path.display().to_string())),
        ConfigOutput::Done => None,
    }
}
