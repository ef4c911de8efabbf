//! Launching an external editor for `config edit`.

use std::path::Path;
use std::process::Command;

use anyhow::Context;

/// Opens a file for interactive editing and returns once editing is done.
pub trait Editor {
    fn open(&self, path: &Path) -> anyhow::Result<()>;
}

/// Editor started as a child process, e.g. `vi` or `code --wait`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(env_editor_command())
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Editor for CommandEditor {
    fn open(&self, path: &Path) -> anyhow::Result<()> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| anyhow::anyhow!("Editor command is empty"))?;

        tracing::debug!(editor = %self.command, path = %path.display(), "launching editor");
        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .with_context(|| format!("Failed to launch editor: {}", self.command))?;

        if !status.success() {
            anyhow::bail!("Editor '{}' exited with {}", self.command, status);
        }
        Ok(())
    }
}

/// `$VISUAL`, then `$EDITOR`, then the platform fallback.
pub fn env_editor_command() -> String {
    resolve_editor_command(std::env::var("VISUAL").ok(), std::env::var("EDITOR").ok())
}

pub fn default_editor_command() -> &'static str {
    if cfg!(windows) { "notepad" } else { "vi" }
}

fn resolve_editor_command(visual: Option<String>, editor: Option<String>) -> String {
    visual
        .into_iter()
        .chain(editor)
        .find(|command| !command.trim().is_empty())
        .unwrap_or_else(|| default_editor_command().to_string())
}
