//! Application context for unified dependency injection.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::ConfigStore;
use crate::config::paths::{default_user_config_dir, find_project_root};
use crate::editor::{CommandEditor, env_editor_command};
use crate::types::StoreScope;

/// Paths and collaborators resolved once per invocation.
///
/// The CLI creates this once and hands it to commands.
#[derive(Debug, Clone)]
pub struct AppContext {
    user_config_dir: PathBuf,
    project_root: PathBuf,
    editor_command: String,
}

impl AppContext {
    /// Create a new context with explicit paths.
    pub fn new(
        user_config_dir: PathBuf,
        project_root: PathBuf,
        editor_command: impl Into<String>,
    ) -> Self {
        Self {
            user_config_dir,
            project_root,
            editor_command: editor_command.into(),
        }
    }

    /// Resolve paths from the environment and the working directory.
    pub fn from_env() -> anyhow::Result<Self> {
        let user_config_dir = default_user_config_dir()?;
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let project_root = find_project_root(&cwd);

        tracing::debug!(
            user_config_dir = %user_config_dir.display(),
            project_root = %project_root.display(),
            "resolved app context"
        );

        Ok(Self::new(user_config_dir, project_root, env_editor_command()))
    }

    pub fn user_config_dir(&self) -> &Path {
        &self.user_config_dir
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn editor_command(&self) -> &str {
        &self.editor_command
    }

    /// Get a ConfigStore for the given scope.
    pub fn config_store(&self, scope: StoreScope) -> ConfigStore {
        ConfigStore::from_paths(scope, &self.user_config_dir, &self.project_root)
    }

    pub fn editor(&self) -> CommandEditor {
        CommandEditor::new(self.editor_command.clone())
    }
}
