//! Config store for loading and saving a single scope's key/value file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::{Map, Value};

use crate::types::StoreScope;

use super::format::{ConfigFormat, serializer_for_format};
use super::paths::config_path_for_scope;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    scope: StoreScope,
    config_path: PathBuf,
}

impl ConfigStore {
    pub fn from_paths(scope: StoreScope, user_config_dir: &Path, project_root: &Path) -> Self {
        let config_path = config_path_for_scope(scope, user_config_dir, project_root);
        Self::at_path(scope, config_path)
    }

    /// Store backed by an explicit file; the format follows its extension.
    pub fn at_path(scope: StoreScope, config_path: impl Into<PathBuf>) -> Self {
        Self {
            scope,
            config_path: config_path.into(),
        }
    }

    pub fn scope(&self) -> StoreScope {
        self.scope
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn format(&self) -> ConfigFormat {
        ConfigFormat::from_path(&self.config_path)
    }

    pub fn exists(&self) -> bool {
        self.config_path.is_file()
    }

    pub fn load(&self) -> anyhow::Result<Map<String, Value>> {
        tracing::debug!(
            scope = %self.scope,
            path = %self.config_path.display(),
            "loading config store"
        );
        serializer_for_format(self.format())
            .load(&self.config_path)
            .with_context(|| format!("Failed to load {} config", self.scope))
    }

    pub fn save(&self, values: &Map<String, Value>) -> anyhow::Result<()> {
        serializer_for_format(self.format())
            .save(&self.config_path, values)
            .with_context(|| format!("Failed to save {} config", self.scope))?;
        tracing::info!(
            scope = %self.scope,
            path = %self.config_path.display(),
            keys = values.len(),
            "saved config store"
        );
        Ok(())
    }

    /// Write an empty store if the file is missing, so it can be opened in an editor.
    pub fn ensure_exists(&self) -> anyhow::Result<()> {
        if self.exists() {
            return Ok(());
        }
        self.save(&Map::new())
    }
}
