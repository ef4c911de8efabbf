//! Shared core types used across configuration and command layers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scope requested with `--config`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigScope {
    /// User-level store only.
    User,
    /// Project-level store only.
    Project,
    /// Project values overlaid on user values.
    #[default]
    All,
}

impl ConfigScope {
    /// Physical store backing this scope when a single file is needed.
    ///
    /// `All` has no file of its own and falls back to the project store.
    pub fn store_scope(self) -> StoreScope {
        match self {
            ConfigScope::User => StoreScope::User,
            ConfigScope::Project | ConfigScope::All => StoreScope::Project,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigScope::User => "user",
            ConfigScope::Project => "project",
            ConfigScope::All => "all",
        }
    }
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigScope {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(ConfigScope::User),
            "project" => Ok(ConfigScope::Project),
            "all" => Ok(ConfigScope::All),
            _ => anyhow::bail!("Invalid config scope: '{}'. Use 'user', 'project' or 'all'", s),
        }
    }
}

/// A scope that is persisted to its own file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreScope {
    /// Per-user configuration, shared by every project.
    User,
    /// Configuration living in the project root.
    Project,
}

impl StoreScope {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreScope::User => "user",
            StoreScope::Project => "project",
        }
    }
}

impl fmt::Display for StoreScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
