//! Config path resolution helpers.

use std::path::{Path, PathBuf};

use crate::types::StoreScope;

/// File name of the user-level store inside the user config directory.
pub const USER_CONFIG_FILE: &str = "config.toml";

/// File name of the project-level store inside the project root.
pub const PROJECT_CONFIG_FILE: &str = "knob.json";

/// Environment variable overriding the user config directory.
pub const CONFIG_DIR_ENV: &str = "KNOB_CONFIG_DIR";

pub fn config_path_for_scope(
    scope: StoreScope,
    user_config_dir: &Path,
    project_root: &Path,
) -> PathBuf {
    match scope {
        StoreScope::User => user_config_dir.join(USER_CONFIG_FILE),
        StoreScope::Project => project_root.join(PROJECT_CONFIG_FILE),
    }
}

/// Default user config directory: `$KNOB_CONFIG_DIR`, then the platform
/// config dir, then `~/.config/knob`.
pub fn default_user_config_dir() -> anyhow::Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = dirs::config_dir() {
        return Ok(dir.join("knob"));
    }
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(home.join(".config").join("knob"))
}

/// Walk up from `start` to the nearest directory holding a project store.
///
/// Falls back to `start` itself so a first `set` creates the store in the
/// working directory.
pub fn find_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_CONFIG_FILE).is_file())
        .unwrap_or(start)
        .to_path_buf()
}
