#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use knob_core::commands::ConfigCommand;
use knob_core::config::ConfigStore;
use knob_core::editor::Editor;
use knob_core::types::StoreScope;

/// Editor that records the paths it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingEditor {
    pub opened: RefCell<Vec<PathBuf>>,
}

impl Editor for RecordingEditor {
    fn open(&self, path: &Path) -> anyhow::Result<()> {
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

/// Isolated user config dir and project root.
pub struct Fixture {
    pub temp: TempDir,
    pub user_dir: PathBuf,
    pub project_root: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let user_dir = temp.path().join("config");
        let project_root = temp.path().join("project");
        std::fs::create_dir_all(&user_dir).unwrap();
        std::fs::create_dir_all(&project_root).unwrap();
        Self {
            temp,
            user_dir,
            project_root,
        }
    }

    pub fn user_path(&self) -> PathBuf {
        self.user_dir.join("config.toml")
    }

    pub fn project_path(&self) -> PathBuf {
        self.project_root.join("knob.json")
    }

    pub fn write_user(&self, toml: &str) {
        std::fs::write(self.user_path(), toml).unwrap();
    }

    pub fn write_project(&self, json: &str) {
        std::fs::write(self.project_path(), json).unwrap();
    }

    pub fn command(&self) -> ConfigCommand<RecordingEditor> {
        ConfigCommand::with_editor(
            ConfigStore::from_paths(StoreScope::User, &self.user_dir, &self.project_root),
            ConfigStore::from_paths(StoreScope::Project, &self.user_dir, &self.project_root),
            RecordingEditor::default(),
        )
    }
}

pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
