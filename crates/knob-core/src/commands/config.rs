//! `config` command implementation.
//!
//! Routes `config <subcommand> [args...]` to its handler and shapes the
//! result for the requested scope.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::{ConfigStore, ResolvedScope, parse_assignment, resolve_scope};
use crate::context::AppContext;
use crate::editor::{CommandEditor, Editor};
use crate::error::ConfigError;
use crate::types::{ConfigScope, StoreScope};

/// Canonical subcommand names, in the order shown to users.
pub const CONFIG_SUBCOMMANDS: &[&str] =
    &["get", "pick", "set", "delete", "list", "edit", "location"];

/// A routed `config` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSubcommand {
    Get,
    Pick,
    Set,
    Delete,
    List,
    Edit,
    Location,
}

impl ConfigSubcommand {
    /// Look up a subcommand by name or alias (`ls`, `del`, `rm`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "get" => Some(Self::Get),
            "pick" => Some(Self::Pick),
            "set" => Some(Self::Set),
            "delete" | "del" | "rm" => Some(Self::Delete),
            "list" | "ls" => Some(Self::List),
            "edit" => Some(Self::Edit),
            "location" => Some(Self::Location),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Pick => "pick",
            Self::Set => "set",
            Self::Delete => "delete",
            Self::List => "list",
            Self::Edit => "edit",
            Self::Location => "location",
        }
    }

    /// Split positionals into the subcommand and its arguments.
    pub fn route(positionals: &[String]) -> Result<(Self, &[String]), ConfigError> {
        let Some((name, args)) = positionals.split_first() else {
            return Err(ConfigError::MissingSubcommand {
                valid_options: CONFIG_SUBCOMMANDS,
            });
        };
        let subcommand =
            Self::from_name(name).ok_or_else(|| ConfigError::UnrecognizedSubcommand {
                found: name.clone(),
                valid_options: CONFIG_SUBCOMMANDS,
            })?;
        Ok((subcommand, args))
    }
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOptions {
    /// Scope requested with `--config`
    pub scope: ConfigScope,
}

impl ConfigOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(mut self, scope: ConfigScope) -> Self {
        self.scope = scope;
        self
    }
}

/// Keys picked from a scope, in request order.
///
/// A key missing from the scope is kept with `None`, so callers can tell
/// "asked for but unset" apart from "not asked for".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Picked {
    entries: Vec<(String, Option<Value>)>,
}

impl Picked {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key unless it was already picked.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<Value>) {
        let key = key.into();
        if !self.contains_key(&key) {
            self.entries.push((key, value));
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Value for `key`; `None` if the key is absent from the scope or was never picked.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, value)| value.as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object of the picked values. Absent keys are left out.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .filter_map(|(key, value)| value.clone().map(|value| (key.clone(), value)))
            .collect();
        Value::Object(map)
    }
}

impl From<Map<String, Value>> for Picked {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(key, value)| (key, Some(value)))
                .collect(),
        }
    }
}

/// Result of a `config` subcommand, rendered by the frontend.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOutput {
    /// A merged value, printed as-is.
    Scalar(Option<Value>),
    /// A single-scope value as JSON text; `None` when the key is unset.
    RawJson(Option<String>),
    /// A mapping of picked keys.
    Picked(Picked),
    /// `key=value` lines.
    Lines(Vec<String>),
    /// Path of a store file.
    Location(PathBuf),
    /// The subcommand only had side effects.
    Done,
}

/// `config` command orchestrator
#[derive(Debug)]
pub struct ConfigCommand<E = CommandEditor> {
    user: ConfigStore,
    project: ConfigStore,
    editor: E,
}

impl ConfigCommand {
    /// Create a config command over explicit stores, editing with `$VISUAL`/`$EDITOR`.
    pub fn new(user: ConfigStore, project: ConfigStore) -> Self {
        Self::with_editor(user, project, CommandEditor::from_env())
    }

    pub fn from_context(ctx: &AppContext) -> Self {
        Self::with_editor(
            ctx.config_store(StoreScope::User),
            ctx.config_store(StoreScope::Project),
            ctx.editor(),
        )
    }

    /// Create a config command with default paths
    pub fn with_defaults() -> anyhow::Result<Self> {
        let ctx = AppContext::from_env()?;
        Ok(Self::from_context(&ctx))
    }
}

impl<E: Editor> ConfigCommand<E> {
    pub fn with_editor(user: ConfigStore, project: ConfigStore, editor: E) -> Self {
        Self {
            user,
            project,
            editor,
        }
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn store(&self, scope: StoreScope) -> &ConfigStore {
        match scope {
            StoreScope::User => &self.user,
            StoreScope::Project => &self.project,
        }
    }

    /// Route `positionals` and run the selected subcommand.
    pub fn run(
        &self,
        positionals: &[String],
        options: &ConfigOptions,
    ) -> anyhow::Result<ConfigOutput> {
        let (subcommand, args) = ConfigSubcommand::route(positionals)?;
        let scope = options.scope;
        tracing::debug!(subcommand = subcommand.as_str(), %scope, "dispatching config command");

        match subcommand {
            ConfigSubcommand::Get => self.get(args, scope),
            ConfigSubcommand::Pick => Ok(ConfigOutput::Picked(self.pick(args, scope)?)),
            ConfigSubcommand::Set => {
                self.set(args, scope)?;
                Ok(ConfigOutput::Done)
            }
            ConfigSubcommand::Delete => {
                self.delete(args, scope)?;
                Ok(ConfigOutput::Done)
            }
            ConfigSubcommand::List => Ok(ConfigOutput::Lines(self.list(scope)?)),
            ConfigSubcommand::Edit => {
                self.edit(scope)?;
                Ok(ConfigOutput::Done)
            }
            ConfigSubcommand::Location => {
                Ok(ConfigOutput::Location(self.location(scope).to_path_buf()))
            }
        }
    }

    /// Read one key, several keys, or the whole scope.
    pub fn get(&self, args: &[String], scope: ConfigScope) -> anyhow::Result<ConfigOutput> {
        let key = match args {
            [key] => key,
            _ => return Ok(ConfigOutput::Picked(self.pick(args, scope)?)),
        };
        if key.is_empty() {
            return Err(ConfigError::KeyRequired.into());
        }

        let value = self.resolve(scope)?.values.get(key.as_str()).cloned();
        match scope {
            ConfigScope::All => Ok(ConfigOutput::Scalar(value)),
            ConfigScope::User | ConfigScope::Project => {
                let json = value.map(|value| serde_json::to_string(&value)).transpose()?;
                Ok(ConfigOutput::RawJson(json))
            }
        }
    }

    /// Pick `keys` from the scope, or the whole scope when `keys` is empty.
    pub fn pick(&self, keys: &[String], scope: ConfigScope) -> anyhow::Result<Picked> {
        let values = self.resolve(scope)?.values;
        if keys.is_empty() {
            return Ok(Picked::from(values));
        }

        let mut picked = Picked::new();
        for key in keys {
            picked.insert(key.clone(), values.get(key.as_str()).cloned());
        }
        Ok(picked)
    }

    /// `key=value` for every entry of the scope, in store order.
    pub fn list(&self, scope: ConfigScope) -> anyhow::Result<Vec<String>> {
        let values = self.resolve(scope)?.values;
        Ok(values
            .iter()
            .map(|(key, value)| format!("{}={}", key, display_value(value)))
            .collect())
    }

    /// Write `key=value` pairs to the user store (`--config user`) or the project store.
    pub fn set(&self, args: &[String], scope: ConfigScope) -> anyhow::Result<()> {
        if args.is_empty() {
            return Err(ConfigError::KeyRequired.into());
        }
        let assignments = args
            .iter()
            .map(|arg| parse_assignment(arg))
            .collect::<Result<Vec<_>, _>>()?;

        let store = self.store(scope.store_scope());
        let mut values = store.load()?;
        for (key, value) in assignments {
            values.insert(key, value);
        }
        store.save(&values)
    }

    /// Remove keys from the target store. Missing keys are ignored.
    pub fn delete(&self, keys: &[String], scope: ConfigScope) -> anyhow::Result<()> {
        if keys.is_empty() || keys.iter().any(|key| key.is_empty()) {
            return Err(ConfigError::KeyRequired.into());
        }

        let store = self.store(scope.store_scope());
        let mut values = store.load()?;
        let before = values.len();
        values.retain(|key, _| !keys.contains(key));

        if values.len() == before {
            tracing::debug!(scope = %store.scope(), "no keys to delete");
            return Ok(());
        }
        store.save(&values)
    }

    /// Open the target store in the editor, creating it first if needed.
    pub fn edit(&self, scope: ConfigScope) -> anyhow::Result<()> {
        let store = self.store(scope.store_scope());
        store.ensure_exists()?;
        self.editor.open(store.config_path())
    }

    /// Path of the store file behind `scope`.
    pub fn location(&self, scope: ConfigScope) -> &Path {
        // `all` is a merged view with no file of its own; report the project store.
        match scope {
            ConfigScope::User => self.user.config_path(),
            ConfigScope::Project | ConfigScope::All => self.project.config_path(),
        }
    }

    fn resolve(&self, scope: ConfigScope) -> anyhow::Result<ResolvedScope> {
        let (user, project) = match scope {
            ConfigScope::User => (self.user.load()?, Map::new()),
            ConfigScope::Project => (Map::new(), self.project.load()?),
            ConfigScope::All => (self.user.load()?, self.project.load()?),
        };
        Ok(resolve_scope(scope, user, project))
    }
}

/// Strings are shown without quotes; everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
