//! Knob Core Library
//!
//! Scoped key/value configuration: a user store, a project store, and a
//! merged view of both, driven through the `config` command.

pub mod commands;
pub mod config;
pub mod context;
pub mod editor;
pub mod error;
pub mod types;

/// Re-exports of commonly used types
pub mod prelude {
    // Commands
    pub use crate::commands::{
        ConfigCommand, ConfigOptions, ConfigOutput, ConfigSubcommand, Picked,
    };

    // Configuration
    pub use crate::config::{ConfigStore, ResolvedScope};
    pub use crate::context::AppContext;
    pub use crate::editor::{CommandEditor, Editor};
    pub use crate::error::ConfigError;
    pub use crate::types::{ConfigScope, StoreScope};
}
