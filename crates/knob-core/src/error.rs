//! Usage errors raised by the `config` command.
//!
//! Store and editor failures are not listed here; they travel as
//! `anyhow::Error` with context naming the file or command.

use thiserror::Error;

/// Error code attached to usage errors about arguments.
pub const EUSAGE: &str = "EUSAGE";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No subcommand was given.
    #[error("config command requires a subcommand")]
    MissingSubcommand {
        valid_options: &'static [&'static str],
    },

    /// The subcommand is not one of the known names or aliases.
    #[error("Unrecognized config command")]
    UnrecognizedSubcommand {
        found: String,
        valid_options: &'static [&'static str],
    },

    /// A key argument was missing or empty.
    #[error("Key is required")]
    KeyRequired,

    /// A `set` argument had no `=`.
    #[error("Invalid key=value pair: '{arg}'")]
    InvalidAssignment { arg: String },
}

impl ConfigError {
    /// The rejected subcommand; `None` when it was absent or the error is not about routing.
    pub fn found(&self) -> Option<&str> {
        match self {
            ConfigError::UnrecognizedSubcommand { found, .. } => Some(found),
            _ => None,
        }
    }

    pub fn valid_options(&self) -> Option<&'static [&'static str]> {
        match self {
            ConfigError::MissingSubcommand { valid_options }
            | ConfigError::UnrecognizedSubcommand { valid_options, .. } => Some(valid_options),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&'static str> {
        match self {
            ConfigError::KeyRequired | ConfigError::InvalidAssignment { .. } => Some(EUSAGE),
            _ => None,
        }
    }
}
