//! High-level commands for knob operations.
//!
//! These commands are the public API called by the CLI frontend.

pub mod config;

pub use config::{
    CONFIG_SUBCOMMANDS, ConfigCommand, ConfigOptions, ConfigOutput, ConfigSubcommand, Picked,
    display_value,
};
