//! Configuration stores and scope resolution
//!
//! Two physical scopes are persisted:
//! - User: `<config dir>/knob/config.toml`
//! - Project: `<project root>/knob.json`
//!
//! The virtual `all` scope merges both, project taking precedence.

pub mod format;
pub mod merge;
pub mod parser;
pub mod paths;
pub mod store;

pub use format::{ConfigFormat, ConfigSerializer};
pub use merge::{ResolvedScope, merge_scopes, resolve_scope};
pub use parser::{parse_assignment, parse_value};
pub use paths::config_path_for_scope;
pub use store::ConfigStore;

pub use crate::types::{ConfigScope, StoreScope};
