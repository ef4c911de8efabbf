//! Scope resolution and merging.
//!
//! The `all` scope is a read-only view: user entries first, then project
//! entries overlaid on top. Overlay is per top-level key; nested objects are
//! replaced, never merged.

use serde_json::{Map, Value};

use crate::types::{ConfigScope, StoreScope};

/// Values visible for a requested scope, plus the physical scope to use when
/// a single file is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScope {
    pub values: Map<String, Value>,
    pub raw_scope: StoreScope,
}

/// Overlay `project` onto `user`.
///
/// A key present in both keeps its user position and takes the project value.
pub fn merge_scopes(user: &Map<String, Value>, project: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = user.clone();
    for (key, value) in project {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

pub fn resolve_scope(
    scope: ConfigScope,
    user: Map<String, Value>,
    project: Map<String, Value>,
) -> ResolvedScope {
    match scope {
        ConfigScope::User => ResolvedScope {
            values: user,
            raw_scope: StoreScope::User,
        },
        ConfigScope::Project => ResolvedScope {
            values: project,
            raw_scope: StoreScope::Project,
        },
        ConfigScope::All => ResolvedScope {
            values: merge_scopes(&user, &project),
            raw_scope: StoreScope::Project,
        },
    }
}
