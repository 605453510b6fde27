//! Environment lookup.
//!
//! The manager reads the invoking process environment through
//! [`Environment`] so tests can supply a fixed map instead.

use std::collections::{BTreeMap, HashMap};
use std::env::VarError;

use tracing::warn;

/// Source of environment variable values.
pub trait Environment {
    /// Value of `name`, or `None` if it is not set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        match std::env::var(name) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(variable = name, "ignoring non-unicode environment value");
                None
            }
        }
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
