//! Configuration type.
//!
//! A typed mapping over the closed set of variables a [`Template`] declares.
//! Names outside that set are rejected instead of becoming new entries.

use std::collections::BTreeMap;

use crate::core::domain::Value;
use crate::core::template::{Template, Variable};
use crate::error::{CipherError, ConfigError, Result};

/// Decrypted blob contents: name to string-or-null.
pub type Stored = BTreeMap<String, Option<String>>;

/// A declared variable and its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub variable: Variable,
    pub value: Value,
}

impl Entry {
    pub fn name(&self) -> &str {
        &self.variable.name
    }
}

/// Values for every variable of a template, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    entries: Vec<Entry>,
    /// Persisted values whose names the template no longer declares.
    orphans: Stored,
}

impl Configuration {
    /// Every variable `Unset`.
    pub fn new(template: &Template) -> Self {
        Self::from_fn(template, |_| Value::Unset)
    }

    /// Build a configuration by resolving each declared variable.
    pub fn from_fn(template: &Template, mut resolve: impl FnMut(&Variable) -> Value) -> Self {
        let entries = template
            .variables()
            .iter()
            .map(|variable| Entry {
                value: resolve(variable),
                variable: variable.clone(),
            })
            .collect();
        Self {
            entries,
            orphans: Stored::new(),
        }
    }

    /// Build a configuration from decrypted blob contents.
    ///
    /// Declared variables missing from `stored` are resolved with `fallback`.
    /// Stored names the template does not declare are kept as orphans.
    pub fn from_stored(
        template: &Template,
        mut stored: Stored,
        mut fallback: impl FnMut(&Variable) -> Value,
    ) -> Self {
        let mut config = Self::from_fn(template, |variable| match stored.remove(&variable.name) {
            Some(value) => Value::from_stored(value),
            None => fallback(variable),
        });
        config.orphans = stored;
        config
    }

    /// Blob contents. `Unset` variables are omitted; orphans pass through.
    pub fn to_stored(&self) -> Stored {
        let mut stored = self.orphans.clone();
        for entry in &self.entries {
            if let Some(value) = entry.value.to_stored() {
                stored.insert(entry.name().to_string(), value.map(str::to_string));
            }
        }
        stored
    }

    /// Serialize to the JSON object stored in the blob.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::CorruptPayload` if serialization fails.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.to_stored()).map_err(|e| CipherError::CorruptPayload(e).into())
    }

    /// Parse the JSON object stored in the blob.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::CorruptPayload` if the payload is not an object
    /// of strings and nulls.
    pub fn parse_stored(json: &[u8]) -> Result<Stored> {
        serde_json::from_slice(json).map_err(|e| CipherError::CorruptPayload(e).into())
    }

    /// Value of a declared variable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownVariable` if the template does not declare
    /// `name`.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.entry(name).map(|e| &e.value)
    }

    /// Replace the value of a declared variable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownVariable` if the template does not declare
    /// `name`.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.variable.name == name)
            .ok_or_else(|| ConfigError::UnknownVariable(name.to_string()))?;
        entry.value = value;
        Ok(())
    }

    /// Entry for a declared variable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownVariable` if the template does not declare
    /// `name`.
    pub fn entry(&self, name: &str) -> Result<&Entry> {
        self.entries
            .iter()
            .find(|e| e.variable.name == name)
            .ok_or_else(|| ConfigError::UnknownVariable(name.to_string()).into())
    }

    /// Entries in template declaration order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Persisted values no longer declared by the template.
    pub fn orphans(&self) -> &Stored {
        &self.orphans
    }

    /// Carry orphans over from a previously loaded configuration.
    pub fn with_orphans(mut self, orphans: Stored) -> Self {
        self.orphans = orphans;
        self
    }
}
