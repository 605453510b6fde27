//! Configuration manager.
//!
//! Merges the variable template, the encrypted blob and the process
//! environment into a [`Configuration`], and persists it back.
//!
//! Runtime precedence for a variable, highest first:
//!
//! 1. the invoking process environment
//! 2. the persisted blob
//! 3. the template default
//! 4. nothing (exported as an empty string)

use std::collections::BTreeMap;
use std::fs;

use tracing::{debug, info, warn};

use crate::core::cipher::{Age, Cipher};
use crate::core::constants::NULL_TOKEN;
use crate::core::domain::{Configuration, Value};
use crate::core::environment::{Environment, ProcessEnv};
use crate::core::mask::mask;
use crate::core::paths::Paths;
use crate::core::prompt::{Prompt, Prompter};
use crate::core::store::{FileKeyStore, KeyStore};
use crate::core::template::{Template, Variable};
use crate::error::{ConfigError, Result};

/// Whether a blob has been written yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigState {
    /// No blob on disk; values come from the environment and defaults.
    Unpersisted,
    /// A blob exists and reflects the last explicit write.
    Persisted,
}

impl std::fmt::Display for ConfigState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unpersisted => write!(f, "unpersisted"),
            Self::Persisted => write!(f, "persisted"),
        }
    }
}

/// Loads, updates and persists the runtime configuration.
pub struct ConfigManager {
    paths: Paths,
    keys: Box<dyn KeyStore>,
    env: Box<dyn Environment>,
    cipher: Box<dyn Cipher>,
}

impl ConfigManager {
    /// Manager over explicit collaborators, encrypting with [`Age`].
    pub fn new(paths: Paths, keys: Box<dyn KeyStore>, env: Box<dyn Environment>) -> Self {
        Self {
            paths,
            keys,
            env,
            cipher: Box::new(Age),
        }
    }

    /// Manager using the key file named in `paths` and the process
    /// environment.
    pub fn open(paths: Paths) -> Self {
        let keys = Box::new(FileKeyStore::new(paths.key_file.clone()));
        Self::new(paths, keys, Box::new(ProcessEnv))
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    pub fn key_store(&self) -> &dyn KeyStore {
        self.keys.as_ref()
    }

    /// Load the variable template.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError` if the template is missing or malformed.
    pub fn template(&self) -> Result<Template> {
        Template::load(&self.paths.template_file)
    }

    /// Current persistence state.
    pub fn state(&self) -> ConfigState {
        if self.paths.config_file.exists() {
            ConfigState::Persisted
        } else {
            ConfigState::Unpersisted
        }
    }

    /// Load the current configuration.
    ///
    /// Without a blob every variable comes from the environment, else its
    /// default; nothing is written. With a blob the stored values are used,
    /// and variables the blob predates fall back the same way.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError` for a bad template, `ConfigError` or
    /// `StoreError` for I/O failures, and `CipherError` if the blob does not
    /// decrypt with the current key or is corrupt.
    pub fn load(&self) -> Result<Configuration> {
        let template = self.template()?;
        self.load_with(&template)
    }

    fn load_with(&self, template: &Template) -> Result<Configuration> {
        let path = &self.paths.config_file;
        if !path.exists() {
            debug!(path = %path.display(), "no stored configuration, using environment and defaults");
            return Ok(Configuration::from_fn(template, |v| self.fallback(v)));
        }

        debug!(path = %path.display(), "loading configuration");
        let ciphertext = fs::read(path).map_err(|source| ConfigError::ReadFailed {
            path: path.clone(),
            source,
        })?;
        let key = self.keys.get_or_create_key()?;
        let plaintext = self.cipher.decrypt(&ciphertext, &key)?;
        let stored = Configuration::parse_stored(&plaintext)?;

        let config = Configuration::from_stored(template, stored, |v| self.fallback(v));
        if !config.orphans().is_empty() {
            let names: Vec<&str> = config.orphans().keys().map(String::as_str).collect();
            warn!(
                variables = %names.join(", "),
                "stored configuration has variables the template no longer declares; keeping them"
            );
        }

        debug!(variables = config.entries().len(), "configuration loaded");
        Ok(config)
    }

    /// Environment value if set, else the template default, else `Unset`.
    fn fallback(&self, variable: &Variable) -> Value {
        self.env
            .var(&variable.name)
            .or_else(|| variable.default.clone())
            .map(Value::Set)
            .unwrap_or_default()
    }

    /// Encrypt `config` and overwrite the blob.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the key cannot be obtained, `CipherError` if
    /// encryption fails, or `ConfigError::WriteFailed`.
    pub fn write(&self, config: &Configuration) -> Result<()> {
        let path = &self.paths.config_file;
        debug!(path = %path.display(), "saving configuration");

        let key = self.keys.get_or_create_key()?;
        let plaintext = zeroize::Zeroizing::new(config.to_json()?);
        let ciphertext = self.cipher.encrypt(&plaintext, &key)?;

        fs::write(path, ciphertext).map_err(|source| ConfigError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        info!(
            path = %path.display(),
            cipher = self.cipher.name(),
            "configuration saved"
        );
        Ok(())
    }

    /// Ask for every user-editable variable in template order, then persist.
    ///
    /// Empty answers keep the loaded value and `None` clears it. Nothing is
    /// written unless every variable is resolved.
    ///
    /// # Errors
    ///
    /// Everything [`load`](Self::load) and [`write`](Self::write) return, plus
    /// any prompt failure.
    pub fn interactive_update(&self, prompter: &mut dyn Prompter) -> Result<Configuration> {
        let template = self.template()?;
        let current = self.load_with(&template)?;

        let mut updated = Configuration::new(&template).with_orphans(current.orphans().clone());
        for entry in current.entries() {
            let variable = &entry.variable;
            let value = if variable.user {
                let prompt = prompt_for(variable, &entry.value);
                let answer = prompter.ask(&prompt)?;
                Value::from_input(&answer, &entry.value)
            } else {
                debug!(variable = %variable.name, "not user-editable, keeping value");
                entry.value.clone()
            };
            updated.set(&variable.name, value)?;
        }

        self.write(&updated)?;
        Ok(updated)
    }

    /// Set one variable from a raw answer and persist.
    ///
    /// `raw` is interpreted like an interactive answer: `None` clears the
    /// value and an empty string keeps it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownVariable` for an undeclared name, plus
    /// everything [`load`](Self::load) and [`write`](Self::write) return.
    pub fn set(&self, name: &str, raw: &str) -> Result<Configuration> {
        let mut config = self.load()?;
        let value = Value::from_input(raw, config.get(name)?);
        config.set(name, value)?;
        self.write(&config)?;
        Ok(config)
    }

    /// Environment assignments for a child process.
    ///
    /// Declared variables only; orphans are not exported. A variable already
    /// set in the invoking environment keeps that value. Null and missing
    /// values become empty strings. The caller's environment is not modified.
    pub fn export_for_process(&self, config: &Configuration) -> BTreeMap<String, String> {
        config
            .entries()
            .iter()
            .map(|entry| {
                let name = entry.name();
                let value = self.env.var(name).unwrap_or_else(|| match &entry.value {
                    Value::Set(s) => s.clone(),
                    Value::Null => String::new(),
                    Value::Unset => entry.variable.default.clone().unwrap_or_default(),
                });
                (name.to_string(), value)
            })
            .collect()
    }
}

/// Current value shown in a prompt, i.e. what an empty answer keeps.
/// Unset variables show the template default, explicit nulls show `None`.
/// Secrets are masked.
pub fn current_hint(variable: &Variable, value: &Value) -> String {
    let current = match value {
        Value::Set(s) => s.as_str(),
        Value::Null => return NULL_TOKEN.to_string(),
        Value::Unset => variable.default.as_deref().unwrap_or_default(),
    };
    if variable.secret {
        mask(current)
    } else {
        current.to_string()
    }
}

fn prompt_for(variable: &Variable, value: &Value) -> Prompt {
    Prompt {
        name: variable.name.clone(),
        description: variable.description.clone(),
        hint: current_hint(variable, value),
        secret: variable.secret,
    }
}
