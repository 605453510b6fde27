//! Variable template.
//!
//! The template is the source of truth for which variables exist, their
//! defaults and whether they are secret or user-editable. It is read fresh on
//! every invocation and never modified.
//!
//! ```yaml
//! description: dbt runner configuration
//! variables:
//!   DBT_TARGET:
//!     description: Target profile
//!     default: dev
//!   SNOWFLAKE_PASSWORD:
//!     description: Warehouse password
//!     secret: true
//! ```
//!
//! Files ending in `.toml` are parsed as TOML with the same shape.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::core::validation::validate_name;
use crate::error::{Result, TemplateError};

/// One declared variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub description: String,
    pub default: Option<String>,
    pub secret: bool,
    /// Whether the variable is offered for interactive editing.
    pub user: bool,
}

/// Ordered set of declared variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub description: String,
    variables: Vec<Variable>,
}

/// Raw variable entry; `default` is any scalar.
#[derive(Debug, Deserialize)]
struct RawVariable<V> {
    #[serde(default)]
    description: String,
    default: Option<V>,
    #[serde(default)]
    secret: bool,
    #[serde(default = "default_user")]
    user: bool,
}

fn default_user() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RawYamlTemplate {
    #[serde(default)]
    description: String,
    #[serde(default)]
    variables: serde_yaml::Mapping,
}

#[derive(Debug, Deserialize)]
struct RawTomlTemplate {
    #[serde(default)]
    description: String,
    #[serde(default)]
    variables: toml::Table,
}

impl Template {
    /// Build a template from already-validated variables.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::InvalidName` if a name is not a valid
    /// environment variable name.
    pub fn new(description: impl Into<String>, variables: Vec<Variable>) -> Result<Self> {
        for var in &variables {
            validate_name(&var.name)?;
        }
        Ok(Self {
            description: description.into(),
            variables,
        })
    }

    /// Load the template at `path`. `.toml` files are parsed as TOML,
    /// everything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError` if the file is missing, unreadable or
    /// malformed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading template");

        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                TemplateError::NotFound(path.to_path_buf())
            } else {
                TemplateError::ReadFailed {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let template = if is_toml {
            Self::from_toml(&contents)?
        } else {
            Self::from_yaml(&contents)?
        };

        debug!(variables = template.variables.len(), "template loaded");
        Ok(template)
    }

    /// Parse a YAML template. Declaration order is preserved.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError` if the document is malformed.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let raw: RawYamlTemplate =
            serde_yaml::from_str(contents).map_err(TemplateError::ParseYaml)?;

        let mut variables = Vec::with_capacity(raw.variables.len());
        for (name, body) in raw.variables {
            let name = match name {
                serde_yaml::Value::String(s) => s,
                other => yaml_scalar(&other).ok_or_else(|| TemplateError::InvalidName {
                    name: format!("{:?}", other),
                    reason: "variable names must be strings".to_string(),
                })?,
            };
            // `NAME:` with no body declares a variable with no metadata.
            let body = if body.is_null() {
                serde_yaml::Value::Mapping(serde_yaml::Mapping::new())
            } else {
                body
            };
            let raw: RawVariable<serde_yaml::Value> =
                serde_yaml::from_value(body).map_err(TemplateError::ParseYaml)?;
            let default = match raw.default {
                None => None,
                Some(value) if value.is_null() => None,
                Some(value) => Some(
                    yaml_scalar(&value)
                        .ok_or_else(|| TemplateError::InvalidDefault { name: name.clone() })?,
                ),
            };
            variables.push(Variable {
                name,
                description: raw.description,
                default,
                secret: raw.secret,
                user: raw.user,
            });
        }

        Self::new(raw.description, variables)
    }

    /// Parse a TOML template. Declaration order is preserved.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError` if the document is malformed.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let raw: RawTomlTemplate = toml::from_str(contents).map_err(TemplateError::ParseToml)?;

        let mut variables = Vec::with_capacity(raw.variables.len());
        for (name, body) in raw.variables {
            let raw: RawVariable<toml::Value> = body
                .try_into()
                .map_err(TemplateError::ParseToml)?;
            let default = match raw.default {
                None => None,
                Some(value) => Some(
                    toml_scalar(&value)
                        .ok_or_else(|| TemplateError::InvalidDefault { name: name.clone() })?,
                ),
            };
            variables.push(Variable {
                name,
                description: raw.description,
                default,
                secret: raw.secret,
                user: raw.user,
            });
        }

        Self::new(raw.description, variables)
    }

    /// Variables in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Look up a declared variable.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

fn yaml_scalar(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn toml_scalar(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}
