//! Variable value.

use crate::core::constants::NULL_TOKEN;

/// The value of one configuration variable.
///
/// `Null` is an explicit "no value" that overrides any template default.
/// `Unset` means no source provided anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Value {
    Set(String),
    Null,
    #[default]
    Unset,
}

impl Value {
    /// Value as found in a persisted blob entry.
    pub fn from_stored(stored: Option<String>) -> Self {
        match stored {
            Some(s) => Self::Set(s),
            None => Self::Null,
        }
    }

    /// Blob representation. `None` means the entry is omitted.
    pub fn to_stored(&self) -> Option<Option<&str>> {
        match self {
            Self::Set(s) => Some(Some(s.as_str())),
            Self::Null => Some(None),
            Self::Unset => None,
        }
    }

    /// Resolve a user answer against the value it would replace.
    ///
    /// Empty input keeps `current`, the literal `None` clears the value, and
    /// anything else replaces it.
    pub fn from_input(input: &str, current: &Value) -> Self {
        if input.is_empty() {
            current.clone()
        } else if input == NULL_TOKEN {
            Self::Null
        } else {
            Self::Set(input.to_string())
        }
    }

    /// The string value, if set.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Set(s) => Some(s.as_str()),
            Self::Null | Self::Unset => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Set(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Set(s)
    }
}
