//! Input validation.

use crate::error::{Result, TemplateError};

/// Validate a variable name.
///
/// Variable names end up as environment variable names in the worker
/// container, so they must match `[A-Za-z_][A-Za-z0-9_]*`.
///
/// # Errors
///
/// Returns `TemplateError::InvalidName` if the name is empty, starts with a
/// digit, or contains anything other than ASCII letters, digits and `_`.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason: String| -> crate::error::Error {
        TemplateError::InvalidName {
            name: name.to_string(),
            reason,
        }
        .into()
    };

    let Some(first) = name.chars().next() else {
        return Err(invalid("name cannot be empty".to_string()));
    };

    if first.is_ascii_digit() {
        return Err(invalid("cannot start with a digit".to_string()));
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(invalid(format!(
                "invalid character '{}' at position {}. Only letters, digits, and underscore are allowed",
                ch,
                i + 1
            )));
        }
    }

    Ok(())
}
