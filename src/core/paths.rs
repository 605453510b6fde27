//! File locations.
//!
//! Every component receives its paths from a [`Paths`] value rather than
//! looking them up, so tests can point everything at a temporary directory.

use std::path::{Path, PathBuf};

use crate::core::constants;
use crate::error::{Result, StoreError};

/// Locations of the key file, the encrypted configuration and the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Per-user secret key file.
    pub key_file: PathBuf,
    /// Encrypted configuration blob.
    pub config_file: PathBuf,
    /// Variable template (YAML, or TOML by extension).
    pub template_file: PathBuf,
}

impl Paths {
    /// All three files inside one directory, using the default file names.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            key_file: dir.join(constants::KEY_FILE),
            config_file: dir.join(constants::CONFIG_FILE),
            template_file: dir.join(constants::TEMPLATE_FILE),
        }
    }
}

/// `~/.dbtr.key`
///
/// # Errors
///
/// Returns `StoreError::NoHomeDir` if the home directory is unknown.
pub fn default_key_file() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(home.join(constants::KEY_FILE))
}
