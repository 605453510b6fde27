//! Constants used throughout dbtr.
//!
//! Centralizes file names and environment variable names.

/// Encrypted configuration file name, relative to the working directory.
pub const CONFIG_FILE: &str = ".dbtr.enc";

/// Secret key file name, relative to the user's home directory.
pub const KEY_FILE: &str = ".dbtr.key";

/// Default variable template, relative to the working directory.
pub const TEMPLATE_FILE: &str = "variables.yml";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "DBTR_LOG";

/// Interactive input that sets a variable to null.
pub const NULL_TOKEN: &str = "None";

/// Prefix shown in place of the hidden part of a secret.
pub const MASK_MARKER: &str = "****";

/// Number of trailing characters of a secret revealed in prompts.
pub const MASK_REVEAL: usize = 3;
