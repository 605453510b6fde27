//! Error types.
//!
//! One enum per concern, wrapped by [`Error`]. Every failure propagates to
//! `main`, which prints it and exits non-zero. Nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Secret key storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read key file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write key file {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid key format: {0}")]
    InvalidFormat(String),

    #[error("unable to determine home directory")]
    NoHomeDir,
}

/// Variable template errors.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read template {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed template: {0}")]
    ParseYaml(#[from] serde_yaml::Error),

    #[error("malformed template: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("invalid variable name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid default for '{name}': expected a string, number or boolean")]
    InvalidDefault { name: String },
}

/// Encryption and decryption errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("decryption failed: stored configuration is corrupt: {0}")]
    CorruptPayload(#[from] serde_json::Error),
}

/// Configuration blob and access errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write configuration {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown variable: {0} (not declared in the template)")]
    UnknownVariable(String),
}

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
