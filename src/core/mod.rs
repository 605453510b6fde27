//! Core library components.
//!
//! Secret key storage, template parsing, configuration merging and
//! encryption. Nothing in here prints; the CLI layer owns all output.

pub mod cipher;
pub mod constants;
pub mod domain;
pub mod environment;
pub mod key;
pub mod manager;
pub mod mask;
pub mod paths;
pub mod prompt;
pub mod store;
pub mod template;
pub mod validation;
