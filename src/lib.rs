//! dbtr - encrypted runtime configuration for the dbt runner container.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── config        # Interactive editing
//! │   ├── set           # Single-variable write
//! │   ├── show          # Masked listing
//! │   ├── env           # NAME=value export
//! │   ├── run           # Run with injected configuration
//! │   ├── status        # Paths and persistence state
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── template      # Variable template (YAML/TOML)
//!     ├── domain/       # Configuration and Value types
//!     ├── manager       # Load, merge, prompt, persist, export
//!     ├── store/        # Secret key storage (file, memory)
//!     ├── cipher/       # Blob encryption (age)
//!     ├── environment   # Process environment lookup
//!     └── mask          # Secret masking
//! ```
//!
//! # Example
//!
//! ```ignore
//! use dbtr::core::manager::ConfigManager;
//! use dbtr::core::paths::Paths;
//!
//! let manager = ConfigManager::open(Paths::in_dir(&project_dir));
//! let config = manager.load()?;
//! for (name, value) in manager.export_for_process(&config) {
//!     command.env(name, value);
//! }
//! ```

pub mod cli;
pub mod core;
pub mod error;
