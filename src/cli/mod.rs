//! Command-line interface.

pub mod completions;
pub mod config;
pub mod env;
pub mod output;
pub mod prompt;
pub mod run;
pub mod set;
pub mod show;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants;
use crate::core::paths::{default_key_file, Paths};
use crate::error::Result;

/// dbtr - encrypted runtime configuration for the dbt runner container.
#[derive(Parser)]
#[command(
    name = "dbtr",
    about = "Encrypted runtime configuration for the dbt runner container",
    version
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Variable template (YAML, or TOML by extension)
    #[arg(long, global = true, env = "DBTR_TEMPLATE", default_value = constants::TEMPLATE_FILE)]
    pub template: PathBuf,

    /// Encrypted configuration file
    #[arg(long, global = true, env = "DBTR_CONFIG_FILE", default_value = constants::CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Secret key file [default: ~/.dbtr.key]
    #[arg(long, global = true, env = "DBTR_KEY_FILE")]
    pub key_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// File locations selected by flags, environment and defaults.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoHomeDir` if no key file was given and the home
    /// directory is unknown.
    pub fn paths(&self) -> Result<Paths> {
        let key_file = match &self.key_file {
            Some(path) => path.clone(),
            None => default_key_file()?,
        };
        Ok(Paths {
            key_file,
            config_file: self.config_file.clone(),
            template_file: self.template.clone(),
        })
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Edit the configuration interactively
    Config,

    /// Set one variable (use `None` to clear it)
    Set {
        /// Variable name as declared in the template
        name: String,
        /// New value
        value: String,
    },

    /// Show the current configuration with secrets masked
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the environment assignments passed to the worker container
    Env,

    /// Run a command with the configuration injected as env vars
    Run {
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Show file locations and whether a configuration has been saved
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, paths: Paths) -> Result<()> {
    use Command::*;

    match command {
        Config => config::execute(paths),
        Set { name, value } => set::execute(paths, &name, &value),
        Show { json } => show::execute(paths, json),
        Env => env::execute(paths),
        Run { command } => run::execute(paths, &command),
        Status => status::execute(paths),
        Completions { shell } => completions::execute(shell),
    }
}
