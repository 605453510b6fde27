//! dbtr - encrypted runtime configuration for the dbt runner container.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dbtr::cli::output;
use dbtr::cli::{execute, Cli};
use dbtr::core::constants;
use dbtr::error::{CipherError, ConfigError, Error, TemplateError};

fn main() {
    let cli = Cli::parse();

    // DBTR_LOG wins over --verbose
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("dbtr=debug")
        } else {
            EnvFilter::new("dbtr=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let result = cli.paths().and_then(|paths| execute(cli.command, paths));

    if let Err(e) = result {
        let suggestion = match &e {
            Error::Template(TemplateError::NotFound(_)) => {
                Some("create variables.yml or pass --template")
            }
            Error::Cipher(CipherError::DecryptionFailed(_) | CipherError::CorruptPayload(_)) => {
                Some("restore the key file, or delete the configuration file to fall back to defaults")
            }
            Error::Config(ConfigError::UnknownVariable(_)) => Some("run: dbtr show"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
