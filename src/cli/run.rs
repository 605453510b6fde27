//! Run command.
//!
//! Executes a command with the exported configuration as explicit
//! environment assignments. This is how the worker container receives it.

use std::process::Command;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::manager::ConfigManager;
use crate::core::paths::Paths;
use crate::error::{Error, Result};

/// Run a command with the configuration injected.
pub fn execute(paths: Paths, command: &[String]) -> Result<()> {
    let manager = ConfigManager::open(paths);
    let exit_code = run_with_config(&manager, command)?;
    std::process::exit(exit_code);
}

/// Run `command` with the exported configuration, returning its exit code.
fn run_with_config(manager: &ConfigManager, command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Other("no command specified".to_string()))?;

    let resolved = which::which(program)
        .map_err(|e| Error::Other(format!("command not found: {} ({})", program, e)))?;

    let config = manager.load()?;
    let vars = manager.export_for_process(&config);
    debug!(program = %resolved.display(), variables = vars.len(), "running command");

    let mut cmd = Command::new(resolved);
    cmd.args(args);
    for (name, value) in vars {
        let value = Zeroizing::new(value);
        cmd.env(name, value.as_str());
    }

    let status = cmd.status()?;
    // Killed by a signal: no exit code, report failure.
    Ok(status.code().unwrap_or(1))
}
