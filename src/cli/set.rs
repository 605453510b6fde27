//! Set command.

use tracing::info;

use crate::cli::output;
use crate::core::manager::ConfigManager;
use crate::core::paths::Paths;
use crate::error::Result;

/// Set one variable and save.
pub fn execute(paths: Paths, name: &str, value: &str) -> Result<()> {
    info!(variable = name, "setting variable");

    let manager = ConfigManager::open(paths);
    manager.set(name, value)?;

    output::success(&format!("set {}", output::key(name)));
    Ok(())
}
