//! Config command.
//!
//! Walks through every editable variable and saves the result.

use crate::cli::output;
use crate::cli::prompt::Terminal;
use crate::core::manager::ConfigManager;
use crate::core::paths::Paths;
use crate::error::Result;

/// Edit the configuration interactively.
pub fn execute(paths: Paths) -> Result<()> {
    let manager = ConfigManager::open(paths);

    let template = manager.template()?;
    if !template.description.is_empty() {
        output::header(&template.description);
    }
    output::dimmed("enter keeps the current value, None clears it");

    let config = manager.interactive_update(&mut Terminal::new())?;

    output::success(&format!(
        "saved {} variables to {}",
        config.entries().len(),
        output::path(&manager.paths().config_file)
    ));
    Ok(())
}
