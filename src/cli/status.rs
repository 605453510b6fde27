//! Status command.

use std::path::Path;

use chrono::{DateTime, Local};

use crate::cli::output;
use crate::core::manager::{ConfigManager, ConfigState};
use crate::core::paths::Paths;
use crate::error::Result;

/// Show file locations and persistence state.
pub fn execute(paths: Paths) -> Result<()> {
    let manager = ConfigManager::open(paths);
    let paths = manager.paths();

    output::section("dbtr status");

    match manager.template() {
        Ok(template) => output::kv(
            "template",
            format!(
                "{} ({} variables)",
                output::path(&paths.template_file),
                template.len()
            ),
        ),
        Err(e) => output::kv("template", format!("{} ({})", output::path(&paths.template_file), e)),
    }

    let state = manager.state();
    let config_detail = match state {
        ConfigState::Persisted => match modified(&paths.config_file) {
            Some(when) => format!("{}, written {}", state, when),
            None => state.to_string(),
        },
        ConfigState::Unpersisted => format!("{}, using environment and defaults", state),
    };
    output::kv(
        "config",
        format!("{} ({})", output::path(&paths.config_file), config_detail),
    );

    let keys = manager.key_store();
    let key_detail = if keys.has_key() {
        match keys.get_or_create_key().and_then(|key| key.fingerprint()) {
            Ok(fp) => format!("fingerprint {}", fp),
            Err(e) => e.to_string(),
        }
    } else {
        "not created yet".to_string()
    };
    output::kv(
        "key",
        format!("{} ({})", output::path(&paths.key_file), key_detail),
    );

    if state == ConfigState::Unpersisted {
        output::hint("run: dbtr config");
    }
    Ok(())
}

fn modified(path: &Path) -> Option<String> {
    let time = std::fs::metadata(path).ok()?.modified().ok()?;
    let local: DateTime<Local> = time.into();
    Some(local.format("%Y-%m-%d %H:%M:%S").to_string())
}
