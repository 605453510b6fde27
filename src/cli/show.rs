//! Show command.
//!
//! Prints the loaded configuration. Secret values are masked.

use serde_json::json;

use crate::cli::output;
use crate::core::domain::{Configuration, Entry, Value};
use crate::core::manager::ConfigManager;
use crate::core::mask::mask;
use crate::core::paths::Paths;
use crate::error::Result;

/// Show the current configuration.
pub fn execute(paths: Paths, as_json: bool) -> Result<()> {
    let manager = ConfigManager::open(paths);
    let config = manager.load()?;

    if as_json {
        println!("{}", to_json(&config));
        return Ok(());
    }

    output::section(&format!("Configuration ({})", manager.state()));
    if config.entries().is_empty() {
        output::dimmed("template declares no variables");
    }
    for entry in config.entries() {
        output::kv(&output::key(entry.name()), display_value(entry));
    }
    Ok(())
}

fn display_value(entry: &Entry) -> String {
    match &entry.value {
        Value::Set(s) if entry.variable.secret => mask(s),
        Value::Set(s) => s.clone(),
        Value::Null => "None".to_string(),
        Value::Unset => "(unset)".to_string(),
    }
}

fn to_json(config: &Configuration) -> String {
    let mut map = serde_json::Map::new();
    for entry in config.entries() {
        let value = match &entry.value {
            Value::Set(s) if entry.variable.secret => json!(mask(s)),
            Value::Set(s) => json!(s),
            Value::Null | Value::Unset => serde_json::Value::Null,
        };
        map.insert(entry.name().to_string(), value);
    }
    serde_json::Value::Object(map).to_string()
}
