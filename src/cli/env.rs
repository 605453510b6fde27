//! Env command.
//!
//! Prints `NAME=value` lines, suitable for `docker run --env-file`.

use crate::core::manager::ConfigManager;
use crate::core::paths::Paths;
use crate::error::Result;

/// Print the environment assignments for the worker container.
pub fn execute(paths: Paths) -> Result<()> {
    let manager = ConfigManager::open(paths);
    let config = manager.load()?;

    for (name, value) in manager.export_for_process(&config) {
        println!("{}", assignment(&name, &value));
    }
    Ok(())
}

/// One `NAME=value` line. Values that could break the line structure are
/// double-quoted and escaped, so every variable yields exactly one line.
fn assignment(name: &str, value: &str) -> String {
    if needs_quotes(value) {
        format!("{}=\"{}\"", name, escape_env_value(value))
    } else {
        format!("{}={}", name, value)
    }
}

fn needs_quotes(value: &str) -> bool {
    value.contains(['\n', '\r', '"', '\'', '\\'])
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace)
}

fn escape_env_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
