//! Host settings installer.
//!
//! Registers (or removes) the hook as a `PreToolUse` command in the host's
//! `settings.json`, leaving every other key untouched.

use serde_json::{json, Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Tools the hook is registered for
pub const HOOK_MATCHER: &str = "Bash|Task";

/// Marker used to recognize our own entries
pub const HOOK_MARKER: &str = "autopilot-hook";

/// Errors produced while editing the host settings file.
#[derive(Debug, Error)]
pub enum InstallError {
    /// No home directory to derive the default settings path from.
    #[error("Cannot locate home directory (HOME is not set)")]
    NoHomeDir,
    /// Reading or writing the settings file failed.
    #[error("Settings file {path}: {source}")]
    Io {
        /// Settings file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The settings file is not valid JSON.
    #[error("Invalid JSON in settings file {path}: {source}")]
    Json {
        /// Settings file path.
        path: PathBuf,
        /// JSON parsing error.
        source: serde_json::Error,
    },
    /// A key has an unexpected type, e.g. `hooks` is not an object.
    #[error("Unexpected settings layout: `{0}` has the wrong type")]
    Layout(&'static str),
}

/// Result type for installer operations.
pub type InstallResult<T> = Result<T, InstallError>;

/// What `install` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// A new entry was written
    Installed,
    /// An entry was already present, nothing changed
    AlreadyInstalled,
}

/// Default host settings path, `$HOME/.claude/settings.json`.
///
/// # Errors
///
/// Returns `InstallError::NoHomeDir` if `HOME` is unset or empty.
pub fn default_settings_path() -> InstallResult<PathBuf> {
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join(".claude/settings.json")),
        _ => Err(InstallError::NoHomeDir),
    }
}

fn is_ours(entry: &Value, command: Option<&str>) -> bool {
    entry
        .get("hooks")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|hook| hook.get("command").and_then(Value::as_str))
        .any(|cmd| cmd.contains(HOOK_MARKER) || command.is_some_and(|c| cmd == c))
}

fn pre_tool_use(settings: &mut Value) -> InstallResult<&mut Vec<Value>> {
    let root = settings.as_object_mut().ok_or(InstallError::Layout("<root>"))?;
    let hooks = root
        .entry("hooks")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or(InstallError::Layout("hooks"))?;

    hooks
        .entry("PreToolUse")
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
        .ok_or(InstallError::Layout("hooks.PreToolUse"))
}

/// Add the hook entry to a parsed settings document.
///
/// # Errors
///
/// Returns `InstallError::Layout` if the document has an unexpected shape.
pub fn add_hook(settings: &mut Value, command: &str) -> InstallResult<InstallOutcome> {
    let entries = pre_tool_use(settings)?;

    if entries.iter().any(|entry| is_ours(entry, Some(command))) {
        return Ok(InstallOutcome::AlreadyInstalled);
    }

    entries.push(json!({
        "matcher": HOOK_MATCHER,
        "hooks": [
            {
                "type": "command",
                "command": command
            }
        ]
    }));
    Ok(InstallOutcome::Installed)
}

/// Remove our entries from a parsed settings document.
///
/// Returns the number of removed entries.
///
/// # Errors
///
/// Returns `InstallError::Layout` if the document has an unexpected shape.
pub fn remove_hook(settings: &mut Value, command: Option<&str>) -> InstallResult<usize> {
    let entries = pre_tool_use(settings)?;
    let before = entries.len();
    entries.retain(|entry| !is_ours(entry, command));
    Ok(before - entries.len())
}

fn load_settings(path: &Path) -> InstallResult<Option<Value>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(InstallError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if raw.trim().is_empty() {
        return Ok(Some(Value::Object(Map::new())));
    }

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| InstallError::Json {
            path: path.to_path_buf(),
            source,
        })
}

fn save_settings(path: &Path, settings: &Value) -> InstallResult<()> {
    let io_err = |source| InstallError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut encoded = serde_json::to_string_pretty(settings).map_err(|source| {
        InstallError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    encoded.push('\n');

    fs::write(path, encoded).map_err(io_err)
}

/// Register the hook command in the settings file at `path`.
///
/// Creates the file and its parent directory when missing.
///
/// # Errors
///
/// Returns an `InstallError` if the file cannot be read, parsed or written.
pub fn install(path: &Path, command: &str) -> InstallResult<InstallOutcome> {
    let mut settings = load_settings(path)?.unwrap_or_else(|| Value::Object(Map::new()));
    let outcome = add_hook(&mut settings, command)?;

    match outcome {
        InstallOutcome::Installed => {
            save_settings(path, &settings)?;
            info!(path = %path.display(), command, "Installed hook");
        }
        InstallOutcome::AlreadyInstalled => {
            info!(path = %path.display(), "Hook already installed");
        }
    }

    Ok(outcome)
}

/// Remove the hook from the settings file at `path`.
///
/// Returns the number of removed entries; a missing file removes nothing.
///
/// # Errors
///
/// Returns an `InstallError` if the file cannot be read, parsed or written.
pub fn uninstall(path: &Path, command: Option<&str>) -> InstallResult<usize> {
    let Some(mut settings) = load_settings(path)? else {
        return Ok(0);
    };

    let removed = remove_hook(&mut settings, command)?;
    if removed > 0 {
        save_settings(path, &settings)?;
        info!(path = %path.display(), removed, "Removed hook entries");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_hook_to_empty_settings() -> InstallResult<()> {
        let mut settings = json!({});
        let outcome = add_hook(&mut settings, "/usr/bin/autopilot-hook")?;

        assert_eq!(outcome, InstallOutcome::Installed);
        assert_eq!(
            settings,
            json!({
                "hooks": {
                    "PreToolUse": [{
                        "matcher": "Bash|Task",
                        "hooks": [{ "type": "command", "command": "/usr/bin/autopilot-hook" }]
                    }]
                }
            })
        );
        Ok(())
    }

    #[test]
    fn test_add_hook_is_idempotent() -> InstallResult<()> {
        let mut settings = json!({});
        add_hook(&mut settings, "/opt/hook")?;
        let outcome = add_hook(&mut settings, "/opt/hook")?;

        assert_eq!(outcome, InstallOutcome::AlreadyInstalled);
        assert_eq!(settings["hooks"]["PreToolUse"].as_array().map(Vec::len), Some(1));
        Ok(())
    }

    #[test]
    fn test_add_hook_keeps_foreign_entries() -> InstallResult<()> {
        let mut settings = json!({
            "model": "opus",
            "hooks": {
                "PreToolUse": [{ "matcher": "Edit", "hooks": [{ "type": "command", "command": "lint" }] }],
                "Stop": []
            }
        });
        add_hook(&mut settings, "/bin/autopilot-hook")?;

        assert_eq!(settings["model"], "opus");
        assert!(settings["hooks"]["Stop"].is_array());
        assert_eq!(settings["hooks"]["PreToolUse"].as_array().map(Vec::len), Some(2));
        Ok(())
    }

    #[test]
    fn test_layout_errors() {
        let mut settings = json!({ "hooks": [] });
        assert!(matches!(
            add_hook(&mut settings, "x"),
            Err(InstallError::Layout("hooks"))
        ));

        let mut settings = json!({ "hooks": { "PreToolUse": {} } });
        assert!(matches!(
            add_hook(&mut settings, "x"),
            Err(InstallError::Layout("hooks.PreToolUse"))
        ));

        let mut settings = json!([]);
        assert!(matches!(
            remove_hook(&mut settings, None),
            Err(InstallError::Layout("<root>"))
        ));
    }

    #[test]
    fn test_remove_hook_only_removes_ours() -> InstallResult<()> {
        let mut settings = json!({
            "hooks": {
                "PreToolUse": [
                    { "matcher": "Edit", "hooks": [{ "type": "command", "command": "lint" }] },
                    { "matcher": "Bash|Task", "hooks": [{ "type": "command", "command": "/a/autopilot-hook" }] },
                    { "matcher": "Bash", "hooks": [{ "type": "command", "command": "/custom/name" }] }
                ]
            }
        });

        assert_eq!(remove_hook(&mut settings, None)?, 1);
        assert_eq!(remove_hook(&mut settings, Some("/custom/name"))?, 1);
        assert_eq!(settings["hooks"]["PreToolUse"][0]["matcher"], "Edit");
        Ok(())
    }
}
