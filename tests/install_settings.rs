use anyhow::Result;
use autopilot_hook::install::{install, uninstall, InstallError, InstallOutcome, HOOK_MATCHER};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn read_json(path: &std::path::Path) -> Result<Value> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

#[test]
fn test_install_creates_settings_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join(".claude/settings.json");

    let outcome = install(&path, "/usr/local/bin/autopilot-hook")?;
    assert_eq!(outcome, InstallOutcome::Installed);

    let settings = read_json(&path)?;
    let entry = &settings["hooks"]["PreToolUse"][0];
    assert_eq!(entry["matcher"], HOOK_MATCHER);
    assert_eq!(entry["hooks"][0]["type"], "command");
    assert_eq!(entry["hooks"][0]["command"], "/usr/local/bin/autopilot-hook");
    Ok(())
}

#[test]
fn test_install_twice_writes_once() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("settings.json");

    install(&path, "/bin/autopilot-hook")?;
    let first = fs::read_to_string(&path)?;

    let outcome = install(&path, "/bin/autopilot-hook")?;
    assert_eq!(outcome, InstallOutcome::AlreadyInstalled);
    assert_eq!(fs::read_to_string(&path)?, first);
    Ok(())
}

#[test]
fn test_install_preserves_existing_settings() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&json!({
            "permissions": { "allow": ["Bash(ls:*)"] },
            "hooks": { "PostToolUse": [] }
        }))?,
    )?;

    install(&path, "/bin/autopilot-hook")?;

    let settings = read_json(&path)?;
    assert_eq!(settings["permissions"]["allow"][0], "Bash(ls:*)");
    assert!(settings["hooks"]["PostToolUse"].is_array());
    assert_eq!(
        settings["hooks"]["PreToolUse"].as_array().map(Vec::len),
        Some(1)
    );
    Ok(())
}

#[test]
fn test_install_rejects_invalid_json() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ broken")?;

    let err = install(&path, "/bin/autopilot-hook");
    assert!(matches!(err, Err(InstallError::Json { .. })));
    assert_eq!(fs::read_to_string(&path)?, "{ broken");
    Ok(())
}

#[test]
fn test_uninstall_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("settings.json");

    assert_eq!(uninstall(&path, None)?, 0);
    assert!(!path.exists());

    install(&path, "/bin/autopilot-hook")?;
    assert_eq!(uninstall(&path, None)?, 1);

    let settings = read_json(&path)?;
    assert_eq!(settings["hooks"]["PreToolUse"], json!([]));
    Ok(())
}
