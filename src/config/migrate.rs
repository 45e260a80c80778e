//! Versioned configuration migrations.
//!
//! Each migration adds one missing key with its default; key presence makes
//! a re-run a no-op, so the whole chain is idempotent without a separate
//! applied-versions store. New keys get a documentation comment injected
//! right after their line, the same way the file would be hand-annotated.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

const V_AUTO_SAVE: &str = "20250601_0001_add_auto_save";
const V_SOUND: &str = "20250614_0002_add_sound";

/// Run every pending migration against the given config file and return
/// the versions actually applied. A missing file is nothing to migrate:
/// defaults-only setups already carry every key.
pub fn run_pending_migrations(conf_file: &Path) -> AppResult<Vec<&'static str>> {
    let mut applied = Vec::new();

    if !conf_file.exists() {
        return Ok(applied);
    }

    if migrate_add_auto_save(conf_file)? {
        applied.push(V_AUTO_SAVE);
    }
    if migrate_add_sound(conf_file)? {
        applied.push(V_SOUND);
    }

    Ok(applied)
}

/// Keys a complete configuration file carries, in file order.
const EXPECTED_KEYS: [&str; 6] = [
    "tasks_dir",
    "sessions_dir",
    "theme",
    "session_minutes",
    "auto_save",
    "sound",
];

/// Report which expected keys the config file is missing (`config --check`).
pub fn check_missing_keys(conf_file: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(conf_file)?;

    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("Cannot parse {}: {}", conf_file.display(), e)))?;

    let mut missing = Vec::new();

    if let Some(map) = yaml.as_mapping() {
        for key in EXPECTED_KEYS {
            if !map.contains_key(&Value::String(key.to_string())) {
                missing.push(key);
            }
        }
    }

    Ok(missing)
}

/// Migration that adds the `auto_save` parameter to the YAML config,
/// if missing. Returns whether it was applied.
fn migrate_add_auto_save(conf_file: &Path) -> AppResult<bool> {
    let content = fs::read_to_string(conf_file)?;

    let mut yaml: Value = serde_yaml::from_str(&content).map_err(|e| {
        AppError::Migration(format!("Cannot parse config {}: {}", conf_file.display(), e))
    })?;

    let Some(map) = yaml.as_mapping_mut() else {
        return Ok(false);
    };

    let key = Value::String("auto_save".to_string());

    if map.contains_key(&key) {
        return Ok(false); // already applied
    }

    map.insert(key, Value::Bool(false));

    let serialized = serialize_yaml(&yaml, conf_file)?;

    // Inject documentation comment right after the `auto_save` line
    let mut new_content = String::new();

    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if line.starts_with("auto_save:") {
            new_content.push_str(
                "# auto-save parameter options:\n\
                 #   true  → save every finished session silently\n\
                 #   false → ask \"Save this session? [y/N]\" after each run\n",
            );
        }
    }

    fs::write(conf_file, new_content)?;

    success(format!(
        "Migration applied: {} — added auto_save parameter to config.",
        V_AUTO_SAVE
    ));

    Ok(true)
}

/// Migration that adds the `sound` parameter (terminal bell on completion)
/// to the YAML config, if missing. Returns whether it was applied.
fn migrate_add_sound(conf_file: &Path) -> AppResult<bool> {
    let content = fs::read_to_string(conf_file)?;

    let mut yaml: Value = serde_yaml::from_str(&content).map_err(|e| {
        AppError::Migration(format!("Cannot parse config {}: {}", conf_file.display(), e))
    })?;

    let Some(map) = yaml.as_mapping_mut() else {
        return Ok(false);
    };

    let key = Value::String("sound".to_string());

    if map.contains_key(&key) {
        return Ok(false); // already applied
    }

    map.insert(key, Value::Bool(true));

    let serialized = serialize_yaml(&yaml, conf_file)?;

    let mut new_content = String::new();

    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if line.starts_with("sound:") {
            new_content.push_str("# terminal bell when a session completes\n");
        }
    }

    fs::write(conf_file, new_content)?;

    success(format!(
        "Migration applied: {} — added sound parameter to config.",
        V_SOUND
    ));

    Ok(true)
}

fn serialize_yaml(yaml: &Value, conf_file: &Path) -> AppResult<String> {
    serde_yaml::to_string(yaml).map_err(|e| {
        AppError::Migration(format!(
            "Failed to serialize updated config {}: {}",
            conf_file.display(),
            e
        ))
    })
}
