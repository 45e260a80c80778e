use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};

mod common;
use common::{rpo, setup_test_root};

/// Same platform rule the binary uses for its config directory
fn conf_dir(home: &Path) -> PathBuf {
    if cfg!(target_os = "windows") {
        home.join("rpomodoro")
    } else {
        home.join(".rpomodoro")
    }
}

fn conf_file(home: &Path) -> PathBuf {
    conf_dir(home).join("rpomodoro.conf")
}

#[test]
fn test_init_creates_config_and_dirs() {
    let home = setup_test_root("config_init");

    rpo()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(conf_file(&home).exists());
    assert!(conf_dir(&home).join("tasks").is_dir());
    assert!(conf_dir(&home).join("sessions").is_dir());

    let content = fs::read_to_string(conf_file(&home)).unwrap();
    assert!(content.contains("tasks_dir:"));
    assert!(content.contains("session_minutes: 25"));
}

#[test]
fn test_init_test_mode_skips_config_write() {
    let home = setup_test_root("config_init_test");

    rpo()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["--test", "init"])
        .assert()
        .success();

    assert!(!conf_file(&home).exists());
    assert!(conf_dir(&home).join("tasks").is_dir());
    assert!(conf_dir(&home).join("sessions").is_dir());
}

#[test]
fn test_config_print_shows_defaults() {
    let home = setup_test_root("config_print");

    rpo()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .arg("init")
        .assert()
        .success();

    rpo()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration"))
        .stdout(contains("theme: dark"))
        .stdout(contains("session_minutes: 25"))
        .stdout(contains("auto_save: false"))
        .stdout(contains("sound: true"));
}

#[test]
fn test_config_check_complete_file() {
    let home = setup_test_root("config_check_ok");

    rpo()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .arg("init")
        .assert()
        .success();

    rpo()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));
}

#[test]
fn test_broken_config_is_skipped_in_test_mode() {
    let home = setup_test_root("config_broken_test_mode");
    fs::create_dir_all(conf_dir(&home)).unwrap();
    fs::write(conf_file(&home), "tasks_dir: [not yaml").unwrap();

    let tasks_dir = home.join("tasks");
    fs::create_dir_all(&tasks_dir).unwrap();
    fs::write(tasks_dir.join("work.md"), "- [ ] Broken config survivor\n").unwrap();
    let tasks_dir = tasks_dir.to_string_lossy().to_string();

    // a broken file is a hard error on a normal run
    rpo()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .arg("tasks")
        .assert()
        .failure()
        .stderr(contains("Invalid configuration file"));

    // --test never reads the file: defaults plus the CLI overrides
    rpo()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["--test", "--tasks-dir", &tasks_dir, "tasks"])
        .assert()
        .success()
        .stdout(contains("Broken config survivor"));
}

#[test]
fn test_config_check_reports_missing_keys() {
    let home = setup_test_root("config_check_missing");
    fs::create_dir_all(conf_dir(&home)).unwrap();

    // old-style config, before auto_save and sound existed
    fs::write(
        conf_file(&home),
        "tasks_dir: /tmp/tasks\nsessions_dir: /tmp/sessions\n",
    )
    .unwrap();

    rpo()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing keys"))
        .stdout(contains("auto_save"))
        .stdout(contains("sound"));
}

#[test]
fn test_config_migrate_adds_missing_keys() {
    let home = setup_test_root("config_migrate");
    fs::create_dir_all(conf_dir(&home)).unwrap();

    fs::write(
        conf_file(&home),
        "tasks_dir: /tmp/tasks\nsessions_dir: /tmp/sessions\ntheme: dark\nsession_minutes: 25\n",
    )
    .unwrap();

    rpo()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration applied"))
        .stdout(contains("auto_save"))
        .stdout(contains("sound"));

    let content = fs::read_to_string(conf_file(&home)).unwrap();
    assert!(content.contains("auto_save: false"));
    assert!(content.contains("sound: true"));
    // migrations annotate the keys they add
    assert!(content.contains("# terminal bell when a session completes"));

    // second run is a no-op
    rpo()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Configuration file is up to date."));
}
