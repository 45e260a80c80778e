#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpo() -> Command {
    cargo_bin_cmd!("rpomodoro")
}

/// Create a unique empty test directory inside the system temp dir
pub fn setup_test_root(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpomodoro", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test root");
    path
}

/// Fresh tasks + sessions directories for one test
pub fn setup_dirs(name: &str) -> (String, String) {
    let root = setup_test_root(name);
    let tasks = root.join("tasks");
    let sessions = root.join("sessions");
    fs::create_dir_all(&tasks).expect("create tasks dir");
    fs::create_dir_all(&sessions).expect("create sessions dir");
    (
        tasks.to_string_lossy().to_string(),
        sessions.to_string_lossy().to_string(),
    )
}

/// Write a Markdown file into the tasks dir
pub fn write_task_file(tasks_dir: &str, name: &str, content: &str) {
    let path = PathBuf::from(tasks_dir).join(name);
    fs::write(path, content).expect("write task file");
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run a 1-minute session at 1 ms per tick and save it, so the sessions
/// dir gets one record for today
pub fn run_saved_session(tasks_dir: &str, sessions_dir: &str, task: &str) {
    rpo()
        .args([
            "--tasks-dir",
            tasks_dir,
            "--sessions-dir",
            sessions_dir,
            "--test",
            "start",
            task,
            "--duration",
            "1",
            "--tick-ms",
            "1",
            "--save",
        ])
        .assert()
        .success();
}
