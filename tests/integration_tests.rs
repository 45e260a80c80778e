use chrono::NaiveDate;
use predicates::str::contains;
use rpomodoro::core::session_log::SessionLogger;
use rpomodoro::models::{SessionRecord, Task};
use std::fs;
use std::path::PathBuf;

mod common;
use common::{rpo, run_saved_session, setup_dirs, write_task_file};

#[test]
fn test_tasks_lists_open_tasks() {
    let (tasks, sessions) = setup_dirs("tasks_list");

    write_task_file(
        &tasks,
        "work.md",
        "# Work\n- [ ] Write quarterly report\n- [x] Old done thing\n- [ ] Review PR queue\n",
    );
    write_task_file(&tasks, "home.md", "- [ ] Fix the bike\n");

    rpo()
        .args(["--tasks-dir", &tasks, "--sessions-dir", &sessions, "tasks"])
        .assert()
        .success()
        .stdout(contains("Write quarterly report"))
        .stdout(contains("Review PR queue"))
        .stdout(contains("Fix the bike"))
        .stdout(contains("3 open task(s)"));
}

#[test]
fn test_tasks_skips_checked_and_non_markdown() {
    let (tasks, sessions) = setup_dirs("tasks_skip");

    write_task_file(&tasks, "work.md", "- [x] Already done\n");
    write_task_file(&tasks, "notes.txt", "- [ ] Not a markdown task\n");

    rpo()
        .args(["--tasks-dir", &tasks, "--sessions-dir", &sessions, "tasks"])
        .assert()
        .success()
        .stdout(contains("No open tasks found"));
}

#[test]
fn test_tasks_file_filter() {
    let (tasks, sessions) = setup_dirs("tasks_filter");

    write_task_file(&tasks, "work.md", "- [ ] Office thing\n");
    write_task_file(&tasks, "home.md", "- [ ] Home thing\n");

    rpo()
        .args([
            "--tasks-dir",
            &tasks,
            "--sessions-dir",
            &sessions,
            "tasks",
            "--file",
            "home.md",
        ])
        .assert()
        .success()
        .stdout(contains("Home thing"))
        .stdout(contains("1 open task(s)"));
}

#[test]
fn test_tasks_missing_dir_fails() {
    let (tasks, sessions) = setup_dirs("tasks_missing");
    fs::remove_dir_all(&tasks).unwrap();

    rpo()
        .args(["--tasks-dir", &tasks, "--sessions-dir", &sessions, "tasks"])
        .assert()
        .failure()
        .stderr(contains("Tasks directory not found"));
}

#[test]
fn test_start_completes_and_saves_session() {
    let (tasks, sessions) = setup_dirs("start_save");

    write_task_file(&tasks, "work.md", "- [ ] Write quarterly report\n");

    rpo()
        .args([
            "--tasks-dir",
            &tasks,
            "--sessions-dir",
            &sessions,
            "start",
            "quarterly",
            "--duration",
            "1",
            "--tick-ms",
            "1",
            "--save",
        ])
        .assert()
        .success()
        .stdout(contains("work | Write quarterly report"))
        .stdout(contains("Session completed!"))
        .stdout(contains("Session saved successfully!"));

    // one day file, one line, in the wiki-link format
    let day = rpomodoro::utils::date::today().format("%Y-%m-%d").to_string();
    let log_file = PathBuf::from(&sessions).join(format!("{day}.md"));
    let content = fs::read_to_string(&log_file).expect("read day log");

    assert!(content.contains("[[work]]"));
    assert!(content.contains("work | Write quarterly report duration: ("));
}

#[test]
fn test_start_no_save_leaves_log_empty() {
    let (tasks, sessions) = setup_dirs("start_no_save");

    write_task_file(&tasks, "work.md", "- [ ] Quick fix\n");

    rpo()
        .args([
            "--tasks-dir",
            &tasks,
            "--sessions-dir",
            &sessions,
            "start",
            "1",
            "--duration",
            "1",
            "--tick-ms",
            "1",
            "--no-save",
        ])
        .assert()
        .success()
        .stdout(contains("Session completed!"));

    let day = rpomodoro::utils::date::today().format("%Y-%m-%d").to_string();
    let log_file = PathBuf::from(&sessions).join(format!("{day}.md"));
    assert!(!log_file.exists(), "no-save run must not create a day log");
}

#[test]
fn test_start_without_task_completes_but_save_warns() {
    let (tasks, sessions) = setup_dirs("start_taskless");

    rpo()
        .args([
            "--tasks-dir",
            &tasks,
            "--sessions-dir",
            &sessions,
            "start",
            "--duration",
            "1",
            "--tick-ms",
            "1",
            "--save",
        ])
        .assert()
        .success()
        .stdout(contains("No task selected"))
        .stdout(contains("Session completed!"))
        .stdout(contains("Please start a session before saving the session."));

    let day = rpomodoro::utils::date::today().format("%Y-%m-%d").to_string();
    assert!(!PathBuf::from(&sessions).join(format!("{day}.md")).exists());
}

#[test]
fn test_start_unknown_task_fails() {
    let (tasks, sessions) = setup_dirs("start_unknown");

    write_task_file(&tasks, "work.md", "- [ ] Only task\n");

    rpo()
        .args([
            "--tasks-dir",
            &tasks,
            "--sessions-dir",
            &sessions,
            "start",
            "nonexistent",
        ])
        .assert()
        .failure()
        .stderr(contains("No open task matches 'nonexistent'"));
}

#[test]
fn test_start_ambiguous_task_fails() {
    let (tasks, sessions) = setup_dirs("start_ambiguous");

    write_task_file(&tasks, "work.md", "- [ ] Report draft\n- [ ] Report review\n");

    rpo()
        .args([
            "--tasks-dir",
            &tasks,
            "--sessions-dir",
            &sessions,
            "start",
            "report",
        ])
        .assert()
        .failure()
        .stderr(contains("matches 2 tasks"));
}

#[test]
fn test_start_duration_above_cap_fails() {
    let (tasks, sessions) = setup_dirs("start_huge_duration");

    rpo()
        .args([
            "--tasks-dir",
            &tasks,
            "--sessions-dir",
            &sessions,
            "start",
            "--duration",
            "4294967295",
        ])
        .assert()
        .failure()
        .stderr(contains("session length must be at most"));
}

#[test]
fn test_start_index_out_of_range_fails() {
    let (tasks, sessions) = setup_dirs("start_bad_index");

    write_task_file(&tasks, "work.md", "- [ ] Only task\n");

    rpo()
        .args([
            "--tasks-dir",
            &tasks,
            "--sessions-dir",
            &sessions,
            "start",
            "5",
        ])
        .assert()
        .failure()
        .stderr(contains("Task index out of range"));
}

#[test]
fn test_log_shows_saved_session() {
    let (tasks, sessions) = setup_dirs("log_today");

    write_task_file(&tasks, "work.md", "- [ ] Write quarterly report\n");
    run_saved_session(&tasks, &sessions, "quarterly");

    rpo()
        .args(["--tasks-dir", &tasks, "--sessions-dir", &sessions, "log"])
        .assert()
        .success()
        .stdout(contains("Sessions for"))
        .stdout(contains("Write quarterly report"))
        .stdout(contains("Total: 1 session(s)"));
}

#[test]
fn test_log_period_spans_days() {
    let (tasks, sessions) = setup_dirs("log_period");

    let logger = SessionLogger::new(sessions.as_str());
    for (day, text) in [(1, "Write quarterly report"), (15, "Review PR queue")] {
        let date = NaiveDate::from_ymd_opt(2025, 8, day).unwrap();
        let record = SessionRecord {
            end_time: "10:25".to_string(),
            note: "work".to_string(),
            task: Task::new("work", text).label(),
            duration: "25:00".to_string(),
        };
        logger.append(date, &record).expect("seed session");
    }

    rpo()
        .args([
            "--tasks-dir",
            &tasks,
            "--sessions-dir",
            &sessions,
            "log",
            "--period",
            "2025-08",
        ])
        .assert()
        .success()
        .stdout(contains("Sessions for 2025-08-01"))
        .stdout(contains("Sessions for 2025-08-15"))
        .stdout(contains("Total: 2 session(s)"))
        .stdout(contains("00h 50m"));
}

#[test]
fn test_log_empty_period_message() {
    let (tasks, sessions) = setup_dirs("log_empty");

    rpo()
        .args(["--tasks-dir", &tasks, "--sessions-dir", &sessions, "log"])
        .assert()
        .success()
        .stdout(contains("No saved sessions for the selected period."));
}

#[test]
fn test_log_invalid_date_fails() {
    let (tasks, sessions) = setup_dirs("log_bad_date");

    rpo()
        .args([
            "--tasks-dir",
            &tasks,
            "--sessions-dir",
            &sessions,
            "log",
            "31-12-2025",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}
