//! Task discovery: scan Markdown files for unchecked checklist items.

use crate::errors::{AppError, AppResult};
use crate::models::Task;
use crate::utils::path::{file_stem_string, has_extension};
use regex::Regex;
use std::fs;
use std::path::PathBuf;

/// Characters trimmed from both ends of a checklist match to obtain the
/// task text.
const DECORATION: &[char] = &['-', ' ', '[', ']'];

pub struct TaskRepository {
    dir: PathBuf,
}

impl TaskRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Scan every `*.md` file (non-recursive, directory-listing order) for
    /// unchecked `- [ ]` items, in file order. Checked items never match.
    /// Files that cannot be read (permissions, non-UTF-8) contribute
    /// nothing and do not fail the scan. Results are not cached; every
    /// call re-reads the files so freshly added tasks show up.
    pub fn list_tasks(&self) -> AppResult<Vec<Task>> {
        if !self.dir.is_dir() {
            return Err(AppError::TasksDir(format!(
                "Tasks directory not found: {} (run `rpomodoro init` or set tasks_dir in the config)",
                self.dir.display()
            )));
        }

        let re = Regex::new(r"- \[ \].*").unwrap();
        let mut tasks = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();

            if !has_extension(&path, "md") {
                continue;
            }

            // Unreadable files are skipped, not fatal
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };

            let stem = file_stem_string(&path).unwrap_or_default();

            for m in re.find_iter(&content) {
                let text = m.as_str().trim_matches(DECORATION).to_string();
                tasks.push(Task::new(stem.clone(), text));
            }
        }

        Ok(tasks)
    }
}

/// Resolve a user-supplied selector against the scanned task list: either
/// a 1-based index from the `tasks` listing, or a case-insensitive
/// substring of a label. Ambiguity is an error, not a guess.
pub fn select_task<'a>(tasks: &'a [Task], query: &str) -> AppResult<&'a Task> {
    if tasks.is_empty() {
        return Err(AppError::TaskSelection(
            "No open tasks found in the tasks directory".to_string(),
        ));
    }

    if let Ok(idx) = query.parse::<usize>() {
        if idx == 0 || idx > tasks.len() {
            return Err(AppError::TaskSelection(format!(
                "Task index out of range: {} (valid: 1..{})",
                idx,
                tasks.len()
            )));
        }
        return Ok(&tasks[idx - 1]);
    }

    let needle = query.to_lowercase();
    let matches: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.label().to_lowercase().contains(&needle))
        .collect();

    match matches.len() {
        0 => Err(AppError::TaskSelection(format!(
            "No open task matches '{query}'"
        ))),
        1 => Ok(matches[0]),
        n => Err(AppError::TaskSelection(format!(
            "'{query}' matches {n} tasks; use an index from `rpomodoro tasks`"
        ))),
    }
}
