//! Append-only daily session logs.
//!
//! One Markdown file per day, `<sessions_dir>/<YYYY-MM-DD>.md`, one line
//! per saved session. Files are created on first write of the day; the
//! directory never is, so a broken setup surfaces instead of silently
//! logging somewhere unexpected. Existing lines are never rewritten.

use crate::errors::{AppError, AppResult};
use crate::models::SessionRecord;
use crate::utils::date;
use crate::utils::path::{file_stem_string, has_extension};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

pub struct SessionLogger {
    dir: PathBuf,
}

impl SessionLogger {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Day file path: `<sessions_dir>/<YYYY-MM-DD>.md`.
    pub fn day_file(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.md", date.format("%Y-%m-%d")))
    }

    /// Append one record to the day file and return its path.
    pub fn append(&self, date: NaiveDate, record: &SessionRecord) -> AppResult<PathBuf> {
        if !self.dir.is_dir() {
            return Err(AppError::SessionLog(format!(
                "Sessions directory not found: {}",
                self.dir.display()
            )));
        }

        let path = self.day_file(date);
        let mut file = OpenOptions::new().append(true).create(true).open(&path)?;
        writeln!(file, "{}", record.to_line())?;

        Ok(path)
    }

    /// Read a day file back into records. A missing file is an empty day;
    /// lines that do not parse as session records are skipped, so day
    /// files annotated by hand still read cleanly.
    pub fn read_day(&self, date: NaiveDate) -> AppResult<Vec<SessionRecord>> {
        let path = self.day_file(date);

        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        Ok(content
            .lines()
            .filter_map(SessionRecord::parse_line)
            .collect())
    }

    /// Dates that have a day file, sorted ascending, optionally clipped to
    /// inclusive bounds. Files whose stem is not a date are ignored.
    pub fn logged_dates(
        &self,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<NaiveDate>> {
        if !self.dir.is_dir() {
            return Err(AppError::SessionLog(format!(
                "Sessions directory not found: {}",
                self.dir.display()
            )));
        }

        let mut dates = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();

            if !has_extension(&path, "md") {
                continue;
            }

            let Some(stem) = file_stem_string(&path) else {
                continue;
            };
            let Some(d) = date::parse_date(&stem) else {
                continue;
            };

            if let Some((start, end)) = bounds
                && (d < start || d > end)
            {
                continue;
            }

            dates.push(d);
        }

        dates.sort();
        Ok(dates)
    }
}
