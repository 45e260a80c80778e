use crate::utils::time::parse_mmss;
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

/// One saved focus session, one line of a daily log file:
///
/// `17:42 [[work]] work | Write report duration: (25:00)`
///
/// The `[[…]]` part is a wiki-link back to the note the task came from, so
/// the day logs stay navigable inside Markdown note vaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    pub end_time: String, // HH:MM
    pub note: String,     // wiki-link target, the task file stem
    pub task: String,     // full label "note | text"
    pub duration: String, // MM:SS, minutes may exceed 59
}

impl SessionRecord {
    pub fn to_line(&self) -> String {
        format!(
            "{} [[{}]] {} duration: ({})",
            self.end_time, self.note, self.task, self.duration
        )
    }

    /// Parse one day-log line back into a record. Lines that do not match
    /// the session shape (headers, hand-written notes) return None.
    pub fn parse_line(line: &str) -> Option<Self> {
        let re = Regex::new(r"^(\d{2}:\d{2}) \[\[([^\]]*)\]\] (.*) duration: \((\d{2,}:\d{2})\)$")
            .unwrap();
        let caps = re.captures(line.trim_end())?;

        Some(Self {
            end_time: caps[1].to_string(),
            note: caps[2].to_string(),
            task: caps[3].to_string(),
            duration: caps[4].to_string(),
        })
    }

    /// Duration in seconds, for focus-time totals. Unparsable → 0.
    pub fn duration_seconds(&self) -> i64 {
        parse_mmss(&self.duration).unwrap_or(0)
    }
}

/// Flat per-session row for CSV / JSON export: the record plus the date of
/// the day file it was read from.
#[derive(Debug, Clone, Serialize)]
pub struct SessionExport {
    pub date: String,
    pub end_time: String,
    pub note: String,
    pub task: String,
    pub duration: String,
}

impl SessionExport {
    pub fn from_record(date: NaiveDate, r: &SessionRecord) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            end_time: r.end_time.clone(),
            note: r.note.clone(),
            task: r.task.clone(),
            duration: r.duration.clone(),
        }
    }
}
