//! Session export: flatten the day logs into CSV or pretty JSON.

use crate::core::session_log::SessionLogger;
use crate::errors::{AppError, AppResult};
use crate::models::SessionExport;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export saved sessions.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or an expression like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        logger: &SessionLogger,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(date::parse_range(r)?),
        };

        let rows = collect_sessions(logger, bounds)?;

        if rows.is_empty() {
            warning("No sessions found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

/// Flatten every day file inside the bounds into dated rows, oldest day
/// first; within a day, file line order (append order).
fn collect_sessions(
    logger: &SessionLogger,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<SessionExport>> {
    let mut rows = Vec::new();

    for d in logger.logged_dates(bounds)? {
        for record in logger.read_day(d)? {
            rows.push(SessionExport::from_record(d, &record));
        }
    }

    Ok(rows)
}

/// Check whether the output file can be created or overwritten.
///
/// - missing file → Ok
/// - exists and `force` → Ok
/// - exists without `force` → ask the user.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        ))
    }
}

/// Export JSON pretty-printed.
fn export_json(rows: &[SessionExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    success(format!("JSON export completed: {}", path.display()));
    Ok(())
}

/// Export CSV (header included thanks to serde).
fn export_csv(rows: &[SessionExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    success(format!("CSV export completed: {}", path.display()));
    Ok(())
}
