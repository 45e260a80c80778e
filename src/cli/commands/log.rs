use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session_log::SessionLogger;
use crate::errors::{AppError, AppResult};
use crate::models::SessionRecord;
use crate::ui::messages;
use crate::utils::colors::{RESET, accent_for_theme, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::secs2readable;
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { date: day, period } = cmd {
        let logger = SessionLogger::new(cfg.sessions_path());

        let dates = resolve_dates(&logger, day, period)?;

        let accent = accent_for_theme(&cfg.theme);
        let mut total_sessions = 0usize;
        let mut total_secs = 0i64;

        for d in dates {
            let records = logger.read_day(d)?;
            if records.is_empty() {
                continue;
            }

            total_sessions += records.len();
            total_secs += records.iter().map(SessionRecord::duration_seconds).sum::<i64>();

            print_day(d, &records, accent);
        }

        if total_sessions == 0 {
            messages::info("No saved sessions for the selected period.");
        } else {
            println!(
                "🧮 Total: {} session(s), {} focus time",
                total_sessions,
                secs2readable(total_secs)
            );
        }
    }

    Ok(())
}

/// Which day files to read: an explicit date, a period expression, or today.
fn resolve_dates(
    logger: &SessionLogger,
    day: &Option<String>,
    period: &Option<String>,
) -> AppResult<Vec<NaiveDate>> {
    if let Some(p) = period {
        if p == "all" {
            return logger.logged_dates(None);
        }
        let bounds = date::parse_range(p)?;
        return logger.logged_dates(Some(bounds));
    }

    if let Some(d) = day {
        let parsed = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
        return Ok(vec![parsed]);
    }

    Ok(vec![date::today()])
}

fn print_day(d: NaiveDate, records: &[SessionRecord], accent: &str) {
    println!("{}📅 Sessions for {}:{}\n", accent, d, RESET);

    let mut table = Table::new(&["End", "Note", "Task", "Duration"]);

    for r in records {
        table.add_row(vec![
            r.end_time.clone(),
            r.note.clone(),
            truncate(&r.task, 60),
            colorize_optional(&r.duration),
        ]);
    }

    print!("{}", table.render());
    println!();
}

/// Keep the task column readable: long labels get cut at `max` chars.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut cut: String = s.chars().take(max - 3).collect();
        cut.push_str("...");
        cut
    } else {
        s.to_string()
    }
}
