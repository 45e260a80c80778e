//! Formatting utilities used for CLI outputs.

/// Render a seconds total as a human-readable span, es: `02h 25m`.
///
/// Used for the focus-time footer of `log`, where hour grouping is fine;
/// individual session durations stay in the MM:SS shape instead
/// (see `utils::time::format_mmss`).
pub fn secs2readable(secs: i64) -> String {
    let s = secs.max(0);
    let hours = s / 3600;
    let minutes = (s % 3600) / 60;

    format!("{:02}h {:02}m", hours, minutes)
}
