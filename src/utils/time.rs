//! Time utilities: MM:SS formatting and parsing for countdowns and durations.

/// Format a number of seconds as zero-padded `MM:SS`.
///
/// Minutes are the plain quotient `secs / 60` with no hour rollover:
/// a 90-minute span renders as `"90:00"`, never `"01:30:00"`. Durations in
/// the day logs rely on this shape, so it is kept as-is.
pub fn format_mmss(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}", s / 60, s % 60)
}

/// Parse a `MM:SS` string back to seconds. The minutes part may be any
/// width (`"90:00"` is valid); the seconds part must be two digits < 60.
pub fn parse_mmss(s: &str) -> Option<i64> {
    let (m, sec) = s.split_once(':')?;
    if sec.len() != 2 {
        return None;
    }
    let minutes: i64 = m.parse().ok()?;
    let seconds: i64 = sec.parse().ok()?;
    if minutes < 0 || !(0..60).contains(&seconds) {
        return None;
    }
    Some(minutes.saturating_mul(60).saturating_add(seconds))
}
