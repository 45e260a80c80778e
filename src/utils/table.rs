//! Table rendering utilities for CLI outputs.
//!
//! Column widths are derived from the content (display width, not byte
//! length, so emoji and wide glyphs in task text line up correctly).
//! Cells may carry ANSI color codes; those are invisible on screen and
//! are excluded from the width math.

use regex::Regex;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Max display width per column over header + cells.
    fn widths(&self, re: &Regex) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| visible_width(re, h))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(visible_width(re, cell));
                }
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let re = ansi_re();
        let widths = self.widths(&re);
        let mut out = String::new();

        // Header
        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&pad_cell(&re, h, widths[i]));
            out.push(' ');
        }
        out.push('\n');

        // Separator
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    out.push_str(&pad_cell(&re, cell, widths[i]));
                    out.push(' ');
                }
            }
            out.push('\n');
        }

        out
    }
}

fn ansi_re() -> Regex {
    Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap()
}

/// Display width excluding ANSI escape sequences.
fn visible_width(re: &Regex, s: &str) -> usize {
    re.replace_all(s, "").width()
}

/// Right-pad by display width (format! pads by char count, which drifts
/// for wide glyphs and counts the invisible ANSI bytes).
fn pad_cell(re: &Regex, s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(re, s));
    format!("{}{}", s, " ".repeat(pad))
}
