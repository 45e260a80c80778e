//! Path utilities: expand ~ and extract file stems.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// File stem as an owned String ("2026-03-01.md" → "2026-03-01").
/// Task scanning, log export and backup all key files by their stem.
pub fn file_stem_string(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().to_string())
}

/// True when the path has the given extension, compared case-sensitively
/// ("Notes.MD" is not a task file).
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ext)
}
