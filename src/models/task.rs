use serde::Serialize;

/// An open checklist item pulled from a Markdown task file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub source: String, // stem of the Markdown file the task came from
    pub text: String,   // checklist text with the `- [ ] ` decoration stripped
}

impl Task {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }

    /// Display label, and the exact task string written to the day log.
    pub fn label(&self) -> String {
        format!("{} | {}", self.source, self.text)
    }
}
