use serde::Serialize;

/// Rendered report lines, ready to print or show in a dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    pub lines: Vec<String>,
}

impl Report {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Join all lines with `\n`
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}
