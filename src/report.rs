//! Ordered text reports produced by the analysis pipelines.
//!
//! Every pipeline renders its stages into a [`Report`]: a flat, ordered list
//! of lines. A report is only text; writing it somewhere is the job of a
//! [`crate::io::ReportSink`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three independent analysis programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    Arrays,
    Matrix,
    Grades,
}

impl Program {
    /// All programs in canonical run order.
    pub const ALL: [Program; 3] = [Program::Arrays, Program::Matrix, Program::Grades];
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arrays => write!(f, "arrays"),
            Self::Matrix => write!(f, "matrix"),
            Self::Grades => write!(f, "grades"),
        }
    }
}

/// Kind of a report line, used by terminal rendering for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Section banners such as `--- Class Statistics ---`
    Header,
    /// Stage announcements and data dumps
    Plain,
    /// Summary verdicts and final results
    Verdict,
    /// Recoverable conditions (empty input, value not found)
    Notice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
}

/// Ordered sequence of human-readable lines for one program run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub program: Program,
    lines: Vec<ReportLine>,
}

impl Report {
    pub fn new(program: Program) -> Self {
        Self {
            program,
            lines: Vec::new(),
        }
    }

    pub fn header(&mut self, text: impl Into<String>) {
        self.push(LineKind::Header, text);
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.push(LineKind::Plain, text);
    }

    pub fn verdict(&mut self, text: impl Into<String>) {
        self.push(LineKind::Verdict, text);
    }

    pub fn notice(&mut self, text: impl Into<String>) {
        self.push(LineKind::Notice, text);
    }

    pub fn blank(&mut self) {
        self.push(LineKind::Plain, String::new());
    }

    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(ReportLine {
            kind,
            text: text.into(),
        });
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Plain text of every line, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any line matches `text` exactly.
    pub fn contains_line(&self, text: &str) -> bool {
        self.texts().any(|t| t == text)
    }

    /// Render the report as newline-terminated plain text.
    pub fn to_plain_text(&self) -> String {
        self.texts().fold(String::new(), |mut acc, line| {
            acc.push_str(line);
            acc.push('\n');
            acc
        })
    }
}

/// Space-separated dump of a sequence, with the trailing space of the
/// classic `printf("%d ", ..)` loop.
pub fn format_sequence(values: &[i32]) -> String {
    values.iter().map(|v| format!("{v} ")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_preserves_line_order() {
        let mut report = Report::new(Program::Arrays);
        report.header("--- Starting Analysis ---");
        report.line("first");
        report.blank();
        report.verdict("done");

        let texts: Vec<_> = report.texts().collect();
        assert_eq!(texts, vec!["--- Starting Analysis ---", "first", "", "done"]);
        assert_eq!(report.lines()[0].kind, LineKind::Header);
        assert_eq!(report.lines()[3].kind, LineKind::Verdict);
    }

    #[test]
    fn test_to_plain_text_terminates_every_line() {
        let mut report = Report::new(Program::Matrix);
        report.line("a");
        report.line("b");
        assert_eq!(report.to_plain_text(), "a\nb\n");
    }

    #[test]
    fn test_format_sequence() {
        assert_eq!(format_sequence(&[3, -1, 10]), "3 -1 10 ");
        assert_eq!(format_sequence(&[]), "");
    }

    #[test]
    fn test_program_display_and_order() {
        let names: Vec<_> = Program::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["arrays", "matrix", "grades"]);
    }
}
