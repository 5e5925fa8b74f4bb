use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::destinations::ReportSink;
use crate::errors::Result;
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::pipeline::ProgramRun;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

pub trait OutputWriter {
    fn write_runs(&mut self, runs: &[ProgramRun]) -> Result<()>;
}

/// Writes report lines, styled per line kind. Consecutive programs are
/// separated by one blank line.
pub struct TerminalWriter<'a> {
    sink: &'a dyn ReportSink,
    formatter: Box<dyn OutputFormatter>,
}

impl<'a> TerminalWriter<'a> {
    pub fn new(sink: &'a dyn ReportSink, formatting: FormattingConfig) -> Self {
        Self {
            sink,
            formatter: formatter_for(formatting),
        }
    }
}

impl OutputWriter for TerminalWriter<'_> {
    fn write_runs(&mut self, runs: &[ProgramRun]) -> Result<()> {
        let mut out = String::new();
        for (i, run) in runs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for line in run.report.lines() {
                out.push_str(&self.formatter.format_line(line));
                out.push('\n');
            }
        }
        self.sink.write_str(&out)?;
        self.sink.flush()
    }
}

/// Writes typed outcomes as pretty JSON: one object for a single run,
/// an array otherwise.
pub struct JsonWriter<'a> {
    sink: &'a dyn ReportSink,
}

impl<'a> JsonWriter<'a> {
    pub fn new(sink: &'a dyn ReportSink) -> Self {
        Self { sink }
    }
}

impl OutputWriter for JsonWriter<'_> {
    fn write_runs(&mut self, runs: &[ProgramRun]) -> Result<()> {
        let json = match runs {
            [single] => serde_json::to_string_pretty(&single.outcome)?,
            _ => {
                let outcomes: Vec<_> = runs.iter().map(|r| &r.outcome).collect();
                serde_json::to_string_pretty(&outcomes)?
            }
        };
        self.sink.write_str(&json)?;
        self.sink.write_str("\n")?;
        self.sink.flush()
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    sink: &'a dyn ReportSink,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, formatting)),
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
    }
}

/// Render `runs` in `format` to `sink`.
pub fn write_runs(
    runs: &[ProgramRun],
    format: OutputFormat,
    sink: &dyn ReportSink,
    formatting: FormattingConfig,
) -> Result<()> {
    create_writer(format, sink, formatting).write_runs(runs)
}
