pub mod destinations;
pub mod output;

pub use destinations::{FileSink, MemorySink, ReportSink, StdoutSink};
pub use output::{write_runs, OutputFormat};

use crate::errors::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
