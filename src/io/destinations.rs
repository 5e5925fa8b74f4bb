//! Report sinks: where rendered reports end up.
//!
//! The `ReportSink` trait abstracts over stdout, files and in-memory buffers
//! so the pipelines and writers can be tested without touching the terminal.
//!
//! # Example
//!
//! ```rust
//! use algolab::io::{MemorySink, ReportSink};
//!
//! let sink = MemorySink::new();
//! sink.write_str("--- Starting Analysis ---\n").unwrap();
//! assert!(sink.get_content().contains("Starting Analysis"));
//! ```

use crate::errors::Error;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Receiver of ordered report text.
pub trait ReportSink: Send + Sync {
    /// Append string content to the sink.
    fn write_str(&self, content: &str) -> Result<(), Error>;

    /// Flush any buffered content.
    fn flush(&self) -> Result<(), Error>;

    /// Get a description of the sink for error messages.
    fn description(&self) -> String;
}

/// File system sink. Truncates the file on creation, appends afterwards.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create (or truncate) the file at `path`, creating parent directories.
    pub fn create(path: PathBuf) -> Result<Self, Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            super::ensure_dir(parent)?;
        }
        std::fs::write(&path, "").map_err(|e| Error::FileSystem {
            message: format!("Failed to create output file: {}", e),
            path: Some(path.clone()),
            source: Some(e),
        })?;
        Ok(Self { path })
    }
}

impl ReportSink for FileSink {
    fn write_str(&self, content: &str) -> Result<(), Error> {
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(content.as_bytes()))
            .map_err(|e| Error::output(self.description(), e.to_string()))
    }

    fn flush(&self) -> Result<(), Error> {
        // Each write opens and closes the file
        Ok(())
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory sink for testing.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<RwLock<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content of the buffer.
    pub fn get_content(&self) -> String {
        match self.buffer.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Content split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.get_content().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.get_content().is_empty()
    }
}

impl ReportSink for MemorySink {
    fn write_str(&self, content: &str) -> Result<(), Error> {
        let mut guard = self
            .buffer
            .write()
            .map_err(|_| Error::output(self.description(), "buffer lock poisoned"))?;
        guard.push_str(content);
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

/// Standard output sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for StdoutSink {
    fn write_str(&self, content: &str) -> Result<(), Error> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(content.as_bytes())
            .map_err(|e| Error::output(self.description(), format!("Failed to write: {}", e)))
    }

    fn flush(&self) -> Result<(), Error> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .flush()
            .map_err(|e| Error::output(self.description(), format!("Failed to flush: {}", e)))
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}
