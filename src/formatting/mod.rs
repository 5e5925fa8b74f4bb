use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

use crate::report::{LineKind, ReportLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Start from `base` and let the environment override it.
    pub fn from_env_with(base: ColorMode) -> Self {
        let mut config = Self::new(base);

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn verdict(&self, text: &str) -> String;
    fn notice(&self, text: &str) -> String;

    /// Style one report line according to its kind.
    fn format_line(&self, line: &ReportLine) -> String {
        match line.kind {
            LineKind::Header => self.header(&line.text),
            LineKind::Verdict => self.verdict(&line.text),
            LineKind::Notice => self.notice(&line.text),
            LineKind::Plain => line.text.clone(),
        }
    }
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        // Set colored control based on configuration
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn verdict(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn notice(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn verdict(&self, text: &str) -> String {
        text.to_string()
    }

    fn notice(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Formatter matching `config`: plain when colors are off.
pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config.color.should_use_color() {
        Box::new(ColoredFormatter::new(config))
    } else {
        Box::new(PlainFormatter)
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_config_disables_color() {
        assert!(!FormattingConfig::plain().color.should_use_color());
    }

    #[test]
    fn test_plain_formatter_leaves_text_untouched() {
        let line = ReportLine {
            kind: LineKind::Header,
            text: "--- Class Statistics ---".to_string(),
        };
        assert_eq!(PlainFormatter.format_line(&line), "--- Class Statistics ---");
    }

    #[test]
    fn test_colored_formatter_styles_headers() {
        let formatter = ColoredFormatter::new(FormattingConfig::new(ColorMode::Always));
        let styled = formatter.header("Matrix: A + B");
        assert!(styled.contains("Matrix: A + B"));
        assert_ne!(styled, "Matrix: A + B");
        colored::control::unset_override();
    }
}
