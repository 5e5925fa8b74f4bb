//! Custom panic hook for structured crash reports.
//!
//! The pipelines have no failure path, so a panic is always a bug. The
//! report names the program and stage that were running.

use super::context::{get_current_context, RunContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WIDTH: usize = 66;

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();

    eprintln!();
    for line in crash_report_lines(&context, &extract_panic_message(info), location(info)) {
        eprintln!("{line}");
    }
    print_backtrace_section();
}

fn location(info: &PanicHookInfo<'_>) -> Option<String> {
    info.location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
}

fn crash_report_lines(
    context: &RunContext,
    message: &str,
    location: Option<String>,
) -> Vec<String> {
    let rule = "=".repeat(WIDTH + 12);
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let mut lines = vec![
        rule.clone(),
        "ALGOLAB CRASH REPORT".to_string(),
        rule.clone(),
        format!("  Version:  {}", VERSION),
        format!("  Platform: {}", std::env::consts::OS),
        format!("  Time:     {}", timestamp),
        format!("  PANIC:    {}", truncate(message, WIDTH)),
    ];

    if let Some(loc) = location {
        lines.push(format!("  Location: {}", truncate(&loc, WIDTH)));
    }

    match context.program {
        Some(program) => lines.push(format!("  Program:  {}", program)),
        None => lines.push("  Program:  (not set - crash occurred before any run started)".into()),
    }
    if let Some(stage) = context.stage {
        lines.push(format!("  Stage:    {}", stage));
    }

    let current_span = Span::current();
    if let Some(metadata) = current_span.metadata() {
        lines.push(format!("  Span:     {}", truncate(metadata.name(), WIDTH)));
    }

    lines.push(rule);
    lines
}

fn print_backtrace_section() {
    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("Run with RUST_BACKTRACE=1 for stack trace");
    }
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
