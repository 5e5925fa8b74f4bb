use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

use crate::cli::RunArgs;
use crate::config::{resolve_config, AlgolabConfig};
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::{write_runs, FileSink, OutputFormat, ReportSink, StdoutSink};
use crate::observability::{
    init_fixed_tracing, init_tracing, install_panic_hook, level_for_verbosity, set_stage, Stage,
};
use crate::pipeline::run_programs;
use crate::report::Program;

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub programs: Vec<Program>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
    pub config: AlgolabConfig,
}

/// Per-subcommand overrides layered on top of the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub search_target: Option<i32>,
    pub sort_secondary: bool,
    pub scalar: Option<i32>,
}

// Pure function: CLI flags win over the config file, which wins over defaults
pub fn apply_overrides(mut config: AlgolabConfig, overrides: Overrides) -> AlgolabConfig {
    let mut arrays = config.arrays();
    if let Some(target) = overrides.search_target {
        arrays.search_target = target;
    }
    arrays.sort_secondary |= overrides.sort_secondary;
    config.arrays = Some(arrays);

    if let Some(scalar) = overrides.scalar {
        let mut matrix = config.matrix();
        matrix.scalar = scalar;
        config.matrix = Some(matrix);
    }
    config
}

// Pure function to create formatting configuration
pub fn create_formatting_config(
    plain: bool,
    to_file: bool,
    config: &AlgolabConfig,
) -> FormattingConfig {
    if plain {
        return FormattingConfig::plain();
    }

    let formatting =
        FormattingConfig::from_env_with(config.output().color.unwrap_or(ColorMode::Auto));
    // Auto-detection probes stdout, which says nothing about a file sink
    if to_file && formatting.color == ColorMode::Auto {
        FormattingConfig::plain()
    } else {
        formatting
    }
}

pub fn build_run_config(
    programs: Vec<Program>,
    args: &RunArgs,
    overrides: Overrides,
) -> Result<RunConfig> {
    let file_config = resolve_config(args.config.as_deref())?;
    let config = apply_overrides(file_config, overrides);
    let format = args
        .format
        .or(config.output().default_format)
        .unwrap_or_default();

    Ok(RunConfig {
        programs,
        format,
        output: args.output.clone(),
        formatting: create_formatting_config(args.plain, args.output.is_some(), &config),
        config,
    })
}

/// Run the configured programs and write their reports to `sink`.
pub fn execute(run: &RunConfig, sink: &dyn ReportSink) -> Result<()> {
    let runs = run_programs(&run.programs, &run.config);

    let _stage = set_stage(Stage::OutputGeneration);
    debug!(sink = %sink.description(), format = ?run.format, "writing reports");
    write_runs(&runs, run.format, sink, run.formatting)
        .with_context(|| format!("Failed to write report to {}", sink.description()))?;
    Ok(())
}

/// Entry point for the analysis subcommands.
pub fn handle_run(programs: Vec<Program>, args: &RunArgs, overrides: Overrides) -> Result<()> {
    init_tracing(args.verbosity);
    let run = build_run_config(programs, args, overrides)?;

    match &run.output {
        Some(path) => {
            let sink = FileSink::create(path.clone())?;
            execute(&run, &sink)
        }
        None => execute(&run, &StdoutSink::new()),
    }
}

/// Standalone program: defaults only, no flags, no config discovery.
pub fn run_standalone(program: Program) -> Result<()> {
    install_panic_hook();
    init_fixed_tracing(level_for_verbosity(0));

    let run = RunConfig {
        programs: vec![program],
        format: OutputFormat::Terminal,
        output: None,
        formatting: FormattingConfig::new(ColorMode::Auto),
        config: AlgolabConfig::default(),
    };
    execute(&run, &StdoutSink::new())
}
