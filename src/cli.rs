use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "algolab")]
#[command(about = "Deterministic array, matrix and grade analysis demonstrations", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every analysis subcommand
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    /// Output format (defaults to the config file value, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Plain output: no colors
    #[arg(long)]
    pub plain: bool,

    /// Configuration file (defaults to the nearest .algolab.toml)
    #[arg(short, long, env = "ALGOLAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort, summarize and search the fixed integer sequences
    Arrays {
        #[command(flatten)]
        run: RunArgs,

        /// Value to search for in the sorted sequence
        #[arg(long = "search-target")]
        search_target: Option<i32>,

        /// Also selection-sort and dump the second sequence
        #[arg(long = "sort-secondary")]
        sort_secondary: bool,
    },

    /// Run the 5x5 matrix operations
    Matrix {
        #[command(flatten)]
        run: RunArgs,

        /// Scalar applied in the final stage
        #[arg(long, allow_hyphen_values = true)]
        scalar: Option<i32>,
    },

    /// Grade the fixed student roster
    Grades {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Run all three programs in order
    All {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_arrays_with_overrides() {
        let cli = Cli::parse_from([
            "algolab",
            "arrays",
            "--search-target",
            "99",
            "--sort-secondary",
            "--format",
            "json",
            "-vv",
        ]);
        match cli.command {
            Commands::Arrays {
                run,
                search_target,
                sort_secondary,
            } => {
                assert_eq!(search_target, Some(99));
                assert!(sort_secondary);
                assert_eq!(run.format, Some(OutputFormat::Json));
                assert_eq!(run.verbosity, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_scalar() {
        let cli = Cli::parse_from(["algolab", "matrix", "--scalar", "-3"]);
        match cli.command {
            Commands::Matrix { scalar, .. } => assert_eq!(scalar, Some(-3)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_all_plain_with_output() {
        let cli = Cli::parse_from(["algolab", "all", "--plain", "-o", "report.txt"]);
        match cli.command {
            Commands::All { run } => {
                assert!(run.plain);
                assert_eq!(run.output, Some(PathBuf::from("report.txt")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
