use algolab::cli::{Cli, Commands};
use algolab::commands::run::{handle_run, Overrides};
use algolab::report::Program;
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    algolab::observability::install_panic_hook();
    let cli = Cli::parse();

    match cli.command {
        Commands::Arrays {
            run,
            search_target,
            sort_secondary,
        } => handle_run(
            vec![Program::Arrays],
            &run,
            Overrides {
                search_target,
                sort_secondary,
                ..Overrides::default()
            },
        ),
        Commands::Matrix { run, scalar } => handle_run(
            vec![Program::Matrix],
            &run,
            Overrides {
                scalar,
                ..Overrides::default()
            },
        ),
        Commands::Grades { run } => handle_run(vec![Program::Grades], &run, Overrides::default()),
        Commands::All { run } => handle_run(Program::ALL.to_vec(), &run, Overrides::default()),
        Commands::Init { force } => algolab::commands::init::init_config(force),
    }
}
