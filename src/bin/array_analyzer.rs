use algolab::report::Program;
use anyhow::Result;

fn main() -> Result<()> {
    algolab::commands::run::run_standalone(Program::Arrays)
}
