//! Dispatch from a [`Program`] to its pipeline.

use serde::Serialize;

use crate::arrays::{run_arrays, ArrayOutcome};
use crate::config::AlgolabConfig;
use crate::grades::{run_grades, GradeOutcome};
use crate::matrix::{run_matrix, MatrixOutcome};
use crate::report::{Program, Report};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "program", rename_all = "snake_case")]
pub enum RunOutcome {
    Arrays(ArrayOutcome),
    Matrix(MatrixOutcome),
    Grades(GradeOutcome),
}

/// Report and typed outcome of one program run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramRun {
    pub report: Report,
    pub outcome: RunOutcome,
}

pub fn run_program(program: Program, config: &AlgolabConfig) -> ProgramRun {
    match program {
        Program::Arrays => {
            let (report, outcome) = run_arrays(&config.arrays());
            ProgramRun {
                report,
                outcome: RunOutcome::Arrays(outcome),
            }
        }
        Program::Matrix => {
            let (report, outcome) = run_matrix(&config.matrix());
            ProgramRun {
                report,
                outcome: RunOutcome::Matrix(outcome),
            }
        }
        Program::Grades => {
            let (report, outcome) = run_grades();
            ProgramRun {
                report,
                outcome: RunOutcome::Grades(outcome),
            }
        }
    }
}

/// Run each program in order; the programs share no state.
pub fn run_programs(programs: &[Program], config: &AlgolabConfig) -> Vec<ProgramRun> {
    programs.iter().map(|&p| run_program(p, config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_program_tags_outcome() {
        let config = AlgolabConfig::default();
        let run = run_program(Program::Matrix, &config);
        assert_eq!(run.report.program, Program::Matrix);
        assert!(matches!(run.outcome, RunOutcome::Matrix(_)));
    }

    #[test]
    fn test_runs_are_deterministic() {
        let config = AlgolabConfig::default();
        let first = run_programs(&Program::ALL, &config);
        let second = run_programs(&Program::ALL, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_outcome_serializes_with_program_tag() {
        let run = run_program(Program::Grades, &AlgolabConfig::default());
        let json = serde_json::to_value(&run.outcome).unwrap();
        assert_eq!(json["program"], "grades");
        assert_eq!(json["verdict"], "GOOD");
    }
}
