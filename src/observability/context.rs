//! Thread-local context tracking for crash reports.
//!
//! Records which program and which pipeline stage is running so the panic
//! hook can say where a crash happened. Guards restore the previous context
//! on drop, so stages nest naturally inside a program run.

use std::cell::RefCell;

use crate::report::Program;

thread_local! {
    static CURRENT_CONTEXT: RefCell<RunContext> = const { RefCell::new(RunContext::new()) };
}

/// Context snapshot for the current run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunContext {
    pub program: Option<Program>,
    pub stage: Option<Stage>,
}

impl RunContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            program: None,
            stage: None,
        }
    }
}

/// Pipeline stages across all three programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Sorting,
    Statistics,
    Searching,
    Overlap,
    MatrixInit,
    Addition,
    Multiplication,
    Transpose,
    DiagonalAnalysis,
    ScalarMultiply,
    RecordGeneration,
    RecordDerivation,
    ClassStatistics,
    TopperSearch,
    OutputGeneration,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sorting => "sorting",
            Self::Statistics => "statistics",
            Self::Searching => "searching",
            Self::Overlap => "overlap",
            Self::MatrixInit => "matrix_init",
            Self::Addition => "addition",
            Self::Multiplication => "multiplication",
            Self::Transpose => "transpose",
            Self::DiagonalAnalysis => "diagonal_analysis",
            Self::ScalarMultiply => "scalar_multiply",
            Self::RecordGeneration => "record_generation",
            Self::RecordDerivation => "record_derivation",
            Self::ClassStatistics => "class_statistics",
            Self::TopperSearch => "topper_search",
            Self::OutputGeneration => "output_generation",
        };
        write!(f, "{name}")
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: RunContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous;
        });
    }
}

/// Set the current program; clears any stage left over from a previous run.
#[must_use]
pub fn set_program(program: Program) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = *ctx.borrow();
        *ctx.borrow_mut() = RunContext {
            program: Some(program),
            stage: None,
        };
        ContextGuard { previous }
    })
}

/// Set the current stage.
///
/// ```ignore
/// let _stage = set_stage(Stage::Sorting);
/// // sort...
/// // previous stage restored when _stage drops
/// ```
#[must_use]
pub fn set_stage(stage: Stage) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = *ctx.borrow();
        ctx.borrow_mut().stage = Some(stage);
        ContextGuard { previous }
    })
}

#[must_use]
pub fn get_current_context() -> RunContext {
    CURRENT_CONTEXT.with(|ctx| *ctx.borrow())
}

pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = RunContext::new();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_guard_restores_previous() {
        reset_context();

        let _program = set_program(Program::Matrix);
        let _outer = set_stage(Stage::Addition);
        {
            let _inner = set_stage(Stage::Multiplication);
            assert_eq!(get_current_context().stage, Some(Stage::Multiplication));
        }

        let ctx = get_current_context();
        assert_eq!(ctx.program, Some(Program::Matrix));
        assert_eq!(ctx.stage, Some(Stage::Addition));
    }

    #[test]
    fn test_set_program_clears_stage() {
        reset_context();

        let _stage = set_stage(Stage::Sorting);
        {
            let _program = set_program(Program::Grades);
            assert_eq!(get_current_context().stage, None);
        }
        assert_eq!(get_current_context().stage, Some(Stage::Sorting));
    }

    #[test]
    fn test_empty_context_by_default() {
        reset_context();
        assert_eq!(get_current_context(), RunContext::new());
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::DiagonalAnalysis.to_string(), "diagonal_analysis");
        assert_eq!(Stage::TopperSearch.to_string(), "topper_search");
    }
}
