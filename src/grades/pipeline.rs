use serde::Serialize;
use tracing::{debug, info, info_span};

use super::record::{roster, StudentScores};
use super::rules::{evaluate, StudentResult};
use super::summary::{class_statistics, find_topper, ClassStatistics, Verdict};
use crate::observability::{set_program, set_stage, Stage};
use crate::report::{Program, Report};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Topper {
    pub id: u32,
    pub average: f64,
}

/// Everything the grade pipeline computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeOutcome {
    pub students: Vec<StudentResult>,
    pub statistics: ClassStatistics,
    pub verdict: Verdict,
    pub topper: Option<Topper>,
}

pub fn format_student_row(r: &StudentResult) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{:.1}\t{}\t{}",
        r.scores.id,
        r.scores.math,
        r.scores.science,
        r.scores.english,
        r.average,
        r.grade,
        r.status()
    )
}

/// Evaluate `scores` and render the class report.
pub fn analyze_students(scores: &[StudentScores]) -> (Report, GradeOutcome) {
    let _program = set_program(Program::Grades);
    let span = info_span!("grades", students = scores.len());
    let _enter = span.enter();

    let mut report = Report::new(Program::Grades);
    report.header("--- Student Result Processing ---");

    let students: Vec<StudentResult> = {
        let _stage = set_stage(Stage::RecordDerivation);
        scores.iter().copied().map(evaluate).collect()
    };

    report.line("ID\tMath\tSci\tEng\tAvg\tGrade\tStatus");
    report.line("-".repeat(52));
    for student in &students {
        debug!(id = student.scores.id, average = student.average, passed = student.passed);
        report.line(format_student_row(student));
    }

    let statistics = {
        let _stage = set_stage(Stage::ClassStatistics);
        class_statistics(&students)
    };
    let verdict = statistics.verdict();

    report.blank();
    report.header("--- Class Statistics ---");
    report.line(format!("Total Students: {}", statistics.total_students));
    report.line(format!("Pass Count: {}", statistics.pass_count));
    report.line(format!("Fail Count: {}", statistics.fail_count));
    report.line(format!("Total Math Marks: {}", statistics.total_math));
    report.line(format!("Total Science Marks: {}", statistics.total_science));
    report.verdict(format!("Overall Class Performance: {}", verdict));

    let topper = {
        let _stage = set_stage(Stage::TopperSearch);
        find_topper(&students).map(|r| Topper {
            id: r.scores.id,
            average: r.average,
        })
    };
    match topper {
        Some(t) => report.verdict(format!("Class Topper ID: {} with {:.1}%", t.id, t.average)),
        None => report.notice("No students to rank."),
    }
    info!(passed = statistics.pass_count, "grade analysis complete");

    let outcome = GradeOutcome {
        students,
        statistics,
        verdict,
        topper,
    };
    (report, outcome)
}

/// Run the grade pipeline over the generated roster.
pub fn run_grades() -> (Report, GradeOutcome) {
    let scores = {
        let _stage = set_stage(Stage::RecordGeneration);
        roster()
    };
    analyze_students(&scores)
}
