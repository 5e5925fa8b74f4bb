use serde::Serialize;
use tracing::{debug, info, info_span};

use super::search::{classify_position, linear_search, relational_overlap_count, Half};
use super::sorting::{bubble_sort, selection_sort, SortTrace};
use super::stats::{compute_statistics, Statistics};
use super::{PRIMARY_SEED, SECONDARY_SEED};
use crate::config::ArraysConfig;
use crate::observability::{set_program, set_stage, Stage};
use crate::report::{format_sequence, Program, Report};

/// Everything the array pipeline computed, in machine-readable form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayOutcome {
    pub original: Vec<i32>,
    pub sorted: Vec<i32>,
    pub sort_trace: SortTrace,
    /// `None` when the primary sequence was empty
    pub statistics: Option<Statistics>,
    pub secondary: Vec<i32>,
    pub secondary_sorted: Option<Vec<i32>>,
    pub search_target: i32,
    pub search_index: Option<usize>,
    pub position: Option<Half>,
    pub overlap_offset: i32,
    pub overlap_count: usize,
}

/// Owns the two integer sequences and runs the linear pipeline
/// sort, stats, search, classify, overlap over them.
#[derive(Debug, Clone)]
pub struct ArrayAnalyzer {
    primary: Vec<i32>,
    secondary: Vec<i32>,
    settings: ArraysConfig,
}

impl ArrayAnalyzer {
    /// Analyzer over the two fixed 20-element seed sequences.
    pub fn canonical(settings: ArraysConfig) -> Self {
        Self::new(PRIMARY_SEED.to_vec(), SECONDARY_SEED.to_vec(), settings)
    }

    pub fn new(primary: Vec<i32>, secondary: Vec<i32>, settings: ArraysConfig) -> Self {
        Self {
            primary,
            secondary,
            settings,
        }
    }

    pub fn run(mut self) -> (Report, ArrayOutcome) {
        let _program = set_program(Program::Arrays);
        let span = info_span!("arrays");
        let _enter = span.enter();

        let mut report = Report::new(Program::Arrays);
        report.header("--- Starting Analysis ---");

        let original = self.primary.clone();
        report.line("Original Array 1: ");
        report.line(format_sequence(&self.primary));

        let sort_trace = self.sort_primary(&mut report);
        let statistics = self.report_statistics(&mut report);

        report.blank();
        report.line("Original Array 2: ");
        report.line(format_sequence(&self.secondary));
        let secondary_sorted = self.sort_secondary(&mut report);

        let (search_index, position) = self.search(&mut report);
        let overlap_count = self.overlap(&mut report);

        report.verdict("Analysis Complete.");
        info!(lines = report.len(), "array analysis complete");

        let outcome = ArrayOutcome {
            original,
            sorted: self.primary,
            sort_trace,
            statistics,
            secondary: self.secondary,
            secondary_sorted,
            search_target: self.settings.search_target,
            search_index,
            position,
            overlap_offset: self.settings.overlap_offset,
            overlap_count,
        };
        (report, outcome)
    }

    fn sort_primary(&mut self, report: &mut Report) -> SortTrace {
        let _stage = set_stage(Stage::Sorting);
        if self.primary.is_empty() {
            report.notice("Array 1 is empty.");
            return SortTrace::default();
        }

        report.line("Array 1 is valid. Starting Bubble Sort...");
        let trace = bubble_sort(&mut self.primary);
        debug!(passes = trace.passes, swaps = trace.swaps, "bubble sort finished");
        report.line("Sorted Array 1: ");
        report.line(format_sequence(&self.primary));
        trace
    }

    fn report_statistics(&self, report: &mut Report) -> Option<Statistics> {
        let _stage = set_stage(Stage::Statistics);
        match compute_statistics(&self.primary) {
            Ok(stats) => {
                report.line(format!(
                    "Stats for Array 1 -> Sum: {}, Avg: {:.2}, Max: {}, Min: {}",
                    stats.sum, stats.average, stats.max, stats.min
                ));
                Some(stats)
            }
            Err(e) => {
                debug!(error = %e, "statistics skipped");
                report.notice("Stats for Array 1 -> unavailable (empty input)");
                None
            }
        }
    }

    fn sort_secondary(&mut self, report: &mut Report) -> Option<Vec<i32>> {
        if !self.settings.sort_secondary {
            return None;
        }
        let _stage = set_stage(Stage::Sorting);
        let mut sorted = self.secondary.clone();
        selection_sort(&mut sorted);
        report.line("Sorted Array 2: ");
        report.line(format_sequence(&sorted));
        Some(sorted)
    }

    fn search(&self, report: &mut Report) -> (Option<usize>, Option<Half>) {
        let _stage = set_stage(Stage::Searching);
        let target = self.settings.search_target;

        report.blank();
        report.line(format!(
            "Searching for value {} in Sorted Array 1...",
            target
        ));

        match linear_search(&self.primary, &target) {
            Some(index) => {
                let half = classify_position(index, self.primary.len());
                debug!(search_target = target, index, %half, "search hit");
                report.verdict(format!("Element found at index {}", index));
                report.line(format!("Element is in the {} of the array.", half));
                (Some(index), Some(half))
            }
            None => {
                report.notice("Element not found.");
                (None, None)
            }
        }
    }

    fn overlap(&self, report: &mut Report) -> usize {
        let _stage = set_stage(Stage::Overlap);
        report.blank();
        report.line("Checking overlap between arrays...");
        let count = relational_overlap_count(
            &self.primary,
            &self.secondary,
            self.settings.overlap_offset,
        );
        report.verdict(format!("Found {} elements with offset relation.", count));
        count
    }
}

/// Run the array pipeline over the seed data.
pub fn run_arrays(settings: &ArraysConfig) -> (Report, ArrayOutcome) {
    ArrayAnalyzer::canonical(settings.clone()).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_outcome() {
        let (_, outcome) = run_arrays(&ArraysConfig::default());

        assert_eq!(
            outcome.sorted,
            vec![4, 9, 10, 11, 12, 21, 22, 22, 25, 33, 34, 34, 55, 56, 64, 67, 78, 88, 90, 99]
        );
        let stats = outcome.statistics.unwrap();
        assert_eq!(stats.sum, 834);
        assert_eq!(stats.max, 99);
        assert_eq!(stats.min, 4);
        assert_eq!(outcome.search_index, Some(6));
        assert_eq!(outcome.position, Some(Half::First));
        assert_eq!(outcome.overlap_count, 22);
        assert_eq!(outcome.secondary_sorted, None);
        assert_eq!(outcome.secondary, SECONDARY_SEED.to_vec());
    }

    #[test]
    fn test_canonical_report_lines() {
        let (report, _) = run_arrays(&ArraysConfig::default());

        assert!(report.contains_line("Array 1 is valid. Starting Bubble Sort..."));
        assert!(report.contains_line("Stats for Array 1 -> Sum: 834, Avg: 41.70, Max: 99, Min: 4"));
        assert!(report.contains_line("Element found at index 6"));
        assert!(report.contains_line("Element is in the first half of the array."));
        assert!(report.contains_line("Found 22 elements with offset relation."));
        assert!(!report.contains_line("Sorted Array 2: "));
        assert_eq!(report.texts().last(), Some("Analysis Complete."));
    }

    #[test]
    fn test_empty_primary_reports_and_continues() {
        let analyzer = ArrayAnalyzer::new(Vec::new(), vec![122], ArraysConfig::default());
        let (report, outcome) = analyzer.run();

        assert!(report.contains_line("Array 1 is empty."));
        assert!(report.contains_line("Stats for Array 1 -> unavailable (empty input)"));
        assert!(report.contains_line("Element not found."));
        assert!(report.contains_line("Found 0 elements with offset relation."));
        assert_eq!(report.texts().last(), Some("Analysis Complete."));
        assert_eq!(outcome.statistics, None);
        assert_eq!(outcome.search_index, None);
    }

    #[test]
    fn test_sort_secondary_adds_dump_without_changing_overlap() {
        let settings = ArraysConfig {
            sort_secondary: true,
            ..ArraysConfig::default()
        };
        let (report, outcome) = run_arrays(&settings);

        assert!(report.contains_line("Sorted Array 2: "));
        let sorted = outcome.secondary_sorted.unwrap();
        assert_eq!(sorted.first(), Some(&14));
        assert_eq!(sorted.last(), Some(&199));
        assert_eq!(outcome.overlap_count, 22);
    }

    #[test]
    fn test_missing_target_is_not_found() {
        let settings = ArraysConfig {
            search_target: 1000,
            ..ArraysConfig::default()
        };
        let (report, outcome) = run_arrays(&settings);
        assert_eq!(outcome.search_index, None);
        assert!(report.contains_line("Element not found."));
    }

    #[test]
    fn test_target_in_second_half() {
        let settings = ArraysConfig {
            search_target: 99,
            ..ArraysConfig::default()
        };
        let (report, outcome) = run_arrays(&settings);
        assert_eq!(outcome.search_index, Some(19));
        assert_eq!(outcome.position, Some(Half::Second));
        assert!(report.contains_line("Element is in the second half of the array."));
    }
}
