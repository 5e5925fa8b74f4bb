//! In-place comparison sorts.

use serde::Serialize;

/// Work performed by a bubble sort run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortTrace {
    /// Number of inner passes executed, including the final no-exchange pass
    pub passes: usize,
    /// Number of adjacent exchanges
    pub swaps: usize,
}

impl SortTrace {
    /// True when the sort stopped after one pass without exchanges.
    pub fn was_already_sorted(&self) -> bool {
        self.swaps == 0 && self.passes <= 1
    }
}

/// Bubble sort with early exit.
///
/// Stops as soon as a full pass makes no exchange, so an ordered input costs
/// a single O(n) pass.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) -> SortTrace {
    let n = arr.len();
    let mut trace = SortTrace::default();

    for i in 0..n.saturating_sub(1) {
        trace.passes += 1;
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                trace.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    trace
}

/// Selection sort: repeatedly moves the minimum of the unsorted tail to the
/// front. Always O(n²) comparisons, at most n - 1 swaps.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in (i + 1)..n {
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        arr.swap(min_idx, i);
    }
}

/// Whether `arr` is in non-decreasing order.
pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_sort_orders_values() {
        let mut data = [5, -2, 9, 0, 5, 3];
        bubble_sort(&mut data);
        assert_eq!(data, [-2, 0, 3, 5, 5, 9]);
    }

    #[test]
    fn test_bubble_sort_early_exit_on_sorted_input() {
        let mut data = [1, 2, 3, 4, 5, 6, 7];
        let trace = bubble_sort(&mut data);
        assert_eq!(trace.passes, 1, "sorted input needs one verification pass");
        assert_eq!(trace.swaps, 0);
        assert!(trace.was_already_sorted());
    }

    #[test]
    fn test_bubble_sort_reverse_input_runs_all_passes() {
        let mut data = [4, 3, 2, 1];
        let trace = bubble_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4]);
        assert_eq!(trace.swaps, 6);
        assert_eq!(trace.passes, 3);
    }

    #[test]
    fn test_bubble_sort_trivial_inputs() {
        let mut empty: [i32; 0] = [];
        assert_eq!(bubble_sort(&mut empty), SortTrace::default());

        let mut single = [42];
        assert_eq!(bubble_sort(&mut single).passes, 0);
        assert_eq!(single, [42]);
    }

    #[test]
    fn test_selection_sort_orders_values() {
        let mut data = [164, 134, 19, 14, 199, 134];
        selection_sort(&mut data);
        assert_eq!(data, [14, 19, 134, 134, 164, 199]);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
