use crate::errors::{Error, Result};
use serde::Serialize;

/// Aggregate statistics over a non-empty integer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub sum: i64,
    pub average: f64,
    pub max: i32,
    pub min: i32,
}

/// Sum, average, max and min of `values`.
///
/// Returns [`Error::EmptyInput`] for an empty slice; nothing is computed in
/// that case.
pub fn compute_statistics(values: &[i32]) -> Result<Statistics> {
    let (&first, rest) = values
        .split_first()
        .ok_or_else(|| Error::empty_input("statistics"))?;

    let (sum, max, min) = rest.iter().fold(
        (i64::from(first), first, first),
        |(sum, max, min), &v| (sum + i64::from(v), max.max(v), min.min(v)),
    );

    Ok(Statistics {
        sum,
        average: sum as f64 / values.len() as f64,
        max,
        min,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_of_small_sequence() {
        let stats = compute_statistics(&[3, -1, 10, 4]).unwrap();
        assert_eq!(stats.sum, 16);
        assert_eq!(stats.average, 4.0);
        assert_eq!(stats.max, 10);
        assert_eq!(stats.min, -1);
    }

    #[test]
    fn test_statistics_single_element() {
        let stats = compute_statistics(&[7]).unwrap();
        assert_eq!(stats.sum, 7);
        assert_eq!(stats.max, 7);
        assert_eq!(stats.min, 7);
    }

    #[test]
    fn test_statistics_empty_input() {
        let err = compute_statistics(&[]).unwrap_err();
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_statistics_sum_does_not_overflow() {
        let stats = compute_statistics(&[i32::MAX, i32::MAX]).unwrap();
        assert_eq!(stats.sum, 2 * i64::from(i32::MAX));
    }
}
