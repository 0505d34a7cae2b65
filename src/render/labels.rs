//! Row-axis labels.

use crate::{core::constants::LARGE_MAGNITUDE_LOG, render::scale::ScaledRange};

/// Formatted labels, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub precision: usize,
    /// Width of the longer of the formatted min / max.
    pub width: usize,
    /// One per grid row, each `width + 1` wide, right-aligned.
    pub rows: Vec<String>,
}

/// Decimal digits needed to tell rows apart at this magnitude.
///
/// Sub-unit magnitudes gain digits (exact powers of ten one fewer than
/// their neighbours); magnitudes above 100 drop to whole numbers. A series
/// with `min = max = 0` is treated as magnitude `10^-1`, an exact power of
/// ten, so it gains no digits and keeps `base`.
#[must_use]
pub fn label_precision(base: usize, min: f64, max: f64) -> usize {
    let log_max = if min == 0.0 && max == 0.0 {
        -1.0
    } else {
        max.abs().max(min.abs()).log10()
    };

    if log_max < 0.0 {
        if log_max % 1.0 == 0.0 {
            base + (log_max.abs() - 1.0) as usize
        } else {
            base + log_max.abs() as usize
        }
    } else if log_max > LARGE_MAGNITUDE_LOG {
        0
    } else {
        base
    }
}

impl Labels {
    #[must_use]
    pub fn format(range: &ScaledRange, base_precision: usize) -> Self {
        let precision = label_precision(base_precision, range.min, range.max);
        let width = format!("{:.precision$}", range.max)
            .len()
            .max(format!("{:.precision$}", range.min).len());

        let rows = (range.min2..=range.max2)
            .map(|y| {
                let magnitude = if range.rows > 0 {
                    range.max - (y - range.min2) as f64 * range.interval / range.rows as f64
                } else {
                    y as f64
                };
                format!("{magnitude:>w$.precision$}", w = width + 1)
            })
            .collect();

        Self {
            precision,
            width,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(series: &[f64]) -> ScaledRange {
        ScaledRange::compute(series, None).unwrap()
    }

    #[test]
    fn precision_by_magnitude() {
        assert_eq!(label_precision(2, 1.0, 5.0), 2);
        assert_eq!(label_precision(2, 0.0, 0.05), 3);
        assert_eq!(label_precision(2, 0.0, 0.01), 3);
        assert_eq!(label_precision(2, 0.0, 0.1), 2);
        assert_eq!(label_precision(2, -0.002, 0.001), 4);
        assert_eq!(label_precision(2, 0.0, 100.0), 2);
        assert_eq!(label_precision(2, 0.0, 500.0), 0);
        assert_eq!(label_precision(5, -1000.0, 3.0), 0);
    }

    #[test]
    fn all_zero_series_keeps_base_precision() {
        assert_eq!(label_precision(2, 0.0, 0.0), 2);
        assert_eq!(label_precision(0, 0.0, 0.0), 0);
    }

    #[test]
    fn one_label_per_row_top_down() {
        let l = Labels::format(&range(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2);
        assert_eq!(l.width, 4);
        assert_eq!(l.rows, vec![" 5.00", " 4.00", " 3.00", " 2.00", " 1.00"]);
    }

    #[test]
    fn width_follows_longer_bound() {
        let l = Labels::format(&range(&[-12.0, 3.0]), 2);
        assert_eq!(l.width, "-12.00".len());
        assert_eq!(l.rows.first().map(String::as_str), Some("   3.00"));
        assert_eq!(l.rows.last().map(String::as_str), Some(" -12.00"));
    }

    #[test]
    fn flat_range_labels_its_scaled_row() {
        let l = Labels::format(&range(&[5.0, 5.0]), 2);
        assert_eq!(l.rows, vec![" 5.00"]);
    }
}
