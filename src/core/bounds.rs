//! Geometry helpers: data extrema + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::{constants::FIT_LABEL_RESERVE, error::GraphError};

/// Inclusive `(min, max)` over the present samples.
///
/// Missing samples (NaN) take part in no comparison. Fails with
/// [`GraphError::EmptyInput`] when nothing is left to compare and with
/// [`GraphError::NonFiniteSample`] on an infinite sample.
pub fn series_bounds(series: &[f64]) -> Result<(f64, f64), GraphError> {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);

    for (index, &value) in series.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        if value.is_infinite() {
            return Err(GraphError::NonFiniteSample { index, value });
        }
        low = low.min(value);
        high = high.max(value);
    }

    if low > high {
        return Err(GraphError::EmptyInput);
    }
    Ok((low, high))
}

/// Current terminal geometry (80×24 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(24)))
}

/// Sample count that fills a terminal `cols` wide once `offset` and the
/// label margin are taken off. Never below 2 so the result stays a valid
/// resample target.
#[inline]
#[must_use]
pub fn fit_width(Width(cols): Width, offset: usize) -> usize {
    usize::from(cols)
        .saturating_sub(offset + FIT_LABEL_RESERVE)
        .max(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_skipped() {
        assert_eq!(series_bounds(&[f64::NAN, 3.0, -1.0, f64::NAN]).unwrap(), (-1.0, 3.0));
    }

    #[test]
    fn all_missing_is_empty() {
        assert!(matches!(series_bounds(&[f64::NAN, f64::NAN]), Err(GraphError::EmptyInput)));
        assert!(matches!(series_bounds(&[]), Err(GraphError::EmptyInput)));
    }

    #[test]
    fn infinity_is_rejected() {
        let err = series_bounds(&[1.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(err, GraphError::NonFiniteSample { index: 1, .. }));
    }

    #[test]
    fn fit_width_leaves_room_for_labels() {
        assert_eq!(fit_width(Width(80), 3), 67);
        assert_eq!(fit_width(Width(5), 3), 2);
    }
}
