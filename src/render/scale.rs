//! Value → row scaling.
//!
//! Rows are counted bottom-up here (`0` is the lowest displayed value);
//! the grid flips them when it writes cells.

use tracing::debug;

use crate::core::{bounds::series_bounds, constants::MAX_ROWS, error::GraphError};

/// Everything derived from the data range that later stages need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledRange {
    pub min: f64,
    pub max: f64,
    /// `|max - min|`
    pub interval: f64,
    /// Requested or derived row-count hint that fixed `ratio`.
    pub height: usize,
    /// Rows per unit of value.
    pub ratio: f64,
    pub min2: i64,
    pub max2: i64,
    /// `|max2 - min2|`; the grid has `rows + 1` lines.
    pub rows: usize,
}

/// Row hint when none is configured: whole units of the interval, or for
/// sub-unit ranges the interval shifted up by the smallest power of ten
/// that reaches 1. A flat series gets a single row.
#[must_use]
pub fn derive_height(interval: f64) -> usize {
    if interval == 0.0 {
        return 1;
    }
    let whole = interval.floor();
    if whole >= 1.0 {
        return whole as usize;
    }
    let shift = (-interval.log10()).ceil() as i32;
    ((interval * 10f64.powi(shift)).floor() as usize).max(1)
}

/// `round(v)` as a row index, `None` once it no longer fits an `i64`.
#[inline]
fn round_to_row(v: f64) -> Option<i64> {
    const LIMIT: f64 = 9.0e18;
    let r = v.round();
    (r.abs() < LIMIT).then(|| r as i64)
}

impl ScaledRange {
    /// Scan `series` and fix the scale. `height` of `None` derives it.
    pub fn compute(series: &[f64], height: Option<usize>) -> Result<Self, GraphError> {
        if series.is_empty() {
            return Err(GraphError::EmptyInput);
        }
        let (min, max) = series_bounds(series)?;
        let interval = (max - min).abs();
        let height = height.unwrap_or_else(|| derive_height(interval));

        let ratio = if interval == 0.0 {
            1.0
        } else {
            height as f64 / interval
        };
        let too_many = || GraphError::TooManyRows {
            min,
            max,
            limit: MAX_ROWS,
        };
        let min2 = round_to_row(min * ratio).ok_or_else(too_many)?;
        let max2 = round_to_row(max * ratio).ok_or_else(too_many)?;
        let rows = max2
            .checked_sub(min2)
            .and_then(|d| usize::try_from(d.unsigned_abs()).ok())
            .filter(|&r| r <= MAX_ROWS)
            .ok_or_else(too_many)?;

        let range = Self {
            min,
            max,
            interval,
            height,
            ratio,
            min2,
            max2,
            rows,
        };
        debug!(min, max, interval, height, ratio, rows, "scaled range");
        Ok(range)
    }

    /// Bottom-up row of `value`, `None` for a missing sample.
    #[inline]
    #[must_use]
    pub fn scaled_row(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        let r = (value * self.ratio).round() as i64 - self.min2;
        Some(r.clamp(0, self.rows as i64) as usize)
    }
}
