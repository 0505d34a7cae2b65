//! Series → text pipeline.
//!
//! ### Workflow
//! 1. [`resample`] stretches the series to `Config::width`, if set.
//! 2. [`ScaledRange::compute`] fixes value → row scaling.
//! 3. [`Labels::format`] picks label precision and text per row.
//! 4. [`Grid::draw`] lays out labels, ticks and the line.
//! 5. [`assemble`] turns the grid into trimmed lines plus caption.

pub mod assemble;
pub mod grid;
pub mod labels;
pub mod resample;
pub mod scale;
pub mod segment;

use std::borrow::Cow;

use tracing::debug;

pub use assemble::assemble;
pub use grid::{Cell, Grid};
pub use labels::{Labels, label_precision};
pub use resample::resample;
pub use scale::ScaledRange;
pub use segment::Segment;

use crate::core::{config::Config, constants::DEFAULT_OFFSET, error::GraphError};

/// Render `series` as a line chart.
///
/// Missing samples (NaN) break the line. Fails on an empty or all-missing
/// series, on infinite samples, when a configured width cannot be used
/// as a resample target, and when the range needs more than
/// [`MAX_ROWS`](crate::core::constants::MAX_ROWS) rows. An offset of 0
/// falls back to the default.
pub fn render(series: &[f64], config: &Config) -> Result<String, GraphError> {
    if series.is_empty() {
        return Err(GraphError::EmptyInput);
    }

    let series: Cow<'_, [f64]> = match config.width {
        Some(w) => Cow::Owned(resample(series, w)?),
        None => Cow::Borrowed(series),
    };

    let range = ScaledRange::compute(&series, config.height)?;
    let labels = Labels::format(&range, config.precision);
    let offset = if config.offset == 0 {
        DEFAULT_OFFSET
    } else {
        config.offset
    };
    let grid = Grid::draw(&series, &range, &labels, offset);

    debug!(
        samples = series.len(),
        lines = range.rows + 1,
        precision = labels.precision,
        "rendered chart"
    );
    Ok(assemble(&grid, &config.caption, labels.width, series.len()))
}
