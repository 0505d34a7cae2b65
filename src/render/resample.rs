//! Piecewise-linear resampling to a requested point count.

use tracing::debug;

use crate::core::error::GraphError;

/// `y0 + (y1 - y0)·frac(x)` between the samples either side of `x`.
#[inline]
fn interpolate_at(series: &[f64], x: f64) -> f64 {
    let (lo, hi) = (x.floor(), x.ceil());
    let y0 = series[lo as usize];
    let y1 = series[hi as usize];
    y0 + (y1 - y0) * (x - lo)
}

/// Stretch or squeeze `series` to exactly `target` points.
///
/// Endpoints are kept verbatim; interior point `i` samples the source at
/// `i · (len - 1) / (target - 1)`. Missing samples propagate into every
/// interpolated point that touches them.
pub fn resample(series: &[f64], target: usize) -> Result<Vec<f64>, GraphError> {
    if series.len() < 2 || target < 2 {
        return Err(GraphError::InvalidResampleTarget {
            source_len: series.len(),
            target_len: target,
        });
    }

    let spring = (series.len() - 1) as f64 / (target - 1) as f64;
    let mut out = Vec::with_capacity(target);
    out.push(series[0]);
    out.extend((1..target - 1).map(|i| interpolate_at(series, i as f64 * spring)));
    out.push(series[series.len() - 1]);

    debug!(from = series.len(), to = target, spring, "resampled series");
    Ok(out)
}
