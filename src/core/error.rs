//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::data::ParseSeriesError;

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum GraphError {
    /// No samples at all, or every sample is missing.
    #[error("series has no plottable samples")]
    EmptyInput,
    #[error("cannot resample {source_len} samples to {target_len}: both lengths must be at least 2")]
    InvalidResampleTarget {
        source_len: usize,
        target_len: usize,
    },
    #[error("value range {min}..{max} needs more than {limit} rows")]
    TooManyRows { min: f64, max: f64, limit: usize },
    #[error("sample {index} is not finite ({value})")]
    NonFiniteSample { index: usize, value: f64 },
    #[error(transparent)]
    Parse(#[from] ParseSeriesError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
