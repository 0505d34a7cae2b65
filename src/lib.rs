//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use cli::screen::ClearScreen;
pub use crate::core::{
    config::{Config, ConfigBuilder},
    data::{ParseErrorKind, ParseSeriesError, read_series},
    error::GraphError,
};
pub use render::{ScaledRange, Segment, render, resample};

/// Render `series` with the default configuration.
pub fn plot(series: &[f64]) -> Result<String, GraphError> {
    render(series, &Config::default())
}
