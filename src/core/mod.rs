//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod rng;

// re-export frequently-used items for convenience
pub use bounds::series_bounds;
pub use config::{Config, ConfigBuilder};
pub use constants::{DEFAULT_OFFSET, DEFAULT_PRECISION};
pub use data::{ParseSeriesError, read_series};
pub use error::GraphError;
