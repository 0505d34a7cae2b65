//! Run-time configuration object + fluent builder.

use crate::core::constants::{DEFAULT_OFFSET, DEFAULT_PRECISION};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Resample the series to this many points before plotting.
    pub width: Option<usize>,
    /// Row-count hint; derived from the data range when absent.
    pub height: Option<usize>,
    /// Columns reserved for labels, the last one holding the tick.
    pub offset: usize,
    /// Baseline decimal digits for row labels.
    pub precision: usize,
    pub caption: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            offset: DEFAULT_OFFSET,
            precision: DEFAULT_PRECISION,
            caption: String::new(),
        }
    }
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Fluent builder. Every setter overrides one field; order does not matter.
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    width: Option<usize>,
    height: Option<usize>,
    offset: Option<usize>,
    precision: Option<usize>,
    caption: Option<String>,
}

impl ConfigBuilder {
    /// `0` leaves the series length untouched.
    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }
    /// `0` derives the row count from the data.
    #[inline]
    #[must_use]
    pub fn height(mut self, h: usize) -> Self {
        self.height = Some(h);
        self
    }
    /// `0` falls back to the default offset.
    #[inline]
    #[must_use]
    pub fn offset(mut self, o: usize) -> Self {
        self.offset = Some(o);
        self
    }
    #[inline]
    #[must_use]
    pub fn precision(mut self, p: usize) -> Self {
        self.precision = Some(p);
        self
    }
    #[inline]
    #[must_use]
    pub fn caption(mut self, c: impl Into<String>) -> Self {
        self.caption = Some(c.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn caption_opt(mut self, c: Option<&str>) -> Self {
        if let Some(t) = c {
            self.caption = Some(t.to_owned());
        }
        self
    }

    /// Merge the overrides over [`Config::default`].
    #[must_use]
    pub fn build(self) -> Config {
        let defaults = Config::default();
        Config {
            width: self.width.filter(|&w| w > 0),
            height: self.height.filter(|&h| h > 0),
            offset: self.offset.filter(|&o| o > 0).unwrap_or(defaults.offset),
            precision: self.precision.unwrap_or(defaults.precision),
            caption: self.caption.unwrap_or(defaults.caption),
        }
    }
}

impl From<ConfigBuilder> for Config {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
