//! A collection of constants.

/// Columns reserved left of the plot for labels and the tick column.
pub const DEFAULT_OFFSET: usize = 3;
/// Baseline number of decimal digits in row labels.
pub const DEFAULT_PRECISION: usize = 2;

/// Label magnitudes above `10^LARGE_MAGNITUDE_LOG` are printed as integers.
pub const LARGE_MAGNITUDE_LOG: f64 = 2.0;

/// Most grid rows a single chart may scale to.
pub const MAX_ROWS: usize = 1 << 16;

/// Columns `--fit` keeps free for labels when sizing to the terminal.
pub const FIT_LABEL_RESERVE: usize = 10;

// Box-drawing glyphs
pub const TICK: char = '┤';
pub const START: char = '┼';
pub const HORIZONTAL: char = '─';
pub const VERTICAL: char = '│';
/// Left neighbour missing: stroke enters from the right half of the cell.
pub const ENTER: char = '╶';
/// Right neighbour missing: stroke leaves through the left half of the cell.
pub const EXIT: char = '╴';
pub const FALL_TOP: char = '╮';
pub const FALL_BOTTOM: char = '╰';
pub const RISE_TOP: char = '╭';
pub const RISE_BOTTOM: char = '╯';
