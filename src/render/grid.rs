//! Cell grid: labels, tick column and the plotted line.

use tracing::trace;

use crate::{
    core::constants::{START, TICK},
    render::{labels::Labels, scale::ScaledRange, segment::Segment},
};

/// One display cell. A label occupies a single cell however long it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Glyph(char),
    Label(String),
}

impl Cell {
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// `rows + 1` lines of `len + offset` cells; line 0 is the top.
#[derive(Debug, Clone)]
pub struct Grid {
    lines: Vec<Vec<Cell>>,
    rows: usize,
    offset: usize,
}

impl Grid {
    fn blank(rows: usize, width: usize, offset: usize) -> Self {
        Self {
            lines: vec![vec![Cell::Blank; width]; rows + 1],
            rows,
            offset,
        }
    }

    /// Write `cell` at bottom-up scaled row `row`, grid column `col`.
    #[inline]
    fn put(&mut self, row: usize, col: usize, cell: Cell) {
        let line = self.rows - row;
        self.lines[line][col] = cell;
    }

    /// Lay out labels and ticks, then draw `series` in one pass.
    ///
    /// `offset` must be at least 1 so the tick column exists.
    #[must_use]
    pub fn draw(series: &[f64], range: &ScaledRange, labels: &Labels, offset: usize) -> Self {
        debug_assert!(offset >= 1, "offset leaves no tick column");
        let mut grid = Self::blank(range.rows, series.len() + offset, offset);
        let tick_col = offset - 1;

        for (line, label) in labels.rows.iter().enumerate() {
            let col = offset.saturating_sub(label.chars().count());
            grid.lines[line][col] = Cell::Label(label.clone());
            grid.lines[line][tick_col] = Cell::Glyph(TICK);
        }

        if let Some(row) = series.first().and_then(|&v| range.scaled_row(v)) {
            grid.put(row, tick_col, Cell::Glyph(START));
        }

        for (x, pair) in series.windows(2).enumerate() {
            let segment = Segment::classify(range.scaled_row(pair[0]), range.scaled_row(pair[1]));
            for (row, glyph) in segment.glyphs() {
                grid.put(row, x + offset, Cell::Glyph(glyph));
            }
        }

        trace!(lines = grid.lines.len(), width = series.len() + offset, "grid drawn");
        grid
    }

    #[must_use]
    pub fn lines(&self) -> &[Vec<Cell>] {
        &self.lines
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(series: &[f64]) -> Grid {
        let range = ScaledRange::compute(series, None).unwrap();
        let labels = Labels::format(&range, 2);
        Grid::draw(series, &range, &labels, 3)
    }

    fn glyph_at(g: &Grid, line: usize, col: usize) -> Option<char> {
        match &g.lines()[line][col] {
            Cell::Glyph(c) => Some(*c),
            _ => None,
        }
    }

    #[test]
    fn dimensions_follow_rows_and_length() {
        let g = draw(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(g.lines().len(), 5);
        assert!(g.lines().iter().all(|l| l.len() == 8));
        assert_eq!(g.offset(), 3);
    }

    #[test]
    fn every_line_has_label_and_tick() {
        let g = draw(&[0.0, 6.0, 2.0]);
        for line in g.lines() {
            assert!(matches!(line[0], Cell::Label(_)));
            assert!(matches!(line[2], Cell::Glyph('┤' | '┼')));
        }
    }

    #[test]
    fn start_glyph_marks_first_sample() {
        let g = draw(&[2.0, 0.0, 4.0]);
        assert_eq!(glyph_at(&g, 2, 2), Some('┼'));
        assert_eq!(glyph_at(&g, 4, 2), Some('┤'));
    }

    #[test]
    fn missing_first_sample_leaves_ticks() {
        let g = draw(&[f64::NAN, 1.0, 3.0]);
        assert!(g.lines().iter().all(|l| l[2] == Cell::Glyph('┤')));
        assert_eq!(glyph_at(&g, 2, 3), Some('╶'));
    }

    #[test]
    fn steep_drop_is_a_continuous_stroke() {
        let g = draw(&[4.0, 0.0]);
        let column: Vec<_> = (0..5).map(|l| glyph_at(&g, l, 3)).collect();
        assert_eq!(
            column,
            vec![Some('╮'), Some('│'), Some('│'), Some('│'), Some('╰')]
        );
    }
}
