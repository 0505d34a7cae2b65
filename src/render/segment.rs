//! Per-segment glyph choice, independent of grid indexing.
//!
//! A segment joins sample `x` to sample `x + 1` and is drawn entirely in
//! plot column `x`. Rows are bottom-up scaled rows.

use crate::core::constants::{
    ENTER, EXIT, FALL_BOTTOM, FALL_TOP, HORIZONTAL, RISE_BOTTOM, RISE_TOP, VERTICAL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Both samples missing.
    Gap,
    /// Left missing; the line starts at the right sample's row.
    Enter(usize),
    /// Right missing; the line stops at the left sample's row.
    Exit(usize),
    Flat(usize),
    /// Left sample above the right one.
    Falling { from: usize, to: usize },
    Rising { from: usize, to: usize },
}

impl Segment {
    #[must_use]
    pub const fn classify(left: Option<usize>, right: Option<usize>) -> Self {
        match (left, right) {
            (None, None) => Self::Gap,
            (None, Some(r)) => Self::Enter(r),
            (Some(l), None) => Self::Exit(l),
            (Some(l), Some(r)) if l == r => Self::Flat(l),
            (Some(l), Some(r)) if l > r => Self::Falling { from: l, to: r },
            (Some(l), Some(r)) => Self::Rising { from: l, to: r },
        }
    }

    /// `(row, glyph)` pairs to stamp into the segment's column.
    #[must_use]
    pub fn glyphs(self) -> Vec<(usize, char)> {
        match self {
            Self::Gap => Vec::new(),
            Self::Enter(r) => vec![(r, ENTER)],
            Self::Exit(r) => vec![(r, EXIT)],
            Self::Flat(r) => vec![(r, HORIZONTAL)],
            Self::Falling { from, to } => Self::corners(from, FALL_TOP, to, FALL_BOTTOM),
            Self::Rising { from, to } => Self::corners(from, RISE_BOTTOM, to, RISE_TOP),
        }
    }

    fn corners(from: usize, from_glyph: char, to: usize, to_glyph: char) -> Vec<(usize, char)> {
        let (lo, hi) = (from.min(to), from.max(to));
        let mut out = Vec::with_capacity(hi - lo + 1);
        out.push((to, to_glyph));
        out.push((from, from_glyph));
        out.extend((lo + 1..hi).map(|r| (r, VERTICAL)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_table() {
        assert_eq!(Segment::classify(None, None), Segment::Gap);
        assert_eq!(Segment::classify(None, Some(2)), Segment::Enter(2));
        assert_eq!(Segment::classify(Some(1), None), Segment::Exit(1));
        assert_eq!(Segment::classify(Some(3), Some(3)), Segment::Flat(3));
        assert_eq!(
            Segment::classify(Some(4), Some(1)),
            Segment::Falling { from: 4, to: 1 }
        );
        assert_eq!(
            Segment::classify(Some(0), Some(2)),
            Segment::Rising { from: 0, to: 2 }
        );
    }

    #[test]
    fn steep_fall_fills_between_corners() {
        let mut g = Segment::Falling { from: 4, to: 1 }.glyphs();
        g.sort_unstable();
        assert_eq!(g, vec![(1, '╰'), (2, '│'), (3, '│'), (4, '╮')]);
    }

    #[test]
    fn one_step_rise_has_no_connector() {
        let mut g = Segment::Rising { from: 0, to: 1 }.glyphs();
        g.sort_unstable();
        assert_eq!(g, vec![(0, '╯'), (1, '╭')]);
    }

    #[test]
    fn gaps_draw_nothing() {
        assert!(Segment::Gap.glyphs().is_empty());
        assert_eq!(Segment::Enter(5).glyphs(), vec![(5, '╶')]);
        assert_eq!(Segment::Exit(0).glyphs(), vec![(0, '╴')]);
    }
}
