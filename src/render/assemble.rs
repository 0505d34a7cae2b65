//! Grid → text.

use std::fmt::Write;

use crate::render::grid::{Cell, Grid};

/// Join grid lines with `\n`, dropping trailing blank cells, then append
/// `caption` centred under the plot area when it is non-empty.
///
/// `label_width` is the common label width and `plot_len` the number of
/// plotted samples.
#[must_use]
pub fn assemble(grid: &Grid, caption: &str, label_width: usize, plot_len: usize) -> String {
    let mut out = String::new();

    for (i, line) in grid.lines().iter().enumerate() {
        if i != 0 {
            out.push('\n');
        }
        let last = line.iter().rposition(|c| !c.is_blank()).unwrap_or(0);
        for cell in &line[..=last] {
            match cell {
                Cell::Blank => out.push(' '),
                Cell::Glyph(c) => out.push(*c),
                Cell::Label(s) => out.push_str(s),
            }
        }
    }

    if !caption.is_empty() {
        let caption_len = caption.chars().count();
        let centring = if caption_len < plot_len {
            (plot_len - caption_len) / 2
        } else {
            0
        };
        let pad = grid.offset() + label_width + centring;
        let _ = write!(out, "\n{:pad$}{caption}", "");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{labels::Labels, scale::ScaledRange};

    fn grid(series: &[f64]) -> (Grid, usize) {
        let range = ScaledRange::compute(series, None).unwrap();
        let labels = Labels::format(&range, 2);
        (Grid::draw(series, &range, &labels, 3), labels.width)
    }

    #[test]
    fn trailing_blanks_are_dropped() {
        let (g, w) = grid(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let text = assemble(&g, "", w, 5);
        assert!(text.lines().all(|l| !l.ends_with(' ')));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn short_caption_is_centred() {
        let series = [0.0; 12];
        let (g, w) = grid(&series);
        let text = assemble(&g, "abcd", w, series.len());
        let last = text.lines().last().unwrap();
        // offset 3 + label width 4 + (12 - 4) / 2
        assert_eq!(last, format!("{}abcd", " ".repeat(3 + 4 + 4)));
    }

    #[test]
    fn long_caption_is_only_aligned() {
        let (g, w) = grid(&[0.0, 1.0]);
        let text = assemble(&g, "a long caption", w, 2);
        assert_eq!(text.lines().last(), Some("       a long caption"));
    }
}
