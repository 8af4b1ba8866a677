//! Baseline-aligned glyph rendering.

use bitglyph_fonts::{GlyphSource, LineMetrics, RasterCell};
use log::debug;

use crate::error::ExportError;

/// Tallest cell whose columns still fit a packed `u128`.
pub const MAX_GLYPH_HEIGHT: u32 = u128::BITS;

/// Renders characters into fixed-height cells.
///
/// The line height is taken from the source once, so every cell produced
/// by one rasterizer has the same height. The baseline sits `ascent` rows
/// below the top edge.
#[derive(Debug)]
pub struct GlyphRasterizer<'a, S> {
    source: &'a S,
    metrics: LineMetrics,
    height: u32,
}

impl<'a, S: GlyphSource> GlyphRasterizer<'a, S> {
    /// Bind a rasterizer to a loaded glyph source.
    ///
    /// A zero line height is clamped to one row.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnsupportedHeight`] if the line is taller
    /// than [`MAX_GLYPH_HEIGHT`].
    pub fn new(source: &'a S) -> Result<Self, ExportError> {
        let metrics = source.line_metrics();
        let height = metrics.height().max(1);
        if height > MAX_GLYPH_HEIGHT {
            return Err(ExportError::UnsupportedHeight {
                height,
                max: MAX_GLYPH_HEIGHT,
            });
        }
        Ok(Self {
            source,
            metrics,
            height,
        })
    }

    /// Line height shared by every rendered cell.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Line metrics of the bound source.
    #[must_use]
    pub const fn metrics(&self) -> LineMetrics {
        self.metrics
    }

    /// Render `ch` into a cell `ceil(advance)` pixels wide (at least 1).
    ///
    /// Characters the font cannot draw come back as blank cells.
    #[must_use]
    pub fn render(&self, ch: char) -> RasterCell {
        let width = advance_pixels(self.source.advance_width(ch));
        let mut cell = RasterCell::new(width, self.height);
        self.source.rasterize(ch, &mut cell, self.metrics.ascent);
        debug!("rendered U+{:04X} into {width}x{}", u32::from(ch), self.height);
        cell
    }
}

/// Round an advance up to whole pixels, never below 1.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to the u32 range first"
)]
fn advance_pixels(advance: f64) -> u32 {
    if advance.is_nan() {
        return 1;
    }
    (advance.ceil().clamp(1.0, f64::from(u32::MAX)) as u32).max(1)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use super::*;
    use crate::testing::BoxFont;

    #[test]
    fn width_is_ceiled_advance() {
        let font = BoxFont::new(8, 2, 4.2);
        let r = GlyphRasterizer::new(&font).expect("height fits");
        assert_eq!(r.render('A').width(), 5);
        assert_eq!(r.render('W').width(), 9);
    }

    #[test]
    fn zero_advance_still_yields_one_column() {
        let font = BoxFont::new(8, 2, 0.0);
        let r = GlyphRasterizer::new(&font).expect("height fits");
        let cell = r.render('A');
        assert_eq!(cell.width(), 1);
        assert_eq!(advance_pixels(f64::NAN), 1);
        assert_eq!(advance_pixels(-3.0), 1);
    }

    #[test]
    fn every_cell_shares_the_line_height() {
        let font = BoxFont::new(9, 3, 6.0);
        let r = GlyphRasterizer::new(&font).expect("height fits");
        assert_eq!(r.height(), 12);
        for ch in ['A', 'g', ' ', 'W', '\u{1}'] {
            assert_eq!(r.render(ch).height(), 12, "{ch:?}");
        }
    }

    #[test]
    fn box_rests_on_baseline() {
        let font = BoxFont::new(4, 2, 3.0);
        let r = GlyphRasterizer::new(&font).expect("height fits");
        let cell = r.render('A');
        let col: Vec<bool> = cell.column(1).collect();
        assert_eq!(col, vec![false, true, true, true, false, false]);
        let descending: Vec<bool> = r.render('g').column(1).collect();
        assert_eq!(descending, vec![false, true, true, true, true, false]);
    }

    #[test]
    fn control_and_missing_characters_are_blank() {
        let mut font = BoxFont::new(6, 2, 4.0);
        font.missing.push('Q');
        let r = GlyphRasterizer::new(&font).expect("height fits");
        assert!(r.render('\u{7}').is_blank());
        assert!(r.render('Q').is_blank());
        assert!(!r.render('R').is_blank());
    }

    #[test]
    fn zero_line_height_clamps_to_one() {
        let font = BoxFont::new(0, 0, 2.0);
        let r = GlyphRasterizer::new(&font).expect("height fits");
        assert_eq!(r.render('A').height(), 1);
    }

    #[test]
    fn oversized_line_is_rejected() {
        let font = BoxFont::new(100, 40, 2.0);
        let err = GlyphRasterizer::new(&font).expect_err("too tall");
        assert!(
            matches!(err, ExportError::UnsupportedHeight { height: 140, max: 128 }),
            "got {err:?}"
        );
    }
}
