//! Synthetic glyph source for unit tests.

use std::fs;
use std::path::Path;

use bitglyph_fonts::{FontError, GlyphSource, LineMetrics, RasterCell};

/// A font whose glyphs are solid boxes.
///
/// Every mapped, non-whitespace character is a box spanning columns
/// `1..width - 1` and rows from `box_top` down to the baseline; `g`, `p`
/// and `y` also fill the first descender row.
#[derive(Debug, Clone)]
pub struct BoxFont {
    pub metrics: LineMetrics,
    pub advance: f64,
    pub box_top: u32,
    pub missing: Vec<char>,
}

impl BoxFont {
    pub fn new(ascent: u32, descent: u32, advance: f64) -> Self {
        Self {
            metrics: LineMetrics::new(ascent, descent),
            advance,
            box_top: 1,
            missing: Vec::new(),
        }
    }
}

impl GlyphSource for BoxFont {
    fn load(path: &Path, pixel_size: u32) -> Result<Self, FontError> {
        fs::metadata(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if pixel_size == 0 {
            return Err(FontError::InvalidSize(pixel_size));
        }
        Ok(Self::new(pixel_size, pixel_size / 4, f64::from(pixel_size) * 0.6))
    }

    fn line_metrics(&self) -> LineMetrics {
        self.metrics
    }

    fn advance_width(&self, ch: char) -> f64 {
        if ch == 'W' { self.advance * 2.0 } else { self.advance }
    }

    fn has_glyph(&self, ch: char) -> bool {
        !self.missing.contains(&ch)
    }

    fn rasterize(&self, ch: char, cell: &mut RasterCell, baseline: u32) {
        if !self.has_glyph(ch) || ch.is_whitespace() || ch.is_control() {
            return;
        }
        let bottom = if matches!(ch, 'g' | 'p' | 'y') {
            baseline + 1
        } else {
            baseline
        };
        for y in self.box_top..bottom {
            for x in 1..cell.width().saturating_sub(1) {
                cell.set_ink(x, y);
            }
        }
    }
}
