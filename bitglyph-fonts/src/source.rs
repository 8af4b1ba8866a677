//! The glyph source trait.

use std::path::Path;

use crate::cell::RasterCell;
use crate::error::FontError;
use crate::metrics::LineMetrics;

/// A font bound to one pixel size, able to measure and rasterize characters.
///
/// This is the whole surface the export pipeline needs from a font
/// renderer, so any backend implementing it can be swapped in. A source
/// is read-only once loaded.
pub trait GlyphSource {
    /// Load the font at `path` for rendering at `pixel_size` pixels per em.
    ///
    /// # Errors
    ///
    /// Returns a [`FontError`] if the font cannot be read or parsed, or
    /// if the size is unusable.
    fn load(path: &Path, pixel_size: u32) -> Result<Self, FontError>
    where
        Self: Sized;

    /// Global line metrics, identical for every character.
    fn line_metrics(&self) -> LineMetrics;

    /// Advance width of `ch` in (fractional) pixels.
    fn advance_width(&self, ch: char) -> f64;

    /// Whether the font maps `ch` to a glyph.
    fn has_glyph(&self, ch: char) -> bool;

    /// Paint the ink of `ch` into `cell` with the baseline at row
    /// boundary `baseline` and the glyph origin at column 0.
    ///
    /// Characters without a glyph or without an outline leave the cell
    /// untouched.
    fn rasterize(&self, ch: char, cell: &mut RasterCell, baseline: u32);
}
