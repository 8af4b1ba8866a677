//! `fontdue` backed [`GlyphSource`].

use std::path::Path;

use log::debug;

use crate::cell::RasterCell;
use crate::data::FontData;
use crate::error::FontError;
use crate::metrics::LineMetrics;
use crate::source::GlyphSource;

/// A parsed font bound to a pixel size.
///
/// Line metrics come from the font's horizontal header, rounded outwards
/// to whole pixels once at construction, so every glyph rendered from
/// one `ScaledFont` shares the same line height. Advances and glyph
/// bitmaps come from `fontdue`; any pixel with non-zero coverage is ink.
pub struct ScaledFont {
    data: FontData,
    raster: fontdue::Font,
    /// Em size in pixels, as `fontdue` takes it.
    px: f32,
    metrics: LineMetrics,
}

impl ScaledFont {
    /// Bind parsed font data to a pixel size.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::InvalidSize`] if `pixel_size` is 0 and
    /// [`FontError::Parse`] if `fontdue` rejects the font.
    #[expect(
        clippy::cast_precision_loss,
        reason = "pixel sizes are far below f32's exact integer range"
    )]
    pub fn new(data: FontData, pixel_size: u32) -> Result<Self, FontError> {
        if pixel_size == 0 {
            return Err(FontError::InvalidSize(pixel_size));
        }
        let px = pixel_size as f32;
        let settings = fontdue::FontSettings {
            scale: px,
            ..fontdue::FontSettings::default()
        };
        let raster = fontdue::Font::from_bytes(data.bytes(), settings)
            .map_err(|e| FontError::Parse(e.to_owned()))?;

        let scale = data.scale(f64::from(pixel_size));
        let metrics = LineMetrics::new(
            ceil_pixels(f64::from(data.ascender()) * scale),
            ceil_pixels(-f64::from(data.descender()) * scale),
        );
        debug!(
            "scaled font: {pixel_size}px, upem {}, ascent {}, descent {}",
            data.units_per_em(),
            metrics.ascent,
            metrics.descent
        );
        Ok(Self {
            data,
            raster,
            px,
            metrics,
        })
    }
}

/// Round a non-negative pixel extent up to a whole pixel count.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to the u32 range first"
)]
fn ceil_pixels(v: f64) -> u32 {
    v.ceil().clamp(0.0, f64::from(u32::MAX)) as u32
}

impl GlyphSource for ScaledFont {
    fn load(path: &Path, pixel_size: u32) -> Result<Self, FontError> {
        Self::new(FontData::from_file(path)?, pixel_size)
    }

    fn line_metrics(&self) -> LineMetrics {
        self.metrics
    }

    fn advance_width(&self, ch: char) -> f64 {
        // Unmapped characters resolve to `.notdef` and advance like it.
        f64::from(self.raster.metrics(ch, self.px).advance_width)
    }

    fn has_glyph(&self, ch: char) -> bool {
        self.data.glyph_id(ch).is_some()
    }

    fn rasterize(&self, ch: char, cell: &mut RasterCell, baseline: u32) {
        if !self.has_glyph(ch) {
            return;
        }
        let (m, coverage) = self.raster.rasterize(ch, self.px);
        let (Ok(height), Ok(baseline)) = (i32::try_from(m.height), i32::try_from(baseline)) else {
            return;
        };
        // `ymin` is the bitmap's bottom edge relative to the baseline, Y-up.
        let top = baseline - (m.ymin + height);
        cell.blit_coverage(m.xmin, top, m.width, &coverage);
    }
}

impl std::fmt::Debug for ScaledFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaledFont")
            .field("data", &self.data)
            .field("px", &self.px)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}
