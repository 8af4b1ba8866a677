//! End-to-end export: font + selection in, glyph table file out.

use std::fs;
use std::path::{Path, PathBuf};

use bitglyph_fonts::{GlyphSource, ScaledFont};
use log::{debug, info, warn};

use crate::emit::serialize;
use crate::error::ExportError;
use crate::pack::{GlyphTable, PackedGlyph};
use crate::rasterizer::GlyphRasterizer;
use crate::selector::CodepointRange;

/// Default em size in pixels.
pub const DEFAULT_PIXEL_SIZE: u32 = 12;
/// Default selection: printable ASCII without the space.
pub const DEFAULT_RANGE: &str = "0x21-0x7E";

// Limits of the kernel's glyph struct. Exceeding them is reported, not
// fatal: the table is still written.
const KERNEL_MAX_COLUMNS: u32 = 16;
const KERNEL_COLUMN_BITS: u32 = u32::BITS;
const KERNEL_MAX_CHARS: u32 = 128;

/// Settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Font file to rasterize.
    pub font: PathBuf,
    /// Em size in pixels.
    pub pixel_size: u32,
    /// Code point selection expression.
    pub range: String,
    /// Identifier used in the records; derived from the font name if unset.
    pub family: Option<String>,
    /// Destination file; derived from the font name and size if unset.
    pub output: Option<PathBuf>,
}

impl ExportOptions {
    /// Options for `font` with every other setting at its default.
    #[must_use]
    pub fn new(font: impl Into<PathBuf>) -> Self {
        Self {
            font: font.into(),
            pixel_size: DEFAULT_PIXEL_SIZE,
            range: DEFAULT_RANGE.to_owned(),
            family: None,
            output: None,
        }
    }

    /// The family identifier used in emitted records.
    #[must_use]
    pub fn family_name(&self) -> String {
        self.family
            .clone()
            .unwrap_or_else(|| sanitize_family(&self.font))
    }

    /// Where the table will be written.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.font, self.pixel_size))
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub glyphs: usize,
}

/// The font file's base name with every non-alphanumeric character
/// replaced by `_`, so it can serve as an identifier.
#[must_use]
pub fn sanitize_family(font: &Path) -> String {
    font.file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// `<sanitized-font-name>_glyphs_<size>px.txt`, relative to the working
/// directory.
#[must_use]
pub fn default_output_path(font: &Path, pixel_size: u32) -> PathBuf {
    PathBuf::from(format!(
        "{}_glyphs_{pixel_size}px.txt",
        sanitize_family(font)
    ))
}

/// Render and pack every selected code point, in selection order.
///
/// Code points the font cannot draw become all-zero glyphs.
///
/// # Errors
///
/// Returns [`ExportError::UnsupportedHeight`] if the font's line height
/// does not fit a packed column.
pub fn build_table<S: GlyphSource>(
    source: &S,
    range: &CodepointRange,
) -> Result<GlyphTable, ExportError> {
    let rasterizer = GlyphRasterizer::new(source)?;
    let metrics = rasterizer.metrics();
    debug!(
        "line metrics: ascent {}, descent {}, height {}",
        metrics.ascent,
        metrics.descent,
        rasterizer.height()
    );
    if rasterizer.height() > KERNEL_COLUMN_BITS {
        warn!(
            "line height {}px exceeds the kernel's {KERNEL_COLUMN_BITS}-bit columns",
            rasterizer.height()
        );
    }

    let mut table = GlyphTable::new();
    for ch in range {
        let cp = u32::from(ch);
        if !source.has_glyph(ch) {
            warn!("U+{cp:04X} has no glyph in this font; exporting it blank");
        }
        let glyph = PackedGlyph::from_cell(ch, &rasterizer.render(ch));
        if glyph.width > KERNEL_MAX_COLUMNS {
            warn!(
                "U+{cp:04X} is {} columns wide; the kernel keeps {KERNEL_MAX_COLUMNS}",
                glyph.width
            );
        }
        if cp >= KERNEL_MAX_CHARS {
            warn!("U+{cp:04X} is outside the kernel's {KERNEL_MAX_CHARS}-character table");
        }
        table.push(glyph);
    }
    Ok(table)
}

/// Run an export with the given glyph source backend.
///
/// Steps: resolve the family name, load the font, parse the selection,
/// build the table in memory, then write it in one go.
///
/// # Errors
///
/// Returns [`ExportError::FontLoad`] or [`ExportError::MalformedRange`]
/// before anything is rendered, [`ExportError::UnsupportedHeight`] for
/// overly tall fonts, and [`ExportError::OutputWrite`] if the finished
/// table cannot be written.
pub fn run<S: GlyphSource>(opts: &ExportOptions) -> Result<ExportSummary, ExportError> {
    let family = opts.family_name();
    let source = S::load(&opts.font, opts.pixel_size)?;
    info!(
        "loaded {} at {}px as {family}",
        opts.font.display(),
        opts.pixel_size
    );

    let range =
        CodepointRange::parse(&opts.range).map_err(|source| ExportError::MalformedRange {
            spec: opts.range.clone(),
            source,
        })?;
    info!("rendering {} code points", range.len());

    let table = build_table(&source, &range)?;
    let text = serialize(&family, &table);

    let output = opts.output_path();
    fs::write(&output, text).map_err(|source| ExportError::OutputWrite {
        path: output.clone(),
        source,
    })?;
    info!("wrote {} glyphs to {}", table.len(), output.display());

    Ok(ExportSummary {
        output,
        glyphs: table.len(),
    })
}

/// Run an export with the `ttf-parser` backend.
///
/// # Errors
///
/// See [`run`].
pub fn export(opts: &ExportOptions) -> Result<ExportSummary, ExportError> {
    run::<ScaledFont>(opts)
}
