//! Column packing.
//!
//! Each pixel column of a cell becomes one integer. Rows are read top to
//! bottom and the topmost row lands in the most significant of the
//! `height` bits: row `y` is bit `height - 1 - y`. The kernel's text
//! renderer decodes columns this way, so the order is fixed.

use bitglyph_fonts::RasterCell;

/// Pack every column of `cell`, left to right.
///
/// An all-background column packs to 0.
#[must_use]
pub fn pack_columns(cell: &RasterCell) -> Vec<u128> {
    (0..cell.width())
        .map(|x| {
            cell.column(x)
                .fold(0u128, |bits, ink| (bits << 1) | u128::from(ink))
        })
        .collect()
}

/// Whether row `y` of a packed column of `height` rows is ink.
#[must_use]
pub const fn column_bit(column: u128, y: u32, height: u32) -> bool {
    y < height && (column >> (height - 1 - y)) & 1 == 1
}

/// One glyph of the exported table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedGlyph {
    pub codepoint: char,
    /// One packed integer per pixel column, left to right.
    pub columns: Vec<u128>,
    pub width: u32,
    pub height: u32,
}

impl PackedGlyph {
    /// Pack a rendered cell for `codepoint`.
    #[must_use]
    pub fn from_cell(codepoint: char, cell: &RasterCell) -> Self {
        Self {
            codepoint,
            columns: pack_columns(cell),
            width: cell.width(),
            height: cell.height(),
        }
    }

    /// Whether the pixel at column `x`, row `y` is ink.
    #[must_use]
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        self.columns
            .get(x as usize)
            .is_some_and(|&col| column_bit(col, y, self.height))
    }

    /// Whether every column is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(|&c| c == 0)
    }
}

/// Packed glyphs in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: Vec<PackedGlyph>,
}

impl GlyphTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { glyphs: Vec::new() }
    }

    /// Append a glyph.
    pub fn push(&mut self, glyph: PackedGlyph) {
        self.glyphs.push(glyph);
    }

    /// Number of glyphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the table holds no glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate over the glyphs in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PackedGlyph> {
        self.glyphs.iter()
    }
}

impl<'a> IntoIterator for &'a GlyphTable {
    type Item = &'a PackedGlyph;
    type IntoIter = std::slice::Iter<'a, PackedGlyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
