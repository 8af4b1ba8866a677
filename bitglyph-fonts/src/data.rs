//! Font data wrapper around `ttf-parser`.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::FontError;

/// Parsed font data.
///
/// Stores owned font bytes and cached global metrics. Creates a
/// `ttf_parser::Face` on demand for individual queries; parsing only
/// validates headers and builds the table directory, so it is cheap.
#[derive(Clone)]
pub struct FontData {
    bytes: Arc<[u8]>,
    /// Font units per em (design coordinate space).
    units_per_em: u16,
    /// Global ascender in design units (positive).
    ascender: i16,
    /// Global descender in design units (negative).
    descender: i16,
}

impl FontData {
    /// Parse font data from an owned byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the data is not a valid
    /// OpenType/TrueType font.
    pub fn from_bytes(bytes: Arc<[u8]>) -> Result<Self, FontError> {
        let face =
            ttf_parser::Face::parse(&bytes, 0).map_err(|e| FontError::Parse(e.to_string()))?;
        if face.units_per_em() == 0 {
            return Err(FontError::Parse("units per em is zero".to_owned()));
        }
        Ok(Self {
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
            bytes,
        })
    }

    /// Read and parse a font file.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Io`] if the file cannot be read and
    /// [`FontError::Parse`] if its contents are not a valid font.
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        let bytes = fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(Arc::from(bytes.into_boxed_slice()))
    }

    /// Create a temporary `Face` reference for queries.
    fn face(&self) -> ttf_parser::Face<'_> {
        #[expect(clippy::expect_used, reason = "bytes were validated at construction")]
        ttf_parser::Face::parse(&self.bytes, 0).expect("font bytes validated at construction")
    }

    /// Font units per em (design coordinate space).
    #[must_use]
    pub const fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Global ascender in design units.
    #[must_use]
    pub const fn ascender(&self) -> i16 {
        self.ascender
    }

    /// Global descender in design units (usually negative).
    #[must_use]
    pub const fn descender(&self) -> i16 {
        self.descender
    }

    /// Scale factor from design units to pixels at the given em size.
    #[must_use]
    pub fn scale(&self, pixel_size: f64) -> f64 {
        pixel_size / f64::from(self.units_per_em)
    }

    /// Map a character to its glyph ID.
    ///
    /// Returns `None` if the character is not in the cmap or maps to
    /// `.notdef` (glyph 0).
    #[must_use]
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face()
            .glyph_index(ch)
            .map(|g| g.0)
            .filter(|&gid| gid != 0)
    }

    /// The raw font file bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("units_per_em", &self.units_per_em)
            .field("ascender", &self.ascender)
            .field("descender", &self.descender)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}
