//! Error types for an export run.
//!
//! Every error here is terminal: the run stops and no output file is
//! written (or, for [`ExportError::OutputWrite`], the write failed).

use std::io;
use std::path::PathBuf;

use bitglyph_fonts::FontError;
use thiserror::Error;

/// Why a code point selection expression was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A token is not an integer literal.
    #[error("{0:?} is not an integer literal")]
    InvalidInteger(String),
    /// The interval ends before it starts.
    #[error("interval end {hi:#x} is below its start {lo:#x}")]
    Reversed { lo: u32, hi: u32 },
    /// The value cannot be represented as a single character.
    #[error("{0:#x} is not a Unicode scalar value")]
    NotScalar(u32),
    /// The interval includes UTF-16 surrogate code points.
    #[error("interval {lo:#x}-{hi:#x} includes surrogate code points")]
    SpansSurrogates { lo: u32, hi: u32 },
    /// Nothing was selected.
    #[error("selects no code points")]
    Empty,
}

/// Errors that abort an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The font could not be loaded.
    #[error("failed to load font: {0}")]
    FontLoad(#[from] FontError),
    /// The code point selection is malformed.
    #[error("malformed range {spec:?}: {source}")]
    MalformedRange {
        spec: String,
        #[source]
        source: RangeError,
    },
    /// The font's line height does not fit in a packed column.
    #[error("line height {height}px exceeds the {max}px column limit")]
    UnsupportedHeight { height: u32, max: u32 },
    /// The glyph table could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
