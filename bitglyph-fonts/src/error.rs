//! Font loading and parsing errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a font.
///
/// All of them are fatal for an export run: there is no fallback font.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read.
    #[error("cannot read font file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The font data could not be parsed.
    #[error("font parse error: {0}")]
    Parse(String),
    /// The requested pixel size cannot be rendered.
    #[error("invalid pixel size {0}: must be at least 1")]
    InvalidSize(u32),
}
