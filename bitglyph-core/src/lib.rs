//! Glyph rasterization and column encoding for kernel bitmap fonts.
//!
//! The pipeline selects code points ([`selector`]), renders each one into
//! a baseline-aligned 1-bit cell ([`rasterizer`]), packs every pixel
//! column into an integer ([`pack`]), and writes the table as
//! `setGlyph(...)` records ([`emit`]). [`pipeline`] ties the steps together.

pub mod emit;
pub mod error;
pub mod pack;
pub mod pipeline;
pub mod rasterizer;
pub mod selector;

#[cfg(test)]
mod testing;

pub use emit::{format_record, serialize};
pub use error::{ExportError, RangeError};
pub use pack::{GlyphTable, PackedGlyph};
pub use pipeline::{ExportOptions, ExportSummary, build_table, export, run};
pub use rasterizer::GlyphRasterizer;
pub use selector::CodepointRange;
