//! Font loading, line metrics, and monochrome glyph rasterization for `bitglyph`.
//!
//! This crate wraps `ttf-parser` for font parsing and line metrics and
//! `fontdue` for glyph rasterization. Everything the export pipeline needs
//! from a font is reached through the [`GlyphSource`] trait; [`ScaledFont`]
//! is the concrete implementation.

pub mod cell;
pub mod data;
pub mod error;
pub mod metrics;
pub mod scaled;
pub mod source;

pub use cell::RasterCell;
pub use data::FontData;
pub use error::FontError;
pub use metrics::LineMetrics;
pub use scaled::ScaledFont;
pub use source::GlyphSource;
