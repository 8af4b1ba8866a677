//! `setGlyph` record emission.
//!
//! Each glyph becomes one line of kernel source:
//!
//! ```text
//! \t<family>.setGlyph(0x41, {{0x0, 0x1f8, ...}, 8, 15, 0, 0}); // Glyph 0x41 - 'A'
//! ```
//!
//! Field order, the `0x` hex literals and the two trailing zeros are read
//! by the kernel build and must not change.

use crate::pack::{GlyphTable, PackedGlyph};

/// Per-glyph offset fields of the kernel's glyph struct. Never computed,
/// always emitted as zeros.
const RESERVED_OFFSETS: [i8; 2] = [0, 0];

/// Format one glyph as a `setGlyph` record (without a line terminator).
#[must_use]
pub fn format_record(family: &str, glyph: &PackedGlyph) -> String {
    let cp = u32::from(glyph.codepoint);
    let columns = glyph
        .columns
        .iter()
        .map(|col| format!("{col:#x}"))
        .collect::<Vec<_>>()
        .join(", ");
    let [off_x, off_y] = RESERVED_OFFSETS;
    format!(
        "\t{family}.setGlyph({cp:#x}, {{{{{columns}}}, {}, {}, {off_x}, {off_y}}}); // Glyph {cp:#x} - '{}'",
        glyph.width,
        glyph.height,
        annotation(glyph.codepoint),
    )
}

/// Serialize a whole table, one record per line, joined by `\n`.
///
/// No header and no trailing newline: `N` glyphs give exactly `N` lines.
#[must_use]
pub fn serialize(family: &str, table: &GlyphTable) -> String {
    table
        .iter()
        .map(|glyph| format_record(family, glyph))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The character as shown in the trailing comment.
///
/// Characters that would break the line or are invisible control codes
/// are written as `\u{..}` escapes.
fn annotation(ch: char) -> String {
    if ch.is_control() || matches!(ch, '\u{2028}' | '\u{2029}') {
        ch.escape_unicode().to_string()
    } else {
        ch.to_string()
    }
}
