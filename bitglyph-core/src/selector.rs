//! Code point selection expressions.
//!
//! Two grammars are accepted:
//! - an inclusive interval `LO-HI`, used only when the expression holds
//!   exactly one `-` and no `,`;
//! - otherwise a comma-separated list of literals, where blank entries
//!   are skipped.
//!
//! Literals are integers with an optional `0x`, `0o` or `0b` prefix
//! (case-insensitive) or plain decimal, with optional `_` between digits.

use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::RangeError;

const SURROGATES: RangeInclusive<u32> = 0xD800..=0xDFFF;

/// An ordered selection of code points.
///
/// Lists keep their order and duplicates; duplicates simply produce the
/// same glyph twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodepointRange {
    /// Every scalar value from `lo` to `hi`, ascending.
    Interval(RangeInclusive<char>),
    /// Explicit code points in the given order.
    List(Vec<char>),
}

impl CodepointRange {
    /// Parse a selection expression.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if a token is not an integer, an interval
    /// is reversed or crosses the surrogate block, a value is not a
    /// Unicode scalar value, or nothing is selected.
    pub fn parse(spec: &str) -> Result<Self, RangeError> {
        if spec.matches('-').count() == 1 && !spec.contains(',') {
            let (lo, hi) = spec.split_once('-').ok_or(RangeError::Empty)?;
            let (lo, hi) = (parse_literal(lo)?, parse_literal(hi)?);
            if hi < lo {
                return Err(RangeError::Reversed { lo, hi });
            }
            if lo <= *SURROGATES.end() && hi >= *SURROGATES.start() {
                return Err(RangeError::SpansSurrogates { lo, hi });
            }
            return Ok(Self::Interval(to_char(lo)?..=to_char(hi)?));
        }

        let list = spec
            .split(',')
            .filter(|tok| !tok.trim().is_empty())
            .map(|tok| parse_literal(tok).and_then(to_char))
            .collect::<Result<Vec<_>, _>>()?;
        if list.is_empty() {
            return Err(RangeError::Empty);
        }
        Ok(Self::List(list))
    }

    /// Number of code points the selection yields.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Interval(r) => (u32::from(*r.end()) - u32::from(*r.start())) as usize + 1,
            Self::List(v) => v.len(),
        }
    }

    /// Whether the selection is empty. Parsed selections never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the selected characters in selection order.
    ///
    /// Each call starts a fresh pass.
    #[must_use]
    pub fn iter(&self) -> Codepoints<'_> {
        match self {
            Self::Interval(r) => Codepoints::Interval(r.clone()),
            Self::List(v) => Codepoints::List(v.iter()),
        }
    }
}

impl FromStr for CodepointRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a CodepointRange {
    type Item = char;
    type IntoIter = Codepoints<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`CodepointRange`].
#[derive(Debug, Clone)]
pub enum Codepoints<'a> {
    Interval(RangeInclusive<char>),
    List(std::slice::Iter<'a, char>),
}

impl Iterator for Codepoints<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self {
            Self::Interval(r) => r.next(),
            Self::List(it) => it.next().copied(),
        }
    }
}

fn to_char(v: u32) -> Result<char, RangeError> {
    char::from_u32(v).ok_or(RangeError::NotScalar(v))
}

/// Parse one integer literal.
fn parse_literal(token: &str) -> Result<u32, RangeError> {
    let invalid = || RangeError::InvalidInteger(token.trim().to_owned());
    let trimmed = token.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let prefix = unsigned.get(..2).map(str::to_ascii_lowercase);
    let (radix, digits) = match prefix.as_deref() {
        Some("0x") => (16, &unsigned[2..]),
        Some("0o") => (8, &unsigned[2..]),
        Some("0b") => (2, &unsigned[2..]),
        _ => (10, unsigned),
    };
    // After a prefix a single leading separator is allowed: `0x_41`.
    let digits = if radix == 10 {
        digits
    } else {
        digits.strip_prefix('_').unwrap_or(digits)
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.chars().all(|c| c == '_' || c.is_digit(radix))
    {
        return Err(invalid());
    }
    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    // Decimal literals cannot carry leading zeros, except for zero itself.
    if radix == 10 && cleaned.starts_with('0') && cleaned.chars().any(|c| c != '0') {
        return Err(invalid());
    }
    u32::from_str_radix(&cleaned, radix).map_err(|_| invalid())
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use super::*;

    fn collect(spec: &str) -> Vec<u32> {
        CodepointRange::parse(spec)
            .expect("valid spec")
            .iter()
            .map(u32::from)
            .collect()
    }

    #[test]
    fn interval_is_inclusive_and_ascending() {
        for (lo, hi) in [(0x21, 0x7E), (0x41, 0x41), (0, 0x20), (0xE000, 0xE0FF)] {
            let range = CodepointRange::parse(&format!("{lo:#x}-{hi:#x}")).expect("valid");
            let cps: Vec<u32> = range.iter().map(u32::from).collect();
            assert_eq!(cps.len() as u32, hi - lo + 1);
            assert_eq!(range.len(), cps.len());
            assert!(cps.windows(2).all(|w| w[0] + 1 == w[1]));
            assert_eq!(cps.first(), Some(&lo));
            assert_eq!(cps.last(), Some(&hi));
        }
    }

    #[test]
    fn default_range_is_printable_ascii() {
        let cps = collect("0x21-0x7E");
        assert_eq!(cps.len(), 94);
        assert_eq!(cps[0], u32::from('!'));
        assert_eq!(cps[93], u32::from('~'));
    }

    #[test]
    fn list_keeps_order_and_duplicates() {
        assert_eq!(collect("0x21,0x20"), vec![0x21, 0x20]);
        assert_eq!(collect("65, 65 ,0x41"), vec![65, 65, 65]);
    }

    #[test]
    fn list_skips_blank_entries() {
        assert_eq!(collect("0x20,,0x21,"), vec![0x20, 0x21]);
        assert_eq!(collect("0x41"), vec![0x41]);
    }

    #[test]
    fn literals_accept_common_bases() {
        assert_eq!(collect("0x41,0X42,0o103,0b1000100,69,+70,0x_4_7"), (0x41..=0x47).collect::<Vec<_>>());
        assert_eq!(collect(" 65 - 0x43 "), vec![65, 66, 67]);
        assert_eq!(collect("0,00,0x007,0o010"), vec![0, 0, 7, 8]);
    }

    #[test]
    fn hyphen_with_comma_is_a_list_token() {
        let err = CodepointRange::parse("0x21-0x7E,0x80").expect_err("mixed grammar");
        assert_eq!(err, RangeError::InvalidInteger("0x21-0x7E".to_owned()));
    }

    #[test]
    fn multiple_hyphens_are_not_an_interval() {
        let err = CodepointRange::parse("0x21-0x30-0x40").expect_err("two hyphens");
        assert!(matches!(err, RangeError::InvalidInteger(_)), "got {err:?}");
    }

    #[test]
    fn reversed_interval_is_rejected() {
        let err = CodepointRange::parse("0x7E-0x21").expect_err("reversed");
        assert_eq!(err, RangeError::Reversed { lo: 0x7E, hi: 0x21 });
    }

    #[test]
    fn bad_tokens_are_rejected() {
        for spec in ["abc", "0x", "0xZZ", "1__0", "_1", "1_", "-5", "0x41-", "4.5", "0b102", "010", "0_7"] {
            let err = CodepointRange::parse(spec).expect_err(spec);
            assert!(matches!(err, RangeError::InvalidInteger(_)), "{spec}: {err:?}");
        }
    }

    #[test]
    fn non_scalar_values_are_rejected() {
        assert_eq!(
            CodepointRange::parse("0xD800").expect_err("surrogate"),
            RangeError::NotScalar(0xD800)
        );
        assert_eq!(
            CodepointRange::parse("0x110000").expect_err("too large"),
            RangeError::NotScalar(0x11_0000)
        );
        assert_eq!(
            CodepointRange::parse("0xD000-0xE000").expect_err("spans surrogates"),
            RangeError::SpansSurrogates { lo: 0xD000, hi: 0xE000 }
        );
    }

    #[test]
    fn empty_selection_is_rejected() {
        assert_eq!(CodepointRange::parse("").expect_err("empty"), RangeError::Empty);
        assert_eq!(CodepointRange::parse(" , ,").expect_err("blank"), RangeError::Empty);
    }

    #[test]
    fn iteration_restarts() {
        let range: CodepointRange = "0x41-0x43".parse().expect("valid");
        let first: String = range.iter().collect();
        let second: String = (&range).into_iter().collect();
        assert_eq!(first, "ABC");
        assert_eq!(first, second);
    }
}
