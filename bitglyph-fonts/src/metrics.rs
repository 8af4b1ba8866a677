//! Line metric types.

/// Global line metrics of a font at one pixel size.
///
/// Both values are whole pixels measured from the baseline: `ascent`
/// upwards, `descent` downwards (positive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineMetrics {
    /// Rows above the baseline.
    pub ascent: u32,
    /// Rows below the baseline.
    pub descent: u32,
}

impl LineMetrics {
    /// Create line metrics from ascent and descent.
    #[must_use]
    pub const fn new(ascent: u32, descent: u32) -> Self {
        Self { ascent, descent }
    }

    /// Total line height, `ascent + descent`.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.ascent + self.descent
    }
}
