//! Monochrome glyph canvas.

/// A rendered 1-bit glyph cell.
///
/// Row 0 is the topmost scanline and column 0 the leftmost pixel column.
/// Both dimensions are at least 1.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterCell {
    width: u32,
    height: u32,
    /// Row-major ink flags, `height * width` entries.
    ink: Vec<bool>,
}

impl RasterCell {
    /// Create an all-background cell. Zero dimensions are clamped to 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            ink: vec![false; width as usize * height as usize],
        }
    }

    /// Cell width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Cell height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at column `x`, row `y` is ink.
    ///
    /// Out-of-range coordinates read as background.
    #[must_use]
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.ink[self.index(x, y)]
    }

    /// Mark the pixel at column `x`, row `y` as ink. Out-of-range writes are clipped.
    pub fn set_ink(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.ink[i] = true;
        }
    }

    /// Mark every pixel of a row-major coverage bitmap with non-zero
    /// coverage as ink.
    ///
    /// The bitmap's top-left pixel lands at column `left`, row `top`
    /// (either may be negative); pixels outside the cell are clipped.
    pub fn blit_coverage(&mut self, left: i32, top: i32, width: usize, coverage: &[u8]) {
        if width == 0 {
            return;
        }
        for (row, line) in coverage.chunks(width).enumerate() {
            for (col, &alpha) in line.iter().enumerate() {
                if alpha == 0 {
                    continue;
                }
                let x = i64::from(left) + col as i64;
                let y = i64::from(top) + row as i64;
                if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
                    self.set_ink(x, y);
                }
            }
        }
    }

    /// Whether no pixel in the cell is ink.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        !self.ink.contains(&true)
    }

    /// Iterate over the ink flags of column `x`, top to bottom.
    pub fn column(&self, x: u32) -> impl Iterator<Item = bool> + '_ {
        (0..self.height).map(move |y| self.is_ink(x, y))
    }

    const fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl std::fmt::Debug for RasterCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "RasterCell {}x{}", self.width, self.height)?;
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_str(if self.is_ink(x, y) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
