//! Grid parameter set: subdivision level, planet size, and seed.

/// Highest subdivision level whose flat vertex indices still fit in `u32`.
///
/// At this level `width = 32769` and the grid holds roughly 1.07 billion
/// vertices. Vertex count grows as `4^(level + 1)`, so callers should keep the
/// level well below this bound for interactive use.
pub const MAX_LEVEL: u32 = 14;

/// Side length of the square grid for a subdivision level: `(2 << level) + 1`.
///
/// Always odd and at least 3.
///
/// # Panics
///
/// Panics if `level` exceeds [`MAX_LEVEL`]. Use [`checked_grid_width`] for
/// untrusted levels.
#[inline]
#[must_use]
pub fn grid_width(level: u32) -> usize {
    match checked_grid_width(level) {
        Some(width) => width,
        None => panic!("level {level} exceeds MAX_LEVEL {MAX_LEVEL}"),
    }
}

/// [`grid_width`], or `None` if `level` exceeds [`MAX_LEVEL`].
#[inline]
#[must_use]
pub const fn checked_grid_width(level: u32) -> Option<usize> {
    if level > MAX_LEVEL {
        return None;
    }
    Some((2_usize << level) + 1)
}

/// Inputs to one planet rebuild.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    /// Subdivision level. Also the number of noise octaves.
    pub level: u32,
    /// Base radius of the planet.
    pub size: f64,
    /// Noise seed.
    pub seed: i64,
}

impl GridParams {
    /// Create a parameter set, clamping a negative `level` to 0.
    ///
    /// Levels above [`MAX_LEVEL`] are kept so the rebuild can report them;
    /// check [`GridParams::is_supported`] before asking for sizes.
    #[must_use]
    pub fn new(level: i32, size: f64, seed: i64) -> Self {
        Self {
            level: level.max(0) as u32,
            size,
            seed,
        }
    }

    /// Whether `level` is within [`MAX_LEVEL`].
    #[inline]
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.level <= MAX_LEVEL
    }

    /// Grid side length, see [`grid_width`].
    ///
    /// # Panics
    ///
    /// Panics if the level exceeds [`MAX_LEVEL`], as do the count methods
    /// below.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        grid_width(self.level)
    }

    /// Number of logical grid vertices (`width²`).
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        let w = self.width();
        w * w
    }

    /// Number of unit cells (`(width - 1)²`).
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let c = self.width() - 1;
        c * c
    }

    /// Length of the triangle index buffer: two triangles of three indices per cell.
    #[inline]
    #[must_use]
    pub fn index_count(&self) -> usize {
        6 * self.cell_count()
    }
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            level: 0,
            size: 1.0,
            seed: 42,
        }
    }
}
