//! Integer coordinates on the unfolded octahedral grid.

/// A vertex position on the square grid. Both axes lie in `[0, width)`.
///
/// The grid is laid out bottom-up: flat index `z * width + x`, so row `z = 0`
/// holds indices `0..width`.
///
/// ```text
///   20 21 22 23 24
///   15 16 17 18 19
///   10 11 12 13 14
/// ^  5  6  7  8  9
/// z  0  1  2  3  4
///     x>
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCoord {
    /// Column.
    pub x: usize,
    /// Row.
    pub z: usize,
}

impl GridCoord {
    /// Construct a coordinate.
    #[must_use]
    pub const fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }

    /// Flat vertex index `z * width + x`.
    #[inline]
    #[must_use]
    pub fn to_index(self, width: usize) -> usize {
        debug_assert!(self.x < width && self.z < width, "{self:?} outside width {width}");
        self.z * width + self.x
    }

    /// Inverse of [`GridCoord::to_index`].
    #[inline]
    #[must_use]
    pub fn from_index(index: usize, width: usize) -> Self {
        Self {
            x: index % width,
            z: index / width,
        }
    }

    /// Reflection across the vertical center line: `(width - 1 - x, z)`.
    #[inline]
    #[must_use]
    pub fn mirror_x(self, width: usize) -> Self {
        Self::new(width - 1 - self.x, self.z)
    }

    /// Reflection across the horizontal center line: `(x, width - 1 - z)`.
    #[inline]
    #[must_use]
    pub fn mirror_z(self, width: usize) -> Self {
        Self::new(self.x, width - 1 - self.z)
    }

    /// `true` if `x` is on the left or right border.
    #[inline]
    #[must_use]
    pub fn is_x_border(self, width: usize) -> bool {
        self.x == 0 || self.x == width - 1
    }

    /// `true` if `z` is on the top or bottom border.
    #[inline]
    #[must_use]
    pub fn is_z_border(self, width: usize) -> bool {
        self.z == 0 || self.z == width - 1
    }

    /// `true` for the four grid corners, which all fold onto the down pole.
    #[inline]
    #[must_use]
    pub fn is_corner(self, width: usize) -> bool {
        self.is_x_border(width) && self.is_z_border(width)
    }

    /// Iterate every coordinate of a `width × width` grid in flat index order.
    pub fn iter(width: usize) -> impl Iterator<Item = GridCoord> {
        (0..width).flat_map(move |z| (0..width).map(move |x| GridCoord::new(x, z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip_covers_grid() {
        let width = 9;
        for (expected, coord) in GridCoord::iter(width).enumerate() {
            assert_eq!(coord.to_index(width), expected);
            assert_eq!(GridCoord::from_index(expected, width), coord);
        }
    }

    #[test]
    fn test_mirrors_match_layout_diagram() {
        let width = 5;
        // Index 1 reflects to 3 along x, and to 21 along z.
        let c = GridCoord::from_index(1, width);
        assert_eq!(c.mirror_x(width).to_index(width), 3);
        assert_eq!(c.mirror_z(width).to_index(width), 21);
        // Middle of the bottom row is its own x mirror.
        let mid = GridCoord::from_index(2, width);
        assert_eq!(mid.mirror_x(width), mid);
    }

    #[test]
    fn test_corners() {
        let width = 5;
        let corners: Vec<usize> = GridCoord::iter(width)
            .filter(|c| c.is_corner(width))
            .map(|c| c.to_index(width))
            .collect();
        assert_eq!(corners, vec![0, 4, 20, 24]);
    }

    #[test]
    fn test_border_flags() {
        let width = 5;
        assert!(GridCoord::new(0, 2).is_x_border(width));
        assert!(!GridCoord::new(0, 2).is_z_border(width));
        assert!(GridCoord::new(3, 4).is_z_border(width));
        assert!(!GridCoord::new(2, 2).is_x_border(width));
    }
}
