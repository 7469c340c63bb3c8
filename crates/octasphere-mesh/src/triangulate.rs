//! Index buffer generation for the octahedral grid.
//!
//! Each unit cell is split into two triangles. The split diagonal alternates by
//! quadrant so that every diagonal runs parallel to the fold line of its
//! quadrant, which keeps creases aligned once the grid is folded onto the
//! octahedron.

/// Which way a cell's shared diagonal runs in grid space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellDiagonal {
    /// From `(i, j)` to `(i + 1, j + 1)`:
    /// ```text
    /// +-+
    /// |/|
    /// +-+
    /// ```
    Rising,
    /// From `(i + 1, j)` to `(i, j + 1)`:
    /// ```text
    /// +-+
    /// |\|
    /// +-+
    /// ```
    Falling,
}

/// Diagonal choice for cell `(i, j)` of a `width × width` grid.
///
/// Cells in exactly one of the lower halves (`i < width / 2` xor
/// `j < width / 2`) rise; the other two quadrants fall.
#[inline]
#[must_use]
pub fn cell_diagonal(i: usize, j: usize, width: usize) -> CellDiagonal {
    let half = width / 2;
    if (j < half) ^ (i < half) {
        CellDiagonal::Rising
    } else {
        CellDiagonal::Falling
    }
}

/// Build the triangle index buffer for a `width × width` grid.
///
/// Returns `6 * (width - 1)²` indices. Every triangle winds so that
/// `(v1 - v0) × (v2 - v0)` points away from the sphere center.
#[must_use]
pub fn triangulate(width: usize) -> Vec<u32> {
    debug_assert!(width >= 3 && width % 2 == 1, "width {width} must be odd and >= 3");
    let cells = width - 1;
    let w = width as u32;
    let mut indices = Vec::with_capacity(6 * cells * cells);

    for j in 0..cells {
        for i in 0..cells {
            let at = (j * width + i) as u32;
            let above = at + w;

            match cell_diagonal(i, j, width) {
                CellDiagonal::Rising => indices.extend_from_slice(&[
                    at,
                    above,
                    above + 1,
                    at,
                    above + 1,
                    at + 1,
                ]),
                CellDiagonal::Falling => indices.extend_from_slice(&[
                    at,
                    above,
                    at + 1,
                    at + 1,
                    above,
                    above + 1,
                ]),
            }
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use octasphere_grid::{GridCoord, grid_to_sphere, grid_width};
    use std::collections::HashMap;

    #[test]
    fn test_index_count() {
        for level in 0..5 {
            let width = grid_width(level);
            let indices = triangulate(width);
            assert_eq!(indices.len(), 6 * (width - 1) * (width - 1));
            assert_eq!(indices.len() % 3, 0);
        }
    }

    #[test]
    fn test_indices_in_range() {
        let width = grid_width(3);
        let max = (width * width) as u32;
        assert!(triangulate(width).iter().all(|&i| i < max));
    }

    #[test]
    fn test_level_zero_layout() {
        // Cell (0, 0) falls, cell (1, 0) rises.
        let indices = triangulate(3);
        assert_eq!(&indices[0..6], &[0, 3, 1, 1, 3, 4]);
        assert_eq!(&indices[6..12], &[1, 4, 5, 1, 5, 2]);
    }

    #[test]
    fn test_quadrant_diagonals() {
        let width = 5;
        assert_eq!(cell_diagonal(0, 0, width), CellDiagonal::Falling);
        assert_eq!(cell_diagonal(3, 0, width), CellDiagonal::Rising);
        assert_eq!(cell_diagonal(0, 3, width), CellDiagonal::Rising);
        assert_eq!(cell_diagonal(3, 3, width), CellDiagonal::Falling);
    }

    #[test]
    fn test_diagonals_flip_under_mirroring() {
        let width = grid_width(3);
        let last = width - 2;
        for j in 0..=last {
            for i in 0..=last {
                let here = cell_diagonal(i, j, width);
                assert_ne!(here, cell_diagonal(last - i, j, width), "x mirror of ({i}, {j})");
                assert_ne!(here, cell_diagonal(i, last - j, width), "z mirror of ({i}, {j})");
                assert_eq!(here, cell_diagonal(last - i, last - j, width), "point mirror of ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_each_edge_shared_by_at_most_two_triangles() {
        let width = grid_width(2);
        let indices = triangulate(width);
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for tri in indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                *edges.entry((a.min(b), a.max(b))).or_default() += 1;
            }
        }
        assert!(edges.values().all(|&n| n <= 2));
    }

    #[test]
    fn test_winding_faces_outward_on_unit_sphere() {
        for level in 0..4 {
            let width = grid_width(level);
            let positions: Vec<DVec3> = GridCoord::iter(width)
                .map(|c| grid_to_sphere(c, width))
                .collect();
            for tri in triangulate(width).chunks_exact(3) {
                let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| positions[i as usize]);
                let normal = (b - a).cross(c - a);
                let centroid = (a + b + c) / 3.0;
                assert!(
                    normal.dot(centroid) > 0.0,
                    "Triangle {tri:?} at level {level} winds inward"
                );
            }
        }
    }
}
