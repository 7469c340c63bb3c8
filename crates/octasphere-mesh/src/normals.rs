//! Seam-aware smooth vertex normals.
//!
//! The flat grid stores some sphere points more than once: each border vertex
//! `(x, 0)` folds onto the same point as `(width - 1 - x, 0)` (likewise for the
//! other three borders), and all four corners fold onto the down pole. Plain
//! per-index accumulation would give those copies different normals and leave
//! a visible crease along every fold line. Every face contribution to a border
//! vertex is therefore also added to each of its folded twins, so all copies
//! end up with the same sum.

use glam::DVec3;
use octasphere_grid::GridCoord;

/// Errors produced while building vertex normals.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// A vertex received no usable face contributions.
    #[error("vertex {index} has a zero or non-finite accumulated normal")]
    DegenerateNormal {
        /// Flat index of the offending vertex.
        index: usize,
    },
}

/// Unnormalized face normal `(b - a) × (c - a)`. Its length is twice the
/// triangle area, so summing these weights faces by area.
#[inline]
#[must_use]
pub fn face_normal(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    (b - a).cross(c - a)
}

/// Flat indices that fold onto the same (or mirrored) sphere point as `index`.
///
/// - bottom/top border: the x mirror, unless `x` is the middle column
/// - left/right border: the z mirror, unless `z` is the middle row
/// - corners: additionally the diagonally opposite corner
///
/// Interior vertices have no twins.
pub fn seam_mirrors(index: usize, width: usize) -> impl Iterator<Item = usize> {
    let coord = GridCoord::from_index(index, width);
    let x_twin = (coord.is_z_border(width) && coord.x != width - 1 - coord.x)
        .then(|| coord.mirror_x(width).to_index(width));
    let z_twin = (coord.is_x_border(width) && coord.z != width - 1 - coord.z)
        .then(|| coord.mirror_z(width).to_index(width));
    let opposite = coord
        .is_corner(width)
        .then(|| coord.mirror_x(width).mirror_z(width).to_index(width));

    [x_twin, z_twin, opposite].into_iter().flatten()
}

/// Every `(vertex, twin)` pair of the grid, in flat index order.
pub fn seam_pairs(width: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..width * width).flat_map(move |i| seam_mirrors(i, width).map(move |twin| (i, twin)))
}

/// Sum area-weighted face normals into per-vertex accumulators, including the
/// contributions each border vertex shares with its folded twins.
///
/// `positions` holds `width²` vertices in flat index order.
#[must_use]
pub fn accumulate_normals(positions: &[DVec3], indices: &[u32], width: usize) -> Vec<DVec3> {
    debug_assert_eq!(positions.len(), width * width);
    let mut sums = vec![DVec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let corners = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let normal = face_normal(
            positions[corners[0]],
            positions[corners[1]],
            positions[corners[2]],
        );

        for &corner in &corners {
            sums[corner] += normal;
        }
        for &corner in &corners {
            for twin in seam_mirrors(corner, width) {
                sums[twin] += normal;
            }
        }
    }

    sums
}

/// Normalize accumulated normals to unit length.
///
/// Fails on the first vertex whose sum is zero or non-finite.
pub fn normalize_normals(sums: Vec<DVec3>) -> Result<Vec<DVec3>, MeshError> {
    sums.into_iter()
        .enumerate()
        .map(|(index, sum)| {
            sum.try_normalize()
                .ok_or(MeshError::DegenerateNormal { index })
        })
        .collect()
}
