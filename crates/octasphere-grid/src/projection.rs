//! Octahedral grid-to-sphere projection.
//!
//! The square grid is an unfolded octahedron: the center maps to the up pole
//! `(0, 1, 0)`, the edge midpoints to four equatorial points, and the outer
//! border folds back over the lower hemisphere so that all four corners meet
//! at the down pole `(0, -1, 0)`.

use glam::DVec3;

use crate::GridCoord;

/// Map a grid coordinate to `[-1, 1]²` and fold it onto the octahedron surface
/// `|x| + |y| + |z| = 1`.
///
/// The result is not normalized.
#[inline]
#[must_use]
pub fn grid_to_octahedron(coord: GridCoord, width: usize) -> DVec3 {
    let scale = 2.0 / (width - 1) as f64;
    let xx = coord.x as f64 * scale - 1.0;
    let zz = coord.z as f64 * scale - 1.0;
    let yy = 1.0 - xx.abs() - zz.abs();

    // Outside the inner diamond (yy < 0) the point belongs to the lower
    // hemisphere and is pushed back toward the axes.
    let t = yy.min(0.0);

    DVec3::new(xx + xx.signum() * t, yy, zz + zz.signum() * t)
}

/// Project a grid coordinate onto the unit sphere.
///
/// The folded octahedron point is never zero for coordinates inside the
/// grid, so the normalization is always defined.
#[inline]
#[must_use]
pub fn grid_to_sphere(coord: GridCoord, width: usize) -> DVec3 {
    grid_to_octahedron(coord, width).normalize()
}

/// Texture coordinate of a grid vertex: `(x / (width - 1), z / (width - 1))`.
#[inline]
#[must_use]
pub fn grid_uv(coord: GridCoord, width: usize) -> [f64; 2] {
    let span = (width - 1) as f64;
    [coord.x as f64 / span, coord.z as f64 / span]
}
