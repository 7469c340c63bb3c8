//! The published planet mesh buffer.
//!
//! Geometry is computed in `f64` and stored here in GPU upload format:
//! `[f32; 3]` positions and normals, `[f32; 2]` texture coordinates and `u32`
//! triangle indices, all in flat grid index order.

use glam::{DVec3, Vec3};
use octasphere_grid::GridCoord;

use crate::seam_pairs;

/// Interleaved vertex for renderers that prefer a single vertex buffer.
///
/// Layout (32 bytes total):
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..24]` normal `[f32; 3]`
///   - `[24..32]` uv `[f32; 2]`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlanetVertex {
    /// Displaced position.
    pub position: [f32; 3],
    /// Unit smooth normal.
    pub normal: [f32; 3],
    /// Texture coordinate in `[0, 1]²`.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(PlanetVertex, [u8; 32]);

/// Complete mesh output of one rebuild.
///
/// Immutable once built. Vertex attribute buffers all hold `width²` entries.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetMesh {
    width: usize,
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl PlanetMesh {
    /// Assemble a mesh from `f64` geometry.
    ///
    /// # Panics
    ///
    /// Panics if the attribute buffers do not all hold `width²` entries or the
    /// index buffer length is not a multiple of 3.
    pub fn new(
        width: usize,
        positions: &[DVec3],
        normals: &[DVec3],
        uvs: &[[f64; 2]],
        indices: Vec<u32>,
    ) -> Self {
        let count = width * width;
        assert_eq!(positions.len(), count, "position buffer must hold width² entries");
        assert_eq!(normals.len(), count, "normal buffer must hold width² entries");
        assert_eq!(uvs.len(), count, "uv buffer must hold width² entries");
        assert_eq!(indices.len() % 3, 0, "index buffer must hold whole triangles");

        Self {
            width,
            positions: positions.iter().map(|p| p.as_vec3().to_array()).collect(),
            normals: normals.iter().map(|n| n.as_vec3().to_array()).collect(),
            uvs: uvs.iter().map(|uv| [uv[0] as f32, uv[1] as f32]).collect(),
            indices,
        }
    }

    /// Grid side length this mesh was built for.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Displaced vertex positions.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Unit vertex normals.
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Texture coordinates.
    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    /// Triangle indices, three per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of the vertex at `coord`.
    pub fn position_at(&self, coord: GridCoord) -> Vec3 {
        Vec3::from(self.positions[coord.to_index(self.width)])
    }

    /// Normal of the vertex at `coord`.
    pub fn normal_at(&self, coord: GridCoord) -> Vec3 {
        Vec3::from(self.normals[coord.to_index(self.width)])
    }

    /// Texture coordinate of the vertex at `coord`.
    pub fn uv_at(&self, coord: GridCoord) -> [f32; 2] {
        self.uvs[coord.to_index(self.width)]
    }

    /// Smallest and largest vertex distance from the origin.
    pub fn radius_range(&self) -> (f32, f32) {
        self.positions
            .iter()
            .map(|p| Vec3::from(*p).length())
            .fold((f32::INFINITY, 0.0_f32), |(lo, hi), r| (lo.min(r), hi.max(r)))
    }

    /// Largest distance between the normals of any two folded twins.
    ///
    /// Zero (up to rounding) for a correctly welded mesh.
    pub fn max_seam_deviation(&self) -> f32 {
        seam_pairs(self.width)
            .map(|(a, b)| (Vec3::from(self.normals[a]) - Vec3::from(self.normals[b])).length())
            .fold(0.0, f32::max)
    }

    /// Interleave the attribute buffers into a single vertex buffer.
    pub fn interleaved(&self) -> Vec<PlanetVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((&position, &normal), &uv)| PlanetVertex {
                position,
                normal,
                uv,
            })
            .collect()
    }

    /// Position buffer as bytes for GPU upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normal buffer as bytes for GPU upload.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// UV buffer as bytes for GPU upload.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Index buffer as bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{accumulate_normals, normalize_normals, triangulate};
    use octasphere_grid::{grid_to_sphere, grid_uv};

    fn unit_sphere_mesh(width: usize) -> PlanetMesh {
        let positions: Vec<DVec3> = GridCoord::iter(width)
            .map(|c| grid_to_sphere(c, width))
            .collect();
        let uvs: Vec<[f64; 2]> = GridCoord::iter(width).map(|c| grid_uv(c, width)).collect();
        let indices = triangulate(width);
        let normals = normalize_normals(accumulate_normals(&positions, &indices, width)).unwrap();
        PlanetMesh::new(width, &positions, &normals, &uvs, indices)
    }

    #[test]
    fn test_counts() {
        let mesh = unit_sphere_mesh(5);
        assert_eq!(mesh.vertex_count(), 25);
        assert_eq!(mesh.triangle_count(), 32);
        assert_eq!(mesh.indices().len(), 96);
    }

    #[test]
    fn test_byte_views() {
        let mesh = unit_sphere_mesh(3);
        assert_eq!(mesh.position_bytes().len(), 9 * 12);
        assert_eq!(mesh.normal_bytes().len(), 9 * 12);
        assert_eq!(mesh.uv_bytes().len(), 9 * 8);
        assert_eq!(mesh.index_bytes().len(), 24 * 4);
    }

    #[test]
    fn test_interleaved_matches_buffers() {
        let mesh = unit_sphere_mesh(5);
        let vertices = mesh.interleaved();
        assert_eq!(vertices.len(), mesh.vertex_count());
        for (i, v) in vertices.iter().enumerate() {
            assert_eq!(v.position, mesh.positions()[i]);
            assert_eq!(v.normal, mesh.normals()[i]);
            assert_eq!(v.uv, mesh.uvs()[i]);
        }
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 25 * 32);
    }

    #[test]
    fn test_radius_range_of_unit_sphere() {
        let (lo, hi) = unit_sphere_mesh(9).radius_range();
        assert!((lo - 1.0).abs() < 1e-6 && (hi - 1.0).abs() < 1e-6, "range ({lo}, {hi})");
    }

    #[test]
    fn test_welded_mesh_has_no_seam_deviation() {
        assert!(unit_sphere_mesh(17).max_seam_deviation() < 1e-5);
    }

    #[test]
    fn test_lookup_by_coord() {
        let mesh = unit_sphere_mesh(5);
        let top = mesh.position_at(GridCoord::new(2, 2));
        assert!((top - Vec3::Y).length() < 1e-6, "center vertex {top:?}");
        assert_eq!(mesh.uv_at(GridCoord::new(1, 3)), [0.25, 0.75]);
    }

    #[test]
    #[should_panic(expected = "normal buffer must hold")]
    fn test_mismatched_buffers_panic() {
        let positions = vec![DVec3::Y; 9];
        let uvs = vec![[0.0; 2]; 9];
        PlanetMesh::new(3, &positions, &[DVec3::Y], &uvs, Vec::new());
    }
}
