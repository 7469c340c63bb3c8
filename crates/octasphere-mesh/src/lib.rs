//! Planet mesh assembly: quadrant-aware triangulation of the octahedral grid,
//! seam-aware vertex normals, and the published mesh buffer.

pub mod normals;
pub mod planet_mesh;
pub mod triangulate;

pub use normals::{
    MeshError, accumulate_normals, face_normal, normalize_normals, seam_mirrors, seam_pairs,
};
pub use planet_mesh::{PlanetMesh, PlanetVertex};
pub use triangulate::{CellDiagonal, cell_diagonal, triangulate};
