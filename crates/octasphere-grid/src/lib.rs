//! Octahedral grid geometry: grid parameters, flat vertex indexing, and the
//! grid-to-sphere octahedral fold.

mod grid_coord;
mod params;
mod projection;

pub use grid_coord::GridCoord;
pub use params::{GridParams, MAX_LEVEL, checked_grid_width, grid_width};
pub use projection::{grid_to_octahedron, grid_to_sphere, grid_uv};
