//! Planet generation error types.

use octasphere_mesh::MeshError;

/// Errors that abort a rebuild. The previously published mesh stays valid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanetError {
    /// The grid for this level would not fit `u32` vertex indices.
    #[error("subdivision level {level} exceeds the maximum of {max}")]
    LevelTooLarge {
        /// Requested level.
        level: u32,
        /// Highest supported level.
        max: u32,
    },

    /// Planet size was zero, negative, not finite, or beyond `f32` range.
    #[error("planet size must be positive, finite and at most f32::MAX, got {size}")]
    InvalidSize {
        /// Requested size.
        size: f64,
    },

    /// The noise source produced NaN or infinity for a vertex.
    #[error("non-finite displaced position {position:?} at grid ({x}, {z})")]
    NonFinitePosition {
        /// Grid column.
        x: usize,
        /// Grid row.
        z: usize,
        /// The offending position.
        position: [f64; 3],
    },

    /// Normal generation failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors reported by an annotation sink. These never abort a rebuild.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnnotationError {
    /// The sink refused the annotation.
    #[error("annotation for vertex {index} rejected: {reason}")]
    Rejected {
        /// Flat vertex index.
        index: usize,
        /// Why the sink refused it.
        reason: String,
    },
}
