//! Planet mesh generation: runs projection, displacement, triangulation and
//! seam-aware normals into a complete mesh buffer, and owns the rebuild
//! lifecycle.

mod annotation;
mod builder;
mod error;

pub use annotation::{
    AnnotationSink, CollectingAnnotationSink, NoopAnnotationSink, TracingAnnotationSink,
    VertexAnnotation,
};
pub use builder::{BuilderSettings, PlanetMeshBuilder, build_planet_mesh};
pub use error::{AnnotationError, PlanetError};
