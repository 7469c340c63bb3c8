//! Planet mesh rebuild pipeline and lifecycle.
//!
//! A rebuild is a synchronous, from-scratch recomputation:
//!
//! 1. Project every grid coordinate onto the unit sphere
//! 2. Displace it radially by multi-octave noise
//! 3. Triangulate the grid
//! 4. Accumulate seam-aware normals and normalize them
//! 5. Compute texture coordinates and publish the buffers
//!
//! Work grows as `width² ≈ 4^(level + 1)`: each extra level quadruples the
//! vertex count, so callers should bound `level` for interactive use.

use std::sync::Arc;
use std::time::Instant;

use octasphere_grid::{GridCoord, GridParams, MAX_LEVEL, grid_to_sphere, grid_uv};
use octasphere_mesh::{PlanetMesh, accumulate_normals, normalize_normals, triangulate};
use octasphere_terrain::{DisplacementField, DisplacementSettings, NoiseSource};
use tracing::{debug, debug_span, info, warn};

use crate::{AnnotationSink, NoopAnnotationSink, PlanetError, VertexAnnotation};

/// Options that stay fixed across rebuilds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BuilderSettings {
    /// Displacement blend constants.
    pub displacement: DisplacementSettings,
    /// Report every vertex to the annotation sink after a rebuild.
    pub emit_annotations: bool,
}

/// Run the full pipeline for `params` and return the new mesh.
///
/// Pure apart from calls into `noise`: identical inputs produce identical
/// meshes.
pub fn build_planet_mesh<N: NoiseSource + ?Sized>(
    noise: &N,
    params: &GridParams,
    displacement: DisplacementSettings,
) -> Result<PlanetMesh, PlanetError> {
    if !params.is_supported() {
        return Err(PlanetError::LevelTooLarge {
            level: params.level,
            max: MAX_LEVEL,
        });
    }
    // The published buffer stores f32 positions.
    if !(params.size.is_finite() && params.size > 0.0 && params.size <= f64::from(f32::MAX)) {
        return Err(PlanetError::InvalidSize { size: params.size });
    }

    let width = params.width();
    let field = DisplacementField::new(noise, params, displacement);

    let mut positions = Vec::with_capacity(params.vertex_count());
    let mut uvs = Vec::with_capacity(params.vertex_count());

    for coord in GridCoord::iter(width) {
        let position = field.displace(grid_to_sphere(coord, width));
        if !position.is_finite() || !position.as_vec3().is_finite() {
            return Err(PlanetError::NonFinitePosition {
                x: coord.x,
                z: coord.z,
                position: position.to_array(),
            });
        }
        positions.push(position);
        uvs.push(grid_uv(coord, width));
    }

    // Normals only depend on direction, and unit scale keeps the face
    // cross products clear of f64 underflow and overflow at extreme sizes.
    let unit_positions: Vec<_> = positions.iter().map(|p| *p / params.size).collect();
    let indices = triangulate(width);
    let normals = normalize_normals(accumulate_normals(&unit_positions, &indices, width))?;

    Ok(PlanetMesh::new(width, &positions, &normals, &uvs, indices))
}

/// Owns the published planet mesh and rebuilds it on request.
///
/// Holds either no mesh or the mesh from the last successful rebuild.
/// [`PlanetMeshBuilder::rebuild`] takes `&mut self`, so rebuilds on one
/// builder never overlap. Published meshes are shared through [`Arc`]:
/// consumers may keep reading an old mesh after a newer one is published.
pub struct PlanetMeshBuilder<N: NoiseSource, S: AnnotationSink = NoopAnnotationSink> {
    noise: N,
    settings: BuilderSettings,
    sink: S,
    mesh: Option<Arc<PlanetMesh>>,
    params: Option<GridParams>,
    labels_visible: bool,
}

impl<N: NoiseSource> PlanetMeshBuilder<N> {
    /// Create an idle builder with no mesh and no annotation sink.
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            settings: BuilderSettings::default(),
            sink: NoopAnnotationSink,
            mesh: None,
            params: None,
            labels_visible: false,
        }
    }
}

impl<N: NoiseSource, S: AnnotationSink> PlanetMeshBuilder<N, S> {
    /// Replace the builder settings.
    pub fn with_settings(mut self, settings: BuilderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Route vertex annotations to `sink`.
    pub fn with_annotation_sink<T: AnnotationSink>(self, sink: T) -> PlanetMeshBuilder<N, T> {
        PlanetMeshBuilder {
            noise: self.noise,
            settings: self.settings,
            sink,
            mesh: self.mesh,
            params: self.params,
            labels_visible: self.labels_visible,
        }
    }

    /// Start from an existing mesh, e.g. one kept by the host between sessions.
    pub fn with_mesh(mut self, mesh: Arc<PlanetMesh>) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Rebuild from raw inputs. A negative `level` is treated as 0.
    pub fn rebuild(
        &mut self,
        level: i32,
        size: f64,
        seed: i64,
    ) -> Result<Arc<PlanetMesh>, PlanetError> {
        if level < 0 {
            debug!(level, "negative level clamped to 0");
        }
        self.rebuild_with(GridParams::new(level, size, seed))
    }

    /// Rebuild from a parameter set and publish the result.
    ///
    /// On error nothing is published, no annotations are emitted and the
    /// previous mesh is left in place.
    pub fn rebuild_with(&mut self, params: GridParams) -> Result<Arc<PlanetMesh>, PlanetError> {
        let span = debug_span!(
            "rebuild",
            level = params.level,
            size = params.size,
            seed = params.seed
        );
        let _enter = span.enter();
        let started = Instant::now();

        let mesh = Arc::new(build_planet_mesh(
            &self.noise,
            &params,
            self.settings.displacement,
        )?);

        self.mesh = Some(Arc::clone(&mesh));
        self.params = Some(params);

        // Annotations from the previous mesh are stale either way.
        self.sink.clear();
        if self.settings.emit_annotations {
            self.emit_annotations(&mesh);
        }

        info!(
            "Done rebuilding: width {}, {} vertices, {} triangles in {:.2?}",
            mesh.width(),
            mesh.vertex_count(),
            mesh.triangle_count(),
            started.elapsed()
        );

        Ok(mesh)
    }

    fn emit_annotations(&mut self, mesh: &PlanetMesh) {
        let width = mesh.width();
        let mut failed = 0_usize;
        for coord in GridCoord::iter(width) {
            let annotation = VertexAnnotation {
                grid_x: coord.x,
                grid_z: coord.z,
                index: coord.to_index(width),
                position: mesh.position_at(coord),
                labels_visible: self.labels_visible,
            };
            if let Err(err) = self.sink.annotate(annotation) {
                debug!(%err, "annotation dropped");
                failed += 1;
            }
        }

        if failed > 0 {
            warn!("{failed} of {} vertex annotations failed", mesh.vertex_count());
        }
    }

    /// Flip label visibility on every emitted annotation. Returns how many
    /// annotations were updated.
    pub fn toggle_labels(&mut self) -> usize {
        self.labels_visible = !self.labels_visible;
        let toggled = self.sink.set_labels_visible(self.labels_visible);
        info!("Toggled {toggled} annotations");
        toggled
    }

    /// Whether annotation labels are currently shown.
    pub fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    /// The published mesh, if any.
    pub fn mesh(&self) -> Option<&Arc<PlanetMesh>> {
        self.mesh.as_ref()
    }

    /// Parameters of the last successful rebuild.
    pub fn params(&self) -> Option<GridParams> {
        self.params
    }

    /// Release the published mesh, returning it.
    pub fn clear(&mut self) -> Option<Arc<PlanetMesh>> {
        self.params = None;
        self.mesh.take()
    }

    /// Current settings.
    pub fn settings(&self) -> &BuilderSettings {
        &self.settings
    }

    /// Enable or disable annotation output for future rebuilds.
    pub fn set_emit_annotations(&mut self, emit: bool) {
        self.settings.emit_annotations = emit;
    }

    /// The annotation sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The noise source.
    pub fn noise(&self) -> &N {
        &self.noise
    }
}
