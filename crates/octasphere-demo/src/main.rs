//! Builds one planet mesh from `config.ron` plus CLI overrides and logs a
//! summary of the result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use octasphere_config::{CliArgs, Config};
use octasphere_grid::{GridCoord, GridParams};
use octasphere_mesh::PlanetMesh;
use octasphere_planet::{BuilderSettings, PlanetMeshBuilder, TracingAnnotationSink};
use tracing::{error, info};

fn report(mesh: &PlanetMesh) {
    let width = mesh.width();
    let (min_radius, max_radius) = mesh.radius_range();
    info!(
        width,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Mesh topology"
    );
    info!("Radius range: {min_radius:.6} .. {max_radius:.6}");
    info!("Max seam normal deviation: {:.3e}", mesh.max_seam_deviation());

    let center = GridCoord::new(width / 2, width / 2);
    let corner = GridCoord::new(0, 0);
    info!(
        "Up pole at {:?} (normal {:?}), down pole at {:?} (normal {:?})",
        mesh.position_at(center),
        mesh.normal_at(center),
        mesh.position_at(corner),
        mesh.normal_at(corner),
    );
    info!(
        "Buffers: {} position bytes, {} normal bytes, {} uv bytes, {} index bytes",
        mesh.position_bytes().len(),
        mesh.normal_bytes().len(),
        mesh.uv_bytes().len(),
        mesh.index_bytes().len(),
    );
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(Config::default_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config
        .debug
        .log_dir
        .clone()
        .unwrap_or_else(|| config_dir.join("logs"));
    octasphere_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        "Generating planet: level {}, size {}, seed {}, noise {}",
        config.planet.level, config.planet.size, config.planet.seed, config.noise.kind
    );

    let mut builder = PlanetMeshBuilder::new(config.noise.kind)
        .with_settings(BuilderSettings {
            displacement: config.noise.displacement(),
            emit_annotations: config.annotations.emit,
        })
        .with_annotation_sink(TracingAnnotationSink::new());

    let params = GridParams::new(config.planet.level, config.planet.size, config.planet.seed);
    let mesh = match builder.rebuild_with(params) {
        Ok(mesh) => mesh,
        Err(e) => {
            error!("Rebuild failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    report(&mesh);

    if config.annotations.emit {
        info!("Annotations emitted: {}", builder.sink().emitted());
        if config.annotations.show_labels {
            builder.toggle_labels();
        }
    }

    ExitCode::SUCCESS
}
