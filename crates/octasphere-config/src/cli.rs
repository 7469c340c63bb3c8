//! Command-line argument parsing for the planet generator.

use std::path::PathBuf;

use clap::Parser;
use octasphere_terrain::NoiseKind;

use crate::Config;

/// Octasphere command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "octasphere", about = "Octahedral planet mesh generator")]
pub struct CliArgs {
    /// Subdivision level (grid width is `2^(level + 1) + 1`).
    #[arg(long, allow_negative_numbers = true)]
    pub level: Option<i32>,

    /// Base planet radius.
    #[arg(long)]
    pub size: Option<f64>,

    /// Noise seed.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Noise generator (open-simplex, super-simplex, perlin, flat).
    #[arg(long)]
    pub noise: Option<NoiseKind>,

    /// Weight of the fractal noise sum in the radius factor.
    #[arg(long)]
    pub blend: Option<f64>,

    /// Report every vertex to the annotation sink after the rebuild.
    #[arg(long)]
    pub annotations: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(level) = args.level {
            self.planet.level = level;
        }
        if let Some(size) = args.size {
            self.planet.size = size;
        }
        if let Some(seed) = args.seed {
            self.planet.seed = seed;
        }
        if let Some(kind) = args.noise {
            self.noise.kind = kind;
        }
        if let Some(blend) = args.blend {
            self.noise.blend = blend;
        }
        if let Some(emit) = args.annotations {
            self.annotations.emit = emit;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            level: Some(6),
            seed: Some(-3),
            noise: Some(NoiseKind::Perlin),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.planet.level, 6);
        assert_eq!(config.planet.seed, -3);
        assert_eq!(config.noise.kind, NoiseKind::Perlin);
        // Non-overridden fields retain defaults
        assert_eq!(config.planet.size, 1.0);
        assert!(!config.annotations.emit);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "octasphere",
            "--level",
            "3",
            "--seed",
            "-12",
            "--noise",
            "super-simplex",
            "--annotations",
            "true",
        ])
        .unwrap();
        assert_eq!(args.level, Some(3));
        assert_eq!(args.seed, Some(-12));
        assert_eq!(args.noise, Some(NoiseKind::SuperSimplex));
        assert_eq!(args.annotations, Some(true));
        assert!(args.size.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_noise() {
        let result = CliArgs::try_parse_from(["octasphere", "--noise", "worley"]);
        assert!(result.is_err(), "unknown generator names must not parse");
    }
}
