//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use octasphere_terrain::{DEFAULT_BLEND, DisplacementSettings, NoiseKind};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Planet rebuild inputs.
    pub planet: PlanetConfig,
    /// Noise generator and displacement constants.
    pub noise: NoiseConfig,
    /// Per-vertex debug annotations.
    pub annotations: AnnotationConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Planet rebuild inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Subdivision level. Negative values are treated as 0. Vertex count
    /// grows as `4^(level + 1)`.
    pub level: i32,
    /// Base planet radius.
    pub size: f64,
    /// Noise seed.
    pub seed: i64,
}

/// Noise generator selection and displacement constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoiseConfig {
    /// Which generator drives the relief.
    pub kind: NoiseKind,
    /// Weight of the fractal noise sum in the radius factor.
    pub blend: f64,
    /// Offset subtracted from the fractal sum before blending.
    pub bias: f64,
}

/// Per-vertex annotation output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Report every vertex to the annotation sink after a rebuild.
    pub emit: bool,
    /// Show vertex labels right after the rebuild.
    pub show_labels: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory for JSON log files in debug builds. Defaults to `logs/`
    /// inside the config directory.
    pub log_dir: Option<PathBuf>,
}

impl NoiseConfig {
    /// Displacement constants for the planet builder.
    pub fn displacement(&self) -> DisplacementSettings {
        DisplacementSettings {
            blend: self.blend,
            bias: self.bias,
        }
    }
}

// --- Default implementations ---

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            level: 4,
            size: 1.0,
            seed: 42,
        }
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            kind: NoiseKind::default(),
            blend: DEFAULT_BLEND,
            bias: 0.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Default config directory, e.g. `~/.config/octasphere` on Linux.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("octasphere"))
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Whether `other` requires a planet rebuild to take effect.
    pub fn needs_rebuild(&self, other: &Config) -> bool {
        self.planet != other.planet || self.noise != other.noise
    }
}
