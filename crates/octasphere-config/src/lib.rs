//! Configuration for the octasphere planet generator.
//!
//! Settings persist to disk as `config.ron`, tolerate missing or unknown
//! fields, and can be overridden from the command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{AnnotationConfig, CONFIG_FILE, Config, DebugConfig, NoiseConfig, PlanetConfig};
pub use error::ConfigError;
