//! Planet relief: injectable coherent noise sources and the multi-octave
//! displacement field that perturbs projected grid directions.

mod displacement;
mod noise_source;

pub use displacement::{DEFAULT_BLEND, DisplacementField, DisplacementSettings};
pub use noise_source::{NoiseKind, NoiseSource, ParseNoiseKindError, SeededNoise, fold_seed};
