//! Deterministic coherent noise sources.
//!
//! The displacement field only needs a pure function of `(seed, x, y, z)`.
//! [`NoiseSource`] is that contract; [`NoiseKind`] backs it with the
//! generators from the `noise` crate, and any matching closure works too.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use noise::{NoiseFn, OpenSimplex, Perlin, SuperSimplex};
use serde::{Deserialize, Serialize};

/// A deterministic scalar noise function of a seed and a 3D point.
///
/// Implementations must return the same value for the same inputs and must
/// not carry mutable state between calls.
pub trait NoiseSource {
    /// Sample the noise field for `seed` at `point`.
    fn sample(&self, seed: i64, point: DVec3) -> f64;

    /// Fix the seed once and return a sampler over points.
    ///
    /// Must agree with [`NoiseSource::sample`] for every point. Sources with
    /// seed-dependent setup override this to do that setup once per rebuild.
    fn seeded(&self, seed: i64) -> SeededNoise<'_> {
        Box::new(move |point: DVec3| self.sample(seed, point))
    }
}

/// A noise field with its seed already applied.
pub type SeededNoise<'a> = Box<dyn Fn(DVec3) -> f64 + 'a>;

impl<F> NoiseSource for F
where
    F: Fn(i64, DVec3) -> f64,
{
    #[inline]
    fn sample(&self, seed: i64, point: DVec3) -> f64 {
        self(seed, point)
    }
}

/// Fold a 64-bit seed into the 32-bit seed the `noise` generators accept.
///
/// Both halves contribute, so seeds differing only in the high word still
/// produce different fields.
#[inline]
#[must_use]
pub fn fold_seed(seed: i64) -> u32 {
    let bits = seed as u64;
    (bits ^ (bits >> 32)) as u32
}

/// Built-in noise generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NoiseKind {
    /// OpenSimplex gradient noise.
    #[default]
    OpenSimplex,
    /// SuperSimplex, smoother with fewer directional artifacts.
    SuperSimplex,
    /// Classic Perlin gradient noise.
    Perlin,
    /// Always zero. Produces a perfect sphere at any level.
    Flat,
}

impl NoiseKind {
    /// Every built-in kind.
    pub const ALL: [NoiseKind; 4] = [
        NoiseKind::OpenSimplex,
        NoiseKind::SuperSimplex,
        NoiseKind::Perlin,
        NoiseKind::Flat,
    ];

    /// Lowercase name used in config files and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            NoiseKind::OpenSimplex => "open-simplex",
            NoiseKind::SuperSimplex => "super-simplex",
            NoiseKind::Perlin => "perlin",
            NoiseKind::Flat => "flat",
        }
    }
}

impl NoiseSource for NoiseKind {
    fn sample(&self, seed: i64, point: DVec3) -> f64 {
        self.seeded(seed)(point)
    }

    // Builds the generator's permutation table once for the whole rebuild.
    fn seeded(&self, seed: i64) -> SeededNoise<'_> {
        let seed = fold_seed(seed);
        match self {
            NoiseKind::OpenSimplex => {
                let generator = OpenSimplex::new(seed);
                Box::new(move |p: DVec3| generator.get(p.to_array()))
            }
            NoiseKind::SuperSimplex => {
                let generator = SuperSimplex::new(seed);
                Box::new(move |p: DVec3| generator.get(p.to_array()))
            }
            NoiseKind::Perlin => {
                let generator = Perlin::new(seed);
                Box::new(move |p: DVec3| generator.get(p.to_array()))
            }
            NoiseKind::Flat => Box::new(|_: DVec3| 0.0),
        }
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no [`NoiseKind`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown noise kind '{0}' (expected open-simplex, super-simplex, perlin or flat)")]
pub struct ParseNoiseKindError(pub String);

impl FromStr for NoiseKind {
    type Err = ParseNoiseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        NoiseKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized || kind.name().replace('-', "") == normalized)
            .ok_or_else(|| ParseNoiseKindError(s.to_string()))
    }
}
