//! Multi-octave radial displacement of projected sphere directions.
//!
//! Each grid direction is pushed outward or inward by a fractal sum of noise
//! octaves, where octave `i` is sampled at frequency `2^i` and weighted by
//! `1 / 2^i`. The number of octaves equals the grid subdivision level, so finer
//! grids also receive finer relief.

use glam::DVec3;
use octasphere_grid::GridParams;
use serde::{Deserialize, Serialize};

use crate::{NoiseSource, SeededNoise};

/// Default weight of the fractal sum in the radius factor.
pub const DEFAULT_BLEND: f64 = 0.147;

/// Tunable constants of the displacement formula.
///
/// The radius factor is `1 + blend * (n - bias)`, where `n` is the fractal
/// noise sum. `bias = 0` keeps the base sphere at `size` wherever the noise is
/// zero; `bias = 1` shrinks the base sphere to `1 - blend` and lets positive
/// noise raise terrain back toward `size`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplacementSettings {
    /// Weight of the fractal noise sum.
    pub blend: f64,
    /// Offset subtracted from the fractal sum before blending.
    pub bias: f64,
}

impl Default for DisplacementSettings {
    fn default() -> Self {
        Self {
            blend: DEFAULT_BLEND,
            bias: 0.0,
        }
    }
}

/// Displaces unit directions for one rebuild.
pub struct DisplacementField<'a> {
    noise: SeededNoise<'a>,
    octaves: u32,
    size: f64,
    settings: DisplacementSettings,
}

impl<'a> DisplacementField<'a> {
    /// Bind a noise source to the octave count, size and seed of `params`.
    pub fn new<N: NoiseSource + ?Sized>(
        noise: &'a N,
        params: &GridParams,
        settings: DisplacementSettings,
    ) -> Self {
        Self {
            noise: noise.seeded(params.seed),
            octaves: params.level,
            size: params.size,
            settings,
        }
    }

    /// Fractal noise sum at `direction`. Zero when there are no octaves.
    pub fn fractal(&self, direction: DVec3) -> f64 {
        let mut total = 0.0;
        let mut scale = 1.0;

        for _ in 0..self.octaves {
            total += (self.noise)(direction * scale) / scale;
            scale *= 2.0;
        }

        total
    }

    /// Radius multiplier relative to `size` at `direction`.
    pub fn radius_factor(&self, direction: DVec3) -> f64 {
        1.0 + self.settings.blend * (self.fractal(direction) - self.settings.bias)
    }

    /// Final vertex position for a unit `direction`.
    pub fn displace(&self, direction: DVec3) -> DVec3 {
        direction * self.size * self.radius_factor(direction)
    }

    /// Upper bound of `|fractal|` for a source bounded by 1: `Σ 1/2^i`.
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        for _ in 0..self.octaves {
            sum += amp;
            amp *= 0.5;
        }
        sum
    }

    /// Number of octaves summed per sample.
    pub fn octaves(&self) -> u32 {
        self.octaves
    }
}
