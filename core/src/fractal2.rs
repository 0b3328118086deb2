use serde::{Deserialize, Serialize};

use crate::NoiseGenerator;
use crate::error::NoiseError;
use crate::value2::ValueNoise2D;

/// Octave parameters for fractal Brownian motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FbmConfig {
    /// Number of octaves to sum, at least 1.
    pub octaves: u32,
    /// Frequency multiplier per octave.
    pub lacunarity: f64,
    /// Amplitude multiplier per octave.
    pub gain: f64,
}

impl Default for FbmConfig {
    fn default() -> Self {
        Self {
            octaves: 5,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

impl FbmConfig {
    pub fn new(octaves: u32, lacunarity: f64, gain: f64) -> Self {
        Self {
            octaves,
            lacunarity,
            gain,
        }
    }

    /// Reject parameters that would make the normalised sum undefined.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves == 0 {
            return Err(NoiseError::ZeroOctaves);
        }
        if !self.lacunarity.is_finite() || self.lacunarity <= 0.0 {
            return Err(NoiseError::InvalidLacunarity(self.lacunarity));
        }
        if !self.gain.is_finite() || self.gain <= 0.0 {
            return Err(NoiseError::InvalidGain(self.gain));
        }
        // Last octave's frequency and an upper bound on the amplitude sum
        // must stay finite, or samples turn into NaN
        let last = i32::try_from(self.octaves - 1).unwrap_or(i32::MAX);
        let last_freq = self.lacunarity.powi(last);
        let amp_bound = self.octaves as f64 * self.gain.powi(last).max(1.0);
        if !last_freq.is_finite() || !amp_bound.is_finite() {
            return Err(NoiseError::OctaveOverflow {
                octaves: self.octaves,
            });
        }
        Ok(())
    }
}

// 2D fBm built on top of value noise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FbmValueNoise2D {
    base: ValueNoise2D,
    config: FbmConfig,
}

impl FbmValueNoise2D {
    pub fn new(seed: u32, config: FbmConfig) -> Result<Self, NoiseError> {
        config.validate()?;
        Ok(Self {
            base: ValueNoise2D::new(seed),
            config,
        })
    }

    pub fn config(&self) -> &FbmConfig {
        &self.config
    }

    pub fn base(&self) -> &ValueNoise2D {
        &self.base
    }
}

impl NoiseGenerator for FbmValueNoise2D {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let mut amplitude = 1.0; // weight of the current octave
        let mut freq = 1.0;
        let mut total = 0.0;
        let mut amp_sum = 0.0; // sum of octave weights, for normalisation

        for _ in 0..self.config.octaves {
            total += self.base.sample(x * freq, y * freq) * amplitude;
            amp_sum += amplitude;
            freq *= self.config.lacunarity;
            amplitude *= self.config.gain;
        }

        // Weighted mean of [0, 1] samples stays in [0, 1]
        total / amp_sum
    }
}
