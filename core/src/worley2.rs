use crate::NoiseGenerator;
use crate::hash::{hash2d, hash32};
use crate::utils::{clamp_unit, lattice, to_unit};

// Decorrelates the y offset from the x offset of a feature point
const FEATURE_Y_SALT: u32 = 0x68bc_21eb;

// Normalisation divisor for the nearest-feature distance.
// A heuristic bound for a 3×3 search, results past it are clamped.
const MAX_DISTANCE: f64 = 1.732_050_807_568_877_2; // sqrt(3)

// Larger than any squared distance reachable inside the 3×3 neighbourhood
const FAR: f64 = 1e9;

// 2D Worley (cellular) noise: distance to the nearest feature point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorleyNoise2D {
    seed: u32,
    inverted: bool,
}

impl WorleyNoise2D {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            inverted: false,
        }
    }

    // Same field flipped to 1 - d, bright at feature points
    pub fn inverted(self) -> Self {
        Self {
            inverted: true,
            ..self
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    // Offset of the feature point from the cell origin, each axis in [0, 1]
    #[inline]
    fn feature_offset(&self, ix: i32, iy: i32) -> (f64, f64) {
        let h = hash2d(ix, iy, self.seed);
        (to_unit(hash32(h)), to_unit(hash32(h ^ FEATURE_Y_SALT)))
    }

    pub fn feature_point(&self, ix: i32, iy: i32) -> (f64, f64) {
        let (fx, fy) = self.feature_offset(ix, iy);
        (ix as f64 + fx, iy as f64 + fy)
    }

    // Smallest squared distance from (x, y) to the features of the 3×3 block around it
    fn nearest_dist2(&self, x: f64, y: f64) -> f64 {
        let (xi, xf) = lattice(x);
        let (yi, yf) = lattice(y);

        let mut min_dist2 = FAR;
        for j in -1..=1 {
            for i in -1..=1 {
                let (fx, fy) = self.feature_offset(xi.wrapping_add(i), yi.wrapping_add(j));
                let dx = (xf + i as f64 + fx) - x;
                let dy = (yf + j as f64 + fy) - y;
                let d2 = dx * dx + dy * dy;
                if d2 < min_dist2 {
                    min_dist2 = d2;
                }
            }
        }
        min_dist2
    }
}

impl NoiseGenerator for WorleyNoise2D {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let v = clamp_unit(self.nearest_dist2(x, y).sqrt() / MAX_DISTANCE);
        if self.inverted { 1.0 - v } else { v }
    }
}
