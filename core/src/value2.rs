use crate::NoiseGenerator;
use crate::hash::hash2d;
use crate::utils::{fade, lattice, lerp, to_unit};

// 2D value noise: one random scalar per lattice point, blended with the fade curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueNoise2D {
    seed: u32,
}

impl ValueNoise2D {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    // Raw value attached to lattice point (ix, iy), in [0, 1]
    #[inline]
    pub fn lattice_value(&self, ix: i32, iy: i32) -> f64 {
        to_unit(hash2d(ix, iy, self.seed))
    }
}

impl NoiseGenerator for ValueNoise2D {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let (x0, fx0) = lattice(x);
        let (y0, fy0) = lattice(y);
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);

        let v00 = self.lattice_value(x0, y0);
        let v10 = self.lattice_value(x1, y0);
        let v01 = self.lattice_value(x0, y1);
        let v11 = self.lattice_value(x1, y1);

        // Faded offsets, not raw ones, keep the surface smooth across cells
        let u = fade(x - fx0);
        let v = fade(y - fy0);

        let top = lerp(v00, v10, u);
        let bottom = lerp(v01, v11, u);
        // Convex combination of [0, 1] values, no clamp needed
        lerp(top, bottom, v)
    }
}
