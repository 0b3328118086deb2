use crate::NoiseGenerator;
use crate::hash::hash2d;
use crate::utils::{clamp_unit, fade, lattice, lerp};

// Component of the diagonal unit gradients, kept at this precision so
// output matches previously generated fields bit for bit
const DIAG: f64 = 0.70710678;

// Eight directions at 45° steps, indexed by the low three hash bits
const GRADIENTS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (DIAG, DIAG),
    (-DIAG, DIAG),
    (DIAG, -DIAG),
    (-DIAG, -DIAG),
];

// 2D gradient (Perlin) noise, remapped to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerlinNoise2D {
    seed: u32,
}

impl PerlinNoise2D {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    // Unit gradient attached to lattice point (ix, iy)
    #[inline]
    pub fn gradient(&self, ix: i32, iy: i32) -> (f64, f64) {
        GRADIENTS[(hash2d(ix, iy, self.seed) & 7) as usize]
    }

    // Dot product of the corner gradient with the offset from the corner to (x, y)
    #[inline]
    fn corner(&self, ix: i32, iy: i32, dx: f64, dy: f64) -> f64 {
        let (gx, gy) = self.gradient(ix, iy);
        gx * dx + gy * dy
    }

    // Raw interpolated value, roughly in [-1, 1]
    pub fn raw(&self, x: f64, y: f64) -> f64 {
        let (x0, fx0) = lattice(x);
        let (y0, fy0) = lattice(y);
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);

        let sx = fade(x - fx0);
        let sy = fade(y - fy0);

        let n00 = self.corner(x0, y0, x - fx0, y - fy0);
        let n10 = self.corner(x1, y0, x - (fx0 + 1.0), y - fy0);
        let n01 = self.corner(x0, y1, x - fx0, y - (fy0 + 1.0));
        let n11 = self.corner(x1, y1, x - (fx0 + 1.0), y - (fy0 + 1.0));

        let top = lerp(n00, n10, sx);
        let bottom = lerp(n01, n11, sx);
        lerp(top, bottom, sy)
    }
}

impl NoiseGenerator for PerlinNoise2D {
    fn sample(&self, x: f64, y: f64) -> f64 {
        clamp_unit(self.raw(x, y) * 0.5 + 0.5)
    }
}
