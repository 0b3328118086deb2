// core holds the hash kernel and the four 2D noise generators
pub mod error;
pub mod fractal2;
pub mod hash;
pub mod kind;
pub mod perlin2;
pub mod utils;
pub mod value2;
pub mod worley2;

pub use error::NoiseError;
pub use fractal2::{FbmConfig, FbmValueNoise2D};
pub use hash::{hash2d, hash32};
pub use kind::NoiseKind;
pub use perlin2::PerlinNoise2D;
pub use value2::ValueNoise2D;
pub use worley2::WorleyNoise2D;

/// A deterministic 2D scalar field.
///
/// `sample` is pure: the same generator and coordinate always give the
/// same value, in `[0.0, 1.0]`, and calls may run concurrently.
pub trait NoiseGenerator {
    fn sample(&self, x: f64, y: f64) -> f64;
}

impl<T: NoiseGenerator + ?Sized> NoiseGenerator for &T {
    fn sample(&self, x: f64, y: f64) -> f64 {
        (**self).sample(x, y)
    }
}

impl<T: NoiseGenerator + ?Sized> NoiseGenerator for Box<T> {
    fn sample(&self, x: f64, y: f64) -> f64 {
        (**self).sample(x, y)
    }
}
