use serde::{Deserialize, Serialize};

use crate::ExportError;

// Pixel grid and its mapping into noise space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterSpec {
    pub width: u32,
    pub height: u32,
    pub scale: f64, // noise-space distance between neighbouring pixels
}

impl RasterSpec {
    pub fn new(width: u32, height: u32, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        if self.width == 0 || self.height == 0 {
            return Err(ExportError::EmptyRaster {
                width: self.width,
                height: self.height,
            });
        }
        if !self.scale.is_finite() {
            return Err(ExportError::InvalidScale(self.scale));
        }
        Ok(())
    }

    // Noise-space coordinate of pixel (px, py)
    #[inline]
    pub fn to_noise_space(&self, px: u32, py: u32) -> (f64, f64) {
        (px as f64 * self.scale, py as f64 * self.scale)
    }
}

impl Default for RasterSpec {
    fn default() -> Self {
        Self::new(512, 512, 0.02)
    }
}
